use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Name to show in a consumer's UI, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown")
    }
}
