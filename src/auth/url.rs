use reqwest::Url;

/// Extract a session token carried in a URL, as used by email login
/// links.
///
/// Lookup order: the `token` query parameter, then the `access_token`
/// query parameter, then an `access_token` pair inside the fragment
/// (`#access_token=...`). Empty values are treated as absent. Pure
/// function of the URL; no side effects.
pub fn extract_token(url: &Url) -> Option<String> {
    let mut access_token = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "token" if !value.is_empty() => return Some(value.into_owned()),
            "access_token" if access_token.is_none() && !value.is_empty() => {
                access_token = Some(value.into_owned());
            }
            _ => {}
        }
    }
    if access_token.is_some() {
        return access_token;
    }

    // The fragment is key=value pairs in query syntax; reuse the query
    // parser rather than splitting by hand
    let fragment = url.fragment()?;
    let parsed = Url::parse(&format!("http://fragment/?{}", fragment)).ok()?;
    parsed
        .query_pairs()
        .find(|(key, value)| key == "access_token" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test URL should parse")
    }

    #[test]
    fn test_access_token_query_parameter() {
        let found = extract_token(&url("https://app.example.com/verify?access_token=abc"));
        assert_eq!(found.as_deref(), Some("abc"));
    }

    #[test]
    fn test_token_query_parameter() {
        let found = extract_token(&url("https://app.example.com/verify?token=abc"));
        assert_eq!(found.as_deref(), Some("abc"));
    }

    #[test]
    fn test_token_wins_over_access_token() {
        let found = extract_token(&url(
            "https://app.example.com/verify?access_token=second&token=first",
        ));
        assert_eq!(found.as_deref(), Some("first"));
    }

    #[test]
    fn test_fragment_access_token() {
        let found = extract_token(&url("https://app.example.com/verify#access_token=xyz"));
        assert_eq!(found.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_query_wins_over_fragment() {
        let found = extract_token(&url(
            "https://app.example.com/verify?access_token=abc#access_token=xyz",
        ));
        assert_eq!(found.as_deref(), Some("abc"));
    }

    #[test]
    fn test_no_token_anywhere() {
        let found = extract_token(&url("https://app.example.com/verify?foo=bar#section-2"));
        assert_eq!(found, None);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let found = extract_token(&url(
            "https://app.example.com/verify?token=&access_token=#access_token=",
        ));
        assert_eq!(found, None);
    }

    #[test]
    fn test_percent_encoded_value_is_decoded() {
        let found = extract_token(&url("https://app.example.com/verify?token=a%2Fb"));
        assert_eq!(found.as_deref(), Some("a/b"));
    }
}
