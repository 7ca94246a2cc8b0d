//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a base and a path
///
/// An empty base keeps the path relative, so the browser resolves it
/// against the page origin.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:5000/", "/transacao"), "http://localhost:5000/transacao");
/// assert_eq!(api_url("", "/transacao"), "/transacao");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/accounts/details/1"), "/accounts/details/1");
        assert_eq!(
            api_url("https://bank.example", "/accounts/details/1"),
            "https://bank.example/accounts/details/1"
        );
        assert_eq!(
            api_url("https://bank.example/api/", "accounts/transaction"),
            "https://bank.example/api/accounts/transaction"
        );
    }
}
