use url::Url;
use validator::ValidationError;

/// True for an absolute http(s) URL. Shared by the validation gate and the
/// renderer's link screening.
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Validator hook for the optional profile-link fields: an empty string means
/// "not set" and passes; anything else must be an absolute URL.
pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_absolute_url(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_url");
        err.message = Some("Must be a valid absolute URL".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("http://example.com/path?q=1"));
    }

    #[test]
    fn rejects_relative_and_other_schemes() {
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url("/profile"));
        assert!(!is_absolute_url("javascript:alert(1)"));
        assert!(!is_absolute_url("ftp://example.com"));
    }

    #[test]
    fn empty_is_not_set() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("not-a-url").is_err());
    }
}
