//! Redirect target validation
//!
//! Only absolute `http`/`https` URLs with a host may be stored as redirect
//! targets; script-capable schemes are rejected outright.

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    BlockedScheme(String),
    UnsupportedScheme(String),
    Malformed(String),
    MissingHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "url is empty"),
            Self::BlockedScheme(scheme) => write!(f, "scheme '{}' is not allowed", scheme),
            Self::UnsupportedScheme(scheme) => {
                write!(f, "scheme '{}' is not supported, use http or https", scheme)
            }
            Self::Malformed(msg) => write!(f, "malformed url: {}", msg),
            Self::MissingHost => write!(f, "url has no host"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// Validate a redirect target and return it parsed.
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // 先看协议前缀，解析失败的输入也能给出准确的错误
    if let Some((scheme, _)) = raw.split_once(':') {
        let scheme = scheme.to_ascii_lowercase();
        if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
            return Err(UrlValidationError::BlockedScheme(scheme));
        }
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://localhost:8080/a?b=1#c").is_ok());
        assert!(validate_url("  HTTPS://Example.com  ").is_ok());
    }

    #[test]
    fn test_blocked_schemes() {
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::BlockedScheme("javascript".to_string()))
        );
        assert!(matches!(
            validate_url("DATA:text/html,hi"),
            Err(UrlValidationError::BlockedScheme(_))
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme("ftp".to_string()))
        );
        assert!(matches!(
            validate_url("mailto:someone@example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_relative_and_empty() {
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::Malformed(_))
        ));
    }
}
