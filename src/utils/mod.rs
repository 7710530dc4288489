pub mod map_search;
pub mod url_validator;

pub use map_search::build_map_search_url;
pub use url_validator::{UrlValidationError, validate_url};

/// Longest slug accepted
pub const MAX_SLUG_LENGTH: usize = 128;

/// First path segment owned by the JSON API; a slug can never take it.
pub const RESERVED_SLUGS: &[&str] = &["api"];

/// 检查 slug 是否合法
///
/// 1..=128 characters of `[A-Za-z0-9_.-]`, not `.`/`..`, not reserved.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug != "."
        && slug != ".."
        && !RESERVED_SLUGS.contains(&slug)
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}
