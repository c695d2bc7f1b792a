use std::sync::LazyLock;
use nutype::nutype;
use regex::Regex;

pub mod content;
pub mod identity;

pub use content::{AuditAction, AuditRecordId, ContentItemId, ContentStatus};
pub use identity::{Actor, Role, UserId};

// A regex for slugs that may contain only lowercase ASCII letters, digits, and hyphen.
// Example: "launch-note-3" is valid; "launch note" or "launch/note" are not.
pub const SLUG_SYMBOLS_REGEX: &str = r"^[a-z0-9-]+$";

static SLUG_SYMBOLS_REGEX_COMPILED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SLUG_SYMBOLS_REGEX).expect("SLUG_SYMBOLS_REGEX must be a valid regex")
});

pub fn is_eligible_slug(slug: &str) -> bool {
    SLUG_SYMBOLS_REGEX_COMPILED.is_match(slug)
}

#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 120, predicate = is_eligible_slug),
    derive(
        Clone,
        Debug,
        Display,
        FromStr,
        AsRef,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct ContentSlug(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(
        Clone,
        Debug,
        Display,
        FromStr,
        AsRef,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct ContentTitle(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_sanitized_before_validation() {
        let slug = ContentSlug::try_new("  Launch-Note-3  ").unwrap();
        assert_eq!(slug.as_ref(), "launch-note-3");
    }

    #[test]
    fn slug_rejects_ineligible_symbols() {
        assert!(ContentSlug::try_new("launch note").is_err());
        assert!(ContentSlug::try_new("launch/note").is_err());
        assert!(ContentSlug::try_new("").is_err());
    }

    #[test]
    fn title_must_not_be_blank() {
        assert!(ContentTitle::try_new("   ").is_err());
        let title = ContentTitle::try_new("  Launch note  ").unwrap();
        assert_eq!(title.as_ref(), "Launch note");
    }
}
