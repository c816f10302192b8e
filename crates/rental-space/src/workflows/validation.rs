//! Input checks applied by the login and application-form prompts.

use regex::Regex;
use std::sync::OnceLock;

pub const MAX_NAME_LEN: usize = 255;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@student\.monash\.edu$").expect("email pattern compiles")
    })
}

// Australian mobile: 04xxxxxxxx or +614xxxxxxxx.
fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^((\+61|0)4[0-9]{8})$").expect("phone pattern compiles"))
}

pub fn validate_name(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_LEN
}

/// Only Monash student addresses are accepted.
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

pub fn validate_savings(savings: &str) -> bool {
    savings.trim().parse::<f32>().is_ok()
}

/// Blank savings mean none declared.
pub fn parse_savings(savings: &str) -> Option<f32> {
    let trimmed = savings.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_monash_student_domain() {
        assert!(validate_email("jdoe1@student.monash.edu"));
        assert!(validate_email("first.last+rent@student.monash.edu"));
        assert!(!validate_email("jdoe1@gmail.com"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("jdoe1@student.monash.edu.au"));
        assert!(!validate_email("jdoe1@student.monash.edu\n"));
    }

    #[test]
    fn phone_requires_australian_mobile() {
        assert!(validate_phone("0412345678"));
        assert!(validate_phone("+61412345678"));
        assert!(!validate_phone("0398765432"));
        assert!(!validate_phone("41234567"));
        assert!(!validate_phone("04123456789"));
    }

    #[test]
    fn names_are_capped_at_255_characters() {
        assert!(validate_name("Jane"));
        assert!(validate_name(""));
        assert!(validate_name(&"a".repeat(255)));
        assert!(!validate_name(&"a".repeat(256)));
    }

    #[test]
    fn savings_must_be_numeric_when_present() {
        assert!(validate_savings("1500"));
        assert!(validate_savings("1500.75"));
        assert!(!validate_savings("lots"));
        assert_eq!(parse_savings(""), Some(0.0));
        assert_eq!(parse_savings("  "), Some(0.0));
        assert_eq!(parse_savings("250.5"), Some(250.5));
        assert_eq!(parse_savings("abc"), None);
    }
}
