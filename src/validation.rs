//! Form Validator
//!
//! Declarative per-field rules for the contact form. A field reports at most
//! one error: `required` first, then `min_length`, `max_length`, `pattern`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Rule set for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// A pattern that failed to compile rejects every non-empty value
    pub pattern: Option<Result<Regex, regex::Error>>,
    /// Characters removed before the pattern is tested
    pub ignore_chars: &'static str,
    pub messages: RuleMessages,
}

#[derive(Debug, Clone, Default)]
pub struct RuleMessages {
    pub required: &'static str,
    pub min_length: &'static str,
    pub max_length: &'static str,
    pub pattern: &'static str,
}

impl FieldRule {
    fn optional(messages: RuleMessages) -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            ignore_chars: "",
            messages,
        }
    }

    fn required(messages: RuleMessages) -> Self {
        Self { required: true, ..Self::optional(messages) }
    }

    fn min(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    fn max(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    fn pattern(mut self, re: &str) -> Self {
        let compiled = Regex::new(re);
        if let Err(e) = &compiled {
            log::error!("[VALIDATION] Invalid pattern {:?}: {}", re, e);
        }
        self.pattern = Some(compiled);
        self
    }

    fn ignoring(mut self, chars: &'static str) -> Self {
        self.ignore_chars = chars;
        self
    }
}

/// First violated rule's message, or `None` when the value passes
pub fn validate_field(rule: &FieldRule, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return rule.required.then(|| rule.messages.required.to_string());
    }

    let len = value.chars().count();
    if rule.min_length.is_some_and(|min| len < min) {
        return Some(rule.messages.min_length.to_string());
    }
    if rule.max_length.is_some_and(|max| len > max) {
        return Some(rule.messages.max_length.to_string());
    }
    match &rule.pattern {
        Some(Ok(pattern)) => {
            let candidate: String = value.chars().filter(|c| !rule.ignore_chars.contains(*c)).collect();
            if !pattern.is_match(&candidate) {
                return Some(rule.messages.pattern.to_string());
            }
        }
        Some(Err(_)) => return Some(rule.messages.pattern.to_string()),
        None => {}
    }
    None
}

/// Field name → error message for every failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Replace one field's error after it is re-validated on its own
    pub fn set_field(&mut self, field: &str, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    /// First failing field in form order, used to move focus
    pub fn first_invalid<'a>(&self, order: &[&'a str]) -> Option<&'a str> {
        order.iter().copied().find(|f| self.errors.contains_key(*f))
    }
}

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

/// Contact form fields in display order
pub const CONTACT_FIELDS: &[&str] = &[FIELD_NAME, FIELD_EMAIL, FIELD_PHONE, FIELD_SUBJECT, FIELD_MESSAGE];

pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// Rule table for the contact form
#[derive(Debug, Clone)]
pub struct ContactRules {
    rules: BTreeMap<&'static str, FieldRule>,
}

impl ContactRules {
    fn build() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            FIELD_NAME,
            FieldRule::required(RuleMessages {
                required: "Please enter your name",
                min_length: "Name must be at least 2 characters",
                max_length: "Name must be less than 50 characters",
                pattern: "Name can only contain letters, spaces, hyphens, and apostrophes",
            })
            .min(2)
            .max(50)
            .pattern(r"^[A-Za-z\s\-']+$"),
        );
        rules.insert(
            FIELD_EMAIL,
            FieldRule::required(RuleMessages {
                required: "Please enter your email address",
                max_length: "Email must be less than 100 characters",
                pattern: "Please enter a valid email address",
                ..Default::default()
            })
            .max(100)
            .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
        );
        rules.insert(
            FIELD_PHONE,
            FieldRule::optional(RuleMessages {
                pattern: "Please enter a valid phone number",
                ..Default::default()
            })
            .pattern(r"^\+?[1-9]\d{0,15}$")
            .ignoring(" -()"),
        );
        rules.insert(
            FIELD_SUBJECT,
            FieldRule::required(RuleMessages {
                required: "Please select a subject",
                ..Default::default()
            }),
        );
        rules.insert(
            FIELD_MESSAGE,
            FieldRule::required(RuleMessages {
                required: "Please enter your message",
                min_length: "Message must be at least 10 characters",
                max_length: "Message must be less than 1000 characters",
                ..Default::default()
            })
            .min(10)
            .max(MESSAGE_MAX_LENGTH),
        );
        Self { rules }
    }

    /// Shared rule table (regexes compiled once)
    pub fn get() -> &'static ContactRules {
        static RULES: OnceLock<ContactRules> = OnceLock::new();
        RULES.get_or_init(ContactRules::build)
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Unknown fields have no rules and always pass
    pub fn validate_field(&self, field: &str, value: &str) -> Option<String> {
        self.rule(field).and_then(|rule| validate_field(rule, value))
    }

    /// Validate every field; does not stop at the first failure
    pub fn validate_form<'a, I>(&self, fields: I) -> ValidationResult
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let errors = fields
            .into_iter()
            .filter_map(|(name, value)| {
                self.validate_field(name, value).map(|message| (name.to_string(), message))
            })
            .collect();
        ValidationResult { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> &'static ContactRules {
        ContactRules::get()
    }

    #[test]
    fn test_email_rules() {
        let r = rules();
        assert_eq!(r.validate_field("email", "").as_deref(), Some("Please enter your email address"));
        assert_eq!(r.validate_field("email", "not-an-email").as_deref(), Some("Please enter a valid email address"));
        assert_eq!(r.validate_field("email", "a@b.com"), None);
    }

    #[test]
    fn test_email_max_length_before_pattern() {
        let long = format!("{}@example.com", "a".repeat(95));
        assert_eq!(
            rules().validate_field("email", &long).as_deref(),
            Some("Email must be less than 100 characters")
        );
    }

    #[test]
    fn test_message_length_bounds() {
        let r = rules();
        assert_eq!(r.validate_field("message", "short").as_deref(), Some("Message must be at least 10 characters"));
        let too_long = "x".repeat(1001);
        assert_eq!(r.validate_field("message", &too_long).as_deref(), Some("Message must be less than 1000 characters"));
        assert_eq!(r.validate_field("message", &"x".repeat(1000)), None);
        assert_eq!(r.validate_field("message", "Ten chars!"), None);
    }

    #[test]
    fn test_required_short_circuits() {
        assert_eq!(rules().validate_field("name", "   ").as_deref(), Some("Please enter your name"));
    }

    #[test]
    fn test_name_rules_in_order() {
        let r = rules();
        // "1" violates both min length and pattern; min length is reported
        assert_eq!(r.validate_field("name", "1").as_deref(), Some("Name must be at least 2 characters"));
        assert_eq!(r.validate_field("name", &"a".repeat(51)).as_deref(), Some("Name must be less than 50 characters"));
        assert_eq!(
            r.validate_field("name", "R2-D2").as_deref(),
            Some("Name can only contain letters, spaces, hyphens, and apostrophes")
        );
        assert_eq!(r.validate_field("name", "Mary-Jane O'Neil"), None);
    }

    #[test]
    fn test_length_counts_trimmed_chars() {
        assert_eq!(rules().validate_field("name", "  Jo  "), None);
        assert_eq!(rules().validate_field("message", "  café au lait  "), None);
    }

    #[test]
    fn test_optional_phone() {
        let r = rules();
        assert_eq!(r.validate_field("phone", ""), None);
        assert_eq!(r.validate_field("phone", "+1 (555) 123-4567"), None);
        assert_eq!(r.validate_field("phone", "5551234567"), None);
        assert_eq!(r.validate_field("phone", "call me").as_deref(), Some("Please enter a valid phone number"));
        assert_eq!(r.validate_field("phone", "0123").as_deref(), Some("Please enter a valid phone number"));
        assert_eq!(r.validate_field("phone", "12345678901234567").as_deref(), Some("Please enter a valid phone number"));
    }

    #[test]
    fn test_subject_presence_only() {
        assert_eq!(rules().validate_field("subject", "").as_deref(), Some("Please select a subject"));
        assert_eq!(rules().validate_field("subject", "catering"), None);
    }

    #[test]
    fn test_unknown_field_passes() {
        assert_eq!(rules().validate_field("newsletter", ""), None);
    }

    #[test]
    fn test_validate_form_collects_every_error() {
        let result = rules().validate_form([
            ("name", ""),
            ("email", "nope"),
            ("phone", ""),
            ("subject", "general"),
            ("message", "hi"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 3);
        assert_eq!(result.error("email"), Some("Please enter a valid email address"));
        assert_eq!(result.error("subject"), None);
        assert_eq!(result.first_invalid(CONTACT_FIELDS), Some("name"));
    }

    #[test]
    fn test_validate_form_valid() {
        let result = rules().validate_form([
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("phone", ""),
            ("subject", "general"),
            ("message", "I would like to book a table."),
        ]);
        assert!(result.is_valid());
        assert_eq!(result.first_invalid(CONTACT_FIELDS), None);
    }

    #[test]
    fn test_set_field_updates_single_error() {
        let mut result = rules().validate_form([("name", ""), ("email", "")]);
        assert_eq!(result.errors().len(), 2);

        result.set_field("name", rules().validate_field("name", "Ada"));
        assert_eq!(result.error("name"), None);
        assert!(result.error("email").is_some());

        result.set_field("email", Some("custom".into()));
        assert_eq!(result.error("email"), Some("custom"));
    }

    #[test]
    fn test_all_patterns_compile() {
        for field in [FIELD_NAME, FIELD_EMAIL, FIELD_PHONE] {
            assert!(rules().rule(field).and_then(|r| r.pattern.as_ref()).is_some_and(|p| p.is_ok()), "{}", field);
        }
    }

    #[test]
    fn test_broken_pattern_rejects_values() {
        let rule = FieldRule::optional(RuleMessages { pattern: "Invalid code", ..Default::default() }).pattern("([a-z");
        assert!(matches!(rule.pattern, Some(Err(_))));
        assert_eq!(validate_field(&rule, "abc").as_deref(), Some("Invalid code"));
        // Optional and empty still passes; there is nothing to match
        assert_eq!(validate_field(&rule, ""), None);
    }
}
