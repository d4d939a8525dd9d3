//! Field validation: an ordered list of rules evaluated against the whole text.
use std::fmt;

enum Check {
    Required,
    MinChars(usize),
    MaxChars(usize),
    Custom(Box<dyn Fn(&str) -> bool>),
}

/// A predicate over the text plus the message reported when it fails.
pub struct ValidationRule {
    check: Check,
    message: String,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.check {
            Check::Required => "required".to_owned(),
            Check::MinChars(n) => format!("min_chars({n})"),
            Check::MaxChars(n) => format!("max_chars({n})"),
            Check::Custom(_) => "custom".to_owned(),
        };
        f.debug_struct("ValidationRule")
            .field("check", &kind)
            .field("message", &self.message)
            .finish()
    }
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            check: Check::Required,
            message: message.into(),
        }
    }

    /// At least `n` characters (not bytes).
    pub fn min_chars(n: usize, message: impl Into<String>) -> Self {
        Self {
            check: Check::MinChars(n),
            message: message.into(),
        }
    }

    pub fn max_chars(n: usize, message: impl Into<String>) -> Self {
        Self {
            check: Check::MaxChars(n),
            message: message.into(),
        }
    }

    pub fn custom(message: impl Into<String>, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            check: Check::Custom(Box::new(predicate)),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, text: &str) -> bool {
        match &self.check {
            Check::Required => !text.trim().is_empty(),
            Check::MinChars(n) => text.chars().count() >= *n,
            Check::MaxChars(n) => text.chars().count() <= *n,
            Check::Custom(predicate) => predicate(text),
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationRules {
    rules: Vec<ValidationRule>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Runs every rule in order. Contradictory length bounds are reported as the first error;
    /// the remaining rules still run.
    pub fn evaluate(&self, text: &str) -> ValidationResult {
        let mut errors = Vec::new();
        if let Some(problem) = self.configuration_problem() {
            errors.push(problem);
        }
        errors.extend(
            self.rules
                .iter()
                .filter(|rule| !rule.passes(text))
                .map(|rule| rule.message.clone()),
        );
        ValidationResult { errors }
    }

    fn configuration_problem(&self) -> Option<String> {
        let min = self
            .rules
            .iter()
            .filter_map(|r| match r.check {
                Check::MinChars(n) => Some(n),
                _ => None,
            })
            .max()?;
        let max = self
            .rules
            .iter()
            .filter_map(|r| match r.check {
                Check::MaxChars(n) => Some(n),
                _ => None,
            })
            .min()?;
        (min > max).then(|| {
            format!("invalid rule configuration: minimum length {min} exceeds maximum length {max}")
        })
    }
}

/// Outcome of the last validation run. Empty `errors` means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_rules_report_in_order() {
        let rules = ValidationRules::new()
            .with(ValidationRule::required("required"))
            .with(ValidationRule::min_chars(3, "too short"));
        let res = rules.evaluate("  ");
        assert_eq!(res.errors(), &["required".to_owned()]);
        let res = rules.evaluate("");
        assert_eq!(
            res.errors(),
            &["required".to_owned(), "too short".to_owned()]
        );
        assert!(rules.evaluate("abc").is_valid());
    }

    #[test]
    fn lengths_count_characters() {
        let rules = ValidationRules::new().with(ValidationRule::max_chars(2, "too long"));
        assert!(rules.evaluate("你好").is_valid());
    }

    #[test]
    fn contradictory_bounds_surface_as_an_error() {
        let rules = ValidationRules::new()
            .with(ValidationRule::min_chars(5, "short"))
            .with(ValidationRule::max_chars(2, "long"));
        let res = rules.evaluate("abc");
        assert!(!res.is_valid());
        assert!(
            res.first_error()
                .is_some_and(|e| e.starts_with("invalid rule configuration"))
        );
        assert_eq!(res.errors().len(), 3);
    }

    #[test]
    fn custom_predicates_run() {
        let rules = ValidationRules::new().with(ValidationRule::custom("digits only", |s| {
            s.chars().all(|c| c.is_ascii_digit())
        }));
        assert!(rules.evaluate("123").is_valid());
        assert_eq!(rules.evaluate("12a").first_error(), Some("digits only"));
    }
}
