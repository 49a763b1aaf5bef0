//! Client-side validation for the create-project form.
//!
//! The rules here run synchronously before any network call and never
//! contact the service. Each rule carries a fixed user-facing message;
//! rules for a field are checked in declaration order, so when a value
//! violates several rules the earliest message wins.

use crate::domain::models::{ProjectCreationInput, ProjectDraft};
use std::fmt;

/// Minimum project name length, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum project name length, in characters.
pub const NAME_MAX_CHARS: usize = 17;
/// Minimum subdomain length, in characters.
pub const SUBDOMAIN_MIN_CHARS: usize = 3;

pub const NAME_TOO_SHORT: &str = "Project name must be at least 3 characters";
pub const NAME_TOO_LONG: &str = "Project name must be at most 17 characters";
pub const SUBDOMAIN_TOO_SHORT: &str = "Subdomain must be at least 3 characters";
pub const SUBDOMAIN_INVALID: &str = "Subdomain may only contain letters and numbers";
pub const SUBDOMAIN_TAKEN: &str = "Project subdomain already exists";
pub const NAME_TAKEN: &str = "Project name already exists";

/// A project name that has passed validation.
///
/// Names may contain any characters; only the length is constrained.
/// Length is counted in characters rather than bytes so multi-byte names
/// validate the way a user counts them.
///
/// # Examples
///
/// ```
/// use tprj::domain::ProjectName;
///
/// assert!(ProjectName::parse("Acme").is_ok());
/// assert!(ProjectName::parse("ab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates a candidate name, returning the fixed message for the
    /// first violated rule.
    pub fn parse(value: &str) -> Result<Self, &'static str> {
        let chars = value.chars().count();
        if chars < NAME_MIN_CHARS {
            return Err(NAME_TOO_SHORT);
        }
        if chars > NAME_MAX_CHARS {
            return Err(NAME_TOO_LONG);
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The alphanumeric identifier addressing a project's dashboard route.
///
/// Subdomains must be at least three characters of ASCII letters and
/// digits, nothing else. The length rule is checked before the pattern
/// rule, so a one-character `"!"` reports the length message.
///
/// # Examples
///
/// ```
/// use tprj::domain::Subdomain;
///
/// assert!(Subdomain::parse("acme42").is_ok());
/// assert!(Subdomain::parse("my-app").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdomain(String);

impl Subdomain {
    /// Validates a candidate subdomain, returning the fixed message for
    /// the first violated rule.
    pub fn parse(value: &str) -> Result<Self, &'static str> {
        if value.chars().count() < SUBDOMAIN_MIN_CHARS {
            return Err(SUBDOMAIN_TOO_SHORT);
        }
        if !value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(SUBDOMAIN_INVALID);
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The inputs of the create-project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Subdomain,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Subdomain => write!(f, "subdomain"),
        }
    }
}

/// Returns the fixed message shown when the service reports a uniqueness
/// conflict on the given field.
pub fn conflict_message(field: FormField) -> &'static str {
    match field {
        FormField::Name => NAME_TAKEN,
        FormField::Subdomain => SUBDOMAIN_TAKEN,
    }
}

/// Validation messages keyed by form field, rendered adjacent to the
/// corresponding input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub subdomain: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.subdomain.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Subdomain => self.subdomain.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        match field {
            FormField::Name => self.name = Some(message.into()),
            FormField::Subdomain => self.subdomain = Some(message.into()),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Subdomain => self.subdomain = None,
        }
    }
}

/// Validates a form snapshot, producing either input ready for the
/// mutation or the set of field-keyed messages to render inline.
pub fn validate(draft: &ProjectDraft) -> Result<ProjectCreationInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = match ProjectName::parse(&draft.name) {
        Ok(name) => Some(name),
        Err(message) => {
            errors.set(FormField::Name, message);
            None
        }
    };

    let subdomain = match Subdomain::parse(&draft.subdomain) {
        Ok(subdomain) => Some(subdomain),
        Err(message) => {
            errors.set(FormField::Subdomain, message);
            None
        }
    };

    match (name, subdomain) {
        (Some(name), Some(subdomain)) => Ok(ProjectCreationInput { name, subdomain }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert_eq!(ProjectName::parse(""), Err(NAME_TOO_SHORT));
        assert_eq!(ProjectName::parse("ab"), Err(NAME_TOO_SHORT));
        assert!(ProjectName::parse("abc").is_ok());
        assert!(ProjectName::parse("a".repeat(17).as_str()).is_ok());
        assert_eq!(
            ProjectName::parse("a".repeat(18).as_str()),
            Err(NAME_TOO_LONG)
        );
    }

    #[test]
    fn test_name_accepts_any_characters() {
        assert!(ProjectName::parse("My App!").is_ok());
        assert!(ProjectName::parse("   ").is_ok());
        assert!(ProjectName::parse("日本語の名前").is_ok());
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // Three characters, nine bytes.
        assert!(ProjectName::parse("日本語").is_ok());
    }

    #[test]
    fn test_subdomain_length_checked_before_pattern() {
        // Violates both rules; the length message must win.
        assert_eq!(Subdomain::parse("a!"), Err(SUBDOMAIN_TOO_SHORT));
        assert_eq!(Subdomain::parse(""), Err(SUBDOMAIN_TOO_SHORT));
    }

    #[test]
    fn test_subdomain_pattern() {
        assert_eq!(Subdomain::parse("my-app"), Err(SUBDOMAIN_INVALID));
        assert_eq!(Subdomain::parse("my app"), Err(SUBDOMAIN_INVALID));
        assert_eq!(Subdomain::parse("app_1"), Err(SUBDOMAIN_INVALID));
        assert!(Subdomain::parse("Acme01").is_ok());
        assert!(Subdomain::parse("123").is_ok());
    }

    #[test]
    fn test_validate_collects_errors_per_field() {
        let draft = ProjectDraft {
            name: "ab".to_string(),
            subdomain: "my-app".to_string(),
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(errors.subdomain.as_deref(), Some(SUBDOMAIN_INVALID));
    }

    #[test]
    fn test_validate_accepts_valid_draft() {
        let draft = ProjectDraft {
            name: "Acme Website".to_string(),
            subdomain: "acme".to_string(),
        };
        let input = validate(&draft).unwrap();
        assert_eq!(input.name.as_ref(), "Acme Website");
        assert_eq!(input.subdomain.as_ref(), "acme");
    }

    #[test]
    fn test_validate_single_bad_field() {
        let draft = ProjectDraft {
            name: "Acme".to_string(),
            subdomain: "a".to_string(),
        };
        let errors = validate(&draft).unwrap_err();
        assert!(errors.name.is_none());
        assert_eq!(errors.subdomain.as_deref(), Some(SUBDOMAIN_TOO_SHORT));
    }

    #[test]
    fn test_field_errors_accessors() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.set(FormField::Subdomain, SUBDOMAIN_TAKEN);
        assert!(!errors.is_empty());
        assert_eq!(errors.get(FormField::Subdomain), Some(SUBDOMAIN_TAKEN));
        assert_eq!(errors.get(FormField::Name), None);

        errors.clear(FormField::Subdomain);
        assert!(errors.is_empty());
    }
}
