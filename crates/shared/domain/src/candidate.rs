use crate::error::DomainError;
use std::fmt;

/// A candidate's display name.
///
/// # Constraints
/// - Must not be blank.
/// - May only contain **alphanumeric** characters and **spaces**.
/// - Leading and trailing whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateName(String);

impl TryFrom<&str> for CandidateName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        let name = value.trim();

        if name.is_empty() {
            return Err(DomainError::Validation {
                message: "Names should only contain alphanumeric characters and spaces, and should not be blank".into(),
                context: None,
            });
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
            return Err(DomainError::Validation {
                message: "Names should only contain alphanumeric characters and spaces, and should not be blank".into(),
                context: Some(name.to_owned().into()),
            });
        }

        Ok(Self(name.to_owned()))
    }
}

impl TryFrom<String> for CandidateName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for CandidateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate's phone number.
///
/// # Constraints
/// - Digits only.
/// - At least 3 digits long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl TryFrom<&str> for Phone {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        let phone = value.trim();

        if phone.len() < 3 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation {
                message: "Phone numbers should only contain digits, and should be at least 3 digits long".into(),
                context: Some(phone.to_owned().into()),
            });
        }

        Ok(Self(phone.to_owned()))
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate's email address.
///
/// # Constraints
/// - Shape `local@domain`.
/// - Non-empty local part without whitespace or further `@` signs.
/// - Domain made of non-empty dot-separated labels, with at least one dot,
///   where labels contain only alphanumeric characters and hyphens and do
///   not start or end with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

const EMAIL_CONSTRAINT: &str =
    "Emails should be of the form local@domain, with a dot-separated alphanumeric domain";

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        let email = value.trim();

        let invalid = || DomainError::Validation {
            message: EMAIL_CONSTRAINT.into(),
            context: Some(email.to_owned().into()),
        };

        let Some((local, domain)) = email.split_once('@') else {
            return Err(invalid());
        };

        if local.is_empty() || local.contains(char::is_whitespace) {
            return Err(invalid());
        }

        if !domain.contains('.') {
            return Err(invalid());
        }

        let labels_ok = domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
        if !labels_ok {
            return Err(invalid());
        }

        Ok(Self(email.to_owned()))
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A free-form label attached to a candidate (e.g. `frontend`, `referred`).
///
/// # Constraints
/// - Non-empty, alphanumeric only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl TryFrom<&str> for Tag {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        let tag = value.trim();

        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::Validation {
                message: "Tag names should be alphanumeric".into(),
                context: Some(tag.to_owned().into()),
            });
        }

        Ok(Self(tag.to_owned()))
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the candidate roster.
///
/// All fields are validated value objects, so constructing a `Candidate`
/// cannot produce an invalid entry. Identity is keyed on the name (see
/// [`Candidate::is_same_candidate`]); full equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: CandidateName,
    phone: Phone,
    email: Email,
    tags: Vec<Tag>,
}

impl Candidate {
    #[must_use]
    pub const fn new(name: CandidateName, phone: Phone, email: Email, tags: Vec<Tag>) -> Self {
        Self { name, phone, email, tags }
    }

    #[must_use]
    pub const fn name(&self) -> &CandidateName {
        &self.name
    }

    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns `true` if both entries describe the same candidate.
    ///
    /// Two entries describe the same candidate when their names are equal,
    /// regardless of how the remaining fields compare.
    #[must_use]
    pub fn is_same_candidate(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}
