use std::borrow::Cow;

/// A specialized [`DomainError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A field value violates its invariant.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two entries describe the same candidate.
    #[error("Duplicate candidate{}: {message}", format_context(.context))]
    DuplicateCandidate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(..)` to any `Result` carrying a [`DomainError`].
pub trait DomainErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DomainError>;
}

impl<T> DomainErrorExt<T> for Result<T, DomainError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                DomainError::Validation { context: c, .. }
                | DomainError::DuplicateCandidate { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_context() {
        let err = DomainError::Validation { message: "Name cannot be empty".into(), context: None };
        assert_eq!(format!("{err}"), "Validation error: Name cannot be empty");
    }

    #[test]
    fn context_is_appended_to_display() {
        let err: Result<(), DomainError> = Err(DomainError::Validation {
            message: "Name cannot be empty".into(),
            context: None,
        });
        let err = err.context("entry 3").unwrap_err();
        assert_eq!(format!("{err}"), "Validation error (entry 3): Name cannot be empty");
    }
}
