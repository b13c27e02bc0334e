//! Wire representation of the persisted roster document.
//!
//! The types here mirror the on-disk JSON field-for-field and perform no
//! domain validation of their own; converting a document into a [`Roster`]
//! delegates every invariant to `thub-domain`. The module is crate-private
//! on purpose — the wire shape never crosses the gateway boundary.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use thub_domain::{Candidate, CandidateName, DomainError, Email, Phone, Roster, Tag};

/// Selects the JSON flavor written by the gateway.
///
/// Both flavors decode identically; this only affects how saved documents
/// look on disk.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Encoding {
    /// Human-readable, indented JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

impl Encoding {
    pub(crate) fn encode(self, document: &RosterDocument) -> Result<Vec<u8>, PersistenceError> {
        let bytes = match self {
            Self::Pretty => serde_json::to_vec_pretty(document),
            Self::Compact => serde_json::to_vec(document),
        };
        bytes.map_err(|e| PersistenceError::Internal {
            message: e.to_string().into(),
            context: Some("Encoding roster document".into()),
        })
    }
}

/// Parses raw bytes into a [`RosterDocument`].
///
/// Fails on anything that is not well-formed JSON of exactly the expected
/// shape — unknown fields included — and never returns a partial document.
pub(crate) fn decode(bytes: &[u8]) -> Result<RosterDocument, PersistenceError> {
    serde_json::from_slice(bytes)
        .map_err(|source| PersistenceError::MalformedDocument { source, context: None })
}

/// On-disk shape of the complete roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RosterDocument {
    pub(crate) candidates: Vec<CandidateRecord>,
}

/// On-disk shape of a single candidate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CandidateRecord {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) tags: Vec<String>,
}

impl RosterDocument {
    /// Mirrors an in-memory roster into its wire shape. Structural only:
    /// the snapshot is already valid, so this cannot fail.
    pub(crate) fn from_roster(roster: &Roster) -> Self {
        Self {
            candidates: roster.candidates().iter().map(CandidateRecord::from_candidate).collect(),
        }
    }

    /// Validates and converts the document into a domain roster.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] raised by field validation or by
    /// duplicate detection during roster construction.
    pub(crate) fn into_roster(self) -> Result<Roster, DomainError> {
        let candidates = self
            .candidates
            .into_iter()
            .map(CandidateRecord::into_candidate)
            .collect::<Result<Vec<_>, _>>()?;
        Roster::from_candidates(candidates)
    }
}

impl CandidateRecord {
    fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name().as_ref().to_owned(),
            phone: candidate.phone().as_ref().to_owned(),
            email: candidate.email().as_ref().to_owned(),
            tags: candidate.tags().iter().map(|tag| tag.as_ref().to_owned()).collect(),
        }
    }

    fn into_candidate(self) -> Result<Candidate, DomainError> {
        let name = CandidateName::try_from(self.name)?;
        let phone = Phone::try_from(self.phone)?;
        let email = Email::try_from(self.email)?;
        let tags =
            self.tags.into_iter().map(Tag::try_from).collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Candidate::new(name, phone, email, tags))
    }
}
