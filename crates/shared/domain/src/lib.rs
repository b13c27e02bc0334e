//! # Domain Models
//!
//! This crate contains the pure candidate roster domain: validated field
//! value objects, the [`Candidate`] entity, and the [`Roster`] snapshot.
//! Keep it lean: no I/O, networking, or persistence concerns—just data,
//! invariants, and simple helpers.
//!
//! Every field value object validates on construction via `TryFrom`, so a
//! [`Candidate`] that exists is a candidate that satisfies its invariants.
//!
//! # Examples
//!
//! ```rust
//! use thub_domain::{Candidate, CandidateName, DomainError, Email, Phone, Roster};
//!
//! fn main() -> Result<(), DomainError> {
//!     let candidate = Candidate::new(
//!         CandidateName::try_from("Ada Lovelace")?,
//!         Phone::try_from("94351253")?,
//!         Email::try_from("ada@example.com")?,
//!         Vec::new(),
//!     );
//!
//!     let mut roster = Roster::new();
//!     roster.add(candidate)?;
//!     assert_eq!(roster.len(), 1);
//!     Ok(())
//! }
//! ```

mod candidate;
mod error;
mod roster;

pub use candidate::{Candidate, CandidateName, Email, Phone, Tag};
pub use error::{DomainError, DomainErrorExt};
pub use roster::Roster;
