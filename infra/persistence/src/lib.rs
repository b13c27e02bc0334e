//! The persistence gateway for the TalentHub candidate roster.
//! It moves a complete in-memory roster snapshot to and from a single JSON
//! document on durable storage, with validation on the way in and atomic
//! replacement on the way out. All examples use temporary directories to
//! avoid writing to the real filesystem.
//!
//! # Core Features
//!
//! - **Absent-Aware Loading**: A missing roster file is the expected
//!   first-run state and loads as `None`, never as an error.
//! - **Validated Decoding**: Documents are decoded into a wire shape first
//!   and converted into domain types second, so malformed files and
//!   invariant-violating entries surface as distinct, cause-carrying
//!   errors and no partial roster ever escapes.
//! - **Atomic Writes**: Uses an "atomic swap" pattern (unique temp write +
//!   `sync_all` + `rename`) to prevent data corruption during crashes.
//! - **Whole-Snapshot Semantics**: Every save replaces the entire
//!   document; nothing is cached between calls.
//!
//! # Architectural Overview
//!
//! The crate follows a layered approach:
//! 1.  **[`RosterStorage`]**: The primary handle and entry point.
//! 2.  **[`RosterStorageBuilder`]**: A type-safe fluent builder for
//!     configuration.
//! 3.  A crate-private wire document module that mirrors the on-disk JSON
//!     and delegates all validation to `thub-domain`.
//!
//! # Examples
//!
//! ```rust
//! use thub_domain::{Candidate, CandidateName, Email, Phone, Roster};
//! use thub_persistence::{Encoding, PersistenceError, RosterStorage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PersistenceError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let path = tmp.path().join("roster.json");
//!     let storage = RosterStorage::builder()
//!         .file_path(&path)
//!         .encoding(Encoding::Pretty)
//!         .build()?;
//!
//!     let mut roster = storage.load().await?.unwrap_or_default();
//!
//!     let candidate = Candidate::new(
//!         CandidateName::try_from("Ada Lovelace").map_err(PersistenceError::from)?,
//!         Phone::try_from("94351253").map_err(PersistenceError::from)?,
//!         Email::try_from("ada@example.com").map_err(PersistenceError::from)?,
//!         Vec::new(),
//!     );
//!     roster.add(candidate).map_err(PersistenceError::from)?;
//!
//!     storage.save(&roster).await?;
//!     assert_eq!(storage.load().await?, Some(roster));
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod document;
mod error;
mod gateway;

pub use builder::RosterStorageBuilder;
pub use document::Encoding;
pub use error::{PersistenceError, PersistenceErrorExt};
pub use gateway::RosterStorage;
