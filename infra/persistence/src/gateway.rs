//! Core persistence gateway implementation for the candidate roster.
//!
//! This module contains the primary [`RosterStorage`] handle, the single
//! entry point for moving a roster snapshot between memory and disk. It
//! owns all file I/O and all wire-document conversion; callers only ever
//! see domain types.

use crate::builder::RosterStorageBuilder;
use crate::document::{self, Encoding, RosterDocument};
use crate::error::{PersistenceError, PersistenceErrorExt};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thub_domain::Roster;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// The internal shared state of a [`RosterStorage`] instance.
#[derive(Debug)]
pub struct RosterStorageInner {
    /// The configured roster file location.
    pub(crate) file_path: PathBuf,
    /// The JSON flavor written on save.
    pub(crate) encoding: Encoding,
    /// A unique counter used to generate temporary file names.
    pub(crate) tmp_counter: AtomicU64,
}

/// The persistence gateway for the candidate roster.
///
/// `RosterStorage` mediates all access to the persisted roster file. It
/// exposes exactly two operations, each with a per-call location variant:
///
/// - **Load**: read the file, decode it, validate it, and hand back a
///   fully constructed [`Roster`] — or `None` when no file exists yet,
///   which is the expected first-run state rather than an error.
/// - **Save**: mirror the snapshot into its wire shape and commit it to
///   disk crash-atomically, creating missing parent directories.
///
/// The gateway holds no cache and no lock: every load re-reads from disk,
/// every save replaces the whole document, and coordination between
/// concurrent writers is the caller's concern. The handle is internally
/// reference-counted and can be cheaply cloned.
///
/// # Example
///
/// ```rust
/// use thub_domain::Roster;
/// use thub_persistence::{PersistenceError, RosterStorage};
///
/// #[tokio::main]
/// async fn main() -> Result<(), PersistenceError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # let path = tmp.path().join("data").join("roster.json");
///     let storage = RosterStorage::builder().file_path(&path).build()?;
///
///     // First run: nothing on disk yet.
///     assert!(storage.load().await?.is_none());
///
///     // Commit a snapshot, then read it back.
///     storage.save(&Roster::new()).await?;
///     assert_eq!(storage.load().await?, Some(Roster::new()));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RosterStorage {
    pub(crate) inner: Arc<RosterStorageInner>,
}

impl Deref for RosterStorage {
    type Target = RosterStorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl RosterStorage {
    #[must_use = "The gateway is not usable until you call .build()"]
    pub fn builder() -> RosterStorageBuilder {
        RosterStorageBuilder::new()
    }

    /// Returns the configured roster file location.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the roster from the configured location.
    ///
    /// Returns `Ok(None)` when no file exists at the location — absence is
    /// the expected first-run state, not a failure. Read-only: this method
    /// never creates or modifies the file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::StorageUnavailable`] if the file exists
    /// but cannot be read.
    /// Returns [`PersistenceError::MalformedDocument`] if the bytes do not
    /// parse into the expected document shape.
    /// Returns [`PersistenceError::DataConversion`] if the document parsed
    /// but its entries violate domain invariants.
    pub async fn load(&self) -> Result<Option<Roster>, PersistenceError> {
        self.load_from(&self.inner.file_path).await
    }

    /// Same as [`RosterStorage::load`], against an explicit location.
    ///
    /// # Errors
    ///
    /// See [`RosterStorage::load`]; additionally returns
    /// [`PersistenceError::InvalidLocation`] for an empty path.
    pub async fn load_from(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Option<Roster>, PersistenceError> {
        let path = path.as_ref();
        validate_location(path)?;

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PersistenceError::StorageUnavailable {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        let document = document::decode(&bytes)
            .context(format!("Decoding roster document from {}", path.display()))?;

        match document.into_roster() {
            Ok(roster) => Ok(Some(roster)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Invalid roster data found");
                Err(PersistenceError::DataConversion {
                    source: err,
                    context: Some(format!("Converting roster data from {}", path.display()).into()),
                })
            },
        }
    }

    /// Saves the roster snapshot to the configured location.
    ///
    /// The write uses an "atomic swap" pattern:
    /// 1. Missing parent directories are created.
    /// 2. The encoded document is written to a unique temporary file
    ///    (`.thubtmp.<id>`) next to the target.
    /// 3. The file is synced to hardware (`sync_all`).
    /// 4. The temporary file is renamed over the destination, then the
    ///    parent directory is synced best-effort.
    ///
    /// On platforms where rename cannot replace an existing target, the
    /// implementation falls back to remove-then-rename.
    ///
    /// # Reliability
    ///
    /// A successful return means the full document is on disk; a failure
    /// leaves the previously committed file contents intact. The target is
    /// never observable in a partially written state.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::StorageUnavailable`] if directory
    /// creation, the temp write, or the swap fails (permissions, disk
    /// full, invalid path).
    pub async fn save(&self, roster: &Roster) -> Result<(), PersistenceError> {
        self.save_to(roster, &self.inner.file_path).await
    }

    /// Same as [`RosterStorage::save`], against an explicit location.
    ///
    /// # Errors
    ///
    /// See [`RosterStorage::save`]; additionally returns
    /// [`PersistenceError::InvalidLocation`] for an empty path.
    pub async fn save_to(
        &self,
        roster: &Roster,
        path: impl AsRef<Path>,
    ) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        validate_location(path)?;

        let document = RosterDocument::from_roster(roster);
        let bytes = self.inner.encoding.encode(&document)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create parent directories for {}", path.display()))?;
        }

        let temp = unique_tmp_path(path, &self.tmp_counter);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .await
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(&bytes).await.context("Write failed")?;
            file.sync_all().await.context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, path).await {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(path)
                    .await
                    .context(format!("Failed to replace existing file: {}", path.display()))?;
                fs::rename(&temp, path).await.context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    path.display()
                ))?;
            } else {
                return Err(PersistenceError::StorageUnavailable {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), path.display())
                            .into(),
                    ),
                });
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::sync_dir(parent).await;
        }

        debug!(path = %path.display(), candidates = roster.len(), "Roster saved atomically");
        Ok(())
    }

    async fn sync_dir(path: &Path) {
        match fs::File::open(path).await {
            Ok(dir) => {
                if let Err(err) = dir.sync_all().await {
                    warn!(path = %path.display(), error = %err, "Directory sync failed");
                }
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Directory open failed");
            },
        }
    }
}

fn validate_location(path: &Path) -> Result<(), PersistenceError> {
    if path.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidLocation {
            message: "Roster file location cannot be empty".into(),
            context: None,
        });
    }
    Ok(())
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("roster");
    let tmp_name = format!("{file_name}.thubtmp.{counter}");
    target.with_file_name(tmp_name)
}
