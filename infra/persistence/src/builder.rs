use crate::document::Encoding;
use crate::error::PersistenceError;
use crate::gateway::{RosterStorage, RosterStorageInner};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

#[derive(Debug, Clone, Default)]
struct StorageConfig {
    encoding: Encoding,
}

#[derive(Debug, Default)]
pub struct NoPath;
#[derive(Debug)]
pub struct WithPath(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoPath {}
impl Sealed for WithPath {}

/// A type-safe fluent builder for [`RosterStorage`].
///
/// The type state guarantees at compile time that a gateway cannot be
/// built without a file location.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct RosterStorageBuilder<S: Sealed = NoPath> {
    state: S,
    config: StorageConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> RosterStorageBuilder<S> {
    #[must_use = "Sets the JSON flavor written on save"]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> RosterStorageBuilder<N> {
        RosterStorageBuilder { state, config: self.config }
    }
}

impl RosterStorageBuilder<NoPath> {
    #[must_use = "Creates a new storage builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the roster file location"]
    pub fn file_path(self, path: impl Into<PathBuf>) -> RosterStorageBuilder<WithPath> {
        self.transition(WithPath(path.into()))
    }
}

impl RosterStorageBuilder<WithPath> {
    /// Consumes the configuration and produces a gateway handle.
    ///
    /// Building performs no I/O: missing files and directories are dealt
    /// with by the load/save operations themselves.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::InvalidLocation`] if the configured
    /// path is empty.
    pub fn build(self) -> Result<RosterStorage, PersistenceError> {
        let path = self.state.0;

        if path.as_os_str().is_empty() {
            return Err(PersistenceError::InvalidLocation {
                message: "Roster file location cannot be empty".into(),
                context: None,
            });
        }

        Ok(RosterStorage {
            inner: Arc::new(RosterStorageInner {
                file_path: path,
                encoding: self.config.encoding,
                tmp_counter: AtomicU64::new(1),
            }),
        })
    }
}
