//! Session store
//!
//! Owns one [`Session`] per user and the lifecycle of the user's persisted
//! trip files. Requests for different users never contend; requests for the
//! same user are serialized by a per-user async mutex held for the whole
//! request.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use domain::{DataFormat, DomainError, Session, TripCollection, UserId};
use parking_lot::RwLock;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{TripCodecs, TripFileStore};
use crate::services::reply::ExportDocument;

/// Shared handle to one user's session
pub type SessionHandle = Arc<Mutex<Session>>;

/// Exclusive access to one user's session for the duration of a request
pub type SessionGuard = OwnedMutexGuard<Session>;

/// Keyed store of user sessions backed by persisted trip files
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, SessionHandle>>,
    files: Arc<dyn TripFileStore>,
    codecs: TripCodecs,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.read().len())
            .field("codecs", &self.codecs)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over the given file storage and codecs
    pub fn new(files: Arc<dyn TripFileStore>, codecs: TripCodecs) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            files,
            codecs,
        }
    }

    /// Handle to a user's session, created on first use
    pub fn handle(&self, user: &UserId) -> SessionHandle {
        if let Some(handle) = self.sessions.read().get(user) {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write();
        Arc::clone(sessions.entry(user.clone()).or_insert_with(|| {
            debug!(user = %user, "Created session");
            Arc::new(Mutex::new(Session::new()))
        }))
    }

    /// Lock a user's session, waiting for any in-flight request of that user
    pub async fn lock(&self, user: &UserId) -> SessionGuard {
        self.handle(user).lock_owned().await
    }

    /// Number of users seen so far
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Make sure the session has a collection open
    ///
    /// No-op if one is already open. Otherwise tries the user's persisted CSV
    /// file, then the JSON file. Returns whether a collection is open afterwards.
    #[instrument(skip(self, session), fields(user = %user))]
    pub async fn open_or_load(&self, user: &UserId, session: &mut Session) -> bool {
        if session.is_open() {
            return true;
        }

        for format in DataFormat::ALL {
            let path = self.files.path_for(user, format);
            match self.load(&path, format).await {
                Ok(Some(trips)) => {
                    info!(format = %format, trips = trips.len(), "Restored persisted file");
                    session.open(trips, format);
                    return true;
                },
                Ok(None) => debug!(path = %path.display(), "No persisted file"),
                Err(e) => info!(path = %path.display(), error = %e, "Persisted file not usable"),
            }
        }

        false
    }

    /// Delete the user's persisted files and reset the session
    ///
    /// The session is reset even if a file cannot be deleted; the first
    /// deletion failure is returned.
    #[instrument(skip(self, session), fields(user = %user))]
    pub async fn clear(&self, user: &UserId, session: &mut Session) -> Result<(), ApplicationError> {
        session.reset();

        let mut first_error = None;
        for format in DataFormat::ALL {
            let path = self.files.path_for(user, format);
            match self.files.remove(&path).await {
                Ok(true) => debug!(path = %path.display(), "Removed persisted file"),
                Ok(false) => {},
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to remove persisted file");
                    first_error.get_or_insert(e);
                },
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Load the file at `path` into the session, replacing its collection
    ///
    /// The codec is chosen by the file's extension. The session is only
    /// updated when the whole file parsed. Returns the number of trips loaded.
    #[instrument(skip(self, session), fields(user = %user, path = %path.display()))]
    pub async fn ingest(
        &self,
        path: &Path,
        user: &UserId,
        session: &mut Session,
    ) -> Result<usize, ApplicationError> {
        let format = DataFormat::from_path(path).map_err(unsupported_format)?;
        let trips = self.load(path, format).await?.ok_or_else(|| {
            ApplicationError::Storage(format!("{} does not exist", path.display()))
        })?;

        let count = trips.len();
        session.open(trips, format);
        info!(format = %format, trips = count, "File ingested");
        Ok(count)
    }

    /// Persist an uploaded file as the user's file and ingest it
    ///
    /// Unknown extensions are rejected before anything is written. If the
    /// content is rejected the persisted copy is removed again.
    #[instrument(skip(self, session, bytes), fields(user = %user, size = bytes.len()))]
    pub async fn accept_upload(
        &self,
        user: &UserId,
        session: &mut Session,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<usize, ApplicationError> {
        let format = DataFormat::from_path(file_name).map_err(unsupported_format)?;
        let path = self.files.path_for(user, format);
        self.files.write(&path, bytes).await?;

        match self.ingest(&path, user, session).await {
            Ok(count) => Ok(count),
            Err(e) => {
                if let Err(remove_err) = self.files.remove(&path).await {
                    warn!(error = %remove_err, "Failed to remove rejected upload");
                }
                Err(e)
            },
        }
    }

    /// Serialize the open collection, persist it, and return it as a document
    #[instrument(skip(self, session), fields(user = %user, format = %format))]
    pub async fn export(
        &self,
        user: &UserId,
        session: &Session,
        format: DataFormat,
    ) -> Result<ExportDocument, ApplicationError> {
        let trips = session
            .collection()
            .ok_or(ApplicationError::NoCollectionOpen)?;
        let bytes = self.codecs.get(format)?.encode(trips)?;

        let path = self.files.path_for(user, format);
        self.files.write(&path, &bytes).await?;

        info!(trips = trips.len(), bytes = bytes.len(), "Collection exported");
        Ok(ExportDocument::new(user, format, bytes))
    }

    async fn load(
        &self,
        path: &Path,
        format: DataFormat,
    ) -> Result<Option<TripCollection>, ApplicationError> {
        let Some(bytes) = self.files.read(path).await? else {
            return Ok(None);
        };
        self.codecs.get(format)?.decode(&bytes).map(Some)
    }
}

fn unsupported_format(err: DomainError) -> ApplicationError {
    match err {
        DomainError::UnknownFormat(ext) => ApplicationError::UnsupportedFormat(ext),
        other => ApplicationError::Domain(other),
    }
}
