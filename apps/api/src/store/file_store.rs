use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Failure detail for a store operation. The collection name is carried
/// for server-side logs; the full path is deliberately not exposed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access collection '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse collection '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Records that carry an optional string identity.
pub trait HasId {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

/// Assigns a fresh UUID iff the record has no identity (or an empty
/// one). Identified records pass through untouched, so calling this on
/// every save is safe.
pub fn ensure_id<T: HasId>(mut record: T) -> T {
    if record.id().map_or(true, str::is_empty) {
        record.set_id(Uuid::new_v4().to_string());
    }
    record
}

/// Schema-agnostic persistence of one JSON-array file per collection.
///
/// No caching: every load and save goes straight to disk. Fine for a
/// single-editor site with low write frequency.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    async fn ensure_dir(&self, name: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::Io {
                name: name.to_string(),
                source,
            })
    }

    /// Reads the full collection. A missing file is bootstrapped with
    /// `default` (written to disk, then returned). A file that exists
    /// but fails to parse is an error, never an empty collection — a
    /// corrupt file must not be silently replaced.
    pub async fn load<T>(&self, name: &str, default: &[T]) -> Result<Vec<T>, StoreError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        self.ensure_dir(name).await?;
        match tokio::fs::read_to_string(self.path_for(name)).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                name: name.to_string(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_records(name, default).await?;
                Ok(default.to_vec())
            }
            Err(source) => Err(StoreError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// Replaces the whole collection file with the given records.
    pub async fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        self.ensure_dir(name).await?;
        self.write_records(name, records).await
    }

    async fn write_records<T: Serialize>(
        &self,
        name: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(records).map_err(|source| StoreError::Parse {
                name: name.to_string(),
                source,
            })?;
        tokio::fs::write(self.path_for(name), json)
            .await
            .map_err(|source| StoreError::Io {
                name: name.to_string(),
                source,
            })
    }
}
