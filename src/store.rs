//! In-memory travel store with optional JSON file persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewTravel, TravelEntry, TravelKind};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid travel entry: {0}")]
    Invalid(String),
}

/// On-disk snapshot of both collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    next: Vec<TravelEntry>,
    #[serde(default)]
    past: Vec<TravelEntry>,
}

impl Snapshot {
    fn seeded() -> Self {
        let next = ["Europe", "Las Vegas", "Europe", "Las Vegas", "Europe"]
            .into_iter()
            .map(|place| TravelEntry::new(place, "I want to go here"))
            .collect();
        Self {
            next,
            past: Vec::new(),
        }
    }

    fn list(&self, kind: TravelKind) -> &Vec<TravelEntry> {
        match kind {
            TravelKind::Next => &self.next,
            TravelKind::Past => &self.past,
        }
    }

    fn list_mut(&mut self, kind: TravelKind) -> &mut Vec<TravelEntry> {
        match kind {
            TravelKind::Next => &mut self.next,
            TravelKind::Past => &mut self.past,
        }
    }
}

/// Ordered travel entries per collection.
pub struct TravelStore {
    data: RwLock<Snapshot>,
    /// File rewritten after every insert (None = memory only).
    path: Option<PathBuf>,
}

impl TravelStore {
    /// Empty memory-only store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Snapshot::default()),
            path: None,
        }
    }

    /// Memory-only store with the demo travel ideas.
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(Snapshot::seeded()),
            path: None,
        }
    }

    /// Open a file-backed store. A missing file starts from the seeded demo data.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let snapshot = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            tracing::info!("No store file at {}, starting with demo data", path.display());
            Snapshot::seeded()
        };

        Ok(Self {
            data: RwLock::new(snapshot),
            path: Some(path.to_path_buf()),
        })
    }

    /// All entries of a collection in insertion order.
    pub async fn list(&self, kind: TravelKind) -> Vec<TravelEntry> {
        self.data.read().await.list(kind).clone()
    }

    pub async fn get(&self, kind: TravelKind, id: &Uuid) -> Option<TravelEntry> {
        self.data
            .read()
            .await
            .list(kind)
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    pub async fn count(&self, kind: TravelKind) -> usize {
        self.data.read().await.list(kind).len()
    }

    /// Validate and append an entry, persisting if file-backed.
    pub async fn add(&self, kind: TravelKind, new: NewTravel) -> Result<TravelEntry, StoreError> {
        let new = new.validate().map_err(StoreError::Invalid)?;
        let entry = TravelEntry::from_new(new);

        let mut data = self.data.write().await;
        data.list_mut(kind).push(entry.clone());

        if let Some(ref path) = self.path {
            if let Err(e) = persist(path, &data).await {
                data.list_mut(kind).pop();
                return Err(e);
            }
        }

        tracing::info!("Added {} travel '{}' ({})", kind, entry.place, entry.id);
        Ok(entry)
    }
}

impl Default for TravelStore {
    fn default() -> Self {
        Self::new()
    }
}

async fn persist(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(snapshot)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    // Write to a sibling temp file then rename so readers never see a partial file.
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}
