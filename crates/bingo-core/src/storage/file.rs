//! File-per-record storage backend
//!
//! Every card lives in `<data_dir>/<id>.json` as pretty-printed JSON:
//!
//! ```text
//! data/
//! ├── 0a1b2c3d.json
//! ├── 7f3e9910.json
//! └── .7f3e9910.5c1d….tmp   # in-flight write, never listed
//! ```
//!
//! Writes go to a temp file in the same directory and are renamed over the
//! record, so a concurrent reader sees either the old or the new version.
//! There is no locking between writers; the last rename wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::card::{null_as_default, sort_summaries, Card, CardDraft, CardId, CardSummary, Prediction};
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{allocate_id, CardStore};

const RECORD_EXT: &str = "json";

/// On-disk shape of a card as read back.
///
/// `name` may be missing or `null` in records written by older versions.
/// The stored `id` is ignored on read: the file name is authoritative, and
/// listings report the file stem too so every listed id can be fetched.
#[derive(Deserialize)]
struct StoredCard {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    predictions: Vec<Prediction>,
}

/// Card store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::Backend(format!("failed to create data dir {}: {}", dir.display(), e))
        })?;
        debug!("card store opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record file for `id`.
    pub fn path_for(&self, id: &CardId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_EXT))
    }

    fn record_exists(&self, id: &CardId) -> StoreResult<bool> {
        Ok(self.path_for(id).try_exists()?)
    }

    /// Serialize `card` and atomically replace its record file.
    fn write_record(&self, card: &Card) -> StoreResult<()> {
        let body = serde_json::to_vec_pretty(card)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let tmp = self.dir.join(format!(".{}.{}.tmp", card.id, nonce));
        let target = self.path_for(&card.id);

        let written = write_file_synced(&tmp, &body).and_then(|_| fs::rename(&tmp, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Backend(format!(
                "failed to write {}: {}",
                target.display(),
                e
            )));
        }
        Ok(())
    }

    fn read_record(&self, id: &CardId) -> StoreResult<Card> {
        let path = self.path_for(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredCard =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Card {
            id: id.clone(),
            name: stored.name,
            predictions: stored.predictions,
        })
    }
}

impl CardStore for FileStore {
    fn create(&self, draft: CardDraft) -> StoreResult<Card> {
        let id = allocate_id(|id| self.record_exists(id))?;
        let card = Card::from_draft(id, draft);
        self.write_record(&card)?;
        info!("created card {}", card.id);
        Ok(card)
    }

    fn get(&self, id: &str) -> StoreResult<Card> {
        let id = CardId::parse(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        self.read_record(&id)
    }

    fn update(&self, id: &str, draft: CardDraft) -> StoreResult<Card> {
        let id = CardId::parse(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        if !self.record_exists(&id)? {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let card = Card::from_draft(id, draft);
        self.write_record(&card)?;
        info!("updated card {}", card.id);
        Ok(card)
    }

    /// Lenient scan: unreadable or malformed records are logged and skipped,
    /// and a missing directory lists as empty. Never returns an error.
    fn list(&self) -> StoreResult<Vec<CardSummary>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to scan card dir {}: {}", self.dir.display(), e);
                return Ok(Vec::new());
            }
        };

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            // `is_file` follows symlinks, so linked records are listed too.
            if path.extension().map_or(true, |ext| ext != RECORD_EXT) || !path.is_file() {
                continue;
            }
            let stem = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };

            match read_summary(&path, &stem) {
                Ok(summary) => summaries.push(summary),
                Err(reason) => warn!("skipping card record {}: {}", path.display(), reason),
            }
        }

        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}

fn write_file_synced(path: &Path, body: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(body)?;
    file.sync_all()
}

fn read_summary(path: &Path, stem: &str) -> Result<CardSummary, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| e.to_string())?;
    summarize(&value, stem).ok_or_else(|| "record is not a JSON object".to_string())
}

/// Derive a listing row from a raw record, filling gaps the way old records
/// need: empty name, zero predictions.
///
/// The id is always the file stem. A stored id that disagrees with it is
/// reported but not used, since lookups go by file name.
fn summarize(value: &Value, stem: &str) -> Option<CardSummary> {
    let record = value.as_object()?;

    if let Some(stored) = record.get("id").and_then(Value::as_str) {
        if !stored.is_empty() && stored != stem {
            warn!("card record {} carries mismatched id {:?}", stem, stored);
        }
    }
    let id = stem.to_string();
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let count = record
        .get("predictions")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    Some(CardSummary { id, name, count })
}
