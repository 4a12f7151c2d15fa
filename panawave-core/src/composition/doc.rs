//! `.pwv` document I/O.
//!
//! A document is one well-formed JSON object with two sibling keys:
//! `persistent_state` and `ring_array` (ring-id string → ring record).
//! Writes replace the target atomically: the existing file is renamed to a
//! `~` backup first, and the backup is only deleted after the new content
//! lands; any failure restores it.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::Composition;
use crate::error::{CorruptDocumentError, WriteDocumentError};
use crate::geometry::Polygon;
use crate::ring::{RingId, StickerRing};
use crate::state::PersistentState;

#[derive(Serialize, Deserialize)]
struct Document {
    persistent_state: PersistentRecord,
    ring_array: BTreeMap<String, RingRecord>,
}

#[derive(Serialize, Deserialize)]
struct PersistentRecord {
    master_orbit_speed: f64,
    /// Ring ids as decimal strings, matching the `ring_array` keys.
    unlocked_rings: Vec<String>,
    base_sticker: Option<Polygon>,
}

#[derive(Serialize, Deserialize)]
struct RingRecord {
    radius: f64,
    count: u32,
    #[serde(rename = "offsetDegrees")]
    offset_degrees: f64,
    scaler_list: Vec<u32>,
    base_sticker: Option<Polygon>,
}

fn parse_ring_id(key: &str) -> Result<RingId, CorruptDocumentError> {
    key.parse::<u32>()
        .map(RingId)
        .map_err(|_| CorruptDocumentError::InvalidRingId {
            key: key.to_string(),
        })
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push("~");
    PathBuf::from(name)
}

/// Rename any existing file to its backup, run `write`, then delete the
/// backup. If `write` fails the backup is moved back so the previous file
/// survives byte-for-byte.
pub(super) fn replace_via<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let backup = backup_path(path);
    let had_backup = path.exists();
    if had_backup {
        fs::rename(path, &backup)?;
    }
    match write(path) {
        Ok(()) => {
            if had_backup {
                fs::remove_file(&backup)?;
            }
            Ok(())
        }
        Err(err) => {
            if had_backup {
                let _ = fs::remove_file(path);
                let _ = fs::rename(&backup, path);
            }
            Err(err)
        }
    }
}

impl Composition {
    fn document(&self) -> Document {
        Document {
            persistent_state: PersistentRecord {
                master_orbit_speed: self.persistent_state.master_orbit_speed,
                unlocked_rings: self
                    .persistent_state
                    .unlocked_rings
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
                base_sticker: self.persistent_state.base_sticker.clone(),
            },
            ring_array: self
                .rings
                .iter()
                .map(|ring| {
                    (
                        ring.id().to_string(),
                        RingRecord {
                            radius: ring.radius(),
                            count: ring.count(),
                            offset_degrees: ring.offset_degrees(),
                            scaler_list: ring.scaler_list().to_vec(),
                            base_sticker: ring.base_sticker().cloned(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Write the composition to `path`, atomically replacing any existing
    /// file there.
    pub fn write_out(&self, path: &Path) -> Result<(), WriteDocumentError> {
        let json = serde_json::to_string_pretty(&self.document())?;
        replace_via(path, |p| fs::write(p, json.as_bytes()))?;
        info!("wrote {} rings to {}", self.rings.len(), path.display());
        Ok(())
    }

    /// Populate this composition from `path`. The document is parsed and
    /// validated in full before anything is committed, so a corrupt file
    /// leaves the in-memory composition untouched. `animating` resets to
    /// false. Stale `unlocked_rings` ids are pruned.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), CorruptDocumentError> {
        let json = fs::read_to_string(path)?;
        let doc: Document = serde_json::from_str(&json)?;

        // Base stickers deserialize straight through serde, bypassing the
        // ≥3-point assertion in the Polygon constructors; check them here
        // so a corrupt file can't materialize degenerate stickers.
        if let Some(p) = &doc.persistent_state.base_sticker {
            if p.num_points() < 3 {
                return Err(CorruptDocumentError::DegenerateBaseSticker {
                    points: p.num_points(),
                });
            }
        }

        let mut records: Vec<(RingId, RingRecord)> = Vec::with_capacity(doc.ring_array.len());
        for (key, record) in doc.ring_array {
            let id = parse_ring_id(&key)?;
            if let Some(p) = &record.base_sticker {
                if p.num_points() < 3 {
                    return Err(CorruptDocumentError::DegenerateRingSticker {
                        id,
                        points: p.num_points(),
                    });
                }
            }
            records.push((id, record));
        }
        records.sort_by_key(|(id, _)| *id);

        let mut rings: Vec<StickerRing> = Vec::with_capacity(records.len());
        for (id, record) in records {
            if rings.iter().any(|r| r.id() == id) {
                return Err(CorruptDocumentError::DuplicateRingId(id));
            }
            let mut ring = StickerRing::new(
                id,
                record.radius,
                record.count,
                record.offset_degrees,
                record.scaler_list,
                record.base_sticker,
            )
            .map_err(|source| CorruptDocumentError::InvalidRing { id, source })?;
            if ring.base_sticker().is_none() && doc.persistent_state.base_sticker.is_some() {
                ring.inherited_base = doc.persistent_state.base_sticker.clone();
                ring.regenerate();
            }
            rings.push(ring);
        }

        let mut unlocked: BTreeSet<RingId> = BTreeSet::new();
        for key in &doc.persistent_state.unlocked_rings {
            let id = parse_ring_id(key)?;
            if rings.iter().any(|r| r.id() == id) {
                unlocked.insert(id);
            } else {
                debug!("pruning stale unlocked ring id {id}");
            }
        }

        info!("loaded {} rings from {}", rings.len(), path.display());
        self.commit_loaded(
            rings,
            PersistentState {
                master_orbit_speed: doc.persistent_state.master_orbit_speed,
                unlocked_rings: unlocked,
                base_sticker: doc.persistent_state.base_sticker,
            },
        );
        Ok(())
    }

    /// Convenience constructor for collaborators that open a document
    /// straight into a fresh composition.
    pub fn from_file(path: &Path) -> Result<Self, CorruptDocumentError> {
        let mut composition = Composition::new();
        composition.load_from_file(path)?;
        Ok(composition)
    }
}
