use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use planning::session::Session;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

/// Serialized bundle of one whole session. Round-trippable: saving and
/// re-loading reproduces identical state, batch ids and counter included.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,

    pub session: Session,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Unable to access snapshot. path: {path}, cause: {cause}")]
    Io { path: PathBuf, cause: std::io::Error },

    /// Integrity is not verified beyond deserialization; a corrupt or
    /// foreign file fails here and leaves the caller's state unchanged.
    #[error("Corrupt or foreign snapshot. path: {path}, cause: {cause}")]
    Deserialization { path: PathBuf, cause: serde_json::Error },

    #[error("Unable to serialize snapshot. path: {path}, cause: {cause}")]
    Serialization { path: PathBuf, cause: serde_json::Error },
}

pub fn load(path: &Path) -> Result<Session, SnapshotError> {
    let snapshot_file = File::open(path).map_err(|cause| SnapshotError::Io {
        path: path.to_path_buf(),
        cause,
    })?;

    let mut de = serde_json::Deserializer::from_reader(snapshot_file);
    let snapshot = Snapshot::deserialize(&mut de).map_err(|cause| SnapshotError::Deserialization {
        path: path.to_path_buf(),
        cause,
    })?;

    info!("Loaded session snapshot. path: {}, saved_at: {}", path.display(), snapshot.saved_at);

    Ok(snapshot.session)
}

pub fn save(session: &Session, path: &Path) -> Result<(), SnapshotError> {
    let snapshot = Snapshot {
        saved_at: OffsetDateTime::now_utc(),
        session: session.clone(),
    };

    let snapshot_file = File::create(path).map_err(|cause| SnapshotError::Io {
        path: path.to_path_buf(),
        cause,
    })?;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(snapshot_file, formatter);
    snapshot
        .serialize(&mut ser)
        .map_err(|cause| SnapshotError::Serialization {
            path: path.to_path_buf(),
            cause,
        })?;

    let mut snapshot_file = ser.into_inner();
    let _written = snapshot_file
        .write(b"\n")
        .map_err(|cause| SnapshotError::Io {
            path: path.to_path_buf(),
            cause,
        })?;

    info!("Saved session snapshot. path: {}", path.display());

    Ok(())
}
