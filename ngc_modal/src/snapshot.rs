//! Snapshot file loading.
//!
//! A snapshot is a TOML document holding one `Settings` value and,
//! optionally, the block just executed. It is how recorded interpreter
//! state is fed to the encoders outside a running interpreter.
//!
//! ```toml
//! [shared]
//! service_name = "ngc-modal"
//!
//! [settings]
//! plane = "XZ"
//!
//! [block]
//! g = [{ group = 0, code = 920 }]
//! ```
//!
//! Loading fails fast: unknown enum variants, unknown modal groups,
//! negative codes, a group selected twice, a missing spindle 0 and an
//! origin index past G59.3 are all rejected before any encoder runs.

use std::path::Path;

use ngc_common::config::{ConfigError, ConfigLoader, SharedConfig};
use ngc_common::interp::block::{Block, BlockError};
use ngc_common::interp::settings::Settings;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid block: {0}")]
    Block(#[from] BlockError),

    #[error("group {group} selected more than once in one block")]
    DuplicateGroup { group: u8 },

    #[error("invalid settings: {0}")]
    Settings(String),
}

/// One modal-group selection in a snapshot block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ModalSelection {
    /// Raw modal group number.
    pub group: u8,
    /// Encoded code (G-codes × 10).
    pub code: i32,
}

/// Block section of a snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockSnapshot {
    #[serde(default)]
    pub g: Vec<ModalSelection>,
    #[serde(default)]
    pub m: Vec<ModalSelection>,
}

impl BlockSnapshot {
    /// Build a validated [`Block`].
    pub fn to_block(&self) -> Result<Block, SnapshotError> {
        let mut block = Block::new();
        for (i, sel) in self.g.iter().enumerate() {
            if self.g[..i].iter().any(|s| s.group == sel.group) {
                return Err(SnapshotError::DuplicateGroup { group: sel.group });
            }
            block.select_raw_g(sel.group, sel.code)?;
        }
        for (i, sel) in self.m.iter().enumerate() {
            if self.m[..i].iter().any(|s| s.group == sel.group) {
                return Err(SnapshotError::DuplicateGroup { group: sel.group });
            }
            block.select_raw_m(sel.group, sel.code)?;
        }
        Ok(block)
    }
}

/// On-disk snapshot layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub settings: Settings,
    pub block: Option<BlockSnapshot>,
}

/// A validated snapshot, ready for encoding.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub shared: SharedConfig,
    pub settings: Settings,
    pub block: Option<Block>,
}

impl LoadedSnapshot {
    /// Block reference in the form the encoders take.
    #[inline]
    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }
}

/// Load and validate a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<LoadedSnapshot, SnapshotError> {
    debug!("Loading snapshot from {}", path.display());
    let file = SnapshotFile::load(path)?;
    validate_snapshot(file)
}

/// Parse and validate a snapshot held in memory.
pub fn load_snapshot_from_str(content: &str) -> Result<LoadedSnapshot, SnapshotError> {
    let file = SnapshotFile::from_toml(content)?;
    validate_snapshot(file)
}

fn validate_snapshot(file: SnapshotFile) -> Result<LoadedSnapshot, SnapshotError> {
    file.shared.validate()?;
    file.settings.validate().map_err(|e| {
        warn!("Rejected snapshot settings: {e}");
        SnapshotError::Settings(e)
    })?;

    let block = file
        .block
        .as_ref()
        .map(BlockSnapshot::to_block)
        .transpose()
        .inspect_err(|e| warn!("Rejected snapshot block: {e}"))?;

    debug!(
        "Snapshot OK: line={}, block={}",
        file.settings.sequence_number,
        block.is_some()
    );

    Ok(LoadedSnapshot {
        shared: file.shared,
        settings: file.settings,
        block,
    })
}
