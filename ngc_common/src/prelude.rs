//! Prelude module for common re-exports.
//!
//! `use ngc_common::prelude::*;` brings in the interpreter snapshot types
//! without listing individual paths.

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{ACTIVE_G_CODES, ACTIVE_M_CODES, ACTIVE_SETTINGS, NO_CODE};

// ─── Interpreter Snapshot ───────────────────────────────────────────
pub use crate::interp::block::{Block, BlockError, GModalGroup, MModalGroup};
pub use crate::interp::settings::{
    CallFrame, ControlMode, CutterCompSide, DistanceMode, FeedMode, LengthUnits, Plane,
    RetractMode, Settings, SpindleDirection, SpindleMode, SpindleState, ToolOffset,
};

// ─── State Tag ──────────────────────────────────────────────────────
pub use crate::interp::state_tag::{
    PackedStateTag, StateField, StateFieldFloat, StateFlags, StateTag,
};
