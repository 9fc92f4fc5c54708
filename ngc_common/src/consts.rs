//! System-wide constants for the NGC workspace.
//!
//! Single source of truth for array sizes and numeric limits.
//! Imported by all crates; do not duplicate these values elsewhere.

/// Number of slots in the active G-code array.
pub const ACTIVE_G_CODES: usize = 17;

/// Number of slots in the active M-code array.
pub const ACTIVE_M_CODES: usize = 9;

/// Number of slots in the active settings array.
pub const ACTIVE_SETTINGS: usize = 5;

/// Number of G modal groups a block can carry (group ids 0..=16).
pub const G_MODE_GROUPS: usize = 17;

/// Number of M modal groups a block can carry (group ids 0..=10).
pub const M_MODE_GROUPS: usize = 11;

/// Maximum number of spindles known to the interpreter.
pub const MAX_SPINDLES: usize = 8;

/// Maximum subroutine nesting depth (call frames, including the top level).
pub const MAX_CALL_LEVELS: usize = 10;

/// Highest work-offset index (G59.3); 0 is machine coordinates (G53).
pub const MAX_ORIGIN_INDEX: u8 = 9;

/// Encoded-code sentinel: "not applicable / no active code".
pub const NO_CODE: i32 = -1;

/// Default snapshot file consumed by the `ngc_modal` binary.
pub const DEFAULT_SNAPSHOT_PATH: &str = "config/snapshot.toml";
