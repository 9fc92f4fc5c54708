//! Slot layout and the per-group rules shared by every encoder.
//!
//! Code values for modal enums come from the enums themselves
//! (`Plane::gcode()` and friends in `ngc_common`). The rules here are the
//! ones that need more than one input: block-derived slots, the G92
//! recovery rule, the coolant and override collapses.

use ngc_common::consts::{ACTIVE_G_CODES, ACTIVE_M_CODES, ACTIVE_SETTINGS, NO_CODE};
use ngc_common::interp::block::{Block, GModalGroup, MModalGroup};
use ngc_common::interp::codes::{
    G_7, G_8, G_43, G_49, G_92_3, M_7, M_8, M_9, M_48, M_49, M_50, M_51, M_52, M_53,
};
use ngc_common::interp::settings::Settings;

// ─── Wire Layout ────────────────────────────────────────────────────

/// Meaning of each active G-code array index.
pub const G_CODE_SLOTS: [&str; ACTIVE_G_CODES] = [
    "line_number",
    "motion_mode",
    "non_modal",
    "plane",
    "cutter_comp",
    "units",
    "distance_mode",
    "feed_mode",
    "origin",
    "tool_length_offset",
    "retract_mode",
    "path_control",
    "reserved",
    "spindle_speed_mode",
    "arc_distance_mode",
    "lathe_diameter_mode",
    "g92_applied",
];

/// Meaning of each active M-code array index.
pub const M_CODE_SLOTS: [&str; ACTIVE_M_CODES] = [
    "line_number",
    "stopping",
    "spindle",
    "tool_change",
    "mist",
    "flood",
    "overrides",
    "adaptive_feed",
    "feed_hold",
];

/// Meaning of each active settings array index.
pub const SETTINGS_SLOTS: [&str; ACTIVE_SETTINGS] = [
    "line_number",
    "feed_rate",
    "spindle_speed",
    "tolerance",
    "naivecam_tolerance",
];

/// Index of the reserved G-code slot (always `NO_CODE`).
pub const RESERVED_G_SLOT: usize = 12;

// ─── Sentinel Helpers ───────────────────────────────────────────────

#[inline]
pub(crate) fn to_wire(code: Option<i32>) -> i32 {
    code.unwrap_or(NO_CODE)
}

#[inline]
pub(crate) fn from_wire(raw: i32) -> Option<i32> {
    (raw != NO_CODE).then_some(raw)
}

// ─── Block-Derived Rules ────────────────────────────────────────────

/// Group-0 code of the line; `None` without a block.
#[inline]
pub fn non_modal(block: Option<&Block>) -> Option<i32> {
    block.and_then(|b| b.g_mode(GModalGroup::NonModal))
}

/// M-code selected in `group` on the line; `None` without a block.
#[inline]
pub fn block_mcode(block: Option<&Block>, group: MModalGroup) -> Option<i32> {
    block.and_then(|b| b.m_mode(group))
}

/// G92-applied slot.
///
/// Group 0 is cleared on startup, program end and abort, so the block
/// alone cannot tell that a G92 offset is still in effect. The persisted
/// `g92_offset_applied` fills the gap:
/// - no block (startup): G92.3 when applied, else nothing;
/// - block without a group-0 code (end/abort line): G92.3 when applied;
/// - otherwise the block's offset-state entry, verbatim.
pub fn g92_applied(block: Option<&Block>, settings: &Settings) -> Option<i32> {
    match block {
        None => settings.g92_offset_applied.then_some(G_92_3),
        Some(b) if settings.g92_offset_applied && b.g_mode(GModalGroup::NonModal).is_none() => {
            Some(G_92_3)
        }
        Some(b) => b.g_mode(GModalGroup::OffsetState),
    }
}

// ─── Settings-Derived Rules ─────────────────────────────────────────

#[inline]
pub fn tool_length_offset_code(settings: &Settings) -> i32 {
    if settings.tool_offset.is_active() { G_43 } else { G_49 }
}

#[inline]
pub fn lathe_diameter_code(settings: &Settings) -> i32 {
    if settings.lathe_diameter_mode { G_7 } else { G_8 }
}

/// Mist slot. Flood alone reports nothing here; the flood slot carries it.
#[inline]
pub fn mist_code(settings: &Settings) -> Option<i32> {
    if settings.mist {
        Some(M_7)
    } else if settings.flood {
        None
    } else {
        Some(M_9)
    }
}

#[inline]
pub fn flood_code(settings: &Settings) -> Option<i32> {
    settings.flood.then_some(M_8)
}

/// Feed/speed override pair collapsed into one code.
///
/// Both disabled reports M49, both enabled M48.
#[inline]
pub const fn override_code(feed_override: bool, speed_override: bool) -> i32 {
    match (feed_override, speed_override) {
        (true, true) => M_48,
        (true, false) => M_50,
        (false, true) => M_51,
        (false, false) => M_49,
    }
}

#[inline]
pub fn adaptive_feed_code(settings: &Settings) -> Option<i32> {
    settings.adaptive_feed.then_some(M_52)
}

#[inline]
pub fn feed_hold_code(settings: &Settings) -> Option<i32> {
    settings.feed_hold.then_some(M_53)
}
