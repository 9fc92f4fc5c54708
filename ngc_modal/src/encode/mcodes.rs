//! Active M-code encoder.

use ngc_common::consts::ACTIVE_M_CODES;
use ngc_common::interp::block::{Block, MModalGroup};
use ngc_common::interp::settings::Settings;

use super::table::{self, from_wire, to_wire};

/// Active M-codes, one named field per array slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMCodes {
    /// Slot 0.
    pub line_number: i32,
    /// Slot 1: M0/M1/M2/M30/M60 from the block.
    pub stopping: Option<i32>,
    /// Slot 2: M3/M4/M5, spindle 0 only.
    pub spindle: i32,
    /// Slot 3: M6/M61 from the block.
    pub tool_change: Option<i32>,
    /// Slot 4: M7, M9, or nothing when only flood is on.
    pub mist: Option<i32>,
    /// Slot 5: M8.
    pub flood: Option<i32>,
    /// Slot 6: M48..M51.
    pub overrides: i32,
    /// Slot 7: M52.
    pub adaptive_feed: Option<i32>,
    /// Slot 8: M53.
    pub feed_hold: Option<i32>,
}

impl ActiveMCodes {
    /// Legacy array form.
    pub fn to_array(&self) -> [i32; ACTIVE_M_CODES] {
        [
            self.line_number,
            to_wire(self.stopping),
            self.spindle,
            to_wire(self.tool_change),
            to_wire(self.mist),
            to_wire(self.flood),
            self.overrides,
            to_wire(self.adaptive_feed),
            to_wire(self.feed_hold),
        ]
    }

    /// Decode a legacy array.
    pub fn from_array(raw: &[i32; ACTIVE_M_CODES]) -> Self {
        let [
            line_number,
            stopping,
            spindle,
            tool_change,
            mist,
            flood,
            overrides,
            adaptive_feed,
            feed_hold,
        ] = *raw;

        Self {
            line_number,
            stopping: from_wire(stopping),
            spindle,
            tool_change: from_wire(tool_change),
            mist: from_wire(mist),
            flood: from_wire(flood),
            overrides,
            adaptive_feed: from_wire(adaptive_feed),
            feed_hold: from_wire(feed_hold),
        }
    }
}

/// Encode the active M-codes.
///
/// Only spindle 0 is considered for direction and speed override.
pub fn encode_active_m_codes(block: Option<&Block>, settings: &Settings) -> ActiveMCodes {
    let spindle = settings.spindle0();

    ActiveMCodes {
        line_number: settings.sequence_number,
        stopping: table::block_mcode(block, MModalGroup::Stopping),
        spindle: spindle.direction.mcode(),
        tool_change: table::block_mcode(block, MModalGroup::ToolChange),
        mist: table::mist_code(settings),
        flood: table::flood_code(settings),
        overrides: table::override_code(settings.feed_override, spindle.speed_override),
        adaptive_feed: table::adaptive_feed_code(settings),
        feed_hold: table::feed_hold_code(settings),
    }
}
