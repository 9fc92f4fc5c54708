//! Active G-code encoder.
//!
//! One slot per modal group, G-codes scaled by ten. Index order is the
//! legacy wire layout consumed by status displays and checkpoint logic;
//! see [`super::table::G_CODE_SLOTS`].

use ngc_common::consts::{ACTIVE_G_CODES, NO_CODE};
use ngc_common::interp::block::Block;
use ngc_common::interp::codes::origin_code;
use ngc_common::interp::settings::Settings;

use super::table::{self, from_wire, to_wire};

/// Active G-codes, one named field per array slot.
///
/// Slot 12 is reserved and has no field; it is always written as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveGCodes {
    /// Slot 0.
    pub line_number: i32,
    /// Slot 1 (group 1).
    pub motion_mode: i32,
    /// Slot 2 (group 0): only known while a block is being reported.
    pub non_modal: Option<i32>,
    /// Slot 3: G17..G19.1.
    pub plane: i32,
    /// Slot 4: G40/G41/G42.
    pub cutter_comp: i32,
    /// Slot 5: G20/G21.
    pub units: i32,
    /// Slot 6: G90/G91.
    pub distance_mode: i32,
    /// Slot 7: G93/G94/G95.
    pub feed_mode: i32,
    /// Slot 8: G53..G59.3.
    pub origin: i32,
    /// Slot 9: G43/G49.
    pub tool_length_offset: i32,
    /// Slot 10: G98/G99.
    pub retract_mode: i32,
    /// Slot 11: G61/G61.1/G64.
    pub path_control: i32,
    /// Slot 13: G96/G97, spindle 0 only.
    pub spindle_speed_mode: i32,
    /// Slot 14: G90.1/G91.1.
    pub arc_distance_mode: i32,
    /// Slot 15: G7/G8.
    pub lathe_diameter_mode: i32,
    /// Slot 16: G92 applied.
    pub g92_applied: Option<i32>,
}

impl ActiveGCodes {
    /// Legacy array form.
    pub fn to_array(&self) -> [i32; ACTIVE_G_CODES] {
        [
            self.line_number,
            self.motion_mode,
            to_wire(self.non_modal),
            self.plane,
            self.cutter_comp,
            self.units,
            self.distance_mode,
            self.feed_mode,
            self.origin,
            self.tool_length_offset,
            self.retract_mode,
            self.path_control,
            NO_CODE,
            self.spindle_speed_mode,
            self.arc_distance_mode,
            self.lathe_diameter_mode,
            to_wire(self.g92_applied),
        ]
    }

    /// Decode a legacy array. The reserved slot is ignored.
    pub fn from_array(raw: &[i32; ACTIVE_G_CODES]) -> Self {
        let [
            line_number,
            motion_mode,
            non_modal,
            plane,
            cutter_comp,
            units,
            distance_mode,
            feed_mode,
            origin,
            tool_length_offset,
            retract_mode,
            path_control,
            _reserved,
            spindle_speed_mode,
            arc_distance_mode,
            lathe_diameter_mode,
            g92_applied,
        ] = *raw;

        Self {
            line_number,
            motion_mode,
            non_modal: from_wire(non_modal),
            plane,
            cutter_comp,
            units,
            distance_mode,
            feed_mode,
            origin,
            tool_length_offset,
            retract_mode,
            path_control,
            spindle_speed_mode,
            arc_distance_mode,
            lathe_diameter_mode,
            g92_applied: from_wire(g92_applied),
        }
    }
}

/// Encode the active G-codes.
///
/// `block` is the line just executed, or `None` at initialization.
pub fn encode_active_g_codes(block: Option<&Block>, settings: &Settings) -> ActiveGCodes {
    ActiveGCodes {
        line_number: settings.sequence_number,
        motion_mode: settings.motion_mode,
        non_modal: table::non_modal(block),
        plane: settings.plane.gcode(),
        cutter_comp: settings.cutter_comp_side.gcode(),
        units: settings.length_units.gcode(),
        distance_mode: settings.distance_mode.gcode(),
        feed_mode: settings.feed_mode.gcode(),
        origin: origin_code(settings.origin_index),
        tool_length_offset: table::tool_length_offset_code(settings),
        retract_mode: settings.retract_mode.gcode(),
        path_control: settings.control_mode.gcode(),
        // Spindle 0 only, however many spindles are configured.
        spindle_speed_mode: settings.spindle0().mode.gcode(),
        arc_distance_mode: settings.ijk_distance_mode.arc_gcode(),
        lathe_diameter_mode: table::lathe_diameter_code(settings),
        g92_applied: table::g92_applied(block, settings),
    }
}
