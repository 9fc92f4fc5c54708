//! State tag encoder.
//!
//! Same facts as the active-code arrays, taken from the same mapping
//! table, plus the execution-context flags that decide whether the state
//! may be restored.

use ngc_common::interp::block::{Block, MModalGroup};
use ngc_common::interp::codes::origin_code;
use ngc_common::interp::settings::{
    ControlMode, FeedMode, RetractMode, Settings, SpindleDirection, SpindleMode,
};
use ngc_common::interp::state_tag::{StateField, StateFieldFloat, StateFlags, StateTag};

use super::table::{self, to_wire};

/// Encode a state tag.
///
/// `SPINDLE_ON` keeps the interpreter's historical definition,
/// `!(direction != Stopped)`, which is set while spindle 0 is *stopped*.
/// Likewise `CSS_MODE` is set in constant-RPM mode. Consumers that restore
/// from tags depend on these exact truth tables.
pub fn encode_state_tag(block: Option<&Block>, settings: &Settings) -> StateTag {
    let spindle = settings.spindle0();
    let mut tag = StateTag::default();

    // Execution context
    tag.set_field(StateField::LineNumber, settings.sequence_number);
    tag.set_flag(StateFlags::IN_REMAP, settings.in_remap());
    tag.set_flag(StateFlags::IN_SUB, settings.in_subroutine());
    tag.set_flag(StateFlags::EXTERNAL_FILE, settings.is_external_file());
    tag.set_flag(StateFlags::RESTORABLE, settings.is_restorable());

    // G groups
    tag.set_field(StateField::GMode0, to_wire(table::non_modal(block)));
    tag.set_field(StateField::MotionMode, settings.motion_mode);
    tag.set_field(StateField::Plane, settings.plane.gcode());
    tag.set_field(StateField::CutterComp, settings.cutter_comp_side.gcode());
    tag.set_flag(StateFlags::UNITS, settings.length_units.is_inches());
    tag.set_flag(StateFlags::DISTANCE_MODE, settings.distance_mode.is_absolute());
    tag.set_flag(
        StateFlags::FEED_INVERSE_TIME,
        settings.feed_mode == FeedMode::InverseTime,
    );
    tag.set_flag(
        StateFlags::FEED_UPM,
        settings.feed_mode == FeedMode::UnitsPerMinute,
    );
    tag.set_field(StateField::Origin, origin_code(settings.origin_index));
    tag.set_flag(StateFlags::G92_IS_APPLIED, settings.g92_offset_applied);
    tag.set_flag(StateFlags::TOOL_OFFSETS_ON, settings.tool_offset.is_active());
    tag.set_flag(
        StateFlags::RETRACT_OLDZ,
        settings.retract_mode == RetractMode::OldZ,
    );
    tag.set_flag(
        StateFlags::BLEND,
        settings.control_mode == ControlMode::Continuous,
    );
    tag.set_flag(
        StateFlags::EXACT_STOP,
        settings.control_mode == ControlMode::ExactStop,
    );
    tag.set_field_float(StateFieldFloat::PathTolerance, settings.tolerance);
    tag.set_field_float(
        StateFieldFloat::NaiveCamTolerance,
        settings.naivecam_tolerance,
    );
    tag.set_flag(StateFlags::CSS_MODE, spindle.mode == SpindleMode::ConstantRpm);
    tag.set_flag(StateFlags::IJK_ABS, settings.ijk_distance_mode.is_absolute());
    tag.set_flag(StateFlags::DIAMETER_MODE, settings.lathe_diameter_mode);

    // M groups
    tag.set_field(
        StateField::MModes4,
        to_wire(table::block_mcode(block, MModalGroup::Stopping)),
    );
    #[allow(clippy::nonminimal_bool)]
    let spindle_on = !(spindle.direction != SpindleDirection::Stopped);
    tag.set_flag(StateFlags::SPINDLE_ON, spindle_on);
    tag.set_flag(
        StateFlags::SPINDLE_CW,
        spindle.direction == SpindleDirection::Clockwise,
    );
    tag.set_field(
        StateField::Toolchange,
        to_wire(table::block_mcode(block, MModalGroup::ToolChange)),
    );
    tag.set_flag(StateFlags::MIST, settings.mist);
    tag.set_flag(StateFlags::FLOOD, settings.flood);
    tag.set_flag(StateFlags::FEED_OVERRIDE, settings.feed_override);
    tag.set_flag(StateFlags::SPEED_OVERRIDE, spindle.speed_override);
    tag.set_flag(StateFlags::ADAPTIVE_FEED, settings.adaptive_feed);
    tag.set_flag(StateFlags::FEED_HOLD, settings.feed_hold);

    tag.set_field_float(StateFieldFloat::Feed, settings.feed_rate);
    tag.set_field_float(StateFieldFloat::Speed, spindle.speed);

    tag
}
