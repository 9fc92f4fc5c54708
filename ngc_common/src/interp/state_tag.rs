//! State tag: named re-encoding of interpreter modal state.
//!
//! A tag travels with queued motion so that a paused or aborted program
//! can be resumed with the exact modal state it was in. It is a superset
//! of the active G/M-code arrays: packed codes where a code is the natural
//! value (plane, cutter comp, origin), booleans everywhere else, plus the
//! execution-context flags (remap, subroutine, external file) that decide
//! whether the state may be restored at all.
//!
//! [`PackedStateTag`] is the `#[repr(C)]` transport form.

use bitflags::bitflags;
use static_assertions::const_assert_eq;

bitflags! {
    /// Boolean facts carried by a [`StateTag`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        /// Length units are inches.
        const UNITS             = 1 << 0;
        /// Axis words are absolute (G90).
        const DISTANCE_MODE     = 1 << 1;
        /// Tool length offset in effect (G43).
        const TOOL_OFFSETS_ON   = 1 << 2;
        /// Canned cycles retract to old Z (G98).
        const RETRACT_OLDZ      = 1 << 3;
        /// Continuous path blending (G64).
        const BLEND             = 1 << 4;
        /// Exact stop (G61.1).
        const EXACT_STOP        = 1 << 5;
        /// Inverse-time feed (G93).
        const FEED_INVERSE_TIME = 1 << 6;
        /// Units-per-minute feed (G94).
        const FEED_UPM          = 1 << 7;
        /// Set when spindle 0 runs at constant RPM (G97).
        const CSS_MODE          = 1 << 8;
        /// Arc offsets are absolute (G90.1).
        const IJK_ABS           = 1 << 9;
        /// Lathe diameter mode (G7).
        const DIAMETER_MODE     = 1 << 10;
        /// A G92 offset is applied.
        const G92_IS_APPLIED    = 1 << 11;
        /// Set when spindle 0 is stopped; see `encode_state_tag`.
        const SPINDLE_ON        = 1 << 12;
        /// Spindle 0 turns clockwise.
        const SPINDLE_CW        = 1 << 13;
        /// Mist coolant on.
        const MIST              = 1 << 14;
        /// Flood coolant on.
        const FLOOD             = 1 << 15;
        /// Feed override enabled.
        const FEED_OVERRIDE     = 1 << 16;
        /// Spindle 0 speed override enabled.
        const SPEED_OVERRIDE    = 1 << 17;
        /// Adaptive feed enabled.
        const ADAPTIVE_FEED     = 1 << 18;
        /// Feed hold enabled.
        const FEED_HOLD         = 1 << 19;
        /// Top-level state, safe to checkpoint and restore.
        const RESTORABLE        = 1 << 20;
        /// Inside a remapped-code handler.
        const IN_REMAP          = 1 << 21;
        /// Inside an ordinary subroutine.
        const IN_SUB            = 1 << 22;
        /// Current file differs from the top-level file.
        const EXTERNAL_FILE     = 1 << 23;
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Integer fields of a [`StateTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateField {
    LineNumber = 0,
    /// Group-0 code of the line, or -1.
    GMode0 = 1,
    CutterComp = 2,
    MotionMode = 3,
    Plane = 4,
    /// Stopping code (M group 4) of the line, or -1.
    MModes4 = 5,
    Origin = 6,
    /// Tool change code (M group 6) of the line, or -1.
    Toolchange = 7,
}

impl StateField {
    /// Number of integer fields.
    pub const COUNT: usize = 8;

    /// Every field in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LineNumber,
        Self::GMode0,
        Self::CutterComp,
        Self::MotionMode,
        Self::Plane,
        Self::MModes4,
        Self::Origin,
        Self::Toolchange,
    ];

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LineNumber => "line_number",
            Self::GMode0 => "g_mode_0",
            Self::CutterComp => "cutter_comp",
            Self::MotionMode => "motion_mode",
            Self::Plane => "plane",
            Self::MModes4 => "m_modes_4",
            Self::Origin => "origin",
            Self::Toolchange => "toolchange",
        }
    }
}

/// Floating-point fields of a [`StateTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateFieldFloat {
    Feed = 0,
    Speed = 1,
    PathTolerance = 2,
    NaiveCamTolerance = 3,
}

impl StateFieldFloat {
    /// Number of floating-point fields.
    pub const COUNT: usize = 4;

    /// Every field in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Feed,
        Self::Speed,
        Self::PathTolerance,
        Self::NaiveCamTolerance,
    ];

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Speed => "speed",
            Self::PathTolerance => "path_tolerance",
            Self::NaiveCamTolerance => "naive_cam_tolerance",
        }
    }
}

/// Modal state tag.
///
/// `Default` is the all-zero, invalid tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateTag {
    pub flags: StateFlags,
    fields: [i32; StateField::COUNT],
    fields_float: [f64; StateFieldFloat::COUNT],
}

impl StateTag {
    #[inline]
    pub fn field(&self, field: StateField) -> i32 {
        self.fields[field as usize]
    }

    #[inline]
    pub fn set_field(&mut self, field: StateField, value: i32) {
        self.fields[field as usize] = value;
    }

    #[inline]
    pub fn field_float(&self, field: StateFieldFloat) -> f64 {
        self.fields_float[field as usize]
    }

    #[inline]
    pub fn set_field_float(&mut self, field: StateFieldFloat, value: f64) {
        self.fields_float[field as usize] = value;
    }

    #[inline]
    pub fn flag(&self, flag: StateFlags) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: StateFlags, value: bool) {
        self.flags.set(flag, value);
    }

    /// True once the tag has been written by the encoder.
    ///
    /// Every encoded tag carries a work-offset code (>= 530) in its origin
    /// field; a default tag carries 0.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.field(StateField::Origin) != 0
    }

    /// Transport form.
    #[inline]
    pub fn pack(&self) -> PackedStateTag {
        PackedStateTag {
            fields: self.fields,
            fields_float: self.fields_float,
            packed_flags: self.flags.bits(),
            _pad: [0u8; 4],
        }
    }

    /// Rebuild a tag from its transport form. Unknown flag bits are dropped.
    #[inline]
    pub fn unpack(packed: &PackedStateTag) -> Self {
        Self {
            flags: StateFlags::from_bits_truncate(packed.packed_flags),
            fields: packed.fields,
            fields_float: packed.fields_float,
        }
    }
}

/// Plain-old-data state tag for queues and checkpoints (72 bytes).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PackedStateTag {
    /// Integer fields in [`StateField`] order.
    pub fields: [i32; StateField::COUNT],
    /// Float fields in [`StateFieldFloat`] order.
    pub fields_float: [f64; StateFieldFloat::COUNT],
    /// [`StateFlags`] bits.
    pub packed_flags: u32,
    /// Padding to 72 bytes.
    pub _pad: [u8; 4],
}

const_assert_eq!(core::mem::size_of::<PackedStateTag>(), 72);

impl Default for PackedStateTag {
    fn default() -> Self {
        StateTag::default().pack()
    }
}

impl From<StateTag> for PackedStateTag {
    fn from(tag: StateTag) -> Self {
        tag.pack()
    }
}

impl From<PackedStateTag> for StateTag {
    fn from(packed: PackedStateTag) -> Self {
        StateTag::unpack(&packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_is_invalid() {
        let tag = StateTag::default();
        assert!(!tag.is_valid());
        assert!(tag.flags.is_empty());
    }

    #[test]
    fn field_indices_match_all_tables() {
        for (i, field) in StateField::ALL.iter().enumerate() {
            assert_eq!(*field as usize, i);
        }
        for (i, field) in StateFieldFloat::ALL.iter().enumerate() {
            assert_eq!(*field as usize, i);
        }
    }

    #[test]
    fn twenty_four_distinct_flags() {
        assert_eq!(StateFlags::all().iter().count(), 24);
        assert_eq!(StateFlags::all().bits(), 0x00FF_FFFF);
    }

    #[test]
    fn unpack_drops_unknown_flag_bits() {
        let packed = PackedStateTag {
            packed_flags: StateFlags::MIST.bits() | 0x8000_0000,
            ..Default::default()
        };
        let tag = StateTag::unpack(&packed);
        assert_eq!(tag.flags, StateFlags::MIST);
    }

    #[test]
    fn pack_preserves_fields() {
        let mut tag = StateTag::default();
        tag.set_field(StateField::Origin, 540);
        tag.set_field(StateField::GMode0, -1);
        tag.set_field_float(StateFieldFloat::Speed, 1200.0);
        tag.set_flag(StateFlags::RESTORABLE, true);

        let back: StateTag = PackedStateTag::from(tag).into();
        assert_eq!(back, tag);
        assert!(back.is_valid());
    }
}
