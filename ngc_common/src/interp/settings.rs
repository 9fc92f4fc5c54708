//! Interpreter settings snapshot.
//!
//! All modal enums use `#[repr(u8)]` with `from_u8` for raw decoding, and
//! carry their own code mapping (`gcode()` / `mcode()`). Those mappings are
//! the single table shared by the active-code arrays and the state tag, so
//! the two representations cannot drift apart.

use serde::{Deserialize, Serialize};

use super::codes::*;
use crate::consts::{MAX_CALL_LEVELS, MAX_ORIGIN_INDEX, MAX_SPINDLES};

// ─── Modal Enums ────────────────────────────────────────────────────

/// Active plane selection (G17..G19.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Plane {
    XY = 1,
    YZ = 2,
    XZ = 3,
    UV = 4,
    VW = 5,
    UW = 6,
}

impl Plane {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::XY),
            2 => Some(Self::YZ),
            3 => Some(Self::XZ),
            4 => Some(Self::UV),
            5 => Some(Self::VW),
            6 => Some(Self::UW),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::XY => G_17,
            Self::XZ => G_18,
            Self::YZ => G_19,
            Self::UV => G_17_1,
            Self::UW => G_18_1,
            Self::VW => G_19_1,
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::XY
    }
}

/// Cutter radius compensation side (G40/G41/G42).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CutterCompSide {
    Off = 0,
    Right = 1,
    Left = 2,
}

impl CutterCompSide {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Right),
            2 => Some(Self::Left),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::Right => G_42,
            Self::Left => G_41,
            Self::Off => G_40,
        }
    }
}

impl Default for CutterCompSide {
    fn default() -> Self {
        Self::Off
    }
}

/// Program length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LengthUnits {
    Inches = 1,
    Millimeters = 2,
    /// Has no G-code of its own; reported as metric (G21).
    Centimeters = 3,
}

impl LengthUnits {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Inches),
            2 => Some(Self::Millimeters),
            3 => Some(Self::Centimeters),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_inches(&self) -> bool {
        matches!(self, Self::Inches)
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        if self.is_inches() { G_20 } else { G_21 }
    }
}

impl Default for LengthUnits {
    fn default() -> Self {
        Self::Millimeters
    }
}

/// Absolute or incremental interpretation of coordinates.
///
/// Used twice: for axis words (G90/G91) and for arc IJK offsets (G90.1/G91.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DistanceMode {
    Absolute = 0,
    Incremental = 1,
}

impl DistanceMode {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absolute),
            1 => Some(Self::Incremental),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute)
    }

    /// Axis-word distance code (G90/G91).
    #[inline]
    pub const fn gcode(&self) -> i32 {
        if self.is_absolute() { G_90 } else { G_91 }
    }

    /// Arc-offset distance code (G90.1/G91.1).
    #[inline]
    pub const fn arc_gcode(&self) -> i32 {
        if self.is_absolute() { G_90_1 } else { G_91_1 }
    }
}

impl Default for DistanceMode {
    fn default() -> Self {
        Self::Absolute
    }
}

/// Feed rate interpretation (G93/G94/G95).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FeedMode {
    UnitsPerMinute = 0,
    InverseTime = 1,
    UnitsPerRevolution = 2,
}

impl FeedMode {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::UnitsPerMinute),
            1 => Some(Self::InverseTime),
            2 => Some(Self::UnitsPerRevolution),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::InverseTime => G_93,
            Self::UnitsPerMinute => G_94,
            Self::UnitsPerRevolution => G_95,
        }
    }
}

impl Default for FeedMode {
    fn default() -> Self {
        Self::UnitsPerMinute
    }
}

/// Canned-cycle retract mode (G98/G99).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RetractMode {
    OldZ = 0,
    RPlane = 1,
}

impl RetractMode {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::OldZ),
            1 => Some(Self::RPlane),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::OldZ => G_98,
            Self::RPlane => G_99,
        }
    }
}

impl Default for RetractMode {
    fn default() -> Self {
        Self::OldZ
    }
}

/// Path control mode (G61/G61.1/G64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ControlMode {
    ExactStop = 1,
    ExactPath = 2,
    Continuous = 3,
}

impl ControlMode {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ExactStop),
            2 => Some(Self::ExactPath),
            3 => Some(Self::Continuous),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::Continuous => G_64,
            Self::ExactPath => G_61,
            Self::ExactStop => G_61_1,
        }
    }
}

impl Default for ControlMode {
    fn default() -> Self {
        Self::Continuous
    }
}

/// Spindle turning direction (M3/M4/M5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpindleDirection {
    Stopped = 0,
    Clockwise = 1,
    CounterClockwise = 2,
}

impl SpindleDirection {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Stopped),
            1 => Some(Self::Clockwise),
            2 => Some(Self::CounterClockwise),
            _ => None,
        }
    }

    #[inline]
    pub const fn mcode(&self) -> i32 {
        match self {
            Self::Stopped => M_5,
            Self::Clockwise => M_3,
            Self::CounterClockwise => M_4,
        }
    }
}

impl Default for SpindleDirection {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Spindle speed mode (G96/G97).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpindleMode {
    ConstantRpm = 0,
    ConstantSurfaceSpeed = 1,
}

impl SpindleMode {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ConstantRpm),
            1 => Some(Self::ConstantSurfaceSpeed),
            _ => None,
        }
    }

    #[inline]
    pub const fn gcode(&self) -> i32 {
        match self {
            Self::ConstantRpm => G_97,
            Self::ConstantSurfaceSpeed => G_96,
        }
    }
}

impl Default for SpindleMode {
    fn default() -> Self {
        Self::ConstantRpm
    }
}

// ─── Compound State ─────────────────────────────────────────────────

/// Active tool length offset vector (linear and rotary components).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl ToolOffset {
    /// All nine components in x, y, z, a, b, c, u, v, w order.
    #[inline]
    pub const fn components(&self) -> [f64; 9] {
        [
            self.x, self.y, self.z, self.a, self.b, self.c, self.u, self.v, self.w,
        ]
    }

    /// True when any component is non-zero (G43 in effect).
    ///
    /// NaN counts as non-zero.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.components().iter().any(|c| *c != 0.0)
    }
}

/// Per-spindle modal state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpindleState {
    /// Turning direction.
    pub direction: SpindleDirection,
    /// Commanded speed [rpm, or surface speed in CSS mode].
    pub speed: f64,
    /// Speed mode.
    pub mode: SpindleMode,
    /// Spindle speed override enabled.
    pub speed_override: bool,
}

/// One entry of the subroutine call-frame stack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallFrame {
    /// Source file active in this frame.
    pub filename: String,
}

// ─── Settings ───────────────────────────────────────────────────────

/// Snapshot of all interpreter modal state.
///
/// Owned and mutated by the interpreter; the encoders only read it.
/// `Default` is the interpreter power-on state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Current line (sequence) number.
    pub sequence_number: i32,
    /// Active motion mode, already encoded (e.g. `G_1`).
    pub motion_mode: i32,
    pub plane: Plane,
    pub cutter_comp_side: CutterCompSide,
    pub length_units: LengthUnits,
    pub distance_mode: DistanceMode,
    pub ijk_distance_mode: DistanceMode,
    pub feed_mode: FeedMode,
    /// Programmed feed rate.
    pub feed_rate: f64,
    /// Active work offset: 0 = machine (G53), 1..=9 = G54..G59.3.
    /// Larger values fail [`Settings::validate`].
    pub origin_index: u8,
    pub tool_offset: ToolOffset,
    pub retract_mode: RetractMode,
    pub control_mode: ControlMode,
    /// Path blending tolerance (G64 P).
    pub tolerance: f64,
    /// Naive-CAM collinearity tolerance (G64 Q).
    pub naivecam_tolerance: f64,
    /// Lathe diameter mode (G7).
    pub lathe_diameter_mode: bool,
    /// Per-spindle state. Spindle 0 is always present.
    pub spindles: heapless::Vec<SpindleState, MAX_SPINDLES>,
    pub feed_override: bool,
    pub adaptive_feed: bool,
    pub feed_hold: bool,
    pub mist: bool,
    pub flood: bool,
    /// A G92 offset is currently applied.
    ///
    /// Survives program end and abort (persisted by the interpreter as
    /// numeric parameter 5210), unlike the group-0 code that set it.
    pub g92_offset_applied: bool,
    /// Nesting depth of remapped-code handlers.
    pub remap_level: u32,
    /// Nesting depth of subroutine calls.
    pub call_level: u32,
    /// Source file currently executing.
    pub filename: String,
    /// Call-frame stack; frame 0 is the top level.
    pub call_stack: heapless::Vec<CallFrame, MAX_CALL_LEVELS>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut spindles = heapless::Vec::new();
        // Capacity is MAX_SPINDLES >= 1.
        let _ = spindles.push(SpindleState::default());

        Self {
            sequence_number: 0,
            motion_mode: G_80,
            plane: Plane::default(),
            cutter_comp_side: CutterCompSide::default(),
            length_units: LengthUnits::default(),
            distance_mode: DistanceMode::default(),
            ijk_distance_mode: DistanceMode::default(),
            feed_mode: FeedMode::default(),
            feed_rate: 0.0,
            origin_index: 1,
            tool_offset: ToolOffset::default(),
            retract_mode: RetractMode::default(),
            control_mode: ControlMode::default(),
            tolerance: 0.0,
            naivecam_tolerance: 0.0,
            lathe_diameter_mode: false,
            spindles,
            feed_override: false,
            adaptive_feed: false,
            feed_hold: false,
            mist: false,
            flood: false,
            g92_offset_applied: false,
            remap_level: 0,
            call_level: 0,
            filename: String::new(),
            call_stack: heapless::Vec::new(),
        }
    }
}

impl Settings {
    /// State of spindle 0, the only spindle reported in the active codes.
    ///
    /// An empty spindle list reads as a stopped default spindle; snapshot
    /// loading rejects that case before it gets here.
    #[inline]
    pub fn spindle0(&self) -> SpindleState {
        self.spindles.first().copied().unwrap_or_default()
    }

    /// Executing inside a remapped-code handler.
    #[inline]
    pub const fn in_remap(&self) -> bool {
        self.remap_level > 0
    }

    /// Executing inside an ordinary subroutine (not a remap).
    #[inline]
    pub const fn in_subroutine(&self) -> bool {
        self.call_level > 0 && self.remap_level == 0
    }

    /// Only top-level state can be checkpointed and restored.
    #[inline]
    pub const fn is_restorable(&self) -> bool {
        !self.in_remap() && !self.in_subroutine()
    }

    /// Filename of the top-level call frame, or `""` with no frames.
    #[inline]
    pub fn outermost_filename(&self) -> &str {
        self.call_stack.first().map_or("", |f| f.filename.as_str())
    }

    /// Current file differs from the top-level file (exact comparison).
    #[inline]
    pub fn is_external_file(&self) -> bool {
        self.filename != self.outermost_filename()
    }

    /// Validate the snapshot invariants the encoders rely on.
    pub fn validate(&self) -> Result<(), String> {
        if self.spindles.is_empty() {
            return Err("settings must describe at least spindle 0".to_string());
        }
        if self.origin_index > MAX_ORIGIN_INDEX {
            return Err(format!(
                "origin index {} outside 0..={MAX_ORIGIN_INDEX}",
                self.origin_index
            ));
        }
        Ok(())
    }
}
