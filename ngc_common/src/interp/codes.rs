//! Encoded G-code and M-code values.
//!
//! G-codes are reported as integers ten times the real value so that one
//! decimal digit survives (`G59.1` → `591`). M-codes are reported as-is.
//! `-1` ([`crate::consts::NO_CODE`]) is never a real code.

// ─── G-codes (× 10) ─────────────────────────────────────────────────

pub const G_0: i32 = 0;
pub const G_1: i32 = 10;
pub const G_2: i32 = 20;
pub const G_3: i32 = 30;
pub const G_4: i32 = 40;
pub const G_7: i32 = 70;
pub const G_8: i32 = 80;
pub const G_10: i32 = 100;
pub const G_17: i32 = 170;
pub const G_17_1: i32 = 171;
pub const G_18: i32 = 180;
pub const G_18_1: i32 = 181;
pub const G_19: i32 = 190;
pub const G_19_1: i32 = 191;
pub const G_20: i32 = 200;
pub const G_21: i32 = 210;
pub const G_28: i32 = 280;
pub const G_30: i32 = 300;
pub const G_40: i32 = 400;
pub const G_41: i32 = 410;
pub const G_42: i32 = 420;
pub const G_43: i32 = 430;
pub const G_49: i32 = 490;
pub const G_52: i32 = 520;
pub const G_53: i32 = 530;
pub const G_54: i32 = 540;
pub const G_55: i32 = 550;
pub const G_56: i32 = 560;
pub const G_57: i32 = 570;
pub const G_58: i32 = 580;
pub const G_59: i32 = 590;
pub const G_59_1: i32 = 591;
pub const G_59_2: i32 = 592;
pub const G_59_3: i32 = 593;
pub const G_61: i32 = 610;
pub const G_61_1: i32 = 611;
pub const G_64: i32 = 640;
pub const G_80: i32 = 800;
pub const G_90: i32 = 900;
pub const G_90_1: i32 = 901;
pub const G_91: i32 = 910;
pub const G_91_1: i32 = 911;
pub const G_92: i32 = 920;
pub const G_92_1: i32 = 921;
pub const G_92_2: i32 = 922;
pub const G_92_3: i32 = 923;
pub const G_93: i32 = 930;
pub const G_94: i32 = 940;
pub const G_95: i32 = 950;
pub const G_96: i32 = 960;
pub const G_97: i32 = 970;
pub const G_98: i32 = 980;
pub const G_99: i32 = 990;

// ─── M-codes ────────────────────────────────────────────────────────

/// Program pause.
pub const M_0: i32 = 0;
/// Optional pause.
pub const M_1: i32 = 1;
/// Program end.
pub const M_2: i32 = 2;
/// Spindle clockwise.
pub const M_3: i32 = 3;
/// Spindle counterclockwise.
pub const M_4: i32 = 4;
/// Spindle stop.
pub const M_5: i32 = 5;
/// Tool change.
pub const M_6: i32 = 6;
/// Mist coolant on.
pub const M_7: i32 = 7;
/// Flood coolant on.
pub const M_8: i32 = 8;
/// All coolant off.
pub const M_9: i32 = 9;
/// Program end and rewind.
pub const M_30: i32 = 30;
/// Feed and speed override both enabled.
pub const M_48: i32 = 48;
/// Feed and speed override both disabled.
pub const M_49: i32 = 49;
/// Feed override enabled.
pub const M_50: i32 = 50;
/// Spindle speed override enabled.
pub const M_51: i32 = 51;
/// Adaptive feed enabled.
pub const M_52: i32 = 52;
/// Feed hold enabled.
pub const M_53: i32 = 53;
/// Pallet change pause.
pub const M_60: i32 = 60;
/// Set current tool number without a change.
pub const M_61: i32 = 61;

/// Work-offset code for an origin index.
///
/// Indices 0..=6 map to G53..G59 (`530 + 10 × index`); the extended
/// slots 7..=9 continue as G59.1..G59.3 (`584 + index`).
#[inline]
pub const fn origin_code(origin_index: u8) -> i32 {
    let index = origin_index as i32;
    if index < 7 { 530 + 10 * index } else { 584 + index }
}
