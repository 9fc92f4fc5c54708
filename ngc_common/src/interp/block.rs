//! Parsed block: the modal-group selections made by one line.
//!
//! A block carries at most one code per modal group. Groups are addressed
//! through [`GModalGroup`] / [`MModalGroup`] so that lookups are always in
//! range; raw group numbers are decoded with `from_u8` at the boundary.

use thiserror::Error;

use crate::consts::{G_MODE_GROUPS, M_MODE_GROUPS};

/// Errors raised while building a block from raw group numbers and codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockError {
    /// No G modal group with this number.
    #[error("unknown G modal group {0}")]
    UnknownGGroup(u8),

    /// No M modal group with this number.
    #[error("unknown M modal group {0}")]
    UnknownMGroup(u8),

    /// Encoded codes are never negative; `-1` is reserved as the sentinel.
    #[error("code {code} in group {group} collides with the sentinel range")]
    NegativeCode { group: u8, code: i32 },
}

/// G-code modal groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GModalGroup {
    /// G4, G10, G28, G30, G52, G53, G92, G92.1, G92.2, G92.3.
    NonModal = 0,
    /// G0, G1, G2, G3, G33, G38.x, G73, G76, G80..G89.
    Motion = 1,
    /// G17..G19.1.
    Plane = 2,
    /// G90, G91.
    Distance = 3,
    /// G90.1, G91.1.
    ArcDistance = 4,
    /// G93, G94, G95.
    FeedMode = 5,
    /// G20, G21.
    Units = 6,
    /// G40, G41, G42.
    CutterComp = 7,
    /// G43, G49.
    ToolLengthOffset = 8,
    /// G98, G99.
    RetractMode = 10,
    /// G54..G59.3.
    CoordinateSystem = 12,
    /// G61, G61.1, G64.
    PathControl = 13,
    /// G50, G51.
    AdaptiveFeed = 14,
    /// G96, G97.
    SpindleSpeedMode = 15,
    /// Offset state (G92.3 restore), reported through the G92 slot.
    OffsetState = 16,
}

impl GModalGroup {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NonModal),
            1 => Some(Self::Motion),
            2 => Some(Self::Plane),
            3 => Some(Self::Distance),
            4 => Some(Self::ArcDistance),
            5 => Some(Self::FeedMode),
            6 => Some(Self::Units),
            7 => Some(Self::CutterComp),
            8 => Some(Self::ToolLengthOffset),
            10 => Some(Self::RetractMode),
            12 => Some(Self::CoordinateSystem),
            13 => Some(Self::PathControl),
            14 => Some(Self::AdaptiveFeed),
            15 => Some(Self::SpindleSpeedMode),
            16 => Some(Self::OffsetState),
            _ => None,
        }
    }
}

/// M-code modal groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MModalGroup {
    /// M0, M1, M2, M30, M60.
    Stopping = 4,
    /// M6, M61.
    ToolChange = 6,
    /// M3, M4, M5.
    Spindle = 7,
    /// M7, M8, M9.
    Coolant = 8,
    /// M48..M53.
    Overrides = 9,
    /// M100..M199.
    UserDefined = 10,
}

impl MModalGroup {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            4 => Some(Self::Stopping),
            6 => Some(Self::ToolChange),
            7 => Some(Self::Spindle),
            8 => Some(Self::Coolant),
            9 => Some(Self::Overrides),
            10 => Some(Self::UserDefined),
            _ => None,
        }
    }
}

/// The modal-group selections of one executed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    g_modes: [Option<i32>; G_MODE_GROUPS],
    m_modes: [Option<i32>; M_MODE_GROUPS],
}

impl Block {
    /// A block that selects nothing in any group.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Code selected in a G group on this line.
    #[inline]
    pub fn g_mode(&self, group: GModalGroup) -> Option<i32> {
        self.g_modes[group as usize]
    }

    /// Code selected in an M group on this line.
    #[inline]
    pub fn m_mode(&self, group: MModalGroup) -> Option<i32> {
        self.m_modes[group as usize]
    }

    #[inline]
    pub fn set_g_mode(&mut self, group: GModalGroup, code: Option<i32>) {
        self.g_modes[group as usize] = code;
    }

    #[inline]
    pub fn set_m_mode(&mut self, group: MModalGroup, code: Option<i32>) {
        self.m_modes[group as usize] = code;
    }

    /// Builder form of [`Block::set_g_mode`].
    #[inline]
    pub fn with_g(mut self, group: GModalGroup, code: i32) -> Self {
        self.set_g_mode(group, Some(code));
        self
    }

    /// Builder form of [`Block::set_m_mode`].
    #[inline]
    pub fn with_m(mut self, group: MModalGroup, code: i32) -> Self {
        self.set_m_mode(group, Some(code));
        self
    }

    /// Select a code by raw G group number.
    pub fn select_raw_g(&mut self, group: u8, code: i32) -> Result<(), BlockError> {
        let g = GModalGroup::from_u8(group).ok_or(BlockError::UnknownGGroup(group))?;
        if code < 0 {
            return Err(BlockError::NegativeCode { group, code });
        }
        self.set_g_mode(g, Some(code));
        Ok(())
    }

    /// Select a code by raw M group number.
    pub fn select_raw_m(&mut self, group: u8, code: i32) -> Result<(), BlockError> {
        let m = MModalGroup::from_u8(group).ok_or(BlockError::UnknownMGroup(group))?;
        if code < 0 {
            return Err(BlockError::NegativeCode { group, code });
        }
        self.set_m_mode(m, Some(code));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::codes::{G_92, M_6};

    #[test]
    fn g_group_roundtrip() {
        for v in 0..G_MODE_GROUPS as u8 {
            match GModalGroup::from_u8(v) {
                Some(group) => assert_eq!(group as u8, v),
                None => assert!(v == 9 || v == 11),
            }
        }
        assert!(GModalGroup::from_u8(17).is_none());
    }

    #[test]
    fn m_group_roundtrip() {
        for v in 0..=10u8 {
            if let Some(group) = MModalGroup::from_u8(v) {
                assert_eq!(group as u8, v);
                assert!((v as usize) < M_MODE_GROUPS);
            }
        }
        assert!(MModalGroup::from_u8(11).is_none());
    }

    #[test]
    fn empty_block_selects_nothing() {
        let block = Block::new();
        assert_eq!(block.g_mode(GModalGroup::NonModal), None);
        assert_eq!(block.m_mode(MModalGroup::ToolChange), None);
    }

    #[test]
    fn raw_selection_is_validated() {
        let mut block = Block::new();
        block.select_raw_g(0, G_92).unwrap();
        block.select_raw_m(6, M_6).unwrap();
        assert_eq!(block.g_mode(GModalGroup::NonModal), Some(G_92));
        assert_eq!(block.m_mode(MModalGroup::ToolChange), Some(M_6));

        assert_eq!(block.select_raw_g(9, 10), Err(BlockError::UnknownGGroup(9)));
        assert_eq!(block.select_raw_m(2, 0), Err(BlockError::UnknownMGroup(2)));
        assert_eq!(
            block.select_raw_g(1, -1),
            Err(BlockError::NegativeCode { group: 1, code: -1 })
        );
    }
}
