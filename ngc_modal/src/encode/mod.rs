//! Modal state encoders.
//!
//! Four independent leaves over the same two inputs:
//!
//! | Encoder | Output |
//! |---------|--------|
//! | [`encode_active_g_codes`] | [`ActiveGCodes`] (17 slots) |
//! | [`encode_active_m_codes`] | [`ActiveMCodes`] (9 slots) |
//! | [`encode_active_settings`] | [`ActiveSettings`] (5 slots) |
//! | [`encode_state_tag`] | `StateTag` |
//!
//! All are pure: the result depends only on `Settings` and the optional
//! `Block`. [`ActiveState`] holds the three legacy arrays as caller-owned
//! buffers and refreshes them wholesale.

pub mod active_settings;
pub mod gcodes;
pub mod mcodes;
pub mod state_tag;
pub mod table;

pub use active_settings::{ActiveSettings, encode_active_settings};
pub use gcodes::{ActiveGCodes, encode_active_g_codes};
pub use mcodes::{ActiveMCodes, encode_active_m_codes};
pub use state_tag::encode_state_tag;

use ngc_common::consts::{ACTIVE_G_CODES, ACTIVE_M_CODES, ACTIVE_SETTINGS, NO_CODE};
use ngc_common::interp::block::Block;
use ngc_common::interp::settings::Settings;
use tracing::trace;

/// Legacy active-code arrays as published to status consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveState {
    pub g_codes: [i32; ACTIVE_G_CODES],
    pub m_codes: [i32; ACTIVE_M_CODES],
    pub settings: [f64; ACTIVE_SETTINGS],
}

impl Default for ActiveState {
    fn default() -> Self {
        Self {
            g_codes: [NO_CODE; ACTIVE_G_CODES],
            m_codes: [NO_CODE; ACTIVE_M_CODES],
            settings: [0.0; ACTIVE_SETTINGS],
        }
    }
}

impl ActiveState {
    /// Encode a snapshot into fresh arrays.
    pub fn encode(block: Option<&Block>, settings: &Settings) -> Self {
        let mut state = Self::default();
        state.update(block, settings);
        state
    }

    /// Overwrite all three arrays from the snapshot.
    ///
    /// Called once at interpreter init (no block) and after every
    /// executed block.
    pub fn update(&mut self, block: Option<&Block>, settings: &Settings) {
        self.g_codes = encode_active_g_codes(block, settings).to_array();
        self.m_codes = encode_active_m_codes(block, settings).to_array();
        self.settings = encode_active_settings(settings).to_array();
        trace!(
            line = settings.sequence_number,
            has_block = block.is_some(),
            "active codes refreshed"
        );
    }
}
