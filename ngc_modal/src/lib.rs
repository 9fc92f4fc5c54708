//! # NGC Modal State Encoder
//!
//! Translates live RS274/NGC interpreter state into the fixed-layout
//! representations the rest of the control system reads: the active
//! G-code array, the active M-code array, the active settings array and
//! the state tag used to checkpoint and resume programs.
//!
//! ## Inputs
//!
//! - **Settings**: read-only snapshot of every modal group
//! - **Block**: the line just executed, absent at initialization
//!
//! ## Outputs
//!
//! Typed records ([`encode::ActiveGCodes`], [`encode::ActiveMCodes`],
//! [`encode::ActiveSettings`]) that flatten to the legacy arrays at the
//! wire boundary, and [`ngc_common::interp::state_tag::StateTag`], which
//! [`publish::publish_state_tag`] forwards to a [`publish::StateSink`].
//!
//! Encoding is pure and infallible; invalid input is rejected earlier,
//! when raw values are decoded or a snapshot is loaded ([`snapshot`]).

pub mod encode;
pub mod publish;
pub mod snapshot;

pub use encode::{
    ActiveGCodes, ActiveMCodes, ActiveSettings, ActiveState, encode_active_g_codes,
    encode_active_m_codes, encode_active_settings, encode_state_tag,
};
pub use publish::{LatestTagSink, StateSink, TracingSink, publish_state_tag};
