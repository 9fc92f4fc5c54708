//! Interpreter snapshot types.
//!
//! Everything the modal state encoder reads (the [`settings::Settings`]
//! snapshot and the optional [`block::Block`]) and everything it produces
//! that other modules consume directly ([`state_tag::StateTag`]). Encoded
//! code values live in [`codes`].

pub mod block;
pub mod codes;
pub mod settings;
pub mod state_tag;
