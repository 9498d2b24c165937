//! Core domain model for the Casa Bonita brand laboratory.
//!
//! Everything the page renders — palette entries, localized copy, tab
//! descriptors — lives here as compile-time data, together with the pure
//! interaction math behind the pointer-driven demo widgets and the small
//! view-state machines. No DOM types cross into this crate, so all of it
//! is unit-tested off the browser.

pub mod content;
pub mod effects;
pub mod error;
pub mod lang;
pub mod palette;
pub mod state;
pub mod tab;

pub use error::ContentError;
pub use lang::Language;
pub use tab::Tab;
