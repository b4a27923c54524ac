//! Slide-match (workspace facade crate).
//!
//! This package keeps the `slide_match::{core,adapter,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use slide_match_adapter as adapter;
pub use slide_match_core as core;
pub use slide_match_types as types;
