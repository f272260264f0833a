//! folio-ui - View components for the portfolio site
//!
//! Components take content structs as props and report user actions through
//! callbacks. Browser interop lives in `wasm_utils` and compiles to no-ops
//! off the web target so the crate builds and tests natively.

pub mod components;
pub mod wasm_utils;

pub use components::*;
