//! # Price Gap Core
//!
//! Pure, WASM-safe logic for Price Gap: the gap pair finder, its tie-break
//! policies, and the serializable report shared by every frontend.
//!
//! This crate contains no tokio, filesystem I/O, or other native-only
//! dependencies. Callers own their sequences; the finder only reads them.

pub mod gap;
pub mod report;
