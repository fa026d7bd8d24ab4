//! The Foreign Function Interface (FFI) layer.
//!
//! It maps the pure-Rust `bridge` onto host-language conventions. Currently it
//! only contains the Python module; argument checks and error translation
//! happen here, never in the core.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;
