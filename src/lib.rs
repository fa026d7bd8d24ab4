//! This file is the root of the `eightbtenb` Rust crate: a table-driven 8b/10b
//! line-code transcoder.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`, `context`,
//!     `bridge`, etc.) so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (feature `python`).
//!
//! The core is `CodingContext`: bind an output buffer, then drive `encode` or
//! `decode` through it as many times as the stream needs.
//!
//! ```
//! use eightbtenb::CodingContext;
//!
//! let mut ctx = CodingContext::new();
//! ctx.set_output(vec![0u8; 5]);
//! ctx.encode(&[0xff, 0x00, 0xaa, 0x55]);
//! assert_eq!(ctx.written(), &[0xca, 0x19, 0xad, 0x56, 0xa5]);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod context;
pub mod error;
pub mod kernels;
pub mod observability;

#[cfg(feature = "python")]
mod ffi;

pub use context::{CodingContext, OutputCursor, RunningDisparity};
pub use error::LineCodeError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `eightbtenb` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn eightbtenb(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::python::register(m)?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    Ok(())
}
