// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing, allocation-owning API of the library. It
// wraps the allocation-free core (`CodingContext` + `kernels`) for callers that
// want owned buffers and recoverable errors instead of contract panics. The
// Python module is a thin skin over this layer.
//
// Data Flow (Encode):
//
//   1. [Stateless API (encode_bytes)] or [Stateful Facade (StreamEncoder)]
//         |
//         `-> sizes and zero-fills a Vec<u8> for the symbols of this call
//         |
//   2. [Core (CodingContext::encode)] -> packs one 10-bit symbol per byte
//
// Data Flow (Decode):
//
//   1. [Stateless API (decode_bytes)] or [Stateful Facade (StreamDecoder)]
//         |
//         `-> a. validates the request: whole symbols, enough input bytes,
//         |      optionally no unused trailing bytes
//         `-> b. sizes the output buffer
//         |
//   2. [Core (CodingContext::decode)] -> Ok, or CodeViolation with the prefix kept
//
// ====================================================================================
pub(crate) mod decoder;
pub(crate) mod encoder;
pub mod stateless_api;

// --- High-Level Stateful API ---
pub use decoder::StreamDecoder;
pub use encoder::StreamEncoder;

// --- Low-Level Stateless API (for FFI and testing) ---
pub use stateless_api::{decode_bytes, decode_bytes_with, encode_bytes, split_symbols};
