//! This module declares the pure, allocation-free kernels of the 8b/10b
//! transcoder. Each kernel works on caller-owned slices and an explicit cursor
//! and disparity; the stateful `CodingContext` wires them together.

/// Width of one encoded symbol in bits.
pub const SYMBOL_BITS: usize = 10;

/// Constant data: the 5b6b and 3b4b encode/decode tables.
pub mod tables;

/// Single 6-bit / 4-bit codeword lookups.
pub mod subsymbol;

/// Stream packing: bytes to 10-bit symbols (encode).
pub mod packer;

/// Stream unpacking: 10-bit symbols back to bytes (decode).
pub mod unpacker;

/// Buffer sizing and raw symbol inspection.
pub mod symbols;
