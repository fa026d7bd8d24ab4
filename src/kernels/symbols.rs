//! Size arithmetic and symbol-level views of a packed 8b/10b stream.
//!
//! These helpers never decode; they let callers size buffers and inspect the
//! raw 10-bit symbols of a stream (e.g. to report which symbol violated the code).

use bitvec::prelude::*;

use crate::kernels::SYMBOL_BITS;

/// Bytes needed to hold `num_bytes` encoded symbols packed from bit 0.
pub fn encoded_len(num_bytes: usize) -> usize {
    (num_bytes * SYMBOL_BITS).div_ceil(8)
}

/// Bytes produced by decoding `bit_length` bits of whole symbols.
pub fn decoded_len(bit_length: usize) -> usize {
    bit_length / SYMBOL_BITS
}

/// Bytes of input that carry `bit_length` bits.
pub fn bytes_for_bits(bit_length: usize) -> usize {
    bit_length.div_ceil(8)
}

/// Splits the first `bit_length` bits of `bits` into raw 10-bit symbols,
/// LSB first, in stream order.
///
/// # Panics
/// If `bit_length` is not a multiple of 10 or exceeds the bits in `bits`.
pub fn split_symbols(bits: &[u8], bit_length: usize) -> Vec<u16> {
    assert!(
        bit_length % SYMBOL_BITS == 0,
        "symbol bit length {bit_length} is not a multiple of {SYMBOL_BITS}"
    );
    let view = BitSlice::<u8, Lsb0>::from_slice(bits);
    assert!(
        bit_length <= view.len(),
        "symbol bit length {} exceeds the {} bits of input",
        bit_length,
        view.len()
    );
    view[..bit_length]
        .chunks_exact(SYMBOL_BITS)
        .map(|chunk| chunk.load_le::<u16>())
        .collect()
}
