//! The stream packer: encodes bytes into 10-bit symbols and threads them
//! through a byte-aligned output buffer, LSB first.
//!
//! The write position is an `OutputCursor` owned by the caller, so repeated
//! calls continue exactly where the previous one stopped. Bits are OR-ed into
//! the buffer and never cleared; the buffer must start zeroed.

use crate::context::{OutputCursor, RunningDisparity};
use crate::kernels::subsymbol::{encode4, encode6};
use crate::kernels::SYMBOL_BITS;

/// Encodes one byte into its 10-bit symbol: the 3b4b codeword of bits 7..5
/// above the 5b6b codeword of bits 4..0. The 3b4b half is encoded first.
#[inline]
pub fn encode_symbol(disparity: &mut RunningDisparity, byte: u8) -> u16 {
    let high = encode4(disparity, (byte >> 5) & 0x7);
    let low = encode6(disparity, byte & 0x1f);
    (u16::from(high) << 6) | u16::from(low)
}

/// Encodes `input` into `out` starting at `cursor`, advancing both the cursor
/// and the running disparity.
///
/// # Panics
/// If `out` cannot hold every symbol of this call. Nothing is written then.
pub fn encode_into(
    out: &mut [u8],
    cursor: &mut OutputCursor,
    disparity: &mut RunningDisparity,
    input: &[u8],
) {
    if input.is_empty() {
        return;
    }
    let needed = cursor.bytes_after(input.len() * SYMBOL_BITS);
    assert!(
        needed <= out.len(),
        "encode of {} bytes needs an output buffer of {} bytes, bound buffer has {}",
        input.len(),
        needed,
        out.len()
    );

    let mut pos = cursor.byte;
    let mut bit = cursor.bit;

    for &byte in input {
        let symbol = encode_symbol(disparity, byte);
        // `bit` is 0, 2, 4 or 6, so the shifted symbol spans exactly two bytes.
        let shifted = u32::from(symbol) << bit;
        out[pos] |= shifted as u8;
        out[pos + 1] |= (shifted >> 8) as u8;

        pos += 1;
        bit = (bit + SYMBOL_BITS as u8) & 0x7;
        if bit == 0 {
            pos += 1;
        }
    }

    cursor.byte = pos;
    cursor.bit = bit;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    fn encode_fresh(input: &[u8], out: &mut [u8]) -> (OutputCursor, RunningDisparity) {
        let mut cursor = OutputCursor::default();
        let mut rd = RunningDisparity::Negative;
        encode_into(out, &mut cursor, &mut rd, input);
        (cursor, rd)
    }

    #[test]
    fn test_single_symbol_layout() {
        let mut out = [0u8; 3];
        let (cursor, _) = encode_fresh(&[0x4a], &mut out);
        assert_eq!(out, [0xaa, 0x02, 0x00]);
        assert_eq!(cursor, OutputCursor { byte: 1, bit: 2 });
    }

    #[test]
    fn test_four_symbols_realign_to_byte_boundary() {
        let mut out = [0u8; 5];
        let (cursor, rd) = encode_fresh(&[0xff, 0x00, 0xaa, 0x55], &mut out);
        assert_eq!(out, [0xca, 0x19, 0xad, 0x56, 0xa5]);
        assert_eq!(cursor, OutputCursor { byte: 5, bit: 0 });
        assert_eq!(rd, RunningDisparity::Negative);
    }

    #[test]
    fn test_matches_bitvec_reference_packing() {
        let input: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();

        // Reference: the same symbols appended LSB first with bitvec.
        let mut rd = RunningDisparity::Negative;
        let mut reference = BitVec::<u8, Lsb0>::with_capacity(input.len() * SYMBOL_BITS);
        for &b in &input {
            let symbol = encode_symbol(&mut rd, b);
            reference.extend_from_bitslice(&symbol.view_bits::<Lsb0>()[..SYMBOL_BITS]);
        }

        let mut out = vec![0u8; input.len() * SYMBOL_BITS / 8];
        let (cursor, final_rd) = encode_fresh(&input, &mut out);
        assert_eq!(out.as_slice(), reference.as_raw_slice());
        assert_eq!(cursor.bit_position(), input.len() * SYMBOL_BITS);
        assert_eq!(final_rd, rd);
    }

    #[test]
    fn test_split_calls_match_single_call() {
        let input = [0x00, 0x17, 0x07, 0xe3, 0xfc, 0x4a, 0x3c];

        let mut whole = [0u8; 9];
        let (whole_cursor, whole_rd) = encode_fresh(&input, &mut whole);

        let mut pieces = [0u8; 9];
        let mut cursor = OutputCursor::default();
        let mut rd = RunningDisparity::Negative;
        for chunk in input.chunks(2) {
            encode_into(&mut pieces, &mut cursor, &mut rd, chunk);
        }
        assert_eq!(pieces, whole);
        assert_eq!(cursor, whole_cursor);
        assert_eq!(rd, whole_rd);
    }

    #[test]
    fn test_empty_input_is_a_no_op() {
        let mut out: [u8; 0] = [];
        let (cursor, rd) = encode_fresh(&[], &mut out);
        assert_eq!(cursor, OutputCursor::default());
        assert_eq!(rd, RunningDisparity::Negative);
    }

    #[test]
    #[should_panic(expected = "needs an output buffer of 3 bytes")]
    fn test_rejects_undersized_output() {
        let mut out = [0u8; 2];
        encode_fresh(&[0x4a, 0x4a], &mut out);
    }
}
