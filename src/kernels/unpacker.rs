//! The stream unpacker: pulls 10-bit symbols out of a packed bit stream and
//! writes one decoded byte per symbol.
//!
//! The bit accumulator lives only for the duration of one call, so every call
//! must carry a whole number of symbols. Only the byte cursor persists.

use crate::context::OutputCursor;
use crate::error::LineCodeError;
use crate::kernels::subsymbol::{decode4, decode6};
use crate::kernels::SYMBOL_BITS;

/// Decodes one raw 10-bit symbol, `None` if either half is not a valid codeword.
#[inline]
pub fn decode_symbol(symbol: u16) -> Option<u8> {
    let low = decode6((symbol & 0x3f) as u8)?;
    let high = decode4(((symbol >> 6) & 0xf) as u8)?;
    Some((high << 5) | low)
}

/// Decodes the first `bit_length` bits of `bits` into `out` at `cursor`.
///
/// Stops at the first invalid symbol with `LineCodeError::CodeViolation`.
/// Bytes decoded before it stay in `out` and the cursor points just past them.
///
/// # Panics
/// If `bit_length` is not a multiple of 10, exceeds the bits available in
/// `bits`, or the output cannot hold `bit_length / 10` bytes at a byte-aligned
/// cursor. All checks run before any memory is touched.
pub fn decode_into(
    out: &mut [u8],
    cursor: &mut OutputCursor,
    bits: &[u8],
    bit_length: usize,
) -> Result<(), LineCodeError> {
    assert!(
        bit_length % SYMBOL_BITS == 0,
        "decode bit length {bit_length} is not a multiple of {SYMBOL_BITS}"
    );
    assert!(
        bit_length <= bits.len() * 8,
        "decode bit length {} exceeds the {} bits of input",
        bit_length,
        bits.len() * 8
    );
    assert!(cursor.bit == 0, "decode output cursor is not byte-aligned");
    let symbols = bit_length / SYMBOL_BITS;
    assert!(
        cursor.byte + symbols <= out.len(),
        "decode of {} symbols at byte {} overruns an output buffer of {} bytes",
        symbols,
        cursor.byte,
        out.len()
    );

    let mut align: u32 = 0;
    let mut filled: u32 = 0;
    let mut inpos = 0;

    for symbol_index in 0..symbols {
        while filled < SYMBOL_BITS as u32 {
            align |= u32::from(bits[inpos]) << filled;
            inpos += 1;
            filled += 8;
        }

        let symbol = (align & 0x3ff) as u16;
        let Some(byte) = decode_symbol(symbol) else {
            return Err(LineCodeError::CodeViolation {
                symbol_index,
                symbol,
            });
        };

        out[cursor.byte] = byte;
        cursor.byte += 1;
        align >>= SYMBOL_BITS;
        filled -= SYMBOL_BITS as u32;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_fresh(bits: &[u8], bit_length: usize) -> (Vec<u8>, Result<(), LineCodeError>) {
        let mut out = vec![0u8; bit_length / SYMBOL_BITS];
        let mut cursor = OutputCursor::default();
        let result = decode_into(&mut out, &mut cursor, bits, bit_length);
        out.truncate(cursor.byte);
        (out, result)
    }

    #[test]
    fn test_single_symbol() {
        let (out, result) = decode_fresh(&[0x35, 0x02], 10);
        assert!(result.is_ok());
        assert_eq!(out, vec![0xff]);
    }

    #[test]
    fn test_four_symbols_mixed_disparity() {
        // D31.7+, D0.0+, D10.5-, D21.2+
        let (out, result) = decode_fresh(&[0xca, 0x19, 0xad, 0x56, 0xa5], 4 * 10);
        assert!(result.is_ok());
        assert_eq!(out, vec![0xff, 0x00, 0xaa, 0x55]);
    }

    #[test]
    fn test_trailing_input_bits_are_ignored() {
        // Only the first symbol is requested; the rest of the buffer is noise.
        let (out, result) = decode_fresh(&[0x35, 0xfe, 0xff, 0xff], 10);
        assert!(result.is_ok());
        assert_eq!(out, vec![0xff]);
    }

    #[test]
    fn test_zero_length_decodes_nothing() {
        let (out, result) = decode_fresh(&[], 0);
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_code_violation_keeps_prefix() {
        // Two valid symbols (0xff, 0x00) followed by an all-zero symbol.
        let bits = [0xca, 0x19, 0x0d, 0x00, 0x00];
        let mut out = [0x77u8; 4];
        let mut cursor = OutputCursor::default();
        let result = decode_into(&mut out, &mut cursor, &bits, 40);

        assert!(matches!(
            result,
            Err(LineCodeError::CodeViolation {
                symbol_index: 2,
                symbol: 0x000
            })
        ));
        assert_eq!(cursor.byte, 2);
        // The violating symbol left its output slot untouched.
        assert_eq!(out, [0xff, 0x00, 0x77, 0x77]);
    }

    #[test]
    fn test_invalid_3b4b_half_is_a_violation() {
        // 5b6b half 0x06 (D0) is valid, 3b4b half 0xf is not.
        let symbol: u16 = (0xf << 6) | 0x06;
        let bits = symbol.to_le_bytes();
        let (out, result) = decode_fresh(&bits, 10);
        assert!(matches!(
            result,
            Err(LineCodeError::CodeViolation { symbol_index: 0, symbol: s }) if s == symbol
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_symbol_covers_every_byte() {
        use crate::context::RunningDisparity;
        use crate::kernels::packer::encode_symbol;

        for start in [RunningDisparity::Negative, RunningDisparity::Positive] {
            for byte in 0..=255u8 {
                let mut rd = start;
                assert_eq!(decode_symbol(encode_symbol(&mut rd, byte)), Some(byte));
            }
        }
    }

    #[test]
    #[should_panic(expected = "is not a multiple of 10")]
    fn test_rejects_partial_symbol_length() {
        decode_fresh(&[0x35, 0x02], 12);
    }

    #[test]
    #[should_panic(expected = "exceeds the 8 bits of input")]
    fn test_rejects_length_beyond_input() {
        // 10 bits cannot come out of a single byte.
        decode_fresh(&[0x35], 10);
    }

    #[test]
    #[should_panic(expected = "overruns an output buffer")]
    fn test_rejects_undersized_output() {
        let mut out = [0u8; 1];
        let mut cursor = OutputCursor::default();
        let _ = decode_into(&mut out, &mut cursor, &[0xca, 0x19, 0xad], 20);
    }
}
