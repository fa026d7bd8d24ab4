//! Sub-symbol kernels: a single 5b6b or 3b4b table lookup.
//!
//! Encoding combines the table entry with the caller's running disparity and
//! updates it; decoding is a pure reverse lookup that never consults disparity.
//! Out-of-range inputs are caller bugs and panic.

use crate::context::RunningDisparity;
use crate::kernels::tables::{
    EncodeEntry, FIVE_SIX_DECODE, FIVE_SIX_ENCODE, THREE_FOUR_DECODE, THREE_FOUR_ENCODE,
};

#[inline(always)]
fn encode_entry(entry: EncodeEntry, mask: u8, disparity: &mut RunningDisparity) -> u8 {
    let code = if disparity.is_negative() && entry.invert_on_negative {
        !entry.code
    } else {
        entry.code
    };
    if entry.toggles_disparity {
        disparity.flip();
    }
    code & mask
}

/// Encodes a 5-bit value (EDCBA) into its 6-bit codeword.
#[inline]
pub fn encode6(disparity: &mut RunningDisparity, value: u8) -> u8 {
    assert!(value < 32, "5b6b input {value:#04x} does not fit in 5 bits");
    encode_entry(FIVE_SIX_ENCODE[value as usize], 0x3f, disparity)
}

/// Encodes a 3-bit value (HGF) into its 4-bit codeword.
#[inline]
pub fn encode4(disparity: &mut RunningDisparity, value: u8) -> u8 {
    assert!(value < 8, "3b4b input {value:#04x} does not fit in 3 bits");
    encode_entry(THREE_FOUR_ENCODE[value as usize], 0x0f, disparity)
}

/// Recovers the 5-bit value of a 6-bit codeword, `None` if it is not in the code.
#[inline]
pub fn decode6(code: u8) -> Option<u8> {
    assert!(code < 64, "5b6b codeword {code:#04x} does not fit in 6 bits");
    FIVE_SIX_DECODE[code as usize]
}

/// Recovers the 3-bit value of a 4-bit codeword, `None` if it is not in the code.
#[inline]
pub fn decode4(code: u8) -> Option<u8> {
    assert!(code < 16, "3b4b codeword {code:#04x} does not fit in 4 bits");
    THREE_FOUR_DECODE[code as usize]
}
