//! The four fixed 8b/10b code tables.
//!
//! The encode tables are indexed by the source sub-value (EDCBA for 5b6b, HGF
//! for 3b4b, least significant bit first) and hold the codeword used when the
//! running disparity is positive. Entries that have a second, complemented form
//! carry `invert_on_negative`; entries whose codeword is unbalanced carry
//! `toggles_disparity`. Contents follow the SATA 3.0 8b/10b listing.
//!
//! The decode tables are the exact inverse: indexed by the received codeword,
//! yielding the source sub-value, or `None` for a codeword outside the code.
//! They are plain data, never derived at runtime.

/// One row of an encode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeEntry {
    /// Codeword for positive running disparity (6 or 4 significant bits).
    pub code: u8,
    /// Emit the bitwise complement of `code` while the disparity is negative.
    pub invert_on_negative: bool,
    /// Emitting this codeword flips the running disparity.
    pub toggles_disparity: bool,
}

const fn entry(code: u8, invert_on_negative: bool, toggles_disparity: bool) -> EncodeEntry {
    EncodeEntry {
        code,
        invert_on_negative,
        toggles_disparity,
    }
}

/// 5b6b encode table, indexed by EDCBA. Codewords are `iedcba`.
pub const FIVE_SIX_ENCODE: [EncodeEntry; 32] = [
    entry(0b000110, true, true),   // D0
    entry(0b010001, true, true),   // D1
    entry(0b010010, true, true),   // D2
    entry(0b100011, false, false), // D3
    entry(0b010100, true, true),   // D4
    entry(0b100101, false, false), // D5
    entry(0b100110, false, false), // D6
    entry(0b111000, true, false),  // D7
    entry(0b011000, true, true),   // D8
    entry(0b101001, false, false), // D9
    entry(0b101010, false, false), // D10
    entry(0b001011, false, false), // D11
    entry(0b101100, false, false), // D12
    entry(0b001101, false, false), // D13
    entry(0b001110, false, false), // D14
    entry(0b000101, true, true),   // D15
    entry(0b001001, true, true),   // D16
    entry(0b110001, false, false), // D17
    entry(0b110010, false, false), // D18
    entry(0b010011, false, false), // D19
    entry(0b110100, false, false), // D20
    entry(0b010101, false, false), // D21
    entry(0b010110, false, false), // D22
    entry(0b101000, true, true),   // D23
    entry(0b001100, true, true),   // D24
    entry(0b011001, false, false), // D25
    entry(0b011010, false, false), // D26
    entry(0b100100, true, true),   // D27
    entry(0b011100, false, false), // D28
    entry(0b100010, true, true),   // D29
    entry(0b100001, true, true),   // D30
    entry(0b001010, true, true),   // D31
];

/// 3b4b encode table, indexed by HGF. Codewords are `jhgf`.
pub const THREE_FOUR_ENCODE: [EncodeEntry; 8] = [
    entry(0b0010, true, true),   // Dx.0
    entry(0b1001, false, false), // Dx.1
    entry(0b1010, false, false), // Dx.2
    entry(0b1100, true, false),  // Dx.3
    entry(0b0100, true, true),   // Dx.4
    entry(0b0101, false, false), // Dx.5
    entry(0b0110, false, false), // Dx.6
    entry(0b1000, true, true),   // Dx.7
];

/// 5b6b decode table, indexed by the received `iedcba` codeword.
#[rustfmt::skip]
pub const FIVE_SIX_DECODE: [Option<u8>; 64] = [
    None,     None,     None,     None,     None,     Some(15), Some(0),  Some(7),  // 0b000xxx
    None,     Some(16), Some(31), Some(11), Some(24), Some(13), Some(14), None,     // 0b001xxx
    None,     Some(1),  Some(2),  Some(19), Some(4),  Some(21), Some(22), Some(23), // 0b010xxx
    Some(8),  Some(25), Some(26), Some(27), Some(28), Some(29), Some(30), None,     // 0b011xxx
    None,     Some(30), Some(29), Some(3),  Some(27), Some(5),  Some(6),  Some(8),  // 0b100xxx
    Some(23), Some(9),  Some(10), Some(4),  Some(12), Some(2),  Some(1),  None,     // 0b101xxx
    None,     Some(17), Some(18), Some(24), Some(20), Some(31), Some(16), None,     // 0b110xxx
    Some(7),  Some(0),  Some(15), None,     None,     None,     None,     None,     // 0b111xxx
];

/// 3b4b decode table, indexed by the received `jhgf` codeword.
#[rustfmt::skip]
pub const THREE_FOUR_DECODE: [Option<u8>; 16] = [
    None,    None,    Some(0), Some(3), Some(4), Some(5), Some(6), Some(7), // 0b0xxx
    Some(7), Some(1), Some(2), Some(4), Some(3), Some(0), None,    None,    // 0b1xxx
];
