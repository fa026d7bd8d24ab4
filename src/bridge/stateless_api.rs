// In: src/bridge/stateless_api.rs

use crate::config::DecodeConfig;
use crate::context::CodingContext;
use crate::error::LineCodeError;
use crate::kernels::symbols::{self, bytes_for_bits, decoded_len, encoded_len};
use crate::kernels::SYMBOL_BITS;

/// Encodes `data` into a fresh buffer, starting from negative disparity.
/// The result holds `ceil(10 * data.len() / 8)` bytes; unused high bits of the
/// last byte are zero.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut ctx = CodingContext::new();
    ctx.set_output(vec![0u8; encoded_len(data.len())]);
    ctx.encode(data);
    log::debug!(
        "encode_bytes: {} bytes -> {} bits, final {}",
        data.len(),
        ctx.bits_written(),
        ctx.disparity()
    );
    ctx.take_output().unwrap_or_default()
}

/// Decodes `bit_length` bits of `data` with the default (lenient) checks.
pub fn decode_bytes(data: &[u8], bit_length: usize) -> Result<Vec<u8>, LineCodeError> {
    decode_bytes_with(&DecodeConfig::default(), data, bit_length)
}

/// Decodes `bit_length` bits of `data` into a fresh buffer.
///
/// The request is validated before the core runs, so a malformed request is
/// reported as an error instead of tripping a core assertion.
pub fn decode_bytes_with(
    config: &DecodeConfig,
    data: &[u8],
    bit_length: usize,
) -> Result<Vec<u8>, LineCodeError> {
    check_decode_request(config, data.len(), bit_length)?;

    let mut ctx = CodingContext::new();
    ctx.set_output(vec![0u8; decoded_len(bit_length)]);
    if let Err(err) = ctx.decode(data, bit_length) {
        log::warn!(
            "decode_bytes: {} after {} good bytes",
            err,
            ctx.cursor().byte
        );
        return Err(err);
    }
    log::debug!("decode_bytes: {} bits -> {} bytes", bit_length, ctx.cursor().byte);
    Ok(ctx.take_output().unwrap_or_default())
}

/// Splits `bit_length` bits of `data` into raw 10-bit symbols, validating the
/// request like a decode does.
pub fn split_symbols(data: &[u8], bit_length: usize) -> Result<Vec<u16>, LineCodeError> {
    check_decode_request(&DecodeConfig::default(), data.len(), bit_length)?;
    Ok(symbols::split_symbols(data, bit_length))
}

/// Boundary checks owned by the binding layer, in reporting order.
pub(crate) fn check_decode_request(
    config: &DecodeConfig,
    available: usize,
    bit_length: usize,
) -> Result<(), LineCodeError> {
    if bit_length % SYMBOL_BITS != 0 {
        return Err(LineCodeError::InvalidBitLength(bit_length));
    }
    // Ceiling: 10 bits need two bytes even though 10 / 8 == 1.
    let needed = bytes_for_bits(bit_length);
    if available < needed {
        return Err(LineCodeError::Truncated {
            bit_length,
            needed,
            available,
        });
    }
    if config.reject_unused_bytes && available > needed {
        return Err(LineCodeError::UnusedBytes {
            bit_length,
            unused: available - needed,
        });
    }
    Ok(())
}
