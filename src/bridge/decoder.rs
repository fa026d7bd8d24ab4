// In: src/bridge/decoder.rs

use crate::bridge::stateless_api::check_decode_request;
use crate::config::{DecodeConfig, LineCodeConfig};
use crate::context::CodingContext;
use crate::error::LineCodeError;
use crate::kernels::symbols::decoded_len;

/// A streaming decoder that owns its output.
///
/// Every chunk handed to `decode` must hold a whole number of symbols packed
/// from bit 0 of its first byte; nothing carries over between chunks except
/// the output position.
#[derive(Debug)]
pub struct StreamDecoder {
    ctx: CodingContext<Vec<u8>>,
    config: DecodeConfig,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::with_config(DecodeConfig::default())
    }

    pub fn with_config(config: DecodeConfig) -> Self {
        let mut ctx = CodingContext::new();
        ctx.set_output(Vec::new());
        Self { ctx, config }
    }

    /// Builds a decoder from the `decode` section of a full configuration.
    pub fn from_config(config: &LineCodeConfig) -> Self {
        Self::with_config(config.decode)
    }

    /// Decodes `bit_length` bits of `chunk` and returns the bytes this call
    /// produced.
    ///
    /// On `CodeViolation` the bytes decoded before the bad symbol are kept and
    /// remain visible through `decoded`.
    pub fn decode(&mut self, chunk: &[u8], bit_length: usize) -> Result<&[u8], LineCodeError> {
        check_decode_request(&self.config, chunk.len(), bit_length)?;

        let start = self.ctx.cursor().byte;
        let needed = start + decoded_len(bit_length);
        if let Some(buf) = self.ctx.output_mut() {
            if buf.len() < needed {
                buf.resize(needed, 0);
            }
        }

        if let Err(err) = self.ctx.decode(chunk, bit_length) {
            log::warn!(
                "StreamDecoder: {} ({} bytes decoded in total)",
                err,
                self.ctx.cursor().byte
            );
            return Err(err);
        }
        Ok(&self.ctx.written()[start..])
    }

    /// Everything decoded so far.
    pub fn decoded(&self) -> &[u8] {
        self.ctx.written()
    }

    /// Consumes the decoder and returns everything decoded.
    pub fn finish(mut self) -> Vec<u8> {
        let len = self.ctx.cursor().byte;
        let mut buf = self.ctx.take_output().unwrap_or_default();
        buf.truncate(len);
        buf
    }
}
