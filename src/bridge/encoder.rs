// In: src/bridge/encoder.rs

use crate::context::{CodingContext, RunningDisparity};
use crate::kernels::SYMBOL_BITS;

/// A streaming encoder that owns its output.
///
/// Successive `encode` calls append to one continuous bit stream, so the
/// result equals a single `encode_bytes` call over the concatenated input.
#[derive(Debug)]
pub struct StreamEncoder {
    ctx: CodingContext<Vec<u8>>,
}

impl Default for StreamEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamEncoder {
    pub fn new() -> Self {
        let mut ctx = CodingContext::new();
        ctx.set_output(Vec::new());
        Self { ctx }
    }

    /// Appends the symbols for `data` to the stream.
    pub fn encode(&mut self, data: &[u8]) {
        // Grow ahead of the core call; the core never allocates.
        let needed = self.ctx.cursor().bytes_after(data.len() * SYMBOL_BITS);
        if let Some(buf) = self.ctx.output_mut() {
            if buf.len() < needed {
                buf.resize(needed, 0);
            }
        }
        self.ctx.encode(data);
    }

    /// The encoded stream so far. A trailing partial byte is included.
    pub fn encoded(&self) -> &[u8] {
        self.ctx.written()
    }

    pub fn bits_written(&self) -> usize {
        self.ctx.bits_written()
    }

    pub fn disparity(&self) -> RunningDisparity {
        self.ctx.disparity()
    }

    /// Consumes the encoder and returns the encoded stream.
    pub fn finish(mut self) -> Vec<u8> {
        let len = self.ctx.bytes_written();
        let mut buf = self.ctx.take_output().unwrap_or_default();
        buf.truncate(len);
        log::debug!("StreamEncoder finished: {} bytes, {}", buf.len(), self.ctx.disparity());
        buf
    }
}
