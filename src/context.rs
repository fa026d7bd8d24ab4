//! The coding context: the only mutable state of an 8b/10b stream.
//!
//! A `CodingContext` owns the running disparity, the output cursor and the
//! bound output buffer. One context models one independent encode or decode
//! stream. It is `Send` when its buffer is, but performs no locking; callers
//! that share one across threads must provide exclusive access themselves.

use std::fmt;

use crate::error::LineCodeError;
use crate::kernels::{packer, subsymbol, unpacker};

//==================================================================================
// 1. Running Disparity & Output Cursor
//==================================================================================

/// Running disparity of the transmitted stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunningDisparity {
    #[default]
    Negative,
    Positive,
}

impl RunningDisparity {
    pub fn is_negative(self) -> bool {
        self == RunningDisparity::Negative
    }

    /// Flips the disparity in place.
    pub fn flip(&mut self) {
        *self = self.flipped();
    }

    pub fn flipped(self) -> Self {
        match self {
            RunningDisparity::Negative => RunningDisparity::Positive,
            RunningDisparity::Positive => RunningDisparity::Negative,
        }
    }
}

impl fmt::Display for RunningDisparity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunningDisparity::Negative => write!(f, "RD-"),
            RunningDisparity::Positive => write!(f, "RD+"),
        }
    }
}

/// Write position inside the bound output buffer.
///
/// `bit` is always in `0..8`. Encoding advances it by 10 mod 8 per symbol;
/// decoding writes whole bytes and leaves it at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputCursor {
    pub byte: usize,
    pub bit: u8,
}

impl OutputCursor {
    /// Absolute bit position from the start of the buffer.
    pub fn bit_position(&self) -> usize {
        self.byte * 8 + self.bit as usize
    }

    /// Buffer length needed once `bits` more bits are appended here.
    pub fn bytes_after(&self, bits: usize) -> usize {
        (self.bit_position() + bits).div_ceil(8)
    }
}

//==================================================================================
// 2. The Coding Context
//==================================================================================

/// State of one 8b/10b stream, generic over the output buffer type.
///
/// Any `AsMut<[u8]>` works as a buffer: a borrowed `&mut [u8]` for fixed,
/// caller-owned memory, or a `Vec<u8>` when the context should own it. The
/// context never allocates.
#[derive(Debug)]
pub struct CodingContext<B> {
    disparity: RunningDisparity,
    cursor: OutputCursor,
    output: Option<B>,
}

impl<B> Default for CodingContext<B> {
    fn default() -> Self {
        Self {
            disparity: RunningDisparity::Negative,
            cursor: OutputCursor::default(),
            output: None,
        }
    }
}

impl<B> CodingContext<B> {
    /// Creates an initialized context with no output buffer bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the disparity to negative and the cursor to zero, and unbinds the
    /// output buffer. Returns the buffer that was bound, if any.
    pub fn init(&mut self) -> Option<B> {
        self.disparity = RunningDisparity::Negative;
        self.cursor = OutputCursor::default();
        self.output.take()
    }

    /// Binds `buffer` as the output and resets the cursor to its start. The
    /// running disparity is left alone. Returns the previously bound buffer.
    ///
    /// Encoding ORs bits into the buffer, so it must be zeroed for encode use.
    pub fn set_output(&mut self, buffer: B) -> Option<B> {
        self.cursor = OutputCursor::default();
        self.output.replace(buffer)
    }

    /// Unbinds and returns the output buffer. The cursor is reset.
    pub fn take_output(&mut self) -> Option<B> {
        self.cursor = OutputCursor::default();
        self.output.take()
    }

    pub fn output(&self) -> Option<&B> {
        self.output.as_ref()
    }

    pub(crate) fn output_mut(&mut self) -> Option<&mut B> {
        self.output.as_mut()
    }

    pub fn disparity(&self) -> RunningDisparity {
        self.disparity
    }

    pub fn cursor(&self) -> OutputCursor {
        self.cursor
    }

    /// Bits written since the output buffer was bound.
    pub fn bits_written(&self) -> usize {
        self.cursor.bit_position()
    }

    /// Bytes touched since the output buffer was bound, counting a partly
    /// filled final byte.
    pub fn bytes_written(&self) -> usize {
        self.cursor.bytes_after(0)
    }

    /// Encodes one 5-bit value against this context's running disparity.
    pub fn encode6(&mut self, value: u8) -> u8 {
        subsymbol::encode6(&mut self.disparity, value)
    }

    /// Encodes one 3-bit value against this context's running disparity.
    pub fn encode4(&mut self, value: u8) -> u8 {
        subsymbol::encode4(&mut self.disparity, value)
    }
}

impl<B: AsMut<[u8]>> CodingContext<B> {
    /// Encodes `bytes` into the bound buffer, one 10-bit symbol per byte,
    /// continuing from where the previous call stopped.
    ///
    /// # Panics
    /// If no buffer is bound or it is too small for this call's output.
    pub fn encode(&mut self, bytes: &[u8]) {
        let Some(output) = self.output.as_mut() else {
            panic!("encode called on a context with no output buffer bound");
        };
        packer::encode_into(
            output.as_mut(),
            &mut self.cursor,
            &mut self.disparity,
            bytes,
        );
        log::trace!(
            "encoded {} bytes, cursor {:?}, {}",
            bytes.len(),
            self.cursor,
            self.disparity
        );
    }

    /// Decodes the first `bit_length` bits of `bits` into the bound buffer,
    /// one byte per symbol, continuing from the previous call's output.
    ///
    /// Each call must carry whole symbols; no partial symbol is carried over.
    ///
    /// # Errors
    /// `LineCodeError::CodeViolation` on the first invalid symbol. Everything
    /// decoded before it stays in the buffer.
    ///
    /// # Panics
    /// If no buffer is bound, `bit_length` is not a multiple of 10 or exceeds
    /// `bits`, or the buffer cannot hold the decoded bytes.
    pub fn decode(&mut self, bits: &[u8], bit_length: usize) -> Result<(), LineCodeError> {
        let Some(output) = self.output.as_mut() else {
            panic!("decode called on a context with no output buffer bound");
        };
        let result = unpacker::decode_into(output.as_mut(), &mut self.cursor, bits, bit_length);
        log::trace!("decoded {} bits, cursor {:?}", bit_length, self.cursor);
        result
    }
}

impl<B: AsRef<[u8]>> CodingContext<B> {
    /// The bound buffer as bytes, in full.
    pub fn output_bytes(&self) -> Option<&[u8]> {
        self.output.as_ref().map(|b| b.as_ref())
    }

    /// The prefix of the bound buffer written so far.
    pub fn written(&self) -> &[u8] {
        match self.output.as_ref() {
            Some(b) => &b.as_ref()[..self.bytes_written()],
            None => &[],
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
