// In: src/ffi/python.rs

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::bridge::{self, StreamDecoder, StreamEncoder};
use crate::config::{DecodeConfig, LineCodeConfig, LogLevel, LoggingConfig};
use crate::observability;

create_exception!(
    eightbtenb,
    CodeViolation,
    PyValueError,
    "A received symbol is not a valid 8b/10b symbol."
);
create_exception!(
    eightbtenb,
    Truncated,
    PyValueError,
    "The input is shorter than the requested bit length."
);
create_exception!(
    eightbtenb,
    UnusedBytes,
    PyValueError,
    "The input carries bytes beyond the requested bit length (strict mode)."
);

//==================================================================================
// I. Stateful Streaming API
//==================================================================================

#[pyclass(name = "Encoder", module = "eightbtenb")]
pub struct PyEncoder {
    inner: StreamEncoder,
}

#[pymethods]
impl PyEncoder {
    #[new]
    fn new() -> Self {
        Self {
            inner: StreamEncoder::new(),
        }
    }

    /// Appends the encoding of `data` to the stream.
    fn encode(&mut self, data: &[u8]) {
        self.inner.encode(data);
    }

    /// Returns the encoded stream so far, including a partial final byte.
    fn getvalue<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.encoded())
    }

    #[getter]
    fn bits_written(&self) -> usize {
        self.inner.bits_written()
    }

    /// Current running disparity, "negative" or "positive".
    #[getter]
    fn disparity(&self) -> &'static str {
        if self.inner.disparity().is_negative() {
            "negative"
        } else {
            "positive"
        }
    }
}

#[pyclass(name = "Decoder", module = "eightbtenb")]
pub struct PyDecoder {
    inner: StreamDecoder,
}

#[pymethods]
impl PyDecoder {
    #[new]
    #[pyo3(signature = (strict = false))]
    fn new(strict: bool) -> Self {
        Self {
            inner: StreamDecoder::with_config(DecodeConfig {
                reject_unused_bytes: strict,
            }),
        }
    }

    /// Builds a decoder from a JSON configuration and applies its logging
    /// section, e.g. `{"decode": {"reject_unused_bytes": true}}`.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = LineCodeConfig::from_json(json)?;
        observability::init_logging(&config.logging)?;
        Ok(Self {
            inner: StreamDecoder::from_config(&config),
        })
    }

    /// Decodes one chunk of whole symbols and returns the bytes it produced.
    fn decode<'py>(
        &mut self,
        py: Python<'py>,
        data: &[u8],
        bit_length: usize,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let produced = self.inner.decode(data, bit_length)?;
        Ok(PyBytes::new_bound(py, produced))
    }

    /// Returns everything decoded so far.
    fn getvalue<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.decoded())
    }
}

//==================================================================================
// II. Stateless API
//==================================================================================

/// Encodes bytes into a packed 8b/10b bit stream.
#[pyfunction]
#[pyo3(name = "encode")]
pub fn encode_py<'py>(py: Python<'py>, data: &[u8]) -> Bound<'py, PyBytes> {
    let encoded = py.allow_threads(|| bridge::encode_bytes(data));
    PyBytes::new_bound(py, &encoded)
}

/// Decodes `bit_length` bits of an 8b/10b bit stream.
#[pyfunction]
#[pyo3(name = "decode", signature = (data, bit_length, strict = false))]
pub fn decode_py<'py>(
    py: Python<'py>,
    data: &[u8],
    bit_length: usize,
    strict: bool,
) -> PyResult<Bound<'py, PyBytes>> {
    let config = DecodeConfig {
        reject_unused_bytes: strict,
    };
    let decoded = py.allow_threads(|| bridge::decode_bytes_with(&config, data, bit_length))?;
    Ok(PyBytes::new_bound(py, &decoded))
}

/// Returns the raw 10-bit symbols of a packed bit stream.
#[pyfunction]
#[pyo3(name = "split_symbols")]
pub fn split_symbols_py(data: &[u8], bit_length: usize) -> PyResult<Vec<u16>> {
    Ok(bridge::split_symbols(data, bit_length)?)
}

//==================================================================================
// III. Logging
//==================================================================================

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    let config = LoggingConfig {
        level: LogLevel::Debug,
        log_file,
    };
    Ok(observability::init_logging(&config)?)
}

/// Registers the module's functions, classes and exceptions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    m.add_function(wrap_pyfunction!(encode_py, m)?)?;
    m.add_function(wrap_pyfunction!(decode_py, m)?)?;
    m.add_function(wrap_pyfunction!(split_symbols_py, m)?)?;
    m.add_function(wrap_pyfunction!(enable_verbose_logging_py, m)?)?;

    m.add_class::<PyEncoder>()?;
    m.add_class::<PyDecoder>()?;

    m.add("CodeViolation", py.get_type_bound::<CodeViolation>())?;
    m.add("Truncated", py.get_type_bound::<Truncated>())?;
    m.add("UnusedBytes", py.get_type_bound::<UnusedBytes>())?;

    Ok(())
}
