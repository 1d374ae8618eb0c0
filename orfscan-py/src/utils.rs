use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use crate::rna::RNA;
use orfscan_core::error::BioError;
use orfscan_core::seq::RnaSeq;

pub fn to_py_err(e: BioError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

pub fn extract_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))
}

/// Accepts an `RNA` instance, `str`, or bytes-like object.
pub fn extract_rna<'py>(obj: &Bound<'py, PyAny>) -> PyResult<RnaSeq> {
    if let Ok(rna) = obj.extract::<PyRef<'py, RNA>>() {
        return Ok(rna.inner.clone());
    }

    RnaSeq::new(extract_bytes(obj)?).map_err(to_py_err)
}
