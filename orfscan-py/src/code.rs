use std::collections::HashMap;

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::utils::to_py_err;
use orfscan_core::code::GeneticCode as CoreGeneticCode;
use orfscan_core::io::csv::read_genetic_code;

#[pyclass(frozen, name = "GeneticCode")]
pub struct GeneticCode {
    pub(crate) inner: CoreGeneticCode,
}

#[pymethods]
impl GeneticCode {
    /// Build from a `dict[str, str]` of all 64 codons; `None` gives the standard table.
    #[new]
    #[pyo3(signature = (table=None))]
    fn new(table: Option<HashMap<String, String>>) -> PyResult<Self> {
        let inner = match table {
            Some(table) => CoreGeneticCode::new(table).map_err(to_py_err)?,
            None => CoreGeneticCode::standard(),
        };
        Ok(Self { inner })
    }

    #[staticmethod]
    fn standard() -> Self {
        Self {
            inner: CoreGeneticCode::standard(),
        }
    }

    #[staticmethod]
    fn from_csv(path: std::path::PathBuf) -> PyResult<Self> {
        let inner = read_genetic_code(path).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __getitem__(&self, codon: &str) -> PyResult<String> {
        let residue = self.inner.get(codon.as_bytes()).map_err(to_py_err)?;
        Ok((residue.as_byte() as char).to_string())
    }

    fn __len__(&self) -> usize {
        self.inner.entries().count()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (codon, residue) in self.inner.entries() {
            let codon = std::str::from_utf8(&codon)?;
            dict.set_item(codon, (residue.as_byte() as char).to_string())?;
        }
        Ok(dict)
    }

    fn __eq__(&self, other: PyRef<'_, GeneticCode>) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        if self.inner == CoreGeneticCode::standard() {
            "GeneticCode(standard)".to_string()
        } else {
            "GeneticCode(custom)".to_string()
        }
    }
}

/// Resolve an optional `GeneticCode` or `dict[str, str]` argument.
pub fn extract_code(obj: Option<&Bound<'_, PyAny>>) -> PyResult<CoreGeneticCode> {
    let Some(obj) = obj else {
        return Ok(CoreGeneticCode::standard());
    };
    if obj.is_none() {
        return Ok(CoreGeneticCode::standard());
    }

    if let Ok(code) = obj.extract::<PyRef<'_, GeneticCode>>() {
        return Ok(code.inner.clone());
    }

    if let Ok(table) = obj.extract::<HashMap<String, String>>() {
        return CoreGeneticCode::new(table).map_err(to_py_err);
    }

    Err(PyTypeError::new_err(
        "genetic_code must be GeneticCode, dict[str, str], or None",
    ))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GeneticCode>()?;
    Ok(())
}
