#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

use crate::code::extract_code;
use crate::utils::{self, to_py_err};
use orfscan_core::seq::RnaSeq;
use orfscan_core::translate::translate_orf;

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
pub struct RNA {
    pub(crate) inner: RnaSeq,
}

#[pymethods]
impl RNA {
    #[new]
    fn new(seq: &Bound<'_, PyAny>) -> PyResult<Self> {
        let inner = RnaSeq::new(utils::extract_bytes(seq)?).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn reverse(&self) -> Self {
        Self {
            inner: self.inner.reverse(),
        }
    }

    fn complement(&self) -> PyResult<Self> {
        let inner = self.inner.complement().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn reverse_complement(&self) -> PyResult<Self> {
        let inner = self.inner.reverse_complement().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[pyo3(signature = (genetic_code=None))]
    fn translate(&self, genetic_code: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
        let code = extract_code(genetic_code)?;
        let translation = translate_orf(&self.inner, &code).map_err(to_py_err)?;
        Ok(translation.peptide.into_string())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __eq__(&self, other: PyRef<'_, RNA>) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("RNA({:?})", self.inner.to_string())
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RNA>()?;
    Ok(())
}
