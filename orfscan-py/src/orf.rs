use pyo3::prelude::*;

use crate::code::extract_code;
use crate::utils::{extract_rna, to_py_err};
use orfscan_core::orf::{self as core_orf, Orf as CoreOrf};
use orfscan_core::seq::Strand;

#[pyclass(frozen, name = "ORF")]
pub struct Orf {
    inner: CoreOrf,
}

#[pymethods]
impl Orf {
    #[getter]
    fn strand(&self) -> char {
        self.inner.frame.strand.symbol()
    }

    #[getter]
    fn offset(&self) -> usize {
        self.inner.frame.offset
    }

    #[getter]
    fn frame(&self) -> usize {
        self.inner.frame.frame_index()
    }

    #[getter]
    fn peptide(&self) -> String {
        self.inner.peptide.to_string()
    }

    #[getter]
    fn stopped(&self) -> bool {
        self.inner.stopped
    }

    fn __len__(&self) -> usize {
        self.inner.peptide.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ORF(strand='{}', offset={}, peptide={:?})",
            self.inner.frame.strand,
            self.inner.frame.offset,
            self.inner.peptide.to_string()
        )
    }
}

#[pyfunction]
#[pyo3(signature = (sequence, genetic_code=None))]
fn translate(sequence: &Bound<'_, PyAny>, genetic_code: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
    let seq = extract_rna(sequence)?;
    let code = extract_code(genetic_code)?;
    let translation = orfscan_core::translate::translate_orf(&seq, &code).map_err(to_py_err)?;
    Ok(translation.peptide.into_string())
}

#[pyfunction]
#[pyo3(signature = (sequence, frame, genetic_code=None))]
fn translate_frame(
    sequence: &Bound<'_, PyAny>,
    frame: usize,
    genetic_code: Option<&Bound<'_, PyAny>>,
) -> PyResult<String> {
    let seq = extract_rna(sequence)?;
    let code = extract_code(genetic_code)?;
    orfscan_core::translate::translate_frame(&seq, frame, &code).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (sequence, genetic_code=None))]
fn scan_all_frames(
    sequence: &Bound<'_, PyAny>,
    genetic_code: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<String>> {
    let seq = extract_rna(sequence)?;
    let code = extract_code(genetic_code)?;
    let orfs = core_orf::scan_orfs(&seq, Strand::Forward, &code).map_err(to_py_err)?;
    Ok(orfs.into_iter().map(|orf| orf.peptide.into_string()).collect())
}

#[pyfunction]
fn reverse_complement(sequence: &Bound<'_, PyAny>) -> PyResult<String> {
    let rc = extract_rna(sequence)?
        .reverse_complement()
        .map_err(to_py_err)?;
    Ok(rc.to_string())
}

#[pyfunction]
#[pyo3(signature = (sequence, genetic_code=None))]
fn find_longest_peptide(
    sequence: &Bound<'_, PyAny>,
    genetic_code: Option<&Bound<'_, PyAny>>,
) -> PyResult<String> {
    let seq = extract_rna(sequence)?;
    let code = extract_code(genetic_code)?;
    let orf = core_orf::find_longest_orf(&seq, &code).map_err(to_py_err)?;
    Ok(orf.map(|orf| orf.peptide.into_string()).unwrap_or_default())
}

#[pyfunction]
#[pyo3(signature = (sequence, genetic_code=None))]
fn six_frame_orfs(
    sequence: &Bound<'_, PyAny>,
    genetic_code: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<Orf>> {
    let seq = extract_rna(sequence)?;
    let code = extract_code(genetic_code)?;
    let orfs = core_orf::six_frame_orfs(&seq, &code).map_err(to_py_err)?;
    Ok(orfs.into_iter().map(|inner| Orf { inner }).collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Orf>()?;
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    m.add_function(wrap_pyfunction!(translate_frame, m)?)?;
    m.add_function(wrap_pyfunction!(scan_all_frames, m)?)?;
    m.add_function(wrap_pyfunction!(reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(find_longest_peptide, m)?)?;
    m.add_function(wrap_pyfunction!(six_frame_orfs, m)?)?;
    Ok(())
}
