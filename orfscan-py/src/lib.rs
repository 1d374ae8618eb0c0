use pyo3::prelude::*;

mod code;
mod orf;
mod rna;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    code::register(m)?;
    rna::register(m)?;
    orf::register(m)?;
    Ok(())
}
