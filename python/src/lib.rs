//! fdshape-python
//!
//! Python bindings for fdshape-core (PyO3).

#![allow(non_snake_case)]

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
#[pyo3(name = "fdSencode")]
fn fdsencode(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(py, m)?;
    Ok(())
}
