//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod engine_bindings;

/// Python module definition
#[pymodule]
fn fourier(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<engine_bindings::PyTransformEngine>()?;
    m.add_class::<engine_bindings::PyScaling>()?;

    Ok(())
}
