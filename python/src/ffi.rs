//! ffi.rs
//! Python-facing encoder functions.
//!
//! Arguments arrive as a raw tuple so arity and type errors go through the
//! same `InvalidArguments` path as every other rejection.

use pyo3::exceptions::{PyOverflowError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyFloat, PyLong, PyTuple};

use fdshape_core::constants::{vertex_ids, FDSHAPE, HEADER_LEN, VERTEX_LEN};
use fdshape_core::{encode_header_args, encode_vertex_args, ArgValue, EncodeError};

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_header, m)?)?;
    m.add_function(wrap_pyfunction!(encode_vertex, m)?)?;

    m.add("FDSHAPE", FDSHAPE)?;
    m.add("STARTVERTEX", vertex_ids::STARTVERTEX)?;
    m.add("LINEVERTEX", vertex_ids::LINEVERTEX)?;
    m.add("POLYVERTEX", vertex_ids::POLYVERTEX)?;
    m.add("HEADER_LEN", HEADER_LEN)?;
    m.add("VERTEX_LEN", VERTEX_LEN)?;
    Ok(())
}

/// Encode an fdShape header. Returns bytes
#[pyfunction]
#[pyo3(signature = (*args))]
fn encode_header<'py>(py: Python<'py>, args: &Bound<'py, PyTuple>) -> PyResult<Bound<'py, PyBytes>> {
    let values = collect_args(args)?;
    let out = encode_header_args(&values).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &out))
}

/// Encode an fdShape vertex. Returns bytes
#[pyfunction]
#[pyo3(signature = (*args))]
fn encode_vertex<'py>(py: Python<'py>, args: &Bound<'py, PyTuple>) -> PyResult<Bound<'py, PyBytes>> {
    let values = collect_args(args)?;
    let out = encode_vertex_args(&values).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &out))
}

fn collect_args(args: &Bound<'_, PyTuple>) -> PyResult<Vec<ArgValue>> {
    args.iter().map(|obj| to_arg_value(&obj)).collect()
}

fn to_arg_value(obj: &Bound<'_, PyAny>) -> PyResult<ArgValue> {
    // bool is an int subclass and converts like one.
    if obj.is_instance_of::<PyLong>() {
        return int_value(obj);
    }
    if obj.is_instance_of::<PyFloat>() {
        return Ok(ArgValue::Float(obj.extract::<f64>()?));
    }
    // Integer-like objects (numpy scalars, user types) expose __index__.
    if obj.hasattr("__index__")? {
        if let Ok(index) = obj.call_method0("__index__") {
            if index.is_instance_of::<PyLong>() {
                return int_value(&index);
            }
        }
    }
    // PyFloat_AsDouble follows __float__ (Decimal, Fraction, ...).
    if let Ok(f) = obj.extract::<f64>() {
        return Ok(ArgValue::Float(f));
    }
    Ok(ArgValue::Other(obj.get_type().name()?.to_string()))
}

fn int_value(obj: &Bound<'_, PyAny>) -> PyResult<ArgValue> {
    Ok(match obj.extract::<i128>() {
        Ok(v) => ArgValue::Int(v),
        Err(_) => ArgValue::BigInt(obj.str()?.to_string()),
    })
}

fn to_py_err(e: EncodeError) -> PyErr {
    if e.arg_error().is_overflow() {
        PyOverflowError::new_err(e.to_string())
    } else {
        PyTypeError::new_err(e.to_string())
    }
}
