// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Python bindings for the lanetensor engine.
//!
//! One Python class per element type, plus free functions mirroring the
//! engine's factories and operations. Element data crosses the boundary
//! by copy (`to_list`); tensors never share storage with Python objects.
//!
//! Recoverable engine errors map onto `ValueError`, except division by
//! zero which maps onto `ZeroDivisionError`. True division is spelled
//! `__truediv__`, the conventional Python operator.

use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use tensor_engine::{Shape, Tensor, TensorError};

fn to_py_err(err: TensorError) -> PyErr {
    match err {
        TensorError::DivideByZero { .. } => PyZeroDivisionError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

macro_rules! bind_tensor {
    (
        $class:ident, $t:ty, $name:literal,
        full = $full:ident, zeros = $zeros:ident, ones = $ones:ident, twos = $twos:ident,
        add = $add:ident, sub = $sub:ident, mul = $mul:ident, div = $div:ident,
        dot = $dot:ident, sum = $sum:ident, max = $max:ident,
        flatten = $flatten:ident, exp = $exp:ident
    ) => {
        #[pyclass(name = $name, frozen)]
        pub struct $class {
            inner: Tensor<$t>,
        }

        impl From<Tensor<$t>> for $class {
            fn from(inner: Tensor<$t>) -> Self {
                Self { inner }
            }
        }

        #[pymethods]
        impl $class {
            /// Zero-initialized tensor of the given shape.
            #[new]
            fn new(shape: Vec<usize>) -> Self {
                Tensor::new(shape).into()
            }

            #[getter]
            fn shape(&self) -> Vec<usize> {
                self.inner.shape().dims().to_vec()
            }

            /// Copies the elements out in row-major order.
            fn to_list(&self) -> Vec<$t> {
                self.inner.to_vec()
            }

            fn __add__(&self, other: &Self) -> PyResult<Self> {
                tensor_engine::add(&self.inner, &other.inner)
                    .map(Self::from)
                    .map_err(to_py_err)
            }

            fn __sub__(&self, other: &Self) -> PyResult<Self> {
                tensor_engine::sub(&self.inner, &other.inner)
                    .map(Self::from)
                    .map_err(to_py_err)
            }

            fn __mul__(&self, other: &Self) -> PyResult<Self> {
                tensor_engine::mul(&self.inner, &other.inner)
                    .map(Self::from)
                    .map_err(to_py_err)
            }

            fn __truediv__(&self, other: &Self) -> PyResult<Self> {
                tensor_engine::div(&self.inner, &other.inner)
                    .map(Self::from)
                    .map_err(to_py_err)
            }

            fn __matmul__(&self, other: &Self) -> PyResult<Self> {
                tensor_engine::dot(&self.inner, &other.inner)
                    .map(Self::from)
                    .map_err(to_py_err)
            }

            fn __repr__(&self) -> String {
                self.inner.to_string()
            }
        }

        #[pyfunction]
        fn $full(shape: Vec<usize>, value: $t) -> $class {
            tensor_engine::full(shape, value).into()
        }

        #[pyfunction]
        fn $zeros(shape: Vec<usize>) -> $class {
            tensor_engine::zeros::<$t>(shape).into()
        }

        #[pyfunction]
        fn $ones(shape: Vec<usize>) -> $class {
            tensor_engine::ones::<$t>(shape).into()
        }

        #[pyfunction]
        fn $twos(shape: Vec<usize>) -> $class {
            tensor_engine::twos::<$t>(shape).into()
        }

        #[pyfunction]
        fn $add(a: &$class, b: &$class) -> PyResult<$class> {
            tensor_engine::add(&a.inner, &b.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $sub(a: &$class, b: &$class) -> PyResult<$class> {
            tensor_engine::sub(&a.inner, &b.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $mul(a: &$class, b: &$class) -> PyResult<$class> {
            tensor_engine::mul(&a.inner, &b.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $div(a: &$class, b: &$class) -> PyResult<$class> {
            tensor_engine::div(&a.inner, &b.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $dot(a: &$class, b: &$class) -> PyResult<$class> {
            tensor_engine::dot(&a.inner, &b.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $sum(a: &$class) -> $class {
            tensor_engine::sum(&a.inner).into()
        }

        #[pyfunction]
        fn $max(a: &$class) -> PyResult<$class> {
            tensor_engine::max(&a.inner)
                .map($class::from)
                .map_err(to_py_err)
        }

        #[pyfunction]
        fn $flatten(a: &$class) -> $class {
            tensor_engine::flatten(&a.inner).into()
        }

        #[pyfunction]
        fn $exp(a: &$class) -> $class {
            tensor_engine::exp(&a.inner).into()
        }
    };
}

macro_rules! bind_float_factories {
    ($t:ty, rand = $rand:ident, randn = $randn:ident, class = $class:ident) => {
        #[pyfunction]
        fn $rand(shape: Vec<usize>) -> $class {
            tensor_engine::rand::<$t>(shape).into()
        }

        #[pyfunction]
        fn $randn(shape: Vec<usize>) -> $class {
            tensor_engine::randn::<$t>(shape).into()
        }
    };
}

bind_tensor!(
    PyTensorI8, i8, "TensorInt8",
    full = full_int8, zeros = zeros_int8, ones = ones_int8, twos = twos_int8,
    add = add_int8, sub = sub_int8, mul = mul_int8, div = div_int8,
    dot = dot_int8, sum = sum_int8, max = max_int8,
    flatten = flatten_int8, exp = exp_int8
);

bind_tensor!(
    PyTensorI16, i16, "TensorInt16",
    full = full_int16, zeros = zeros_int16, ones = ones_int16, twos = twos_int16,
    add = add_int16, sub = sub_int16, mul = mul_int16, div = div_int16,
    dot = dot_int16, sum = sum_int16, max = max_int16,
    flatten = flatten_int16, exp = exp_int16
);

bind_tensor!(
    PyTensorI32, i32, "TensorInt32",
    full = full_int32, zeros = zeros_int32, ones = ones_int32, twos = twos_int32,
    add = add_int32, sub = sub_int32, mul = mul_int32, div = div_int32,
    dot = dot_int32, sum = sum_int32, max = max_int32,
    flatten = flatten_int32, exp = exp_int32
);

bind_tensor!(
    PyTensorF32, f32, "TensorFloat32",
    full = full_float32, zeros = zeros_float32, ones = ones_float32, twos = twos_float32,
    add = add_float32, sub = sub_float32, mul = mul_float32, div = div_float32,
    dot = dot_float32, sum = sum_float32, max = max_float32,
    flatten = flatten_float32, exp = exp_float32
);

bind_tensor!(
    PyTensorF64, f64, "TensorFloat64",
    full = full_float64, zeros = zeros_float64, ones = ones_float64, twos = twos_float64,
    add = add_float64, sub = sub_float64, mul = mul_float64, div = div_float64,
    dot = dot_float64, sum = sum_float64, max = max_float64,
    flatten = flatten_float64, exp = exp_float64
);

bind_float_factories!(f32, rand = rand_float32, randn = randn_float32, class = PyTensorF32);
bind_float_factories!(f64, rand = rand_float64, randn = randn_float64, class = PyTensorF64);

/// Shape of a hypothetical tensor without building one.
#[pyfunction]
fn shape_elements(shape: Vec<usize>) -> usize {
    Shape::new(shape).num_elements()
}

macro_rules! add_type_functions {
    ($m:expr, $($f:ident),+ $(,)?) => {
        $( $m.add_function(wrap_pyfunction!($f, $m)?)?; )+
    };
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTensorI8>()?;
    m.add_class::<PyTensorI16>()?;
    m.add_class::<PyTensorI32>()?;
    m.add_class::<PyTensorF32>()?;
    m.add_class::<PyTensorF64>()?;

    m.add("SIMD_WIDTH_BITS", tensor_engine::SIMD_WIDTH_BITS)?;
    m.add("BACKEND_NAME", tensor_engine::BACKEND_NAME)?;

    add_type_functions!(
        m,
        full_int8, zeros_int8, ones_int8, twos_int8,
        add_int8, sub_int8, mul_int8, div_int8, dot_int8,
        sum_int8, max_int8, flatten_int8, exp_int8,
    );
    add_type_functions!(
        m,
        full_int16, zeros_int16, ones_int16, twos_int16,
        add_int16, sub_int16, mul_int16, div_int16, dot_int16,
        sum_int16, max_int16, flatten_int16, exp_int16,
    );
    add_type_functions!(
        m,
        full_int32, zeros_int32, ones_int32, twos_int32,
        add_int32, sub_int32, mul_int32, div_int32, dot_int32,
        sum_int32, max_int32, flatten_int32, exp_int32,
    );
    add_type_functions!(
        m,
        full_float32, zeros_float32, ones_float32, twos_float32,
        add_float32, sub_float32, mul_float32, div_float32, dot_float32,
        sum_float32, max_float32, flatten_float32, exp_float32,
        rand_float32, randn_float32,
    );
    add_type_functions!(
        m,
        full_float64, zeros_float64, ones_float64, twos_float64,
        add_float64, sub_float64, mul_float64, div_float64, dot_float64,
        sum_float64, max_float64, flatten_float64, exp_float64,
        rand_float64, randn_float64,
    );

    m.add_function(wrap_pyfunction!(shape_elements, m)?)?;

    Ok(())
}
