// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;

use crate::error::{self, Error};
use crate::{dtype_of, empty, DynArray, Element, Value};

/// Create an array with the same length and data type as `x`, with
/// unspecified contents.
///
/// If `dtype` is given it replaces the data type of `x`.
///
/// **Errors** if `x` is not an array, typed array, or complex typed array
/// ([`ErrorKind::InvalidArray`](crate::ErrorKind::InvalidArray)), or if
/// `dtype` is not a recognized data type
/// ([`ErrorKind::InvalidDType`](crate::ErrorKind::InvalidDType)).
///
/// ```
/// use empty_like::{empty_like, DType, Value};
///
/// let x = Value::from(vec![0.0f64, 0.0]);
///
/// let a = empty_like(&x, None).unwrap();
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.dtype(), DType::Float64);
///
/// let a = empty_like(&x, Some("float32")).unwrap();
/// assert_eq!(a.dtype(), DType::Float32);
///
/// assert!(empty_like(&Value::Null, None).is_err());
/// ```
pub fn empty_like(x: &Value, dtype: Option<&str>) -> Result<DynArray, Error>
{
    let dt = dtype_of(x).ok_or_else(|| error::invalid_array(x))?;
    let len = x.len().unwrap_or(0);
    match dtype {
        Some(dtype) => empty(len, dtype),
        None => Ok(DynArray::empty(len, dt)),
    }
}

/// Create an array with the same length and data type as `x`, with
/// unspecified contents.
///
/// Like [`empty_like`] for a value already known to be an array.
///
/// **Errors** if `dtype` is not a recognized data type.
pub fn empty_like_array(x: &DynArray, dtype: Option<&str>) -> Result<DynArray, Error>
{
    match dtype {
        Some(dtype) => empty(x.len(), dtype),
        None => Ok(DynArray::empty(x.len(), x.dtype())),
    }
}

/// Create a vector with the same length and element type as `x`, with
/// unspecified contents.
///
/// ```
/// use empty_like::empty_like_slice;
///
/// let v = empty_like_slice(&[1u16, 2, 3]);
/// assert_eq!(v.len(), 3);
/// ```
pub fn empty_like_slice<A: Element>(x: &[A]) -> Vec<A>
{
    A::empty_vec(x.len())
}
