// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Allocation of arrays with unspecified contents.
//!
//! Numeric arrays come back zero-filled and generic arrays hold
//! `Value::Number(0.)`, but callers must not rely on either.

use alloc::vec::Vec;
use core::mem::MaybeUninit;

use crate::error::Error;
use crate::{DType, DynArray, Element};

impl DynArray
{
    /// Create an array of length `len` and data type `dtype` with
    /// unspecified contents.
    ///
    /// ```
    /// use empty_like::{DType, DynArray};
    ///
    /// let a = DynArray::empty(3, DType::Complex64);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a.dtype(), DType::Complex64);
    /// ```
    pub fn empty(len: usize, dtype: DType) -> DynArray
    {
        match dtype {
            DType::Float64 => DynArray::Float64(Element::empty_vec(len)),
            DType::Float32 => DynArray::Float32(Element::empty_vec(len)),
            DType::Complex128 => DynArray::Complex128(Element::empty_vec(len)),
            DType::Complex64 => DynArray::Complex64(Element::empty_vec(len)),
            DType::Int32 => DynArray::Int32(Element::empty_vec(len)),
            DType::Uint32 => DynArray::Uint32(Element::empty_vec(len)),
            DType::Int16 => DynArray::Int16(Element::empty_vec(len)),
            DType::Uint16 => DynArray::Uint16(Element::empty_vec(len)),
            DType::Int8 => DynArray::Int8(Element::empty_vec(len)),
            DType::Uint8 => DynArray::Uint8(Element::empty_vec(len)),
            DType::Uint8c => DynArray::Uint8c(Element::empty_vec(len)),
            DType::Generic => DynArray::Generic(Element::empty_vec(len)),
        }
    }
}

/// Create an array of length `len` whose data type is named by `dtype`.
///
/// **Errors** if `dtype` is not a recognized data type tag.
///
/// ```
/// use empty_like::{empty, DType, ErrorKind};
///
/// let a = empty(4, "int16").unwrap();
/// assert_eq!(a.dtype(), DType::Int16);
/// assert_eq!(a.len(), 4);
///
/// assert_eq!(empty(4, "int64").unwrap_err().kind(), ErrorKind::InvalidDType);
/// ```
pub fn empty(len: usize, dtype: &str) -> Result<DynArray, Error>
{
    let dtype = dtype.parse::<DType>()?;
    Ok(DynArray::empty(len, dtype))
}

/// Create a vector of `len` uninitialized elements.
///
/// The caller must write every element before reading it; see
/// [`MaybeUninit`] for the rules.
///
/// ```
/// use empty_like::uninit;
///
/// let mut v = uninit::<i32>(3);
/// for (i, elt) in v.iter_mut().enumerate() {
///     elt.write(i as i32);
/// }
/// let v: Vec<i32> = v.into_iter().map(|elt| unsafe { elt.assume_init() }).collect();
/// assert_eq!(v, [0, 1, 2]);
/// ```
pub fn uninit<A: Element>(len: usize) -> Vec<MaybeUninit<A>>
{
    let mut v = Vec::with_capacity(len);
    // MaybeUninit requires no initialization
    unsafe {
        v.set_len(len);
    }
    v
}
