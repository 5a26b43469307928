// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use num_complex::Complex;
use num_traits::float::FloatCore;
use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DType, Value};

/// A one-dimensional owned array tagged with its data type.
///
/// Each variant corresponds to one [`DType`]. `Uint8c` stores plain bytes;
/// use [`DynArray::set_clamped`] to write through its clamping conversion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "dtype", content = "data", rename_all = "lowercase"))]
pub enum DynArray
{
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Complex128(Vec<Complex<f64>>),
    Complex64(Vec<Complex<f32>>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8c(Vec<u8>),
    Generic(Vec<Value>),
}

/// Apply `$f` to the vector inside any variant.
macro_rules! with_vec {
    ($array:expr, $v:ident => $f:expr) => {
        match $array {
            DynArray::Float64($v) => $f,
            DynArray::Float32($v) => $f,
            DynArray::Complex128($v) => $f,
            DynArray::Complex64($v) => $f,
            DynArray::Int32($v) => $f,
            DynArray::Uint32($v) => $f,
            DynArray::Int16($v) => $f,
            DynArray::Uint16($v) => $f,
            DynArray::Int8($v) => $f,
            DynArray::Uint8($v) => $f,
            DynArray::Uint8c($v) => $f,
            DynArray::Generic($v) => $f,
        }
    };
}

impl DynArray
{
    /// Return the number of elements in the array.
    pub fn len(&self) -> usize
    {
        with_vec!(self, v => v.len())
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the data type of the array.
    pub fn dtype(&self) -> DType
    {
        match self {
            DynArray::Float64(_) => DType::Float64,
            DynArray::Float32(_) => DType::Float32,
            DynArray::Complex128(_) => DType::Complex128,
            DynArray::Complex64(_) => DType::Complex64,
            DynArray::Int32(_) => DType::Int32,
            DynArray::Uint32(_) => DType::Uint32,
            DynArray::Int16(_) => DType::Int16,
            DynArray::Uint16(_) => DType::Uint16,
            DynArray::Int8(_) => DType::Int8,
            DynArray::Uint8(_) => DType::Uint8,
            DynArray::Uint8c(_) => DType::Uint8c,
            DynArray::Generic(_) => DType::Generic,
        }
    }

    /// Return a typed view of the elements, or `None` if `A` does not match
    /// the data type.
    ///
    /// `u8` views both `uint8` and `uint8c` arrays.
    ///
    /// ```
    /// use empty_like::DynArray;
    ///
    /// let a = DynArray::from(vec![1i16, 2, 3]);
    /// assert_eq!(a.as_slice::<i16>(), Some(&[1, 2, 3][..]));
    /// assert_eq!(a.as_slice::<u16>(), None);
    /// ```
    pub fn as_slice<A: Element>(&self) -> Option<&[A]>
    {
        A::as_slice(self)
    }

    /// Return a mutable typed view of the elements, or `None` if `A` does not
    /// match the data type.
    pub fn as_slice_mut<A: Element>(&mut self) -> Option<&mut [A]>
    {
        A::as_slice_mut(self)
    }

    /// Consume the array and return its elements, or give the array back if
    /// `A` does not match the data type.
    pub fn into_vec<A: Element>(self) -> Result<Vec<A>, DynArray>
    {
        A::into_vec(self)
    }

    /// Store `value` at `index` of a `uint8c` array.
    ///
    /// The value is clamped into `0..=255` and rounded half to even; NaN
    /// stores `0`. Returns `false`, leaving the array untouched, when the
    /// array is not `uint8c` or `index` is out of bounds.
    pub fn set_clamped(&mut self, index: usize, value: f64) -> bool
    {
        match self {
            DynArray::Uint8c(v) => match v.get_mut(index) {
                Some(elt) => {
                    *elt = clamp_u8(value);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

fn clamp_u8(value: f64) -> u8
{
    if value.is_nan() || value <= 0. {
        return 0;
    }
    if value >= 255. {
        return 255;
    }
    let floor = FloatCore::floor(value);
    let diff = value - floor;
    let rounded = if diff > 0.5 || (diff == 0.5 && floor % 2. != 0.) {
        floor + 1.
    } else {
        floor
    };
    rounded as u8
}

impl fmt::Display for DynArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: &[T]) -> fmt::Result
        {
            f.write_str("[")?;
            for (i, elt) in v.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                elt.fmt(f)?;
            }
            f.write_str("]")
        }
        with_vec!(self, v => list(f, v.as_slice()))
    }
}

/// Elements that can be stored in a [`DynArray`].
///
/// This trait is sealed and implemented for `f64`, `f32`, `Complex<f64>`,
/// `Complex<f32>`, `i32`, `u32`, `i16`, `u16`, `i8`, `u8` and [`Value`].
pub trait Element: Clone + 'static
{
    /// The data type of arrays holding this element.
    const DTYPE: DType;

    /// A vector of `len` elements with unspecified contents.
    fn empty_vec(len: usize) -> Vec<Self>;

    #[doc(hidden)]
    fn as_slice(array: &DynArray) -> Option<&[Self]>;

    #[doc(hidden)]
    fn as_slice_mut(array: &mut DynArray) -> Option<&mut [Self]>;

    #[doc(hidden)]
    fn into_vec(array: DynArray) -> Result<Vec<Self>, DynArray>;

    #[doc(hidden)]
    fn into_array(v: Vec<Self>) -> DynArray;

    private_decl! {}
}

macro_rules! impl_element {
    ($elem:ty, $variant:ident) => {
        impl_element!($elem, $variant, |len| vec![<$elem>::zero(); len]);
    };
    ($elem:ty, $variant:ident, |$len:ident| $fill:expr) => {
        impl Element for $elem
        {
            const DTYPE: DType = DType::$variant;

            fn empty_vec($len: usize) -> Vec<Self>
            {
                $fill
            }

            fn as_slice(array: &DynArray) -> Option<&[Self]>
            {
                match array {
                    DynArray::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            fn as_slice_mut(array: &mut DynArray) -> Option<&mut [Self]>
            {
                match array {
                    DynArray::$variant(v) => Some(v.as_mut_slice()),
                    _ => None,
                }
            }

            fn into_vec(array: DynArray) -> Result<Vec<Self>, DynArray>
            {
                match array {
                    DynArray::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }

            fn into_array(v: Vec<Self>) -> DynArray
            {
                DynArray::$variant(v)
            }

            private_impl! {}
        }

        impl From<Vec<$elem>> for DynArray
        {
            fn from(v: Vec<$elem>) -> Self
            {
                DynArray::$variant(v)
            }
        }
    };
}

impl_element!(f64, Float64);
impl_element!(f32, Float32);
impl_element!(Complex<f64>, Complex128);
impl_element!(Complex<f32>, Complex64);
impl_element!(i32, Int32);
impl_element!(u32, Uint32);
impl_element!(i16, Int16);
impl_element!(u16, Uint16);
impl_element!(i8, Int8);
impl_element!(Value, Generic, |len| vec![Value::Number(0.); len]);

// u8 backs two data types, so it is written out.
impl Element for u8
{
    const DTYPE: DType = DType::Uint8;

    fn empty_vec(len: usize) -> Vec<Self>
    {
        vec![0; len]
    }

    fn as_slice(array: &DynArray) -> Option<&[Self]>
    {
        match array {
            DynArray::Uint8(v) | DynArray::Uint8c(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn as_slice_mut(array: &mut DynArray) -> Option<&mut [Self]>
    {
        match array {
            DynArray::Uint8(v) | DynArray::Uint8c(v) => Some(v.as_mut_slice()),
            _ => None,
        }
    }

    fn into_vec(array: DynArray) -> Result<Vec<Self>, DynArray>
    {
        match array {
            DynArray::Uint8(v) | DynArray::Uint8c(v) => Ok(v),
            other => Err(other),
        }
    }

    fn into_array(v: Vec<Self>) -> DynArray
    {
        DynArray::Uint8(v)
    }

    private_impl! {}
}

impl From<Vec<u8>> for DynArray
{
    fn from(v: Vec<u8>) -> Self
    {
        DynArray::Uint8(v)
    }
}
