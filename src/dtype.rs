// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data type tags and resolution of a value's data type.

use core::fmt;
use core::str::FromStr;

use crate::error::{self, Error};
use crate::{DynArray, Value};

/// Tag identifying an array's element representation.
///
/// The string form of each variant (see [`DType::name`]) is the tag accepted
/// by [`empty`](crate::empty) and [`empty_like`](crate::empty_like).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DType
{
    /// `f64`
    Float64,
    /// `f32`
    Float32,
    /// `Complex<f64>`
    Complex128,
    /// `Complex<f32>`
    Complex64,
    /// `i32`
    Int32,
    /// `u32`
    Uint32,
    /// `i16`
    Int16,
    /// `u16`
    Uint16,
    /// `i8`
    Int8,
    /// `u8`
    Uint8,
    /// `u8`, with writes clamped into `0..=255`
    Uint8c,
    /// Any [`Value`]
    Generic,
}

impl DType
{
    /// Every data type, in canonical order.
    pub const ALL: [DType; 12] = [
        DType::Float64,
        DType::Float32,
        DType::Complex128,
        DType::Complex64,
        DType::Int32,
        DType::Uint32,
        DType::Int16,
        DType::Uint16,
        DType::Int8,
        DType::Uint8,
        DType::Uint8c,
        DType::Generic,
    ];

    /// The tag naming this data type.
    pub fn name(self) -> &'static str
    {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Complex128 => "complex128",
            DType::Complex64 => "complex64",
            DType::Int32 => "int32",
            DType::Uint32 => "uint32",
            DType::Int16 => "int16",
            DType::Uint16 => "uint16",
            DType::Int8 => "int8",
            DType::Uint8 => "uint8",
            DType::Uint8c => "uint8c",
            DType::Generic => "generic",
        }
    }

    /// Return `true` if `s` is a recognized tag.
    ///
    /// ```
    /// use empty_like::DType;
    ///
    /// assert!(DType::is_dtype("uint8c"));
    /// assert!(!DType::is_dtype("Float64"));
    /// ```
    pub fn is_dtype(s: &str) -> bool
    {
        s.parse::<DType>().is_ok()
    }

    /// Size of one element in bytes, or `None` for `generic`.
    pub fn size_of(self) -> Option<usize>
    {
        match self {
            DType::Complex128 => Some(16),
            DType::Float64 | DType::Complex64 => Some(8),
            DType::Float32 | DType::Int32 | DType::Uint32 => Some(4),
            DType::Int16 | DType::Uint16 => Some(2),
            DType::Int8 | DType::Uint8 | DType::Uint8c => Some(1),
            DType::Generic => None,
        }
    }

    pub fn is_complex(self) -> bool
    {
        matches!(self, DType::Complex128 | DType::Complex64)
    }

    pub fn is_floating_point(self) -> bool
    {
        matches!(self, DType::Float64 | DType::Float32)
    }

    pub fn is_integer(self) -> bool
    {
        matches!(
            self,
            DType::Int32
                | DType::Uint32
                | DType::Int16
                | DType::Uint16
                | DType::Int8
                | DType::Uint8
                | DType::Uint8c
        )
    }

    /// Return `true` if the data type can represent negative values.
    pub fn is_signed(self) -> bool
    {
        match self {
            DType::Int32 | DType::Int16 | DType::Int8 | DType::Generic => true,
            dt => dt.is_floating_point() || dt.is_complex(),
        }
    }

    /// Return `true` for every data type backed by a fixed-width numeric buffer.
    pub fn is_numeric(self) -> bool
    {
        self != DType::Generic
    }
}

/// List of all supported data type tags.
pub fn dtypes() -> impl Iterator<Item = &'static str>
{
    DType::ALL.iter().map(|dt| dt.name())
}

impl fmt::Display for DType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl FromStr for DType
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.name() == s)
            .ok_or_else(|| error::invalid_dtype(s))
    }
}

/// Resolve the data type of `x`.
///
/// Returns `None` when `x` is not an array, typed array, or complex typed array.
///
/// ```
/// use empty_like::{dtype_of, DType, Value};
///
/// assert_eq!(dtype_of(&Value::from(vec![1.0f32, 2.0])), Some(DType::Float32));
/// assert_eq!(dtype_of(&Value::Number(1.0)), None);
/// ```
pub fn dtype_of(x: &Value) -> Option<DType>
{
    x.as_array().map(DynArray::dtype)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn names_round_trip()
    {
        for &dt in &DType::ALL {
            assert_eq!(dt.name().parse::<DType>(), Ok(dt));
            assert_eq!(dt.to_string(), dt.name());
        }
    }

    #[test]
    fn unknown_tag()
    {
        let err = "float128".parse::<DType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDType);
        assert_eq!(err.value(), "float128");
        assert!("".parse::<DType>().is_err());
        assert!(" float64".parse::<DType>().is_err());
    }

    #[test]
    fn kinds_partition()
    {
        for &dt in &DType::ALL {
            let n = [dt.is_complex(), dt.is_floating_point(), dt.is_integer()]
                .iter()
                .filter(|&&b| b)
                .count();
            if dt == DType::Generic {
                assert_eq!(n, 0);
                assert!(!dt.is_numeric());
                assert_eq!(dt.size_of(), None);
            } else {
                assert_eq!(n, 1, "{}", dt);
                assert!(dt.size_of().is_some());
            }
        }
        assert!(!DType::Uint8c.is_signed());
        assert!(DType::Int8.is_signed());
    }

    #[test]
    fn lists_every_tag()
    {
        let tags: Vec<_> = dtypes().collect();
        assert_eq!(tags.len(), 12);
        assert_eq!(tags[0], "float64");
        assert_eq!(tags[11], "generic");
    }
}
