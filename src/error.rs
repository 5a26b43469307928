// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::{String, ToString};
use core::fmt;

use crate::Value;

/// An error produced while resolving or allocating an array.
#[derive(Clone, Debug)]
pub struct Error
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    value: String,
}

impl Error
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// The offending argument, rendered the way it appears in the message.
    pub fn value(&self) -> &str
    {
        &self.value
    }
}

/// Error code for an invalid argument.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
#[repr(u64)]
pub enum ErrorKind
{
    /// input is not an array, typed array, or complex typed array
    InvalidArray,
    /// data type tag is not recognized
    InvalidDType,
    #[doc(hidden)]
    __Incomplete,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind, value: String) -> Error
{
    Error { repr: k, value }
}

impl PartialEq for ErrorKind
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        *self as u64 == *rhs as u64
    }
}

impl Eq for ErrorKind {}

impl PartialEq for Error
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr && self.value == rhs.value
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.kind() {
            ErrorKind::InvalidArray => write!(
                f,
                "invalid argument. First argument must be an array or typed array. Value: `{}`.",
                self.value
            ),
            ErrorKind::InvalidDType => write!(
                f,
                "invalid argument. Second argument must be a recognized data type. Value: `{}`.",
                self.value
            ),
            ErrorKind::__Incomplete => f.write_str("this error variant is not in use"),
        }
    }
}

pub fn invalid_array(x: &Value) -> Error
{
    from_kind(ErrorKind::InvalidArray, x.to_string())
}

pub fn invalid_dtype(dtype: &str) -> Error
{
    from_kind(ErrorKind::InvalidDType, dtype.to_string())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn messages_name_the_value()
    {
        let e = invalid_dtype("beep");
        assert_eq!(e.kind(), ErrorKind::InvalidDType);
        assert_eq!(e.value(), "beep");
        assert_eq!(
            e.to_string(),
            "invalid argument. Second argument must be a recognized data type. Value: `beep`."
        );

        let e = invalid_array(&Value::Bool(true));
        assert_eq!(e.kind(), ErrorKind::InvalidArray);
        assert_eq!(
            e.to_string(),
            "invalid argument. First argument must be an array or typed array. Value: `true`."
        );
    }

    #[test]
    fn equality_compares_kind_and_value()
    {
        assert_eq!(invalid_dtype("a"), invalid_dtype("a"));
        assert_ne!(invalid_dtype("a"), invalid_dtype("b"));
        assert_ne!(invalid_dtype("null"), invalid_array(&Value::Null));
    }
}
