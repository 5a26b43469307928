// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use num_complex::Complex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DynArray, Element};

/// A dynamically typed value.
///
/// Only [`Value::Array`] is array-like; every other variant is rejected by
/// [`empty_like`](crate::empty_like). Generic arrays hold `Value`s.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value
{
    Null,
    Bool(bool),
    Number(f64),
    Complex(Complex<f64>),
    String(String),
    Array(DynArray),
    Object(BTreeMap<String, Value>),
}

impl Value
{
    /// Return the array inside this value, if it is one.
    pub fn as_array(&self) -> Option<&DynArray>
    {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut DynArray>
    {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool
    {
        self.as_array().is_some()
    }

    /// Length of the array inside this value, or `None` if it is not one.
    pub fn len(&self) -> Option<usize>
    {
        self.as_array().map(DynArray::len)
    }
}

impl Default for Value
{
    fn default() -> Self
    {
        Value::Null
    }
}

impl fmt::Display for Value
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => fmt::Display::fmt(b, f),
            Value::Number(n) => fmt::Display::fmt(n, f),
            Value::Complex(z) => fmt::Display::fmt(z, f),
            Value::String(s) => f.write_str(s),
            Value::Array(a) => fmt::Display::fmt(a, f),
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value
{
    fn from(b: bool) -> Self
    {
        Value::Bool(b)
    }
}

impl From<f64> for Value
{
    fn from(n: f64) -> Self
    {
        Value::Number(n)
    }
}

impl From<Complex<f64>> for Value
{
    fn from(z: Complex<f64>) -> Self
    {
        Value::Complex(z)
    }
}

impl From<&str> for Value
{
    fn from(s: &str) -> Self
    {
        Value::String(s.into())
    }
}

impl From<String> for Value
{
    fn from(s: String) -> Self
    {
        Value::String(s)
    }
}

impl From<DynArray> for Value
{
    fn from(a: DynArray) -> Self
    {
        Value::Array(a)
    }
}

impl<A: Element> From<Vec<A>> for Value
{
    fn from(v: Vec<A>) -> Self
    {
        Value::Array(A::into_array(v))
    }
}

impl From<BTreeMap<String, Value>> for Value
{
    fn from(map: BTreeMap<String, Value>) -> Self
    {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn display()
    {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from("beep").to_string(), "beep");
        assert_eq!(Value::Object(BTreeMap::new()).to_string(), "{}");

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), Value::from(1.));
        map.insert("b".to_string(), Value::from(vec![1i8, 2]));
        assert_eq!(Value::Object(map).to_string(), "{a: 1, b: [1, 2]}");
    }

    #[test]
    fn only_arrays_have_length()
    {
        assert_eq!(Value::from(vec![0u16; 4]).len(), Some(4));
        assert_eq!(Value::from(vec![Value::Null]).len(), Some(1));
        assert_eq!(Value::Number(3.).len(), None);
        assert_eq!(Value::from("abc").len(), None);
        assert!(!Value::Object(BTreeMap::new()).is_array());
    }
}
