// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use core::fmt;

use crate::DType;

/// **Requires crate feature `"serde"`**
///
/// Serialized as its tag, e.g. `"complex64"`.
impl Serialize for DType
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

struct DTypeVisitor;

impl<'de> Visitor<'de> for DTypeVisitor
{
    type Value = DType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("a data type tag")
    }

    fn visit_str<E>(self, v: &str) -> Result<DType, E>
    where E: de::Error
    {
        v.parse().map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for DType
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_str(DTypeVisitor)
    }
}
