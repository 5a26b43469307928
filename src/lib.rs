// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/empty-like/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! The `empty-like` crate creates arrays shaped after existing ones.
//!
//! Given an array, typed array, or complex typed array, [`empty_like`]
//! returns a new array of the same length and, unless overridden, the same
//! data type. The contents of the new array are unspecified.
//!
//! ```
//! use empty_like::{empty_like, DType, ErrorKind, Value};
//!
//! let x = Value::from(vec![1i32, 2, 3]);
//! let a = empty_like(&x, None).unwrap();
//! assert_eq!((a.len(), a.dtype()), (3, DType::Int32));
//!
//! let b = empty_like(&x, Some("complex128")).unwrap();
//! assert_eq!((b.len(), b.dtype()), (3, DType::Complex128));
//!
//! let err = empty_like(&Value::Number(1.), None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArray);
//! ```
//!
//! ## Data types
//!
//! A [`DType`] names the element representation of an array. Its tags are
//! `float64`, `float32`, `complex128`, `complex64`, `int32`, `uint32`,
//! `int16`, `uint16`, `int8`, `uint8`, `uint8c` and `generic`.
//! [`DynArray`] holds one `Vec` per data type and [`Value`] is the dynamic
//! value a data type is resolved from.
//!
//! ## Crate Feature Flags
//!
//! - `std`
//!   - Enabled by default.
//!   - Implements `std::error::Error` for [`Error`]. Without it the crate
//!     only needs `alloc`.
//! - `serde`
//!   - Enables serialization support for [`DType`], [`DynArray`] and
//!     [`Value`].

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod private;

mod dtype;
#[cfg(feature = "serde")]
mod dtype_serde;
mod dyn_array;
mod empty;
mod empty_like;
mod error;
mod value;

pub use crate::dtype::{dtype_of, dtypes, DType};
pub use crate::dyn_array::{DynArray, Element};
pub use crate::empty::{empty, uninit};
pub use crate::empty_like::{empty_like, empty_like_array, empty_like_slice};
pub use crate::error::{Error, ErrorKind};
pub use crate::value::Value;

pub use num_complex::Complex;
