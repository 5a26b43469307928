#![feature(test)]

extern crate test;
use test::Bencher;

use empty_like::{empty_like, DType, DynArray, Value};

#[bench]
fn empty_f64(bench: &mut Bencher)
{
    bench.iter(|| DynArray::empty(128 * 128, DType::Float64))
}

#[bench]
fn empty_like_f64(bench: &mut Bencher)
{
    let x = Value::Array(DynArray::empty(128 * 128, DType::Float64));
    bench.iter(|| empty_like(&x, None))
}

#[bench]
fn empty_like_override_complex128(bench: &mut Bencher)
{
    let x = Value::Array(DynArray::empty(128 * 128, DType::Int8));
    bench.iter(|| empty_like(&x, Some("complex128")))
}

#[bench]
fn empty_like_generic(bench: &mut Bencher)
{
    let x = Value::Array(DynArray::empty(1024, DType::Generic));
    bench.iter(|| empty_like(&x, None))
}
