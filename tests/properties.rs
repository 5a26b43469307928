use empty_like::{empty_like, empty_like_slice, DType, DynArray, Value};
use itertools::Itertools;
use quickcheck::quickcheck;

fn pick(i: u8) -> DType
{
    DType::ALL[i as usize % DType::ALL.len()]
}

quickcheck! {
    fn generic_length_is_preserved(xs: Vec<f64>) -> bool {
        let x = Value::from(xs.iter().map(|&n| Value::Number(n)).collect_vec());
        let a = empty_like(&x, None).unwrap();
        a.len() == xs.len() && a.dtype() == DType::Generic
    }

    fn typed_dtype_is_preserved(xs: Vec<i16>) -> bool {
        let a = empty_like(&Value::from(xs.clone()), None).unwrap();
        a.len() == xs.len() && a.dtype() == DType::Int16
    }

    fn complex_dtype_is_preserved(re: Vec<f32>) -> bool {
        let xs = re.iter().map(|&r| empty_like::Complex::new(r, 0.)).collect_vec();
        let a = empty_like(&Value::from(xs), None).unwrap();
        a.len() == re.len() && a.dtype() == DType::Complex64
    }

    fn override_wins(len: u8, from: u8, to: u8) -> bool {
        let len = len as usize;
        let x = Value::Array(DynArray::empty(len, pick(from)));
        let to = pick(to);
        let a = empty_like(&x, Some(to.name())).unwrap();
        a.len() == len && a.dtype() == to
    }

    fn float32_override(xs: Vec<u32>) -> bool {
        let a = empty_like(&Value::from(xs.clone()), Some("float32")).unwrap();
        a.as_slice::<f32>().map(|s| s.len()) == Some(xs.len())
    }

    fn unknown_tags_fail(tag: String) -> bool {
        let x = Value::from(vec![1u8]);
        empty_like(&x, Some(tag.as_str())).is_ok() == DType::is_dtype(&tag)
    }

    fn slices_keep_length(xs: Vec<u64>) -> bool {
        let xs = xs.iter().map(|&n| n as u32).collect_vec();
        empty_like_slice(&xs).len() == xs.len()
    }
}
