#![cfg(feature = "serde")]

use empty_like::{empty_like, Complex, DType, DynArray, Value};

#[test]
fn dtype_as_tag()
{
    assert_eq!(serde_json::to_string(&DType::Uint8c).unwrap(), "\"uint8c\"");
    let dt: DType = serde_json::from_str("\"complex128\"").unwrap();
    assert_eq!(dt, DType::Complex128);

    let err = serde_json::from_str::<DType>("\"float16\"").unwrap_err();
    assert!(err.to_string().contains("recognized data type"));
}

#[test]
fn dyn_array_carries_dtype()
{
    let a = DynArray::from(vec![1i16, -2]);
    let s = serde_json::to_string(&a).unwrap();
    assert_eq!(s, r#"{"dtype":"int16","data":[1,-2]}"#);
    assert_eq!(serde_json::from_str::<DynArray>(&s).unwrap(), a);

    let a = DynArray::Uint8c(vec![255]);
    let s = serde_json::to_string(&a).unwrap();
    assert_eq!(s, r#"{"dtype":"uint8c","data":[255]}"#);
}

#[test]
fn deserialized_value_is_array_like()
{
    let x = Value::from(vec![Complex::new(1f64, 2.), Complex::new(3., 4.)]);
    let s = serde_json::to_string(&x).unwrap();
    let y: Value = serde_json::from_str(&s).unwrap();
    assert_eq!(x, y);

    let a = empty_like(&y, None).unwrap();
    assert_eq!((a.len(), a.dtype()), (2, DType::Complex128));
}
