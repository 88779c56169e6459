use super::*;
use crate::ValueKind;
use pretty_assertions::assert_eq;

#[test]
fn test_same_kind_copies() {
    assert_eq!(Value::from(7i32).extract::<i32>(), Ok(7));
    assert_eq!(Value::from(true).extract::<bool>(), Ok(true));
    assert_eq!(Value::from(0.25f32).extract::<f32>(), Ok(0.25));
    assert_eq!(Value::from(9u64).extract::<u64>(), Ok(9));
    assert_eq!(
        Value::from(vec!["a", "b"]).extract::<Vec<String>>(),
        Ok(vec![String::from("a"), String::from("b")])
    );
}

#[test]
fn test_string_parses_to_numbers() {
    assert_eq!(Value::from("42").extract::<i32>(), Ok(42));
    assert_eq!(Value::from("42").extract::<u32>(), Ok(42));
    assert_eq!(Value::from("-1.5").extract::<f64>(), Ok(-1.5));
    assert_eq!(Value::from("0.75").extract::<f32>(), Ok(0.75));
    assert_eq!(Value::from("1e-7").extract::<f64>(), Ok(1e-7));
    assert_eq!(Value::from("-9000000000").extract::<i64>(), Ok(-9_000_000_000));
    assert_eq!(
        Value::from("18446744073709551615").extract::<u64>(),
        Ok(u64::MAX)
    );
    assert_eq!(Value::from("1").extract::<bool>(), Ok(true));
    assert_eq!(Value::from("0").extract::<bool>(), Ok(false));
}

#[test]
fn test_string_parse_failure() {
    assert_eq!(
        Value::from("abc").extract::<i32>(),
        Err(ValueError::Conversion {
            value: String::from("abc"),
            target: "int32",
        })
    );
    assert_eq!(
        Value::from("-1").extract::<u32>(),
        Err(ValueError::Conversion {
            value: String::from("-1"),
            target: "uint32",
        })
    );
    assert!(Value::from("true")
        .extract::<bool>()
        .is_err_and(|e| e.is_conversion()));
    assert!(Value::from(" 3").extract::<i32>().is_err());
}

#[test]
fn test_no_cross_numeric_coercion() {
    assert_eq!(
        Value::from(1i32).extract::<f64>(),
        Err(ValueError::type_mismatch("float64", "int32"))
    );
    assert_eq!(
        Value::from(1.0f64).extract::<f32>(),
        Err(ValueError::type_mismatch("float32", "float64"))
    );
}

#[test]
fn test_non_numeric_targets_stay_strict() {
    assert_eq!(
        Value::from("[1,2,]").extract::<Vec<i32>>(),
        Err(ValueError::type_mismatch("vec<int32>", "string"))
    );
    assert_eq!(
        Value::from(5i32).extract::<String>(),
        Err(ValueError::type_mismatch("string", "int32"))
    );
}

#[test]
fn test_extract_value_is_clone() {
    let v = Value::from(vec![1u32]);
    let copy = v.extract::<Value>();
    assert_eq!(copy.map(|c| c.kind()), Ok(ValueKind::VecUInt32));
}
