use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_codes_match_position() {
    for (i, kind) in ValueKind::ALL.iter().enumerate() {
        assert_eq!(usize::from(kind.code()), i);
        assert_eq!(ValueKind::from_code(kind.code()), Some(*kind));
    }
}

#[test]
fn test_unknown_code() {
    assert_eq!(ValueKind::from_code(13), None);
    assert_eq!(ValueKind::from_code(u8::MAX), None);
}

#[test]
fn test_stable_codes() {
    // Serialized data depends on these exact values
    assert_eq!(ValueKind::Empty.code(), 0);
    assert_eq!(ValueKind::Int32.code(), 1);
    assert_eq!(ValueKind::Float64.code(), 2);
    assert_eq!(ValueKind::String.code(), 3);
    assert_eq!(ValueKind::Any.code(), 7);
    assert_eq!(ValueKind::VecString.code(), 12);
}

#[test]
fn test_pod_and_vector_partition() {
    let pod: Vec<_> = ValueKind::ALL.iter().filter(|k| k.is_pod()).collect();
    let vectors: Vec<_> = ValueKind::ALL.iter().filter(|k| k.is_vector()).collect();

    assert_eq!(pod.len(), 6);
    assert_eq!(vectors.len(), 5);
    assert!(!ValueKind::String.is_pod());
    assert!(!ValueKind::Any.is_pod());
    assert!(!ValueKind::String.is_vector());
}

#[test]
fn test_display() {
    assert_eq!(ValueKind::VecInt32.to_string(), "vec<int32>");
    assert_eq!(ValueKind::Float32.to_string(), "float32");
}
