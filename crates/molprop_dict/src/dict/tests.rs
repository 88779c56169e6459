use super::*;
use molprop_tags::{common_properties, TagError, TagRegistry};
use molprop_value::{ValueError, ValueKind};
use pretty_assertions::assert_eq;

fn local_dict() -> Dict {
    Dict::with_registry(SharedRegistry::new())
}

#[derive(Clone, Debug)]
struct RingInfo {
    ring_count: usize,
}

#[test]
fn test_set_and_get() {
    let mut d = local_dict();
    d.set_val("count", 3i32).unwrap();
    d.set_val("weight", 180.16f64).unwrap();
    d.set_val("label", "aspirin").unwrap();

    assert_eq!(d.get_val::<i32>("count"), Ok(3));
    assert_eq!(d.get_val::<f64>("weight"), Ok(180.16));
    assert_eq!(d.get_val::<String>("label"), Ok(String::from("aspirin")));
    assert_eq!(d.len(), 3);
}

#[test]
fn test_overwrite_keeps_position() {
    let mut d = local_dict();
    d.set_val("x", 1i32).unwrap();
    d.set_val("y", 2i32).unwrap();
    d.set_val("x", 3i32).unwrap();

    assert_eq!(d.keys(), vec!["x", "y"]);
    assert_eq!(d.get_val::<i32>("x"), Ok(3));
}

#[test]
fn test_overwrite_can_change_kind() {
    let mut d = local_dict();
    d.set_val("v", 1i32).unwrap();
    d.set_val("v", vec![1.0f64, 2.0]).unwrap();

    assert_eq!(d.get_value("v").map(Value::kind), Some(ValueKind::VecFloat64));
    assert_eq!(d.len(), 1);
}

#[test]
fn test_missing_key() {
    let d = local_dict();

    assert_eq!(
        d.get_val::<i32>("nope"),
        Err(DictError::Key {
            key: String::from("nope")
        })
    );
    assert_eq!(d.get_val_if_present::<i32>("nope"), Ok(None));
    assert_eq!(d.get_val_as_string_if_present("nope"), Ok(None));
    assert!(d.get_val_as_string("nope").is_err_and(|e| e.is_key_error()));
    assert!(!d.has_val("nope"));
}

#[test]
fn test_reads_do_not_intern() {
    let d = local_dict();
    let before = d.registry().len();

    assert!(!d.has_val("never_written"));
    assert!(d.get_val::<i32>("never_written").is_err());
    assert_eq!(d.registry().len(), before);
}

#[test]
fn test_present_key_wrong_type() {
    let mut d = local_dict();
    d.set_val("smiles", "CCO").unwrap();

    assert_eq!(
        d.get_val::<Vec<i32>>("smiles"),
        Err(DictError::Value(ValueError::type_mismatch(
            "vec<int32>",
            "string"
        )))
    );
    assert!(d.get_val_if_present::<Vec<i32>>("smiles").is_err());
    assert!(d.get_ref::<f64>("smiles").is_err());
}

#[test]
fn test_string_coercion_and_failure() {
    let mut d = local_dict();
    d.set_val("n", "17").unwrap();
    d.set_val("bad", "seventeen").unwrap();

    assert_eq!(d.get_val::<i32>("n"), Ok(17));
    assert_eq!(d.get_val::<f64>("n"), Ok(17.0));
    assert_eq!(
        d.get_val::<i32>("bad"),
        Err(DictError::Value(ValueError::Conversion {
            value: String::from("seventeen"),
            target: "int32",
        }))
    );
    // A failed read leaves the entry untouched
    assert_eq!(d.get_val::<String>("bad"), Ok(String::from("seventeen")));
}

#[test]
fn test_get_ref_borrows() {
    let mut d = local_dict();
    d.set_val("coords", vec![0.5f64, 1.5, 2.5]).unwrap();

    let coords = d.get_ref::<Vec<f64>>("coords").unwrap();
    assert_eq!(coords.len(), 3);
}

#[test]
fn test_any_payload() {
    let mut d = local_dict();
    d.set_any("rings", RingInfo { ring_count: 2 }).unwrap();

    assert_eq!(d.get_any::<RingInfo>("rings").map(|r| r.ring_count), Ok(2));
    assert!(d.get_any::<String>("rings").is_err());
    assert!(d.has_non_pod_data());
    assert!(d
        .get_val_as_string("rings")
        .is_err_and(|e| matches!(e, DictError::Value(ValueError::Unrenderable { .. }))));
}

#[test]
fn test_string_rendering() {
    let mut d = local_dict();
    d.set_val("flag", true).unwrap();
    d.set_val("ids", vec![3u32, 1]).unwrap();
    d.set_val("big", 1i64 << 40).unwrap();

    assert_eq!(d.get_val_as_string("flag").as_deref(), Ok("1"));
    assert_eq!(d.get_val_as_string("ids").as_deref(), Ok("[3,1,]"));
    assert_eq!(d.get_val_as_string("big").as_deref(), Ok("1099511627776"));
}

#[test]
fn test_clear_val() {
    let mut d = local_dict();
    d.set_val("a", 1i32).unwrap();
    d.set_val("b", 2i32).unwrap();
    d.set_val("c", 3i32).unwrap();

    d.clear_val("b").unwrap();
    assert_eq!(d.keys(), vec!["a", "c"]);
    assert_eq!(
        d.clear_val("b"),
        Err(DictError::Key {
            key: String::from("b")
        })
    );
}

#[test]
fn test_reset_clears_non_pod_flag() {
    let mut d = local_dict();
    d.set_val("n", 1i32).unwrap();
    assert!(!d.has_non_pod_data());

    d.set_val("s", "text").unwrap();
    assert!(d.has_non_pod_data());

    // Sticky until reset, even after the heap value is gone
    d.clear_val("s").unwrap();
    assert!(d.has_non_pod_data());

    d.reset();
    assert!(d.is_empty());
    assert!(!d.has_non_pod_data());
}

#[test]
fn test_clone_is_deep() {
    let mut original = local_dict();
    original.set_val("names", vec!["a", "b"]).unwrap();

    let mut copy = original.clone();
    copy.set_val("names", vec!["z"]).unwrap();
    copy.set_val("extra", 1i32).unwrap();

    assert_eq!(
        original.get_val::<Vec<String>>("names"),
        Ok(vec![String::from("a"), String::from("b")])
    );
    assert_eq!(original.len(), 1);
    assert!(copy.registry().ptr_eq(original.registry()));
}

#[test]
fn test_tag_and_name_keys_agree() {
    let mut d = local_dict();
    d.set_val(common_properties::NAME, "benzene").unwrap();

    assert_eq!(d.get_val::<String>("_Name"), Ok(String::from("benzene")));
    let tag = d.registry().intern("custom");
    d.set_val("custom", 5u32).unwrap();
    assert_eq!(d.get_val::<u32>(tag), Ok(5));
    assert_eq!(d.tags().collect::<Vec<_>>(), vec![common_properties::NAME, tag]);
}

#[test]
fn test_unknown_tag_write() {
    let mut d = local_dict();
    let bogus = PropTag::from_raw(1_000_000);

    assert_eq!(
        d.set_val(bogus, 1i32),
        Err(DictError::Tag(TagError::UnknownTag { tag: 1_000_000 }))
    );
    assert!(d.is_empty());
}

#[test]
fn test_iteration_order() {
    let mut d = local_dict();
    d.set_val("first", 1i32).unwrap();
    d.set_val("second", 2.0f32).unwrap();
    d.set_val("third", false).unwrap();

    let kinds: Vec<_> = d.iter().map(|(_, v)| v.kind()).collect();
    assert_eq!(kinds, vec![ValueKind::Int32, ValueKind::Float32, ValueKind::Bool]);
    assert_eq!(d.iter().len(), 3);

    let mut names = Vec::new();
    for (tag, _) in &d {
        names.push(d.registry().name(tag).unwrap().to_string());
    }
    assert_eq!(names, d.keys());
}

#[test]
fn test_update_overwrites_and_appends() {
    let registry = SharedRegistry::new();
    let mut a = Dict::with_registry(registry.clone());
    a.set_val("x", 1i32).unwrap();
    a.set_val("y", 2i32).unwrap();

    let mut b = Dict::with_registry(registry);
    b.set_val("z", 30i32).unwrap();
    b.set_val("x", 10i32).unwrap();

    a.update(&b, false).unwrap();
    assert_eq!(a.keys(), vec!["x", "y", "z"]);
    assert_eq!(a.get_val::<i32>("x"), Ok(10));
    assert_eq!(a.get_val::<i32>("z"), Ok(30));
}

#[test]
fn test_update_preserve_existing() {
    let mut a = local_dict();
    a.set_val("x", 1i32).unwrap();

    let mut b = Dict::with_registry(a.registry().clone());
    b.set_val("x", 10i32).unwrap();
    b.set_val("w", "new").unwrap();

    a.update(&b, true).unwrap();
    assert_eq!(a.get_val::<i32>("x"), Ok(1));
    assert_eq!(a.get_val::<String>("w"), Ok(String::from("new")));
    assert!(a.has_non_pod_data());
}

#[test]
fn test_update_across_registries() {
    let mut a = Dict::with_registry(SharedRegistry::from_registry(TagRegistry::empty()));
    a.set_val("only_a", 1i32).unwrap();

    let mut b = local_dict();
    b.set_val("shared", 2i32).unwrap();

    a.update(&b, false).unwrap();
    assert_eq!(a.keys(), vec!["only_a", "shared"]);
    assert_eq!(a.get_val::<i32>("shared"), Ok(2));
}

#[test]
fn test_default_uses_global_registry() {
    let d = Dict::default();
    assert!(d.registry().ptr_eq(&SharedRegistry::global()));
}
