use super::*;
use molprop_tags::common_properties;
use pretty_assertions::assert_eq;

#[test]
fn test_string_keys_intern_on_write_only() {
    let registry = TagRegistry::new();
    let before = registry.len();

    assert_eq!("fresh_key".lookup(&registry), None);
    assert_eq!(registry.len(), before);

    let tag = "fresh_key".intern(&registry);
    assert_eq!(registry.len(), before + 1);
    assert_eq!(tag.ok(), "fresh_key".lookup(&registry));
}

#[test]
fn test_string_forms_agree() {
    let registry = TagRegistry::new();
    let owned = String::from("_Name");

    assert_eq!("_Name".lookup(&registry), Some(common_properties::NAME));
    assert_eq!(
        <&String as PropKey>::lookup(&&owned, &registry),
        Some(common_properties::NAME)
    );
    assert_eq!(owned.lookup(&registry), Some(common_properties::NAME));
}

#[test]
fn test_tag_keys() {
    let registry = TagRegistry::new();
    let unknown = PropTag::from_raw(u32::MAX);

    assert_eq!(
        common_properties::NAME.intern(&registry),
        Ok(common_properties::NAME)
    );
    assert_eq!(
        unknown.intern(&registry),
        Err(TagError::UnknownTag { tag: u32::MAX })
    );
    assert_eq!(common_properties::NAME.display_name(&registry), "_Name");
    assert_eq!(unknown.display_name(&registry), u32::MAX.to_string());
}
