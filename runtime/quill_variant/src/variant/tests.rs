use super::*;
use pretty_assertions::assert_eq;

#[test]
fn factories_produce_fresh_metadata() {
    let v = Variant::long(7);
    assert_eq!(v.tag(), Tag::Int);
    assert_eq!(v.ref_count(), 1);
    assert!(!v.is_ref());
}

#[test]
fn tag_covers_every_payload() {
    assert_eq!(Variant::null().tag(), Tag::Null);
    assert_eq!(Variant::bool_val(true).tag(), Tag::Bool);
    assert_eq!(Variant::long(0).tag(), Tag::Int);
    assert_eq!(Variant::double(0.5).tag(), Tag::Double);
    assert_eq!(Variant::string("s").tag(), Tag::Str);
    assert_eq!(Variant::array(vec![]).tag(), Tag::Array);
    assert_eq!(Variant::object(1).tag(), Tag::Object);
    assert_eq!(Variant::resource(1).tag(), Tag::Resource);
}

#[test]
fn replace_payload_preserves_metadata() {
    let mut v = Variant::null();
    v.set_ref_count(3);
    v.set_is_ref(true);

    v.replace_payload(Payload::Int(42));

    assert_eq!(v.tag(), Tag::Int);
    assert_eq!(v.as_long(), Some(42));
    assert_eq!(v.ref_count(), 3);
    assert!(v.is_ref());
}

#[test]
fn duplicate_resets_metadata_but_copies_payload() {
    let mut v = Variant::string("shared");
    v.set_ref_count(5);
    v.set_is_ref(true);

    let copy = v.duplicate();
    assert_eq!(copy.ref_count(), 1);
    assert!(!copy.is_ref());
    assert_eq!(copy, v);
}

#[test]
fn duplicate_shares_array_allocation() {
    let v = Variant::array(vec![Variant::long(1)]);
    let copy = v.duplicate();
    let (Some(a), Some(b)) = (v.array_items(), copy.array_items()) else {
        panic!("both variants must be arrays");
    };
    assert!(Heap::ptr_eq(a, b));
}

#[test]
fn payload_equality_ignores_metadata() {
    let mut a = Variant::long(9);
    let b = Variant::long(9);
    a.set_ref_count(4);
    assert_eq!(a, b);
    assert_ne!(Variant::long(9), Variant::double(9.0));
}

#[test]
fn type_names() {
    assert_eq!(Variant::null().type_name(), "null");
    assert_eq!(Variant::string("").type_name(), "string");
    assert_eq!(Variant::resource(3).type_name(), "resource");
}

#[test]
fn accessors_are_tag_gated() {
    let v = Variant::long(12);
    assert_eq!(v.as_long(), Some(12));
    assert_eq!(v.as_double(), None);
    assert_eq!(v.as_bool(), None);
    assert!(v.str_buf().is_none());
    assert!(v.array_items().is_none());
}
