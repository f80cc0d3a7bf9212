use remap_core::accessor::{FieldSetter, SourcePath};
use remap_core::convert;
use remap_core::{DefaultCreator, PropertyMap, Reflect, Shape, TypeMap, Value};
use std::sync::Arc;
use std_util::prelude::*;

#[derive(Default)]
struct Address {
    city: String,
    zip_code: String,
}

#[derive(Default)]
struct Customer {
    name: String,
    address: Address,
}

#[derive(Default)]
struct CustomerDto {
    name: String,
    address_city: String,
    address_zip_code: String,
    zip: String,
}

impl Reflect for Address {
    fn shape() -> Shape {
        Shape::builder::<Address>()
            .field("city", |a| &a.city, |a| &mut a.city)
            .field("zipCode", |a| &a.zip_code, |a| &mut a.zip_code)
            .build()
    }
}

impl Reflect for Customer {
    fn shape() -> Shape {
        Shape::builder::<Customer>()
            .field("name", |c| &c.name, |c| &mut c.name)
            .nested("address", |c| Some(&c.address))
            .build()
    }
}

impl Reflect for CustomerDto {
    fn shape() -> Shape {
        Shape::builder::<CustomerDto>()
            .field("name", |c| &c.name, |c| &mut c.name)
            .field("addressCity", |c| &c.address_city, |c| &mut c.address_city)
            .field(
                "addressZipCode",
                |c| &c.address_zip_code,
                |c| &mut c.address_zip_code,
            )
            .field("zip", |c| &c.zip, |c| &mut c.zip)
            .build()
    }
}

fn discover() -> TypeMap {
    TypeMap::discover(
        Customer::shape(),
        CustomerDto::shape(),
        DefaultCreator::<CustomerDto>::new(),
    )
}

#[test]
fn discovery_flattens_nested_members() {
    let type_map = discover();

    let city = assert_some!(type_map.property_map("addressCity"));
    assert!(city.is_mapped());
    assert_eq!(city.source().unwrap().as_str(), "address.city");
    assert_eq!(city.source().unwrap().len(), 2);

    let zip_code = assert_some!(type_map.property_map("addressZipCode"));
    assert_eq!(zip_code.source().unwrap().as_str(), "address.zipCode");

    let zip = assert_some!(type_map.property_map("zip"));
    assert!(!zip.is_mapped());
    assert_none!(zip.source());
}

#[test]
fn property_maps_keep_destination_order() {
    let type_map = discover();

    let names: Vec<_> = type_map
        .property_maps()
        .map(|property_map| property_map.member_name())
        .collect();
    assert_eq!(names, ["name", "addressCity", "addressZipCode", "zip"]);

    let mapped: Vec<_> = type_map
        .mapped_property_maps()
        .map(|property_map| property_map.member_name())
        .collect();
    assert_eq!(mapped, ["name", "addressCity", "addressZipCode"]);
}

#[test]
fn map_member_resolves_dotted_path() {
    let mut type_map = discover();

    let zip = assert_ok!(type_map.map_member("zip", "address.zip_code"));
    assert_eq!(zip.source().unwrap().as_str(), "address.zipCode");
    assert_ok!(type_map.validate());
}

#[test]
fn map_member_rejects_unknown_paths() {
    let mut type_map = discover();

    let err = assert_err!(type_map.map_member("zip", "address.postcode"));
    assert!(err.is_unknown_member());
    assert!(err.to_string().contains("has no member `postcode`"));

    let err = assert_err!(type_map.map_member("zip", "billing.city"));
    assert!(err.is_unknown_member());

    let err = assert_err!(type_map.map_member("country", "address.city"));
    assert!(err.is_unknown_member());
    assert!(err.to_string().contains("CustomerDto"));
}

#[test]
fn map_member_rejects_object_as_final_hop() {
    let mut type_map = discover();

    let err = assert_err!(type_map.map_member("zip", "address"));
    assert!(err.is_unknown_member());
}

#[test]
fn last_registration_wins_and_keeps_its_slot() {
    let mut type_map = discover();

    let setter = Arc::new(FieldSetter::new(|c: &mut CustomerDto| &mut c.name));
    let mut replacement = PropertyMap::new("name", setter);
    replacement.ignore();
    type_map.add_property_map(replacement);

    let first = type_map.property_maps().next().unwrap();
    assert_eq!(first.member_name(), "name");
    assert!(first.is_ignored());
    assert_eq!(type_map.property_maps().len(), 4);
    assert!(type_map
        .mapped_property_maps()
        .all(|property_map| property_map.member_name() != "name"));
}

#[test]
fn member_tweaks_are_stored() {
    let mut type_map = discover();

    assert_ok!(type_map.member("addressCity"))
        .set_null_substitute("Unknown")
        .convert_with(convert::typed(|city: String| city.to_uppercase()));

    let city = assert_some!(type_map.property_map("addressCity"));
    assert_eq!(city.null_substitute(), &Value::from("Unknown"));
    assert!(city.value_converter().is_some());
    assert!(city.is_mapped());
}

#[test]
fn typed_hooks_check_types() {
    let mut type_map = discover();

    assert_ok!(type_map.before_map(|_: &Customer, _: &mut CustomerDto| Ok(())));

    let err = assert_err!(type_map.after_map(|_: &Address, _: &mut CustomerDto| Ok(())));
    assert!(err.is_type_mismatch());

    let err = assert_err!(type_map.after_map(|_: &Customer, _: &mut Address| Ok(())));
    assert!(err.is_type_mismatch());

    assert!(type_map.before_map_func().is_some());
    assert!(type_map.after_map_func().is_none());
}

#[test]
fn resolver_must_take_the_source_type() {
    let mut type_map = discover();

    let err = assert_err!(type_map.map_member_from("zip", |address: &Address| {
        Ok(address.zip_code.clone())
    }));
    assert!(err.is_type_mismatch());
    assert!(!assert_some!(type_map.property_map("zip")).is_mapped());
}

#[test]
fn manual_source_path_counts_as_mapped() {
    let mut type_map = TypeMap::new(
        Customer::shape(),
        CustomerDto::shape(),
        DefaultCreator::<CustomerDto>::new(),
    );

    let shape = Customer::shape();
    let getter = shape.member("name").unwrap().getter().unwrap().clone();
    assert_ok!(type_map.member("zip")).map_from(SourcePath::single("name", getter));

    assert_eq!(type_map.mapped_property_maps().count(), 1);
    assert_ok!(type_map.validate());
}
