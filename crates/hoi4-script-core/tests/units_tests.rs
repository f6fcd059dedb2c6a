use hoi4_script_core::{
    classify_install, classify_units, decode, InstallLayout, Mapping, ScriptError, Value,
};
use std::collections::BTreeMap;

/// Helper: decode each `(stem, source)` pair as if it were a unit file.
fn unit_files(files: &[(&str, &str)]) -> BTreeMap<String, Value> {
    files
        .iter()
        .map(|(name, src)| (name.to_string(), decode(src).unwrap()))
        .collect()
}

#[test]
fn air_ship_and_land_buckets() {
    let units = unit_files(&[
        ("air", "sub_units = { fighter = { map_icon_category = air } }"),
        (
            "destroyer",
            "sub_units = { destroyer = { map_icon_category = ship } light_cruiser = { map_icon_category = ship } }",
        ),
    ]);
    let expected_air = units["air"].clone();
    let expected_sea = units["destroyer"].clone();

    let result = classify_units(units);

    assert_eq!(result.buckets.air, expected_air);
    assert_eq!(result.buckets.sea.get("destroyer"), Some(&expected_sea));
    assert!(result.buckets.land.is_empty());
    assert!(result.inconsistencies.is_empty());

    let json = serde_json::to_value(&result.buckets).unwrap();
    assert_eq!(json["land"], serde_json::json!({}));
    assert_eq!(
        json["sea"]["destroyer"]["sub_units"]["destroyer"]["map_icon_category"],
        "ship"
    );
}

#[test]
fn non_ship_sub_units_are_land() {
    let result = classify_units(unit_files(&[(
        "infantry",
        "sub_units = { infantry = { map_icon_category = infantry } }",
    )]));
    assert!(result.buckets.land.contains_key("infantry"));
    assert!(result.buckets.sea.is_empty());
}

#[test]
fn missing_category_is_not_a_ship() {
    let result = classify_units(unit_files(&[(
        "militia",
        "sub_units = { militia = { priority = 1 } }",
    )]));
    assert!(result.buckets.land.contains_key("militia"));
}

#[test]
fn definition_without_sub_units_is_land() {
    let result = classify_units(unit_files(&[("odd", "something = 1")]));
    assert!(result.buckets.land.contains_key("odd"));
    assert!(result.inconsistencies.is_empty());
}

#[test]
fn mixed_sub_units_go_to_sea_and_are_reported() {
    let result = classify_units(unit_files(&[(
        "marine_patrol",
        "sub_units = { patrol_boat = { map_icon_category = ship } marines = { map_icon_category = infantry } }",
    )]));

    assert!(result.buckets.sea.contains_key("marine_patrol"));
    assert!(result.buckets.land.is_empty());
    assert_eq!(result.inconsistencies.len(), 1);
    match &result.inconsistencies[0] {
        ScriptError::InconsistentSubUnitCategory {
            unit,
            ships,
            others,
        } => {
            assert_eq!(unit, "marine_patrol");
            assert_eq!((*ships, *others), (1, 1));
        }
        other => panic!("expected InconsistentSubUnitCategory, got {other:?}"),
    }
}

#[test]
fn no_air_file_leaves_empty_air_bucket() {
    let result = classify_units(BTreeMap::new());
    assert_eq!(result.buckets.air, Value::Mapping(Mapping::new()));
    let json = serde_json::to_string(&result.buckets).unwrap();
    assert_eq!(json, r#"{"air":{},"land":{},"sea":{}}"#);
}

#[test]
fn classify_fixture_install() {
    let layout = InstallLayout::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/install"));
    let result = classify_install(&layout).unwrap();

    let land: Vec<_> = result.buckets.land.keys().collect();
    let sea: Vec<_> = result.buckets.sea.keys().collect();
    assert_eq!(land, vec!["infantry"]);
    assert_eq!(sea, vec!["destroyer", "marine_patrol"]);
    assert!(result.buckets.air.get("sub_units").is_some());
    assert_eq!(result.inconsistencies.len(), 1);
    assert!(result.failures.is_empty());
}

#[test]
fn classify_missing_install_fails() {
    let layout = InstallLayout::new("/definitely/not/a/hoi4/install");
    assert!(classify_install(&layout).is_err());
}
