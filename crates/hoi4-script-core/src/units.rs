//! Sort decoded unit files into air, land and sea buckets.
//!
//! The `common/units` directory holds one file per unit family. `air.txt` is
//! taken as-is. Every other file is a land or naval family, told apart by the
//! `map_icon_category` of the entries under its `sub_units` block: a family
//! with any `ship` sub-unit is naval.

use crate::batch::decode_dir_with;
use crate::decoder::ParseOptions;
use crate::error::{Result, ScriptError};
use crate::layout::InstallLayout;
use crate::types::{Mapping, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// Unit file that is copied into the air bucket verbatim.
pub const AIR_KEY: &str = "air";
const SUB_UNITS_KEY: &str = "sub_units";
const ICON_CATEGORY_KEY: &str = "map_icon_category";
const SHIP_CATEGORY: &str = "ship";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitBuckets {
    pub air: Value,
    pub land: Mapping,
    pub sea: Mapping,
}

impl Default for UnitBuckets {
    fn default() -> Self {
        Self {
            air: Value::Mapping(Mapping::new()),
            land: Mapping::new(),
            sea: Mapping::new(),
        }
    }
}

/// Buckets plus everything worth reporting about how they were built.
#[derive(Debug, Default)]
pub struct UnitClassification {
    pub buckets: UnitBuckets,
    /// Non-fatal `InconsistentSubUnitCategory` reports.
    pub inconsistencies: Vec<ScriptError>,
    /// Unit files that could not be decoded, keyed by file stem.
    pub failures: BTreeMap<String, ScriptError>,
}

/// Classify already-decoded unit files keyed by file stem.
pub fn classify_units(units: BTreeMap<String, Value>) -> UnitClassification {
    let mut result = UnitClassification::default();

    for (name, definition) in units {
        if name == AIR_KEY {
            result.buckets.air = definition;
            continue;
        }

        let (ships, others) = count_sub_units(&definition);
        if ships == 0 {
            result.buckets.land.insert(name, definition);
            continue;
        }
        if others > 0 {
            let report = ScriptError::InconsistentSubUnitCategory {
                unit: name.clone(),
                ships,
                others,
            };
            tracing::warn!("{report}");
            result.inconsistencies.push(report);
        }
        result.buckets.sea.insert(name, definition);
    }

    result
}

/// Decode `common/units` of an installation and classify it.
pub fn classify_install(layout: &InstallLayout) -> Result<UnitClassification> {
    classify_install_with(layout, &ParseOptions::default())
}

pub fn classify_install_with(
    layout: &InstallLayout,
    options: &ParseOptions,
) -> Result<UnitClassification> {
    let parsed = decode_dir_with(layout.units(), options)?;
    let mut result = classify_units(parsed.files);
    result.failures = parsed.failures;
    Ok(result)
}

/// Count `(ship, non-ship)` sub-units of a unit definition.
fn count_sub_units(definition: &Value) -> (usize, usize) {
    match definition.get(SUB_UNITS_KEY) {
        Some(Value::Mapping(sub_units)) => {
            sub_units.values().fold((0, 0), |(ships, others), sub_unit| {
                if is_ship(sub_unit) {
                    (ships + 1, others)
                } else {
                    (ships, others + 1)
                }
            })
        }
        // A bare list of names carries no categories.
        Some(Value::Sequence(names)) => (0, names.len()),
        _ => (0, 0),
    }
}

fn is_ship(sub_unit: &Value) -> bool {
    sub_unit.get(ICON_CATEGORY_KEY).and_then(Value::as_str) == Some(SHIP_CATEGORY)
}
