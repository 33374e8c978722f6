//! Unit conversion utilities
//!
//! Two independent converters sharing the costing engine's unit-group
//! logic: a basic same-group converter and a culinary-measure converter
//! built on fixed approximation factors. Impossible requests are answers,
//! not errors: each converter returns an outcome enum.

use serde::Serialize;

use crate::domain::entities::{Measure, Unit, UnitGroup};

/// Outcome of a basic unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Conversion {
    /// Same-group conversion succeeded
    Converted { value: f64, unit: Unit },
    /// The units belong to different groups; no conversion exists
    Incompatible { from: UnitGroup, to: UnitGroup },
}

/// Outcome of a culinary-measure conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CulinaryConversion {
    Converted { value: f64, unit: Unit },
    /// Crossing mass and volume needs an ingredient-specific density
    DensityRequired { from: UnitGroup, to: UnitGroup },
    /// A count-canonical measure has no fixed equivalence in other units
    EquivalenceRequired,
}

/// Convert a value between two units of the same group.
///
/// Normalizes to the group's base unit and scales to the target. Units
/// from different groups are incompatible and yield no number.
pub fn convert_basic(value: f64, from: Unit, to: Unit) -> Conversion {
    if from.group() != to.group() {
        return Conversion::Incompatible {
            from: from.group(),
            to: to.group(),
        };
    }

    Conversion::Converted {
        value: to.from_base(from.to_base(value)),
        unit: to,
    }
}

/// Convert a culinary measure (cups, spoons, eggs) into a concrete unit.
///
/// The measure's fixed factor yields a quantity in its canonical unit
/// (grams or milliliters); same-group targets then scale normally. A count
/// target keeps the raw canonical quantity unchanged, matching the
/// measure table's behavior for a target with no sub-unit scale. All
/// factors are kitchen approximations.
pub fn convert_culinary(value: f64, measure: Measure, to: Unit) -> CulinaryConversion {
    let canonical = measure.canonical_unit();
    let canonical_value = value * measure.factor();

    if canonical.group() == to.group() {
        return CulinaryConversion::Converted {
            value: to.from_base(canonical_value),
            unit: to,
        };
    }

    match (canonical.group(), to.group()) {
        (UnitGroup::Mass | UnitGroup::Volume, UnitGroup::Count) => CulinaryConversion::Converted {
            value: canonical_value,
            unit: to,
        },
        (UnitGroup::Count, _) => CulinaryConversion::EquivalenceRequired,
        (from, to) => CulinaryConversion::DensityRequired { from, to },
    }
}
