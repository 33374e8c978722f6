//! Measurement units
//!
//! Units are partitioned into three groups: mass, volume, and count.
//! All cost arithmetic happens in a group's base unit (gram, milliliter,
//! count); conversion is only meaningful within a single group.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The group a unit belongs to. Conversion and cost aggregation never
/// cross groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitGroup {
    Mass,
    Volume,
    Count,
}

impl std::fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitGroup::Mass => write!(f, "mass"),
            UnitGroup::Volume => write!(f, "volume"),
            UnitGroup::Count => write!(f, "count"),
        }
    }
}

/// A measurement unit. Wire symbols are `g`, `kg`, `ml`, `L` and `un`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Count,
}

impl Unit {
    /// Parse a unit symbol. Any symbol that is not a known mass or volume
    /// unit classifies as the count group, typos included; symbols are
    /// matched exactly, so a lowercase `l` counts rather than measures
    /// liters.
    pub fn from_symbol(symbol: &str) -> Unit {
        match symbol {
            "g" => Unit::Gram,
            "kg" => Unit::Kilogram,
            "ml" => Unit::Milliliter,
            "L" => Unit::Liter,
            _ => Unit::Count,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "L",
            Unit::Count => "un",
        }
    }

    pub fn group(&self) -> UnitGroup {
        match self {
            Unit::Gram | Unit::Kilogram => UnitGroup::Mass,
            Unit::Milliliter | Unit::Liter => UnitGroup::Volume,
            Unit::Count => UnitGroup::Count,
        }
    }

    /// The base unit of this unit's group: gram, milliliter or count.
    pub fn base(&self) -> Unit {
        match self.group() {
            UnitGroup::Mass => Unit::Gram,
            UnitGroup::Volume => Unit::Milliliter,
            UnitGroup::Count => Unit::Count,
        }
    }

    /// Express a quantity of this unit in the group's base unit.
    /// Kilograms and liters scale by 1000; everything else is already base.
    pub fn to_base(&self, quantity: f64) -> f64 {
        match self {
            Unit::Kilogram | Unit::Liter => quantity * 1000.0,
            _ => quantity,
        }
    }

    /// Express a base-unit quantity in this unit. Inverse of [`Unit::to_base`].
    pub fn from_base(&self, quantity: f64) -> f64 {
        match self {
            Unit::Kilogram | Unit::Liter => quantity / 1000.0,
            _ => quantity,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbol = String::deserialize(deserializer)?;
        Ok(Unit::from_symbol(&symbol))
    }
}

/// An informal culinary measure with a fixed approximate equivalence in a
/// canonical unit. The factors are rough kitchen conventions, not exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// 1 cup of sugar, roughly 200 g
    CupSugar,
    /// 1 cup of flour, roughly 120 g
    CupFlour,
    /// 1 tablespoon, roughly 15 ml
    #[serde(rename = "tbsp")]
    Tablespoon,
    /// 1 teaspoon, roughly 5 ml
    #[serde(rename = "tsp")]
    Teaspoon,
    /// 1 medium egg, roughly 50 g
    Egg,
}

impl Measure {
    /// The canonical unit this measure is expressed in.
    pub fn canonical_unit(&self) -> Unit {
        match self {
            Measure::CupSugar | Measure::CupFlour | Measure::Egg => Unit::Gram,
            Measure::Tablespoon | Measure::Teaspoon => Unit::Milliliter,
        }
    }

    /// How many canonical units one of this measure amounts to.
    pub fn factor(&self) -> f64 {
        match self {
            Measure::CupSugar => 200.0,
            Measure::CupFlour => 120.0,
            Measure::Tablespoon => 15.0,
            Measure::Teaspoon => 5.0,
            Measure::Egg => 50.0,
        }
    }
}
