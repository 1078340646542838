//! Indicators - the nine per-element reference values and the impact
//! categories they aggregate into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of indicators per element (and impact categories per result).
pub const INDICATOR_COUNT: usize = 9;

/// How per-element values combine into an alloy-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Mass-fraction weighted sum.
    WeightedSum,
    /// `1 - Π(1 - fraction * value)`: probability that at least one
    /// independent element-level event occurs.
    ComplementProduct,
}

/// An impact category, listed in reference table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    MassPrice,
    SupplyRisk,
    NormalizedVulnerability,
    EmbodiedEnergy,
    RockToMetalRatio,
    WaterUsage,
    HumanHealthDamage,
    HumanRightsPressure,
    LaborRightsPressure,
}

impl Indicator {
    /// All indicators in result order.
    pub const ALL: [Indicator; INDICATOR_COUNT] = [
        Indicator::MassPrice,
        Indicator::SupplyRisk,
        Indicator::NormalizedVulnerability,
        Indicator::EmbodiedEnergy,
        Indicator::RockToMetalRatio,
        Indicator::WaterUsage,
        Indicator::HumanHealthDamage,
        Indicator::HumanRightsPressure,
        Indicator::LaborRightsPressure,
    ];

    /// Label shown in the "Impact Category" column.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::MassPrice => "Mass price (USD/kg)",
            Indicator::SupplyRisk => "Supply risk",
            Indicator::NormalizedVulnerability => "Normalized vulnerability to supply restriction",
            Indicator::EmbodiedEnergy => "Embodied energy (MJ/kg)",
            Indicator::RockToMetalRatio => "Rock to metal ratio (kg/kg)",
            Indicator::WaterUsage => "Water usage (l/kg)",
            Indicator::HumanHealthDamage => "Human health damage",
            Indicator::HumanRightsPressure => "Human rights pressure",
            Indicator::LaborRightsPressure => "Labor rights pressure",
        }
    }

    /// Column header in the reference data file.
    ///
    /// Two columns are published under their survey names and
    /// renamed to "pressure" on load.
    pub fn source_column(&self) -> &'static str {
        match self {
            Indicator::HumanRightsPressure => "Human rights violation",
            Indicator::LaborRightsPressure => "Labor rights disregard",
            other => other.label(),
        }
    }

    /// Digits kept after the decimal point when displaying the value.
    pub fn precision(&self) -> usize {
        match self {
            Indicator::MassPrice => 1,
            Indicator::SupplyRisk | Indicator::NormalizedVulnerability => 3,
            _ => 0,
        }
    }

    /// Aggregation rule for this indicator.
    pub fn aggregation(&self) -> Aggregation {
        match self {
            Indicator::SupplyRisk => Aggregation::ComplementProduct,
            _ => Aggregation::WeightedSum,
        }
    }

    /// Position of this indicator in results.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reference values of one element, one field per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorRecord {
    pub mass_price: f64,
    pub supply_risk: f64,
    pub normalized_vulnerability: f64,
    pub embodied_energy: f64,
    pub rock_to_metal_ratio: f64,
    pub water_usage: f64,
    pub human_health_damage: f64,
    pub human_rights_pressure: f64,
    pub labor_rights_pressure: f64,
}

impl IndicatorRecord {
    /// Returns the value for one indicator.
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::MassPrice => self.mass_price,
            Indicator::SupplyRisk => self.supply_risk,
            Indicator::NormalizedVulnerability => self.normalized_vulnerability,
            Indicator::EmbodiedEnergy => self.embodied_energy,
            Indicator::RockToMetalRatio => self.rock_to_metal_ratio,
            Indicator::WaterUsage => self.water_usage,
            Indicator::HumanHealthDamage => self.human_health_damage,
            Indicator::HumanRightsPressure => self.human_rights_pressure,
            Indicator::LaborRightsPressure => self.labor_rights_pressure,
        }
    }

    /// Builds a record from values listed in indicator order.
    pub fn from_values(values: [f64; INDICATOR_COUNT]) -> Self {
        Self {
            mass_price: values[0],
            supply_risk: values[1],
            normalized_vulnerability: values[2],
            embodied_energy: values[3],
            rock_to_metal_ratio: values[4],
            water_usage: values[5],
            human_health_damage: values[6],
            human_rights_pressure: values[7],
            labor_rights_pressure: values[8],
        }
    }
}
