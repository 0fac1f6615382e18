use std::fmt;
use std::str::FromStr;

use crate::constants::{METERS_TO_CENTIMETERS, METERS_TO_FEET};
use crate::errors::SimulationError;

/// Display unit for heights. Meters are the canonical unit used by the
/// physics model; conversion only happens at the display boundary.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum HeightUnit {
    Meter,
    Foot,
    Centimeter,
}

impl HeightUnit {
    pub fn factor(&self) -> f64 {
        match self {
            HeightUnit::Meter => 1.0,
            HeightUnit::Foot => METERS_TO_FEET,
            HeightUnit::Centimeter => METERS_TO_CENTIMETERS,
        }
    }

    /// Converts a height in meters to this unit.
    pub fn convert(&self, height_meters: f64) -> f64 {
        height_meters * self.factor()
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeightUnit::Meter => "m",
            HeightUnit::Foot => "ft",
            HeightUnit::Centimeter => "cm",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HeightUnit {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(HeightUnit::Meter),
            "ft" | "foot" | "feet" => Ok(HeightUnit::Foot),
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Centimeter),
            other => Err(SimulationError::InvalidUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meter_is_identity() {
        assert_relative_eq!(HeightUnit::Meter.convert(42.5), 42.5);
    }

    #[test]
    fn test_foot_conversion() {
        assert_relative_eq!(HeightUnit::Foot.convert(100.0), 328.084);
    }

    #[test]
    fn test_centimeter_conversion() {
        assert_relative_eq!(HeightUnit::Centimeter.convert(1.5), 150.0);
    }

    #[test]
    fn test_parse_known_units() {
        assert_eq!("m".parse::<HeightUnit>().unwrap(), HeightUnit::Meter);
        assert_eq!("FT".parse::<HeightUnit>().unwrap(), HeightUnit::Foot);
        assert_eq!(
            " centimeters ".parse::<HeightUnit>().unwrap(),
            HeightUnit::Centimeter
        );
    }

    #[test]
    fn test_parse_unknown_unit_is_rejected() {
        let err = "furlong".parse::<HeightUnit>().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidUnit(_)));
    }
}
