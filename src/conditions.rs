//! Cast condition enums: weather and tackle.
//!
//! Both are pure data. Weather scales the catch down (multiplier in `(0, 1]`),
//! tackle scales the weight up or leaves it unchanged.

use serde::{Deserialize, Serialize};

/// Weather over the lake at the time of a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Overcast,
    Rain,
    Fog,
    Storm,
}

impl WeatherCondition {
    /// Catch multiplier, always in `(0, 1]`.
    pub const fn multiplier(self) -> f64 {
        match self {
            WeatherCondition::Clear => 1.00,
            WeatherCondition::Overcast => 0.92,
            WeatherCondition::Rain => 0.84,
            WeatherCondition::Fog => 0.70,
            WeatherCondition::Storm => 0.55,
        }
    }
}

/// Tackle an angler brings to a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TackleType {
    Basic,
    Spinner,
    Baitcaster,
    DeepSea,
}

impl TackleType {
    /// Weight multiplier applied during resolution.
    pub const fn multiplier(self) -> f64 {
        match self {
            TackleType::Basic => 1.00,
            TackleType::Spinner => 1.06,
            TackleType::Baitcaster => 1.12,
            TackleType::DeepSea => 1.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_multipliers_in_unit_interval() {
        let all = [
            WeatherCondition::Clear,
            WeatherCondition::Overcast,
            WeatherCondition::Rain,
            WeatherCondition::Fog,
            WeatherCondition::Storm,
        ];
        for weather in all {
            let m = weather.multiplier();
            assert!(m > 0.0 && m <= 1.0, "{:?} multiplier {} out of (0,1]", weather, m);
        }
    }

    #[test]
    fn test_basic_tackle_is_neutral() {
        assert_eq!(TackleType::Basic.multiplier(), 1.0);
        assert!(TackleType::DeepSea.multiplier() > TackleType::Spinner.multiplier());
    }
}
