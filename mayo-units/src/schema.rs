//! Measurement schemas selecting the display convention

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Display convention for translated quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Schema {
    #[default]
    #[serde(rename = "si", alias = "SI")]
    SI,
    #[serde(rename = "imperial_uk", alias = "ImperialUK")]
    ImperialUK,
}

impl Schema {
    pub const ALL: [Schema; 2] = [Schema::SI, Schema::ImperialUK];

    pub fn name(self) -> &'static str {
        match self {
            Schema::SI => "si",
            Schema::ImperialUK => "imperial_uk",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown schema name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit schema: {0}")]
pub struct UnknownSchema(pub String);

impl FromStr for Schema {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "si" | "metric" => Ok(Schema::SI),
            "imperial_uk" | "imperialuk" | "imperial" => Ok(Schema::ImperialUK),
            _ => Err(UnknownSchema(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_si() {
        assert_eq!(Schema::default(), Schema::SI);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("SI".parse::<Schema>(), Ok(Schema::SI));
        assert_eq!("metric".parse::<Schema>(), Ok(Schema::SI));
        assert_eq!("ImperialUK".parse::<Schema>(), Ok(Schema::ImperialUK));
        assert_eq!("imperial-uk".parse::<Schema>(), Ok(Schema::ImperialUK));
        assert_eq!("imperial".parse::<Schema>(), Ok(Schema::ImperialUK));
        assert!("us_customary".parse::<Schema>().is_err());
    }

    #[test]
    fn test_name_round_trips() {
        for schema in Schema::ALL {
            assert_eq!(schema.name().parse::<Schema>(), Ok(schema));
        }
    }
}
