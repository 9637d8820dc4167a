// SPDX-License-Identifier: MPL-2.0
//! Trip types offered by the search form.

use std::fmt;
use std::str::FromStr;

/// Kind of journey the traveller is searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
    MultiCity,
}

impl TripType {
    /// All trip types in display order.
    pub const ALL: [TripType; 3] = [TripType::RoundTrip, TripType::OneWay, TripType::MultiCity];

    /// Wire name used in submission records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
            TripType::MultiCity => "multi-city",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "One-way",
            TripType::RoundTrip => "Round-trip",
            TripType::MultiCity => "Multi-city",
        }
    }

    /// Whether this trip needs a return date.
    #[must_use]
    pub fn needs_return_date(self) -> bool {
        self != TripType::OneWay
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown trip type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTripType(pub String);

impl fmt::Display for UnknownTripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown trip type: {}", self.0)
    }
}

impl std::error::Error for UnknownTripType {}

impl FromStr for TripType {
    type Err = UnknownTripType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-way" => Ok(TripType::OneWay),
            "round-trip" => Ok(TripType::RoundTrip),
            "multi-city" => Ok(TripType::MultiCity),
            other => Err(UnknownTripType(other.to_string())),
        }
    }
}
