//! The fixed akhrajat (expense) taxonomy.
//!
//! Every expense line carries one of seven titles. `Gari` marks the line as
//! a vehicle expense and may carry a detail sub-record; `Mutafarik` marks it
//! as eligible for the free-form "other" classification.

use serde::{Deserialize, Serialize};

use crate::LedgerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AkhrajatTitle {
    Mazdoori,
    Kanta,
    Khoraki,
    Commission,
    Bhatta,
    Gari,
    Mutafarik,
}

impl AkhrajatTitle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mazdoori => "mazdoori",
            Self::Kanta => "kanta",
            Self::Khoraki => "khoraki",
            Self::Commission => "commission",
            Self::Bhatta => "bhatta",
            Self::Gari => "gari",
            Self::Mutafarik => "mutafarik",
        }
    }

    /// Vehicle expenses may carry a `VehicleDetail` sub-record.
    pub fn is_vehicle(self) -> bool {
        matches!(self, Self::Gari)
    }

    /// Miscellaneous expenses may be reclassified under a free-form title.
    pub fn is_mutafarik(self) -> bool {
        matches!(self, Self::Mutafarik)
    }
}

impl TryFrom<&str> for AkhrajatTitle {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "mazdoori" => Ok(Self::Mazdoori),
            "kanta" => Ok(Self::Kanta),
            "khoraki" => Ok(Self::Khoraki),
            "commission" => Ok(Self::Commission),
            "bhatta" => Ok(Self::Bhatta),
            "gari" => Ok(Self::Gari),
            "mutafarik" => Ok(Self::Mutafarik),
            other => Err(LedgerError::InvalidTitle(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleExpenseType {
    Petrol,
    Diesel,
    MobilOil,
    Repair,
}

impl VehicleExpenseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "petrol",
            Self::Diesel => "diesel",
            Self::MobilOil => "mobil_oil",
            Self::Repair => "repair",
        }
    }

    /// Fuel purchases record how many units were bought.
    pub fn requires_quantity(self) -> bool {
        matches!(self, Self::Petrol | Self::Diesel)
    }

    /// Repairs record which part was serviced.
    pub fn requires_part(self) -> bool {
        matches!(self, Self::Repair)
    }
}

impl TryFrom<&str> for VehicleExpenseType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "petrol" => Ok(Self::Petrol),
            "diesel" => Ok(Self::Diesel),
            "mobil_oil" => Ok(Self::MobilOil),
            "repair" => Ok(Self::Repair),
            other => Err(LedgerError::IncompleteVehicleDetail(format!(
                "invalid vehicle expense type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_round_trips_through_wire_name() {
        for title in [
            AkhrajatTitle::Mazdoori,
            AkhrajatTitle::Kanta,
            AkhrajatTitle::Khoraki,
            AkhrajatTitle::Commission,
            AkhrajatTitle::Bhatta,
            AkhrajatTitle::Gari,
            AkhrajatTitle::Mutafarik,
        ] {
            assert_eq!(AkhrajatTitle::try_from(title.as_str()), Ok(title));
        }
    }

    #[test]
    fn unknown_title_is_rejected() {
        assert_eq!(
            AkhrajatTitle::try_from("chai"),
            Err(LedgerError::InvalidTitle("chai".to_string()))
        );
    }

    #[test]
    fn only_gari_is_a_vehicle_title() {
        assert!(AkhrajatTitle::Gari.is_vehicle());
        assert!(!AkhrajatTitle::Mazdoori.is_vehicle());
        assert!(!AkhrajatTitle::Mutafarik.is_vehicle());
    }

    #[test]
    fn fuel_requires_quantity_repair_requires_part() {
        assert!(VehicleExpenseType::Petrol.requires_quantity());
        assert!(VehicleExpenseType::Diesel.requires_quantity());
        assert!(!VehicleExpenseType::MobilOil.requires_quantity());
        assert!(VehicleExpenseType::Repair.requires_part());
        assert!(!VehicleExpenseType::Petrol.requires_part());
    }
}
