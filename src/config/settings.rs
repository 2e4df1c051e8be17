use crate::core::booking::BookingPolicy;
use crate::domain::model::Hotel;
use crate::utils::error::{FrontDeskError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Front-desk settings file: booking policy plus the static hotel and
/// room reference data the catalog is seeded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontDeskConfig {
    #[serde(default)]
    pub policy: BookingPolicy,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

impl FrontDeskConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FrontDeskConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FrontDeskConfig {
    fn validate(&self) -> Result<()> {
        let mut hotel_ids = HashSet::new();
        for hotel in &self.hotels {
            if !hotel_ids.insert(hotel.id) {
                return Err(FrontDeskError::InvalidInput {
                    field: "hotels".to_string(),
                    value: hotel.id.to_string(),
                    reason: "Duplicate hotel id".to_string(),
                });
            }
            validate_non_empty_string("hotel.name", &hotel.name)?;
            validate_non_empty_string("hotel.city", &hotel.city)?;

            let mut room_ids = HashSet::new();
            for room in &hotel.rooms {
                if !room_ids.insert(room.id) {
                    return Err(FrontDeskError::InvalidInput {
                        field: "hotel.rooms".to_string(),
                        value: format!("{}/{}", hotel.id, room.id),
                        reason: "Duplicate room id within hotel".to_string(),
                    });
                }
                if room.beds == 0 {
                    return Err(FrontDeskError::InvalidInput {
                        field: "room.beds".to_string(),
                        value: format!("{}/{}", hotel.id, room.id),
                        reason: "A room must sleep at least one guest".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
