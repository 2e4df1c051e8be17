use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontDeskError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    #[error("Room {room_id} at hotel {hotel_id} is already reserved between {check_in} and {check_out}")]
    Conflict {
        hotel_id: u32,
        room_id: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Backing store unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl FrontDeskError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        FrontDeskError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrontDeskError>;
