pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::FrontDeskConfig;

pub use crate::adapters::memory::{
    InMemoryGuestDirectory, InMemoryReservationLedger, InMemoryRoomCatalog,
};
pub use crate::core::booking::{BookingPolicy, BookingService};
pub use crate::domain::model::{BookingRequest, DateRange, Guest, Hotel, Reservation, Room};
pub use crate::domain::ports::{GuestDirectory, ReservationLedger, RoomCatalog};
pub use crate::utils::error::{FrontDeskError, Result};
