pub mod booking;

pub use crate::domain::model::{BookingRequest, DateRange, Guest, Hotel, Reservation, Room};
pub use crate::domain::ports::{GuestDirectory, ReservationLedger, RoomCatalog};
pub use crate::utils::error::Result;
