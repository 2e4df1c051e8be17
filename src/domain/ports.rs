use crate::domain::model::{DateRange, Guest, Reservation, Room};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable guest records keyed by phone number.
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// Insert-or-update keyed by `phone`. An existing guest has its
    /// name and email overwritten; idempotent on identical input.
    async fn upsert(
        &self,
        phone: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Guest>;

    async fn find(&self, phone: &str) -> Result<Option<Guest>>;
}

/// Static hotel/room reference data plus availability queries.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    /// Rooms of `hotel_id` free for the whole of `range`, ordered by
    /// room id ascending. Fails with `NotFound` for an unknown hotel.
    async fn search(&self, hotel_id: u32, range: &DateRange) -> Result<Vec<Room>>;

    async fn room_exists(&self, hotel_id: u32, room_id: u32) -> Result<bool>;
}

/// The single owner of reservation records. Implementations must make
/// `append` atomic with respect to concurrent callers for the same
/// room: the overlap check and the insert are one unit.
#[async_trait]
pub trait ReservationLedger: Send + Sync {
    async fn overlaps(&self, hotel_id: u32, room_id: u32, range: &DateRange) -> Result<bool>;

    /// Fails with `Conflict` when `range` intersects an existing
    /// reservation for the room; otherwise inserts and returns the new
    /// record with a freshly assigned id.
    async fn append(
        &self,
        guest_phone: &str,
        hotel_id: u32,
        room_id: u32,
        range: DateRange,
    ) -> Result<Reservation>;

    async fn list_for_guest(&self, phone: &str) -> Result<Vec<Reservation>>;

    /// Cancellation extension point; not part of the booking workflow.
    async fn remove(&self, reservation_id: u64) -> Result<Reservation>;
}
