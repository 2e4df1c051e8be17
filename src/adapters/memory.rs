use crate::domain::model::{DateRange, Guest, Hotel, Reservation, Room};
use crate::domain::ports::{GuestDirectory, ReservationLedger, RoomCatalog};
use crate::utils::error::{FrontDeskError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Guest records held in process memory, keyed by phone.
#[derive(Debug, Default)]
pub struct InMemoryGuestDirectory {
    guests: Mutex<HashMap<String, Guest>>,
}

impl InMemoryGuestDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestDirectory for InMemoryGuestDirectory {
    async fn upsert(
        &self,
        phone: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Guest> {
        validation::validate_phone("phone", phone)?;
        validation::validate_non_empty_string("first_name", first_name)?;
        validation::validate_non_empty_string("last_name", last_name)?;

        let guest = Guest {
            phone: phone.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };

        let mut guests = self.guests.lock().expect("guest directory lock poisoned");
        guests.insert(phone.to_string(), guest.clone());
        Ok(guest)
    }

    async fn find(&self, phone: &str) -> Result<Option<Guest>> {
        let guests = self.guests.lock().expect("guest directory lock poisoned");
        Ok(guests.get(phone).cloned())
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    next_id: u64,
    reservations: Vec<Reservation>,
}

/// Reservation store. A single mutex over the whole state keeps the
/// check-then-insert in `append` atomic across concurrent callers.
#[derive(Debug)]
pub struct InMemoryReservationLedger {
    state: Mutex<LedgerState>,
    shared_boundary: bool,
}

impl Default for InMemoryReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReservationLedger {
    /// Half-open overlap semantics: a checkout day may equal the next
    /// checkin day.
    pub fn new() -> Self {
        Self::with_shared_boundary(true)
    }

    pub fn with_shared_boundary(shared_boundary: bool) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            shared_boundary,
        }
    }

    fn conflicts(&self, existing: &DateRange, requested: &DateRange) -> bool {
        if self.shared_boundary {
            existing.overlaps(requested)
        } else {
            existing.overlaps_or_touches(requested)
        }
    }
}

#[async_trait]
impl ReservationLedger for InMemoryReservationLedger {
    async fn overlaps(&self, hotel_id: u32, room_id: u32, range: &DateRange) -> Result<bool> {
        let state = self.state.lock().expect("ledger lock poisoned");
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.hotel_id == hotel_id && r.room_id == room_id)
            .any(|r| self.conflicts(&r.range, range)))
    }

    async fn append(
        &self,
        guest_phone: &str,
        hotel_id: u32,
        room_id: u32,
        range: DateRange,
    ) -> Result<Reservation> {
        let mut state = self.state.lock().expect("ledger lock poisoned");

        let taken = state
            .reservations
            .iter()
            .filter(|r| r.hotel_id == hotel_id && r.room_id == room_id)
            .any(|r| self.conflicts(&r.range, &range));
        if taken {
            return Err(FrontDeskError::Conflict {
                hotel_id,
                room_id,
                check_in: range.check_in(),
                check_out: range.check_out(),
            });
        }

        state.next_id += 1;
        let reservation = Reservation {
            id: state.next_id,
            guest_phone: guest_phone.to_string(),
            hotel_id,
            room_id,
            range,
        };
        state.reservations.push(reservation.clone());

        tracing::debug!(
            "Reservation {} appended: hotel {} room {} {}..{}",
            reservation.id,
            hotel_id,
            room_id,
            range.check_in(),
            range.check_out()
        );
        Ok(reservation)
    }

    async fn list_for_guest(&self, phone: &str) -> Result<Vec<Reservation>> {
        let state = self.state.lock().expect("ledger lock poisoned");
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.guest_phone == phone)
            .cloned()
            .collect())
    }

    async fn remove(&self, reservation_id: u64) -> Result<Reservation> {
        let mut state = self.state.lock().expect("ledger lock poisoned");
        match state
            .reservations
            .iter()
            .position(|r| r.id == reservation_id)
        {
            Some(index) => Ok(state.reservations.remove(index)),
            None => Err(FrontDeskError::not_found("Reservation", reservation_id)),
        }
    }
}

/// Static hotel/room reference data plus availability answered against
/// the shared reservation ledger.
#[derive(Debug)]
pub struct InMemoryRoomCatalog<L> {
    hotels: HashMap<u32, Hotel>,
    ledger: Arc<L>,
}

impl<L: ReservationLedger> InMemoryRoomCatalog<L> {
    pub fn new(hotels: Vec<Hotel>, ledger: Arc<L>) -> Self {
        let hotels = hotels.into_iter().map(|h| (h.id, h)).collect();
        Self { hotels, ledger }
    }
}

#[async_trait]
impl<L: ReservationLedger> RoomCatalog for InMemoryRoomCatalog<L> {
    async fn search(&self, hotel_id: u32, range: &DateRange) -> Result<Vec<Room>> {
        let hotel = self
            .hotels
            .get(&hotel_id)
            .ok_or_else(|| FrontDeskError::not_found("Hotel", hotel_id))?;

        let mut free = Vec::new();
        for room in &hotel.rooms {
            if !self.ledger.overlaps(hotel_id, room.id, range).await? {
                free.push(*room);
            }
        }
        free.sort_by_key(|room| room.id);
        Ok(free)
    }

    async fn room_exists(&self, hotel_id: u32, room_id: u32) -> Result<bool> {
        Ok(self
            .hotels
            .get(&hotel_id)
            .map(|hotel| hotel.rooms.iter().any(|room| room.id == room_id))
            .unwrap_or(false))
    }
}
