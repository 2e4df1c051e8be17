use crate::domain::model::{BookingRequest, Reservation};
use crate::domain::ports::{GuestDirectory, ReservationLedger, RoomCatalog};
use crate::utils::error::{FrontDeskError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Recognized booking policy options.
///
/// `shared_boundary` is enforced by the reservation ledger, so the
/// assembly point hands it to the ledger constructor; the service
/// itself only evaluates `allow_past_dates`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    pub allow_past_dates: bool,
    pub shared_boundary: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            allow_past_dates: false,
            shared_boundary: true,
        }
    }
}

/// Stateless coordinator over the three stores. Owns no records; every
/// collaborator arrives by injection and every collaborator failure is
/// surfaced unchanged, since masking a `Conflict` would corrupt the
/// no-double-booking invariant.
pub struct BookingService<G, C, L> {
    guests: Arc<G>,
    catalog: Arc<C>,
    ledger: Arc<L>,
    policy: BookingPolicy,
}

impl<G, C, L> BookingService<G, C, L>
where
    G: GuestDirectory,
    C: RoomCatalog,
    L: ReservationLedger,
{
    pub fn new(guests: Arc<G>, catalog: Arc<C>, ledger: Arc<L>) -> Self {
        Self::with_policy(guests, catalog, ledger, BookingPolicy::default())
    }

    pub fn with_policy(
        guests: Arc<G>,
        catalog: Arc<C>,
        ledger: Arc<L>,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            guests,
            catalog,
            ledger,
            policy,
        }
    }

    /// Runs the whole booking workflow: policy check, room lookup,
    /// guest registration, reservation append. Fails before touching
    /// any store when the request itself is invalid, so a rejected
    /// booking leaves no partial state.
    pub async fn book(&self, request: BookingRequest) -> Result<Reservation> {
        if !self.policy.allow_past_dates {
            let today = chrono::Local::now().date_naive();
            if request.range.check_in() < today {
                return Err(FrontDeskError::InvalidInput {
                    field: "check_in".to_string(),
                    value: request.range.check_in().to_string(),
                    reason: "Check-in date is in the past".to_string(),
                });
            }
        }

        if !self
            .catalog
            .room_exists(request.hotel_id, request.room_id)
            .await?
        {
            return Err(FrontDeskError::not_found(
                "Room",
                format!("{}/{}", request.hotel_id, request.room_id),
            ));
        }

        let guest = self
            .guests
            .upsert(
                &request.phone,
                &request.first_name,
                &request.last_name,
                &request.email,
            )
            .await?;

        let reservation = self
            .ledger
            .append(&guest.phone, request.hotel_id, request.room_id, request.range)
            .await?;

        tracing::info!(
            "Booked room {} at hotel {} for {} {} ({} nights)",
            reservation.room_id,
            reservation.hotel_id,
            guest.first_name,
            guest.last_name,
            reservation.range.nights()
        );
        Ok(reservation)
    }
}
