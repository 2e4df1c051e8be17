use crate::utils::error::{FrontDeskError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered guest, keyed by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Static hotel reference data. Owns its rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A room belongs to exactly one hotel; its id is unique within that
/// hotel only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub beds: u8,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub pet_friendly: bool,
}

/// Half-open stay interval: the check-out day is exclusive, so a
/// departure and an arrival may share a calendar day.
///
/// Fields are private; `new` is the only constructor and rejects
/// non-chronological input, so every value in circulation satisfies
/// check_in < check_out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_in >= check_out {
            return Err(FrontDeskError::InvalidInput {
                field: "date_range".to_string(),
                value: format!("{check_in}..{check_out}"),
                reason: "Check-in must be strictly before check-out".to_string(),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Half-open intersection test: ranges sharing only a boundary day
    /// do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Closed-interval variant used when boundary sharing is disabled:
    /// touching ranges count as overlapping too.
    pub fn overlaps_or_touches(&self, other: &DateRange) -> bool {
        self.check_in <= other.check_out && other.check_in <= self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A committed stay. Owned exclusively by the reservation ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub guest_phone: String,
    pub hotel_id: u32,
    pub room_id: u32,
    pub range: DateRange,
}

/// Everything the booking workflow needs for one attempt, collected by
/// the UI collaborator into a single immutable value.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub hotel_id: u32,
    pub room_id: u32,
    pub range: DateRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(check_in: &str, check_out: &str) -> DateRange {
        DateRange::new(date(check_in), date(check_out)).unwrap()
    }

    #[test]
    fn test_rejects_non_chronological_range() {
        assert!(DateRange::new(date("2024-06-03"), date("2024-06-01")).is_err());
        assert!(DateRange::new(date("2024-06-01"), date("2024-06-01")).is_err());
        assert!(DateRange::new(date("2024-06-01"), date("2024-06-02")).is_ok());
    }

    #[test]
    fn test_half_open_overlap() {
        let june_1_to_3 = range("2024-06-01", "2024-06-03");

        assert!(june_1_to_3.overlaps(&range("2024-06-02", "2024-06-04")));
        assert!(june_1_to_3.overlaps(&range("2024-05-30", "2024-06-02")));
        assert!(june_1_to_3.overlaps(&range("2024-05-30", "2024-06-10")));
        assert!(june_1_to_3.overlaps(&june_1_to_3));

        // Boundary day shared: same-day turnover, no overlap.
        assert!(!june_1_to_3.overlaps(&range("2024-06-03", "2024-06-05")));
        assert!(!june_1_to_3.overlaps(&range("2024-05-28", "2024-06-01")));
        assert!(!june_1_to_3.overlaps(&range("2024-06-10", "2024-06-12")));
    }

    #[test]
    fn test_touching_ranges_under_closed_semantics() {
        let june_1_to_3 = range("2024-06-01", "2024-06-03");

        assert!(june_1_to_3.overlaps_or_touches(&range("2024-06-03", "2024-06-05")));
        assert!(!june_1_to_3.overlaps_or_touches(&range("2024-06-04", "2024-06-06")));
    }

    #[test]
    fn test_nights() {
        assert_eq!(range("2024-06-01", "2024-06-03").nights(), 2);
    }
}
