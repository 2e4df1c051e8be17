use chrono::NaiveDate;
use clap::Parser;
use front_desk::utils::validation::validate_required_field;
use front_desk::utils::{error::FrontDeskError, logger};
use front_desk::{
    BookingRequest, BookingService, CliArgs, DateRange, FrontDeskConfig, InMemoryGuestDirectory,
    InMemoryReservationLedger, InMemoryRoomCatalog, Reservation, Room, RoomCatalog,
};
use std::sync::Arc;

enum Outcome {
    Rooms(Vec<Room>),
    Booked(Reservation),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting front-desk");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match FrontDeskConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load settings from {}: {}", args.config, e);
            eprintln!("❌ {e}");
            std::process::exit(3);
        }
    };

    match run(&args, &config).await {
        Ok(Outcome::Rooms(rooms)) => {
            if rooms.is_empty() {
                println!(
                    "No rooms free at hotel {} between {} and {}",
                    args.hotel, args.check_in, args.check_out
                );
            } else {
                println!("Available rooms at hotel {}:", args.hotel);
                for room in rooms {
                    println!(
                        "  room {:>4}  {} beds  smoking: {}  pets: {}",
                        room.id,
                        room.beds,
                        if room.smoking { "yes" } else { "no" },
                        if room.pet_friendly { "yes" } else { "no" }
                    );
                }
            }
        }
        Ok(Outcome::Booked(reservation)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&reservation)?);
            } else {
                let hotel_name = config
                    .hotels
                    .iter()
                    .find(|h| h.id == reservation.hotel_id)
                    .map(|h| h.name.as_str())
                    .unwrap_or("unknown hotel");
                println!("✅ Reservation confirmed!");
                println!("   Confirmation #{}", reservation.id);
                println!(
                    "   {} (hotel {}), room {}",
                    hotel_name, reservation.hotel_id, reservation.room_id
                );
                println!(
                    "   {} to {} ({} nights)",
                    reservation.range.check_in(),
                    reservation.range.check_out(),
                    reservation.range.nights()
                );
                println!("   Guest phone: {}", reservation.guest_phone);
            }
        }
        Err(e) => {
            tracing::error!("❌ Booking workflow failed: {}", e);
            eprintln!("❌ {e}");
            let exit_code = match e {
                FrontDeskError::InvalidInput { .. } | FrontDeskError::NotFound { .. } => 1,
                FrontDeskError::Conflict { .. } => 2,
                FrontDeskError::StorageUnavailable(_) | FrontDeskError::ConfigError(_) => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(args: &CliArgs, config: &FrontDeskConfig) -> front_desk::Result<Outcome> {
    let check_in = parse_date("check_in", &args.check_in)?;
    let check_out = parse_date("check_out", &args.check_out)?;
    let range = DateRange::new(check_in, check_out)?;

    let ledger = Arc::new(InMemoryReservationLedger::with_shared_boundary(
        config.policy.shared_boundary,
    ));
    let catalog = Arc::new(InMemoryRoomCatalog::new(
        config.hotels.clone(),
        ledger.clone(),
    ));
    let guests = Arc::new(InMemoryGuestDirectory::new());

    let Some(room_id) = args.room else {
        return Ok(Outcome::Rooms(catalog.search(args.hotel, &range).await?));
    };

    let request = BookingRequest {
        first_name: validate_required_field("first_name", &args.first_name)?.clone(),
        last_name: validate_required_field("last_name", &args.last_name)?.clone(),
        email: args.email.clone().unwrap_or_default(),
        phone: validate_required_field("phone", &args.phone)?.clone(),
        hotel_id: args.hotel,
        room_id,
        range,
    };

    let service = BookingService::with_policy(guests, catalog, ledger, config.policy);
    let reservation = service.book(request).await?;
    Ok(Outcome::Booked(reservation))
}

fn parse_date(field: &str, value: &str) -> front_desk::Result<NaiveDate> {
    value.parse().map_err(|_| FrontDeskError::InvalidInput {
        field: field.to_string(),
        value: value.to_string(),
        reason: "Expected a calendar date formatted YYYY-MM-DD".to_string(),
    })
}
