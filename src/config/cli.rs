use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "front-desk")]
#[command(about = "Hotel front-desk room search and reservation booking")]
pub struct CliArgs {
    #[arg(long, default_value = "front-desk.toml")]
    pub config: String,

    #[arg(long)]
    pub hotel: u32,

    #[arg(long, help = "Check-in date, YYYY-MM-DD")]
    pub check_in: String,

    #[arg(long, help = "Check-out date, YYYY-MM-DD")]
    pub check_out: String,

    #[arg(long, help = "Room to book; omit to list available rooms instead")]
    pub room: Option<u32>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, help = "Print the confirmation as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
