//! Command-line arguments.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use flight_planner::planner::{SearchConfig, SearchStrategy};

/// Search a flight table for one-way and return trips, cheapest first
#[derive(Parser, Debug)]
#[command(name = "flight-planner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log planner decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `flight_planner=trace,tower_http=info`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search once and print the trips as JSON
    Search(SearchArgs),

    /// Serve searches over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Flights CSV file
    pub data: PathBuf,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Checked bags per passenger (negative counts as zero)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub bags: i64,

    /// Also fly back to the origin
    #[arg(long = "return")]
    pub round_trip: bool,

    /// Minimum whole days at the destination on a return trip
    #[arg(long, default_value_t = 1)]
    pub days_in_destination: u32,

    #[command(flatten)]
    pub planner: PlannerArgs,
}

impl SearchArgs {
    /// The minimum stay when `--return` is given.
    pub fn min_stay_days(&self) -> Option<u32> {
        self.round_trip.then_some(self.days_in_destination)
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Flights CSV file
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    #[command(flatten)]
    pub planner: PlannerArgs,
}

/// Layover and enumeration settings shared by every subcommand.
#[derive(Args, Debug)]
pub struct PlannerArgs {
    /// Try every connection instead of only the first that fits
    #[arg(long)]
    pub exhaustive: bool,

    /// Shortest layover between flights, in minutes
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    pub min_layover_mins: i64,

    /// Longest layover between flights, in minutes
    #[arg(long, default_value_t = 360, allow_negative_numbers = true)]
    pub max_layover_mins: i64,
}

impl PlannerArgs {
    pub fn to_config(&self) -> SearchConfig {
        let strategy = if self.exhaustive {
            SearchStrategy::Exhaustive
        } else {
            SearchStrategy::FirstMatch
        };

        SearchConfig::new(self.min_layover_mins, self.max_layover_mins, strategy)
    }
}
