//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dinemap_model::StarRange;

#[derive(Parser)]
#[command(
    name = "dinemap",
    version,
    about = "Browse restaurant listings by category and rating",
    long_about = "Browse restaurant listings by cuisine category and star rating.\n\n\
                  Prints matching restaurants, writes a Leaflet map with category glyphs,\n\
                  and shows a restaurant's reviews filtered by review rating."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow review text in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Config file (default: ./dinemap.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Business table URL or path.
    #[arg(long = "businesses", value_name = "URL|PATH", global = true)]
    pub businesses: Option<String>,

    /// Review table URL or path.
    #[arg(long = "reviews", value_name = "URL|PATH", global = true)]
    pub reviews: Option<String>,

    /// Category glyph table replacing the embedded one.
    #[arg(long = "glyphs", value_name = "PATH", global = true)]
    pub glyphs: Option<PathBuf>,

    /// Initial map zoom.
    #[arg(long = "zoom", value_name = "LEVEL", global = true)]
    pub zoom: Option<u8>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List categories with restaurant counts and glyphs.
    Categories,

    /// Filter restaurants and print the table.
    Restaurants(RestaurantsArgs),

    /// Show a restaurant's reviews.
    Reviews(ReviewsArgs),

    /// Print the category glyph table.
    Glyphs,

    /// Interactive session.
    Explore(ExploreArgs),
}

/// Category and restaurant star range.
#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Category label (default: the first category).
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,

    /// Lowest restaurant rating (default: table minimum).
    #[arg(long = "min-stars", value_name = "STARS")]
    pub min_stars: Option<f64>,

    /// Highest restaurant rating (default: table maximum).
    #[arg(long = "max-stars", value_name = "STARS")]
    pub max_stars: Option<f64>,
}

impl FilterArgs {
    pub fn star_range(&self) -> Option<StarRange> {
        star_range(self.min_stars, self.max_stars)
    }
}

#[derive(Args)]
pub struct RestaurantsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write the map as a Leaflet HTML page.
    #[arg(long = "map", value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Write the table as CSV.
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Print the whole view as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ReviewsArgs {
    /// Restaurant name or business id.
    #[arg(long = "restaurant", value_name = "NAME|ID")]
    pub restaurant: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Lowest review rating.
    #[arg(long = "min-review-stars", value_name = "STARS")]
    pub min_review_stars: Option<f64>,

    /// Highest review rating.
    #[arg(long = "max-review-stars", value_name = "STARS")]
    pub max_review_stars: Option<f64>,

    /// Print the selection as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

impl ReviewsArgs {
    pub fn review_star_range(&self) -> Option<StarRange> {
        star_range(self.min_review_stars, self.max_review_stars)
    }
}

#[derive(Args)]
pub struct ExploreArgs {
    /// Initial selection.
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// A missing end becomes NaN, which clamping replaces with the table bound.
fn star_range(min: Option<f64>, max: Option<f64>) -> Option<StarRange> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(StarRange::new(
        min.unwrap_or(f64::NAN),
        max.unwrap_or(f64::NAN),
    ))
}
