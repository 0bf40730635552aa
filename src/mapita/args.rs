use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapita")]
#[command(about = "Local-first point-of-interest manager for interactive maps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List POIs
    #[command(alias = "ls")]
    List {
        /// Search term matched against title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Only show these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Add a POI at the given coordinates
    #[command(alias = "a")]
    Add {
        /// Title of the POI
        title: String,

        /// Longitude, -180 to 180
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Latitude, -90 to 90
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Description text
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category tag (viewpoint, museum, park, ...)
        #[arg(short, long, default_value = "user")]
        category: String,
    },

    /// Edit a POI's title and/or description
    #[command(alias = "e")]
    Edit {
        /// Id of the POI
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Move a POI to new coordinates
    #[command(alias = "mv")]
    Move {
        /// Id of the POI
        id: String,

        /// New longitude
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// New latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },

    /// Delete one or more POIs
    #[command(alias = "rm")]
    Delete {
        /// Ids of the POIs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Search POIs (dedicated command)
    #[command(alias = "s")]
    Search { term: String },

    /// Replace the collection with the content of a JSON file
    Import {
        /// JSON file holding a POI array
        file: PathBuf,
    },

    /// Export the collection as a standalone JSON file
    Export {
        /// Output file (defaults to mis_pois.json)
        file: Option<PathBuf>,
    },

    /// Restore the built-in default collection
    Reset,

    /// Resolve a shareable view link against the configured defaults
    Link {
        /// Query string, e.g. "lng=-74.05&lat=4.6&z=15"
        query: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (zoom, center)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
