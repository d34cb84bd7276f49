//! Main commands enum.
//!
//! Quantity and price are taken as raw text and go through the same parsing
//! as the product form: anything unparsable becomes 0.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the stockroom inventory tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for all stockroom directories
    Paths,

    /// Add a product
    Add {
        /// Product name (required, surrounding whitespace is trimmed)
        #[arg(short, long)]
        name: String,
        /// Units in stock
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        quantity: String,
        /// Unit price
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        price: String,
        /// Image file to upload
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Edit a product; unspecified fields keep their current values
    Edit {
        /// ID of the product to edit
        id: String,
        /// New product name
        #[arg(short, long)]
        name: Option<String>,
        /// New units in stock
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: Option<String>,
        /// New unit price
        #[arg(short, long, allow_hyphen_values = true)]
        price: Option<String>,
        /// Replacement image file
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Remove a product and its image
    Remove {
        /// ID of the product to remove
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List products, newest first
    List {
        /// Only show products whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export every product to a CSV file
    Export {
        /// Directory to write the file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show a live product table; type a line to change the search text
    Watch {
        /// Initial search text
        #[arg(short, long)]
        search: Option<String>,
    },
}
