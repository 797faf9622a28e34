use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orderinfo",
    bin_name = "orderinfo",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep the online orders of a small store in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backing CSV file (overrides the configured data-file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive main menu (the default)
    Menu,

    /// Load the file and print every order
    #[command(alias = "ls")]
    List,

    /// Add one order and save it
    Add {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        item: String,

        #[arg(long)]
        qty: String,

        /// DD/MM/YYYY
        #[arg(long)]
        date: String,

        #[arg(long)]
        total: String,

        /// Shipped, Delivered or Cancelled
        #[arg(long)]
        status: String,
    },

    /// Delete one order by id and save
    #[command(alias = "rm")]
    Delete {
        order_id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        /// data-file, first-order-id or log-level
        key: Option<String>,

        value: Option<String>,
    },
}
