//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Organization chart toolkit: hire, fire, and inspect org files
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the org chart as a tree
    Show {
        /// Org chart file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Add an employee under a supervisor
    Hire {
        /// Org chart file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Title of the supervising employee
        supervisor: String,
        /// Title for the new employee
        title: String,
        /// Name of the new employee
        name: String,
    },

    /// Remove an employee by title; their reports move up
    Fire {
        /// Org chart file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Title of the employee to remove
        title: String,
    },

    /// Look up an employee by title
    Find {
        /// Org chart file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Title to look up
        title: String,
    },

    /// Draw a random employee name from the chart
    Raffle {
        /// Org chart file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
