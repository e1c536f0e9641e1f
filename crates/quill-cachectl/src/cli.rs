//! Command-line definitions.

use clap::{Parser, Subcommand};

/// Inspect and edit the Quill cache.
#[derive(Debug, Parser)]
#[command(name = "quill-cachectl")]
#[command(about = "Inspect and edit the Quill cache", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding default.toml and per-environment overrides.
    #[arg(short, long, global = true, default_value = "./config", env = "QUILL_CONFIG_DIR")]
    pub config_dir: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the store answers.
    Ping,

    /// Print the namespaced keys for a user id and/or phone number.
    Keys {
        #[arg(short, long)]
        user_id: Option<u64>,

        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Read a raw key (not prefixed).
    Get { key: String },

    /// Write a raw key (not prefixed).
    Set {
        key: String,
        value: String,

        /// Expiration in seconds.
        #[arg(short, long, default_value = "3600")]
        ttl: u64,
    },

    /// Delete a raw key (not prefixed).
    Del { key: String },

    /// Show the cached user record.
    User { id: u64 },

    /// Show the cached login token for a user.
    Token { id: u64 },

    /// Show the cached signup code for a phone number.
    SignupCode { phone: String },

    /// Show the article a user is about to publish.
    Article { user_id: u64 },

    /// Show the cached category list.
    Categories,

    /// Drop every cached entry tied to a user.
    Evict { user_id: u64 },
}
