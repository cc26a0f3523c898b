//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::server::DEFAULT_BODY_LIMIT;

/// Runtime settings. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "contacts", version, about = "HTTP service for managing contacts")]
pub struct Config {
    /// Listen address, `host:port`.
    #[arg(long, env = "CONTACTS_ADDR", default_value = "127.0.0.1:4000")]
    pub addr: String,

    /// Directory holding `html/` templates and `static/` assets.
    #[arg(long, env = "CONTACTS_UI_DIR", default_value = "./ui")]
    pub ui_dir: PathBuf,

    /// Largest request body the server buffers, in bytes.
    #[arg(long, env = "CONTACTS_MAX_BODY_BYTES", default_value_t = DEFAULT_BODY_LIMIT)]
    pub max_body_bytes: usize,

    /// Log output format.
    #[arg(long, env = "CONTACTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// How log lines are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}
