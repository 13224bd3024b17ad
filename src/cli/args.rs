//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Party archive downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "party-downloader",
    version,
    about = "Tool for interacting with party archive services",
    long_about = "A CLI tool to download creator content from party archive sites\n\
                  (coomer, kemono) and to search their creator index."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download all files posted by a creator.
    Download(DownloadArgs),
    /// Search for a creator by name.
    Search(SearchArgs),
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// ID of the creator to download.
    #[arg(long)]
    pub creator: String,

    /// Site to download from.
    #[arg(long, value_enum, ignore_case = true)]
    pub site: Site,

    /// Service to download from, e.g. fansly, onlyfans, patreon, discord.
    #[arg(long)]
    pub service: String,

    /// Output directory for the downloaded files.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Maximum number of concurrent downloads.
    #[arg(short, long, default_value_t = 5)]
    pub concurrent: usize,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Name of the creator to search for.
    #[arg(long)]
    pub creator: String,

    /// Site to search on.
    #[arg(long, value_enum, ignore_case = true)]
    pub site: Site,

    /// Optionally filter creators by service, e.g. fansly, onlyfans, patreon.
    #[arg(long)]
    pub service: Option<String>,
}

/// Supported archive sites.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Site {
    Coomer,
    Kemono,
}

impl Site {
    /// The site's base URL.
    pub fn base_url(self) -> &'static str {
        match self {
            Site::Coomer => "https://coomer.su",
            Site::Kemono => "https://kemono.su",
        }
    }
}
