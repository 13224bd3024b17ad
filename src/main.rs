//! party-downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use party_downloader::{
    api::PartyClient,
    cli::{Args, Command, DownloadArgs, SearchArgs},
    download::{build_transfer_requests, collect_file_refs, DownloadEngine, HttpTransport},
    error::Result,
    output::{format_creators, print_error, print_info, print_success, print_warning, ProgressBarObserver},
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Download(cmd) => download(cmd).await,
        Command::Search(cmd) => search(cmd).await,
    }
}

/// Fetch a creator's posts and download every referenced file.
///
/// Per-item download failures are tallied and reported but do not affect the
/// exit code; only top-level failures (fetch error, invalid arguments) do.
async fn download(args: DownloadArgs) -> Result<()> {
    let client = PartyClient::new(args.site.base_url())?;

    print_info(&format!(
        "Fetching posts from creator {} for service {}...",
        args.creator, args.service
    ));
    let posts = client.posts_for_user(&args.service, &args.creator).await?;

    let refs = collect_file_refs(&posts);
    print_info(&format!(
        "Found {} posts with {} files",
        posts.len(),
        refs.len()
    ));

    // The engine never creates directories; ensure the output root here.
    tokio::fs::create_dir_all(&args.output).await?;
    let requests = build_transfer_requests(&client, &refs, &args.output);

    let engine = DownloadEngine::new(HttpTransport::new()?, args.concurrent)?;
    let observer = ProgressBarObserver::new(requests.len() as u64);
    let report = engine.run(requests, &observer).await;
    observer.finish();

    print_success(&format!("Successful downloads: {}", report.success_count()));
    if report.failure_count() > 0 {
        print_warning(&format!("Failed downloads: {}", report.failure_count()));
    }

    Ok(())
}

/// Search the site's creator index by exact (case-insensitive) name.
async fn search(args: SearchArgs) -> Result<()> {
    let client = PartyClient::new(args.site.base_url())?;

    let mut creators = client.creators().await?;
    creators.retain(|c| c.name.eq_ignore_ascii_case(&args.creator));
    if let Some(service) = &args.service {
        creators.retain(|c| c.service.eq_ignore_ascii_case(service));
    }

    print_info(&format!("Found {} creators", creators.len()));
    if !creators.is_empty() {
        println!("{}", format_creators(&creators));
    }

    Ok(())
}
