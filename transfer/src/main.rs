//! Transfer binary entry point

use std::io::{self, BufRead, Write};

use clap::Parser;

use shared::{logging, stage_error, Stage};
use transfer::core::{extract_playlist_id, render_report};
use transfer::services::Authorizer;
use transfer::{AuthConfig, TransferError, TransferOptions, TransferPipeline, TransferResult};

#[derive(Parser)]
#[command(name = "transfer")]
#[command(about = "Copy a YouTube playlist into a new private Spotify playlist")]
struct Args {
    /// YouTube playlist URL (prompted for when omitted)
    playlist_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Number of track searches in flight at once
    #[arg(long, default_value_t = 1)]
    search_concurrency: usize,

    /// Text appended to the source playlist name
    #[arg(long)]
    suffix: Option<String>,

    /// Print the summary as JSON instead of the human report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    println!("\n🎵 YouTube to Spotify Playlist Converter 🎵");

    let playlist_url = playlist_url(args.playlist_url)?;

    let config = AuthConfig::from_env()?;
    let clients = Authorizer::new(config)?.authorize().await?;

    let mut options = TransferOptions {
        search_concurrency: args.search_concurrency,
        ..TransferOptions::default()
    };
    if let Some(suffix) = args.suffix {
        options.playlist_suffix = suffix;
    }
    let preview = options.unmatched_preview;

    let pipeline = TransferPipeline::new(clients.source, clients.destination, options);

    match pipeline.run(&playlist_url).await {
        Ok(summary) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("\n{}", render_report(&summary, preview));
            }
            Ok(())
        }
        Err(error) => {
            logging::log_error(Stage::Report, "Transfer", &error);
            if let TransferError::WriteFailure {
                playlist_url: Some(url),
                tracks_added,
                ..
            } = &error
            {
                stage_error!(
                    Stage::Write,
                    playlist_url = %url,
                    "Playlist left partially populated with {} tracks",
                    tracks_added
                );
                eprintln!("⚠️ The playlist was left partially populated ({tracks_added} tracks): {url}");
            }
            Err(error.into())
        }
    }
}

/// Take the URL from the command line or stdin, rejecting a bad one before
/// any token exchange happens
fn playlist_url(from_args: Option<String>) -> TransferResult<String> {
    let url = match from_args {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    extract_playlist_id(&url)?;
    Ok(url)
}

fn prompt_for_url() -> TransferResult<String> {
    print!("\n📺 Enter the YouTube playlist URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
