//! Placeholder image service binary.
//!
//! # Usage
//!
//! ```bash
//! # Start the HTTP server (default command)
//! cargo run
//!
//! # Render an image to a file without starting the server
//! cargo run -- render 640x480 --output placeholder.png
//!
//! # Print the ETag the server would send for a size
//! cargo run -- etag 640x480
//! ```
//!
//! Configuration is read from the environment (and `.env`), see
//! [`placeholder::config`].

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placeholder::config::{self, Config};
use placeholder::domain::etag;
use placeholder::domain::image_request::split_dimensions;
use placeholder::domain::{ImageRequest, OutputFormat};
use placeholder::infrastructure::render::render_placeholder;
use placeholder::server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Placeholder image service.
#[derive(Parser)]
#[command(name = "placeholder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,

    /// Render a placeholder image to a file
    Render {
        /// Image size as WIDTHxHEIGHT, e.g. 640x480
        size: String,

        /// Output file path
        #[arg(short, long, default_value = "placeholder.png")]
        output: PathBuf,
    },

    /// Print the ETag for a size
    Etag {
        /// Image size as WIDTHxHEIGHT, e.g. 640x480
        size: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = config::load_from_env()?;
            init_tracing(&config);
            config.print_summary();
            server::run(config).await
        }
        Command::Render { size, output } => {
            let request = ImageRequest::from_segment(&size)
                .with_context(|| format!("Invalid image size '{}'", size))?;
            let bytes = render_placeholder(&request, OutputFormat::Png)?;
            std::fs::write(&output, &bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Wrote {}x{} image to {} ({} bytes)",
                request.width(),
                request.height(),
                output.display(),
                bytes.len()
            );
            Ok(())
        }
        Command::Etag { size } => {
            let (width, height) = split_dimensions(&size);
            println!("{}", etag::quote(&etag::placeholder_etag(width, height)));
            Ok(())
        }
    }
}

/// Installs the global tracing subscriber in the configured format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
