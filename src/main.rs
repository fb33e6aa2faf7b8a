use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use viscard::interaction::Toast;
use viscard::platform::{CommandClipboard, PlatformApi, SystemPlatform};
use viscard::rendering::{generate, render};
use viscard::share::share_with;
use viscard::vcard::SAVED_MESSAGE;
use viscard::{export_vcard, save_vcard, CardConfig};

#[derive(Parser)]
#[command(name = "viscard")]
#[command(about = "Digital visiting card toolkit", long_about = None)]
struct Cli {
    /// Card configuration (JSON). Built-in placeholder card when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the decorative QR-style graphic as SVG
    Qr {
        /// Pattern seed; defaults to the configured page URL
        #[arg(long)]
        seed: Option<String>,
        /// Cell size in SVG units; defaults to the configured value
        #[arg(long)]
        cell_size: Option<u32>,
        /// Print a base64 data URI instead of raw SVG
        #[arg(long, conflicts_with = "fingerprint")]
        data_uri: bool,
        /// Print the SHA-256 fingerprint of the pattern grid
        #[arg(long)]
        fingerprint: bool,
    },
    /// Print the vCard, or save it as <Name>.vcf
    Vcard {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Share the card URL (clipboard, then manual fallback)
    Share {
        /// Clipboard program reading stdin, e.g. "xclip -selection clipboard"
        #[arg(long)]
        clipboard_cmd: Option<String>,
    },
    /// List contact items and social profiles
    Links,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CardConfig::load(cli.config.as_deref()).context("failed to load card config")?;

    match cli.command {
        Commands::Qr {
            seed,
            cell_size,
            data_uri,
            fingerprint,
        } => {
            let seed = seed.unwrap_or_else(|| config.page_url.clone());
            let cell_size = cell_size.unwrap_or(config.cell_size);
            if cell_size == 0 {
                anyhow::bail!("--cell-size must be at least 1");
            }
            let grid = generate(&seed);
            if fingerprint {
                println!("{}", grid.fingerprint());
            } else {
                let svg = render(&grid, cell_size);
                if data_uri {
                    println!("{}", viscard::rendering::to_data_uri(&svg));
                } else {
                    println!("{}", svg);
                }
            }
        }
        Commands::Vcard { out_dir } => match out_dir {
            Some(dir) => {
                let path = save_vcard(&config.contact, &dir)
                    .with_context(|| format!("failed to save vCard into {}", dir.display()))?;
                eprintln!("{}", Toast::new(SAVED_MESSAGE));
                println!("{}", path.display());
            }
            None => println!("{}", export_vcard(&config.contact)),
        },
        Commands::Share { clipboard_cmd } => {
            let platform = match clipboard_cmd.as_deref() {
                Some(line) => SystemPlatform::new(
                    CommandClipboard::from_command_line(line)
                        .context("--clipboard-cmd must name a program")?,
                ),
                None => SystemPlatform::default(),
            };
            let request = config.share_request();
            let outcome = share_with(&platform as &dyn PlatformApi, &request).await;
            if let Some(message) = outcome.notification() {
                eprintln!("{}", Toast::new(message));
            }
            println!("{}", request.url);
        }
        Commands::Links => {
            for link in config.contact.contact_links() {
                println!("{:?}\t{}\t{}", link.kind, link.text, link.href);
            }
            for (platform, url) in &config.contact.social {
                println!("{}\t{}", platform, url);
            }
        }
    }

    Ok(())
}
