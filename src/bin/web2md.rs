//! CLI binary for web2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, derives an output path from the URL, and prints
//! diagnostics to stderr. The Markdown payload goes to the output file, or
//! to stdout with `--stdout`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use web2md::{convert, convert_to_file, ConversionConfig};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Fetch a page, save to docs/<name>.md
  web2md https://example.com/docs/getting-started

  # Explicit output path
  web2md https://example.com/blog/post -o notes/post.md

  # Print Markdown to stdout instead of writing a file
  web2md --stdout https://example.com

  # Use a Cloudflare API key for the negotiated-Markdown fast path
  web2md --api-key $CLOUDFLARE_API_KEY https://example.com/docs

  # Structured JSON output (markdown + strategy + stats)
  web2md --json --stdout https://example.com > result.json

ENVIRONMENT VARIABLES:
  CLOUDFLARE_API_KEY   API key for the credentialed text/markdown negotiation
  WEB2MD_OUTPUT        Default output file path
  WEB2MD_TIMEOUT       Per-attempt fetch timeout in seconds

STRATEGY:
  1. If an API key is set, request `Accept: text/markdown` with credentials.
  2. Retry the same request without credentials (some sites honour it).
  3. Fetch the raw HTML and convert it locally.
  The strategy that succeeded is reported on stderr."#;

/// Fetch a web page and save it as Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "web2md",
    version,
    about = "Fetch a web page and save it as clean Markdown",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// HTTP/HTTPS URL to fetch.
    url: String,

    /// Output file path (default: docs/<name>.md derived from the URL).
    #[arg(short, long, env = "WEB2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// Write Markdown to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// API key for the credentialed negotiated-Markdown attempt.
    #[arg(long, env = "CLOUDFLARE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Per-attempt fetch timeout in seconds.
    #[arg(long, env = "WEB2MD_TIMEOUT", default_value_t = web2md::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Output structured JSON (markdown + strategy + stats) on stdout.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut builder = ConversionConfig::builder().timeout_secs(cli.timeout);
    if let Some(ref key) = cli.api_key {
        builder = builder.api_key(key.clone());
    }
    let config = builder.build().context("Invalid configuration")?;

    if cli.stdout {
        let output = convert(&cli.url, &config).await.context("Conversion failed")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?
            );
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.markdown.as_bytes())
                .context("Failed to write to stdout")?;
            if !output.markdown.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet {
            eprintln!(
                "Fetched via {} ({} bytes, {}ms)",
                output.strategy, output.stats.markdown_bytes, output.stats.total_duration_ms
            );
        }
        return Ok(());
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("docs").join(format!("{}.md", url_to_filename(&cli.url))));

    let output = convert_to_file(&cli.url, &out_path, &config)
        .await
        .context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
    } else {
        // The saved path on stdout, for scripting.
        println!("{}", out_path.display());
    }

    if !cli.quiet {
        eprintln!(
            "Saved: {} ({} bytes, via {}, {}ms)",
            out_path.display(),
            output.stats.markdown_bytes,
            output.strategy,
            output.stats.total_duration_ms
        );
    }

    Ok(())
}

/// Derive a filesystem-safe name from the URL path (falling back to the
/// host), matching `docs/<name>.md` placement.
fn url_to_filename(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    // Drop query string and fragment.
    let without_query = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);

    let (host, path) = match without_query.split_once('/') {
        Some((host, path)) => (host, path.trim_matches('/')),
        None => (without_query, ""),
    };
    let base = if path.is_empty() { host } else { path };

    let mut name: String = base
        .replace(['/', '.'], "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if name.is_empty() {
        name = "page".to_string();
    }
    name.truncate(80);
    name
}
