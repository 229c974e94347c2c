use anyhow::{Context, Result};
use clap::Parser;
use snippet_client::{HttpSnippetClient, SnippetClient, SnippetId};
use snippet_config::AppConfig;
use snippet_detail::DetailPage;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod logger;

/// Show a snippet of the snippet service as rendered detail page markup
#[derive(Debug, Parser)]
#[command(name = "snippet-detail", version, about)]
struct Args {
    /// Snippet ID
    id: i64,

    /// Compare against this snippet
    #[arg(long, value_name = "OTHER_ID")]
    compare: Option<i64>,

    /// Config file (defaults to .snippet-detail.toml in CWD or home)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the snippet service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = logger::init(args.id)?;
    log::info!("Starting snippet-detail, logging to {}", log_file.display());

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let client = HttpSnippetClient::builder()
        .base_url(config.base_url.clone())
        .timeout(config.request_timeout())
        .build()
        .context("Could not create snippet service client")?;
    let client: Arc<dyn SnippetClient> = Arc::new(client);

    // Responses never take longer than the request timeout
    let wait = config.request_timeout() + Duration::from_secs(1);

    let mut page = DetailPage::new(config, client).context("Could not start runtime")?;

    page.load(SnippetId(args.id));
    if !page.wait_idle(wait) {
        log::warn!("Gave up waiting for snippet {}", args.id);
    }

    if let Some(other) = args.compare {
        if page.mode().is_some() {
            page.enter_diff(SnippetId(other));
            if !page.wait_idle(wait) {
                log::warn!("Gave up waiting for comparison with {}", other);
            }
        }
    }

    println!("{}", page.render());

    for notification in page.notifications().iter() {
        eprintln!(
            "{} {}: {}",
            notification.kind.emoji(),
            notification.title,
            notification.message
        );
    }
    if let Some(path) = page.redirect_path() {
        eprintln!("Redirect: {}", path);
    }

    log::info!("Exiting snippet-detail");
    Ok(())
}
