use agolo::{AgoloClient, Article, SummarizeRequest};
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Summarize an article with the Agolo API
#[derive(Debug, Parser)]
#[command(name = "agolo", version)]
struct Args {
    /// Subscription key sent as Ocp-Apim-Subscription-Key
    #[arg(long, env = "AGOLO_TOKEN", hide_env_values = true)]
    token: String,

    /// API origin
    #[arg(long, default_value = agolo::summarizer::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Article title
    #[arg(long)]
    title: Option<String>,

    /// Article body text
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the article body from a file ('-' for stdin)
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Source URL of the article
    #[arg(long)]
    url: Option<String>,

    /// Resolve coreferences
    #[arg(long)]
    coref: bool,

    /// Sort summary sentences by salience
    #[arg(long)]
    sort_by_salience: bool,

    /// Include all sentences instead of a trimmed subset
    #[arg(long)]
    include_all_sentences: bool,

    /// Sentences per summary
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    summary_length: i64,

    /// Print the raw result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "agolo=debug",
        _ => "agolo=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(args: &Args) -> Result<Option<String>> {
    if let Some(text) = &args.text {
        return Ok(Some(text.clone()));
    }

    match &args.text_file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read article text from stdin")?;
            Ok(Some(buf))
        }
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(None),
    }
}

fn build_request(args: &Args) -> Result<SummarizeRequest> {
    let mut article = Article::new();
    if let Some(title) = &args.title {
        article = article.title(title.as_str());
    }
    if let Some(text) = read_text(args)? {
        article = article.text(text);
    }
    if let Some(url) = &args.url {
        article = article.url(url.as_str());
    }
    if article.is_empty() {
        bail!("Nothing to summarize: pass --text, --text-file or --url");
    }

    let mut request = SummarizeRequest::new()
        .article(article)
        .summary_length(args.summary_length);
    if args.coref {
        request = request.coref();
    }
    if args.sort_by_salience {
        request = request.sort_by_salience();
    }
    if args.include_all_sentences {
        request = request.include_all_sentences();
    }

    Ok(request)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let request = build_request(&args)?;

    let mut builder = AgoloClient::builder(args.token.as_str()).base_url(args.base_url.as_str());
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to create API client")?;

    info!(base_url = %client.base_url(), "Requesting summary");
    let result = client.summarize(&request).context("Summarization failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if !result.title.is_empty() {
        println!("{}\n", result.title);
    }
    for sentence in result.sentences() {
        println!("- {}", sentence);
    }

    Ok(())
}
