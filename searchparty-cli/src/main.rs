use clap::{Parser, ValueEnum};
use searchparty_forensics::{ForensicsConfigBuilder, search_party};
use std::process::ExitCode;

/// Exit status when the search itself fails
const EXIT_SEARCH_FAILED: u8 = 1;
/// Exit status for configuration or setup problems
const EXIT_CONFIG: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "searchparty", version)]
#[command(about = "Follow the forensics directions and report what is found at the end")]
struct Cli {
    /// Identifier keying every API request
    #[arg(long, env = "SEARCHPARTY_EMAIL")]
    email: Option<String>,

    /// API root (default: the public forensics service)
    #[arg(long, env = "SEARCHPARTY_API_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEARCHPARTY_REQUEST_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_logging(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    // clap already folded the environment into the flags
    let mut builder = ForensicsConfigBuilder::new();
    if let Some(email) = cli.email {
        builder = builder.email(email);
    }
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = cli.timeout_secs {
        builder = builder.request_timeout_secs(timeout);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let party = match search_party(&config) {
        Ok(party) => party,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    match party.locate_target().await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error_code = e.error_code(), "Search ended without a result");
            eprintln!("error: {e}");
            ExitCode::from(EXIT_SEARCH_FAILED)
        }
    }
}
