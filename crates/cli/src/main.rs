use clap::Parser;
use rootwalk_application::use_cases::{render_lines, LookupRecordsUseCase};
use rootwalk_domain::{CliOverrides, RecordType};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "Iterative DNS lookups walked down from the root servers")]
struct Cli {
    /// Record type to look up (A, NS, CNAME, TXT, AAAA)
    #[arg(long = "type", value_name = "TYPE", default_value = "A")]
    record_type: String,

    /// Names to resolve
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Read deadline per server exchange, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Resolve every record type through the cached referral walk
    #[arg(long)]
    walk: bool,
}

/// Accept the single-dash `-type` spelling next to clap's `--type`.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix("-type") {
            Some(rest) if rest.is_empty() || rest.starts_with('=') => format!("--type{}", rest),
            _ => arg,
        })
        .collect()
}

/// Resolves every name and writes the result lines to `out`.
///
/// Returns exit code 1 without resolving anything when no names are given
/// or the record type is unknown.
async fn run<W: Write>(
    record_type: &str,
    names: &[String],
    lookup: &LookupRecordsUseCase,
    out: &mut W,
) -> anyhow::Result<u8> {
    if names.is_empty() {
        eprintln!("usage: rootwalk [-type TYPE] NAME [NAME...]");
        return Ok(1);
    }

    let record_type: RecordType = match record_type.parse() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}. Valid types: {}", e, RecordType::known_tokens());
            return Ok(1);
        }
    };

    for name in names {
        let results = lookup.execute(name, record_type).await;
        debug!(name = %name, record_type = %record_type, results = results.len(), "Lookup finished");

        for line in render_lines(name, &results) {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(0)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        query_timeout_ms: cli.timeout_ms,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        record_type = %cli.record_type,
        names = cli.names.len(),
        "Starting rootwalk v{}",
        env!("CARGO_PKG_VERSION")
    );

    let services = di::ResolverServices::new(&config, cli.walk)?;

    let mut stdout = std::io::stdout().lock();
    let code = run(&cli.record_type, &cli.names, &services.lookup, &mut stdout).await?;
    stdout.flush()?;

    debug!(cached_names = services.cache.len(), exit_code = code, "Done");
    Ok(ExitCode::from(code))
}
