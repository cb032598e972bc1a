mod input;
mod report;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use inspector_mcp::config::{load_settings, load_settings_from_path, validate_settings};
use inspector_mcp::{ProbeOverrides, ServerConfig, ServerProber, parse_installation_code};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "mcp-inspector", version, about = "Check that a remote MCP server is reachable and answering")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Probe a server's health and completion endpoints
    Test(TestArgs),
    /// Show the configuration extracted from an installation code
    Parse(CodeArgs),
}

#[derive(Debug, Args)]
struct CodeArgs {
    /// Installation code text, or `-` to read it from stdin
    #[arg(long, conflicts_with = "code_file")]
    code: Option<String>,

    /// Read the installation code from a file
    #[arg(long, value_name = "PATH")]
    code_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct TestArgs {
    /// Server URL, entered directly instead of an installation code
    #[arg(long, conflicts_with_all = ["code", "code_file"])]
    url: Option<String>,

    /// API key sent as a bearer token (only with --url)
    #[arg(long)]
    api_key: Option<String>,

    #[command(flatten)]
    code: CodeArgs,

    /// Print the result record as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Connectivity probe budget in milliseconds
    #[arg(long, value_name = "MS")]
    connect_timeout_ms: Option<u64>,

    /// Per-request completion probe budget in milliseconds
    #[arg(long, value_name = "MS")]
    functionality_timeout_ms: Option<u64>,

    /// Probe settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Test(args) => run_test(args).await,
        Command::Parse(args) => run_parse(args),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_test(args: TestArgs) -> Result<ExitCode> {
    let config = server_config(&args)?;

    let settings = match &args.settings {
        Some(path) => load_settings_from_path(path),
        None => load_settings(),
    }
    .context("failed to load probe settings")?;
    let overrides = ProbeOverrides {
        connect_timeout_ms: args.connect_timeout_ms,
        functionality_timeout_ms: args.functionality_timeout_ms,
    };
    let settings = settings.with_overrides(&overrides);
    validate_settings(&settings).context("invalid probe settings")?;
    debug!(?settings, "Resolved probe settings");

    let prober = ServerProber::new(settings)?;
    let result = prober.test_server(&config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }
    eprintln!("{}", report::notice(&result));

    Ok(if result.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn server_config(args: &TestArgs) -> Result<ServerConfig> {
    if let Some(url) = &args.url {
        return Ok(input::manual_config(url.clone(), args.api_key.clone()));
    }
    // Installation codes carry their own key.
    if args.api_key.is_some() {
        bail!("--api-key can only be used together with --url");
    }
    let code = input::read_installation_code(args.code.code.as_deref(), args.code.code_file.as_deref())?
        .context("provide --url or an installation code (--code / --code-file)")?;
    Ok(parse_installation_code(&code))
}

fn run_parse(args: CodeArgs) -> Result<ExitCode> {
    let code = input::read_installation_code(args.code.as_deref(), args.code_file.as_deref())?
        .context("provide an installation code (--code / --code-file)")?;
    let config = parse_installation_code(&code);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}
