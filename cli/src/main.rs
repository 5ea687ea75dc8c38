use std::io::{BufWriter, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use kedge_openapi_convert::{ConvertConfig, ConvertError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kedge-openapi")]
#[command(about = "Emit the Kedge OpenAPI schema merged with the Kubernetes and OpenShift schemas")]
#[command(version)]
struct Cli {
    /// YAML file providing any of the input paths below.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Generated Kedge definitions and injection mapping (JSON).
    #[arg(long)]
    kedge_spec: Option<PathBuf>,
    /// Kubernetes OpenAPI schema (JSON).
    #[arg(long)]
    kubernetes_schema: Option<PathBuf>,
    /// OpenShift OpenAPI schema (JSON).
    #[arg(long)]
    openshift_schema: Option<PathBuf>,
    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ConvertConfig {
        ConvertConfig {
            kedge_spec: self.kedge_spec.clone(),
            kubernetes_schema: self.kubernetes_schema.clone(),
            openshift_schema: self.openshift_schema.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "Conversion failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries only the merged document.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let file = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    let conversion = cli.overrides().or(file).resolve()?;

    let stdout = std::io::stdout();
    conversion.run(BufWriter::new(stdout.lock()))
}
