mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_generation;
mod shared;
mod version_encoding;

use adapters::outbound::clock::SystemClock;
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::CycloneDxFormatter;
use application::dto::{EncodeVersionRequest, SbomRequest};
use application::read_models::DecodedVersionView;
use application::use_cases::{DecodeVersionUseCase, EncodeVersionUseCase, GenerateSbomUseCase};
use cli::{Args, Command};
use config::ConfigFile;
use ports::outbound::{OutputPresenter, SbomFormatter};
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    match args.command {
        Command::Encode {
            version,
            fips,
            git_hash,
            timestamp,
            output,
        } => {
            let use_case = EncodeVersionUseCase::new(SystemClock::new());
            let request = EncodeVersionRequest::new(version, fips, git_hash, timestamp);
            let encoded = use_case.execute(request)?;
            present(&format!("{}\n", encoded), output.as_deref())
        }

        Command::Decode { version, output } => {
            let decoded = DecodeVersionUseCase::new().execute(&version)?;
            let view = DecodedVersionView::from_decoded(&decoded);
            let json = serde_json::to_string_pretty(&view)?;
            present(&format!("{}\n", json), output.as_deref())
        }

        Command::Sbom {
            name,
            version,
            fips,
            fips_cert,
            output,
            config,
        } => {
            let config_file = load_sbom_config(config.as_deref().map(Path::new))?;
            let (fips_cert, output) = apply_config_defaults(fips_cert, output, &config_file);

            let use_case = GenerateSbomUseCase::new();
            let request = SbomRequest::new(name, version, fips, fips_cert);
            let document = use_case.execute(request)?;

            let formatter = CycloneDxFormatter::new();
            let json = formatter.format(&document)?;
            present(&format!("{}\n", json), output.as_deref())
        }
    }
}

/// Loads the config for the sbom subcommand: an explicit --config path, or
/// auto-discovery in the working directory, or the built-in defaults.
fn load_sbom_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        eprintln!("📄 Using config file: {}", path.display());
        return config::load_config_from_path(path);
    }

    let working_dir = std::env::current_dir()?;
    match config::discover_config(&working_dir)? {
        Some(config_file) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                working_dir.join("openssl-buildmeta.config.yml").display()
            );
            Ok(config_file)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Fills unset CLI options from config values. Explicit flags always win.
fn apply_config_defaults(
    fips_cert: Option<String>,
    output: Option<String>,
    config: &ConfigFile,
) -> (Option<String>, Option<String>) {
    (
        fips_cert.or_else(|| config.fips_certificate.clone()),
        output.or_else(|| config.output.clone()),
    )
}

fn present(content: &str, output: Option<&str>) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(content)
}
