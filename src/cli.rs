use clap::{Parser, Subcommand};

/// Encode build versions and generate SBOMs for OpenSSL artifacts
#[derive(Parser, Debug)]
#[command(name = "openssl-buildmeta")]
#[command(version = "1.0.1")]
#[command(about = "Encode build versions and generate CycloneDX SBOMs for OpenSSL artifacts", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a semantic version with optional FIPS build metadata
    Encode {
        /// Semantic version to encode (MAJOR.MINOR.PATCH)
        version: String,

        /// Encode as a FIPS-certified build
        #[arg(long)]
        fips: bool,

        /// Short git hash of the source commit (required with --fips)
        #[arg(long = "git-hash", value_name = "HASH")]
        git_hash: Option<String>,

        /// Build timestamp, 14-digit YYYYMMDDHHMMSS or RFC 3339
        /// (defaults to the current time)
        #[arg(long, value_name = "TIME")]
        timestamp: Option<String>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode a version string back into its structured metadata
    Decode {
        /// Version string to decode, e.g. "3.4.1+fips.20251013120000.abc12345"
        version: String,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a CycloneDX SBOM document for a build artifact
    Sbom {
        /// Component name, e.g. "openssl"
        name: String,

        /// Component version (a FIPS-encoded suffix is preserved verbatim)
        version: String,

        /// Mark the artifact as a FIPS-certified build
        #[arg(long)]
        fips: bool,

        /// FIPS certificate identifier
        #[arg(long = "cert", value_name = "ID")]
        fips_cert: Option<String>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a config file (overrides auto-discovery)
        #[arg(long, value_name = "PATH")]
        config: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
