//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// stackcfg - Resolve service stack configuration from command-line options
#[derive(Parser, Debug)]
#[command(name = "stackcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the configuration for the given options and print it
    ///
    /// Examples:
    ///   stackcfg resolve --mode developer --php 7.4 --db 10.4
    ///   stackcfg resolve --mode production --with-cron --format yaml
    ///   stackcfg resolve --config stack.yaml --no-varnish
    Resolve(ResolveArgs),

    /// List the operating modes and the sync engines they accept
    Engines {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Output formats for resolved configuration
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Options accepted by `stackcfg resolve`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveArgs {
    /// PHP version
    #[arg(long, value_name = "VERSION")]
    pub php: Option<String>,

    /// Nginx version
    #[arg(long, value_name = "VERSION")]
    pub nginx: Option<String>,

    /// Database version
    #[arg(long, value_name = "VERSION")]
    pub db: Option<String>,

    /// Expose the database port on the host (reserved)
    #[arg(long, value_name = "PORT")]
    pub expose_db_port: Option<String>,

    /// Redis version
    #[arg(long, value_name = "VERSION")]
    pub redis: Option<String>,

    /// Elasticsearch version
    #[arg(long, value_name = "VERSION")]
    pub es: Option<String>,

    /// Node.js version
    #[arg(long, value_name = "VERSION")]
    pub node: Option<String>,

    /// RabbitMQ version
    #[arg(long, value_name = "VERSION")]
    pub rmq: Option<String>,

    /// Selenium version
    #[arg(long, value_name = "VERSION")]
    pub selenium_version: Option<String>,

    /// Selenium image
    #[arg(long, value_name = "IMAGE")]
    pub selenium_image: Option<String>,

    /// Operating mode (developer or production)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// File sync engine
    #[arg(long, value_name = "ENGINE")]
    pub sync_engine: Option<String>,

    /// Enable cron
    #[arg(long)]
    pub with_cron: bool,

    /// Disable Varnish
    #[arg(long)]
    pub no_varnish: bool,

    /// Enable Selenium
    #[arg(long)]
    pub with_selenium: bool,

    /// Disable temporary mounts
    #[arg(long)]
    pub no_tmp_mounts: bool,

    /// Enable Xdebug
    #[arg(long)]
    pub with_xdebug: bool,

    /// Configuration file layered underneath the command-line options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
