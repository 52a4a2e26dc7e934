//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use lexdoc_domain::DocumentType;

/// LexDoc CLI - Analyze legal documents and draft agreements from templates.
#[derive(Debug, Parser)]
#[command(name = "lexdoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LEXDOC_CONFIG")]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare text only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a document image, falling back to a demo result
    Analyze(AnalyzeArgs),

    /// Generate a document from a template
    Generate(GenerateArgs),

    /// Show the form fields for a document type
    Fields(FieldsArgs),

    /// Check whether a sample text looks like a given document type
    Check(CheckArgs),

    /// Probe the backend health endpoint
    Health(HealthArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Image path or data: URI
    pub image: String,

    /// AI model tag (overrides the profile)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Backend URL (overrides the profile)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Skip the backend and show a demo result
    #[arg(long)]
    pub demo: bool,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Document type
    #[arg(value_enum)]
    pub document_type: TypeArg,

    /// Field value (format: name=value), may be repeated
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// JSON or TOML file of field values
    #[arg(long)]
    pub values: Option<String>,

    /// Sample document whose fields define the form
    #[arg(long)]
    pub sample: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Ask the backend first, rendering locally only on failure
    #[arg(long)]
    pub remote: bool,

    /// Generate even when required fields are blank
    #[arg(long)]
    pub allow_missing: bool,
}

/// Arguments for the fields command.
#[derive(Debug, Parser)]
pub struct FieldsArgs {
    /// Document type
    #[arg(value_enum)]
    pub document_type: TypeArg,

    /// Sample document to derive the fields from
    #[arg(long)]
    pub sample: Option<String>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Document type
    #[arg(value_enum)]
    pub document_type: TypeArg,

    /// Sample document text file
    pub sample: String,
}

/// Arguments for the health command.
#[derive(Debug, Parser)]
pub struct HealthArgs {
    /// Backend URL (overrides the profile)
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Backend URL
        #[arg(short, long)]
        url: String,
        /// AI model tag
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Document type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeArg {
    /// Residential lease
    Rental,
    /// Non-disclosure agreement
    Nda,
    /// Service agreement
    Service,
    /// Employment contract
    Employment,
    /// Purchase agreement
    Purchase,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TypeArg> for DocumentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Rental => DocumentType::Rental,
            TypeArg::Nda => DocumentType::Nda,
            TypeArg::Service => DocumentType::Service,
            TypeArg::Employment => DocumentType::Employment,
            TypeArg::Purchase => DocumentType::Purchase,
        }
    }
}
