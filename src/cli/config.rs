use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Match form fields on a page snapshot and fill them from a profile"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append per-element fill decisions to this JSONL file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a page snapshot from a profile
    Fill {
        /// Page snapshot JSON
        #[arg(long)]
        page: String,

        /// Profile file (JSON or YAML); falls back to the config file
        #[arg(long)]
        profile: Option<String>,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show which field each control on a page would be matched to
    Match {
        /// Page snapshot JSON
        #[arg(long)]
        page: String,
    },

    /// List the field catalog
    Fields,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    pub profile: Option<String>,

    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            profile: None,
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Settings for a fill after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillSettings {
    pub profile: Option<String>,
    pub format: String,
    pub trace: Option<String>,
}

/// CLI > config > defaults.
pub fn resolve_fill_settings(
    config: &AppConfig,
    profile: Option<&str>,
    format: Option<&str>,
    trace: Option<&str>,
) -> FillSettings {
    FillSettings {
        profile: profile
            .map(|p| p.to_string())
            .or_else(|| config.fill.profile.clone()),
        format: format
            .map(|f| f.to_string())
            .unwrap_or_else(|| config.fill.format.clone()),
        trace: trace
            .map(|t| t.to_string())
            .or_else(|| config.trace.path.clone()),
    }
}
