use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-sort")]
#[command(about = "Sort a product catalog by name, ignoring case")]
pub struct CliConfig {
    /// TOML catalog to sort instead of the built-in product list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format for the sorted items
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
        }
        Ok(())
    }
}
