use clap::Parser;
use product_sort::utils::{logger, validation::Validate};
use product_sort::{
    render, BuiltinCatalog, CatalogSource, CliConfig, NameComparator, Result, SortEngine,
    TomlCatalog,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting product-sort");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let outcome = match &config.catalog {
        Some(path) => run(TomlCatalog::new(path), &config),
        None => run(BuiltinCatalog, &config),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Sort failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run<S: CatalogSource>(source: S, config: &CliConfig) -> Result<()> {
    let engine = SortEngine::new(source, NameComparator);
    let items = engine.run()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&items, config.format, &mut out)?;

    tracing::info!("✅ Printed {} items", items.len());
    Ok(())
}
