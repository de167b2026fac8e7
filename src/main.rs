use clap::Parser;
use flow_export::core::ConfigProvider;
use flow_export::utils::error::ErrorSeverity;
use flow_export::utils::{logger, validation::Validate};
use flow_export::{AnySource, CliConfig, ExportEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting flow-export");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let source = AnySource::from_settings(config.source()?)?;
    let storage = LocalStorage::new(config.output_dir());
    let engine =
        ExportEngine::new(source, storage).with_entity_delimiter(config.entity_delimiter());

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let report = engine.plan().await?;
        println!("Project: {}", report.project_name);
        println!(
            "{}: {} intents, {} bytes",
            report.files.lu_name,
            report.intents,
            report.files.lu.len()
        );
        println!(
            "{}: {} templates, {} bytes",
            report.files.lg_name,
            report.templates,
            report.files.lg.len()
        );
        return Ok(());
    }

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Export completed successfully!");
            println!("✅ Export completed successfully!");
            println!("📁 {}", report.lu_path.display());
            println!("📁 {}", report.lg_path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
