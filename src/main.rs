use batcuc_engine::domain::report::AnalysisReport;
use batcuc_engine::utils::error::{EngineError, ErrorSeverity};
use batcuc_engine::utils::{logger, validation::Validate};
use batcuc_engine::{AnalysisEngine, CliConfig, EngineConfig};
use clap::Parser;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOutput<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    holder_age: Option<i32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting batcuc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
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

fn run(config: &CliConfig) -> Result<String, EngineError> {
    let engine_config = match &config.config {
        Some(path) => {
            let loaded = EngineConfig::from_file(path)?;
            loaded.validate()?;
            tracing::info!(path = %path, "loaded engine configuration");
            loaded
        }
        None => EngineConfig::default(),
    };

    // --purpose wins over the configured default
    let purpose = config.purpose.as_deref().or(engine_config.default_purpose());
    let fallback = engine_config.analysis.purpose_fallback;

    let engine = AnalysisEngine::new(engine_config.clone());
    let report = if fallback {
        engine.analyze_or_fallback(&config.number, config.kind, purpose)?
    } else {
        engine.analyze(&config.number, config.kind, purpose)?
    };

    let as_of = config
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let holder_age = report.id_card.as_ref().and_then(|card| card.age_on(as_of));

    let output = CliOutput {
        report: &report,
        holder_age,
    };
    let json = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}
