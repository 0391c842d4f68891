use anyhow::Context;
use batcuc_engine::core::batch;
use batcuc_engine::utils::{logger, validation::Validate};
use batcuc_engine::{AnalysisEngine, BatchCliConfig, EngineConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = BatchCliConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            EngineConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => EngineConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let mut options = match &config.batch {
        Some(_) => config.batch_options()?,
        None => batch::BatchOptions {
            kind: config.default_kind()?,
            default_purpose: config.analysis.default_purpose.clone(),
            purpose_fallback: config.analysis.purpose_fallback,
            ..batch::BatchOptions::default()
        },
    };
    if let Some(kind) = args.kind {
        tracing::info!("🔧 Number kind overridden to: {}", kind.key());
        options.kind = kind;
    }

    let (input_path, output_path) = match args.resolve_paths(&config) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        println!("🔍 Dry run");
        println!("  input:          {}", input_path);
        println!("  output:         {}", output_path);
        println!("  kind:           {}", options.kind.key());
        println!("  number column:  {}", options.number_column);
        println!(
            "  purpose column: {}",
            options.purpose_column.as_deref().unwrap_or("-")
        );
        println!(
            "  default purpose: {}",
            options.default_purpose.as_deref().unwrap_or("best of all")
        );
        return Ok(());
    }

    let started = chrono::Utc::now();
    tracing::info!(started_at = %started.to_rfc3339(), input = %input_path, "batch run started");

    let engine = AnalysisEngine::new(config);
    let summary = batch::run_files(&engine, &input_path, &output_path, &options)
        .with_context(|| format!("batch analysis of '{}' failed", input_path))?;

    let elapsed = chrono::Utc::now() - started;
    tracing::info!(elapsed_ms = elapsed.num_milliseconds(), "batch run finished");

    println!("✅ Analyzed {} rows ({} failed)", summary.total, summary.failed);
    println!("📁 Output saved to: {}", output_path);

    Ok(())
}
