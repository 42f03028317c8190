use clap::Parser;
use cookbook_etl::utils::error::ErrorSeverity;
use cookbook_etl::utils::{logger, validation::Validate};
use cookbook_etl::{
    read_cook_book, CliConfig, Command, EtlEngine, EtlError, LocalStorage, MergePipeline,
    ShopListPipeline,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cookbook-etl CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        tracing::error!(
            "❌ Task failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

fn run(command: Command) -> Result<(), EtlError> {
    match command {
        Command::CookBook { recipes } => {
            let catalog = read_cook_book(&recipes)?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::ShopList(args) => {
            args.validate()?;
            let pipeline = ShopListPipeline::new(LocalStorage::default(), args);
            let output_path = EtlEngine::new(pipeline).run()?;
            println!("✅ Shopping list saved to: {}", output_path);
        }
        Command::Merge { folder } => {
            let output_path = EtlEngine::new(MergePipeline::new(folder)).run()?;
            println!("✅ Merged file saved to: {}", output_path);
        }
    }
    Ok(())
}

fn exit_code(error: &EtlError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
