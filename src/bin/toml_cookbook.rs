use anyhow::Context;
use clap::Parser;
use cookbook_etl::config::toml_config::TomlConfig;
use cookbook_etl::core::ConfigProvider;
use cookbook_etl::utils::{logger, validation::Validate};
use cookbook_etl::{read_cook_book, EtlEngine, LocalStorage, MergePipeline, ShopListPipeline};

#[derive(Parser)]
#[command(name = "toml_cookbook")]
#[command(about = "Runs the cook book, shopping list and merge tasks from a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "cookbook.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Skip the merge task even when [merge] is configured
    #[arg(long)]
    skip_merge: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        return perform_dry_run(&config);
    }

    // 任務一：食譜目錄
    let catalog = read_cook_book(config.recipes_path())?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    // 任務二：購物清單
    let shop_list_config = config.clone();
    let pipeline = ShopListPipeline::new(LocalStorage::default(), shop_list_config);
    let output_path = EtlEngine::new(pipeline).run()?;
    println!("✅ Shopping list saved to: {}", output_path);

    // 任務三：檔案合併
    match &config.merge {
        Some(merge) if !args.skip_merge => {
            let output_path = EtlEngine::new(MergePipeline::new(&merge.folder)).run()?;
            println!("✅ Merged file saved to: {}", output_path);
        }
        _ => tracing::info!("Merge task skipped"),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Recipes: {}", config.recipes_path());
    println!("  Dishes: {}", config.dishes().join(", "));
    println!("  Persons: {}", config.person_count());
    println!("  Output: {}", config.output_path());

    match config.merge_folder() {
        Ok(folder) if !args.skip_merge => println!("  Merge folder: {}", folder),
        _ => println!("  Merge: disabled"),
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");

    let catalog = read_cook_book(config.recipes_path())?;
    println!("  📖 {} recipe(s) available", catalog.len());

    for dish in config.dishes() {
        match catalog.get(dish) {
            Some(ingredients) => println!("  ✅ {} ({} ingredient(s))", dish, ingredients.len()),
            None => println!("  ❌ {} (no recipe)", dish),
        }
    }

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}
