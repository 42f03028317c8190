pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, Command, ShopListArgs};

#[cfg(feature = "cli")]
mod args {
    use crate::core::{ConfigProvider, OutputFormat};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_dish_names, validate_path, Validate};
    use clap::{Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "cookbook-etl")]
    #[command(about = "Recipe catalog, shopping list and file merge tool")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Parse a recipe file and print the catalog as JSON
        CookBook {
            #[arg(long, default_value = "files/recipes.txt")]
            recipes: String,
        },
        /// Build a shopping list for the given dishes
        ShopList(ShopListArgs),
        /// Merge every file of a folder into merged.txt, shortest first
        Merge {
            /// Folder whose files are merged
            folder: PathBuf,
        },
    }

    #[derive(Debug, Clone, Args)]
    pub struct ShopListArgs {
        #[arg(long, default_value = "files/recipes.txt")]
        pub recipes: String,

        /// Dish to cook, repeat for several dishes
        #[arg(long = "dish", required = true)]
        pub dishes: Vec<String>,

        #[arg(long, default_value = "1")]
        pub persons: u32,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long = "format", value_enum, value_delimiter = ',', default_value = "json")]
        pub formats: Vec<OutputFormat>,
    }

    impl ConfigProvider for ShopListArgs {
        fn recipes_path(&self) -> &str {
            &self.recipes
        }

        fn dishes(&self) -> &[String] {
            &self.dishes
        }

        fn person_count(&self) -> u32 {
            self.persons
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }
    }

    impl Validate for ShopListArgs {
        fn validate(&self) -> Result<()> {
            validate_path("recipes", &self.recipes)?;
            validate_path("output_path", &self.output_path)?;
            validate_dish_names("dish", &self.dishes)
        }
    }

}
