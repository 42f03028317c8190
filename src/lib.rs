pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, ShopListArgs};

pub use app::pipelines::{merge_pipeline::MergePipeline, shop_list_pipeline::ShopListPipeline};
pub use config::cli::LocalStorage;
pub use core::cook_book::{parse_cook_book, read_cook_book};
pub use core::etl::EtlEngine;
pub use core::merge::merge_files;
pub use core::shop_list::shop_list_by_dishes;
pub use utils::error::{EtlError, Result};
