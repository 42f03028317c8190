pub mod cook_book;
pub mod etl;
pub mod merge;
pub mod shop_list;

pub use crate::domain::model::{
    FileLineCount, IngredientRecord, OutputFormat, RecipeCatalog, ShoppingItem, ShoppingList,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
