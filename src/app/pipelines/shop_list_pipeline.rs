use crate::core::cook_book::parse_cook_book;
use crate::core::shop_list::shop_list_by_dishes;
use crate::core::{ConfigProvider, OutputFormat, Pipeline, RecipeCatalog, ShoppingList, Storage};
use crate::utils::error::{EtlError, Result};
use std::path::Path;

/// Recipe file -> catalog -> shopping list -> exported files.
pub struct ShopListPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ShopListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn formats(&self) -> &[OutputFormat] {
        match self.config.output_formats() {
            [] => &[OutputFormat::Json],
            formats => formats,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ShopListPipeline<S, C> {
    type Extracted = RecipeCatalog;
    type Transformed = ShoppingList;

    fn name(&self) -> &str {
        "shop-list"
    }

    fn extract(&self) -> Result<RecipeCatalog> {
        tracing::debug!("Loading recipes from: {}", self.config.recipes_path());
        let data = self.storage.read_file(self.config.recipes_path())?;
        let catalog = parse_cook_book(data.as_slice())?;

        tracing::info!("Loaded {} recipe(s)", catalog.len());
        Ok(catalog)
    }

    fn transform(&self, catalog: RecipeCatalog) -> Result<ShoppingList> {
        let shop_list =
            shop_list_by_dishes(&catalog, self.config.dishes(), self.config.person_count())?;

        tracing::info!(
            "Shopping list has {} ingredient(s) for {} person(s)",
            shop_list.len(),
            self.config.person_count()
        );
        Ok(shop_list)
    }

    fn load(&self, shop_list: ShoppingList) -> Result<String> {
        let output_dir = Path::new(self.config.output_path());
        let mut written = Vec::new();

        for format in self.formats() {
            let target = output_dir.join(format.file_name());
            let target = target.to_string_lossy().into_owned();
            let data = render_shop_list(&shop_list, *format)?;

            tracing::debug!(
                "Writing {:?} shopping list ({} bytes) to {}",
                format,
                data.len(),
                target
            );
            self.storage.write_file(&target, &data)?;
            written.push(target);
        }

        written.into_iter().next().ok_or_else(|| EtlError::ConfigError {
            message: "no output format selected".to_string(),
        })
    }
}

/// Renders a shopping list in one export format.
pub fn render_shop_list(shop_list: &ShoppingList, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(shop_list)?),
        OutputFormat::Csv => render_delimited(shop_list, b','),
        OutputFormat::Tsv => render_delimited(shop_list, b'\t'),
    }
}

fn render_delimited(shop_list: &ShoppingList, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["ingredient", "quantity", "measure"])?;
    for (name, item) in shop_list {
        let quantity = item.quantity.to_string();
        writer.write_record([name.as_str(), quantity.as_str(), item.measure.as_str()])?;
    }

    writer.into_inner().map_err(|e| EtlError::CsvError(e.into_error().into()))
}
