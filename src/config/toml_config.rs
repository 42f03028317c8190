use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_dish_names, validate_path, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub recipes: RecipesConfig,
    pub shop_list: ShopListConfig,
    pub merge: Option<MergeConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListConfig {
    pub dishes: Vec<String>,
    pub person_count: u32,
    pub output_path: String,
    #[serde(default)]
    pub output_formats: Vec<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    pub folder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EtlError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECIPES_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("recipes.path", &self.recipes.path)?;
        validate_path("shop_list.output_path", &self.shop_list.output_path)?;
        validate_dish_names("shop_list.dishes", &self.shop_list.dishes)?;

        if let Some(merge) = &self.merge {
            validate_path("merge.folder", &merge.folder)?;
        }

        Ok(())
    }

    /// 取得合併資料夾，未設定 `[merge]` 時回傳錯誤
    pub fn merge_folder(&self) -> Result<&str> {
        let merge = validate_required_field("merge", &self.merge)?;
        Ok(&merge.folder)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn recipes_path(&self) -> &str {
        &self.recipes.path
    }

    fn dishes(&self) -> &[String] {
        &self.shop_list.dishes
    }

    fn person_count(&self) -> u32 {
        self.shop_list.person_count
    }

    fn output_path(&self) -> &str {
        &self.shop_list.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.shop_list.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
