use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn recipes_path(&self) -> &str;
    fn dishes(&self) -> &[String];
    fn person_count(&self) -> u32;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
}

/// Extract -> transform -> load. `load` returns the path of the produced output.
pub trait Pipeline {
    type Extracted;
    type Transformed;

    fn name(&self) -> &str;
    fn extract(&self) -> Result<Self::Extracted>;
    fn transform(&self, data: Self::Extracted) -> Result<Self::Transformed>;
    fn load(&self, result: Self::Transformed) -> Result<String>;
}
