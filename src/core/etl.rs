use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        let name = self.pipeline.name();
        tracing::info!("🚀 Starting {} pipeline", name);

        tracing::info!("📥 Extracting...");
        let extracted = self.pipeline.extract()?;

        tracing::info!("🔄 Transforming...");
        let transformed = self.pipeline.transform(extracted)?;

        tracing::info!("💾 Loading...");
        let output_path = self.pipeline.load(transformed)?;

        tracing::info!(
            "✅ {} pipeline finished in {:?}, output: {}",
            name,
            started.elapsed(),
            output_path
        );
        Ok(output_path)
    }
}
