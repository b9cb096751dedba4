use crate::codegen;
use crate::collector::Collector;
use crate::config::{Config, ResolvedConfig};
use crate::error::EmbedError;
use crate::registry::Bundle;
use tracing::info;

/// Collect and encode everything a resolved config points at.
pub fn build_bundle(config: &ResolvedConfig) -> Result<Bundle, EmbedError> {
    let collection = Collector::from_config(config).collect(&config.files)?;
    let bundle = Bundle::build(&collection, config)?;

    let stats = bundle.stats();
    info!(
        files = stats.file_count,
        dirs = stats.dir_count,
        raw_bytes = stats.raw_bytes,
        encoded_bytes = stats.encoded_bytes,
        "bundle built"
    );

    Ok(bundle)
}

/// Run a whole generation pass and return the generated source.
///
/// Nothing is written anywhere; the caller decides where the bytes go.
pub fn generate(config: &Config) -> Result<Vec<u8>, EmbedError> {
    let resolved = config.resolve()?;
    let bundle = build_bundle(&resolved)?;
    let source = codegen::render(&bundle, &resolved)?;
    Ok(source.into_bytes())
}
