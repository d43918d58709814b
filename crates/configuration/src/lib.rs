use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, ServerConfig, StoreConfig};

/// Loads the service configuration.
///
/// This function is the primary entry point for this crate. It layers an
/// optional `depot.toml` file with `DEPOT_*` environment variables (double
/// underscore as section separator, e.g. `DEPOT_STORE__URL`), deserializes
/// the result into our strongly-typed `Config` struct, and validates it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `depot.toml`, if present.
        .add_source(config::File::with_name("depot").required(false))
        // Environment variables take precedence over the file.
        .add_source(config::Environment::with_prefix("DEPOT").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
