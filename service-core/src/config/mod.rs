use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;

/// Bind address used when `BIND_HOST` is not set. Plain `HOST` is left alone
/// since some shells export it as the machine name.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Load service settings from layered sources.
///
/// Later sources win:
/// 1. `defaults` supplied by the service (plus `bind_host`)
/// 2. an optional `configuration.{yaml,toml,json}` in the working directory
/// 3. process environment (after `.env` is applied), unprefixed, so `PORT`
///    maps to `port` and `MONGO_URI` to `mongo_uri`
pub fn load<T: DeserializeOwned>(defaults: &[(&str, &str)]) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let mut builder = Cfg::builder().set_default("bind_host", DEFAULT_BIND_HOST)?;
    for (key, value) in defaults {
        builder = builder.set_default(*key, *value)?;
    }

    let config = builder
        .add_source(File::with_name("configuration").required(false))
        .add_source(Environment::default())
        .build()?;

    Ok(config.try_deserialize()?)
}
