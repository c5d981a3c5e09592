use anyhow::{Context, Result};

pub struct Config {
    pub webhook_url: String,
}

pub fn get_config() -> Result<Config> {
    let webhook_url =
        std::env::var("WEBHOOK").context("WEBHOOK environment variable must be set")?;

    Ok(Config { webhook_url })
}
