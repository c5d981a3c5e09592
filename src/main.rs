use anyhow::Result;

mod config;
mod discord;
mod reddit;

const SUBREDDIT: &str = "pics";

fn main() -> Result<()> {
    let config = config::get_config()?;

    println!("Connecting to Reddit...");
    let post = reddit::get_rising_submission(SUBREDDIT)?;

    println!("Data received. Sending webhook...");
    discord::post_message(&config.webhook_url, &post)?;

    Ok(())
}
