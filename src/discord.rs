use crate::reddit::RisingPost;
use anyhow::Result;
use serde_json::{json, Value};

// A rejected delivery (non-2xx) is not an error; the status code is printed
// either way.
pub fn post_message(webhook_url: &str, post: &RisingPost) -> Result<()> {
    let client = reqwest::blocking::Client::new();

    let response = client
        .post(webhook_url)
        .json(&build_payload(&post.message, &post.image_url))
        .send()?;

    println!("{}", response.status().as_u16());

    Ok(())
}

fn build_payload(message: &str, image_url: &str) -> Value {
    json!({
        "username": "Rising Posts",
        "embeds": [
            {
                "title": "Top Rising Post",
                "color": 102204,
                "description": message,
                "thumbnail": { "url": image_url },
                "footer": { "text": "Powered by Elf Magic™" }
            }
        ]
    })
}
