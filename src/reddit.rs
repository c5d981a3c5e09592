use anyhow::{bail, Result};
use serde::Deserialize;

const REDDIT_ORIGIN: &str = "https://reddit.com";
const USER_AGENT: &str = "Reddit Rising Checker v1.0";

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct Child {
    data: Submission,
}

// The listing returns more fields than this; we only keep the ones that
// end up in the summary.
#[derive(Deserialize)]
struct Submission {
    title: String,
    permalink: String,
    author: String,
    score: i64,
    url: String,
}

pub struct RisingPost {
    pub message: String,
    pub image_url: String,
}

// Subreddit name is given without slashes, e.g. "pics".
pub fn get_rising_submission(subreddit: &str) -> Result<RisingPost> {
    let url = format!("https://www.reddit.com/r/{subreddit}/rising.json?limit=1");

    let client = reqwest::blocking::Client::new();

    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()?
        .error_for_status()?;

    let listing = response.json::<Listing>()?;

    summarize(listing)
}

fn summarize(listing: Listing) -> Result<RisingPost> {
    let Some(child) = listing.data.children.into_iter().next() else {
        bail!("Listing contained no rising submissions");
    };

    let submission = child.data;

    let permalink = format!("{}{}", REDDIT_ORIGIN, submission.permalink);

    let message = format!(
        "[{}]({})\nby **{}**\n**{}** points",
        submission.title,
        permalink,
        submission.author,
        format_score(submission.score)
    );

    Ok(RisingPost {
        message,
        image_url: submission.url,
    })
}

fn format_score(score: i64) -> String {
    let digits = score.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if score < 0 {
        grouped.insert(0, '-');
    }

    grouped
}
