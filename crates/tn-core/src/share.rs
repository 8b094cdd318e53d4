//! Share link for the finish screen.

use url::Url;

/// Message posted when sharing a finished run.
pub const SHARE_MESSAGE: &str =
    "I just became a Certified Trapper on Trap Net by Drosera Network! \u{1f6e1}\u{fe0f}";

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

/// Build a tweet-intent URL for `page_url`.
///
/// An empty `page_url` leaves the `url` parameter out.
pub fn share_link(page_url: &str) -> Result<Url, url::ParseError> {
    let mut params = vec![("text", SHARE_MESSAGE)];
    if !page_url.is_empty() {
        Url::parse(page_url)?;
        params.push(("url", page_url));
    }
    Url::parse_with_params(TWEET_INTENT, &params)
}
