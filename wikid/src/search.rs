use tracing::{debug, info, warn};

use wiki_api::{build_query_url, interpret, parse_response, Outcome, WikiError, WikiResult};
use wiki_text::{normalize, style};

use crate::client::WikiClient;

/// Bytes of a bad body written to the log.
const BODY_LOG_SNIPPET: usize = 512;

/// A search that produced something to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// Display-ready article: normalized and heading-styled.
    Article { title: String, text: String },
    /// Disambiguation page with its main-namespace candidates.
    Candidates { query: String, titles: Vec<String> },
}

/// Run one query end to end: build the URL, fetch, parse, interpret, style.
pub async fn search(client: &WikiClient, query: &str, accent: &str) -> WikiResult<Found> {
    let url = build_query_url(&client.api_url, query);
    debug!(target: "wikid::search", %url, "request built");

    let resp = client.get(&url).await.map_err(WikiError::from)?;
    if !(200..300).contains(&resp.code) {
        warn!(target: "wikid::search", code = resp.code, query, "unexpected status");
        return Err(WikiError::Http(resp.code));
    }

    let parsed = parse_response(&resp.body).map_err(|e| {
        let end = resp.body.len().min(BODY_LOG_SNIPPET);
        debug!(
            target: "wikid::search",
            body = %String::from_utf8_lossy(&resp.body[..end]),
            "response was not valid json"
        );
        e
    })?;
    let outcome = interpret(query, &parsed)?;
    info!(target: "wikid::search", query, outcome = outcome.kind_str(), "query resolved");
    present(outcome, accent)
}

/// Turn an interpreted response into something navigable. Not-found and
/// empty disambiguation pages end the search with an error.
pub fn present(outcome: Outcome, accent: &str) -> WikiResult<Found> {
    match outcome {
        Outcome::NotFound { query } => Err(WikiError::NotFound(query)),
        Outcome::DisambiguationEmpty { query } => Err(WikiError::DisambiguationEmpty(query)),
        Outcome::Disambiguation { query, candidates } => Ok(Found::Candidates {
            query,
            titles: candidates,
        }),
        Outcome::Article { title, raw_extract } => Ok(Found::Article {
            title,
            text: style(&normalize(&raw_extract), accent),
        }),
    }
}
