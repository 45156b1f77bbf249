use tracing::{debug, warn};

use crate::error::{WikiError, WikiResult};
use crate::response::ApiResponse;

/// Shown in place of the article body when the API returns no extract.
pub const NO_EXTRACT_FOUND: &str = "NO EXTRACT FOUND";

/// Page-id the API uses for a title that does not exist.
pub const MISSING_PAGE_ID: &str = "-1";

/// What a single-title query resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound {
        query: String,
    },
    Disambiguation {
        query: String,
        candidates: Vec<String>,
    },
    /// A disambiguation page with nothing to pick from.
    DisambiguationEmpty {
        query: String,
    },
    Article {
        title: String,
        raw_extract: String,
    },
}

impl Outcome {
    pub fn kind_str(&self) -> &'static str {
        match self {
            Outcome::NotFound { .. } => "not_found",
            Outcome::Disambiguation { .. } => "disambiguation",
            Outcome::DisambiguationEmpty { .. } => "disambiguation_empty",
            Outcome::Article { .. } => "article",
        }
    }
}

/// Decide how to present the response to a query for `query`.
///
/// Only the first page in document order is considered. A response with no
/// pages at all is a parse failure; extra pages are logged and ignored.
pub fn interpret(query: &str, response: &ApiResponse) -> WikiResult<Outcome> {
    let pages = response.pages()?;
    let total = pages.len();
    let (page_id, page) = pages
        .into_iter()
        .next()
        .ok_or_else(|| WikiError::Parse("response contained no pages".into()))?;
    if total > 1 {
        warn!(query, total, page_id = %page_id, "multiple pages returned; using the first");
    }

    if page_id == MISSING_PAGE_ID {
        debug!(query, "page missing");
        return Ok(Outcome::NotFound { query: query.to_string() });
    }

    if page.is_disambiguation() {
        let candidates = page.article_links();
        debug!(query, candidates = candidates.len(), "disambiguation page");
        if candidates.is_empty() {
            return Ok(Outcome::DisambiguationEmpty { query: query.to_string() });
        }
        return Ok(Outcome::Disambiguation {
            query: query.to_string(),
            candidates,
        });
    }

    Ok(Outcome::Article {
        title: page.title.unwrap_or_else(|| query.to_string()),
        raw_extract: page.extract.unwrap_or_else(|| NO_EXTRACT_FOUND.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(v: serde_json::Value) -> ApiResponse {
        serde_json::from_value(v).expect("fixture")
    }

    #[test]
    fn sentinel_page_is_not_found() {
        let r = response(json!({"query": {"pages": {"-1": {}}}}));
        assert_eq!(
            interpret("Nope", &r).unwrap(),
            Outcome::NotFound { query: "Nope".into() }
        );
    }

    #[test]
    fn missing_title_falls_back_to_query() {
        let r = response(json!({"query": {"pages": {"42": {"extract": "x"}}}}));
        assert_eq!(
            interpret("Rust", &r).unwrap(),
            Outcome::Article { title: "Rust".into(), raw_extract: "x".into() }
        );
    }

    #[test]
    fn first_page_wins_in_document_order() {
        let r = response(json!({"query": {"pages": {
            "9": {"title": "Nine", "extract": "a"},
            "1": {"title": "One", "extract": "b"}
        }}}));
        match interpret("q", &r).unwrap() {
            Outcome::Article { title, .. } => assert_eq!(title, "Nine"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_pages_is_a_parse_failure() {
        let r = response(json!({"query": {"pages": {}}}));
        let err = interpret("q", &r).unwrap_err();
        assert!(matches!(err, WikiError::Parse(_)));
    }
}
