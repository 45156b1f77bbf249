use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{WikiError, WikiResult};

/// Top level of an `action=query` response. Only the fields the reader
/// needs are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub query: Option<QueryBlock>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryBlock {
    /// page-id -> page, in document order.
    pub pages: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub pageprops: Option<Map<String, Value>>,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Link {
    pub ns: i64,
    #[serde(default)]
    pub title: Option<String>,
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.contains_key("disambiguation"))
    }

    /// Main-namespace link titles in order of appearance. Empty titles are
    /// dropped; repeated links are kept.
    pub fn article_links(&self) -> Vec<String> {
        self.links
            .iter()
            .flatten()
            .filter(|l| l.ns == 0)
            .filter_map(|l| l.title.as_deref())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl ApiResponse {
    /// The page-id/page pairs of the response, in document order.
    pub fn pages(&self) -> WikiResult<Vec<(String, Page)>> {
        if let Some(err) = &self.error {
            return Err(WikiError::Parse(format!(
                "api error {}: {}",
                err.code, err.info
            )));
        }
        let block = self
            .query
            .as_ref()
            .ok_or_else(|| WikiError::Parse("missing query.pages".into()))?;
        block
            .pages
            .iter()
            .map(|(id, v)| {
                let page = Page::deserialize(v)
                    .map_err(|e| WikiError::Parse(format!("page {id}: {e}")))?;
                Ok((id.clone(), page))
            })
            .collect()
    }
}

/// Parse a raw response body.
pub fn parse_response(body: &[u8]) -> WikiResult<ApiResponse> {
    Ok(serde_json::from_slice(body)?)
}
