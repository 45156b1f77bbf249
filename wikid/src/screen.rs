use tracing::{debug, info};

use wiki_api::{ErrorKind, WikiResult};

use crate::search::Found;

/// What the search screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Searching {
        /// Text in the search bar.
        query: String,
        /// Last error, shown in the article area.
        message: Option<String>,
        error: Option<ErrorKind>,
        in_flight: bool,
    },
    AwaitingSelection {
        query: String,
        candidates: Vec<String>,
    },
    Reading {
        title: String,
        text: String,
    },
}

impl ViewState {
    fn idle(query: String) -> Self {
        ViewState::Searching {
            query,
            message: None,
            error: None,
            in_flight: false,
        }
    }
}

/// A search the caller has to run and report back through
/// [`Screen::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// Search screen state machine.
///
/// Every search gets the next sequence number. Only the completion carrying
/// the latest number is applied; earlier ones are dropped, so a slow response
/// can never overwrite a newer search.
#[derive(Debug)]
pub struct Screen {
    state: ViewState,
    latest_seq: u64,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            state: ViewState::idle(String::new()),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Submit the search bar text. Blank input is ignored, as is a submit
    /// while the screen is not in the search view.
    pub fn submit(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            return None;
        }
        if !matches!(self.state, ViewState::Searching { .. }) {
            debug!(target: "wikid::screen", "submit ignored outside search view");
            return None;
        }
        Some(self.issue(query.to_string()))
    }

    /// Pick the candidate at `index` (0-based) and search for it.
    pub fn select(&mut self, index: usize) -> Option<SearchTicket> {
        let title = match &self.state {
            ViewState::AwaitingSelection { candidates, .. } => candidates.get(index)?.clone(),
            _ => return None,
        };
        Some(self.issue(title))
    }

    /// Leave the picker without searching. The search bar keeps the query
    /// that led to the disambiguation page.
    pub fn cancel(&mut self) -> bool {
        match &self.state {
            ViewState::AwaitingSelection { query, .. } => {
                self.state = ViewState::idle(query.clone());
                true
            }
            _ => false,
        }
    }

    /// Leave the article view.
    pub fn back(&mut self) -> bool {
        match &self.state {
            ViewState::Reading { title, .. } => {
                self.state = ViewState::idle(title.clone());
                true
            }
            _ => false,
        }
    }

    /// Apply the result of search `seq`. Returns false when the result is
    /// stale and was dropped.
    pub fn complete(&mut self, seq: u64, result: WikiResult<Found>) -> bool {
        if seq != self.latest_seq {
            info!(
                target: "wikid::screen",
                seq,
                latest = self.latest_seq,
                "discarding stale search result"
            );
            return false;
        }
        let query = match &self.state {
            ViewState::Searching {
                query,
                in_flight: true,
                ..
            } => query.clone(),
            _ => return false,
        };

        self.state = match result {
            Ok(Found::Article { title, text }) => ViewState::Reading { title, text },
            Ok(Found::Candidates { query, titles }) => ViewState::AwaitingSelection {
                query,
                candidates: titles,
            },
            Err(e) => {
                info!(target: "wikid::screen", seq, kind = ?e.kind(), "search failed: {e}");
                ViewState::Searching {
                    query,
                    message: Some(e.display_text()),
                    error: Some(e.kind()),
                    in_flight: false,
                }
            }
        };
        true
    }

    fn issue(&mut self, query: String) -> SearchTicket {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        info!(target: "wikid::screen", seq, query = %query, "search submitted");
        self.state = ViewState::Searching {
            query: query.clone(),
            message: None,
            error: None,
            in_flight: true,
        };
        SearchTicket { seq, query }
    }
}
