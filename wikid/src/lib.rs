pub mod client;
pub mod config;
pub mod screen;
pub mod search;
pub mod session;
pub mod ui;

pub use wiki_api as api;
pub use wiki_text as text;
