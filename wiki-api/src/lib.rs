pub mod error;
pub mod interpret;
pub mod limits;
pub mod request;
pub mod response;

pub use error::{ErrorKind, WikiError, WikiResult};
pub use interpret::{interpret, Outcome, NO_EXTRACT_FOUND};
pub use request::{build_query_url, API_URL, USER_AGENT};
pub use response::{parse_response, ApiResponse, Link, Page};
