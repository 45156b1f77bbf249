use wiki_text::encode;

pub const API_URL: &str = "https://en.wikipedia.org/w/api.php";

pub const USER_AGENT: &str =
    "MPOS-WikipediaApp/1.0 (https://github.com/quasikili/MPOS-Wikipedia; kili@quasikili.com)";

/// Fixed parameters sent ahead of `titles=` on every query, in wire order.
pub const QUERY_PARAMS: &[(&str, &str)] = &[
    ("action", "query"),
    ("format", "json"),
    ("redirects", "1"),
    ("prop", "extracts|pageprops|links"),
    ("explaintext", "true"),
    ("pllimit", "60"),
];

/// Build the GET URL for a single-title query against `base`.
/// The title is escaped with [`wiki_text::encode`] and appended last.
pub fn build_query_url(base: &str, title: &str) -> String {
    let mut url = String::with_capacity(base.len() + 128 + title.len());
    url.push_str(base);
    url.push('?');
    for (k, v) in QUERY_PARAMS {
        url.push_str(k);
        url.push('=');
        url.push_str(v);
        url.push('&');
    }
    url.push_str("titles=");
    url.push_str(&encode(title));
    url
}
