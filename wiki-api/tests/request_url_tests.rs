use wiki_api::request::{build_query_url, API_URL, QUERY_PARAMS, USER_AGENT};

#[test]
fn url_matches_wire_contract() {
    let url = build_query_url(API_URL, "Paris");
    assert_eq!(
        url,
        "https://en.wikipedia.org/w/api.php?action=query&format=json&redirects=1&prop=extracts|pageprops|links&explaintext=true&pllimit=60&titles=Paris"
    );
}

#[test]
fn title_is_encoded_and_appended_last() {
    let url = build_query_url(API_URL, "AT&T (company)");
    assert!(url.ends_with("&titles=AT%26T%20%28company%29"));
    // fixed params are never touched by the title encoder
    assert!(url.contains("prop=extracts|pageprops|links"));
}

#[test]
fn params_are_in_wire_order() {
    let keys: Vec<&str> = QUERY_PARAMS.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["action", "format", "redirects", "prop", "explaintext", "pllimit"]);
}

#[test]
fn user_agent_identifies_the_app() {
    assert!(USER_AGENT.starts_with("MPOS-WikipediaApp/1.0 ("));
}
