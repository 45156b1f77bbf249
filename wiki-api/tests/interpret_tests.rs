use serde_json::json;
use wiki_api::{interpret, parse_response, ErrorKind, Outcome, WikiError, NO_EXTRACT_FOUND};

fn parse(v: serde_json::Value) -> wiki_api::ApiResponse {
    parse_response(v.to_string().as_bytes()).expect("valid fixture")
}

#[test]
fn sentinel_page_id_is_not_found() {
    let r = parse(json!({"batchcomplete": "", "query": {"pages": {"-1": {}}}}));
    let out = interpret("Qwxzy", &r).unwrap();
    assert_eq!(out, Outcome::NotFound { query: "Qwxzy".into() });
    assert_eq!(out.kind_str(), "not_found");
}

#[test]
fn disambiguation_keeps_only_main_namespace_links() {
    let r = parse(json!({"query": {"pages": {"123": {
        "title": "Mercury",
        "pageprops": {"disambiguation": ""},
        "links": [{"ns": 0, "title": "X"}, {"ns": 14, "title": "Category:Y"}]
    }}}}));
    assert_eq!(
        interpret("Mercury", &r).unwrap(),
        Outcome::Disambiguation { query: "Mercury".into(), candidates: vec!["X".into()] }
    );
}

#[test]
fn disambiguation_keeps_order_and_duplicates_but_drops_empty_titles() {
    let r = parse(json!({"query": {"pages": {"7": {
        "pageprops": {"disambiguation": ""},
        "links": [
            {"ns": 0, "title": "B"},
            {"ns": 0, "title": ""},
            {"ns": 0},
            {"ns": 0, "title": "A"},
            {"ns": 0, "title": "B"}
        ]
    }}}}));
    match interpret("q", &r).unwrap() {
        Outcome::Disambiguation { candidates, .. } => assert_eq!(candidates, vec!["B", "A", "B"]),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn disambiguation_without_candidates_is_distinct() {
    let r = parse(json!({"query": {"pages": {"7": {
        "title": "Thing",
        "pageprops": {"disambiguation": ""},
        "links": [{"ns": 4, "title": "Wikipedia:Disambiguation"}]
    }}}}));
    let out = interpret("Thing", &r).unwrap();
    assert_eq!(out, Outcome::DisambiguationEmpty { query: "Thing".into() });
    assert_eq!(out.kind_str(), "disambiguation_empty");
}

#[test]
fn other_pageprops_do_not_mark_disambiguation() {
    let r = parse(json!({"query": {"pages": {"5": {
        "title": "Rust (programming language)",
        "extract": "Rust is a language.",
        "pageprops": {"wikibase_item": "Q575650"},
        "links": [{"ns": 0, "title": "C++"}]
    }}}}));
    assert_eq!(
        interpret("rust", &r).unwrap(),
        Outcome::Article {
            title: "Rust (programming language)".into(),
            raw_extract: "Rust is a language.".into()
        }
    );
}

#[test]
fn absent_extract_uses_sentinel_text() {
    let r = parse(json!({"query": {"pages": {"5": {"title": "Stub"}}}}));
    match interpret("Stub", &r).unwrap() {
        Outcome::Article { raw_extract, .. } => assert_eq!(raw_extract, NO_EXTRACT_FOUND),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn missing_query_block_is_parse_failure() {
    let r = parse(json!({"batchcomplete": ""}));
    let err = interpret("x", &r).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn api_error_body_is_parse_failure_with_info() {
    let r = parse(json!({"error": {"code": "badvalue", "info": "Unrecognized value"}}));
    let err = interpret("x", &r).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
    assert!(err.to_string().contains("badvalue"));
}

#[test]
fn invalid_json_is_parse_failure() {
    let err = parse_response(b"<html>oops</html>").unwrap_err();
    assert!(matches!(err, WikiError::Parse(_)));
    assert!(err.display_text().starts_with("Error: "));
}
