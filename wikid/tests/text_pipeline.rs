use percent_encoding::percent_decode_str;
use wikid::text::{encode, normalize, style, style_lines, StyledLine};

#[test]
fn encode_escapes_percent_then_table() {
    assert_eq!(encode("100% sure (yes)"), "100%25%20sure%20%28yes%29");
}

#[test]
fn encode_is_not_idempotent_on_percent() {
    let x = "50%";
    assert_ne!(encode(&encode(x)), encode(x));
}

#[test]
fn encoded_ascii_decodes_back() {
    let samples = [
        "AT&T",
        "C++",
        "What? Why! (film)",
        "a/b:c;d=e@f[g]h\\i^j`k{l|m}n~o<p>q\"r'#s$t*u,v",
        "100%",
    ];
    for s in samples {
        let decoded = percent_decode_str(&encode(s)).decode_utf8_lossy().to_string();
        assert_eq!(decoded, s);
    }
}

#[test]
fn normalize_replaces_every_mapped_character() {
    assert_eq!(normalize("café — naïve"), "cafe  -  naive");
    assert_eq!(normalize("Ångström\u{2009}unit"), "Angstrom unit");
}

#[test]
fn style_matches_expected_markup() {
    assert_eq!(
        style("== A ==\ntext\n=== B ===", "ff0000"),
        "#ff0000 == A ==#\ntext\n#ff0000 === B ===#"
    );
}

#[test]
fn style_lines_classifies_each_line() {
    let lines = style_lines("intro\n== History ==\n=== Early ===\n==== Deep ====");
    assert_eq!(
        lines,
        vec![
            StyledLine::Plain("intro".into()),
            StyledLine::Heading { level: 2, text: "History".into() },
            StyledLine::Heading { level: 3, text: "Early".into() },
            StyledLine::Plain("==== Deep ====".into()),
        ]
    );
}
