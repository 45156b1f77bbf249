/// Characters escaped in a `titles=` value, in the order they are applied.
/// `%` must stay first so that the escapes produced for the rest are never
/// escaped a second time.
pub const ENCODE_TABLE: &[(char, &str)] = &[
    ('%', "%25"),
    (' ', "%20"),
    ('!', "%21"),
    ('"', "%22"),
    ('#', "%23"),
    ('$', "%24"),
    ('&', "%26"),
    ('\'', "%27"),
    ('(', "%28"),
    (')', "%29"),
    ('*', "%2A"),
    ('+', "%2B"),
    (',', "%2C"),
    ('/', "%2F"),
    (':', "%3A"),
    (';', "%3B"),
    ('=', "%3D"),
    ('?', "%3F"),
    ('@', "%40"),
    ('[', "%5B"),
    ('\\', "%5C"),
    (']', "%5D"),
    ('^', "%5E"),
    ('`', "%60"),
    ('{', "%7B"),
    ('|', "%7C"),
    ('}', "%7D"),
    ('~', "%7E"),
    ('<', "%3C"),
    ('>', "%3E"),
];

/// Encode free text for use as a query-string value.
///
/// Only the characters in [`ENCODE_TABLE`] are escaped. Letters, digits,
/// `-._` and every non-ASCII character pass through untouched, so a title
/// such as `"Zürich"` reaches the URL layer unescaped.
///
/// Each input character is looked up once, which gives the same result as
/// replacing `%` first and then the rest of the table: none of the escapes
/// contain a character that is itself in the table except `%`.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match escape_for(c) {
            Some(esc) => out.push_str(esc),
            None => out.push(c),
        }
    }
    out
}

fn escape_for(c: char) -> Option<&'static str> {
    if !c.is_ascii() {
        return None;
    }
    ENCODE_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}
