use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Code points rewritten to ASCII before an extract is displayed.
///
/// Every replacement is plain ASCII, so no output ever contains a character
/// from the left column and the order of application does not matter.
pub const NORMALIZE_TABLE: &[(char, &str)] = &[
    // dashes
    ('\u{2013}', "-"),
    ('\u{2014}', " - "),
    // quotes and primes
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2032}', "'"),
    ('\u{2033}', "\""),
    // spaces
    ('\u{00A0}', " "),
    ('\u{2009}', " "),
    ('\u{200A}', " "),
    // Latin-1 lowercase
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('ß', "ss"),
    // Latin-1 uppercase
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "A"),
    ('Æ', "AE"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ø', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ý', "Y"),
    // macrons
    ('ā', "a"),
    ('Ā', "A"),
    ('ē', "e"),
    ('Ē', "E"),
    ('ī', "i"),
    ('Ī', "I"),
    ('ō', "o"),
    ('Ō', "O"),
    ('ū', "u"),
    ('Ū', "U"),
    // symbols
    ('\u{2022}', "*"),
    ('\u{2026}', "..."),
    ('\u{00B0}', " deg"),
    ('\u{00D7}', "x"),
    ('\u{00F7}', "/"),
    ('\u{00A5}', "JPY"),
];

static LOOKUP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| NORMALIZE_TABLE.iter().copied().collect());

/// Replace every mapped code point with its ASCII approximation.
/// Characters outside the table (other scripts included) are kept as-is.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        match LOOKUP.get(&c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}
