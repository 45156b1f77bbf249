/// One display line of an extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledLine {
    Plain(String),
    /// Section heading; `level` is 2 for `== x ==` and 3 for `=== x ===`.
    Heading { level: u8, text: String },
}

impl StyledLine {
    /// Inline markup for this line. Headings become `#<accent> == text ==#`,
    /// which the renderer shows as colored text.
    pub fn to_markup(&self, accent: &str) -> String {
        match self {
            StyledLine::Plain(line) => line.clone(),
            StyledLine::Heading { level, text } => {
                let marks = "=".repeat(*level as usize);
                format!("#{accent} {marks} {text} {marks}#")
            }
        }
    }
}

const MARKERS: &[(u8, &str, &str)] = &[(3, "=== ", " ==="), (2, "== ", " ==")];

/// Classify a single line. Trailing whitespace is dropped first.
///
/// Matching is purely on the literal prefix and suffix. When they overlap
/// (e.g. `"=== ==="`) the heading text is empty.
pub fn classify_line(line: &str) -> StyledLine {
    let line = line.trim_end();
    for (level, prefix, suffix) in MARKERS {
        if line.starts_with(prefix) && line.ends_with(suffix) {
            let text = line
                .get(prefix.len()..line.len().saturating_sub(suffix.len()))
                .unwrap_or("");
            return StyledLine::Heading {
                level: *level,
                text: text.to_string(),
            };
        }
    }
    StyledLine::Plain(line.to_string())
}

pub fn style_lines(text: &str) -> Vec<StyledLine> {
    text.split('\n').map(classify_line).collect()
}

/// Rewrite wiki section markers into accent-colored markup, line by line,
/// and trim the result.
pub fn style(text: &str, accent: &str) -> String {
    let lines: Vec<String> = style_lines(text)
        .iter()
        .map(|l| l.to_markup(accent))
        .collect();
    lines.join("\n").trim().to_string()
}
