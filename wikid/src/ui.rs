use crate::screen::ViewState;

pub const SEARCH_PLACEHOLDER: &str = "Search Wikipedia...";
pub const ARTICLE_PLACEHOLDER: &str = "Wikipedia article will be displayed here.";
pub const SEARCHING_TEXT: &str = "Searching...";

const C_RESET: &str = "\x1b[0m";
const C_GRAY: &str = "\x1b[90m";
const C_BOLD: &str = "\x1b[1m";

/// Widgets visible for a given state. Anything `None`/`false` is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub search_bar: Option<SearchBar>,
    pub article: Option<ArticleArea>,
    pub picker: Option<Picker>,
    pub back_button: bool,
    pub cancel_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub text: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleArea {
    pub title: Option<String>,
    /// Markup text; headings use `#rrggbb ... #` spans.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    pub heading: String,
    pub entries: Vec<String>,
}

/// The only place that decides widget visibility.
pub fn render(state: &ViewState) -> View {
    match state {
        ViewState::Searching {
            query,
            message,
            in_flight,
            ..
        } => {
            let text = if *in_flight {
                SEARCHING_TEXT.to_string()
            } else {
                message
                    .clone()
                    .unwrap_or_else(|| ARTICLE_PLACEHOLDER.to_string())
            };
            View {
                search_bar: Some(SearchBar {
                    text: query.clone(),
                    placeholder: SEARCH_PLACEHOLDER,
                }),
                article: Some(ArticleArea { title: None, text }),
                picker: None,
                back_button: false,
                cancel_button: false,
            }
        }
        ViewState::AwaitingSelection { query, candidates } => View {
            search_bar: None,
            article: None,
            picker: Some(Picker {
                heading: format!("'{query}' may refer to:"),
                entries: candidates.clone(),
            }),
            back_button: false,
            cancel_button: true,
        },
        ViewState::Reading { title, text } => View {
            search_bar: None,
            article: Some(ArticleArea {
                title: Some(title.clone()),
                text: text.clone(),
            }),
            picker: None,
            back_button: true,
            cancel_button: false,
        },
    }
}

/// Render `#rrggbb text#` lines as colored text. Without colors the markers
/// are stripped and the inner text is kept.
pub fn render_markup(text: &str, colors: bool) -> String {
    text.split('\n')
        .map(|line| match parse_color_span(line) {
            Some((rgb, inner)) if colors => format!(
                "\x1b[38;2;{};{};{}m{inner}{C_RESET}",
                rgb[0], rgb[1], rgb[2]
            ),
            Some((_, inner)) => inner.to_string(),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_color_span(line: &str) -> Option<([u8; 3], &str)> {
    let rest = line.strip_prefix('#')?;
    let hex = rest.get(..6)?;
    let inner = rest.get(6..)?.strip_prefix(' ')?.strip_suffix('#')?;
    let mut rgb = [0u8; 3];
    for (i, slot) in rgb.iter_mut().enumerate() {
        *slot = u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok()?;
    }
    Some((rgb, inner))
}

/// Text screen for a view, including the trailing prompt.
pub fn draw(view: &View, colors: bool) -> String {
    let gray = if colors { C_GRAY } else { "" };
    let bold = if colors { C_BOLD } else { "" };
    let reset = if colors { C_RESET } else { "" };

    let mut out = String::new();
    if let Some(bar) = &view.search_bar {
        let shown = if bar.text.is_empty() {
            format!("{gray}{}{reset}", bar.placeholder)
        } else {
            bar.text.clone()
        };
        out.push_str(&format!("[ {shown} ]\n"));
    }
    if let Some(area) = &view.article {
        if let Some(title) = &area.title {
            out.push_str(&format!("{bold}{title}{reset}\n\n"));
        }
        out.push_str(&render_markup(&area.text, colors));
        out.push('\n');
    }
    if let Some(picker) = &view.picker {
        out.push_str(&picker.heading);
        out.push('\n');
        for (i, entry) in picker.entries.iter().enumerate() {
            out.push_str(&format!("  {}. {entry}\n", i + 1));
        }
    }

    let prompt = if view.picker.is_some() {
        format!("{gray}pick 1-{}, :cancel{reset}> ", view.picker.as_ref().map_or(0, |p| p.entries.len()))
    } else if view.back_button {
        format!("{gray}:back{reset}> ")
    } else {
        "search> ".to_string()
    };
    out.push_str(&prompt);
    out
}
