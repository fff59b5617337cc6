use owo_colors::{OwoColorize, Style};

/// Parse a style string such as `"#ff0000 bold"`.
///
/// Tokens are a `#rrggbb` colour plus any of `bold`, `italic`, `dim`,
/// `strike` and `underline`. Anything else is ignored.
pub fn parse_style(spec: &str) -> Style {
    let mut style = Style::new();
    for token in spec.split_whitespace() {
        match token.to_lowercase().as_str() {
            "bold" => style = style.bold(),
            "italic" => style = style.italic(),
            "dim" => style = style.dimmed(),
            "strike" => style = style.strikethrough(),
            "underline" => style = style.underline(),
            other => {
                if let Some((r, g, b)) = parse_hex(other) {
                    style = style.truecolor(r, g, b);
                }
            }
        }
    }
    style
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A rule line and the text centred in it.
#[derive(Clone, Copy, Debug)]
pub struct RuleStyle {
    pub line: Style,
    pub text: Style,
}

/// Every style the renderer uses. Built once at startup.
#[derive(Clone, Debug)]
pub struct Theme {
    pub color: bool,
    pub error: RuleStyle,
    pub warning: RuleStyle,
    pub update: RuleStyle,
    pub insert_or_delete: RuleStyle,
    pub msg_pending: Style,
    pub table_header: Style,
    pub task_done: Style,
    pub task_pending: Style,
    pub status_done: Style,
    pub header_greetings: Style,
    pub quote: Style,
    pub author: Style,
    pub background_bar: Style,
    pub complete_bar: Style,
    pub hint: Style,
}

impl Theme {
    /// Read `PLS_*_STYLE` overrides from the environment.
    pub fn from_env(color: bool) -> Self {
        Self::from_lookup(color, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(color: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let style = |key: &str, default: &str| {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            parse_style(&value)
        };
        let rule = |line: (&str, &str), text: (&str, &str)| RuleStyle {
            line: style(line.0, line.1),
            text: style(text.0, text.1),
        };

        Self {
            color,
            error: rule(
                ("PLS_ERROR_LINE_STYLE", "#e56767"),
                ("PLS_ERROR_TEXT_STYLE", "#ff0000 bold"),
            ),
            warning: rule(
                ("PLS_WARNING_LINE_STYLE", "#FFBF00"),
                ("PLS_WARNING_TEXT_STYLE", "#FFBF00 bold"),
            ),
            update: rule(
                ("PLS_UPDATE_LINE_STYLE", "#61E294"),
                ("PLS_UPDATE_TEXT_STYLE", "#61E294 bold"),
            ),
            insert_or_delete: rule(
                ("PLS_INSERT_DELETE_LINE_STYLE", "#bb93f2"),
                ("PLS_INSERT_DELETE_TEXT_STYLE", "#a0a0a0"),
            ),
            msg_pending: style("PLS_MSG_PENDING_STYLE", "#61E294"),
            table_header: style("PLS_TABLE_HEADER_STYLE", "#d77dd8"),
            task_done: style("PLS_TASK_DONE_STYLE", "#a0a0a0 strike"),
            task_pending: style("PLS_TASK_PENDING_STYLE", "#bb93f2"),
            status_done: parse_style("#bbf2b3"),
            header_greetings: style("PLS_HEADER_GREETINGS_STYLE", "#FFBF00"),
            quote: style("PLS_QUOTE_STYLE", "#a0a0a0"),
            author: style("PLS_AUTHOR_STYLE", "#a0a0a0 italic"),
            background_bar: style("PLS_BACKGROUND_BAR_STYLE", "#3B4252"),
            complete_bar: style("PLS_COMPLETE_BAR_STYLE", "#61E294"),
            hint: parse_style("#ff5555"),
        }
    }

    /// Apply `style` when colour is on.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            format!("{}", text.style(style))
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours() {
        assert_eq!(parse_hex("#61E294"), Some((0x61, 0xe2, 0x94)));
        assert_eq!(parse_hex("61E294"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn plain_theme_does_not_paint() {
        let theme = Theme::from_lookup(false, |_| None);
        assert_eq!(theme.paint("hello", theme.error.text), "hello");
    }

    #[test]
    fn coloured_theme_emits_escapes() {
        let theme = Theme::from_lookup(true, |_| None);
        let painted = theme.paint("hello", theme.error.text);
        assert!(painted.contains("hello"));
        assert!(painted.contains("\u{1b}["));
    }

    #[test]
    fn env_override_is_used() {
        let theme = Theme::from_lookup(true, |key| {
            (key == "PLS_QUOTE_STYLE").then(|| "#000000".to_string())
        });
        let expected = format!("{}", "q".style(Style::new().truecolor(0, 0, 0)));
        assert_eq!(theme.paint("q", theme.quote), expected);
    }
}
