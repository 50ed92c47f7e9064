#[cfg(test)]
#[path = "syntaxes_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxReference;
use syntect::parsing::SyntaxSet;

use crate::domain::models::Language;
use crate::domain::models::Palette;

pub static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

pub struct Syntaxes {}

impl Syntaxes {
    /// Resolves a fence tag or extension to a syntax, falling back to plain
    /// text.
    pub fn get(token: &str) -> &'static SyntaxReference {
        return SYNTAX_SET
            .find_syntax_by_token(token)
            .unwrap_or_else(|| return SYNTAX_SET.find_syntax_plain_text());
    }

    pub fn for_language(language: Language) -> &'static SyntaxReference {
        return Syntaxes::get(language.syntax_token());
    }

    pub fn theme(palette: Palette) -> Option<&'static Theme> {
        return THEME_SET.themes.get(palette.syntax_theme());
    }

    pub fn translate_colour(colour: syntect::highlighting::Color) -> Option<Color> {
        if colour.a == 0 {
            return None;
        }

        return Some(Color::Rgb(colour.r, colour.g, colour.b));
    }

    /// Renders the code pane. Text inside markdown fences is highlighted with
    /// the fence's language, or the selected language when the fence has
    /// none. Without any fences the whole text is treated as code.
    pub fn highlight(code: &str, language: Language, palette: Palette) -> Vec<Line<'static>> {
        let theme = match Syntaxes::theme(palette) {
            Some(theme) => theme,
            None => {
                return code
                    .lines()
                    .map(|line| return Line::from(line.to_string()))
                    .collect();
            }
        };

        let fenced = code.lines().any(|line| return line.trim().starts_with("```"));
        let mut in_codeblock = !fenced;
        let mut highlight = HighlightLines::new(Syntaxes::for_language(language), theme);
        let mut lines: Vec<Line> = vec![];

        for line in code.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with("```") {
                if !in_codeblock {
                    let tag = trimmed.trim_start_matches('`').trim();
                    let syntax = if tag.is_empty() {
                        Syntaxes::for_language(language)
                    } else {
                        Syntaxes::get(tag)
                    };
                    highlight = HighlightLines::new(syntax, theme);
                }
                in_codeblock = !in_codeblock;

                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                )));
                continue;
            }

            if !in_codeblock {
                lines.push(Line::from(line.to_string()));
                continue;
            }

            // Highlighting multi-line constructs needs the trailing newline.
            let line_nl = format!("{line}\n");
            match highlight.highlight_line(&line_nl, &SYNTAX_SET) {
                Ok(segments) => {
                    let spans = segments
                        .iter()
                        .map(|(style, content)| {
                            return Span::styled(
                                content.trim_end_matches('\n').to_string(),
                                Style {
                                    fg: Syntaxes::translate_colour(style.foreground),
                                    ..Style::default()
                                },
                            );
                        })
                        .collect::<Vec<Span>>();
                    lines.push(Line::from(spans));
                }
                Err(err) => {
                    tracing::warn!(error = ?err, "Failed to highlight line");
                    lines.push(Line::from(line.to_string()));
                }
            }
        }

        return lines;
    }
}
