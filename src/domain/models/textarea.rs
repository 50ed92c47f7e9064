use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::Palette;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        return tui_textarea::TextArea::default();
    }

    /// Request box pre-filled with `text`, one textarea line per line.
    pub fn with_text(text: &str) -> tui_textarea::TextArea<'a> {
        if text.is_empty() {
            return TextArea::default();
        }

        return tui_textarea::TextArea::new(
            text.split('\n')
                .map(|e| return e.to_string())
                .collect::<Vec<String>>(),
        );
    }

    /// Applies the palette and a focus-aware border. Called on every frame so
    /// theme toggles take effect immediately.
    pub fn style(
        textarea: &mut tui_textarea::TextArea<'a>,
        title: &'a str,
        focused: bool,
        palette: Palette,
    ) {
        let mut border_style = Style::default().fg(palette.foreground());
        if focused {
            border_style = border_style.fg(palette.accent());
        }

        textarea.set_style(
            Style::default()
                .fg(palette.foreground())
                .bg(palette.input_background()),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(border_style)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }
}
