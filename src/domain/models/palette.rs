use ratatui::style::Color;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Palette {
    #[default]
    Dark,
    Light,
}

impl Palette {
    pub fn parse(text: &str) -> Option<Palette> {
        return Palette::iter().find(|e| return e.to_string() == text);
    }

    pub fn toggle(&self) -> Palette {
        match self {
            Palette::Dark => return Palette::Light,
            Palette::Light => return Palette::Dark,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Palette::Dark => return Color::Rgb(0, 0, 0),
            Palette::Light => return Color::Rgb(240, 240, 240),
        }
    }

    pub fn foreground(&self) -> Color {
        match self {
            Palette::Dark => return Color::Rgb(255, 255, 255),
            Palette::Light => return Color::Rgb(0, 0, 0),
        }
    }

    /// Background for text inputs and output panes.
    pub fn input_background(&self) -> Color {
        match self {
            Palette::Dark => return Color::Rgb(17, 17, 17),
            Palette::Light => return Color::Rgb(255, 255, 255),
        }
    }

    pub fn accent(&self) -> Color {
        return Color::Rgb(39, 174, 96);
    }

    pub fn error(&self) -> Color {
        return Color::Rgb(192, 57, 43);
    }

    /// Name of the bundled syntect theme used for the code pane.
    pub fn syntax_theme(&self) -> &'static str {
        match self {
            Palette::Dark => return "base16-ocean.dark",
            Palette::Light => return "InspiredGitHub",
        }
    }
}
