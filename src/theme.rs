use clap::ValueEnum;
use ratatui::style::Color;

/// Colors the UI draws with. Cosmetic only; the session never sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub correct: Color,
    pub incorrect: Color,
    pub accent: Color,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                text: Color::White,
                dim: Color::DarkGray,
                correct: Color::Green,
                incorrect: Color::Red,
                accent: Color::Cyan,
            },
            Theme::Light => Palette {
                text: Color::Black,
                dim: Color::Gray,
                correct: Color::Green,
                incorrect: Color::Red,
                accent: Color::Blue,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_themes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ_in_text_color() {
        assert_ne!(Theme::Dark.palette().text, Theme::Light.palette().text);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Theme::Dark.to_string(), "Dark");
        assert_eq!(Theme::Light.to_string(), "Light");
    }
}
