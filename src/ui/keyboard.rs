use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Palette;

/// Staggered letter rows of the on-screen keyboard.
pub static KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const SPACE_LABEL: &str = "         space         ";

/// True when `key` is the one the user should press next. Comparison is
/// lowercased, so an uppercase target still lights up its letter key.
pub fn is_active_key(key: char, next_char: Option<char>) -> bool {
    match next_char {
        Some(c) => c.to_ascii_lowercase() == key,
        None => false,
    }
}

/// Draws the three letter rows plus the space bar, highlighting the key
/// for the next expected character.
pub fn render_keyboard(next_char: Option<char>, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let active_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let idle_style = Style::default().fg(palette.dim);

    let mut lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let style = if is_active_key(key, next_char) {
                        active_style
                    } else {
                        idle_style
                    };
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let space_style = if is_active_key(' ', next_char) {
        active_style
    } else {
        idle_style
    };
    lines.push(Line::from(Span::styled(SPACE_LABEL, space_style)));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_rows_cover_all_letters() {
        let letters: String = KEY_ROWS.concat();
        assert_eq!(letters.len(), 26);
        for c in 'a'..='z' {
            assert!(letters.contains(c));
        }
    }

    #[test]
    fn test_active_key_is_case_insensitive() {
        assert!(is_active_key('q', Some('q')));
        assert!(is_active_key('q', Some('Q')));
        assert!(!is_active_key('q', Some('w')));
        assert!(!is_active_key('q', None));
    }

    #[test]
    fn test_space_key_matches_space() {
        assert!(is_active_key(' ', Some(' ')));
        assert!(!is_active_key(' ', Some('a')));
    }

    #[test]
    fn test_render_keyboard_fills_buffer() {
        let area = Rect::new(0, 0, 60, 6);
        let mut buffer = Buffer::empty(area);
        let palette = Theme::Dark.palette();

        render_keyboard(Some('f'), &palette, area, &mut buffer);

        let rendered = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(rendered.contains('q'));
        assert!(rendered.contains('m'));
        assert!(rendered.contains("space"));
    }

    #[test]
    fn test_render_keyboard_empty_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buffer = Buffer::empty(area);
        let palette = Theme::Light.palette();

        render_keyboard(Some('a'), &palette, area, &mut buffer);

        assert!(buffer.content().is_empty());
    }
}
