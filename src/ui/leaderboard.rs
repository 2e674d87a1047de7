use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::leaderboard::{standings, Entry, SortKey};
use crate::theme::Palette;

fn present_row(rank: usize, entry: &Entry) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{rank}")),
        Cell::from(entry.username).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(format!("{}", entry.wpm)),
        Cell::from(format!("{:.1}%", entry.accuracy)),
        Cell::from(format!("{}", entry.tests_completed)),
    ])
}

/// Render the sample standings, ordered by the chosen column.
pub fn render_leaderboard(sort: SortKey, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Standings table
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(format!("Leaderboard (sorted by {sort})"))
        .block(Block::default().borders(Borders::ALL).title("Standings"))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    title.render(chunks[0], buf);

    let marker = |key: SortKey| if key == sort { " ↓" } else { "" };
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("User"),
        Cell::from(format!("WPM{}", marker(SortKey::Wpm))),
        Cell::from(format!("Accuracy{}", marker(SortKey::Accuracy))),
        Cell::from(format!("Tests{}", marker(SortKey::Tests))),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = standings(sort)
        .iter()
        .enumerate()
        .map(|(i, entry)| present_row(i + 1, entry))
        .collect();

    let widths = [
        Constraint::Length(4),  // rank
        Constraint::Min(14),    // username
        Constraint::Length(8),  // wpm
        Constraint::Length(12), // accuracy
        Constraint::Length(8),  // tests
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Top Typists"))
        .column_spacing(2);
    table.render(chunks[1], buf);

    let instructions = Paragraph::new("(1) wpm  (2) accuracy  (3) tests  (b)ack  (esc)ape")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC));
    instructions.render(chunks[2], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn rendered_text(sort: SortKey) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        let palette = Theme::Dark.palette();

        render_leaderboard(sort, &palette, area, &mut buffer);

        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_title_and_rows() {
        let rendered = rendered_text(SortKey::Wpm);

        assert!(rendered.contains("Leaderboard"));
        assert!(rendered.contains("SpeedTyper"));
        assert!(rendered.contains("120"));
    }

    #[test]
    fn test_title_names_sort_column() {
        assert!(rendered_text(SortKey::Accuracy).contains("sorted by accuracy"));
        assert!(rendered_text(SortKey::Tests).contains("sorted by tests"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buffer = Buffer::empty(area);
        let palette = Theme::Light.palette();

        render_leaderboard(SortKey::Wpm, &palette, area, &mut buffer);

        assert!(*buffer.area() == area);
    }
}
