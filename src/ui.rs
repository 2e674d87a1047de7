pub mod charting;
pub mod keyboard;
pub mod leaderboard;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{metrics::CharState, App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;
        let palette = self.theme.palette();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let correct_style = Style::default().patch(bold_style).fg(palette.correct);
        let incorrect_style = Style::default().patch(bold_style).fg(palette.incorrect);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .fg(palette.text)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_dim_style = Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC);

        let accent_style = Style::default().fg(palette.accent);

        match self.state {
            AppState::Typing => {
                let max_chars_per_line =
                    area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
                let mut prompt_occupied_lines = ((session.target.width() as f64
                    / max_chars_per_line as f64)
                    .ceil()
                    + 1.0) as u16;

                if session.target.width() <= max_chars_per_line as usize {
                    prompt_occupied_lines = 1;
                }
                prompt_occupied_lines = prompt_occupied_lines.min(area.height);

                let header_lines: u16 = if self.zen { 0 } else { 3 };
                let timer_lines: u16 = 2;
                let stats_lines: u16 = if self.zen { 0 } else { 2 };
                let keyboard_lines: u16 = if self.zen { 0 } else { 5 };
                let legend_lines: u16 = if self.zen { 0 } else { 1 };

                let fixed = header_lines + timer_lines + stats_lines + keyboard_lines + legend_lines;
                let top_pad = area
                    .height
                    .saturating_sub(fixed.saturating_add(prompt_occupied_lines))
                    / 2;

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Length(top_pad),
                            Constraint::Length(header_lines),
                            Constraint::Length(timer_lines),
                            Constraint::Length(prompt_occupied_lines),
                            Constraint::Length(stats_lines),
                            Constraint::Length(keyboard_lines),
                            Constraint::Min(0),
                            Constraint::Length(legend_lines),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                if !self.zen {
                    let level = session.level_info();
                    let header = Paragraph::new(vec![
                        Line::from(Span::styled(
                            format!("Level {}: {}", level.number, level.name),
                            Style::default().patch(accent_style).patch(bold_style),
                        )),
                        Line::from(Span::styled(level.description, italic_dim_style)),
                    ])
                    .alignment(Alignment::Center);
                    header.render(chunks[1], buf);
                }

                let timer = Paragraph::new(Span::styled(
                    format!(
                        "{:02}:{:02}",
                        session.seconds_remaining / 60,
                        session.seconds_remaining % 60
                    ),
                    dim_bold_style,
                ))
                .alignment(Alignment::Center);
                timer.render(chunks[2], buf);

                let spans = session
                    .target
                    .chars()
                    .enumerate()
                    .map(|(idx, expected)| match session.char_state(idx) {
                        CharState::Correct => {
                            Span::styled(expected.to_string(), correct_style)
                        }
                        CharState::Incorrect => Span::styled(
                            match session.input.chars().nth(idx) {
                                Some(' ') | None => "·".to_owned(),
                                Some(c) => c.to_string(),
                            },
                            incorrect_style,
                        ),
                        CharState::Current => {
                            Span::styled(expected.to_string(), underlined_dim_bold_style)
                        }
                        CharState::Upcoming => {
                            Span::styled(expected.to_string(), dim_bold_style)
                        }
                    })
                    .collect::<Vec<Span>>();

                let prompt = Paragraph::new(Line::from(spans))
                    .alignment(if prompt_occupied_lines == 1 {
                        // a single line never wraps, so centering cannot
                        // shuffle words between lines mid-drill
                        Alignment::Center
                    } else {
                        Alignment::Left
                    })
                    .wrap(Wrap { trim: true });
                prompt.render(chunks[3], buf);

                if !self.zen {
                    let stats = if session.has_started() {
                        Span::styled(
                            format!(
                                "{} wpm   {}% acc   {} err",
                                session.net_wpm, session.accuracy, session.errors
                            ),
                            bold_style,
                        )
                    } else {
                        Span::styled("start typing to begin", italic_dim_style)
                    };
                    Paragraph::new(stats)
                        .alignment(Alignment::Center)
                        .render(chunks[4], buf);

                    keyboard::render_keyboard(session.next_char(), &palette, chunks[5], buf);

                    let legend = Paragraph::new(Span::styled(
                        "(←→) level / (↑↓) time / (tab) zen / (^t) theme / (^l) board / (^r) new / (esc)ape",
                        italic_dim_style,
                    ));
                    legend.render(chunks[7], buf);
                }
            }
            AppState::Results => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .vertical_margin(VERTICAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Min(1),    // chart
                            Constraint::Length(1), // stats
                            Constraint::Length(1), // level summary
                            Constraint::Length(1), // padding
                            Constraint::Length(1), // legend
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let (overall_duration, highest_wpm) =
                    charting::compute_chart_params(&session.wpm_samples);

                let datasets = vec![Dataset::default()
                    .marker(ratatui::symbols::Marker::Braille)
                    .style(accent_style)
                    .graph_type(GraphType::Line)
                    .data(&session.wpm_samples)];

                let chart = Chart::new(datasets)
                    .x_axis(
                        Axis::default()
                            .title("seconds")
                            .bounds([1.0, overall_duration])
                            .labels(vec![
                                Span::styled("1", bold_style),
                                Span::styled(charting::format_label(overall_duration), bold_style),
                            ]),
                    )
                    .y_axis(
                        Axis::default()
                            .title("wpm")
                            .bounds([0.0, highest_wpm])
                            .labels(vec![
                                Span::styled("0", bold_style),
                                Span::styled(charting::format_label(highest_wpm), bold_style),
                            ]),
                    );
                chart.render(chunks[0], buf);

                let stats = Paragraph::new(Span::styled(
                    format!(
                        "{} wpm   {} gross   {}% acc   {} err",
                        session.net_wpm, session.gross_wpm, session.accuracy, session.errors
                    ),
                    bold_style,
                ))
                .alignment(Alignment::Center);
                stats.render(chunks[1], buf);

                let level = session.level_info();
                let summary = Paragraph::new(Span::styled(
                    format!(
                        "Level {}: {}   {}s",
                        level.number, level.name, session.time_limit_secs
                    ),
                    italic_dim_style,
                ))
                .alignment(Alignment::Center);
                summary.render(chunks[2], buf);

                let legend = Paragraph::new(Span::styled(
                    "(r)etry / (n)ew / (l)eaderboard / (esc)ape",
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                legend.render(chunks[4], buf);
            }
            AppState::Leaderboard => {
                leaderboard::render_leaderboard(self.sort_key, &palette, area, buf);
            }
        }
    }
}
