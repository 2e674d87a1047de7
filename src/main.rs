pub mod leaderboard;
pub mod level;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod text_generator;
pub mod theme;
pub mod ui;

use crate::{
    leaderboard::SortKey,
    level::MAX_LEVEL,
    runtime::{
        CrosstermEventSource, Event, EventSource, FixedTicker, Runner, Ticker, TICK_INTERVAL,
    },
    session::{Session, SessionConfig, DEFAULT_DURATION_SECS, DURATION_OPTIONS},
    theme::Theme,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// fast terminal typing trainer with leveled drills and charted results
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing trainer with five difficulty levels, a live wpm/accuracy/error readout, an on-screen keyboard that highlights the next key, and a wpm-over-time chart when the clock runs out."
)]
pub struct Cli {
    /// difficulty level to start at
    #[clap(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=MAX_LEVEL as i64), default_value_t = 1)]
    level: u8,

    /// number of seconds to run the session (15, 30, 60 or 120)
    #[clap(short = 's', long, value_parser = parse_duration, default_value_t = DEFAULT_DURATION_SECS)]
    seconds: u32,

    /// custom prompt to type instead of generated words
    #[clap(short = 'p', long, value_parser = parse_prompt)]
    prompt: Option<String>,

    /// hide everything except the prompt and the clock
    #[clap(short = 'z', long)]
    zen: bool,

    /// color theme
    #[clap(short = 't', long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// seed for deterministic word selection
    #[clap(long)]
    seed: Option<u64>,
}

fn parse_duration(s: &str) -> Result<u32, String> {
    let secs: u32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if DURATION_OPTIONS.contains(&secs) {
        Ok(secs)
    } else {
        Err(format!("duration must be one of {DURATION_OPTIONS:?} seconds"))
    }
}

fn parse_prompt(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("prompt must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

impl Cli {
    /// Convert CLI arguments to the initial session configuration
    fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            level: self.level,
            time_limit_secs: self.seconds,
            custom_prompt: self.prompt.clone(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Typing,
    Results,
    Leaderboard,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub state: AppState,
    pub zen: bool,
    pub theme: Theme,
    pub sort_key: SortKey,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let session = Session::new(cli.to_session_config());

        Self {
            session,
            zen: cli.zen,
            theme: cli.theme,
            state: AppState::Typing,
            sort_key: SortKey::Wpm,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    let runner = Runner::new(
        CrosstermEventSource::default(),
        FixedTicker::new(TICK_INTERVAL),
    );
    run_app(&mut terminal, &mut app, &runner)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    Ok(())
}

fn run_app<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match runner.step() {
            Event::Tick => {
                app.session.on_tick();
                if app.state == AppState::Typing && app.session.has_finished() {
                    app.state = AppState::Results;
                }
            }
            Event::Resize => {}
            Event::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Applies one key event to the app. Returns true when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.state {
        AppState::Typing => match key.code {
            KeyCode::Tab => {
                app.zen = !app.zen;
            }
            KeyCode::Left => {
                // out-of-range numbers are ignored by the session
                app.session.change_level(app.session.level.saturating_sub(1));
            }
            KeyCode::Right => {
                app.session.change_level(app.session.level + 1);
            }
            KeyCode::Up => {
                adjust_duration(&mut app.session, 1);
            }
            KeyCode::Down => {
                adjust_duration(&mut app.session, -1);
            }
            KeyCode::Backspace => {
                app.session.backspace();
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.theme = app.theme.toggled();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.session.reset();
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.state = AppState::Leaderboard;
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.session.write(c);
                    if app.session.has_finished() {
                        app.state = AppState::Results;
                    }
                }
            }
            _ => {}
        },
        AppState::Results => match key.code {
            KeyCode::Char('r') => {
                app.session.retry();
                app.state = AppState::Typing;
            }
            KeyCode::Char('n') => {
                app.session.reset();
                app.state = AppState::Typing;
            }
            KeyCode::Char('l') => {
                app.state = AppState::Leaderboard;
            }
            _ => {}
        },
        AppState::Leaderboard => match key.code {
            KeyCode::Char('1') => {
                app.sort_key = SortKey::Wpm;
            }
            KeyCode::Char('2') => {
                app.sort_key = SortKey::Accuracy;
            }
            KeyCode::Char('3') => {
                app.sort_key = SortKey::Tests;
            }
            KeyCode::Char('b') | KeyCode::Backspace => {
                app.state = if app.session.has_finished() {
                    AppState::Results
                } else {
                    AppState::Typing
                };
            }
            _ => {}
        },
    }

    false
}

/// Steps the time limit up or down through the supported durations.
fn adjust_duration(session: &mut Session, step: i32) {
    let idx = DURATION_OPTIONS
        .iter()
        .position(|&d| d == session.time_limit_secs)
        .unwrap_or(2);
    let next = (idx as i32 + step).clamp(0, DURATION_OPTIONS.len() as i32 - 1) as usize;
    session.set_duration(DURATION_OPTIONS[next]);
}
