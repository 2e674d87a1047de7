use crate::level::{Level, MAX_LEVEL};
use crate::metrics::{self, CharState};
use crate::text_generator::TextGenerator;
use std::time::Instant;

/// Countdown lengths the UI may pick from, in seconds.
pub const DURATION_OPTIONS: [u32; 4] = [15, 30, 60, 120];
pub const DEFAULT_DURATION_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Waiting,
    Running,
    Finished,
}

/// Everything a fresh session needs to know up front.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub level: u8,
    pub time_limit_secs: u32,
    pub custom_prompt: Option<String>,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: 1,
            time_limit_secs: DEFAULT_DURATION_SECS,
            custom_prompt: None,
            seed: None,
        }
    }
}

/// One timed typing attempt against generated (or supplied) target text.
///
/// Input always arrives as the full replacement string; `write` and
/// `backspace` are conveniences that build the next string from the last.
/// Metrics are recomputed on every accepted input and every tick, and
/// freeze when the session finishes.
#[derive(Debug)]
pub struct Session {
    pub target: String,
    pub input: String,
    pub level: u8,
    pub time_limit_secs: u32,
    pub seconds_remaining: u32,
    pub status: SessionStatus,
    pub started_at: Option<Instant>,
    pub errors: usize,
    pub accuracy: u16,
    pub gross_wpm: u16,
    pub net_wpm: u16,
    /// (seconds into the session, net wpm) per tick, for the results chart.
    pub wpm_samples: Vec<(f64, f64)>,
    initial_target: String,
    custom_prompt: Option<String>,
    generator: TextGenerator,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => TextGenerator::with_seed(seed),
            None => TextGenerator::new(),
        };
        let level = config.level.clamp(1, MAX_LEVEL);
        let target = match &config.custom_prompt {
            Some(prompt) => prompt.clone(),
            None => {
                let count = Level::get(level).map_or(10, |l| l.word_count);
                generator.prompt(count)
            }
        };

        Self {
            initial_target: target.clone(),
            target,
            input: String::new(),
            level,
            time_limit_secs: config.time_limit_secs,
            seconds_remaining: config.time_limit_secs,
            status: SessionStatus::Waiting,
            started_at: None,
            errors: 0,
            accuracy: 100,
            gross_wpm: 0,
            net_wpm: 0,
            wpm_samples: vec![],
            custom_prompt: config.custom_prompt,
            generator,
        }
    }

    /// Replaces the input wholesale. Ignored once finished; an edit that
    /// would delete a correctly typed character is rejected so mistakes
    /// cannot be erased after the fact.
    pub fn submit_input(&mut self, new_input: &str) {
        if self.status == SessionStatus::Finished {
            return;
        }
        if self.deletes_correct_chars(new_input) {
            return;
        }
        if self.status == SessionStatus::Waiting && !new_input.is_empty() {
            self.start();
        }
        self.input = new_input.to_string();
        self.extend_or_finish();
        self.refresh_metrics();
    }

    pub fn write(&mut self, c: char) {
        let mut next = self.input.clone();
        next.push(c);
        self.submit_input(&next);
    }

    pub fn backspace(&mut self) {
        let mut next = self.input.clone();
        next.pop();
        self.submit_input(&next);
    }

    /// One second of countdown. Only a running session ticks, so a stale
    /// tick arriving after a reset or finish changes nothing.
    pub fn on_tick(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.refresh_metrics();
        let elapsed = self.time_limit_secs.saturating_sub(self.seconds_remaining);
        self.wpm_samples.push((elapsed as f64, self.net_wpm as f64));
        if self.seconds_remaining == 0 {
            self.finish();
        }
    }

    /// Fresh attempt at newly generated text (a custom prompt is reused).
    pub fn reset(&mut self) {
        let target = self.generate_target();
        self.restart_with(target);
    }

    /// Fresh attempt at the text this attempt started with, before any
    /// appended chunks.
    pub fn retry(&mut self) {
        let target = self.initial_target.clone();
        self.restart_with(target);
    }

    /// Switches difficulty and resets. Out-of-range levels are ignored;
    /// re-selecting the current level still restarts the attempt.
    pub fn change_level(&mut self, number: u8) {
        if Level::get(number).is_none() {
            return;
        }
        self.level = number;
        self.reset();
    }

    /// Switches the countdown length and resets. Unrecognized or unchanged
    /// durations are ignored.
    pub fn set_duration(&mut self, secs: u32) {
        if !DURATION_OPTIONS.contains(&secs) || secs == self.time_limit_secs {
            return;
        }
        self.time_limit_secs = secs;
        self.reset();
    }

    pub fn char_state(&self, idx: usize) -> CharState {
        metrics::char_state(&self.target, &self.input, idx)
    }

    /// The character the user should type next, if any remain.
    pub fn next_char(&self) -> Option<char> {
        self.target.chars().nth(self.current_index())
    }

    pub fn current_index(&self) -> usize {
        self.input.chars().count()
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    pub fn level_info(&self) -> &'static Level {
        // level is clamped at every write, so the lookup cannot miss
        Level::get(self.level).unwrap_or(&Level::all()[0])
    }

    fn start(&mut self) {
        self.status = SessionStatus::Running;
        self.started_at = Some(Instant::now());
    }

    fn finish(&mut self) {
        self.refresh_metrics();
        self.status = SessionStatus::Finished;
    }

    /// True when `new_input` is a shrink that drops a position already
    /// typed correctly.
    fn deletes_correct_chars(&self, new_input: &str) -> bool {
        let new_len = new_input.chars().count();
        self.input
            .chars()
            .zip(self.target.chars())
            .skip(new_len)
            .any(|(typed, expected)| typed == expected)
    }

    /// The user has consumed the whole target: with time on the clock a
    /// generated session grows more words and keeps running, while a
    /// custom prompt (or an exhausted clock) ends the attempt. Only a
    /// running attempt can grow or finish; an empty custom prompt must
    /// not jump straight from Waiting to Finished.
    fn extend_or_finish(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }
        while self.current_index() >= self.target.chars().count() {
            if self.custom_prompt.is_some() || self.seconds_remaining == 0 {
                self.finish();
                break;
            }
            let chunk = self.generator.words(self.words_per_chunk());
            self.target.push(' ');
            self.target.push_str(&chunk);
        }
    }

    fn restart_with(&mut self, target: String) {
        self.initial_target = target.clone();
        self.target = target;
        self.input.clear();
        self.status = SessionStatus::Waiting;
        self.started_at = None;
        self.seconds_remaining = self.time_limit_secs;
        self.wpm_samples.clear();
        self.refresh_metrics();
    }

    fn generate_target(&mut self) -> String {
        match &self.custom_prompt {
            Some(prompt) => prompt.clone(),
            None => self.generator.prompt(self.words_per_chunk()),
        }
    }

    fn words_per_chunk(&self) -> usize {
        Level::get(self.level).map_or(10, |l| l.word_count)
    }

    fn refresh_metrics(&mut self) {
        self.errors = metrics::error_count(&self.target, &self.input);
        self.accuracy = metrics::accuracy(&self.target, &self.input);
        self.gross_wpm = match self.started_at {
            Some(started) => metrics::gross_wpm(self.current_index(), started.elapsed()),
            None => 0,
        };
        self.net_wpm = metrics::net_wpm(self.gross_wpm, self.accuracy);
    }
}
