use std::time::Duration;

/// How one position in the target reads against the input so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    Correct,
    Incorrect,
    Current,
    Upcoming,
}

/// Classifies the target character at `idx` against `input`.
///
/// Typed positions compare character-for-character, the position at the
/// cursor is `Current`, everything past it is `Upcoming`.
pub fn char_state(target: &str, input: &str, idx: usize) -> CharState {
    let typed = input.chars().count();
    if idx < typed {
        let t = target.chars().nth(idx);
        let i = input.chars().nth(idx);
        if t == i {
            CharState::Correct
        } else {
            CharState::Incorrect
        }
    } else if idx == typed {
        CharState::Current
    } else {
        CharState::Upcoming
    }
}

/// Number of positions where input and target agree, over the typed prefix.
pub fn correct_chars(target: &str, input: &str) -> usize {
    input
        .chars()
        .zip(target.chars())
        .filter(|(i, t)| i == t)
        .count()
}

/// Every typed character that does not match its target position counts as
/// an error, including anything typed past the end of the target.
pub fn error_count(target: &str, input: &str) -> usize {
    input.chars().count() - correct_chars(target, input)
}

/// Accuracy percentage, rounded to a whole number. An empty input is 100%.
pub fn accuracy(target: &str, input: &str) -> u16 {
    let typed = input.chars().count();
    if typed == 0 {
        return 100;
    }
    ((correct_chars(target, input) as f64 / typed as f64) * 100.0).round() as u16
}

/// Gross WPM: typed characters ÷ 5, per elapsed minute. Zero elapsed time
/// yields zero rather than a division blowup.
pub fn gross_wpm(chars_typed: usize, elapsed: Duration) -> u16 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    let minutes = secs / 60.0;
    ((chars_typed as f64 / 5.0) / minutes).round() as u16
}

/// Net WPM: gross scaled by accuracy. Unsigned, so it never goes negative.
pub fn net_wpm(gross: u16, accuracy: u16) -> u16 {
    ((gross as f64 * accuracy as f64) / 100.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_state_typed_positions() {
        let target = "hello";
        let input = "hxl";

        assert_eq!(char_state(target, input, 0), CharState::Correct);
        assert_eq!(char_state(target, input, 1), CharState::Incorrect);
        assert_eq!(char_state(target, input, 2), CharState::Correct);
    }

    #[test]
    fn test_char_state_cursor_and_remainder() {
        let target = "hello";
        let input = "he";

        assert_eq!(char_state(target, input, 2), CharState::Current);
        assert_eq!(char_state(target, input, 3), CharState::Upcoming);
        assert_eq!(char_state(target, input, 4), CharState::Upcoming);
    }

    #[test]
    fn test_char_state_empty_input() {
        assert_eq!(char_state("abc", "", 0), CharState::Current);
        assert_eq!(char_state("abc", "", 1), CharState::Upcoming);
    }

    #[test]
    fn test_correct_chars_counts_matches() {
        assert_eq!(correct_chars("the cat sat", "the cat sot"), 10);
        assert_eq!(correct_chars("test", "test"), 4);
        assert_eq!(correct_chars("test", "xxxx"), 0);
        assert_eq!(correct_chars("test", ""), 0);
    }

    #[test]
    fn test_error_count_is_complement() {
        let target = "the cat sat";
        let input = "the cat sot";

        assert_eq!(error_count(target, input), 1);
        assert_eq!(
            correct_chars(target, input) + error_count(target, input),
            input.chars().count()
        );
    }

    #[test]
    fn test_errors_plus_correct_equals_typed() {
        let target = "some words here";
        for input in ["", "s", "sx", "some wirds", "some words here"] {
            assert_eq!(
                correct_chars(target, input) + error_count(target, input),
                input.chars().count()
            );
        }
    }

    #[test]
    fn test_accuracy_empty_input_is_100() {
        assert_eq!(accuracy("anything", ""), 100);
    }

    #[test]
    fn test_accuracy_rounds() {
        // 10 of 11 correct = 90.909..., rounds to 91
        assert_eq!(accuracy("the cat sat", "the cat sot"), 91);
    }

    #[test]
    fn test_accuracy_bounds() {
        assert_eq!(accuracy("test", "test"), 100);
        assert_eq!(accuracy("test", "xxxx"), 0);
        for input in ["t", "te", "tex", "texx"] {
            let acc = accuracy("test", input);
            assert!(acc <= 100);
        }
    }

    #[test]
    fn test_gross_wpm_basic() {
        // 50 chars in 60s = 10 words per minute
        assert_eq!(gross_wpm(50, Duration::from_secs(60)), 10);
        // 25 chars in 30s = 5 words per half-minute = 10 wpm
        assert_eq!(gross_wpm(25, Duration::from_secs(30)), 10);
    }

    #[test]
    fn test_gross_wpm_zero_elapsed() {
        assert_eq!(gross_wpm(100, Duration::ZERO), 0);
    }

    #[test]
    fn test_net_wpm_scales_by_accuracy() {
        assert_eq!(net_wpm(100, 100), 100);
        assert_eq!(net_wpm(100, 91), 91);
        assert_eq!(net_wpm(60, 50), 30);
    }

    #[test]
    fn test_net_wpm_never_negative() {
        assert_eq!(net_wpm(100, 0), 0);
        assert_eq!(net_wpm(0, 100), 0);
    }

    #[test]
    fn test_net_wpm_rounds() {
        // 47 * 0.91 = 42.77 -> 43
        assert_eq!(net_wpm(47, 91), 43);
    }
}
