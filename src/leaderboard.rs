use itertools::Itertools;
use strum_macros::Display;

/// One row of the sample standings. There is no backend behind these;
/// the screen exists to show where a score would land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub username: &'static str,
    pub wpm: u16,
    pub accuracy: f64,
    pub tests_completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Wpm,
    Accuracy,
    Tests,
}

static ENTRIES: [Entry; 10] = [
    Entry {
        username: "SpeedTyper",
        wpm: 120,
        accuracy: 98.5,
        tests_completed: 42,
    },
    Entry {
        username: "TypeMaster",
        wpm: 115,
        accuracy: 97.8,
        tests_completed: 38,
    },
    Entry {
        username: "SwiftKeys",
        wpm: 110,
        accuracy: 96.5,
        tests_completed: 35,
    },
    Entry {
        username: "KeyboardNinja",
        wpm: 105,
        accuracy: 95.2,
        tests_completed: 30,
    },
    Entry {
        username: "WordRacer",
        wpm: 102,
        accuracy: 94.8,
        tests_completed: 28,
    },
    Entry {
        username: "TypingWizard",
        wpm: 98,
        accuracy: 93.5,
        tests_completed: 25,
    },
    Entry {
        username: "FastFingers",
        wpm: 95,
        accuracy: 92.7,
        tests_completed: 22,
    },
    Entry {
        username: "KeyStroker",
        wpm: 92,
        accuracy: 91.9,
        tests_completed: 20,
    },
    Entry {
        username: "WordSmith",
        wpm: 90,
        accuracy: 91.2,
        tests_completed: 18,
    },
    Entry {
        username: "TypeHero",
        wpm: 88,
        accuracy: 90.5,
        tests_completed: 15,
    },
];

/// Standings ordered by the chosen column, best first.
pub fn standings(sort: SortKey) -> Vec<Entry> {
    ENTRIES
        .iter()
        .copied()
        .sorted_by(|a, b| match sort {
            SortKey::Wpm => b.wpm.cmp(&a.wpm),
            SortKey::Accuracy => b.accuracy.total_cmp(&a.accuracy),
            SortKey::Tests => b.tests_completed.cmp(&a.tests_completed),
        })
        .collect()
}
