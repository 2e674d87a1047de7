/// Highest selectable difficulty level.
pub const MAX_LEVEL: u8 = 5;

/// One row of the difficulty ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub number: u8,
    pub name: &'static str,
    pub word_count: usize,
    pub description: &'static str,
}

static LEVELS: [Level; MAX_LEVEL as usize] = [
    Level {
        number: 1,
        name: "Beginner",
        word_count: 10,
        description: "Simple words and short sentences",
    },
    Level {
        number: 2,
        name: "Intermediate",
        word_count: 20,
        description: "Medium length sentences with common words",
    },
    Level {
        number: 3,
        name: "Advanced",
        word_count: 30,
        description: "Longer sentences with varied vocabulary",
    },
    Level {
        number: 4,
        name: "Expert",
        word_count: 40,
        description: "Complex sentences with advanced vocabulary",
    },
    Level {
        number: 5,
        name: "Master",
        word_count: 50,
        description: "Challenging text with technical terms",
    },
];

impl Level {
    /// Looks up a level by number. Anything outside `1..=MAX_LEVEL` is None.
    pub fn get(number: u8) -> Option<&'static Level> {
        if (1..=MAX_LEVEL).contains(&number) {
            Some(&LEVELS[(number - 1) as usize])
        } else {
            None
        }
    }

    pub fn all() -> &'static [Level] {
        &LEVELS
    }
}
