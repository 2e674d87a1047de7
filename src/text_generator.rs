use include_dir::{include_dir, Dir};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static WORDS_DIR: Dir = include_dir!("src/words");

/// An embedded word list.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct Vocabulary {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Vocabulary {
    pub fn english() -> Self {
        read_vocabulary_from_file("english.json").unwrap()
    }
}

fn read_vocabulary_from_file(file_name: &str) -> Result<Vocabulary, Box<dyn Error>> {
    let file = WORDS_DIR
        .get_file(file_name)
        .expect("Vocabulary file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let vocab = from_str(file_as_str).expect("Unable to deserialize vocabulary json");

    Ok(vocab)
}

/// Draws practice text from the embedded vocabulary.
///
/// Words are sampled uniformly at random with replacement, so repeats are
/// expected and no draw depends on the ones before it. The generator owns
/// its rng; seeding it makes every draw reproducible.
#[derive(Debug)]
pub struct TextGenerator {
    vocabulary: Vocabulary,
    rng: StdRng,
}

impl TextGenerator {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::english(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            vocabulary: Vocabulary::english(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `count` space-joined words, lowercase as stored.
    pub fn words(&mut self, count: usize) -> String {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            // with replacement: each word is an independent draw
            if let Some(word) = self.vocabulary.words.choose(&mut self.rng) {
                drawn.push(word.as_str());
            }
        }
        drawn.join(" ")
    }

    /// A fresh prompt: `count` words with the first letter capitalized.
    pub fn prompt(&mut self, count: usize) -> String {
        capitalize_first(&self.words(count))
    }
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
