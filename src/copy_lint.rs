use std::fmt;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Marketing filler kept out of site copy.
pub const BANNED_PHRASES: &[&str] = &[
    "world-class",
    "cutting-edge",
    "best-in-class",
    "game-changer",
    "synergy",
    "rockstar",
    "ninja",
    "guru",
    "revolutionary",
    "passionate about",
    "leverage",
    "10x",
];

#[derive(Error, Debug)]
pub enum CopyLintError {
    #[error("no phrases to check")]
    Empty,
    #[error("couldn't build phrase matcher: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub source: String,
    pub line: usize,
    pub phrase: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {:?}", self.source, self.line, self.phrase)
    }
}

pub struct CopyLint {
    re: Regex,
}

impl CopyLint {
    pub fn new(phrases: &[&str]) -> Result<Self, CopyLintError> {
        if phrases.is_empty() {
            return Err(CopyLintError::Empty);
        }
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let re = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()?;
        Ok(CopyLint { re })
    }

    pub fn check(&self, source: &str, text: &str) -> Vec<Finding> {
        text.lines()
            .enumerate()
            .flat_map(|(i, line)| {
                self.re.find_iter(line).map(move |m| Finding {
                    source: source.to_string(),
                    line: i + 1,
                    phrase: m.as_str().to_string(),
                })
            })
            .collect()
    }
}
