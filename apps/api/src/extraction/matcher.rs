//! Skill Matcher — fixed-vocabulary, word-boundary-aware keyword search.
//!
//! Text and skills are both lower-cased before matching. A skill only counts
//! when the characters on either side of it are not word characters, so
//! "java" is not found inside "javascript" while "c++" is still found in
//! "c++, rust" (a plain `\b` anchor would reject that one).

use once_cell::sync::Lazy;
use regex::Regex;

/// The canonical skill names, in reporting order.
pub const SKILL_VOCABULARY: [&str; 13] = [
    "Python",
    "Java",
    "SQL",
    "Flask",
    "JavaScript",
    "C++",
    "HTML",
    "CSS",
    "Django",
    "React",
    "Node.js",
    "AWS",
    "Azure",
];

static GLOBAL: Lazy<SkillMatcher> = Lazy::new(|| SkillMatcher::new(&SKILL_VOCABULARY));

pub struct SkillMatcher {
    patterns: Vec<(&'static str, Regex)>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &[&'static str]) -> Self {
        let patterns = vocabulary
            .iter()
            .map(|&skill| (skill, boundary_pattern(skill)))
            .collect();
        Self { patterns }
    }

    /// Matcher over [`SKILL_VOCABULARY`], compiled once per process.
    pub fn global() -> &'static SkillMatcher {
        &GLOBAL
    }

    /// Returns the vocabulary entries present in `text`, in vocabulary order.
    pub fn find_skills(&self, text: &str) -> Vec<&'static str> {
        let text = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(&text))
            .map(|(skill, _)| *skill)
            .collect()
    }
}

fn boundary_pattern(skill: &str) -> Regex {
    let escaped = regex::escape(&skill.to_lowercase());
    Regex::new(&format!(r"(?:^|\W){escaped}(?:\W|$)"))
        .expect("escaped literal between fixed anchors is a valid pattern")
}
