//! Skill keyword extraction from resume text.

use regex::Regex;

use crate::error::{HireHubError, Result};

/// Reduces free text to a list of skill keywords.
pub trait SkillExtractor: Send + Sync {
    /// Skills found in `text`, deduplicated and sorted.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Skills recognized by [`KeywordSkillExtractor::new`].
pub const DEFAULT_SKILLS: &[&str] = &[
    // programming languages
    "python", "java", "c++", "c", "javascript", "typescript", "r", "sql", "matlab", "scala",
    // data & analytics
    "machine learning", "deep learning", "data analysis", "data visualization", "pandas",
    "numpy", "matplotlib", "seaborn", "scikit-learn", "tensorflow", "keras", "pytorch",
    "power bi", "tableau", "excel",
    // cloud & tools
    "aws", "azure", "gcp", "docker", "kubernetes", "linux", "git", "github", "jenkins",
    // web & backend
    "flask", "django", "react", "node", "api", "html", "css", "bootstrap",
    // soft skills
    "communication", "leadership", "teamwork", "problem solving", "critical thinking",
];

/// Matches a fixed skill list as whole words, case-insensitively.
#[derive(Debug, Clone)]
pub struct KeywordSkillExtractor {
    skills: Vec<(String, Regex)>,
}

impl KeywordSkillExtractor {
    /// Extractor over [`DEFAULT_SKILLS`].
    pub fn new() -> Result<Self> {
        Self::with_skills(DEFAULT_SKILLS.iter().copied())
    }

    /// Extractor over a custom skill list.
    pub fn with_skills<I, S>(skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills = skills
            .into_iter()
            .map(|skill| {
                let skill = skill.as_ref().to_lowercase();
                let pattern = format!(r"\b{}\b", regex::escape(&skill));
                Regex::new(&pattern)
                    .map(|re| (skill, re))
                    .map_err(|e| HireHubError::analysis(format!("Invalid skill pattern: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(KeywordSkillExtractor { skills })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillExtractor for KeywordSkillExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let text = text.to_lowercase();
        let mut found: Vec<String> = self
            .skills
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&text))
            .map(|(skill, _)| skill.clone())
            .collect();
        found.sort();
        found.dedup();
        found
    }
}

/// The ranking query for a resume: its skills joined by spaces, or the text
/// itself when no skill was found.
pub fn resume_query(text: &str, skills: &[String]) -> String {
    if skills.is_empty() {
        text.to_string()
    } else {
        skills.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_matching() {
        let extractor = KeywordSkillExtractor::new().unwrap();
        let skills = extractor.extract("Built REST APIs in Python and SQL; used Power BI dashboards.");
        assert_eq!(skills, vec!["power bi", "python", "sql"]);
    }

    #[test]
    fn test_single_letter_languages() {
        let extractor = KeywordSkillExtractor::new().unwrap();
        assert_eq!(extractor.extract("Statistics in R"), vec!["r"]);
        assert!(extractor.extract("React developer").contains(&"react".to_string()));
        assert!(!extractor.extract("React developer").contains(&"r".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordSkillExtractor::new().unwrap();
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_custom_skills_dedup() {
        let extractor = KeywordSkillExtractor::with_skills(["Rust", "rust", "go"]).unwrap();
        assert_eq!(extractor.len(), 3);
        assert_eq!(extractor.extract("RUST and Go"), vec!["go", "rust"]);
    }

    #[test]
    fn test_resume_query() {
        let skills = vec!["python".to_string(), "sql".to_string()];
        assert_eq!(resume_query("anything", &skills), "python sql");
        assert_eq!(resume_query("plain text", &[]), "plain text");
    }
}
