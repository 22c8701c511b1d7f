use serde::{Deserialize, Serialize};

/// A candidate resume as the ranker sees it: a display title and its extracted text.
///
/// `text` may be blank (extraction failed or produced nothing); such resumes are
/// skipped rather than ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Resume {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// True when the resume carries something worth embedding.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// A resume paired with its batch-relative similarity score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResume {
    pub resume: Resume,
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_has_no_text() {
        assert!(!Resume::new("a.pdf", "").has_text());
        assert!(!Resume::new("b.pdf", " \n\t ").has_text());
        assert!(Resume::new("c.pdf", " Rust ").has_text());
    }

    #[test]
    fn test_missing_text_deserializes_as_empty() {
        let resume: Resume = serde_json::from_str(r#"{"title": "cv.pdf"}"#).unwrap();
        assert_eq!(resume.text, "");
        assert!(!resume.has_text());
    }
}
