use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Academic stream chosen after secondary school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    #[serde(rename = "Science-PCM")]
    SciencePcm,
    #[serde(rename = "Science-PCB")]
    SciencePcb,
    #[serde(rename = "Science-PCMB")]
    SciencePcmb,
    Commerce,
    Arts,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::SciencePcm => "Science (Physics, Chemistry, Mathematics)",
            Stream::SciencePcb => "Science (Physics, Chemistry, Biology)",
            Stream::SciencePcmb => "Science (Physics, Chemistry, Mathematics, Biology)",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts / Humanities",
        }
    }
}

/// The student's academic record, submitted with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub stream: Stream,
    /// Aggregate percentage, 0-100.
    pub marks: f64,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub skills: BTreeMap<String, bool>,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub location: String,
}

impl Profile {
    pub fn new(stream: Stream, marks: f64) -> Self {
        Self {
            stream,
            marks,
            subjects: Vec::new(),
            skills: BTreeMap::new(),
            interests: String::new(),
            location: String::new(),
        }
    }

    /// Checks the marks invariant. Returns a caller-presentable message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if !self.marks.is_finite() || !(0.0..=100.0).contains(&self.marks) {
            return Err(format!(
                "marks must be a percentage between 0 and 100, got {}",
                self.marks
            ));
        }
        Ok(())
    }

    /// Skill flags the student marked as true, in stable order.
    pub fn declared_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Renders the profile as a compact block for prompt templates.
    pub fn summary(&self) -> String {
        format!(
            "- Stream: {}\n- Marks: {}%\n- Subjects: {}\n- Skills: {}\n- Primary interest: {}\n- Preferred location: {}",
            self.stream.as_str(),
            self.marks,
            or_unspecified(&self.subjects.join(", ")),
            or_unspecified(&self.declared_skills().join(", ")),
            or_unspecified(&self.interests),
            or_unspecified(&self.location),
        )
    }
}

fn or_unspecified(value: &str) -> &str {
    match value.trim() {
        "" => "Not specified",
        trimmed => trimmed,
    }
}
