use async_trait::async_trait;

use business::domain::catalog::mood::{Mood, MoodDetector};

/// Mood typed by the user in place of a camera capture.
pub struct ManualMoodDetector {
    label: Option<String>,
}

impl ManualMoodDetector {
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }
}

#[async_trait]
impl MoodDetector for ManualMoodDetector {
    async fn detect(&self) -> Option<Mood> {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .map(Mood::new)
    }
}
