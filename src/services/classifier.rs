use crate::error::DiagnosisError;
use crate::model::diagnosis::{Annotation, RiskLevel, ScoredFinding};
use crate::model::{DiagnosisReport, SelectedImage};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, image: &SelectedImage) -> Result<DiagnosisReport, DiagnosisError>;
}

/// Waits a fixed delay, then answers with the same lesion report every time.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    delay: Duration,
}

impl MockClassifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ImageClassifier for MockClassifier {
    async fn classify(&self, image: &SelectedImage) -> Result<DiagnosisReport, DiagnosisError> {
        log::info!(
            "Mock analysis of {} scheduled in {} ms",
            image.file_name,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(mock_report())
    }
}

fn mock_report() -> DiagnosisReport {
    DiagnosisReport {
        confidence: 0.87,
        primary_diagnosis: "Skin Lesion - Melanocytic Nevus".to_string(),
        secondary_diagnoses: vec![
            ScoredFinding {
                name: "Seborrheic Keratosis".to_string(),
                confidence: 0.23,
            },
            ScoredFinding {
                name: "Atypical Mole".to_string(),
                confidence: 0.15,
            },
        ],
        risk_level: RiskLevel::Low,
        recommendations: vec![
            "Monitor for changes in size, shape, or color".to_string(),
            "Schedule follow-up in 6 months".to_string(),
            "Consider dermatologist consultation if changes occur".to_string(),
        ],
        annotations: vec![
            Annotation {
                x: 45.0,
                y: 30.0,
                width: 20.0,
                height: 25.0,
                label: "Primary lesion".to_string(),
            },
            Annotation {
                x: 70.0,
                y: 60.0,
                width: 15.0,
                height: 18.0,
                label: "Secondary finding".to_string(),
            },
        ],
    }
}
