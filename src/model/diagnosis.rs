use super::ticket::{Completion, Ticket, TicketCounter};
use crate::error::DiagnosisError;
use crate::utils::percent;
use iced::widget::image::Handle;
use std::fmt::Write as _;
use std::sync::Arc;

/// An image picked for analysis, held fully in memory.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
    pub handle: Handle,
}

impl SelectedImage {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        let handle = Handle::from_bytes(bytes.to_vec());
        Self {
            file_name: file_name.into(),
            bytes,
            handle,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFinding {
    pub name: String,
    pub confidence: f32,
}

/// Box over the analysed image; every field is a percentage of the image size.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisReport {
    pub confidence: f32,
    pub primary_diagnosis: String,
    pub secondary_diagnoses: Vec<ScoredFinding>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub annotations: Vec<Annotation>,
}

impl DiagnosisReport {
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "AI Analysis Report");
        let _ = writeln!(out, "==================");
        let _ = writeln!(
            out,
            "Primary diagnosis: {} ({} confidence)",
            self.primary_diagnosis,
            percent(self.confidence)
        );
        let _ = writeln!(out, "Risk level: {}", self.risk_level.label());

        if !self.secondary_diagnoses.is_empty() {
            let _ = writeln!(out, "\nAlternative diagnoses:");
            for finding in &self.secondary_diagnoses {
                let _ = writeln!(out, "  - {} ({})", finding.name, percent(finding.confidence));
            }
        }

        if !self.recommendations.is_empty() {
            let _ = writeln!(out, "\nRecommendations:");
            for rec in &self.recommendations {
                let _ = writeln!(out, "  - {rec}");
            }
        }

        if !self.annotations.is_empty() {
            let _ = writeln!(out, "\nAnnotations:");
            for a in &self.annotations {
                let _ = writeln!(
                    out,
                    "  - {} at ({}%, {}%) size {}% x {}%",
                    a.label, a.x, a.y, a.width, a.height
                );
            }
        }

        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisPhase {
    Empty,
    ImageSelected,
    Analyzing,
    ResultsReady,
}

#[derive(Debug, Default)]
enum Analysis {
    #[default]
    Idle,
    Running(Ticket),
    Done(DiagnosisReport),
}

/// View state of the diagnosis page.
#[derive(Debug, Default)]
pub struct DiagnosisSession {
    image: Option<SelectedImage>,
    analysis: Analysis,
    tickets: TicketCounter,
    last_error: Option<DiagnosisError>,
}

impl DiagnosisSession {
    pub fn phase(&self) -> DiagnosisPhase {
        match (&self.image, &self.analysis) {
            (None, _) => DiagnosisPhase::Empty,
            (Some(_), Analysis::Running(_)) => DiagnosisPhase::Analyzing,
            (Some(_), Analysis::Done(_)) => DiagnosisPhase::ResultsReady,
            (Some(_), Analysis::Idle) => DiagnosisPhase::ImageSelected,
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn report(&self) -> Option<&DiagnosisReport> {
        match &self.analysis {
            Analysis::Done(report) => Some(report),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&DiagnosisError> {
        self.last_error.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.analysis, Analysis::Running(_))
    }

    /// Holds a new image. Prior results and any in-flight analysis are dropped.
    pub fn select_image(&mut self, image: SelectedImage) {
        log::info!(
            "Selected image {} ({} bytes)",
            image.file_name,
            image.len()
        );
        self.image = Some(image);
        self.analysis = Analysis::Idle;
        self.last_error = None;
    }

    pub fn clear(&mut self) {
        self.image = None;
        self.analysis = Analysis::Idle;
        self.last_error = None;
    }

    pub fn begin_analysis(&mut self) -> Result<(Ticket, SelectedImage), DiagnosisError> {
        let image = self
            .image
            .clone()
            .ok_or(DiagnosisError::NoImageSelected)?;

        if self.is_analyzing() {
            return Err(DiagnosisError::AlreadyAnalyzing);
        }

        let ticket = self.tickets.issue();
        self.analysis = Analysis::Running(ticket);
        self.last_error = None;
        Ok((ticket, image))
    }

    pub fn finish_analysis(
        &mut self,
        ticket: Ticket,
        outcome: Result<DiagnosisReport, DiagnosisError>,
    ) -> Completion {
        match self.analysis {
            Analysis::Running(current) if current == ticket => {}
            _ => return Completion::Stale,
        }

        match outcome {
            Ok(report) => {
                self.analysis = Analysis::Done(report);
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("Analysis failed: {err}");
                self.analysis = Analysis::Idle;
                self.last_error = Some(err);
            }
        }
        Completion::Applied
    }

    pub fn image_read_failed(&mut self, err: DiagnosisError) {
        log::error!("{err}");
        self.last_error = Some(err);
    }

    pub fn set_error(&mut self, err: DiagnosisError) {
        self.last_error = Some(err);
    }
}
