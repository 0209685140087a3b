use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosisError {
    #[error("Select an image before running the analysis")]
    NoImageSelected,

    #[error("An analysis is already running")]
    AlreadyAnalyzing,

    #[error("{}: failed to read image ({reason})", path.display())]
    ImageRead { path: PathBuf, reason: String },

    #[error("Image analysis failed: {0}")]
    Analysis(String),

    #[error("{}: failed to export report ({reason})", path.display())]
    Export { path: PathBuf, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoiceError {
    #[error("Transcription failed: {0}")]
    Transcription(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Select a patient for the appointment")]
    MissingPatient,

    #[error("Select a time slot for the appointment")]
    MissingTime,
}
