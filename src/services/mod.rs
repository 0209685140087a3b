//! Backend capabilities the pages depend on.
//!
//! Pages only see the traits; the shell hands them whichever implementation
//! [`Services`] was built with. The demo wires the fixed-delay mocks.

pub mod classifier;
pub mod transcriber;

use crate::config::Settings;
use std::sync::Arc;

pub use classifier::{ImageClassifier, MockClassifier};
pub use transcriber::{AudioClip, MockTranscriber, SpeechTranscriber};

#[derive(Clone)]
pub struct Services {
    pub classifier: Arc<dyn ImageClassifier>,
    pub transcriber: Arc<dyn SpeechTranscriber>,
}

impl Services {
    pub fn mock(settings: &Settings) -> Self {
        Self {
            classifier: Arc::new(MockClassifier::new(settings.analysis_delay)),
            transcriber: Arc::new(MockTranscriber::new(settings.transcription_delay)),
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
