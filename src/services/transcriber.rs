use crate::error::VoiceError;
use async_trait::async_trait;
use std::time::Duration;

pub const MOCK_TRANSCRIPTION: &str = "Patient reports mild headache for the past 2 days, \
     occasional dizziness, and difficulty sleeping. No fever, no nausea. Pain level is 4 out of 10.";

/// Captured microphone audio. The desktop demo has no capture backend, so
/// clips handed to the mock are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioClip {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    async fn transcribe(&self, clip: AudioClip) -> Result<String, VoiceError>;
}

#[derive(Debug, Clone)]
pub struct MockTranscriber {
    delay: Duration,
}

impl MockTranscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SpeechTranscriber for MockTranscriber {
    async fn transcribe(&self, clip: AudioClip) -> Result<String, VoiceError> {
        log::info!(
            "Mock transcription of {} samples scheduled in {} ms",
            clip.samples.len(),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(MOCK_TRANSCRIPTION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn returns_the_fixed_transcription_after_the_delay() {
        let transcriber = MockTranscriber::new(Duration::from_millis(5000));
        let started = Instant::now();

        let text = transcriber.transcribe(AudioClip::default()).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(5000));
        assert!(elapsed <= Duration::from_millis(5001));
        assert!(text.starts_with("Patient reports mild headache"));
    }
}
