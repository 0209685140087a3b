use super::ticket::{Completion, Ticket, TicketCounter};
use crate::error::VoiceError;

pub const PRELIMINARY_ASSESSMENT: &str = "Based on reported symptoms: mild tension headache with \
     stress-related sleep disturbance. Vital signs within normal range.";

pub const ASSESSMENT_RECOMMENDATIONS: [&str; 3] = [
    "Consider stress management techniques",
    "Monitor sleep patterns",
    "Follow up if symptoms persist > 7 days",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalField {
    Temperature,
    BloodPressure,
    HeartRate,
    OxygenSaturation,
    Weight,
    Height,
}

impl VitalField {
    pub const ALL: [VitalField; 6] = [
        VitalField::Temperature,
        VitalField::HeartRate,
        VitalField::BloodPressure,
        VitalField::OxygenSaturation,
        VitalField::Weight,
        VitalField::Height,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VitalField::Temperature => "Temperature (°C)",
            VitalField::BloodPressure => "Blood Pressure (mmHg)",
            VitalField::HeartRate => "Heart Rate (bpm)",
            VitalField::OxygenSaturation => "O2 Saturation (%)",
            VitalField::Weight => "Weight (kg)",
            VitalField::Height => "Height (cm)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            VitalField::Temperature => "36.5",
            VitalField::BloodPressure => "120/80",
            VitalField::HeartRate => "72",
            VitalField::OxygenSaturation => "98",
            VitalField::Weight => "70",
            VitalField::Height => "175",
        }
    }
}

/// Raw text as typed; nothing here is parsed or cross-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vitals {
    pub temperature: String,
    pub blood_pressure: String,
    pub heart_rate: String,
    pub oxygen_saturation: String,
    pub weight: String,
    pub height: String,
}

impl Vitals {
    pub fn get(&self, field: VitalField) -> &str {
        match field {
            VitalField::Temperature => &self.temperature,
            VitalField::BloodPressure => &self.blood_pressure,
            VitalField::HeartRate => &self.heart_rate,
            VitalField::OxygenSaturation => &self.oxygen_saturation,
            VitalField::Weight => &self.weight,
            VitalField::Height => &self.height,
        }
    }

    fn slot(&mut self, field: VitalField) -> &mut String {
        match field {
            VitalField::Temperature => &mut self.temperature,
            VitalField::BloodPressure => &mut self.blood_pressure,
            VitalField::HeartRate => &mut self.heart_rate,
            VitalField::OxygenSaturation => &mut self.oxygen_saturation,
            VitalField::Weight => &mut self.weight,
            VitalField::Height => &mut self.height,
        }
    }

    pub fn filled(&self) -> usize {
        VitalField::ALL
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingToggle {
    Started(Ticket),
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceRecordSummary {
    pub transcription_chars: usize,
    pub vitals_recorded: usize,
    pub has_symptoms: bool,
}

/// View state of the voice input page.
#[derive(Debug, Default)]
pub struct VoiceSession {
    recording: Option<Ticket>,
    tickets: TicketCounter,
    transcription: String,
    vitals: Vitals,
    symptoms: String,
    last_error: Option<VoiceError>,
}

impl VoiceSession {
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    pub fn transcription(&self) -> &str {
        &self.transcription
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn last_error(&self) -> Option<&VoiceError> {
        self.last_error.as_ref()
    }

    /// Stopping drops the pending capture; it never yields a transcription.
    pub fn toggle_recording(&mut self) -> RecordingToggle {
        match self.recording.take() {
            Some(_) => RecordingToggle::Stopped,
            None => {
                let ticket = self.tickets.issue();
                self.recording = Some(ticket);
                self.last_error = None;
                RecordingToggle::Started(ticket)
            }
        }
    }

    pub fn finish_transcription(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, VoiceError>,
    ) -> Completion {
        if self.recording != Some(ticket) {
            return Completion::Stale;
        }

        self.recording = None;
        match outcome {
            Ok(text) => {
                self.transcription = text;
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err);
            }
        }
        Completion::Applied
    }

    pub fn set_transcription(&mut self, text: String) {
        self.transcription = text;
    }

    pub fn clear_transcription(&mut self) {
        self.transcription.clear();
    }

    pub fn set_vital(&mut self, field: VitalField, value: String) {
        *self.vitals.slot(field) = value;
    }

    pub fn set_symptoms(&mut self, symptoms: String) {
        self.symptoms = symptoms;
    }

    pub fn has_assessment_input(&self) -> bool {
        !self.transcription.is_empty() || self.vitals.filled() > 0
    }

    pub fn summary(&self) -> VoiceRecordSummary {
        VoiceRecordSummary {
            transcription_chars: self.transcription.chars().count(),
            vitals_recorded: self.vitals.filled(),
            has_symptoms: !self.symptoms.trim().is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "Patient reports mild headache for the past 2 days.";

    #[test]
    fn recording_completes_with_transcription() {
        let mut session = VoiceSession::default();
        let RecordingToggle::Started(ticket) = session.toggle_recording() else {
            panic!("expected recording to start");
        };
        assert!(session.is_recording());

        let completion = session.finish_transcription(ticket, Ok(TRANSCRIPT.to_string()));
        assert_eq!(completion, Completion::Applied);
        assert!(!session.is_recording());
        assert_eq!(session.transcription(), TRANSCRIPT);
    }

    #[test]
    fn manual_stop_discards_the_pending_transcription() {
        let mut session = VoiceSession::default();
        let RecordingToggle::Started(ticket) = session.toggle_recording() else {
            panic!("expected recording to start");
        };
        assert_eq!(session.toggle_recording(), RecordingToggle::Stopped);

        // The original timer still fires later; its result must not land.
        let completion = session.finish_transcription(ticket, Ok(TRANSCRIPT.to_string()));
        assert_eq!(completion, Completion::Stale);
        assert_eq!(session.transcription(), "");
        assert!(!session.is_recording());
    }

    #[test]
    fn rapid_toggling_only_honours_the_latest_recording() {
        let mut session = VoiceSession::default();
        let RecordingToggle::Started(first) = session.toggle_recording() else {
            panic!("expected recording to start");
        };
        session.toggle_recording();
        let RecordingToggle::Started(second) = session.toggle_recording() else {
            panic!("expected recording to restart");
        };
        assert_ne!(first, second);

        assert_eq!(
            session.finish_transcription(first, Ok("old".to_string())),
            Completion::Stale
        );
        assert!(session.is_recording());
        assert_eq!(
            session.finish_transcription(second, Ok("new".to_string())),
            Completion::Applied
        );
        assert_eq!(session.transcription(), "new");
    }

    #[test]
    fn failed_transcription_returns_to_idle() {
        let mut session = VoiceSession::default();
        let RecordingToggle::Started(ticket) = session.toggle_recording() else {
            panic!("expected recording to start");
        };
        let err = VoiceError::Transcription("microphone unavailable".to_string());
        session.finish_transcription(ticket, Err(err.clone()));
        assert!(!session.is_recording());
        assert_eq!(session.last_error(), Some(&err));
        assert_eq!(session.transcription(), "");
    }

    #[test]
    fn vitals_are_stored_verbatim_and_independently() {
        let mut session = VoiceSession::default();
        session.set_vital(VitalField::HeartRate, "seventy-two".to_string());
        session.set_vital(VitalField::BloodPressure, "120/80".to_string());

        assert_eq!(session.vitals().get(VitalField::HeartRate), "seventy-two");
        assert_eq!(session.vitals().get(VitalField::BloodPressure), "120/80");
        assert_eq!(session.vitals().get(VitalField::Temperature), "");
        assert_eq!(session.vitals().filled(), 2);
    }

    #[test]
    fn assessment_needs_transcription_or_vitals() {
        let mut session = VoiceSession::default();
        session.set_symptoms("dizziness".to_string());
        assert!(!session.has_assessment_input());

        session.set_vital(VitalField::Weight, "70".to_string());
        assert!(session.has_assessment_input());

        session.set_vital(VitalField::Weight, String::new());
        session.set_transcription("headache".to_string());
        assert!(session.has_assessment_input());

        session.clear_transcription();
        assert!(!session.has_assessment_input());
    }

    #[test]
    fn summary_counts_what_was_captured() {
        let mut session = VoiceSession::default();
        session.set_transcription("héadache".to_string());
        session.set_vital(VitalField::Temperature, "36.9".to_string());
        session.set_symptoms("   ".to_string());

        assert_eq!(
            session.summary(),
            VoiceRecordSummary {
                transcription_chars: 8,
                vitals_recorded: 1,
                has_symptoms: false,
            }
        );
    }
}
