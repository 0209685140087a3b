use crate::components::{badge, card, page_header, Tone};
use crate::error::VoiceError;
use crate::model::voice::{ASSESSMENT_RECOMMENDATIONS, PRELIMINARY_ASSESSMENT};
use crate::model::{Completion, RecordingToggle, Ticket, Toasts, VitalField, VoiceSession};
use crate::services::{AudioClip, Services};
use crate::utils::preview;
use iced::task;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length, Task};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleRecording,
    TranscriptionFinished(Ticket, Result<String, VoiceError>),
    TranscriptionEdited(String),
    ClearTranscription,
    VitalChanged(VitalField, String),
    SymptomsChanged(String),
    SaveRecord,
}

#[derive(Default)]
pub struct VoicePage {
    session: VoiceSession,
    pending: Option<task::Handle>,
}

impl VoicePage {
    pub fn update(
        &mut self,
        message: Message,
        services: &Services,
        toasts: &mut Toasts,
    ) -> Task<Message> {
        match message {
            Message::ToggleRecording => match self.session.toggle_recording() {
                RecordingToggle::Started(ticket) => {
                    log::info!("Recording started");
                    toasts.info("Recording Started", "Speak clearly into your microphone");

                    let transcriber = Arc::clone(&services.transcriber);
                    let (task, handle) = Task::perform(
                        async move { transcriber.transcribe(AudioClip::default()).await },
                        move |outcome| Message::TranscriptionFinished(ticket, outcome),
                    )
                    .abortable();
                    // Replacing the handle aborts the previous capture.
                    self.pending = Some(handle.abort_on_drop());
                    task
                }
                RecordingToggle::Stopped => {
                    log::info!("Recording stopped before transcription finished");
                    self.pending = None;
                    Task::none()
                }
            },
            Message::TranscriptionFinished(ticket, outcome) => {
                let failure = outcome.as_ref().err().map(ToString::to_string);
                match self.session.finish_transcription(ticket, outcome) {
                    Completion::Applied => {
                        self.pending = None;
                        match failure {
                            None => {
                                toasts.success(
                                    "Recording Complete",
                                    "Voice input has been transcribed successfully",
                                );
                            }
                            Some(reason) => {
                                toasts.error("Transcription Failed", reason);
                            }
                        }
                    }
                    Completion::Stale => log::debug!("Dropped stale transcription"),
                }
                Task::none()
            }
            Message::TranscriptionEdited(text) => {
                self.session.set_transcription(text);
                Task::none()
            }
            Message::ClearTranscription => {
                self.session.clear_transcription();
                Task::none()
            }
            Message::VitalChanged(field, value) => {
                self.session.set_vital(field, value);
                Task::none()
            }
            Message::SymptomsChanged(symptoms) => {
                self.session.set_symptoms(symptoms);
                Task::none()
            }
            Message::SaveRecord => {
                let summary = self.session.summary();
                log::info!(
                    "Saved voice record: {} transcript chars, {} vitals, symptoms: {}",
                    summary.transcription_chars,
                    summary.vitals_recorded,
                    summary.has_symptoms
                );
                toasts.success("Record Saved", "Patient data has been saved successfully");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = page_header(
            "Voice Symptom Input",
            "Record patient symptoms and vital signs using voice commands",
            None,
        );

        let left = column![self.recorder(), self.transcription_card()]
            .spacing(16)
            .width(Length::FillPortion(1));

        let mut right = column![self.vitals_card(), self.symptoms_card()]
            .spacing(16)
            .width(Length::FillPortion(1));

        if self.session.has_assessment_input() {
            right = right.push(assessment_card());
        }

        column![header, row![left, right].spacing(16)]
            .spacing(20)
            .padding(20)
            .into()
    }

    fn recorder(&self) -> Element<'_, Message> {
        let recording = self.session.is_recording();
        let (label, hint) = if recording {
            ("■ Stop Recording", "Recording... Speak clearly")
        } else {
            ("● Start Recording", "Tap to start recording")
        };

        let mut body = column![
            button(text(label).size(18))
                .padding([14, 28])
                .style(move |theme, status| {
                    if recording {
                        button::danger(theme, status)
                    } else {
                        button::primary(theme, status)
                    }
                })
                .on_press(Message::ToggleRecording),
            text(hint).size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        if recording {
            body = body.push(badge("LIVE", Tone::Danger));
        }
        if let Some(err) = self.session.last_error() {
            body = body.push(text(err.to_string()).size(13));
        }

        card("Voice Recording", body).into()
    }

    fn transcription_card(&self) -> Element<'_, Message> {
        let transcription = self.session.transcription();

        let body: Element<'_, Message> = if transcription.is_empty() {
            text("Start recording to see transcription here...")
                .size(14)
                .into()
        } else {
            column![
                text_input("Transcription", transcription)
                    .on_input(Message::TranscriptionEdited)
                    .padding(8),
                text(preview(transcription)).size(12).wrapping(Wrapping::Word),
                button("Clear")
                    .style(button::secondary)
                    .on_press(Message::ClearTranscription),
            ]
            .spacing(10)
            .into()
        };

        card("Transcription", body).into()
    }

    fn vitals_card(&self) -> Element<'_, Message> {
        let vitals = self.session.vitals();
        let grid = VitalField::ALL
            .chunks(2)
            .fold(Column::new().spacing(10), |grid, pair| {
                grid.push(pair.iter().fold(Row::new().spacing(12), |line, field| {
                    let field = *field;
                    line.push(
                        column![
                            text(field.label()).size(13),
                            text_input(field.placeholder(), vitals.get(field))
                                .on_input(move |value| Message::VitalChanged(field, value))
                                .padding(6),
                        ]
                        .spacing(4)
                        .width(Length::FillPortion(1)),
                    )
                }))
            });

        card("Vital Signs", grid).into()
    }

    fn symptoms_card(&self) -> Element<'_, Message> {
        let body = column![
            text_input(
                "Describe any additional symptoms or observations...",
                self.session.symptoms(),
            )
            .on_input(Message::SymptomsChanged)
            .padding(8),
            button("Save Patient Record")
                .width(Length::Fill)
                .style(button::primary)
                .on_press(Message::SaveRecord),
        ]
        .spacing(12);

        card("Additional Symptoms", body).into()
    }
}

fn assessment_card<'a>() -> Element<'a, Message> {
    let recommendations = ASSESSMENT_RECOMMENDATIONS
        .iter()
        .fold(Column::new().spacing(4), |list, rec| {
            list.push(text(format!("• {rec}")).size(13))
        });

    card(
        "AI Preliminary Assessment",
        column![
            text(PRELIMINARY_ASSESSMENT).size(14).wrapping(Wrapping::Word),
            text("Recommendations").size(15),
            recommendations,
        ]
        .spacing(8),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::transcriber::MOCK_TRANSCRIPTION;

    fn fixture() -> (VoicePage, Services, Toasts) {
        (
            VoicePage::default(),
            Services::mock(&Settings::default()),
            Toasts::default(),
        )
    }

    #[test]
    fn starting_a_recording_schedules_transcription() {
        let (mut page, services, mut toasts) = fixture();
        let _ = page.update(Message::ToggleRecording, &services, &mut toasts);

        assert!(page.session.is_recording());
        assert!(page.pending.is_some());
        assert!(toasts.iter().any(|toast| toast.title == "Recording Started"));
    }

    #[test]
    fn stopping_drops_the_pending_capture() {
        let (mut page, services, mut toasts) = fixture();
        let _ = page.update(Message::ToggleRecording, &services, &mut toasts);
        let _ = page.update(Message::ToggleRecording, &services, &mut toasts);

        assert!(!page.session.is_recording());
        assert!(page.pending.is_none());
        assert_eq!(page.session.transcription(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn completed_transcription_fills_the_text() {
        let (mut page, services, mut toasts) = fixture();
        let RecordingToggle::Started(ticket) = page.session.toggle_recording() else {
            panic!("expected recording to start");
        };
        let outcome = services.transcriber.transcribe(AudioClip::default()).await;

        let _ = page.update(Message::TranscriptionFinished(ticket, outcome), &services, &mut toasts);

        assert!(!page.session.is_recording());
        assert_eq!(page.session.transcription(), MOCK_TRANSCRIPTION);
        assert!(toasts.iter().any(|toast| toast.title == "Recording Complete"));
    }

    #[test]
    fn stale_transcription_is_ignored() {
        let (mut page, services, mut toasts) = fixture();
        let RecordingToggle::Started(ticket) = page.session.toggle_recording() else {
            panic!("expected recording to start");
        };
        page.session.toggle_recording();

        let outcome = Ok("late".to_string());
        let _ = page.update(Message::TranscriptionFinished(ticket, outcome), &services, &mut toasts);

        assert_eq!(page.session.transcription(), "");
        assert!(toasts.is_empty());
    }

    #[test]
    fn typed_vitals_reveal_the_assessment() {
        let (mut page, services, mut toasts) = fixture();
        assert!(!page.session.has_assessment_input());

        let _ = page.update(
            Message::VitalChanged(VitalField::Temperature, "36.8".to_string()),
            &services,
            &mut toasts,
        );
        assert_eq!(page.session.vitals().get(VitalField::Temperature), "36.8");
        assert!(page.session.has_assessment_input());
    }

    #[test]
    fn saving_confirms_with_a_toast() {
        let (mut page, services, mut toasts) = fixture();
        let _ = page.update(
            Message::SymptomsChanged("persistent cough".to_string()),
            &services,
            &mut toasts,
        );
        let _ = page.update(Message::SaveRecord, &services, &mut toasts);

        assert_eq!(page.session.symptoms(), "persistent cough");
        assert!(toasts.iter().any(|toast| toast.title == "Record Saved"));
    }

    #[test]
    fn clearing_empties_the_transcription() {
        let (mut page, services, mut toasts) = fixture();
        let _ = page.update(
            Message::TranscriptionEdited("dizzy spells".to_string()),
            &services,
            &mut toasts,
        );
        let _ = page.update(Message::ClearTranscription, &services, &mut toasts);
        assert_eq!(page.session.transcription(), "");
    }
}
