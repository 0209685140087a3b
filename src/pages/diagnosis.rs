use crate::components::{badge, card, page_header, Tone};
use crate::error::DiagnosisError;
use crate::model::diagnosis::RiskLevel;
use crate::model::{
    Completion, DiagnosisPhase, DiagnosisReport, DiagnosisSession, SelectedImage, Ticket, Toasts,
};
use crate::services::Services;
use crate::utils::{byte_size, percent};
use iced::task;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Column, Image};
use iced::{Alignment, Element, Length, Task};
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];
const REPORT_FILE_NAME: &str = "diagnosis-report.txt";

const GUIDELINES: [&str; 4] = [
    "✔ Well-lit, clear images with good focus",
    "✔ Close-up view of the area of concern",
    "✔ Include reference objects for scale when possible",
    "⚠ Avoid blurry or heavily shadowed images",
];

#[derive(Debug, Clone)]
pub enum Message {
    CapturePhoto,
    PickImage,
    ImagePicked(Option<Result<SelectedImage, DiagnosisError>>),
    Analyze,
    AnalysisFinished(Ticket, Result<DiagnosisReport, DiagnosisError>),
    Clear,
    ExportReport,
    ReportExported(Result<Option<PathBuf>, DiagnosisError>),
}

#[derive(Default)]
pub struct DiagnosisPage {
    session: DiagnosisSession,
    /// Aborts the in-flight analysis when replaced or dropped.
    pending: Option<task::Handle>,
}

impl DiagnosisPage {
    #[cfg(test)]
    pub fn session(&self) -> &DiagnosisSession {
        &self.session
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            log::debug!("Cancelling in-flight analysis");
            handle.abort();
        }
    }

    pub fn update(
        &mut self,
        message: Message,
        services: &Services,
        toasts: &mut Toasts,
    ) -> Task<Message> {
        match message {
            Message::CapturePhoto => {
                toasts.info(
                    "Camera Access",
                    "Camera capture is not available on desktop. Upload an image instead.",
                );
                Task::none()
            }
            Message::PickImage => Task::perform(pick_image(), Message::ImagePicked),
            Message::ImagePicked(None) => {
                log::debug!("Image selection cancelled");
                Task::none()
            }
            Message::ImagePicked(Some(Ok(image))) => {
                self.cancel_pending();
                self.session.select_image(image);
                Task::none()
            }
            Message::ImagePicked(Some(Err(err))) => {
                toasts.error("Image Not Loaded", err.to_string());
                self.session.image_read_failed(err);
                Task::none()
            }
            Message::Analyze => match self.session.begin_analysis() {
                Ok((ticket, image)) => {
                    let classifier = Arc::clone(&services.classifier);
                    let (task, handle) = Task::perform(
                        async move { classifier.classify(&image).await },
                        move |outcome| Message::AnalysisFinished(ticket, outcome),
                    )
                    .abortable();
                    self.pending = Some(handle.abort_on_drop());
                    task
                }
                Err(err) => {
                    log::debug!("Analyze ignored: {err}");
                    Task::none()
                }
            },
            Message::AnalysisFinished(ticket, outcome) => {
                let failure = outcome.as_ref().err().map(ToString::to_string);
                match self.session.finish_analysis(ticket, outcome) {
                    Completion::Applied => {
                        self.pending = None;
                        match failure {
                            None => {
                                toasts.success(
                                    "Analysis Complete",
                                    "AI diagnosis has been generated successfully.",
                                );
                            }
                            Some(reason) => {
                                toasts.error("Analysis Failed", reason);
                            }
                        }
                    }
                    Completion::Stale => log::debug!("Dropped stale analysis result"),
                }
                Task::none()
            }
            Message::Clear => {
                self.cancel_pending();
                self.session.clear();
                Task::none()
            }
            Message::ExportReport => match self.session.report() {
                Some(report) => {
                    Task::perform(export_report(report.to_plain_text()), Message::ReportExported)
                }
                None => Task::none(),
            },
            Message::ReportExported(Ok(Some(path))) => {
                log::info!("Exported report to {}", path.display());
                toasts.success("Report Exported", path.display().to_string());
                Task::none()
            }
            Message::ReportExported(Ok(None)) => {
                log::debug!("Report export cancelled");
                Task::none()
            }
            Message::ReportExported(Err(err)) => {
                log::error!("{err}");
                toasts.error("Export Failed", err.to_string());
                self.session.set_error(err);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = page_header(
            "AI Image Diagnosis",
            "Upload or capture medical images for AI-powered diagnostic analysis",
            None,
        );

        let guidelines = GUIDELINES
            .iter()
            .fold(Column::new().spacing(6), |list, line| {
                list.push(text(*line).size(14))
            });

        let input_column = column![
            card("Image Input", self.image_input()),
            card("Image Guidelines", guidelines),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        let results_column = container(self.results_panel()).width(Length::FillPortion(1));

        column![header, row![input_column, results_column].spacing(16)]
            .spacing(20)
            .padding(20)
            .into()
    }

    fn image_input(&self) -> Element<'_, Message> {
        let mut content = match self.session.image() {
            None => column![
                text("Select an image to begin AI analysis"),
                row![
                    button("Take Photo")
                        .style(button::primary)
                        .on_press(Message::CapturePhoto),
                    button("Upload Image")
                        .style(button::secondary)
                        .on_press(Message::PickImage),
                ]
                .spacing(12),
                text("Supports skin lesions, eye conditions, wounds, and other visible medical conditions.")
                    .size(13)
                    .wrapping(Wrapping::Word),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
            Some(image) => {
                let analyzing = self.session.phase() == DiagnosisPhase::Analyzing;
                let analyze_label = if analyzing {
                    "Analyzing..."
                } else {
                    "Analyze with AI"
                };

                let mut preview = column![
                    Image::new(image.handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fixed(280.0)),
                    text(format!("{} ({})", image.file_name, byte_size(image.len()))).size(12),
                ]
                .spacing(8);

                if let Some(report) = self.session.report() {
                    preview = report.annotations.iter().fold(preview, |list, a| {
                        list.push(
                            text(format!(
                                "▭ {}: x {}%, y {}%, {}% × {}%",
                                a.label, a.x, a.y, a.width, a.height
                            ))
                            .size(12),
                        )
                    });
                }

                preview.push(
                    row![
                        button(analyze_label)
                            .width(Length::Fill)
                            .style(button::primary)
                            .on_press_maybe((!analyzing).then_some(Message::Analyze)),
                        button("Clear")
                            .style(button::secondary)
                            .on_press(Message::Clear),
                    ]
                    .spacing(12),
                )
            }
        };

        if let Some(err) = self.session.last_error() {
            content = content.push(text(err.to_string()).size(13).wrapping(Wrapping::Word));
        }

        content.into()
    }

    fn results_panel(&self) -> Element<'_, Message> {
        let Some(report) = self.session.report() else {
            return card(
                "AI Analysis Ready",
                text(
                    "Upload an image and click \"Analyze with AI\" to get instant diagnostic \
                     insights powered by advanced machine learning models.",
                )
                .wrapping(Wrapping::Word),
            )
            .into();
        };

        let risk_tone = match report.risk_level {
            RiskLevel::Low => Tone::Success,
            RiskLevel::Medium => Tone::Warning,
            RiskLevel::High => Tone::Danger,
        };

        let mut findings = column![
            row![
                text("Primary Diagnosis").size(16).width(Length::Fill),
                badge(format!("{} risk", report.risk_level.label()), risk_tone),
            ],
            row![
                text(&report.primary_diagnosis).width(Length::Fill),
                badge(format!("{} confidence", percent(report.confidence)), Tone::Primary),
            ]
            .spacing(8),
        ]
        .spacing(10);

        if !report.secondary_diagnoses.is_empty() {
            findings = findings.push(text("Alternative Diagnoses").size(16));
            findings = report
                .secondary_diagnoses
                .iter()
                .fold(findings, |list, finding| {
                    list.push(row![
                        text(&finding.name).size(14).width(Length::Fill),
                        badge(percent(finding.confidence), Tone::Neutral),
                    ])
                });
        }

        let recommendations = report
            .recommendations
            .iter()
            .fold(Column::new().spacing(6), |list, rec| {
                list.push(text(format!("✔ {rec}")).size(14).wrapping(Wrapping::Word))
            });

        column![
            card("AI Analysis Results", findings),
            card("Recommendations", recommendations),
            button("Export Report")
                .style(button::secondary)
                .on_press(Message::ExportReport),
        ]
        .spacing(16)
        .into()
    }
}

async fn pick_image() -> Option<Result<SelectedImage, DiagnosisError>> {
    let handle = AsyncFileDialog::new()
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await?;
    Some(load_image(handle.path().to_path_buf()).await)
}

/// Reads the whole file; the picker filter is the only type check.
pub async fn load_image(path: PathBuf) -> Result<SelectedImage, DiagnosisError> {
    log::info!("Loading image: {}", path.display());
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| DiagnosisError::ImageRead {
            path: path.clone(),
            reason: err.to_string(),
        })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SelectedImage::from_bytes(file_name, bytes))
}

async fn export_report(contents: String) -> Result<Option<PathBuf>, DiagnosisError> {
    let Some(handle) = AsyncFileDialog::new()
        .set_file_name(REPORT_FILE_NAME)
        .add_filter("Text", &["txt"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    write_report(&path, contents).await?;
    Ok(Some(path))
}

async fn write_report(path: &Path, contents: String) -> Result<(), DiagnosisError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|err| DiagnosisError::Export {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::diagnosis::tests::sample_image;

    fn page_with_image() -> (DiagnosisPage, Services, Toasts) {
        let mut page = DiagnosisPage::default();
        let services = Services::mock(&Settings::default());
        let mut toasts = Toasts::default();
        let _ = page.update(
            Message::ImagePicked(Some(Ok(sample_image()))),
            &services,
            &mut toasts,
        );
        (page, services, toasts)
    }

    #[test]
    fn picking_an_image_selects_it() {
        let (page, _, _) = page_with_image();
        assert_eq!(page.session().phase(), DiagnosisPhase::ImageSelected);
    }

    #[test]
    fn cancelled_picker_leaves_state_alone() {
        let mut page = DiagnosisPage::default();
        let services = Services::mock(&Settings::default());
        let mut toasts = Toasts::default();
        let _ = page.update(Message::ImagePicked(None), &services, &mut toasts);
        assert_eq!(page.session().phase(), DiagnosisPhase::Empty);
        assert!(toasts.is_empty());
    }

    #[test]
    fn analyze_twice_schedules_once() {
        let (mut page, services, mut toasts) = page_with_image();
        let _ = page.update(Message::Analyze, &services, &mut toasts);
        assert!(page.pending.is_some());
        assert_eq!(page.session().phase(), DiagnosisPhase::Analyzing);

        let _ = page.update(Message::Analyze, &services, &mut toasts);
        assert_eq!(page.session().phase(), DiagnosisPhase::Analyzing);
    }

    #[tokio::test(start_paused = true)]
    async fn mock_result_lands_as_results_ready() {
        let (mut page, services, mut toasts) = page_with_image();
        let (ticket, image) = page.session.begin_analysis().unwrap();
        let outcome = services.classifier.classify(&image).await;

        let _ = page.update(Message::AnalysisFinished(ticket, outcome), &services, &mut toasts);

        assert_eq!(page.session().phase(), DiagnosisPhase::ResultsReady);
        let report = page.session().report().unwrap();
        assert_eq!(report.confidence, 0.87);
        assert_eq!(report.annotations.len(), 2);
        assert!(page.pending.is_none());
        assert!(toasts.iter().any(|toast| toast.title == "Analysis Complete"));
    }

    #[test]
    fn success_toast_ignores_an_earlier_read_error() {
        let (mut page, services, mut toasts) = page_with_image();
        let (ticket, _) = page.session.begin_analysis().unwrap();
        let err = DiagnosisError::ImageRead {
            path: PathBuf::from("b.png"),
            reason: "EIO".to_string(),
        };
        let _ = page.update(Message::ImagePicked(Some(Err(err))), &services, &mut toasts);

        let report = crate::model::diagnosis::tests::sample_report();
        let _ = page.update(Message::AnalysisFinished(ticket, Ok(report)), &services, &mut toasts);

        assert_eq!(page.session().phase(), DiagnosisPhase::ResultsReady);
        assert!(page.session().last_error().is_none());
        assert!(toasts.iter().any(|toast| toast.title == "Analysis Complete"));
        assert!(!toasts.iter().any(|toast| toast.title == "Analysis Failed"));
    }

    #[test]
    fn failed_analysis_toast_carries_the_reason() {
        let (mut page, services, mut toasts) = page_with_image();
        let (ticket, _) = page.session.begin_analysis().unwrap();
        let outcome = Err(DiagnosisError::Analysis("model offline".to_string()));
        let _ = page.update(Message::AnalysisFinished(ticket, outcome), &services, &mut toasts);

        assert_eq!(page.session().phase(), DiagnosisPhase::ImageSelected);
        assert!(toasts.iter().any(|toast| {
            toast.title == "Analysis Failed" && toast.description.contains("model offline")
        }));
    }

    #[test]
    fn clear_cancels_and_empties() {
        let (mut page, services, mut toasts) = page_with_image();
        let _ = page.update(Message::Analyze, &services, &mut toasts);
        let _ = page.update(Message::Clear, &services, &mut toasts);

        assert!(page.pending.is_none());
        assert_eq!(page.session().phase(), DiagnosisPhase::Empty);
        assert!(page.session().image().is_none());
        assert!(page.session().report().is_none());
    }

    #[test]
    fn read_failure_surfaces_an_error_toast() {
        let mut page = DiagnosisPage::default();
        let services = Services::mock(&Settings::default());
        let mut toasts = Toasts::default();
        let err = DiagnosisError::ImageRead {
            path: PathBuf::from("missing.png"),
            reason: "No such file or directory".to_string(),
        };
        let _ = page.update(Message::ImagePicked(Some(Err(err))), &services, &mut toasts);

        assert_eq!(page.session().phase(), DiagnosisPhase::Empty);
        assert!(page.session().last_error().is_some());
        assert!(toasts.iter().any(|toast| toast.title == "Image Not Loaded"));
    }

    #[tokio::test]
    async fn load_image_reports_missing_files() {
        let path = std::env::temp_dir().join("medicare-plus-does-not-exist.png");
        let err = load_image(path.clone()).await.unwrap_err();
        assert!(matches!(err, DiagnosisError::ImageRead { path: p, .. } if p == path));
    }

    #[tokio::test]
    async fn load_image_keeps_any_bytes() {
        let path = std::env::temp_dir().join(format!("medicare-plus-{}.txt", std::process::id()));
        tokio::fs::write(&path, b"not really an image").await.unwrap();

        let image = load_image(path.clone()).await.unwrap();
        assert_eq!(image.len(), 19);
        assert!(image.file_name.starts_with("medicare-plus-"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn report_is_written_as_plain_text() {
        let path = std::env::temp_dir().join(format!("medicare-report-{}.txt", std::process::id()));
        let report = crate::model::diagnosis::tests::sample_report();

        write_report(&path, report.to_plain_text()).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("Skin Lesion - Melanocytic Nevus"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
