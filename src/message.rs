use crate::model::ToastId;
use crate::pages::{analytics, appointments, diagnosis, patients, reports, voice};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(String),
    ToggleRail,
    WindowResized(iced::Size),
    DismissToast(ToastId),
    Diagnosis(diagnosis::Message),
    Voice(voice::Message),
    Patients(patients::Message),
    Reports(reports::Message),
    Appointments(appointments::Message),
    Analytics(analytics::Message),
}
