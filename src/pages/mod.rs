//! One module per routable screen.
//!
//! Each page owns its view state and, where it starts background work, the
//! abort handle for it. Dropping a page on navigation cancels that work.

pub mod analytics;
pub mod appointments;
pub mod dashboard;
pub mod diagnosis;
pub mod not_found;
pub mod patients;
pub mod reports;
pub mod voice;

use crate::message::Message;
use crate::model::Route;
use chrono::NaiveDate;
use iced::Element;

pub use analytics::AnalyticsPage;
pub use appointments::AppointmentsPage;
pub use diagnosis::DiagnosisPage;
pub use patients::PatientsPage;
pub use reports::ReportsPage;
pub use voice::VoicePage;

pub enum Page {
    Dashboard,
    Diagnosis(DiagnosisPage),
    Voice(VoicePage),
    Patients(PatientsPage),
    Reports(ReportsPage),
    Appointments(AppointmentsPage),
    Analytics(AnalyticsPage),
    NotFound(String),
}

impl Page {
    /// Fresh state for the page behind `route`.
    pub fn mount(route: &Route, today: NaiveDate) -> Self {
        match route {
            Route::Dashboard => Page::Dashboard,
            Route::Diagnosis => Page::Diagnosis(DiagnosisPage::default()),
            Route::Voice => Page::Voice(VoicePage::default()),
            Route::Patients => Page::Patients(PatientsPage::default()),
            Route::Reports => Page::Reports(ReportsPage::default()),
            Route::Appointments => Page::Appointments(AppointmentsPage::new(today)),
            Route::Analytics => Page::Analytics(AnalyticsPage::default()),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            Page::Dashboard => dashboard::view(),
            Page::Diagnosis(page) => page.view().map(Message::Diagnosis),
            Page::Voice(page) => page.view().map(Message::Voice),
            Page::Patients(page) => page.view().map(Message::Patients),
            Page::Reports(page) => page.view().map(Message::Reports),
            Page::Appointments(page) => page.view().map(Message::Appointments),
            Page::Analytics(page) => page.view().map(Message::Analytics),
            Page::NotFound(path) => not_found::view(path),
        }
    }
}
