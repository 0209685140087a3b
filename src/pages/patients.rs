use crate::components::card::card_style;
use crate::components::{badge, page_header, segmented_control, Tone};
use crate::model::records::{
    filter_records, status_tabs, Patient, PatientStatus, StatusFilter, PATIENTS,
};
use iced::widget::{column, container, row, text, text_input, Column};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    TabSelected(StatusFilter<PatientStatus>),
}

#[derive(Debug, Default)]
pub struct PatientsPage {
    query: String,
    tab: StatusFilter<PatientStatus>,
}

impl PatientsPage {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::QueryChanged(query) => self.query = query,
            Message::TabSelected(tab) => self.tab = tab,
        }
    }

    pub fn visible(&self) -> Vec<&'static Patient> {
        filter_records(&PATIENTS, &self.query, &self.tab)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = page_header(
            "Patient Management",
            "View and manage patient records and medical history",
            None,
        );

        let search = text_input("Search patients by name or ID...", &self.query)
            .on_input(Message::QueryChanged)
            .padding(10);

        let tabs = segmented_control(
            &status_tabs(&PatientStatus::ALL, PatientStatus::label),
            self.tab,
            Message::TabSelected,
        );

        let visible = self.visible();
        let list: Element<'_, Message> = if visible.is_empty() {
            text("No patients match the current search.").into()
        } else {
            visible
                .into_iter()
                .fold(Column::new().spacing(12), |list, patient| {
                    list.push(patient_row(patient))
                })
                .into()
        };

        column![header, search, tabs, list]
            .spacing(16)
            .padding(20)
            .into()
    }
}

fn status_tone(status: PatientStatus) -> Tone {
    match status {
        PatientStatus::Active => Tone::Success,
        PatientStatus::Critical => Tone::Danger,
        PatientStatus::Inactive => Tone::Neutral,
    }
}

fn patient_row<'a>(patient: &'static Patient) -> Element<'a, Message> {
    let conditions = if patient.conditions.is_empty() {
        "No recorded conditions".to_string()
    } else {
        patient.conditions.join(", ")
    };

    let details = column![
        row![
            text(patient.name).size(18).width(Length::Fill),
            badge(patient.status.to_string(), status_tone(patient.status)),
        ]
        .spacing(8),
        text(format!(
            "{} · {} years · {} · Last visit {}",
            patient.id, patient.age, patient.gender, patient.last_visit
        ))
        .size(13),
        text(conditions).size(13),
        text(format!("{} · {}", patient.contact_number, patient.email)).size(12),
    ]
    .spacing(6);

    container(details)
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
        .into()
}
