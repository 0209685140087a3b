use crate::components::card::card_style;
use crate::components::{badge, card, page_header, segmented_control, Tone};
use crate::model::appointments::{
    first_of_month, month_grid, shift_month, Appointment, AppointmentDraft, AppointmentKind,
    AppointmentStatus, APPOINTMENTS, TIME_SLOTS,
};
use crate::model::records::PATIENTS;
use crate::model::Toasts;
use crate::utils::{long_date, short_date};
use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, container, pick_list, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentView {
    #[default]
    Calendar,
    List,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectDate(NaiveDate),
    PreviousMonth,
    NextMonth,
    SetView(AppointmentView),
    OpenDialog,
    CloseDialog,
    DraftPatient(String),
    DraftTime(String),
    DraftKind(AppointmentKind),
    DraftNotes(String),
    Schedule,
}

#[derive(Debug)]
pub struct AppointmentsPage {
    today: NaiveDate,
    selected_date: Option<NaiveDate>,
    visible_month: NaiveDate,
    view: AppointmentView,
    dialog: Option<AppointmentDraft>,
}

impl AppointmentsPage {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_date: Some(today),
            visible_month: first_of_month(today),
            view: AppointmentView::default(),
            dialog: None,
        }
    }

    pub fn update(&mut self, message: Message, toasts: &mut Toasts) {
        match message {
            Message::SelectDate(date) => {
                self.selected_date = Some(date);
                self.visible_month = first_of_month(date);
            }
            Message::PreviousMonth => {
                self.visible_month = shift_month(self.visible_month, false);
            }
            Message::NextMonth => {
                self.visible_month = shift_month(self.visible_month, true);
            }
            Message::SetView(view) => self.view = view,
            Message::OpenDialog => {
                self.dialog = Some(AppointmentDraft::new(self.selected_date));
            }
            Message::CloseDialog => self.dialog = None,
            Message::DraftPatient(patient) => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.patient = Some(patient);
                    draft.error = None;
                }
            }
            Message::DraftTime(time) => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.time = Some(time);
                    draft.error = None;
                }
            }
            Message::DraftKind(kind) => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.kind = kind;
                }
            }
            Message::DraftNotes(notes) => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.notes = notes;
                }
            }
            Message::Schedule => {
                let Some(draft) = self.dialog.as_mut() else {
                    return;
                };
                match draft.validate() {
                    Ok(()) => {
                        log::info!(
                            "Scheduled {} for {} at {}",
                            draft.kind,
                            draft.patient.as_deref().unwrap_or_default(),
                            draft.time.as_deref().unwrap_or_default()
                        );
                        self.dialog = None;
                        toasts.success(
                            "Appointment Scheduled",
                            "Appointment scheduled successfully",
                        );
                    }
                    Err(err) => {
                        log::debug!("Appointment draft rejected: {err}");
                        draft.error = Some(err);
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = page_header(
            "Appointments",
            "Schedule and manage patient appointments",
            Some(
                button("+ New Appointment")
                    .style(button::primary)
                    .on_press(Message::OpenDialog)
                    .into(),
            ),
        );

        let switch = segmented_control(
            &[
                ("Calendar", AppointmentView::Calendar),
                ("List", AppointmentView::List),
            ],
            self.view,
            Message::SetView,
        );

        let body: Element<'_, Message> = match self.view {
            AppointmentView::Calendar => row![
                container(self.calendar()).width(Length::FillPortion(1)),
                container(self.day_schedule()).width(Length::FillPortion(1)),
            ]
            .spacing(16)
            .into(),
            AppointmentView::List => self.day_schedule(),
        };

        let mut page = column![header, switch].spacing(16).padding(20);
        if let Some(draft) = &self.dialog {
            page = page.push(draft_form(draft));
        }
        page.push(body).into()
    }

    fn calendar(&self) -> Element<'_, Message> {
        let navigation = row![
            button("‹")
                .style(button::secondary)
                .on_press(Message::PreviousMonth),
            text(self.visible_month.format("%B %Y").to_string())
                .size(18)
                .width(Length::Fill)
                .align_x(Alignment::Center),
            button("›")
                .style(button::secondary)
                .on_press(Message::NextMonth),
        ]
        .align_y(Alignment::Center);

        let weekday_row = WEEKDAYS.iter().fold(Row::new(), |line, day| {
            line.push(
                text(*day)
                    .size(12)
                    .width(Length::FillPortion(1))
                    .align_x(Alignment::Center),
            )
        });

        let weeks = month_grid(self.visible_month)
            .into_iter()
            .fold(Column::new().spacing(4), |grid, week| {
                grid.push(week.into_iter().fold(Row::new().spacing(4), |line, day| {
                    line.push(self.day_cell(day))
                }))
            });

        card("Calendar", column![navigation, weekday_row, weeks].spacing(8)).into()
    }

    fn day_cell(&self, day: Option<NaiveDate>) -> Element<'_, Message> {
        let Some(day) = day else {
            return container(text(""))
                .width(Length::FillPortion(1))
                .into();
        };

        let selected = self.selected_date == Some(day);
        let is_today = day == self.today;
        let label = if is_today {
            format!("{}•", day.day())
        } else {
            day.day().to_string()
        };

        button(text(label).size(13).align_x(Alignment::Center))
            .width(Length::FillPortion(1))
            .style(move |theme, status| {
                if selected {
                    button::primary(theme, status)
                } else {
                    button::text(theme, status)
                }
            })
            .on_press(Message::SelectDate(day))
            .into()
    }

    fn day_schedule(&self) -> Element<'_, Message> {
        let title = match self.selected_date {
            Some(date) => long_date(date),
            None => "Select a date".to_string(),
        };

        let list = APPOINTMENTS
            .iter()
            .fold(Column::new().spacing(10), |list, appointment| {
                list.push(appointment_row(appointment))
            });

        card(title, list).into()
    }
}

fn appointment_row<'a>(appointment: &'static Appointment) -> Element<'a, Message> {
    let tone = match appointment.status {
        AppointmentStatus::Confirmed => Tone::Success,
        AppointmentStatus::Pending => Tone::Warning,
    };

    container(
        row![
            column![
                text(appointment.patient_name).size(15),
                text(format!("{} · {}", appointment.time, appointment.kind)).size(12),
            ]
            .spacing(2)
            .width(Length::Fill),
            badge(appointment.status.to_string(), tone),
        ]
        .align_y(Alignment::Center),
    )
    .padding(12)
    .style(card_style)
    .into()
}

fn draft_form(draft: &AppointmentDraft) -> Element<'_, Message> {
    let patients: Vec<String> = PATIENTS.iter().map(|p| p.name.to_string()).collect();
    let slots: Vec<String> = TIME_SLOTS.iter().map(|slot| slot.to_string()).collect();

    let date = draft
        .date
        .map(short_date)
        .unwrap_or_else(|| "No date selected".to_string());

    let mut form = column![
        row![
            column![
                text("Patient").size(13),
                pick_list(patients, draft.patient.clone(), Message::DraftPatient)
                    .placeholder("Select patient")
                    .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
            column![text("Date").size(13), text(date)]
                .spacing(4)
                .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            column![
                text("Time").size(13),
                pick_list(slots, draft.time.clone(), Message::DraftTime)
                    .placeholder("Select time")
                    .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
            column![
                text("Type").size(13),
                pick_list(AppointmentKind::ALL, Some(draft.kind), Message::DraftKind)
                    .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        text_input("Additional notes...", &draft.notes)
            .on_input(Message::DraftNotes)
            .padding(8),
    ]
    .spacing(12);

    if let Some(err) = &draft.error {
        form = form.push(text(err.to_string()).size(13));
    }

    form = form.push(
        row![
            button("Cancel")
                .style(button::secondary)
                .on_press(Message::CloseDialog),
            button("Schedule Appointment")
                .style(button::primary)
                .on_press(Message::Schedule),
        ]
        .spacing(12),
    );

    card("Schedule New Appointment", form).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppointmentError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    #[test]
    fn opens_on_today() {
        let page = AppointmentsPage::new(today());
        assert_eq!(page.selected_date, Some(today()));
        assert_eq!(page.visible_month, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(page.dialog.as_ref().is_none());
    }

    #[test]
    fn month_navigation_keeps_the_selection() {
        let mut page = AppointmentsPage::new(today());
        let mut toasts = Toasts::default();
        page.update(Message::NextMonth, &mut toasts);
        page.update(Message::NextMonth, &mut toasts);
        assert_eq!(page.visible_month, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(page.selected_date, Some(today()));

        page.update(Message::PreviousMonth, &mut toasts);
        assert_eq!(page.visible_month, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn incomplete_draft_stays_open_with_an_error() {
        let mut page = AppointmentsPage::new(today());
        let mut toasts = Toasts::default();
        page.update(Message::OpenDialog, &mut toasts);
        page.update(Message::Schedule, &mut toasts);

        let draft = page.dialog.as_ref().unwrap();
        assert_eq!(draft.error, Some(AppointmentError::MissingPatient));
        assert!(toasts.is_empty());

        page.update(Message::DraftPatient("Jane Smith".to_string()), &mut toasts);
        assert_eq!(page.dialog.as_ref().unwrap().error, None);
        page.update(Message::Schedule, &mut toasts);
        assert_eq!(
            page.dialog.as_ref().unwrap().error,
            Some(AppointmentError::MissingTime)
        );
    }

    #[test]
    fn valid_draft_closes_and_confirms() {
        let mut page = AppointmentsPage::new(today());
        let mut toasts = Toasts::default();
        page.update(Message::OpenDialog, &mut toasts);
        assert_eq!(page.dialog.as_ref().unwrap().date, Some(today()));

        page.update(Message::DraftPatient("John Doe".to_string()), &mut toasts);
        page.update(Message::DraftTime("10:00 AM".to_string()), &mut toasts);
        page.update(Message::DraftKind(AppointmentKind::FollowUp), &mut toasts);
        page.update(Message::Schedule, &mut toasts);

        assert!(page.dialog.as_ref().is_none());
        assert!(toasts
            .iter()
            .any(|toast| toast.description == "Appointment scheduled successfully"));
    }

    #[test]
    fn draft_edits_without_a_dialog_are_ignored() {
        let mut page = AppointmentsPage::new(today());
        let mut toasts = Toasts::default();
        page.update(Message::DraftPatient("John Doe".to_string()), &mut toasts);
        page.update(Message::Schedule, &mut toasts);
        assert!(page.dialog.as_ref().is_none());
        assert!(toasts.is_empty());
    }
}
