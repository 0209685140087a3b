use crate::components::{card, page_header, segmented_control};
use crate::model::analytics::{
    proportions, vital_range, AnalyticsTab, Share, VitalTrend, AGE_DISTRIBUTION,
    DIAGNOSIS_DISTRIBUTION, VITAL_TRENDS,
};
use crate::model::records::PATIENTS;
use crate::utils::percent;
use iced::widget::{column, pick_list, progress_bar, row, text, Column};
use iced::{Element, Length};

const ALL_PATIENTS: &str = "All Patients";

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(AnalyticsTab),
    PatientSelected(String),
}

#[derive(Debug)]
pub struct AnalyticsPage {
    tab: AnalyticsTab,
    patient: String,
}

impl Default for AnalyticsPage {
    fn default() -> Self {
        Self {
            tab: AnalyticsTab::default(),
            patient: ALL_PATIENTS.to_string(),
        }
    }
}

impl AnalyticsPage {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::TabSelected(tab) => self.tab = tab,
            Message::PatientSelected(patient) => {
                log::debug!("Analytics filtered to {patient}");
                self.patient = patient;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let patients: Vec<String> = std::iter::once(ALL_PATIENTS.to_string())
            .chain(PATIENTS.iter().map(|p| p.name.to_string()))
            .collect();

        let header = page_header(
            "Health Analytics",
            "Population trends across vitals, diagnoses and demographics",
            Some(
                pick_list(patients, Some(self.patient.clone()), Message::PatientSelected)
                    .width(Length::Fixed(200.0))
                    .into(),
            ),
        );

        let tabs = segmented_control(
            &[
                ("Vital Signs", AnalyticsTab::Vitals),
                ("Diagnoses", AnalyticsTab::Diagnoses),
                ("Demographics", AnalyticsTab::Demographics),
            ],
            self.tab,
            Message::TabSelected,
        );

        let body = match self.tab {
            AnalyticsTab::Vitals => vitals_panel(),
            AnalyticsTab::Diagnoses => {
                share_chart("Diagnosis Distribution", &DIAGNOSIS_DISTRIBUTION)
            }
            AnalyticsTab::Demographics => share_chart("Patient Age Groups", &AGE_DISTRIBUTION),
        };

        column![header, tabs, body].spacing(16).padding(20).into()
    }
}

fn vitals_panel<'a>() -> Element<'a, Message> {
    let charts: [(&str, fn(&VitalTrend) -> f32); 4] = [
        ("Heart Rate (bpm)", |row| row.heart_rate),
        ("Systolic Pressure (mmHg)", |row| row.blood_pressure),
        ("Temperature (°F)", |row| row.temperature),
        ("O2 Saturation (%)", |row| row.oxygen_saturation),
    ];

    charts
        .into_iter()
        .fold(Column::new().spacing(16), |panel, (title, pick)| {
            panel.push(trend_chart(title, pick))
        })
        .into()
}

/// Bars are scaled between the series minimum and maximum, padded so the
/// lowest month still shows.
fn trend_chart<'a>(title: &'a str, pick: fn(&VitalTrend) -> f32) -> Element<'a, Message> {
    let Some((lo, hi)) = vital_range(&VITAL_TRENDS, pick) else {
        return card(title, text("No data")).into();
    };
    let pad = ((hi - lo) * 0.5).max(1.0);
    let range = (lo - pad)..=(hi + pad);

    let bars = VITAL_TRENDS
        .iter()
        .fold(Column::new().spacing(6), |bars, month| {
            let value = pick(month);
            bars.push(
                row![
                    text(month.month).size(12).width(Length::Fixed(40.0)),
                    progress_bar(range.clone(), value).height(Length::Fixed(12.0)),
                    text(format!("{value}")).size(12).width(Length::Fixed(48.0)),
                ]
                .spacing(8),
            )
        });

    card(title, bars).into()
}

fn share_chart<'a>(title: &'a str, shares: &'static [Share]) -> Element<'a, Message> {
    let bars = shares.iter().zip(proportions(shares)).fold(
        Column::new().spacing(8),
        |bars, (share, fraction)| {
            bars.push(
                row![
                    text(share.label).size(13).width(Length::Fixed(120.0)),
                    progress_bar(0.0..=1.0, fraction).height(Length::Fixed(14.0)),
                    text(percent(fraction)).size(12).width(Length::Fixed(48.0)),
                ]
                .spacing(8),
            )
        },
    );

    card(title, bars).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vitals_for_everyone() {
        let page = AnalyticsPage::default();
        assert_eq!(page.tab, AnalyticsTab::Vitals);
        assert_eq!(page.patient, ALL_PATIENTS);
    }

    #[test]
    fn selections_are_kept() {
        let mut page = AnalyticsPage::default();
        page.update(Message::TabSelected(AnalyticsTab::Demographics));
        page.update(Message::PatientSelected("Jane Smith".to_string()));
        assert_eq!(page.tab, AnalyticsTab::Demographics);
        assert_eq!(page.patient, "Jane Smith");
    }
}
