use crate::components::card::card_style;
use crate::components::{badge, page_header, segmented_control, Tone};
use crate::model::records::{
    filter_records, status_tabs, Report, ReportStatus, StatusFilter, REPORTS,
};
use iced::widget::{column, container, row, text, text_input, Column};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    TabSelected(StatusFilter<ReportStatus>),
}

#[derive(Debug, Default)]
pub struct ReportsPage {
    query: String,
    tab: StatusFilter<ReportStatus>,
}

impl ReportsPage {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::QueryChanged(query) => self.query = query,
            Message::TabSelected(tab) => self.tab = tab,
        }
    }

    pub fn visible(&self) -> Vec<&'static Report> {
        filter_records(&REPORTS, &self.query, &self.tab)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = page_header(
            "Medical Reports",
            "Review AI diagnostic reports and their review status",
            None,
        );

        let search = text_input("Search by patient or report ID...", &self.query)
            .on_input(Message::QueryChanged)
            .padding(10);

        let tabs = segmented_control(
            &status_tabs(&ReportStatus::ALL, ReportStatus::label),
            self.tab,
            Message::TabSelected,
        );

        let visible = self.visible();
        let summary = text(format!("{} of {} reports", visible.len(), REPORTS.len())).size(13);

        let list = visible
            .into_iter()
            .fold(Column::new().spacing(10), |list, report| {
                list.push(report_row(report))
            });

        column![header, search, tabs, summary, list]
            .spacing(16)
            .padding(20)
            .into()
    }
}

fn report_row<'a>(report: &'static Report) -> Element<'a, Message> {
    let tone = match report.status {
        ReportStatus::Completed => Tone::Success,
        ReportStatus::Pending => Tone::Warning,
        ReportStatus::Reviewed => Tone::Primary,
    };

    container(
        row![
            column![
                text(report.title).size(16),
                text(format!("{} · {}", report.id, report.patient_name)).size(13),
            ]
            .spacing(4)
            .width(Length::Fill),
            column![text(report.date).size(12), badge(report.status.to_string(), tone)].spacing(4),
        ]
        .spacing(12),
    )
    .padding(14)
    .width(Length::Fill)
    .style(card_style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_tab_lists_pending_reports() {
        let mut page = ReportsPage::default();
        page.update(Message::TabSelected(StatusFilter::Only(ReportStatus::Pending)));
        assert!(page
            .visible()
            .iter()
            .all(|report| report.status == ReportStatus::Pending));
        assert_eq!(page.visible().len(), 2);
    }

    #[test]
    fn search_matches_report_ids() {
        let mut page = ReportsPage::default();
        page.update(Message::QueryChanged("R-1001".to_string()));
        let ids: Vec<_> = page.visible().iter().map(|report| report.id).collect();
        assert_eq!(ids, vec!["R-1001"]);
    }
}
