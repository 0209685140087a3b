use std::fmt;

/// Record that can be narrowed by the search box and a status tab.
pub trait Searchable {
    type Status: Copy + PartialEq;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn status(&self) -> Self::Status;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn admits(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Case-insensitive substring match on name or id, restricted to the tab.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    tab: &StatusFilter<T::Status>,
) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.name().to_lowercase().contains(&needle)
                || record.id().to_lowercase().contains(&needle)
        })
        .filter(|record| tab.admits(record.status()))
        .collect()
}

/// "All" followed by one tab per status, in the order given.
pub fn status_tabs<S: Copy>(
    statuses: &[S],
    label: impl Fn(S) -> &'static str,
) -> Vec<(&'static str, StatusFilter<S>)> {
    std::iter::once(("All", StatusFilter::All))
        .chain(
            statuses
                .iter()
                .map(|&status| (label(status), StatusFilter::Only(status))),
        )
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Active,
    Critical,
    Inactive,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Active,
        PatientStatus::Critical,
        PatientStatus::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Critical => "Critical",
            PatientStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatientStatus::Active => "active",
            PatientStatus::Critical => "critical",
            PatientStatus::Inactive => "inactive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub last_visit: &'static str,
    pub status: PatientStatus,
    pub conditions: &'static [&'static str],
    pub contact_number: &'static str,
    pub email: &'static str,
}

impl Searchable for Patient {
    type Status = PatientStatus;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn status(&self) -> PatientStatus {
        self.status
    }
}

pub static PATIENTS: [Patient; 4] = [
    Patient {
        id: "P001",
        name: "John Doe",
        age: 45,
        gender: "Male",
        last_visit: "2024-01-15",
        status: PatientStatus::Active,
        conditions: &["Hypertension", "Type 2 Diabetes"],
        contact_number: "+1 (555) 123-4567",
        email: "john.doe@email.com",
    },
    Patient {
        id: "P002",
        name: "Jane Smith",
        age: 32,
        gender: "Female",
        last_visit: "2024-01-12",
        status: PatientStatus::Active,
        conditions: &["Asthma"],
        contact_number: "+1 (555) 987-6543",
        email: "jane.smith@email.com",
    },
    Patient {
        id: "P003",
        name: "Robert Johnson",
        age: 67,
        gender: "Male",
        last_visit: "2024-01-10",
        status: PatientStatus::Critical,
        conditions: &["Heart Disease", "COPD"],
        contact_number: "+1 (555) 456-7890",
        email: "robert.johnson@email.com",
    },
    Patient {
        id: "P004",
        name: "Emily Davis",
        age: 28,
        gender: "Female",
        last_visit: "2023-11-02",
        status: PatientStatus::Inactive,
        conditions: &[],
        contact_number: "+1 (555) 321-0987",
        email: "emily.davis@email.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Completed,
    Pending,
    Reviewed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Completed,
        ReportStatus::Pending,
        ReportStatus::Reviewed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::Pending => "Pending",
            ReportStatus::Reviewed => "Reviewed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportStatus::Completed => "completed",
            ReportStatus::Pending => "pending",
            ReportStatus::Reviewed => "reviewed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: &'static str,
    pub patient_name: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub status: ReportStatus,
}

impl Searchable for Report {
    type Status = ReportStatus;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.patient_name
    }

    fn status(&self) -> ReportStatus {
        self.status
    }
}

pub static REPORTS: [Report; 4] = [
    Report {
        id: "R-1001",
        patient_name: "John Doe",
        title: "AI Skin Lesion Analysis",
        date: "2024-01-15",
        status: ReportStatus::Completed,
    },
    Report {
        id: "R-1002",
        patient_name: "Jane Smith",
        title: "Respiratory Assessment",
        date: "2024-01-12",
        status: ReportStatus::Reviewed,
    },
    Report {
        id: "R-1003",
        patient_name: "Robert Johnson",
        title: "Cardiac Risk Evaluation",
        date: "2024-01-10",
        status: ReportStatus::Pending,
    },
    Report {
        id: "R-1004",
        patient_name: "Robert Johnson",
        title: "Voice Symptom Summary",
        date: "2024-01-09",
        status: ReportStatus::Pending,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T: Searchable>(records: Vec<&T>) -> Vec<&str> {
        records.into_iter().map(|record| record.name()).collect()
    }

    #[test]
    fn empty_query_on_all_returns_everything() {
        let found = filter_records(&PATIENTS, "", &StatusFilter::All);
        assert_eq!(found.len(), PATIENTS.len());
    }

    #[test]
    fn critical_tab_returns_only_robert_johnson() {
        let found = filter_records(&PATIENTS, "", &StatusFilter::Only(PatientStatus::Critical));
        assert_eq!(names(found), vec!["Robert Johnson"]);
    }

    #[test]
    fn query_matches_names_case_insensitively_as_substrings() {
        let found = filter_records(&PATIENTS, "john", &StatusFilter::All);
        assert_eq!(names(found), vec!["John Doe", "Robert Johnson"]);

        let found = filter_records(&PATIENTS, "JANE", &StatusFilter::All);
        assert_eq!(names(found), vec!["Jane Smith"]);
    }

    #[test]
    fn trailing_space_in_the_query_is_significant() {
        let found = filter_records(&PATIENTS, "john ", &StatusFilter::All);
        assert_eq!(names(found), vec!["John Doe"]);

        let found = filter_records(&PATIENTS, " ", &StatusFilter::All);
        assert_eq!(found.len(), PATIENTS.len());
    }

    #[test]
    fn query_matches_ids() {
        let found = filter_records(&PATIENTS, "p004", &StatusFilter::All);
        assert_eq!(names(found), vec!["Emily Davis"]);
    }

    #[test]
    fn query_and_tab_combine() {
        let found = filter_records(&PATIENTS, "john", &StatusFilter::Only(PatientStatus::Active));
        assert_eq!(names(found), vec!["John Doe"]);

        let found = filter_records(&PATIENTS, "jane", &StatusFilter::Only(PatientStatus::Critical));
        assert!(found.is_empty());
    }

    #[test]
    fn status_tabs_cover_every_status_after_all() {
        let tabs = status_tabs(&PatientStatus::ALL, PatientStatus::label);
        let labels: Vec<_> = tabs.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["All", "Active", "Critical", "Inactive"]);

        let tabs = status_tabs(&ReportStatus::ALL, ReportStatus::label);
        let per_status: usize = tabs
            .iter()
            .filter(|(_, filter)| !matches!(filter, StatusFilter::All))
            .map(|(_, filter)| filter_records(&REPORTS, "", filter).len())
            .sum();
        assert_eq!(per_status, REPORTS.len());
    }

    #[test]
    fn reports_filter_on_patient_name_and_status() {
        let found = filter_records(&REPORTS, "robert", &StatusFilter::Only(ReportStatus::Pending));
        let ids: Vec<_> = found.iter().map(|report| report.id).collect();
        assert_eq!(ids, vec!["R-1003", "R-1004"]);

        let found = filter_records(&REPORTS, "r-1002", &StatusFilter::All);
        assert_eq!(found[0].title, "Respiratory Assessment");
    }
}
