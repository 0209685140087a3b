use crate::error::AppointmentError;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentKind {
    CheckUp,
    FollowUp,
    Consultation,
    Emergency,
}

impl AppointmentKind {
    pub const ALL: [AppointmentKind; 4] = [
        AppointmentKind::CheckUp,
        AppointmentKind::FollowUp,
        AppointmentKind::Consultation,
        AppointmentKind::Emergency,
    ];
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppointmentKind::CheckUp => "Check-up",
            AppointmentKind::FollowUp => "Follow-up",
            AppointmentKind::Consultation => "Consultation",
            AppointmentKind::Emergency => "Emergency",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: &'static str,
    pub time: &'static str,
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
}

pub static APPOINTMENTS: [Appointment; 3] = [
    Appointment {
        id: 1,
        patient_name: "John Doe",
        time: "09:00 AM",
        kind: AppointmentKind::CheckUp,
        status: AppointmentStatus::Confirmed,
    },
    Appointment {
        id: 2,
        patient_name: "Jane Smith",
        time: "11:30 AM",
        kind: AppointmentKind::FollowUp,
        status: AppointmentStatus::Confirmed,
    },
    Appointment {
        id: 3,
        patient_name: "Robert Johnson",
        time: "02:15 PM",
        kind: AppointmentKind::Consultation,
        status: AppointmentStatus::Pending,
    },
];

pub const TIME_SLOTS: [&str; 5] = ["9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM"];

/// Contents of the "Schedule New Appointment" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub kind: AppointmentKind,
    pub notes: String,
    pub error: Option<AppointmentError>,
}

impl AppointmentDraft {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            patient: None,
            date,
            time: None,
            kind: AppointmentKind::CheckUp,
            notes: String::new(),
            error: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.patient.is_none() {
            return Err(AppointmentError::MissingPatient);
        }
        if self.time.is_none() {
            return Err(AppointmentError::MissingTime);
        }
        Ok(())
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn shift_month(first: NaiveDate, forward: bool) -> NaiveDate {
    let shifted = if forward {
        first.checked_add_months(Months::new(1))
    } else {
        first.checked_sub_months(Months::new(1))
    };
    shifted.unwrap_or(first)
}

pub type Week = [Option<NaiveDate>; 7];

/// Weeks of the month containing `month`, Sunday first, padded with `None`.
pub fn month_grid(month: NaiveDate) -> Vec<Week> {
    let first = first_of_month(month);
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut slot = offset;

    for day in first.iter_days().take_while(|day| day.month() == first.month()) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }

    if slot > 0 {
        weeks.push(week);
    }

    weeks
}
