use crate::components::{badge, card, status_indicator, SystemStatus, Tone};
use crate::message::Message;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length};

struct FeatureCard {
    title: &'static str,
    description: &'static str,
    action: &'static str,
    path: &'static str,
    badge: Option<&'static str>,
}

static FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "AI Image Diagnosis",
        description: "Capture medical images and receive instant AI-powered analysis with \
                      detailed diagnostic suggestions and confidence scores.",
        action: "Start Diagnosis",
        path: "/diagnosis",
        badge: Some("YOLOv8"),
    },
    FeatureCard {
        title: "Voice Symptom Input",
        description: "Record patient symptoms using voice commands. Our AI converts speech \
                      to structured medical data for analysis.",
        action: "Record Symptoms",
        path: "/voice",
        badge: None,
    },
    FeatureCard {
        title: "Patient Management",
        description: "View and manage patient records, medical history, and diagnostic \
                      reports in one place.",
        action: "Manage Patients",
        path: "/patients",
        badge: None,
    },
    FeatureCard {
        title: "Medical Reports",
        description: "Generate and review comprehensive medical reports and analytics.",
        action: "View Reports",
        path: "/reports",
        badge: None,
    },
];

/// `None` for the path means the action is not wired yet.
static QUICK_ACTIONS: [(&str, &str, Option<&str>); 8] = [
    ("Take Photo", "Capture image for AI analysis", Some("/diagnosis")),
    ("Record Symptoms", "Voice input for patient data", Some("/voice")),
    ("New Patient", "Register new patient", Some("/patients")),
    ("Appointments", "Schedule patient visits", Some("/appointments")),
    ("Vital Signs", "Log patient vitals", Some("/voice")),
    ("Analytics", "View health trends", Some("/analytics")),
    ("Consult Specialist", "Connect with expert doctor", None),
    ("Emergency", "Quick assessment mode", Some("/diagnosis")),
];

static RECENT_ACTIVITY: [(&str, &str, &str, bool); 3] = [
    ("AI Diagnosis completed", "Patient #1234", "2 minutes ago", true),
    ("Voice input recorded", "Patient #1235", "15 minutes ago", false),
    ("New patient registered", "Patient #1236", "1 hour ago", true),
];

static NOTIFICATIONS: [(&str, &str); 3] = [
    ("AI Model Updated", "New YOLOv8 model available"),
    ("5 Pending Reviews", "Diagnostic reports need review"),
    ("Storage Warning", "80% capacity reached"),
];

fn navigate(path: &str) -> Message {
    Message::Navigate(path.to_string())
}

pub fn view() -> Element<'static, Message> {
    let hero = column![
        row![badge("AI-Powered", Tone::Primary), status_indicator(SystemStatus::Online, true)]
            .spacing(8),
        text("Medical Diagnostic Assistant").size(34),
        text(
            "Advanced AI-powered diagnostic tool for healthcare professionals. \
             Capture, analyze, and diagnose with confidence."
        )
        .wrapping(Wrapping::Word),
        row![
            button("Start Diagnosis")
                .style(button::primary)
                .on_press(navigate("/diagnosis")),
            button("Voice Input")
                .style(button::secondary)
                .on_press(navigate("/voice")),
        ]
        .spacing(12),
    ]
    .spacing(12);

    let features = FEATURES
        .chunks(2)
        .fold(Column::new().spacing(16), |grid, pair| {
            grid.push(
                pair.iter()
                    .fold(Row::new().spacing(16), |line, feature| {
                        line.push(feature_card(feature))
                    }),
            )
        });

    let activity = RECENT_ACTIVITY.iter().fold(
        Column::new().spacing(10),
        |list, (action, patient, time, success)| {
            let (label, tone) = if *success {
                ("success", Tone::Success)
            } else {
                ("info", Tone::Neutral)
            };
            list.push(
                row![
                    column![text(*action), text(*patient).size(12)].width(Length::Fill),
                    column![text(*time).size(12), badge(label, tone)].spacing(4),
                ]
                .spacing(12),
            )
        },
    );

    let main = column![features, card("Recent Activity", activity)]
        .spacing(16)
        .width(Length::FillPortion(2));

    let sidebar = column![quick_actions(), system_status(), notifications()]
        .spacing(16)
        .width(Length::FillPortion(1));

    column![hero, row![main, sidebar].spacing(16)]
        .spacing(24)
        .padding(20)
        .into()
}

fn feature_card(feature: &'static FeatureCard) -> Element<'static, Message> {
    let mut heading = row![text(feature.title).size(18).width(Length::Fill)];
    if let Some(label) = feature.badge {
        heading = heading.push(badge(label, Tone::Primary));
    }

    container(
        column![
            heading,
            text(feature.description)
                .size(14)
                .wrapping(Wrapping::Word),
            button(feature.action)
                .width(Length::Fill)
                .style(button::primary)
                .on_press(navigate(feature.path)),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(crate::components::card::card_style)
    .into()
}

fn quick_actions() -> Element<'static, Message> {
    let grid = QUICK_ACTIONS
        .chunks(2)
        .fold(Column::new().spacing(8), |grid, pair| {
            grid.push(pair.iter().fold(
                Row::new().spacing(8),
                |line, (label, description, path)| {
                    line.push(
                        button(column![text(*label).size(14), text(*description).size(11)])
                            .width(Length::FillPortion(1))
                            .style(button::secondary)
                            .on_press_maybe(path.map(navigate)),
                    )
                },
            ))
        });

    card("Quick Actions", grid).into()
}

fn system_status() -> Element<'static, Message> {
    let rows = [
        ("AI Engine", SystemStatus::Online),
        ("Database", SystemStatus::Online),
        ("Sync Status", SystemStatus::Syncing),
        ("Cloud Backup", SystemStatus::Offline),
        ("Camera", SystemStatus::Error),
    ]
    .into_iter()
    .fold(Column::new().spacing(8), |list, (label, status)| {
        list.push(row![text(label).width(Length::Fill), status_indicator(status, false)])
    })
    .push(row![text("Connection").width(Length::Fill), text("Strong").size(12)]);

    card("System Status", rows).into()
}

fn notifications() -> Element<'static, Message> {
    let list = NOTIFICATIONS
        .iter()
        .fold(Column::new().spacing(8), |list, (title, detail)| {
            list.push(column![text(*title), text(*detail).size(12)])
        });

    card(format!("Notifications ({})", NOTIFICATIONS.len()), list).into()
}
