/// One destination in the navigation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        icon: "⌂",
        label: "Dashboard",
        path: "/",
        description: "Overview & Quick Actions",
        badge: None,
    },
    NavItem {
        icon: "◉",
        label: "AI Diagnosis",
        path: "/diagnosis",
        description: "Image Analysis",
        badge: Some("AI"),
    },
    NavItem {
        icon: "♪",
        label: "Voice Input",
        path: "/voice",
        description: "Symptom Recording",
        badge: None,
    },
    NavItem {
        icon: "☺",
        label: "Patients",
        path: "/patients",
        description: "Patient Management",
        badge: None,
    },
    NavItem {
        icon: "≡",
        label: "Reports",
        path: "/reports",
        description: "Medical Reports",
        badge: None,
    },
    NavItem {
        icon: "▦",
        label: "Appointments",
        path: "/appointments",
        description: "Schedule & Visits",
        badge: None,
    },
    NavItem {
        icon: "▲",
        label: "Analytics",
        path: "/analytics",
        description: "Health Trends",
        badge: None,
    },
];

const BOTTOM_BAR_LEN: usize = 5;

/// The entry whose path equals `current_path`, if any.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.path == current_path)
}

pub fn bottom_bar_items() -> &'static [NavItem] {
    &NAV_ITEMS[..BOTTOM_BAR_LEN]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLayout {
    /// Bottom bar with the first few entries.
    Narrow,
    /// Collapsible side rail with every entry.
    #[default]
    Wide,
}

impl NavLayout {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            NavLayout::Wide
        } else {
            NavLayout::Narrow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Route;

    #[test]
    fn every_entry_is_a_declared_route_and_activates_alone() {
        for item in &NAV_ITEMS {
            assert!(!Route::from_path(item.path).is_not_found());

            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|candidate| active_item(item.path) == Some(*candidate))
                .collect();
            assert_eq!(active, vec![item]);
        }
    }

    #[test]
    fn unknown_path_has_no_active_entry() {
        assert_eq!(active_item("/profile"), None);
        assert_eq!(active_item("/diagnosis/123"), None);
        assert_eq!(active_item(""), None);
    }

    #[test]
    fn bottom_bar_is_a_prefix_of_the_rail() {
        let bar = bottom_bar_items();
        assert_eq!(bar.len(), 5);
        assert_eq!(bar, &NAV_ITEMS[..5]);
        assert_eq!(bar[0].path, "/");
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        assert_eq!(NavLayout::from_width(1023.0, 1024.0), NavLayout::Narrow);
        assert_eq!(NavLayout::from_width(1024.0, 1024.0), NavLayout::Wide);
        assert_eq!(NavLayout::from_width(1600.0, 1024.0), NavLayout::Wide);
    }
}
