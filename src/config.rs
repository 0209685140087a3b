use std::time::Duration;

pub const APP_TITLE: &str = "MediCare+";
pub const APP_SUBTITLE: &str = "AI Diagnostic Tool";

const ANALYSIS_DELAY_MS: u64 = 3_000;
const TRANSCRIPTION_DELAY_MS: u64 = 5_000;
const TOAST_LIFETIME_MS: u64 = 4_000;

/// Width at which the side rail replaces the bottom bar.
const WIDE_LAYOUT_BREAKPOINT: f32 = 1024.0;

/// Runtime knobs for the shell and the mock capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub analysis_delay: Duration,
    pub transcription_delay: Duration,
    pub toast_lifetime: Duration,
    pub wide_layout_breakpoint: f32,
    pub initial_window_size: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(ANALYSIS_DELAY_MS),
            transcription_delay: Duration::from_millis(TRANSCRIPTION_DELAY_MS),
            toast_lifetime: Duration::from_millis(TOAST_LIFETIME_MS),
            wide_layout_breakpoint: WIDE_LAYOUT_BREAKPOINT,
            initial_window_size: (1280.0, 820.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mock_timings() {
        let settings = Settings::default();
        assert_eq!(settings.analysis_delay, Duration::from_millis(3000));
        assert_eq!(settings.transcription_delay, Duration::from_millis(5000));
        assert!(settings.initial_window_size.0 >= settings.wide_layout_breakpoint);
    }
}
