#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalTrend {
    pub month: &'static str,
    pub heart_rate: f32,
    pub blood_pressure: f32,
    pub temperature: f32,
    pub oxygen_saturation: f32,
}

const fn trend(
    month: &'static str,
    heart_rate: f32,
    blood_pressure: f32,
    temperature: f32,
    oxygen_saturation: f32,
) -> VitalTrend {
    VitalTrend {
        month,
        heart_rate,
        blood_pressure,
        temperature,
        oxygen_saturation,
    }
}

pub static VITAL_TRENDS: [VitalTrend; 6] = [
    trend("Jan", 72.0, 120.0, 98.6, 98.0),
    trend("Feb", 75.0, 122.0, 98.4, 97.0),
    trend("Mar", 71.0, 118.0, 98.7, 99.0),
    trend("Apr", 73.0, 121.0, 98.5, 98.0),
    trend("May", 70.0, 119.0, 98.6, 97.0),
    trend("Jun", 74.0, 123.0, 98.8, 98.0),
];

/// A labelled count for the bar-style charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    pub label: &'static str,
    pub value: u32,
}

const fn share(label: &'static str, value: u32) -> Share {
    Share { label, value }
}

pub static DIAGNOSIS_DISTRIBUTION: [Share; 5] = [
    share("Respiratory", 35),
    share("Cardiovascular", 25),
    share("Dermatological", 20),
    share("Neurological", 10),
    share("Other", 10),
];

pub static AGE_DISTRIBUTION: [Share; 5] = [
    share("0-18", 15),
    share("19-35", 30),
    share("36-50", 25),
    share("51-65", 20),
    share("65+", 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsTab {
    #[default]
    Vitals,
    Diagnoses,
    Demographics,
}

/// Fraction of the series total held by each entry, in input order.
pub fn proportions(shares: &[Share]) -> Vec<f32> {
    let total: u32 = shares.iter().map(|share| share.value).sum();
    if total == 0 {
        return vec![0.0; shares.len()];
    }
    shares
        .iter()
        .map(|share| share.value as f32 / total as f32)
        .collect()
}

/// Lowest and highest value of one vital across the trend rows.
pub fn vital_range(trends: &[VitalTrend], pick: fn(&VitalTrend) -> f32) -> Option<(f32, f32)> {
    trends.iter().map(pick).fold(None, |range, value| match range {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportions_sum_to_one() {
        let parts = proportions(&DIAGNOSIS_DISTRIBUTION);
        let total: f32 = parts.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert!((parts[0] - 0.35).abs() < 1e-5);
    }

    #[test]
    fn empty_series_has_zero_proportions() {
        let zeroes = [share("none", 0); 2];
        assert_eq!(proportions(&zeroes), vec![0.0, 0.0]);
    }

    #[test]
    fn heart_rate_range_spans_the_trend() {
        let range = vital_range(&VITAL_TRENDS, |row| row.heart_rate);
        assert_eq!(range, Some((70.0, 75.0)));
        assert_eq!(vital_range(&[], |row| row.heart_rate), None);
    }
}
