use chrono::NaiveDate;

const MAX_PREVIEW_LEN: usize = 80;

/// Renders a 0–1 score the way the result badges show it, e.g. `87%`.
pub fn percent(score: f32) -> String {
    format!("{}%", (score * 100.0).round() as i32)
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

pub fn byte_size(len: usize) -> String {
    const KIB: f64 = 1024.0;
    let len = len as f64;
    if len < KIB {
        format!("{len} B")
    } else if len < KIB * KIB {
        format!("{:.1} KiB", len / KIB)
    } else {
        format!("{:.1} MiB", len / (KIB * KIB))
    }
}

/// Single-line preview of free text for logs and list rows.
pub fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > MAX_PREVIEW_LEN {
        let mut truncated = flat.chars().take(MAX_PREVIEW_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        flat
    }
}
