/// Format elapsed seconds as human-readable string.
/// - < 60s: "Xs"
/// - < 3600s: "XmYs"
/// - >= 3600s: "XhYm"
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format an amount in cents as euros, or "—" if None.
pub fn format_cents(cents: Option<u64>) -> String {
    match cents {
        Some(c) => format!("{}.{:02} EUR", c / 100, c % 100),
        None => "—".to_string(),
    }
}
