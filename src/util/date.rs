//! Appointment date display and validation helpers.
//!
//! Dates travel as ISO `YYYY-MM-DD` strings (sometimes with a time suffix),
//! which keeps comparison lexicographic and formatting a pure string
//! operation testable outside the browser.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Format an ISO date (or datetime) for display, `15/03/2025` style.
///
/// Inputs that do not look like `YYYY-MM-DD` are returned unchanged.
pub fn format_fr(date: &str) -> String {
    let day_part = date.split('T').next().unwrap_or(date);
    let mut parts = day_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day))
            if !year.is_empty() && !month.is_empty() && !day.is_empty() =>
        {
            format!("{day}/{month}/{year}")
        }
        _ => date.to_owned(),
    }
}

/// Whether `date` falls strictly before `today`, both ISO `YYYY-MM-DD`.
pub fn is_past(date: &str, today: &str) -> bool {
    date < today
}

/// Today's date as ISO `YYYY-MM-DD`, from the browser clock.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
