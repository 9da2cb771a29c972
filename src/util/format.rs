//! Presentation helpers for prices and backend timestamps.
//!
//! The backend emits ISO-8601 timestamps without an offset; they are UTC.
//! Browser builds render them in the viewer's locale through `js_sys::Date`,
//! other builds fall back to a fixed `YYYY-MM-DD HH:MM` rendering.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `12345` → `"12,345 won"`.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} won")
}

/// Append `Z` to timestamps that carry no zone designator.
pub fn normalize_utc(iso: &str) -> String {
    let iso = iso.trim();
    if has_zone(iso) { iso.to_owned() } else { format!("{iso}Z") }
}

fn has_zone(iso: &str) -> bool {
    if iso.ends_with('Z') || iso.ends_with('z') {
        return true;
    }
    // A trailing `+hh:mm`, `-hh:mm`, `+hhmm` or `-hhmm` after the time part.
    let Some((_, time)) = iso.split_once('T') else {
        return false;
    };
    time.rfind(['+', '-']).is_some_and(|idx| {
        let offset = &time[idx + 1..];
        let digits: String = offset.chars().filter(char::is_ascii_digit).collect();
        digits.len() == 4 && offset.len() <= 5
    })
}

/// Human-readable rendering of a backend timestamp; `"-"` when missing.
pub fn display_time(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.trim().is_empty()) else {
        return "-".to_owned();
    };
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(&normalize_utc(iso)));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED).into()
    }
    #[cfg(not(feature = "csr"))]
    {
        fallback_display(iso)
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn fallback_display(iso: &str) -> String {
    let normalized = normalize_utc(iso);
    match normalized.split_once('T') {
        Some((date, time)) => match time.get(..5) {
            Some(minutes) => format!("{date} {minutes}"),
            None => iso.to_owned(),
        },
        None => iso.to_owned(),
    }
}

/// Convert an `<input type="datetime-local">` value into an ISO-8601 UTC
/// timestamp. The input is local time in browser builds and UTC otherwise.
pub fn datetime_local_to_iso(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(value));
        if date.get_time().is_nan() {
            return None;
        }
        Some(date.to_iso_string().into())
    }
    #[cfg(not(feature = "csr"))]
    {
        fallback_iso(value)
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn fallback_iso(value: &str) -> Option<String> {
    let (date, time) = value.split_once('T')?;
    if date.len() != 10 || time.len() < 5 {
        return None;
    }
    let seconds = if time.len() == 5 { ":00" } else { "" };
    Some(format!("{date}T{time}{seconds}.000Z"))
}
