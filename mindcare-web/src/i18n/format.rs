use chrono::NaiveDate;
use mindcare_core::Locale;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Render a USD amount with cents, e.g. `$250.00`.
#[must_use]
pub fn fmt_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Format a calendar date for `locale` (browser-side); ISO text elsewhere.
#[must_use]
pub fn fmt_date(date: NaiveDate, locale: Locale) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    #[cfg(target_arch = "wasm32")]
    {
        // Noon UTC keeps the calendar day stable across time zones.
        let parsed = js_sys::Date::new(&JsValue::from_str(&format!("{iso}T12:00:00Z")));
        parsed
            .to_locale_date_string(locale.code(), &JsValue::UNDEFINED)
            .as_string()
            .unwrap_or(iso)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        iso
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn price_always_shows_cents() {
        assert_eq!(fmt_price(25_000), "$250.00");
        assert_eq!(fmt_price(15_000), "$150.00");
        assert_eq!(fmt_price(9_950), "$99.50");
        assert_eq!(fmt_price(-99), "-$0.99");
    }

    #[test]
    fn date_formatter_returns_iso_on_host() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(fmt_date(date, Locale::Es), "2026-03-09");
    }
}
