//! Thin wrappers over browser APIs.
//!
//! Every helper degrades on non-wasm targets so components can be rendered
//! on the host in tests.
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Storage, Window};

#[cfg(target_arch = "wasm32")]
use anyhow::{Context, anyhow};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::Response;

/// Global `window`, absent outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no window or `localStorage` is disabled.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no browser window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// GET `url` and return the body of a successful response.
///
/// # Errors
/// Fails on network errors, non-2xx statuses and unreadable bodies.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(url: &str) -> Result<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let win = window().context("no browser window")?;
        let value = JsFuture::from(win.fetch_with_str(url))
            .await
            .map_err(|err| anyhow!("fetch {url} failed: {}", js_error_message(&err)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|err| anyhow!("fetch {url} returned a non-Response: {err:?}"))?;
        if !response.ok() {
            anyhow::bail!("fetch {url} returned HTTP {}", response.status());
        }
        let text = response
            .text()
            .map_err(|err| anyhow!("body of {url} unreadable: {}", js_error_message(&err)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|err| anyhow!("body of {url} unreadable: {}", js_error_message(&err)))?;
        body.as_string().context("response body is not text")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        anyhow::bail!("cannot fetch {url} outside a browser")
    }
}

/// Open `url` in a new browsing context.
///
/// # Errors
/// Fails when there is no window or the browser blocks the call.
pub fn open_in_new_tab(url: &str) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        let win = window().context("no browser window")?;
        win.open_with_url_and_target(url, "_blank")
            .map_err(|err| anyhow!("could not open {url}: {}", js_error_message(&err)))?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        anyhow::bail!("cannot open {url} outside a browser")
    }
}

/// Blocking `window.alert`. Failures are logged.
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if let Err(err) = win.alert_with_message(message) {
                log::warn!("alert failed: {}", js_error_message(&err));
            }
        }
        None => log::info!("alert: {message}"),
    }
}

/// IANA zone name from `Intl.DateTimeFormat().resolvedOptions()`.
///
/// # Errors
/// Fails outside a browser or when the engine does not report a zone.
pub fn detect_time_zone() -> Result<String> {
    #[cfg(target_arch = "wasm32")]
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ResolvedOptions {
            time_zone: Option<String>,
        }

        let format =
            js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
        let options: ResolvedOptions =
            serde_wasm_bindgen::from_value(format.resolved_options().into())
                .map_err(|err| anyhow!("resolvedOptions unreadable: {err}"))?;
        options
            .time_zone
            .filter(|tz| !tz.trim().is_empty())
            .context("engine reported no time zone")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        anyhow::bail!("time zone detection needs a browser")
    }
}

/// Local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        i32::try_from(now.get_full_year())
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let days = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() / 86_400)
            .unwrap_or_default();
        NaiveDate::default()
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or_default()
    }
}

#[must_use]
pub fn current_year() -> i32 {
    today().year()
}

/// Entropy for cosmetic randomness such as session tokens.
#[must_use]
pub fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let low = js_sys::Date::now() as u64;
        (high << 32) ^ low
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        #[allow(clippy::cast_possible_truncation)]
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0x5EED);
        seed
    }
}
