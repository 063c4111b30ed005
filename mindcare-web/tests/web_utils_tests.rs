use futures::executor::block_on;
use mindcare_core::{KeyValueStore, Locale};
use mindcare_web::app::state::initial_time_zone;
use mindcare_web::components::hero_image::load_hero;
use mindcare_web::i18n::{self, bundle};
use mindcare_web::router::Route;
use mindcare_web::storage::{BrowserStorageError, BrowserStore};
use mindcare_web::{config, dom};
use std::collections::BTreeMap;
use yew_router::Routable;

#[test]
fn bundles_translate_and_interpolate() {
    assert_eq!(bundle(Locale::En).t("nav.home"), "Home");
    assert_eq!(bundle(Locale::Es).t("nav.home"), "Inicio");
    assert_eq!(bundle(Locale::Es).t("missing.key"), "missing.key");

    let mut vars = BTreeMap::new();
    vars.insert("amount", "$150.00");
    assert_eq!(
        bundle(Locale::En).tr("payment.pay_button", Some(&vars)),
        "Pay $150.00"
    );
    assert_eq!(
        bundle(Locale::Es).t_with("services.detected", &[("tz", "UTC")]),
        "detectada: UTC"
    );
}

#[test]
fn prices_and_dates_format() {
    assert_eq!(i18n::fmt_price(25_000), "$250.00");
    assert_eq!(i18n::fmt_price(12_050), "$120.50");
    let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    assert_eq!(i18n::fmt_date(date, Locale::Es), "2026-03-09");
}

#[test]
fn routes_map_to_root_relative_hrefs() {
    assert!(config::router_base().is_none());
    assert_eq!(Route::Payment.href(), "/payment");
    assert_eq!(Route::recognize("/compliance"), Some(Route::Compliance));
    assert_eq!(Route::NAV.len(), 4);
}

#[test]
fn host_adapters_fall_back_cleanly() {
    assert!(matches!(
        BrowserStore.read("mindcare.locale"),
        Err(BrowserStorageError::Unavailable(_))
    ));
    assert_eq!(initial_time_zone().as_str(), "UTC");
    assert!(block_on(load_hero("https://img.example/hero")).is_err());
    assert!(dom::window().is_none());
    dom::alert("confirmed");
}
