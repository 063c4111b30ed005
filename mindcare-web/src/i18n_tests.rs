//! Translation table coverage.

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_table(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn every_supported_locale_has_a_table() {
    let codes = locale_codes();
    for locale in mindcare_core::Locale::ALL {
        assert!(
            codes.iter().any(|code| code == locale.code()),
            "no table for {}",
            locale.code()
        );
    }
}

#[test]
fn locales_have_identical_key_sets() {
    let (_, base_json) = load_table("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_table(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        let missing: Vec<_> = base_keys.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&base_keys).collect();
        assert!(missing.is_empty(), "locale '{locale}' is missing {missing:?}");
        assert!(extra.is_empty(), "locale '{locale}' has stray keys {extra:?}");
    }
}

#[test]
fn keys_used_by_the_code_exist() {
    let required = [
        "legal.confirm",
        "payment.confirmed",
        "payment.tier.initial",
        "payment.tier.emergency",
        "payment.tier.followup",
        "instant.pay_button",
        "instant.room_label",
        "services.detected",
        "home.feature.scheduling.body",
        "footer.copyright",
        "compliance.legal_footer",
        "not_found.back",
    ];
    for locale in locale_codes() {
        let (_, json) = load_table(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in required {
            assert!(keys.contains(key), "Missing key '{key}' in locale '{locale}'");
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_table(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(!content.contains("{{{"), "Found triple opening brace in {locale}");
    }
}
