#![cfg(target_arch = "wasm32")]

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew::{AppHandle, Renderer};

use mindcare_core::constants::LOCALE_KEY;
use mindcare_core::{BookingHandoff, KeyValueStore};
use mindcare_web::app::App;
use mindcare_web::dom;
use mindcare_web::pages::payment::PaymentPage;
use mindcare_web::storage::BrowserStore;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

/// Let the scheduler flush renders and effects.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

async fn render_app() -> AppHandle<App> {
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    handle
}

fn text_of(selector: &str) -> String {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    let app = render_app().await;
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    app.destroy();
}

#[wasm_bindgen_test]
async fn language_switch_updates_chrome_document_and_storage() {
    dom::local_storage()
        .expect("localStorage")
        .remove_item(LOCALE_KEY)
        .expect("clear locale");
    let app = render_app().await;
    assert!(text_of("header").contains("Home"));
    assert!(text_of("footer").contains("Quick Links"));

    let spanish: HtmlElement = dom::document()
        .expect("document")
        .query_selector(".lang-btn[lang='es']")
        .expect("query language button")
        .expect("ES button exists")
        .dyn_into()
        .expect("cast to element");
    spanish.click();
    settle().await;

    assert!(text_of("header").contains("Inicio"));
    assert!(text_of("footer").contains("Inicio"));
    assert!(text_of("footer").contains("Enlaces Rápidos"));
    let html = dom::document()
        .expect("document")
        .document_element()
        .expect("document element");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("es"));
    assert_eq!(
        BrowserStore.read(LOCALE_KEY).expect("read locale").as_deref(),
        Some("es")
    );

    app.destroy();
    BrowserStore.write(LOCALE_KEY, "en").expect("restore locale");
}

#[wasm_bindgen_test]
fn browser_store_round_trips_raw_values() {
    let store = BrowserStore;
    store.write("mindcare.test", "true").expect("write");
    assert_eq!(
        store.read("mindcare.test").expect("read").as_deref(),
        Some("true")
    );
}

#[wasm_bindgen_test]
fn time_zone_is_detected() {
    let tz = dom::detect_time_zone().expect("time zone");
    assert!(!tz.is_empty());
}

/// Holds a parked selection the way the app shell does.
#[function_component(CheckoutHost)]
fn checkout_host() -> Html {
    let handoff = use_state(|| {
        Some(BookingHandoff {
            service_id: "initial".to_string(),
            slot_id: "slot-3".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 2).expect("date"),
            time_zone: "Europe/Madrid".to_string(),
        })
    });
    let on_consumed = {
        let handoff = handoff.clone();
        Callback::from(move |()| handoff.set(None))
    };
    html! {
        <div id="checkout-host" data-parked={handoff.is_some().to_string()}>
            <PaymentPage
                handoff={(*handoff).clone()}
                on_navigate={Callback::noop()}
                on_consumed={on_consumed}
                on_confirmed={Callback::noop()}
            />
        </div>
    }
}

#[wasm_bindgen_test]
async fn checkout_consumes_the_parked_selection_on_mount() {
    let app = Renderer::<CheckoutHost>::with_root(ensure_app_root()).render();
    settle().await;

    let host = dom::document()
        .expect("document")
        .get_element_by_id("checkout-host")
        .expect("host rendered");
    assert_eq!(host.get_attribute("data-parked").as_deref(), Some("false"));
    let text = host.text_content().unwrap_or_default();
    assert!(text.contains("Initial Evaluation"));
    assert!(text.contains("$250.00"));
    app.destroy();
}
