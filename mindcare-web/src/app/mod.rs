use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::{AppState, use_app_state};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::config::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let on_navigate = Callback::from(move |route: Route| match navigator.as_ref() {
        Some(nav) => nav.push(&route),
        None => log::warn!("no navigator available for {}", route.to_path()),
    });
    html! { <AppShell {route} {on_navigate} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppShellProps {
    pub route: Route,
    #[prop_or_default]
    pub on_navigate: Callback<Route>,
}

/// Everything below the router: shared state, chrome and the routed page.
#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let state = use_app_state();
    let handlers = AppHandlers::new(&state, props.on_navigate.clone());
    view::render_app(&state, &handlers, &props.route)
}
