// Accessibility helpers

/// Focus ring and screen-reader utility rules injected ahead of the page styles.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #0d9488;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "status-region";

/// Announce `msg` to assistive technology through the shell's live region.
pub fn announce(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

const FOCUSABLE: &str = "button:not([disabled]), a[href], input:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Return focus to the element with `id`, typically the control that opened a dialog.
pub fn restore_focus(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Focus the first interactive element inside the container `container_id`.
pub fn focus_first_in(container_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let first = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(container_id))
            .and_then(|container| container.query_selector(FOCUSABLE).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = first {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (container_id, FOCUSABLE);
    }
}

/// Index Tab should land on when focus would leave a list of `len` focusable
/// elements. `None` means the browser's default move stays inside.
#[must_use]
pub fn wrap_focus_index(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match current {
        None => Some(if backwards { last } else { 0 }),
        Some(0) if backwards => Some(last),
        Some(idx) if !backwards && idx >= last => Some(0),
        Some(_) => None,
    }
}

/// Keep Tab and Shift+Tab cycling inside `container_id`.
///
/// Returns `true` when focus was moved and the key event should be cancelled.
pub fn trap_focus_in(container_id: &str, backwards: bool) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let Some(doc) = crate::dom::document() else {
            return false;
        };
        let Some(nodes) = doc
            .get_element_by_id(container_id)
            .and_then(|container| container.query_selector_all(FOCUSABLE).ok())
        else {
            return false;
        };
        let focusable: Vec<web_sys::HtmlElement> = (0..nodes.length())
            .filter_map(|idx| nodes.get(idx))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .collect();
        let active = doc.active_element();
        let current = active.as_ref().and_then(|active| {
            focusable
                .iter()
                .position(|el| el.is_same_node(Some(active.as_ref())))
        });
        match wrap_focus_index(focusable.len(), current, backwards) {
            Some(target) => {
                let _ = focusable[target].focus();
                true
            }
            None => false,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (container_id, backwards);
        false
    }
}
