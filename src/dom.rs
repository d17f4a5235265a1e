use folio_core::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target`. Dropping the returned handle
/// removes the listener and frees the closure.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    attach(target, event, passive, false, handler)
}

fn attach<E>(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    capture: bool,
    handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    opts.set_capture(capture);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("add {} listener: {:?}", event, e);
        return Subscription::empty();
    }
    let target = target.clone();
    Subscription::new(move || {
        // Removal must repeat the capture flag or it matches nothing.
        _ = target.remove_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            capture,
        );
        drop(closure);
    })
}

#[inline]
pub fn listen_window<E>(
    event: &'static str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    match web::window() {
        Some(w) => listen(&w, event, passive, handler),
        None => Subscription::empty(),
    }
}

/// Window listener in the capture phase. Sees events that do not bubble,
/// such as `scroll` on an inner scroll container.
pub fn listen_window_capture<E>(
    event: &'static str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    match web::window() {
        Some(w) => attach(&w, event, passive, true, handler),
        None => Subscription::empty(),
    }
}

pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Subscription {
    match document.get_element_by_id(element_id) {
        Some(el) => listen(&el, "click", true, move |_: web::MouseEvent| handler()),
        None => {
            log::warn!("#{} not found, click not wired", element_id);
            Subscription::empty()
        }
    }
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(crate::constants::HIDDEN_CLASS);
    } else {
        _ = cl.remove_1(crate::constants::HIDDEN_CLASS);
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
