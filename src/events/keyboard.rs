use super::keys::{action_for_key, KeyAction};
use crate::constants::MUSIC_TOGGLE_ID;
use crate::dom;
use crate::nav::Navigator;
use folio_core::constants::SECTION_COUNT;
use folio_core::{AppContext, Subscription};
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_text_entry(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("input")
                || tag.eq_ignore_ascii_case("textarea")
                || el.get_attribute("contenteditable").as_deref() == Some("true")
        })
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &AppContext, navigator: &Navigator) {
    if !ctx.has_entered() || is_text_entry(ev) {
        return;
    }
    let Some(action) = action_for_key(&ev.key(), ev.shift_key()) else {
        return;
    };
    log::debug!("[keys] {:?}", action);
    match action {
        KeyAction::NextSection => navigator.next(),
        KeyAction::PrevSection => navigator.prev(),
        KeyAction::GoToSection(i) => navigator.go_to(i.min(SECTION_COUNT - 1)),
        KeyAction::NextTrack => ctx.skip_next(),
        KeyAction::PrevTrack => ctx.skip_prev(),
        KeyAction::ToggleMusic => {
            // Same path as a click so play() stays user-initiated.
            if let Some(btn) = dom::window_document()
                .and_then(|d| d.get_element_by_id(MUSIC_TOGGLE_ID))
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            {
                btn.click();
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(ctx: &AppContext, navigator: &Navigator) -> Subscription {
    let ctx = ctx.clone();
    let navigator = navigator.clone();
    dom::listen_window("keydown", false, move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &ctx, &navigator);
    })
}
