use crate::constants::{ENTRY_HINT_ID, ENTRY_OVERLAY_ID, MAIN_FADE_MS, MAIN_VIEW_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide_entry(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ENTRY_OVERLAY_ID) {
        dom::set_hidden(&el, true);
        // fallback for environments without the CSS class
        dom::set_style(&el, "display:none");
    }
}

#[inline]
pub fn set_hint_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(ENTRY_HINT_ID) {
        dom::set_style(
            &el,
            if visible {
                "opacity:1;transition:opacity 0.5s"
            } else {
                "opacity:0;transition:opacity 0.5s"
            },
        );
    }
}

/// Fade the main view in and let it take pointer input.
pub fn reveal_main(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MAIN_VIEW_ID) {
        dom::set_hidden(&el, false);
        dom::set_style(
            &el,
            &format!(
                "opacity:1;pointer-events:auto;transition:opacity {}ms ease-in-out",
                MAIN_FADE_MS
            ),
        );
    }
}

pub fn conceal_main(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MAIN_VIEW_ID) {
        dom::set_style(&el, "opacity:0;pointer-events:none");
    }
}
