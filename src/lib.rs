#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use folio_core::content::NoContent;
use folio_core::{AppContext, Language, SubscriptionSet, ViewPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod content;
mod dom;
mod entry;
mod events;
mod frame;
mod input;
mod nav;
mod overlay;
mod style;

use constants::LANG_BUTTON_SELECTOR;

thread_local! {
    // Session-lifetime handles; released only if the page is hidden for good.
    static SESSION: RefCell<SubscriptionSet> = RefCell::new(SubscriptionSet::new());
}

fn wire_language(document: &web::Document, ctx: &AppContext) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();
    if let Some(nav_lang) = web::window().and_then(|w| w.navigator().language()) {
        if let Some(lang) = Language::from_code(&nav_lang) {
            ctx.language.set(lang);
        }
    }
    let html = document.document_element();
    let apply = move |lang: &Language| {
        if let Some(html) = &html {
            _ = html.set_attribute("lang", lang.code());
        }
        log::info!("[lang] {}", lang.code());
    };
    apply(&ctx.language.get());
    subs.push(ctx.language.subscribe(apply));

    if let Ok(buttons) = document.query_selector_all(LANG_BUTTON_SELECTOR) {
        for i in 0..buttons.length() {
            let Some(el) = buttons.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let Some(lang) = el
                .get_attribute("data-lang")
                .and_then(|c| Language::from_code(&c))
            else {
                continue;
            };
            let ctx = ctx.clone();
            subs.push(dom::listen(&el, "click", true, move |_: web::MouseEvent| {
                ctx.language.set(lang)
            }));
        }
    }
    subs
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let ctx = AppContext::default();
    let mut session = SubscriptionSet::new();

    overlay::conceal_main(&document);
    // No database binding in the browser build; the fallback copy is canonical.
    session.append(content::render_all(&document, &NoContent));
    session.append(wire_language(&document, &ctx));

    let (navigator, nav_subs) = nav::wire_sections(&document, &ctx)?;
    session.append(nav_subs);
    session.push(events::wire_global_keydown(&ctx, &navigator));
    session.append(audio::wire_player(&document, &ctx));
    session.append(events::wire_cursor(&document));

    // The entry overlay is owned here until it hands off to the main view.
    let entry_slot: Rc<RefCell<Option<entry::EntryHandle>>> = Rc::new(RefCell::new(None));
    {
        let slot = entry_slot.clone();
        let doc = document.clone();
        session.push(ctx.view.subscribe(move |v: &ViewPhase| {
            if *v == ViewPhase::Main {
                if let Some(handle) = slot.borrow_mut().take() {
                    handle.unmount();
                }
                overlay::reveal_main(&doc);
                log::info!("[view] main");
            }
        }));
    }
    *entry_slot.borrow_mut() = Some(entry::mount(&document, &ctx)?);

    {
        let slot = entry_slot;
        session.push(dom::listen_window(
            "pagehide",
            true,
            move |ev: web::PageTransitionEvent| {
                if ev.persisted() {
                    return;
                }
                slot.borrow_mut().take();
                SESSION.with(|s| s.borrow_mut().clear());
            },
        ));
    }

    SESSION.with(|s| s.borrow_mut().append(session));
    Ok(())
}
