use crate::constants::{INDICATOR_ID, SECTIONS_ID, SECTION_LINK_SELECTOR};
use crate::dom;
use anyhow::anyhow;
use folio_core::constants::SECTION_COUNT;
use folio_core::sections::{indicator, Section, SectionNav};
use folio_core::{AppContext, SubscriptionSet, ViewPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Horizontal section container plus its page indicator and links.
#[derive(Clone)]
pub struct Navigator {
    container: web::Element,
    nav: Rc<RefCell<SectionNav>>,
}

impl Navigator {
    fn width(&self) -> f64 {
        self.container.client_width() as f64
    }

    pub fn go_to(&self, index: usize) {
        let target = self
            .nav
            .borrow()
            .jump_to(index.min(SECTION_COUNT - 1), self.width());
        if let Some(x) = target {
            self.container.set_scroll_left(x.round() as i32);
        }
    }

    pub fn next(&self) {
        if let Some(x) = self.nav.borrow().next(self.width()) {
            self.container.set_scroll_left(x.round() as i32);
        }
    }

    pub fn prev(&self) {
        if let Some(x) = self.nav.borrow().prev(self.width()) {
            self.container.set_scroll_left(x.round() as i32);
        }
    }
}

pub fn wire_sections(
    document: &web::Document,
    ctx: &AppContext,
) -> anyhow::Result<(Navigator, SubscriptionSet)> {
    let container = document
        .get_element_by_id(SECTIONS_ID)
        .ok_or_else(|| anyhow!("missing #{SECTIONS_ID}"))?;
    let navigator = Navigator {
        container: container.clone(),
        nav: Rc::new(RefCell::new(SectionNav::default())),
    };
    let mut subs = SubscriptionSet::new();

    {
        let nav = navigator.nav.clone();
        nav.borrow_mut().set_entered(ctx.has_entered());
        subs.push(ctx.view.subscribe(move |v: &ViewPhase| {
            nav.borrow_mut().set_entered(*v == ViewPhase::Main);
        }));
    }

    {
        let n = navigator.clone();
        let ctx = ctx.clone();
        subs.push(dom::listen(&container, "scroll", true, move |_: web::Event| {
            let left = n.container.scroll_left() as f64;
            let changed = n.nav.borrow_mut().on_scroll(left, n.width());
            if let Some(idx) = changed {
                ctx.section.set(idx);
            }
        }));
    }

    // [data-section="work"] style links and pager buttons
    if let Ok(links) = document.query_selector_all(SECTION_LINK_SELECTOR) {
        for i in 0..links.length() {
            let Some(el) = links.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let target = el.get_attribute("data-section").unwrap_or_default();
            let n = navigator.clone();
            subs.push(dom::listen(&el, "click", true, move |_: web::MouseEvent| {
                match target.as_str() {
                    "next" => n.next(),
                    "prev" => n.prev(),
                    anchor => {
                        if let Some(s) = Section::ALL.iter().find(|s| s.anchor() == anchor) {
                            n.go_to(s.index());
                        }
                    }
                }
            }));
        }
    }

    if let Some(ind) = document.get_element_by_id(INDICATOR_ID) {
        subs.append(wire_indicator(document, &ind, ctx, &navigator));
    }
    Ok((navigator, subs))
}

fn wire_indicator(
    document: &web::Document,
    root: &web::Element,
    ctx: &AppContext,
    navigator: &Navigator,
) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();
    let mut dots = Vec::with_capacity(SECTION_COUNT);
    let mut connectors = Vec::with_capacity(SECTION_COUNT);
    for i in 0..SECTION_COUNT {
        let Ok(btn) = document.create_element("button") else {
            continue;
        };
        btn.set_class_name("indicator-dot");
        _ = btn.set_attribute("aria-label", Section::ALL[i].anchor());
        let n = navigator.clone();
        subs.push(dom::listen(&btn, "click", true, move |_: web::MouseEvent| {
            n.go_to(i)
        }));
        _ = root.append_child(&btn);
        dots.push(btn);
        if i + 1 < SECTION_COUNT {
            if let Ok(line) = document.create_element("span") {
                line.set_class_name("indicator-connector");
                _ = root.append_child(&line);
                connectors.push(line);
            }
        }
    }
    let render = move |current: &usize| {
        for (i, state) in indicator(*current, SECTION_COUNT).into_iter().enumerate() {
            if let Some(dot) = dots.get(i) {
                _ = dot.set_attribute("data-active", if state.active { "1" } else { "0" });
            }
            if let (Some(line), Some(filled)) = (connectors.get(i), state.connector_filled) {
                _ = line.set_attribute("data-filled", if filled { "1" } else { "0" });
            }
        }
    };
    render(&ctx.section.get());
    subs.push(ctx.section.subscribe(render));
    subs
}
