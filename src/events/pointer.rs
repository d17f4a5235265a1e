use crate::constants::{CURSOR_ID, CURSOR_TARGET_SELECTOR};
use crate::frame::{self, Tick};
use crate::{dom, style};
use folio_core::cursor::{cursor_enabled, is_mobile_user_agent, TargetCursor, TargetRect};
use folio_core::{Subscription, SubscriptionSet};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn host_supports_cursor(window: &web::Window) -> bool {
    let nav = window.navigator();
    let has_touch = nav.max_touch_points() > 0;
    let ua = nav.user_agent().unwrap_or_default();
    cursor_enabled(has_touch, dom::viewport_width(), is_mobile_user_agent(&ua))
}

fn closest_target(ev: &web::MouseEvent) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(CURSOR_TARGET_SELECTOR).ok().flatten()
}

fn rect_of(el: &web::Element) -> TargetRect {
    let r = el.get_bounding_client_rect();
    TargetRect {
        left: r.left() as f32,
        top: r.top() as f32,
        right: r.right() as f32,
        bottom: r.bottom() as f32,
    }
}

/// Custom bracket cursor. Returns nothing to hold on touch/mobile hosts.
pub fn wire_cursor(document: &web::Document) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();
    let Some(window) = web::window() else {
        return subs;
    };
    if !host_supports_cursor(&window) {
        log::info!("[cursor] touch host, keeping native cursor");
        return subs;
    }
    let Some(root) = document.get_element_by_id(CURSOR_ID) else {
        return subs;
    };
    let corners: Vec<web::Element> = match root.query_selector_all(".cursor-corner") {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    };

    if let Some(body) = document.body() {
        let previous = body.style().get_property_value("cursor").unwrap_or_default();
        _ = body.style().set_property("cursor", "none");
        subs.push(Subscription::new(move || {
            _ = body.style().set_property("cursor", &previous);
        }));
    }
    dom::set_hidden(&root, false);

    let start = Vec2::new(
        dom::viewport_width() as f32 * 0.5,
        dom::viewport_height() as f32 * 0.5,
    );
    let cursor = Rc::new(RefCell::new(TargetCursor::new(Default::default(), start)));
    let active: Rc<RefCell<Option<web::Element>>> = Rc::new(RefCell::new(None));

    {
        let cursor = cursor.clone();
        subs.push(dom::listen_window("mousemove", true, move |ev: web::MouseEvent| {
            cursor
                .borrow_mut()
                .move_to(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }));
    }
    {
        let cursor = cursor.clone();
        let active = active.clone();
        subs.push(dom::listen_window("mouseover", true, move |ev: web::MouseEvent| {
            let Some(target) = closest_target(&ev) else {
                return;
            };
            if active.borrow().as_ref() == Some(&target) {
                return;
            }
            cursor.borrow_mut().enter(rect_of(&target));
            *active.borrow_mut() = Some(target);
        }));
    }
    {
        let cursor = cursor.clone();
        let active = active.clone();
        subs.push(dom::listen_window("mouseout", true, move |ev: web::MouseEvent| {
            let leaving = active.borrow().clone();
            let Some(current) = leaving else {
                return;
            };
            // Moving between children of the target is not a leave.
            let into = ev
                .related_target()
                .and_then(|t| t.dyn_into::<web::Node>().ok());
            if into.as_ref().is_some_and(|n| current.contains(Some(n))) {
                return;
            }
            if closest_target(&ev).as_ref() == Some(&current) {
                cursor.borrow_mut().leave();
                *active.borrow_mut() = None;
            }
        }));
    }
    {
        let cursor = cursor.clone();
        let active = active.clone();
        let document = document.clone();
        // Capture phase: `scroll` on the section container does not bubble.
        subs.push(dom::listen_window_capture("scroll", true, move |_: web::Event| {
            let Some(current) = active.borrow().clone() else {
                return;
            };
            let at = cursor.borrow().position;
            let under = document
                .element_from_point(at.x, at.y)
                .and_then(|el| el.closest(CURSOR_TARGET_SELECTOR).ok().flatten());
            let mut c = cursor.borrow_mut();
            if under.as_ref() == Some(&current) {
                c.retarget(rect_of(&current));
            } else {
                c.leave();
                *active.borrow_mut() = None;
            }
        }));
    }
    {
        let root_down = root.clone();
        subs.push(dom::listen_window("mousedown", true, move |_: web::MouseEvent| {
            _ = root_down.class_list().add_1("pressed");
        }));
        let root_up = root.clone();
        subs.push(dom::listen_window("mouseup", true, move |_: web::MouseEvent| {
            _ = root_up.class_list().remove_1("pressed");
        }));
    }

    subs.push(frame::start_loop(move |dt| {
        let mut c = cursor.borrow_mut();
        c.tick(dt.as_secs_f32());
        dom::set_style(&root, &style::cursor_css(c.position.x, c.position.y, c.rotation));
        for (el, off) in corners.iter().zip(c.corners.iter()) {
            dom::set_style(el, &style::corner_css(off.x, off.y));
        }
        Tick::Continue
    }));
    subs
}
