use crate::constants::*;
use crate::frame::{self, Tick};
use crate::input::{self, TouchTracker};
use crate::{dom, overlay, style};
use anyhow::anyhow;
use folio_core::{
    AppContext, EntrySequencer, Glyph, SequencerConfig, Subscription, SubscriptionSet,
    TypeVariant, ViewPhase,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Live entry overlay. Dropping it (or calling [`EntryHandle::unmount`])
/// detaches every listener and stops the frame loop.
pub struct EntryHandle {
    sequencer: Rc<RefCell<EntrySequencer>>,
    listeners: Rc<RefCell<SubscriptionSet>>,
    frame: Subscription,
}

impl EntryHandle {
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.sequencer.borrow_mut().teardown();
        self.listeners.borrow_mut().clear();
        self.frame.cancel();
    }
}

impl Drop for EntryHandle {
    fn drop(&mut self) {
        self.release();
    }
}

struct GlyphNode {
    el: web::Element,
    glyph: Glyph,
}

pub fn mount(document: &web::Document, ctx: &AppContext) -> anyhow::Result<EntryHandle> {
    let config = SequencerConfig {
        reduced_motion: dom::prefers_reduced_motion(),
        ..SequencerConfig::default()
    };
    let layout = config.name.clone();

    let finished = Rc::new(Cell::new(false));
    let finished_cb = finished.clone();
    let sequencer = EntrySequencer::new(config, move || finished_cb.set(true))
        .map_err(|e| anyhow!("entry config: {e}"))?;
    let sequencer = Rc::new(RefCell::new(sequencer));

    let wide = document
        .get_element_by_id(ENTRY_WIDE_ID)
        .ok_or_else(|| anyhow!("missing #{ENTRY_WIDE_ID}"))?;
    let narrow = document
        .get_element_by_id(ENTRY_NARROW_ID)
        .ok_or_else(|| anyhow!("missing #{ENTRY_NARROW_ID}"))?;
    let overlay_el = document
        .get_element_by_id(ENTRY_OVERLAY_ID)
        .ok_or_else(|| anyhow!("missing #{ENTRY_OVERLAY_ID}"))?;

    let mut nodes = build_line(document, &wide, &layout.single_line())?;
    for line in layout.two_lines() {
        let row = document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?;
        row.set_class_name("entry-row");
        nodes.extend(build_line(document, &row, &line)?);
        _ = narrow.append_child(&row);
    }
    log::info!(
        "[entry] mounted glyphs={} total={}",
        nodes.len(),
        layout.total()
    );

    let listeners = Rc::new(RefCell::new(wire_input(&sequencer)));

    let frame = {
        let sequencer = sequencer.clone();
        let listeners = listeners.clone();
        let document = document.clone();
        let ctx = ctx.clone();
        frame::start_loop(move |dt| {
            let out = sequencer.borrow_mut().advance(dt);
            dom::set_style(&overlay_el, &style::overlay_css(out.backdrop_opacity, out.interactive));
            let scale = style::container_css(out.container_scale);
            dom::set_style(&wide, &scale);
            dom::set_style(&narrow, &scale);
            overlay::set_hint_visible(&document, out.hint_visible);
            {
                let seq = sequencer.borrow();
                for node in &nodes {
                    if let Some(s) = seq.glyph_style(&node.glyph) {
                        dom::set_style(&node.el, &style::glyph_css(&s));
                    }
                }
            }
            if !out.interactive && !listeners.borrow().is_empty() {
                // Input is over once the gate starts settling.
                listeners.borrow_mut().clear();
            }
            if finished.get() {
                sequencer.borrow_mut().teardown();
                overlay::hide_entry(&document);
                ctx.view.set(ViewPhase::Main);
                return Tick::Stop;
            }
            Tick::Continue
        })
    };

    Ok(EntryHandle {
        sequencer,
        listeners,
        frame,
    })
}

fn build_line(
    document: &web::Document,
    parent: &web::Element,
    line: &[Glyph],
) -> anyhow::Result<Vec<GlyphNode>> {
    let mut nodes = Vec::with_capacity(line.len());
    for glyph in line {
        let span = document
            .create_element("span")
            .map_err(|e| anyhow!("{:?}", e))?;
        match *glyph {
            Glyph::Letter { ch, variant, .. } => {
                span.set_class_name(match variant {
                    TypeVariant::Sans => SANS_CLASS,
                    TypeVariant::SerifItalic => SERIF_CLASS,
                });
                span.set_text_content(Some(&ch.to_string()));
                nodes.push(GlyphNode {
                    el: span.clone(),
                    glyph: *glyph,
                });
            }
            Glyph::Spacer => span.set_class_name(SPACER_CLASS),
        }
        _ = parent.append_child(&span);
    }
    Ok(nodes)
}

fn wire_input(sequencer: &Rc<RefCell<EntrySequencer>>) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();

    let seq = sequencer.clone();
    subs.push(dom::listen_window("wheel", false, move |ev: web::WheelEvent| {
        // The page itself must not scroll underneath the overlay.
        ev.prevent_default();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), dom::viewport_height());
        seq.borrow_mut().on_input(delta as f32);
    }));

    let tracker = Rc::new(Cell::new(TouchTracker::default()));
    let t_start = tracker.clone();
    subs.push(dom::listen_window("touchstart", true, move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            let mut tr = t_start.get();
            tr.start(t.client_y() as f64);
            t_start.set(tr);
        }
    }));

    let seq = sequencer.clone();
    let t_move = tracker.clone();
    subs.push(dom::listen_window("touchmove", false, move |ev: web::TouchEvent| {
        ev.prevent_default();
        let Some(t) = ev.touches().get(0) else {
            return;
        };
        let mut tr = t_move.get();
        let delta = tr.move_to(t.client_y() as f64);
        t_move.set(tr);
        if let Some(d) = delta {
            seq.borrow_mut().on_input((d * TOUCH_DELTA_GAIN) as f32);
        }
    }));

    let t_end = tracker;
    subs.push(dom::listen_window("touchend", true, move |_: web::TouchEvent| {
        let mut tr = t_end.get();
        tr.end();
        t_end.set(tr);
    }));

    subs
}
