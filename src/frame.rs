use folio_core::Subscription;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What the per-frame callback wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Drive `frame` from `requestAnimationFrame` until it returns [`Tick::Stop`]
/// or the returned handle is dropped.
pub fn start_loop(mut frame: impl FnMut(Duration) -> Tick + 'static) -> Subscription {
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    let mut last = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        let now = Instant::now();
        let dt = now - last;
        last = now;
        if frame(dt) == Tick::Stop {
            running_tick.set(false);
            // Breaks the closure's self-reference so it can be freed.
            tick_clone.borrow_mut().take();
            return;
        }
        if !running_tick.get() {
            return;
        }
        if let Some(id) = request_frame(&tick_clone) {
            pending_tick.set(Some(id));
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    Subscription::new(move || {
        running.set(false);
        if let (Some(w), Some(id)) = (web::window(), pending.take()) {
            _ = w.cancel_animation_frame(id);
        }
        tick.borrow_mut().take();
    })
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
