//! Leptos Canvas Gestures
//!
//! Binds mouse events to the outfit canvas gesture state machine.
//! Presses are recorded per item; movement and release are tracked on the
//! document so a drag keeps working when the pointer leaves the item.

use leptos::prelude::*;
use outfit_core::canvas::{Gesture, GestureEffect, Point};
use outfit_core::{ItemId, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Gesture state signals
#[derive(Clone, Copy)]
pub struct GestureSignals {
    pub gesture_read: ReadSignal<Gesture>,
    pub gesture_write: WriteSignal<Gesture>,
}

pub fn create_gesture_signals() -> GestureSignals {
    let (gesture_read, gesture_write) = signal(Gesture::Idle);
    GestureSignals {
        gesture_read,
        gesture_write,
    }
}

fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Controls inside an item handle their own clicks
fn is_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Run one transition, writing the signal only when the gesture changed
fn step(gs: GestureSignals, transition: impl FnOnce(&mut Gesture) -> GestureEffect) -> GestureEffect {
    let before = gs.gesture_read.get_untracked();
    let mut gesture = before;
    let effect = transition(&mut gesture);
    if gesture != before {
        gs.gesture_write.set(gesture);
    }
    effect
}

/// Abandon the gesture if it is acting on `id` (item removed mid-gesture)
pub fn cancel_for(gs: GestureSignals, id: ItemId) {
    if gs.gesture_read.get_untracked().active_item() == Some(id) {
        gs.gesture_write.set(Gesture::Idle);
    }
}

/// Create mousedown handler for an item body: focus now, drag once moved enough
pub fn make_on_body_mousedown<F>(
    gs: GestureSignals,
    id: ItemId,
    on_effect: F,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn(GestureEffect) + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Keep the canvas from treating this press as a click on empty space
        ev.stop_propagation();
        if is_control(&ev) {
            return;
        }
        let at = client_point(&ev);
        on_effect(step(gs, |gesture| gesture.press_body(id, at)));
    }
}

/// Create mousedown handler for an item's resize handle
pub fn make_on_resize_mousedown<S, F>(
    gs: GestureSignals,
    id: ItemId,
    current_size: S,
    on_effect: F,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    S: Fn() -> Size + Copy + 'static,
    F: Fn(GestureEffect) + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let at = client_point(&ev);
        let size = current_size();
        on_effect(step(gs, |gesture| gesture.press_resize(id, at, size)));
    }
}

fn add_document_listener(event: &str, listener: &Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
}

/// Bind global mousemove and mouseup handlers feeding the gesture.
///
/// `on_effect` receives every effect other than `GestureEffect::None`.
pub fn bind_global_pointer<F>(gs: GestureSignals, on_effect: F)
where
    F: Fn(GestureEffect) + Clone + 'static,
{
    let on_move = on_effect.clone();
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if gs.gesture_read.get_untracked() == Gesture::Idle {
            return;
        }
        let at = client_point(&ev);
        match step(gs, |gesture| gesture.pointer_move(at)) {
            GestureEffect::None => {}
            effect => on_move(effect),
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // A plain click never moved past the threshold and commits nothing
        match step(gs, Gesture::release) {
            GestureEffect::None => {}
            effect => on_effect(effect),
        }
    });

    add_document_listener("mousemove", &on_mousemove);
    add_document_listener("mouseup", &on_mouseup);
    on_mousemove.forget();
    on_mouseup.forget();
}
