//! Logs the user out after a period without input.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::context::AuthContext;

const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "keypress", "scroll", "click", "touchstart"];

/// Installs the window listeners once for the whole app. Each event re-arms
/// a single timer; dropping the previous [`Timeout`] cancels it.
pub fn install(auth: AuthContext, timeout_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let arm = {
        let timer = timer.clone();
        Rc::new(move || {
            let timeout = Timeout::new(timeout_ms, move || {
                if auth.session.with_untracked(Option::is_some) {
                    log::info!("idle for {timeout_ms} ms, logging out");
                    auth.logout();
                }
            });
            timer.borrow_mut().replace(timeout);
        })
    };

    for event in ACTIVITY_EVENTS {
        let arm = arm.clone();
        let listener = Closure::<dyn Fn()>::new(move || arm());
        if window
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("cannot listen to {event}");
        }
        listener.forget();
    }
    arm();
}
