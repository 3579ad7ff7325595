//! Browser glue: keyboard listeners and requestAnimationFrame chaining

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{FocusEvent, KeyboardEvent, Window};

use super::frame::{CancelToken, FrameLoop, FrameOutcome, Hud};
use crate::render::Surface;
use crate::sim::TrackedKey;

pub type SharedGame<S> = Rc<RefCell<FrameLoop<S>>>;

/// Window-level key and blur listeners for one session.
///
/// Listeners are added on `attach` and removed when the binding is dropped.
pub struct KeyboardBinding {
    window: Window,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
    blur: Closure<dyn FnMut(FocusEvent)>,
}

impl KeyboardBinding {
    pub fn attach<S>(game: &SharedGame<S>) -> Option<Self>
    where
        S: Surface + 'static,
    {
        let window = web_sys::window()?;

        let keydown = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if TrackedKey::from_key(&key).is_some() {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                    game.borrow_mut().key_down(&key);
                }
            })
        };

        let keyup = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            })
        };

        let blur = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().blur();
                log::debug!("Window blur, keys released");
            })
        };

        let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
        log::debug!("Keyboard listeners attached");

        Some(Self {
            window,
            keydown,
            keyup,
            blur,
        })
    }
}

impl Drop for KeyboardBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("blur", self.blur.as_ref().unchecked_ref());
        log::debug!("Keyboard listeners removed");
    }
}

/// Queue the next frame of the chain owned by `token`.
///
/// The token is checked when the callback fires and again before queuing
/// the following frame. `on_frame` receives the HUD after every frame.
pub fn schedule_frames<S, F>(game: SharedGame<S>, token: CancelToken, on_frame: Rc<F>)
where
    S: Surface + 'static,
    F: Fn(Hud) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame chain not started");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        if token.is_cancelled() {
            return;
        }
        let outcome = game.borrow_mut().frame(&token, time);
        let hud = game.borrow().hud();
        on_frame(hud);
        if outcome == FrameOutcome::Continue && !token.is_cancelled() {
            schedule_frames(game, token, on_frame);
        }
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
