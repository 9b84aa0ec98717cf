use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::counter::host::{FrameHandle, FrameScheduler, ViewportObserver};
use crate::error::HostError;

type FrameSlot = Rc<RefCell<Option<Box<dyn FnOnce(f64)>>>>;

/// `requestAnimationFrame` behind the `FrameScheduler` seam.
///
/// One JS closure lives as long as the scheduler and forwards to whatever
/// callback is currently parked in the slot, so nothing is allocated on the
/// JS side per frame.
pub struct AnimationFrames {
    slot: FrameSlot,
    trampoline: Closure<dyn FnMut(f64)>,
}

impl AnimationFrames {
    pub fn new() -> Self {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let trampoline = {
            let slot = slot.clone();
            Closure::wrap(Box::new(move |now: f64| {
                let callback = slot.borrow_mut().take();
                if let Some(callback) = callback {
                    callback(now);
                }
            }) as Box<dyn FnMut(f64)>)
        };
        Self { slot, trampoline }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameHandle, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        *self.slot.borrow_mut() = Some(callback);
        window
            .request_animation_frame(self.trampoline.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|err| {
                self.slot.borrow_mut().take();
                HostError::frame(err)
            })
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.slot.borrow_mut().take();
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(handle.0) {
                warn!("{}", HostError::frame(err));
            }
        }
    }
}

/// Threshold and root margin handed to `IntersectionObserver`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    /// At least 10% of the counter inside a viewport grown by 50px per side.
    pub fn counter() -> Self {
        Self {
            threshold: config::VISIBILITY_THRESHOLD,
            root_margin: config::visibility_root_margin(),
        }
    }

    pub fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        init.set_root_margin(&self.root_margin);
        init
    }
}

/// `IntersectionObserver` on a single element.
pub struct IntersectionWatch {
    element: Element,
    options: ObserverOptions,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl IntersectionWatch {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            options: ObserverOptions::counter(),
            observer: None,
            callback: None,
        }
    }
}

impl ViewportObserver for IntersectionWatch {
    fn observe(&mut self, mut on_enter: Box<dyn FnMut()>) -> Result<(), HostError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = self.options.to_init();
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(HostError::observer)?;
        observer.observe(&self.element);

        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_options_start_slightly_before_the_viewport() {
        let options = ObserverOptions::counter();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
    }
}
