use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::counter::host::{FrameHandle, FrameScheduler, ViewportObserver};
use crate::counter::state::{CounterEvent, CounterRunState, CounterSpec, Phase};

struct Inner<S: FrameScheduler> {
    spec: CounterSpec,
    state: CounterRunState,
    scheduler: S,
    pending: Option<FrameHandle>,
    on_render: Rc<dyn Fn(String)>,
}

/// Drives one counter: owns its run state, its viewport observer and at most
/// one pending frame request.
///
/// Teardown (explicit or on drop) cancels the pending frame and disconnects
/// the observer. Callbacks that still arrive afterwards hit the `alive` check
/// in the run state and change nothing.
pub struct CounterAnimator<S: FrameScheduler + 'static, O: ViewportObserver> {
    inner: Rc<RefCell<Inner<S>>>,
    observer: O,
}

impl<S: FrameScheduler + 'static, O: ViewportObserver> CounterAnimator<S, O> {
    /// Renders the initial `0{suffix}` and starts watching for visibility.
    ///
    /// If the observer can't be set up the counter stays at zero.
    pub fn mount(
        spec: CounterSpec,
        scheduler: S,
        mut observer: O,
        on_render: Rc<dyn Fn(String)>,
    ) -> Self {
        on_render(spec.render(0));
        let target = spec.target;
        let inner = Rc::new(RefCell::new(Inner {
            spec,
            state: CounterRunState::default(),
            scheduler,
            pending: None,
            on_render,
        }));

        let weak = Rc::downgrade(&inner);
        let watching = observer.observe(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, CounterEvent::Intersected);
            }
        }));
        if let Err(err) = watching {
            warn!("counter to {} will stay at zero: {}", target, err);
        }

        Self { inner, observer }
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().state.phase()
    }

    #[cfg(test)]
    pub fn displayed_value(&self) -> u64 {
        self.inner.borrow().state.displayed_value
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        let inner = self.inner.borrow();
        inner.spec.render(inner.state.displayed_value)
    }

    pub fn teardown(&mut self) {
        if self.phase() == Phase::Released {
            return;
        }
        dispatch(&self.inner, CounterEvent::Unmount);
        let pending = self.inner.borrow_mut().pending.take();
        if let Some(handle) = pending {
            self.inner.borrow().scheduler.cancel_frame(handle);
        }
        self.observer.disconnect();
    }
}

impl<S: FrameScheduler + 'static, O: ViewportObserver> Drop for CounterAnimator<S, O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn dispatch<S: FrameScheduler + 'static>(inner: &Rc<RefCell<Inner<S>>>, event: CounterEvent) {
    let redraw = {
        let mut guard = inner.borrow_mut();
        let this = &mut *guard;
        if !this.state.alive {
            return;
        }
        if let CounterEvent::Frame(_) = event {
            this.pending = None;
        }

        let next = this.state.apply(&this.spec, event);
        let changed = next.displayed_value != this.state.displayed_value;
        if next.phase() != this.state.phase() {
            debug!(
                "counter to {}: {:?} -> {:?}",
                this.spec.target,
                this.state.phase(),
                next.phase()
            );
        }
        this.state = next;

        if this.state.running && this.pending.is_none() {
            let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
            let requested = this.scheduler.request_frame(Box::new(move |now| {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, CounterEvent::Frame(now));
                }
            }));
            match requested {
                Ok(handle) => this.pending = Some(handle),
                Err(err) => warn!("counter to {} stopped advancing: {}", this.spec.target, err),
            }
        }

        changed.then(|| {
            (
                this.spec.render(this.state.displayed_value),
                this.on_render.clone(),
            )
        })
    };

    // Rendering happens outside the borrow; the host may call straight back in.
    if let Some((text, on_render)) = redraw {
        on_render(text);
    }
}
