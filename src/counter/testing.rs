//! Hand-driven stand-ins for the browser's frame clock and intersection
//! observer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::counter::host::{FrameHandle, FrameScheduler, ViewportObserver};
use crate::error::HostError;

#[derive(Default)]
struct FrameQueue {
    next_id: i32,
    queued: Vec<(FrameHandle, Box<dyn FnOnce(f64)>)>,
    requested: usize,
    cancelled: usize,
    ignore_cancels: bool,
}

/// Frame scheduler that only advances when the test calls `tick`.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<FrameQueue>>,
}

impl ManualFrames {
    /// Pretend cancellation lost the race with an already-dispatched frame.
    pub fn ignore_cancels(&self) {
        self.queue.borrow_mut().ignore_cancels = true;
    }

    /// Runs every callback queued before this call and returns how many ran.
    pub fn tick(&self, now: f64) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().queued);
        let count = due.len();
        for (_, callback) in due {
            callback(now);
        }
        count
    }

    /// Ticks every `step` ms from `start` until nothing is queued, giving up
    /// after `max_ticks`. Returns the time of the last tick.
    pub fn run_until_idle(&self, start: f64, step: f64, max_ticks: usize) -> f64 {
        let mut now = start;
        for _ in 0..max_ticks {
            if self.pending() == 0 {
                break;
            }
            self.tick(now);
            now += step;
        }
        now - step
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().queued.len()
    }

    pub fn requested(&self) -> usize {
        self.queue.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameHandle, HostError> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        queue.requested += 1;
        let handle = FrameHandle(queue.next_id);
        queue.queued.push((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        queue.cancelled += 1;
        if !queue.ignore_cancels {
            queue.queued.retain(|(queued, _)| *queued != handle);
        }
    }
}

/// Scheduler for a page where `requestAnimationFrame` is gone.
pub struct FailingFrames;

impl FrameScheduler for FailingFrames {
    fn request_frame(&self, _callback: Box<dyn FnOnce(f64)>) -> Result<FrameHandle, HostError> {
        Err(HostError::Frame("requestAnimationFrame is not a function".to_string()))
    }

    fn cancel_frame(&self, _handle: FrameHandle) {}
}

#[derive(Default)]
struct ObserverSlot {
    on_enter: Option<Box<dyn FnMut()>>,
    disconnects: usize,
    unavailable: bool,
}

/// Observer the test fires by hand with `enter`.
#[derive(Clone, Default)]
pub struct FakeObserver {
    slot: Rc<RefCell<ObserverSlot>>,
}

impl FakeObserver {
    pub fn unavailable() -> Self {
        let observer = Self::default();
        observer.slot.borrow_mut().unavailable = true;
        observer
    }

    pub fn is_observing(&self) -> bool {
        self.slot.borrow().on_enter.is_some()
    }

    pub fn disconnects(&self) -> usize {
        self.slot.borrow().disconnects
    }

    /// Delivers one qualifying intersection, if anything is still observing.
    pub fn enter(&self) {
        let on_enter = self.slot.borrow_mut().on_enter.take();
        if let Some(mut on_enter) = on_enter {
            on_enter();
            let mut slot = self.slot.borrow_mut();
            if slot.disconnects == 0 && slot.on_enter.is_none() {
                slot.on_enter = Some(on_enter);
            }
        }
    }
}

impl ViewportObserver for FakeObserver {
    fn observe(&mut self, on_enter: Box<dyn FnMut()>) -> Result<(), HostError> {
        let mut slot = self.slot.borrow_mut();
        if slot.unavailable {
            return Err(HostError::Observer("IntersectionObserver is not defined".to_string()));
        }
        slot.on_enter = Some(on_enter);
        Ok(())
    }

    fn disconnect(&mut self) {
        let mut slot = self.slot.borrow_mut();
        slot.on_enter = None;
        slot.disconnects += 1;
    }
}
