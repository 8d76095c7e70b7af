//! Frame-callback registry.
//!
//! The host drives rendering; this runtime only remembers who wants the
//! next frame. Draining runs each registered callback once with the frame
//! time; callbacks re-register themselves to keep animating.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnMut(u64)>;

struct RuntimeInner {
    next_id: FrameCallbackId,
    callbacks: FxHashMap<FrameCallbackId, FrameCallback>,
}

/// Owner of the frame-callback registry. Cheap cloneable handles are
/// passed to everything that animates.
pub struct Runtime {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner {
                next_id: 1,
                callbacks: FxHashMap::default(),
            })),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: self.inner.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(&self, callback: impl FnMut(u64) + 'static) -> FrameCallbackId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.insert(id, Box::new(callback));
        id
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner.borrow_mut().callbacks.remove(&id);
    }

    pub fn frame_clock(&self) -> crate::clock::FrameClock {
        crate::clock::FrameClock::new(self.clone())
    }

    /// Run every callback registered before this frame, in registration
    /// order. Callbacks registered while draining run on the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut ready: Vec<(FrameCallbackId, FrameCallback)> = {
            let mut inner = self.inner.borrow_mut();
            inner.callbacks.drain().collect()
        };
        ready.sort_by_key(|(id, _)| *id);
        for (_, mut callback) in ready {
            callback(frame_time_nanos);
        }
    }

    /// Whether anything is waiting for a frame.
    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }
}
