//! One-shot frame callbacks with cancel-on-drop registrations.

use crate::runtime::{FrameCallbackId, RuntimeHandle};

#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Schedule `callback` for the next frame. Dropping the returned
    /// registration cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut callback_opt = Some(callback);
        let id = self.runtime.register_frame_callback(move |time| {
            if let Some(callback) = callback_opt.take() {
                callback(time);
            }
        });
        FrameCallbackRegistration::new(self.runtime.clone(), id)
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            callback(nanos / 1_000_000);
        })
    }
}

pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(runtime: RuntimeHandle, id: FrameCallbackId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Runtime;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dropped_registration_cancels_callback() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));
        let fired_in = Rc::clone(&fired);

        let registration = handle
            .frame_clock()
            .with_frame_nanos(move |_| fired_in.set(true));
        drop(registration);
        handle.drain_frame_callbacks(0);

        assert!(!fired.get());
    }

    #[test]
    fn millis_callback_converts_frame_time() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let millis = Rc::new(Cell::new(0u64));
        let millis_in = Rc::clone(&millis);

        let registration = handle
            .frame_clock()
            .with_frame_millis(move |time| millis_in.set(time));
        handle.drain_frame_callbacks(32_000_000);
        drop(registration);

        assert_eq!(millis.get(), 32);
    }
}
