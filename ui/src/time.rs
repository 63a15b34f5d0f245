use std::{future::Future, time::Duration};

use futures::future::{AbortHandle, Abortable};

/// Suspend the current task without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    browser_sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn browser_sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// A one-shot callback scheduled after a delay.
///
/// The handle owns the schedule: cancelling it, or simply dropping it, guarantees the
/// callback never runs. The returned future must be spawned by the caller.
#[derive(Debug)]
pub struct Deferred {
    handle: AbortHandle,
}

impl Deferred {
    pub fn new(
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> (Self, impl Future<Output = ()> + 'static) {
        let (handle, registration) = AbortHandle::new_pair();
        let task = Abortable::new(
            async move {
                sleep(delay).await;
                callback();
            },
            registration,
        );

        (Self { handle }, async move {
            let _ = task.await;
        })
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn flag() -> (Rc<Cell<bool>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(false));
        let setter = fired.clone();
        (fired, move || setter.set(true))
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (fired, callback) = flag();
        let start = tokio::time::Instant::now();

        let (_handle, task) = Deferred::new(Duration::from_millis(5000), callback);
        task.await;

        assert!(fired.get());
        assert!(start.elapsed() >= Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_never_fires() {
        let (fired, callback) = flag();

        let (handle, task) = Deferred::new(Duration::from_millis(5000), callback);
        drop(handle);
        task.await;

        assert!(!fired.get());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_deadline() {
        let (fired, callback) = flag();
        let start = tokio::time::Instant::now();

        let (handle, task) = Deferred::new(Duration::from_millis(5000), callback);
        tokio::join!(task, async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            handle.cancel();
        });

        assert!(!fired.get());
        assert!(handle.is_cancelled());
        assert!(start.elapsed() < Duration::from_millis(5000));
    }
}
