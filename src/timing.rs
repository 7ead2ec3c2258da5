#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// Keeps at most one pending timer handle. Scheduling again drops the previous
/// handle first, and dropping a handle cancels its timer.
pub struct Debouncer<H> {
    wait_ms: u32,
    pending: Option<H>,
}

impl<H> Debouncer<H> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn schedule<S>(&mut self, start: S)
    where
        S: FnOnce(u32) -> H,
    {
        drop(self.pending.take());
        self.pending = Some(start(self.wait_ms));
    }
}

#[cfg(target_arch = "wasm32")]
impl Debouncer<Timeout> {
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.schedule(|wait_ms| Timeout::new(wait_ms, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct FakeTimer {
        id: usize,
        live: Rc<RefCell<Vec<usize>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.live.borrow_mut().retain(|id| *id != self.id);
        }
    }

    fn start(id: usize, live: &Rc<RefCell<Vec<usize>>>) -> impl FnOnce(u32) -> FakeTimer {
        let live = live.clone();
        move |wait_ms| {
            assert_eq!(wait_ms, 150);
            live.borrow_mut().push(id);
            FakeTimer { id, live }
        }
    }

    #[test]
    fn second_call_cancels_first_pending_timer() {
        let live = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::new(150);

        debouncer.schedule(start(1, &live));
        assert_eq!(*live.borrow(), vec![1]);

        debouncer.schedule(start(2, &live));
        assert_eq!(*live.borrow(), vec![2]);

        debouncer.schedule(start(3, &live));
        assert_eq!(*live.borrow(), vec![3]);
    }

    #[test]
    fn dropping_debouncer_cancels_pending_timer() {
        let live = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::new(150);

        debouncer.schedule(start(7, &live));
        drop(debouncer);

        assert!(live.borrow().is_empty());
    }
}
