//! Timer Seam
//!
//! One-shot timers behind a trait so the list-state timing logic runs the
//! same against `gloo-timers` in the browser and a manual clock in tests.
//! Dropping a handle cancels its timer.

use gloo_timers::callback::Timeout;

pub trait TimerBackend {
    type Handle;

    /// Run `fire` once after `delay_ms`, unless the handle is dropped first
    fn start(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerBackend for BrowserTimers {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, fire)
    }
}

/// At most one pending timer; starting a new one cancels the old
pub struct TimerSlot<B: TimerBackend> {
    backend: B,
    pending: Option<B::Handle>,
}

impl<B: TimerBackend> TimerSlot<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, pending: None }
    }

    pub fn replace(&mut self, delay_ms: u32, fire: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.backend.start(delay_ms, Box::new(fire)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Deterministic clock for timing tests

    use super::TimerBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Entry {
        due: u64,
        id: u64,
        fire: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub struct ManualTimers {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Rc<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.queue.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }

    impl TimerBackend for ManualTimers {
        type Handle = ManualHandle;

        fn start(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.push(Entry { due, id, fire });
            ManualHandle { id, queue: self.queue.clone() }
        }
    }

    impl ManualTimers {
        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Move the clock forward, firing due timers in order
        pub fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let entry = queue.entries.remove(i);
                        queue.now = entry.due;
                        entry
                    })
                };
                match next {
                    // Fired outside the borrow so callbacks may start timers
                    Some(entry) => (entry.fire)(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTimers;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_slot_fires_once_after_delay() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new(timers.clone());

        let log = fired.clone();
        slot.replace(100, move || log.borrow_mut().push("a"));
        timers.advance(99);
        assert!(fired.borrow().is_empty());
        timers.advance(1);
        assert_eq!(*fired.borrow(), vec!["a"]);
        timers.advance(1000);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn test_replace_cancels_previous() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new(timers.clone());

        let log = fired.clone();
        slot.replace(100, move || log.borrow_mut().push("old"));
        timers.advance(50);
        let log = fired.clone();
        slot.replace(100, move || log.borrow_mut().push("new"));
        assert_eq!(timers.pending(), 1);

        timers.advance(100);
        assert_eq!(*fired.borrow(), vec!["new"]);
        assert_eq!(timers.now(), 150);
    }

    #[test]
    fn test_cancel() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(false));
        let mut slot = TimerSlot::new(timers.clone());

        let flag = fired.clone();
        slot.replace(10, move || *flag.borrow_mut() = true);
        slot.cancel();
        timers.advance(100);
        assert!(!*fired.borrow());
        assert_eq!(timers.pending(), 0);
    }
}
