//! Shared helpers for the integration tests.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use emoji_kit::renderer::ViewportObserver;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::Level;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Collects every string passed to a callback.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this recorder.
    pub fn sink(&self) -> impl FnMut(&str) + 'static {
        let calls = Rc::clone(&self.calls);
        move |text: &str| calls.borrow_mut().push(text.to_string())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.calls.borrow().last().cloned()
    }
}

/// Viewport observer that counts disconnects.
pub struct CountingObserver(pub Rc<Cell<u32>>);

impl ViewportObserver for CountingObserver {
    fn disconnect(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
