//! One outstanding request per action.
//!
//! Work started through [`SingleFlight::run`] is a task of the component that
//! created the hook, so it is cancelled when that component unmounts.

use std::future::Future;

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct SingleFlight {
    busy: Signal<bool>,
}

impl SingleFlight {
    pub fn is_busy(&self) -> bool {
        (self.busy)()
    }

    /// Start `work` unless a previous run is still going. Returns whether it started.
    pub fn run<F>(&mut self, work: F) -> bool
    where
        F: Future<Output = ()> + 'static,
    {
        if *self.busy.peek() {
            tracing::debug!("Request already in flight, ignoring");
            return false;
        }
        self.busy.set(true);
        let mut busy = self.busy;
        spawn(async move {
            work.await;
            busy.set(false);
        });
        true
    }
}

pub fn use_single_flight() -> SingleFlight {
    SingleFlight {
        busy: use_signal(|| false),
    }
}
