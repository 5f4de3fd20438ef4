//! Periodic task scheduling: `setInterval` in the browser, hand-stepped in tests

use std::time::Duration;

use crate::error::HostError;

/// A periodic task, run on the same thread as everything else
pub type Task = Box<dyn FnMut()>;

pub trait Scheduler {
    /// Run `task` once per `period` until the page goes away.
    ///
    /// A new run never starts before the previous one returned; a slow run
    /// delays the next one instead of being caught up.
    fn every(&mut self, period: Duration, task: Task) -> Result<(), HostError>;
}

/// Scheduler driven explicitly by the caller
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Vec<(Duration, Task)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn periods(&self) -> Vec<Duration> {
        self.tasks.iter().map(|(period, _)| *period).collect()
    }

    /// Run every registered task `ticks` times, in registration order
    pub fn fire(&mut self, ticks: usize) {
        for _ in 0..ticks {
            for (_, task) in self.tasks.iter_mut() {
                task();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, period: Duration, task: Task) -> Result<(), HostError> {
        self.tasks.push((period, task));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use web_sys::Window;

    use super::{Scheduler, Task};
    use crate::error::HostError;

    /// `window.setInterval` backed scheduler
    pub struct IntervalScheduler {
        window: Window,
        handles: Vec<i32>,
    }

    impl IntervalScheduler {
        pub fn new(window: Window) -> Self {
            Self {
                window,
                handles: Vec::new(),
            }
        }

        pub fn handles(&self) -> &[i32] {
            &self.handles
        }
    }

    impl Scheduler for IntervalScheduler {
        fn every(&mut self, period: Duration, mut task: Task) -> Result<(), HostError> {
            let callback = Closure::<dyn FnMut()>::new(move || task());
            let handle = self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    period.as_millis() as i32,
                )?;
            // The interval lives as long as the page
            callback.forget();
            self.handles.push(handle);
            log::debug!("Interval {} every {:?}", handle, period);
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::IntervalScheduler;
