//! Cooperative controller for long computations.
//!
//! A long computation is split into steps. Between the steps the controller reports progress
//! to a front end, asks whether the computation should go on, and polls the answer without blocking.
//! The front end receives [`Event`]s and answers with [`Decision`]s over a pair of channels.

use crossbeam::channel;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

/// Message from a running computation to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Progress description.
    Progress(String),

    /// The computation takes long, and the front end is asked whether to continue.
    Ask { title: String, message: String },

    /// The computation has finished or has been stopped. This is always the last event of a computation.
    Done(String),
}

/// Answer of the front end to [`Event::Ask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Stop,
    Continue,
}

/// Timing parameters of the controller loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Time of running without an open question before the front end is asked.
    pub ask_timeout: Duration,

    /// Factor applied to `ask_timeout` each time the front end decides to continue.
    pub timeout_growth: f64,

    /// Minimum interval between two progress events.
    pub progress_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            ask_timeout: Duration::from_millis(250),
            timeout_growth: 1.5,
            progress_interval: Duration::from_millis(10),
        }
    }
}

/// Computation side of the channel pair.
#[derive(Debug)]
pub struct Controller {
    config: LoopConfig,
    events: Option<channel::Sender<Event>>,
    decisions: Option<channel::Receiver<Decision>>,
}

/// Front end side of the channel pair.
#[derive(Debug)]
pub struct Frontend {
    events: channel::Receiver<Event>,
    decisions: channel::Sender<Decision>,
}

/// Callback sink for [`Frontend::drive`].
pub trait Interaction {
    /// Returns true if the computation `title` should go on.
    fn ask_continue(&mut self, title: &str, message: &str) -> bool;

    /// Shows the progress of the computation.
    fn report_progress(&mut self, _message: &str) {}

    /// Called once the computation has finished.
    fn done(&mut self, _message: &str) {}
}

impl Controller {
    /// Creates a controller and the front end connected to it.
    pub fn new(config: LoopConfig) -> (Self, Frontend) {
        let (ev_tx, ev_rx) = channel::unbounded();
        let (dc_tx, dc_rx) = channel::unbounded();

        let ctl = Controller {
            config,
            events: Some(ev_tx),
            decisions: Some(dc_rx),
        };

        let front = Frontend {
            events: ev_rx,
            decisions: dc_tx,
        };

        (ctl, front)
    }

    /// Creates a controller without a front end. Computations run until they finish.
    pub fn unattended() -> Self {
        Controller {
            config: LoopConfig::default(),
            events: None,
            decisions: None,
        }
    }

    /// Returns the loop configuration.
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Calls `compute(i)` for `i = 0, 1, 2, ...` until it returns a result.
    /// `info(i)` describes the progress after `i` steps.
    /// Returns None if the front end stopped the computation.
    pub fn run<T, C, I>(&self, title: &str, mut compute: C, info: I) -> Option<T>
    where
        C: FnMut(usize) -> Option<T>,
        I: Fn(usize) -> String,
    {
        tracing::debug!(title, "long computation started");

        // answers to a computation that finished before it read them.
        if let Some(rx) = &self.decisions {
            let stale = rx.try_iter().count();
            if stale > 0 {
                tracing::trace!(title, stale, "discarded decisions");
            }
        }

        let mut timeout = self.config.ask_timeout;
        let mut clock = Instant::now();
        let mut last_progress = clock;
        let mut asking = false;
        let mut i = 0;

        let ret = loop {
            match self.poll() {
                Some(Decision::Stop) => {
                    tracing::debug!(title, steps = i, "long computation stopped");
                    break None;
                }
                Some(Decision::Continue) => {
                    asking = false;
                    clock = Instant::now();
                    timeout = timeout.mul_f64(self.config.timeout_growth);
                }
                None => {}
            }

            if let Some(r) = compute(i) {
                tracing::debug!(title, steps = i + 1, "long computation finished");
                break Some(r);
            }

            i += 1;

            if self.events.is_some() {
                let now = Instant::now();

                if now.duration_since(last_progress) >= self.config.progress_interval {
                    last_progress = now;
                    self.send(Event::Progress(info(i)));
                }

                if !asking && now.duration_since(clock) >= timeout {
                    asking = true;
                    self.send(Event::Ask {
                        title: title.to_owned(),
                        message: format!("The computation is taking a long time ({}). Continue?", info(i)),
                    });
                }
            }
        };

        let summary = if ret.is_some() {
            format!("{}: done in {} steps", title, i + 1)
        } else {
            format!("{}: stopped after {} steps", title, i)
        };
        self.send(Event::Done(summary));

        ret
    }

    /// Runs `job` with this controller on a new thread with the name `name`.
    ///
    /// ## Errors
    ///
    /// The thread could not be created.
    pub fn spawn<T, F>(self, name: &str, job: F) -> std::io::Result<JoinHandle<T>>
    where
        F: FnOnce(&Controller) -> T + Send + 'static,
        T: Send + 'static,
    {
        std::thread::Builder::new().name(name.into()).spawn(move || job(&self))
    }

    // A disconnected front end never stops the computation.
    fn poll(&self) -> Option<Decision> {
        self.decisions.as_ref().and_then(|rx| rx.try_recv().ok())
    }

    fn send(&self, ev: Event) {
        if let Some(tx) = &self.events {
            if tx.send(ev).is_err() {
                tracing::trace!("front end is gone");
            }
        }
    }
}

impl Frontend {
    /// Returns the receiving end of the event channel.
    pub fn events(&self) -> &channel::Receiver<Event> {
        &self.events
    }

    /// Sends a decision to the computation. A decision sent to a finished computation is discarded.
    pub fn decide(&self, decision: Decision) {
        if self.decisions.send(decision).is_err() {
            tracing::trace!("computation is gone");
        }
    }

    /// Dispatches the events of one computation to `sink` until the computation is done.
    pub fn drive<S: Interaction>(&self, sink: &mut S) {
        while let Ok(ev) = self.events.recv() {
            match ev {
                Event::Progress(msg) => sink.report_progress(&msg),
                Event::Ask { title, message } => {
                    let decision = if sink.ask_continue(&title, &message) {
                        Decision::Continue
                    } else {
                        Decision::Stop
                    };
                    self.decide(decision);
                }
                Event::Done(msg) => {
                    sink.done(&msg);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[derive(Default)]
    struct Recorder {
        answers: Vec<bool>,
        asked: usize,
        progress: usize,
        done: Option<String>,
    }

    impl Interaction for Recorder {
        fn ask_continue(&mut self, _title: &str, _message: &str) -> bool {
            let ret = self.answers.get(self.asked).copied().unwrap_or(false);
            self.asked += 1;
            ret
        }

        fn report_progress(&mut self, _message: &str) {
            self.progress += 1;
        }

        fn done(&mut self, message: &str) {
            self.done = Some(message.to_owned());
        }
    }

    fn quick() -> LoopConfig {
        LoopConfig {
            ask_timeout: Duration::from_millis(1),
            timeout_growth: 1.5,
            progress_interval: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_unattended() {
        let ctl = Controller::unattended();
        let r = ctl.run("count", |i| if i == 1000 { Some(i * 2) } else { None }, |i| i.to_string());
        assert_eq!(r, Some(2000));
        assert_eq!(ctl.config(), &LoopConfig::default());
    }

    #[test]
    fn test_stop() {
        let (ctl, front) = Controller::new(quick());

        let h = ctl
            .spawn("endless", |ctl| {
                ctl.run(
                    "endless",
                    |_| {
                        std::thread::sleep(Duration::from_micros(100));
                        None::<u32>
                    },
                    |i| format!("step {}", i),
                )
            })
            .unwrap();

        let mut rec = Recorder::default();
        front.drive(&mut rec);

        assert_eq!(h.join().unwrap(), None);
        assert_eq!(rec.asked, 1);
        assert!(rec.done.unwrap().contains("stopped"));
    }

    #[test]
    fn test_continue() {
        let (ctl, front) = Controller::new(quick());

        let h = ctl
            .spawn("endless", |ctl| {
                ctl.run(
                    "endless",
                    |_| {
                        std::thread::sleep(Duration::from_micros(100));
                        None::<u32>
                    },
                    |i| format!("step {}", i),
                )
            })
            .unwrap();

        let mut rec = Recorder {
            answers: vec![true, true],
            ..Default::default()
        };
        front.drive(&mut rec);

        assert_eq!(h.join().unwrap(), None);
        assert_eq!(rec.asked, 3);
        assert!(rec.progress > 0);
    }

    #[test]
    fn test_finish_before_ask() {
        let (ctl, front) = Controller::new(LoopConfig::default());

        let r = ctl.run("short", |i| if i == 3 { Some("ok") } else { None }, |i| i.to_string());
        assert_eq!(r, Some("ok"));

        let events: Vec<Event> = front.events().try_iter().collect();
        assert_eq!(events.last(), Some(&Event::Done("short: done in 4 steps".to_owned())));
        assert!(!events.iter().any(|e| matches!(e, Event::Ask { .. })));
    }

    #[test]
    fn test_late_decision_discarded() {
        let (ctl, front) = Controller::new(LoopConfig::default());

        let r = ctl.run("a", |_| Some(1), |i| i.to_string());
        assert_eq!(r, Some(1));

        // the answer to the first computation must not stop the second one
        front.decide(Decision::Stop);
        let r = ctl.run("b", |i| (i == 3).then(|| 2), |i| i.to_string());
        assert_eq!(r, Some(2));

        let done: Vec<Event> = front
            .events()
            .try_iter()
            .filter(|e| matches!(e, Event::Done(_)))
            .collect();
        assert_eq!(done.last(), Some(&Event::Done("b: done in 4 steps".to_owned())));
    }

    #[test]
    fn test_dropped_front_end() {
        let (ctl, front) = Controller::new(quick());
        drop(front);

        let r = ctl.run(
            "orphan",
            |i| {
                std::thread::sleep(Duration::from_micros(100));
                if i == 50 {
                    Some(i)
                } else {
                    None
                }
            },
            |i| i.to_string(),
        );
        assert_eq!(r, Some(50));
    }
}
