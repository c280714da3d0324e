//! Frame-driven scheduler for concurrent per-shape actions.
//!
//! A [`Timeline`] holds any number of actions that run side by side. Each action measures
//! progress against its own duration, so a 2 s rotation and a 5 s scale attached to the same
//! target finish independently. Actions queued while the timeline is running start at the current
//! clock. The timeline as a whole runs until its latest action ends; the first `advance` past
//! that point fires every outstanding completion and resets to empty.

/// Normalized progress handed to an action's mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Elapsed time over the action's duration.
    pub t: f64,
    /// This step's time over the action's duration.
    pub dt: f64,
}

/// Result of one [`Timeline::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Actions were stepped; the timeline is still running.
    Running,
    /// The run time was exceeded: completions fired and the timeline reset.
    Finished,
}

type Mutate<S> = Box<dyn FnMut(&mut S, Progress)>;
type Complete<S> = Box<dyn FnOnce(&mut S)>;

struct Action<S> {
    mutate: Mutate<S>,
    /// Timeline clock when the action was queued.
    start: f64,
    duration: f64,
    on_complete: Option<Complete<S>>,
    last_t: f64,
    done: bool,
}

impl<S> Action<S> {
    fn progress(&self, local: f64, dt: f64) -> Progress {
        if self.duration > 0.0 {
            Progress {
                t: local / self.duration,
                dt: dt / self.duration,
            }
        } else {
            Progress { t: 1.0, dt: 1.0 }
        }
    }

    fn step(&mut self, target: &mut S, p: Progress) {
        (self.mutate)(target, p);
        self.last_t = p.t;
    }

    /// Final mutation at exactly `t = 1` when the last step stopped short of it.
    fn settle(&mut self, target: &mut S) {
        if self.last_t < 1.0 {
            let dt = 1.0 - self.last_t;
            self.step(target, Progress { t: 1.0, dt });
        }
    }

    fn complete(&mut self, target: &mut S) {
        self.done = true;
        if let Some(f) = self.on_complete.take() {
            f(target);
        }
    }
}

/// Concurrent actions mutating a target of type `S`.
pub struct Timeline<S> {
    elapsed: f64,
    run_time: f64,
    actions: Vec<Action<S>>,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            run_time: 0.0,
            actions: Vec::new(),
        }
    }
}

impl<S> std::fmt::Debug for Timeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("elapsed", &self.elapsed)
            .field("run_time", &self.run_time)
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl<S> Timeline<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline holding one action.
    pub fn single(duration: f64, mutate: impl FnMut(&mut S, Progress) + 'static) -> Self {
        let mut tl = Self::new();
        tl.add_action(duration, mutate);
        tl
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn run_time(&self) -> f64 {
        self.run_time
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append an action. Durations `<= 0` complete on the next advance with progress `(1, 1)`.
    pub fn add_action(
        &mut self,
        duration: f64,
        mutate: impl FnMut(&mut S, Progress) + 'static,
    ) -> &mut Self {
        self.push(duration, Box::new(mutate), None)
    }

    /// Append an action with a completion callback, fired exactly once.
    pub fn add_action_with_completion(
        &mut self,
        duration: f64,
        mutate: impl FnMut(&mut S, Progress) + 'static,
        on_complete: impl FnOnce(&mut S) + 'static,
    ) -> &mut Self {
        self.push(duration, Box::new(mutate), Some(Box::new(on_complete)))
    }

    fn push(
        &mut self,
        duration: f64,
        mutate: Mutate<S>,
        on_complete: Option<Complete<S>>,
    ) -> &mut Self {
        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        let start = self.elapsed;
        self.run_time = self.run_time.max(start + duration);
        self.actions.push(Action {
            mutate,
            start,
            duration,
            on_complete,
            last_t: 0.0,
            done: false,
        });
        self
    }

    /// Move every action of `other` onto the end of this timeline, starting them at the current
    /// clock.
    pub fn extend(&mut self, other: Timeline<S>) {
        let offset = self.elapsed;
        self.run_time = self.run_time.max(offset + other.run_time);
        self.actions.extend(other.actions.into_iter().map(|mut a| {
            a.start += offset;
            a
        }));
    }

    /// Step every live action by `dt` seconds.
    ///
    /// Actions whose own span ends during this step get their final mutation and then their
    /// completion. Once `elapsed` passes the run time, actions that have not reached `t = 1` are
    /// settled there, remaining completions fire, and the timeline resets.
    pub fn advance(&mut self, target: &mut S, dt: f64) -> Advance {
        self.elapsed += dt;
        if self.elapsed > self.run_time {
            self.finish(target);
            return Advance::Finished;
        }

        let elapsed = self.elapsed;
        for action in &mut self.actions {
            let local = elapsed - action.start;
            if action.done {
                continue;
            }
            // Rounding in the summed clock can step over the frame that would end the action.
            if local > action.duration + dt {
                action.settle(target);
                action.complete(target);
                continue;
            }
            let p = action.progress(local, dt);
            action.step(target, p);
            if local >= action.duration {
                action.complete(target);
            }
        }
        Advance::Running
    }

    /// Bring every unfinished action to `t = 1`, fire its completion, then reset.
    pub fn finish(&mut self, target: &mut S) {
        for action in &mut self.actions {
            if !action.done {
                action.settle(target);
                action.complete(target);
            }
        }
        self.reset();
    }

    /// Drop every action and zero the clock.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.run_time = 0.0;
        self.actions.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
