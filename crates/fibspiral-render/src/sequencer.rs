//! Step-by-step animation of a spiral.
//!
//! A run is an explicit list of steps (one per square, then the curve)
//! with a cursor and a deadline. [`AnimationSequencer::advance`] paints at
//! most one step per call, which suits an event loop that polls it on
//! every tick. [`AnimationSequencer::run`] drives the same steps to
//! completion, waiting between them through a [`Delay`].
//!
//! Runs cannot be cancelled. Starting while a run is in flight is a silent
//! no-op. The step delay is captured when a run starts, so changing it
//! only affects later runs.

use std::time::{Duration, Instant};

use fibspiral_core::constants::{DEFAULT_MARGIN, DEFAULT_STEP_DELAY_MS};
use fibspiral_core::layout::Layout;

use crate::renderer::SpiralRenderer;
use crate::surface::Surface;

/// Whether an animation is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
}

impl AnimationState {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// Result of [`AnimationSequencer::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run began.
    Started,
    /// A run is already in flight; nothing changed.
    Busy,
    /// The layout has no squares; nothing changed.
    Empty,
}

/// Result of [`AnimationSequencer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No run in flight.
    Idle,
    /// The next step is not due yet.
    Pending,
    /// Square `index` of `total` was painted.
    Painted { index: usize, total: usize },
    /// The curve was drawn and the run ended.
    Finished,
}

/// Pause primitive used by the blocking driver.
pub trait Delay {
    fn wait(&mut self, duration: Duration);
}

/// Real delay backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Delay that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&mut self, _duration: Duration) {}
}

/// Receives progress notifications from the blocking driver.
pub trait StepObserver {
    /// Square `index` of `total` was painted.
    fn on_square(&self, index: usize, total: usize);

    /// The curve was drawn and the run ended.
    fn on_complete(&self);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl StepObserver for NoOpObserver {
    fn on_square(&self, _index: usize, _total: usize) {}
    fn on_complete(&self) {}
}

#[derive(Debug)]
struct ActiveRun {
    renderer: SpiralRenderer,
    cursor: usize,
    step_delay: Duration,
    next_due: Instant,
}

/// Drives a [`SpiralRenderer`] one square at a time.
#[derive(Debug)]
pub struct AnimationSequencer {
    step_delay: Duration,
    margin: f64,
    run: Option<ActiveRun>,
}

impl AnimationSequencer {
    #[must_use]
    pub fn new(step_delay: Duration) -> Self {
        Self {
            step_delay,
            margin: DEFAULT_MARGIN,
            run: None,
        }
    }

    /// Use `margin` surface units around the spiral instead of [`DEFAULT_MARGIN`].
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Delay used by the next run.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Change the delay for future runs. An in-flight run keeps its own.
    pub fn set_step_delay(&mut self, step_delay: Duration) {
        self.step_delay = step_delay;
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        if self.run.is_some() {
            AnimationState::Running
        } else {
            AnimationState::Idle
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Squares painted so far and the total, while running.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.run.as_ref().map(|r| (r.cursor, r.renderer.len()))
    }

    /// When the next step becomes due, while running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.run.as_ref().map(|r| r.next_due)
    }

    /// Begin a run. The first square is due at `now`.
    ///
    /// Clears `surface` only when the run actually starts.
    pub fn start<S: Surface + ?Sized>(
        &mut self,
        layout: Layout,
        sequence_len: usize,
        surface: &mut S,
        now: Instant,
    ) -> StartOutcome {
        if self.run.is_some() {
            tracing::warn!("animation already running; start ignored");
            return StartOutcome::Busy;
        }
        if layout.is_empty() {
            tracing::debug!("empty layout; nothing to animate");
            return StartOutcome::Empty;
        }

        let renderer = SpiralRenderer::with_margin(
            layout,
            sequence_len,
            surface.width(),
            surface.height(),
            self.margin,
        );
        renderer.clear(surface);
        tracing::info!(
            squares = renderer.len(),
            step_delay_ms = self.step_delay.as_millis(),
            "animation started"
        );
        self.run = Some(ActiveRun {
            renderer,
            cursor: 0,
            step_delay: self.step_delay,
            next_due: now,
        });
        StartOutcome::Started
    }

    /// Paint the next step if it is due at `now`.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> StepOutcome {
        let Some(run) = self.run.as_mut() else {
            return StepOutcome::Idle;
        };
        if now < run.next_due {
            return StepOutcome::Pending;
        }

        let total = run.renderer.len();
        if run.cursor < total {
            let index = run.cursor;
            run.renderer.paint_square(surface, index);
            run.cursor += 1;
            run.next_due = now + run.step_delay;
            tracing::debug!(index, total, "square painted");
            return StepOutcome::Painted { index, total };
        }

        run.renderer.paint_curve(surface);
        self.run = None;
        tracing::info!(squares = total, "animation finished");
        StepOutcome::Finished
    }

    /// Run a whole animation, blocking through `delay` between steps.
    ///
    /// Time is tracked on a virtual clock advanced by exactly the waited
    /// amount, so a [`NoDelay`] run completes immediately with the same
    /// step order as a real one.
    pub fn run<S, D>(
        &mut self,
        layout: Layout,
        sequence_len: usize,
        surface: &mut S,
        delay: &mut D,
        observer: &dyn StepObserver,
    ) -> StartOutcome
    where
        S: Surface + ?Sized,
        D: Delay + ?Sized,
    {
        let mut now = Instant::now();
        let outcome = self.start(layout, sequence_len, surface, now);
        if outcome != StartOutcome::Started {
            return outcome;
        }

        loop {
            match self.advance(surface, now) {
                StepOutcome::Painted { index, total } => observer.on_square(index, total),
                StepOutcome::Pending => {
                    if let Some(due) = self.next_deadline() {
                        delay.wait(due.saturating_duration_since(now));
                        now = due;
                    }
                }
                StepOutcome::Finished => {
                    observer.on_complete();
                    break;
                }
                StepOutcome::Idle => break,
            }
        }
        StartOutcome::Started
    }
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_STEP_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::display_list::{DisplayList, DrawOp};
    use fibspiral_core::layout::layout;
    use fibspiral_core::sequence::generate;

    const MS: Duration = Duration::from_millis(1);

    fn spiral(n: i64) -> (Layout, usize) {
        let seq = generate(n);
        (layout(&seq), seq.len())
    }

    #[derive(Default)]
    struct RecordingDelay(Vec<Duration>);

    impl Delay for RecordingDelay {
        fn wait(&mut self, duration: Duration) {
            self.0.push(duration);
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        squares: RefCell<Vec<(usize, usize)>>,
        completed: RefCell<usize>,
    }

    impl StepObserver for RecordingObserver {
        fn on_square(&self, index: usize, total: usize) {
            self.squares.borrow_mut().push((index, total));
        }
        fn on_complete(&self) {
            *self.completed.borrow_mut() += 1;
        }
    }

    #[test]
    fn default_delay_is_300ms() {
        let seq = AnimationSequencer::default();
        assert_eq!(seq.step_delay(), 300 * MS);
        assert_eq!(seq.state(), AnimationState::Idle);
    }

    #[test]
    fn empty_layout_is_noop() {
        let mut seq = AnimationSequencer::default();
        let mut list = DisplayList::new(600.0, 600.0);
        let (layout, len) = spiral(0);
        assert_eq!(
            seq.start(layout, len, &mut list, Instant::now()),
            StartOutcome::Empty
        );
        assert!(!seq.is_running());
        assert!(list.ops().is_empty());
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut seq = AnimationSequencer::new(100 * MS);
        let mut list = DisplayList::new(600.0, 600.0);
        let now = Instant::now();
        let (layout, len) = spiral(5);
        assert_eq!(seq.start(layout, len, &mut list, now), StartOutcome::Started);
        assert!(matches!(seq.advance(&mut list, now), StepOutcome::Painted { index: 0, .. }));

        let before = list.ops().to_vec();
        let (other, other_len) = spiral(3);
        assert_eq!(
            seq.start(other, other_len, &mut list, now),
            StartOutcome::Busy
        );
        assert_eq!(list.ops(), before.as_slice());
        assert_eq!(seq.progress(), Some((1, 5)));
    }

    #[test]
    fn steps_wait_for_deadline() {
        let mut seq = AnimationSequencer::new(100 * MS);
        let mut list = DisplayList::new(600.0, 600.0);
        let t0 = Instant::now();
        let (layout, len) = spiral(2);
        seq.start(layout, len, &mut list, t0);

        assert_eq!(
            seq.advance(&mut list, t0),
            StepOutcome::Painted { index: 0, total: 2 }
        );
        assert_eq!(seq.advance(&mut list, t0 + 50 * MS), StepOutcome::Pending);
        assert_eq!(
            seq.advance(&mut list, t0 + 100 * MS),
            StepOutcome::Painted { index: 1, total: 2 }
        );
        // The curve waits one more delay after the last square.
        assert_eq!(seq.advance(&mut list, t0 + 150 * MS), StepOutcome::Pending);
        assert_eq!(list.count_curves(), 0);
        assert_eq!(seq.advance(&mut list, t0 + 200 * MS), StepOutcome::Finished);
        assert_eq!(list.count_curves(), 1);
        assert_eq!(seq.state(), AnimationState::Idle);
        assert_eq!(seq.advance(&mut list, t0 + 300 * MS), StepOutcome::Idle);
    }

    #[test]
    fn delay_is_captured_at_start() {
        let mut seq = AnimationSequencer::new(300 * MS);
        let mut list = DisplayList::new(600.0, 600.0);
        let t0 = Instant::now();
        let (layout, len) = spiral(3);
        seq.start(layout, len, &mut list, t0);
        seq.advance(&mut list, t0);

        seq.set_step_delay(10 * MS);
        assert_eq!(seq.step_delay(), 10 * MS);
        assert_eq!(seq.next_deadline(), Some(t0 + 300 * MS));
        assert_eq!(seq.advance(&mut list, t0 + 10 * MS), StepOutcome::Pending);
    }

    #[test]
    fn blocking_run_waits_after_every_square() {
        let mut seq = AnimationSequencer::new(25 * MS);
        let mut list = DisplayList::new(600.0, 600.0);
        let mut delay = RecordingDelay::default();
        let observer = RecordingObserver::default();
        let (layout, len) = spiral(4);

        let outcome = seq.run(layout, len, &mut list, &mut delay, &observer);
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(delay.0, vec![25 * MS; 4]);
        assert_eq!(
            *observer.squares.borrow(),
            vec![(0, 4), (1, 4), (2, 4), (3, 4)]
        );
        assert_eq!(*observer.completed.borrow(), 1);
        assert!(!seq.is_running());
    }

    #[test]
    fn blocking_run_paints_curve_last() {
        let mut seq = AnimationSequencer::new(Duration::ZERO);
        let mut list = DisplayList::new(600.0, 600.0);
        let (layout, len) = spiral(10);
        seq.run(layout, len, &mut list, &mut NoDelay, &NoOpObserver);

        let ops = list.ops();
        assert!(matches!(ops[0], DrawOp::Clear(_)));
        assert_eq!(list.count_squares(), 10);
        assert_eq!(list.count_curves(), 9);
        let first_curve = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Curve { .. }))
            .unwrap();
        let last_fill = ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::FillRect { .. }))
            .unwrap();
        assert!(first_curve > last_fill);
    }

    #[test]
    fn blocking_run_on_empty_layout() {
        let mut seq = AnimationSequencer::default();
        let mut list = DisplayList::new(600.0, 600.0);
        let mut delay = RecordingDelay::default();
        let (layout, len) = spiral(0);
        let outcome = seq.run(layout, len, &mut list, &mut delay, &NoOpObserver);
        assert_eq!(outcome, StartOutcome::Empty);
        assert!(delay.0.is_empty());
    }

    #[test]
    fn custom_margin_reaches_renderer() {
        let mut seq = AnimationSequencer::new(Duration::ZERO).with_margin(2.0);
        assert!((seq.margin() - 2.0).abs() < f64::EPSILON);
        let mut list = DisplayList::new(100.0, 100.0);
        let (layout, len) = spiral(1);
        seq.run(layout, len, &mut list, &mut NoDelay, &NoOpObserver);
        let DrawOp::FillRect { rect, .. } = &list.ops()[1] else {
            panic!("expected a filled square after the clear");
        };
        assert!((rect.x - 2.0).abs() < 1e-9);
        assert!((rect.width - 96.0).abs() < 1e-9);
    }

    #[test]
    fn sequencer_is_reusable() {
        let mut seq = AnimationSequencer::new(Duration::ZERO);
        let mut list = DisplayList::new(600.0, 600.0);
        for n in [3, 5] {
            let (layout, len) = spiral(n);
            seq.run(layout, len, &mut list, &mut NoDelay, &NoOpObserver);
        }
        // Each run clears the surface first.
        assert_eq!(list.count_squares(), 5);
    }
}
