//! # fibspiral-render
//!
//! Paints spiral layouts onto drawing surfaces and animates them one
//! square at a time.

pub mod display_list;
pub mod renderer;
pub mod sequencer;
pub mod surface;
pub mod svg;

pub use display_list::{DisplayList, DrawOp};
pub use renderer::{render, SpiralRenderer};
pub use sequencer::{
    AnimationSequencer, AnimationState, Delay, NoDelay, NoOpObserver, StartOutcome, StepObserver,
    StepOutcome, ThreadSleep,
};
pub use surface::{Font, RenderError, Stroke, Surface};
pub use svg::SvgSurface;
