//! Scripted timelines for the looping product demos.
//!
//! A [`Timeline`] is an authored list of [`Step`]s. Delays only move the
//! cursor forward; every other step is scheduled at the sum of the delays
//! that precede it. [`player::Player`] replays a timeline forever against
//! whatever state the caller mutates in its apply callback.

pub mod player;
pub mod scheduler;
pub mod state;

use thiserror::Error;

pub use player::{Player, PlayerStatus};
pub use scheduler::{ManualClock, Scheduler, TimeoutScheduler};
pub use state::{Message, PlayerState, Sender};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimelineError {
    #[error("timeline has no steps")]
    Empty,
    #[error("timeline only contains delays")]
    NoCues,
}

/// One scripted event. `C` carries the events only one demo understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<C> {
    Delay(u32),
    AppendMessage {
        sender: Sender,
        text: String,
        display_name: Option<String>,
    },
    SetTyping { who: Sender, visible: bool },
    SetZoom(bool),
    SetInput(String),
    SetPanel(bool),
    SetHighlight(Vec<String>),
    ResetAll,
    Cue(C),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<C> {
    steps: Vec<Step<C>>,
    // (offset_ms, index into steps) for every non-delay step, authored order
    schedule: Vec<(u32, usize)>,
    duration_ms: u32,
}

impl<C> Timeline<C> {
    pub fn new(steps: Vec<Step<C>>) -> Result<Self, TimelineError> {
        if steps.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut elapsed: u32 = 0;
        let mut schedule = Vec::new();
        for (index, step) in steps.iter().enumerate() {
            match step {
                Step::Delay(ms) => elapsed = elapsed.saturating_add(*ms),
                _ => schedule.push((elapsed, index)),
            }
        }

        if schedule.is_empty() {
            return Err(TimelineError::NoCues);
        }

        Ok(Self {
            steps,
            schedule,
            duration_ms: elapsed,
        })
    }

    pub fn builder() -> TimelineBuilder<C> {
        TimelineBuilder::default()
    }

    /// Non-delay steps with their cumulative offsets, in authored order.
    pub fn schedule(&self) -> impl Iterator<Item = (u32, &Step<C>)> + '_ {
        self.schedule
            .iter()
            .map(move |&(offset, index)| (offset, &self.steps[index]))
    }

    /// The `n`th scheduled (non-delay) step.
    pub fn cue(&self, n: usize) -> Option<&Step<C>> {
        self.schedule.get(n).map(|&(_, index)| &self.steps[index])
    }

    pub fn cue_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl<C: Clone> Timeline<C> {
    /// Same script played `rate` times faster. Non-positive or non-finite
    /// rates leave the timing untouched.
    pub fn scaled(&self, rate: f64) -> Self {
        if !rate.is_finite() || rate <= 0.0 || rate == 1.0 {
            return self.clone();
        }
        let steps = self
            .steps
            .iter()
            .map(|step| match step {
                Step::Delay(ms) => Step::Delay(scale_ms(*ms, rate)),
                other => other.clone(),
            })
            .collect();
        // Scaling cannot remove the non-delay steps, so validation holds.
        match Self::new(steps) {
            Ok(timeline) => timeline,
            Err(_) => self.clone(),
        }
    }
}

pub(crate) fn scale_ms(ms: u32, rate: f64) -> u32 {
    (f64::from(ms) / rate).round().min(f64::from(u32::MAX)) as u32
}

/// Fluent authoring for demo scripts.
#[derive(Debug)]
pub struct TimelineBuilder<C> {
    steps: Vec<Step<C>>,
    // Time already spent by a typed send, taken out of the next delay.
    carry_ms: u32,
}

impl<C> Default for TimelineBuilder<C> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            carry_ms: 0,
        }
    }
}

impl<C> TimelineBuilder<C> {
    pub fn step(mut self, step: Step<C>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        let ms = ms.saturating_sub(std::mem::take(&mut self.carry_ms));
        self.step(Step::Delay(ms))
    }

    pub fn message(self, sender: Sender, text: &str) -> Self {
        self.step(Step::AppendMessage {
            sender,
            text: text.to_string(),
            display_name: None,
        })
    }

    pub fn message_from(self, name: &str, text: &str) -> Self {
        self.step(Step::AppendMessage {
            sender: Sender::Other,
            text: text.to_string(),
            display_name: Some(name.to_string()),
        })
    }

    pub fn system(self, text: &str) -> Self {
        self.message(Sender::System, text)
    }

    pub fn typing(self, who: Sender, visible: bool) -> Self {
        self.step(Step::SetTyping { who, visible })
    }

    pub fn zoom(self, visible: bool) -> Self {
        self.step(Step::SetZoom(visible))
    }

    pub fn input(self, text: &str) -> Self {
        self.step(Step::SetInput(text.to_string()))
    }

    pub fn panel(self, visible: bool) -> Self {
        self.step(Step::SetPanel(visible))
    }

    pub fn highlight(self, ids: &[&str]) -> Self {
        self.step(Step::SetHighlight(
            ids.iter().map(|id| id.to_string()).collect(),
        ))
    }

    pub fn cue(self, cue: C) -> Self {
        self.step(Step::Cue(cue))
    }

    /// Shows `text` in the composer, then sends it as our own message
    /// `lead_ms` later. The lead is absorbed by the next delay, so steps
    /// authored after the send keep their offsets.
    pub fn typed_send(self, text: &str, lead_ms: u32) -> Self {
        let mut builder = self
            .input(text)
            .step(Step::Delay(lead_ms))
            .input("")
            .message(Sender::Me, text);
        builder.carry_ms = lead_ms;
        builder
    }

    pub fn build(self) -> Result<Timeline<C>, TimelineError> {
        Timeline::new(self.steps)
    }
}
