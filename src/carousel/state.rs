use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Navigation direction: forward pushes content down, backward pushes it up
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Visual tag carried by each slide. Exactly one tag at a time.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideState {
    /// Not shown and not animating
    Idle,
    RestingActive,
    EnteringFromTop,
    EnteringFromBottom,
    ExitingUp,
    ExitingDown,
}

impl SlideState {
    /// CSS class the page stylesheet animates on (none for idle)
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            SlideState::Idle => None,
            SlideState::RestingActive => Some("active"),
            SlideState::EnteringFromTop => Some("from-top"),
            SlideState::EnteringFromBottom => Some("from-bottom"),
            SlideState::ExitingUp => Some("exit-up"),
            SlideState::ExitingDown => Some("exit-down"),
        }
    }

    pub fn is_exiting(self) -> bool {
        matches!(self, SlideState::ExitingUp | SlideState::ExitingDown)
    }
}

impl Direction {
    pub(crate) fn exit_state(self) -> SlideState {
        match self {
            Direction::Forward => SlideState::ExitingDown,
            Direction::Backward => SlideState::ExitingUp,
        }
    }

    pub(crate) fn enter_state(self) -> SlideState {
        match self {
            Direction::Forward => SlideState::EnteringFromTop,
            Direction::Backward => SlideState::EnteringFromBottom,
        }
    }
}

/// Carousel-level mode; the guard against overlapping transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselMode {
    Idle,
    Transitioning { deadline_ms: f64 },
}

/// One DOM mutation, in the order the page must apply them
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideEffect {
    /// Replace every transition class on `slide` with the state's class
    SetState { slide: usize, state: SlideState },
    /// Read layout on `slide` so the starting transform is committed
    ForceReflow { slide: usize },
    /// Set the container height in px
    SetHeight { px: f32 },
}
