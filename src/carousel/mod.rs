//! Carousel - directional slide transitions
//!
//! Each slide carries one `SlideState`; the carousel itself is either idle or
//! transitioning. `navigate` returns the DOM effects to apply in order, so the
//! state machine runs (and is tested) without a rendering surface.
//!
//! Completion is driven by the caller: `tick(now)` after the fixed duration,
//! or `finish_transition()` from a `transitionend` listener.

use crate::domain::CarouselConfig;

mod state;
mod facade;

pub use facade::Carousel;
pub use state::{CarouselMode, Direction, SlideEffect, SlideState};

pub struct CarouselCore {
    states: Vec<SlideState>,
    /// Natural content height of each slide (scrollHeight), fed by the page
    heights: Vec<f32>,
    current: usize,
    mode: CarouselMode,
    container_height: f32,
    transition_ms: f64,
}

impl CarouselCore {
    /// Fails when there are no slides; the page then skips the carousel.
    pub fn new(slide_count: usize) -> Result<Self, String> {
        Self::with_config(slide_count, &CarouselConfig::default())
    }

    pub fn with_config(slide_count: usize, config: &CarouselConfig) -> Result<Self, String> {
        if slide_count == 0 {
            return Err("carousel needs at least one slide".to_string());
        }
        let mut states = vec![SlideState::Idle; slide_count];
        states[0] = SlideState::RestingActive;
        Ok(Self {
            states,
            heights: vec![0.0; slide_count],
            current: 0,
            mode: CarouselMode::Idle,
            container_height: 0.0,
            transition_ms: config.transition_ms,
        })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the current slide. Already the target while a transition runs.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.mode, CarouselMode::Transitioning { .. })
    }

    pub fn state(&self, slide: usize) -> Option<SlideState> {
        self.states.get(slide).copied()
    }

    pub fn states(&self) -> &[SlideState] {
        &self.states
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Start a transition to `target` (wrapped). `None` if one is already running.
    pub fn navigate(&mut self, direction: Direction, target: usize, now_ms: f64) -> Option<Vec<SlideEffect>> {
        if self.is_animating() {
            return None;
        }
        self.mode = CarouselMode::Transitioning {
            deadline_ms: now_ms + self.transition_ms,
        };

        let target = target % self.states.len();
        let from = self.current;
        let mut effects = Vec::with_capacity(6);

        self.apply(SlideEffect::SetState { slide: from, state: direction.exit_state() }, &mut effects);
        self.apply(SlideEffect::SetState { slide: target, state: SlideState::Idle }, &mut effects);
        self.apply(SlideEffect::SetState { slide: target, state: direction.enter_state() }, &mut effects);
        // Without the reflow the browser never sees the start position
        self.apply(SlideEffect::ForceReflow { slide: target }, &mut effects);
        self.apply(SlideEffect::SetState { slide: target, state: SlideState::RestingActive }, &mut effects);

        self.current = target;
        // Height follows immediately so surrounding layout doesn't jump at the end
        if let Some(effect) = self.refresh_height() {
            effects.push(effect);
        }

        Some(effects)
    }

    pub fn next(&mut self, now_ms: f64) -> Option<Vec<SlideEffect>> {
        let target = (self.current + 1) % self.states.len();
        self.navigate(Direction::Forward, target, now_ms)
    }

    pub fn prev(&mut self, now_ms: f64) -> Option<Vec<SlideEffect>> {
        let len = self.states.len();
        let target = (self.current + len - 1) % len;
        self.navigate(Direction::Backward, target, now_ms)
    }

    /// Complete the transition once its deadline has passed.
    /// Returns the slides reset to idle (empty if nothing completed).
    pub fn tick(&mut self, now_ms: f64) -> Vec<SlideEffect> {
        match self.mode {
            CarouselMode::Transitioning { deadline_ms } if now_ms >= deadline_ms => self.finish_transition(),
            _ => Vec::new(),
        }
    }

    /// Clear the guard and strip every non-current slide back to idle
    pub fn finish_transition(&mut self) -> Vec<SlideEffect> {
        if !self.is_animating() {
            return Vec::new();
        }
        self.mode = CarouselMode::Idle;

        let mut effects = Vec::new();
        for slide in 0..self.states.len() {
            if slide != self.current && self.states[slide] != SlideState::Idle {
                self.apply(SlideEffect::SetState { slide, state: SlideState::Idle }, &mut effects);
            }
        }
        effects
    }

    /// Record a slide's natural height; returns false for unknown slides
    pub fn set_slide_height(&mut self, slide: usize, height: f32) -> bool {
        match self.heights.get_mut(slide) {
            Some(h) => {
                *h = height.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Re-apply the current slide's height (load, resize, navigation)
    pub fn refresh_height(&mut self) -> Option<SlideEffect> {
        let px = *self.heights.get(self.current)?;
        self.container_height = px;
        Some(SlideEffect::SetHeight { px })
    }

    fn apply(&mut self, effect: SlideEffect, effects: &mut Vec<SlideEffect>) {
        if let SlideEffect::SetState { slide, state } = effect {
            self.states[slide] = state;
        }
        effects.push(effect);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
