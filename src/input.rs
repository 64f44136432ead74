//! Input sampling and edge detection
//!
//! The platform layer feeds one `InputState` snapshot per frame; the
//! tracker diffs it against the previous frame's snapshot so "pressed this
//! frame" queries are computed once and handed to every consumer as part of
//! an immutable `TickInput` - nothing re-polls the device mid-frame.

use glam::Vec2;
use std::collections::HashSet;

use crate::sim::tick::TickInput;

/// Keys the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start wave / confirm
    Enter,
    /// Pause / back
    Escape,
    /// Cycle turret left
    Q,
    /// Cycle turret right
    E,
    /// Camera pan
    W,
    A,
    S,
    D,
}

/// Raw device state for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    pub left_button: bool,
    pub right_button: bool,
    /// Cursor position in screen coordinates
    pub cursor: Vec2,
    /// Accumulated scroll wheel value (monotonic, like a hardware counter)
    pub scroll: i32,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

/// Current-vs-previous frame state pair.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    current: InputState,
    previous: InputState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take this frame's snapshot; the old current becomes the previous.
    pub fn update(&mut self, state: InputState) {
        self.previous = std::mem::replace(&mut self.current, state);
    }

    pub fn current(&self) -> &InputState {
        &self.current
    }

    /// Down this frame and up the last one.
    pub fn single_key_press(&self, key: Key) -> bool {
        self.current.is_key_down(key) && !self.previous.is_key_down(key)
    }

    pub fn left_click(&self) -> bool {
        self.current.left_button
    }

    pub fn single_left_click(&self) -> bool {
        self.current.left_button && !self.previous.left_button
    }

    pub fn single_right_click(&self) -> bool {
        self.current.right_button && !self.previous.right_button
    }

    /// Wheel movement since the previous frame, in notches.
    pub fn scroll_delta(&self) -> i32 {
        self.current.scroll - self.previous.scroll
    }

    /// Fold the frame's edges and held state into the simulation's input.
    pub fn tick_input(&self) -> TickInput {
        let mut pan = Vec2::ZERO;
        if self.current.is_key_down(Key::A) {
            pan.x -= 1.0;
        }
        if self.current.is_key_down(Key::D) {
            pan.x += 1.0;
        }
        if self.current.is_key_down(Key::W) {
            pan.y -= 1.0;
        }
        if self.current.is_key_down(Key::S) {
            pan.y += 1.0;
        }

        TickInput {
            start_wave: self.single_key_press(Key::Enter),
            pause: self.single_key_press(Key::Escape),
            cycle_previous: self.single_key_press(Key::Q),
            cycle_next: self.single_key_press(Key::E),
            fire: self.left_click(),
            select_click: self.single_left_click(),
            cursor: self.current.cursor,
            pan,
            zoom_delta: self.scroll_delta() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        for &key in keys {
            state.press(key);
        }
        state
    }

    #[test]
    fn test_single_key_press_fires_once() {
        let mut tracker = InputTracker::new();
        tracker.update(state_with(&[Key::Enter]));
        assert!(tracker.single_key_press(Key::Enter));

        // Still held next frame: no longer an edge
        tracker.update(state_with(&[Key::Enter]));
        assert!(!tracker.single_key_press(Key::Enter));

        // Released then pressed again: a fresh edge
        tracker.update(state_with(&[]));
        tracker.update(state_with(&[Key::Enter]));
        assert!(tracker.single_key_press(Key::Enter));
    }

    #[test]
    fn test_single_left_click() {
        let mut tracker = InputTracker::new();
        let mut held = InputState::default();
        held.left_button = true;
        tracker.update(held.clone());
        assert!(tracker.single_left_click());
        assert!(tracker.left_click());

        tracker.update(held);
        assert!(!tracker.single_left_click());
        assert!(tracker.left_click());
    }

    #[test]
    fn test_scroll_delta() {
        let mut tracker = InputTracker::new();
        let mut state = InputState::default();
        state.scroll = 3;
        tracker.update(state.clone());
        assert_eq!(tracker.scroll_delta(), 3);

        state.scroll = 1;
        tracker.update(state);
        assert_eq!(tracker.scroll_delta(), -2);
    }

    #[test]
    fn test_tick_input_mapping() {
        let mut tracker = InputTracker::new();
        let mut state = state_with(&[Key::Enter, Key::A, Key::S]);
        state.left_button = true;
        state.cursor = Vec2::new(10.0, 20.0);
        tracker.update(state);

        let input = tracker.tick_input();
        assert!(input.start_wave);
        assert!(input.fire);
        assert!(input.select_click);
        assert_eq!(input.pan, Vec2::new(-1.0, 1.0));
        assert_eq!(input.cursor, Vec2::new(10.0, 20.0));
        assert!(!input.cycle_next);
    }
}
