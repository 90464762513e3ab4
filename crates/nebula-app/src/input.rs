//! Pointer input: steering samples, the steering tracker, and press events.

use macroquad::prelude::*;

/// One frame of raw pointer readings fed to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Vertical mouse position.
    pub mouse_y: f32,
    /// Vertical position of the first active touch, if any.
    pub touch_y: Option<f32>,
}

/// Read this frame's steering-relevant pointer state from the window.
pub fn sample_pointer() -> PointerSample {
    let touch_y = touches()
        .into_iter()
        .find(|touch| !matches!(touch.phase, TouchPhase::Ended | TouchPhase::Cancelled))
        .map(|touch| touch.position.y);
    PointerSample {
        mouse_y: mouse_position().1,
        touch_y,
    }
}

/// Position of a primary press (mouse click or touch start) this frame.
pub fn primary_press() -> Option<(f32, f32)> {
    if is_mouse_button_pressed(MouseButton::Left) {
        return Some(mouse_position());
    }
    touches()
        .into_iter()
        .find(|touch| touch.phase == TouchPhase::Started)
        .map(|touch| (touch.position.x, touch.position.y))
}

/// Derives the ship's steering target from polled pointer readings.
///
/// Polling cannot distinguish "mouse never moved" from "mouse parked at its
/// start position", so the first reading becomes a baseline and the mouse
/// only begins steering once it leaves it. Until then the ship holds its
/// initialized target. An active touch always steers and takes precedence
/// over the mouse.
#[derive(Debug, Default)]
pub struct PointerTracker {
    mouse_baseline: Option<f32>,
    mouse_engaged: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of readings; returns the steering target, if any.
    pub fn target_y(&mut self, sample: PointerSample) -> Option<f64> {
        if let Some(touch_y) = sample.touch_y {
            return Some(f64::from(touch_y));
        }
        let baseline = *self.mouse_baseline.get_or_insert(sample.mouse_y);
        if sample.mouse_y != baseline {
            self.mouse_engaged = true;
        }
        if self.mouse_engaged {
            Some(f64::from(sample.mouse_y))
        } else {
            None
        }
    }
}
