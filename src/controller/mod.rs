//! Controller module - Input handling
//!
//! Translates terminal events into model operations. It is organized into
//! submodules by input kind:
//!
//! - `input`: Key event handling
//! - `pointer`: Mouse events fed through the swipe recognizer

mod input;
mod pointer;

use std::time::Instant;

use crossterm::event::Event;

use discography_rs::config::AppConfig;
use discography_rs::gesture::SwipeRecognizer;
use discography_rs::model::AppModel;

/// Terminal cell size in logical pixels
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellScale {
    pub width_px: f64,
    pub height_px: f64,
}

pub struct AppController {
    model: AppModel,
    recognizer: SwipeRecognizer,
    scale: CellScale,
    /// Origin for pointer timestamps
    epoch: Instant,
}

impl AppController {
    pub fn new(model: AppModel, config: &AppConfig) -> Self {
        Self {
            model,
            recognizer: SwipeRecognizer::new(config.gesture.to_gesture_config()),
            scale: CellScale {
                width_px: config.terminal.cell_width_px,
                height_px: config.terminal.cell_height_px,
            },
            epoch: Instant::now(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            // Losing focus interrupts the drag like a system gesture would
            Event::FocusLost => self.cancel_pointer(),
            _ => {}
        }
    }

    pub(crate) fn timestamp_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
