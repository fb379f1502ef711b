//! Swipe recognition: turns a pointer-down → move → up sequence into one
//! discrete directional swipe.
//!
//! [`SwipeRecognizer`] owns at most one [`GestureSession`] at a time. A session
//! starts on pointer-down, follows the pointer on move and is always closed by
//! pointer-up or pointer-cancel, whether or not a swipe was recognized.
//!
//! # Invariants
//!
//! 1. Pointer-up emits exactly one classification: a [`Swipe`] or `None`.
//! 2. After pointer-up or pointer-cancel the session is inactive.
//! 3. A pointer-down while a session is active is ignored.
//! 4. Pointer-cancel never emits a swipe.
//!
//! # Failure Modes
//!
//! Raw input with missing or non-finite coordinates, or from a source the
//! config does not track, is dropped. A session whose pointer-down was dropped
//! never starts, so the matching pointer-up resolves to `None`.

/// Thresholds and input sources for swipe recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Minimum travel (px) along the dominant axis for a swipe (default: 50).
    pub threshold: f64,
    /// Minimum signed travel (px) needed to pick a direction (default: 10).
    pub min_delta_to_disambiguate: f64,
    /// Accept touch input (default: true).
    pub track_touch: bool,
    /// Accept mouse input (default: false).
    pub track_mouse: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            min_delta_to_disambiguate: 10.0,
            track_touch: true,
            track_mouse: false,
        }
    }
}

impl GestureConfig {
    fn tracks(&self, source: PointerSource) -> bool {
        match source {
            PointerSource::Touch => self.track_touch,
            PointerSource::Mouse => self.track_mouse,
        }
    }
}

/// Device that produced a pointer reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Touch,
    Mouse,
}

/// A raw pointer reading as delivered by the input layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPointer {
    pub source: PointerSource,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub timestamp_ms: u64,
}

impl RawPointer {
    pub fn new(source: PointerSource, x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            source,
            x: Some(x),
            y: Some(y),
            timestamp_ms,
        }
    }
}

/// A validated pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

impl PointerSample {
    /// Validate a raw reading. Missing or non-finite coordinates yield `None`.
    pub fn from_raw(raw: &RawPointer) -> Option<Self> {
        match (raw.x, raw.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Self {
                x,
                y,
                timestamp_ms: raw.timestamp_ms,
            }),
            _ => None,
        }
    }
}

/// One touch or drag interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub start: PointerSample,
    pub last: PointerSample,
    pub active: bool,
}

impl GestureSession {
    fn delta(&self) -> DragDelta {
        DragDelta {
            dx: self.start.x - self.last.x,
            dy: self.start.y - self.last.y,
        }
    }
}

/// Live travel of the current drag, `start - last` on each axis.
///
/// Positive `dx` means the pointer moved left, positive `dy` means it moved up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Discrete swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

impl Swipe {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Swipe::Left | Swipe::Right)
    }
}

/// Input accepted by [`SwipeRecognizer::process`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(RawPointer),
    Move(RawPointer),
    Up,
    Cancel,
}

/// What a processed [`PointerEvent`] produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutput {
    Idle,
    Drag(DragDelta),
    Swipe(Swipe),
}

/// Stateful swipe recognizer.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl SwipeRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Dispatch one pointer event.
    pub fn process(&mut self, event: &PointerEvent) -> GestureOutput {
        match event {
            PointerEvent::Down(raw) => {
                self.on_pointer_down(raw);
                GestureOutput::Idle
            }
            PointerEvent::Move(raw) => self
                .on_pointer_move(raw)
                .map_or(GestureOutput::Idle, GestureOutput::Drag),
            PointerEvent::Up => self
                .on_pointer_up()
                .map_or(GestureOutput::Idle, GestureOutput::Swipe),
            PointerEvent::Cancel => {
                self.on_pointer_cancel();
                GestureOutput::Idle
            }
        }
    }

    pub fn on_pointer_down(&mut self, raw: &RawPointer) {
        if self.is_active() || !self.config.tracks(raw.source) {
            return;
        }
        let Some(sample) = PointerSample::from_raw(raw) else {
            tracing::debug!(?raw, "Dropping malformed pointer-down");
            return;
        };
        self.session = Some(GestureSession {
            start: sample,
            last: sample,
            active: true,
        });
    }

    /// Track the pointer. Returns the live delta for drag feedback.
    pub fn on_pointer_move(&mut self, raw: &RawPointer) -> Option<DragDelta> {
        if !self.config.tracks(raw.source) {
            return None;
        }
        let session = self.session.as_mut().filter(|s| s.active)?;
        let sample = PointerSample::from_raw(raw)?;
        session.last = sample;
        Some(session.delta())
    }

    /// Close the session and classify it.
    pub fn on_pointer_up(&mut self) -> Option<Swipe> {
        let session = self.session.take().filter(|s| s.active)?;
        let swipe = self.classify(session.delta());
        if let Some(swipe) = swipe {
            tracing::debug!(
                ?swipe,
                dx = session.start.x - session.last.x,
                dy = session.start.y - session.last.y,
                elapsed_ms = session.last.timestamp_ms.saturating_sub(session.start.timestamp_ms),
                "Swipe recognized"
            );
        }
        swipe
    }

    /// Abort the session without emitting anything.
    pub fn on_pointer_cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Pointer session cancelled");
        }
    }

    fn classify(&self, delta: DragDelta) -> Option<Swipe> {
        let threshold = self.config.threshold;
        let min_delta = self.config.min_delta_to_disambiguate;
        let (abs_x, abs_y) = (delta.dx.abs(), delta.dy.abs());

        if abs_x > abs_y && abs_x > threshold {
            if delta.dx > min_delta {
                Some(Swipe::Left)
            } else if delta.dx < -min_delta {
                Some(Swipe::Right)
            } else {
                None
            }
        } else if abs_y > threshold {
            if delta.dy > min_delta {
                Some(Swipe::Up)
            } else if delta.dy < -min_delta {
                Some(Swipe::Down)
            } else {
                None
            }
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some_and(|s| s.active)
    }

    /// Current session, if one is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn reset(&mut self) {
        self.session = None;
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replace the configuration. An in-flight session is kept.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}
