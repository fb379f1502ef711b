//! Slide animation for navigation transitions
//!
//! The model only records *what* happened ([`Transition`]); this module
//! decides how it looks: the content area slides in from the side the new
//! view comes from.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use discography_rs::model::{ActiveTransition, TransitionDirection};

/// Widest slide offset in columns
const MAX_SLIDE: u16 = 12;

/// Content area for this frame of the animation.
pub fn slide_area(
    area: Rect,
    active: Option<&ActiveTransition>,
    now: Instant,
    length: Duration,
) -> Rect {
    let Some(active) = active else {
        return area;
    };
    let remaining = 1.0 - ease_out(active.progress(now, length));
    let offset = ((MAX_SLIDE.min(area.width / 4)) as f32 * remaining).round() as u16;
    if offset == 0 {
        return area;
    }

    match active.transition.direction {
        // New view enters from the right
        TransitionDirection::Forward | TransitionDirection::Next => Rect {
            x: area.x + offset,
            width: area.width - offset,
            ..area
        },
        // New view enters from the left
        TransitionDirection::Backward | TransitionDirection::Previous => Rect {
            width: area.width - offset,
            ..area
        },
        TransitionDirection::Replace => area,
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discography_rs::model::{Transition, View};

    fn active(direction: TransitionDirection, started: Instant) -> ActiveTransition {
        ActiveTransition {
            transition: Transition {
                from: View::Albums,
                to: View::Songs,
                direction,
            },
            started,
        }
    }

    #[test]
    fn forward_starts_shifted_right() {
        let area = Rect::new(0, 0, 80, 20);
        let now = Instant::now();
        let slid = slide_area(
            area,
            Some(&active(TransitionDirection::Forward, now)),
            now,
            Duration::from_millis(200),
        );
        assert_eq!(slid.x, MAX_SLIDE);
        assert_eq!(slid.right(), area.right());
    }

    #[test]
    fn backward_keeps_left_edge() {
        let area = Rect::new(0, 0, 80, 20);
        let now = Instant::now();
        let slid = slide_area(
            area,
            Some(&active(TransitionDirection::Backward, now)),
            now,
            Duration::from_millis(200),
        );
        assert_eq!(slid.x, 0);
        assert_eq!(slid.width, 80 - MAX_SLIDE);
    }

    #[test]
    fn finished_or_absent_transition_is_identity() {
        let area = Rect::new(2, 3, 80, 20);
        let start = Instant::now();
        let later = start + Duration::from_millis(500);
        let t = active(TransitionDirection::Next, start);
        assert_eq!(slide_area(area, Some(&t), later, Duration::from_millis(200)), area);
        assert_eq!(slide_area(area, None, later, Duration::from_millis(200)), area);
        assert_eq!(slide_area(area, Some(&t), start, Duration::ZERO), area);
    }
}
