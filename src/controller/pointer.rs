//! Mouse drags as pointer events

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use discography_rs::gesture::{GestureOutput, PointerEvent, PointerSource, RawPointer};
use super::{AppController, CellScale};

impl AppController {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        for event in self.pointer_events(&mouse) {
            match self.recognizer.process(&event) {
                GestureOutput::Drag(delta) => self.model.set_drag(Some(delta)),
                GestureOutput::Swipe(swipe) => {
                    self.model.set_drag(None);
                    if self.model.apply_swipe(swipe).is_none() {
                        tracing::debug!(?swipe, "Swipe had no effect in this view");
                    }
                }
                GestureOutput::Idle => {
                    if !self.recognizer.is_active() {
                        self.model.set_drag(None);
                    }
                }
            }
        }
    }

    pub(crate) fn cancel_pointer(&mut self) {
        self.recognizer.process(&PointerEvent::Cancel);
        self.model.set_drag(None);
    }

    fn pointer_events(&self, mouse: &MouseEvent) -> Vec<PointerEvent> {
        let raw = to_raw(mouse, self.scale, self.timestamp_ms());
        match mouse.kind {
            // A second left press means the previous release happened outside
            // the terminal, so restart from here instead of the stale origin
            MouseEventKind::Down(MouseButton::Left) if self.recognizer.is_active() => {
                vec![PointerEvent::Cancel, PointerEvent::Down(raw)]
            }
            MouseEventKind::Down(MouseButton::Left) => vec![PointerEvent::Down(raw)],
            MouseEventKind::Drag(MouseButton::Left) => vec![PointerEvent::Move(raw)],
            // The release position counts as the last sample
            MouseEventKind::Up(MouseButton::Left) => vec![PointerEvent::Move(raw), PointerEvent::Up],
            // Any other button press while dragging aborts the gesture
            MouseEventKind::Down(_) if self.recognizer.is_active() => vec![PointerEvent::Cancel],
            _ => Vec::new(),
        }
    }
}

fn to_raw(mouse: &MouseEvent, scale: CellScale, timestamp_ms: u64) -> RawPointer {
    // Sample the middle of the cell
    RawPointer::new(
        PointerSource::Mouse,
        (f64::from(mouse.column) + 0.5) * scale.width_px,
        (f64::from(mouse.row) + 0.5) * scale.height_px,
        timestamp_ms,
    )
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyModifiers};

    use discography_rs::config::AppConfig;
    use discography_rs::model::{AppModel, Catalog, MemoryStore, View};

    use super::*;

    fn controller() -> AppController {
        let model = AppModel::new(Catalog::embedded().unwrap(), Box::new(MemoryStore::new()));
        let mut controller = AppController::new(model, &AppConfig::default());
        controller.model_mut().open_highlighted();
        controller.model_mut().open_album(2);
        controller
    }

    fn mouse(kind: MouseEventKind, column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn leftward_drag_opens_next_album() {
        let mut c = controller();
        c.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        c.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40));
        assert!(c.model().ui_state.drag.is_some());
        c.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 30));

        assert_eq!(c.model().navigation().view(), View::Songs);
        assert_eq!(c.model().navigation().selected_album(), Some(3));
        assert!(c.model().ui_state.drag.is_none());
    }

    #[test]
    fn short_drag_does_nothing() {
        let mut c = controller();
        c.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        c.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 46));
        assert_eq!(c.model().navigation().selected_album(), Some(2));
    }

    #[test]
    fn press_after_lost_release_starts_fresh() {
        let mut c = controller();
        c.model_mut().open_album(5);
        c.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 70));
        c.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10));
        c.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 30));
        c.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 30));

        assert_eq!(c.model().navigation().selected_album(), Some(4));
    }

    #[test]
    fn focus_loss_cancels_the_drag() {
        let mut c = controller();
        c.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        c.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20));
        c.handle_event(Event::FocusLost);
        c.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 10));

        assert_eq!(c.model().navigation().selected_album(), Some(2));
        assert!(c.model().ui_state.drag.is_none());
    }
}
