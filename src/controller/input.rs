//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use discography_rs::gesture::Swipe;
use discography_rs::model::View;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.set_should_quit(true);
            return;
        }

        // Help popup swallows everything until dismissed
        if self.model.ui_state.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                self.model.toggle_help_popup();
            }
            return;
        }

        let model = &mut self.model;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true),
            KeyCode::Enter => {
                model.open_highlighted();
            }
            KeyCode::Esc | KeyCode::Backspace => {
                model.navigate_back();
            }
            // Arrow keys behave like swipes: the content follows the finger,
            // so pressing → reveals the next item as a left swipe would
            KeyCode::Right => {
                model.apply_swipe(Swipe::Left);
            }
            KeyCode::Left => {
                model.apply_swipe(Swipe::Right);
            }
            // Digits jump along the album or song tabs
            KeyCode::Char(d @ '1'..='9') => {
                let index = (d as usize) - ('1' as usize);
                match model.navigation().view() {
                    View::Songs => {
                        model.open_album(index);
                    }
                    View::SongDetails => {
                        model.open_song(index);
                    }
                    View::Artist | View::Albums => {}
                }
            }
            KeyCode::Up => model.move_selection_up(),
            KeyCode::Down => model.move_selection_down(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let mode = model.toggle_sort_mode();
                tracing::info!(?mode, "Sort mode changed");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                model.toggle_ranking_mode();
            }
            KeyCode::Char(' ') => {
                if model.toggle_rank_highlighted().is_none() && !model.rankings().is_ranking_mode() {
                    model.ui_state.set_status("Press r to enter ranking mode first");
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => model.clear_rankings(),
            KeyCode::Char('h') | KeyCode::Char('H') => model.toggle_help_popup(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::Event;

    use discography_rs::config::AppConfig;
    use discography_rs::model::{AppModel, Catalog, MemoryStore};

    use super::*;

    fn press(c: &mut AppController, code: KeyCode) {
        c.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn controller() -> AppController {
        let model = AppModel::new(Catalog::embedded().unwrap(), Box::new(MemoryStore::new()));
        AppController::new(model, &AppConfig::default())
    }

    #[test]
    fn arrows_and_digits_move_between_albums() {
        let mut c = controller();
        press(&mut c, KeyCode::Enter);
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.model().navigation().view(), View::Songs);

        press(&mut c, KeyCode::Right);
        assert_eq!(c.model().navigation().selected_album(), Some(1));
        press(&mut c, KeyCode::Char('5'));
        assert_eq!(c.model().navigation().selected_album(), Some(4));
        press(&mut c, KeyCode::Left);
        assert_eq!(c.model().navigation().selected_album(), Some(3));
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut c = controller();
        press(&mut c, KeyCode::Char('h'));
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.model().navigation().view(), View::Artist);
        press(&mut c, KeyCode::Esc);
        assert!(!c.model().ui_state.show_help_popup);
        press(&mut c, KeyCode::Char('q'));
        assert!(c.model().should_quit());
    }

    #[test]
    fn space_outside_ranking_mode_hints() {
        let mut c = controller();
        press(&mut c, KeyCode::Enter);
        press(&mut c, KeyCode::Char(' '));
        assert!(c.model().rankings().table().is_empty());
        assert!(c.model().ui_state.status_message.is_some());
    }
}
