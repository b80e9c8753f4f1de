use std::cell::Cell;
use std::rc::Rc;

use runtime::{
    Button, InputAction, InputSnapshot, MenuModel, Rect, Scene, SceneCommand, SceneKey,
    VirtualCanvas,
};
use tracing::info;

const BACKGROUND_COLOR: [u8; 4] = [24, 24, 40, 255];
const BUTTON_COLOR: [u8; 4] = [70, 70, 110, 255];
const BUTTON_SELECTED_COLOR: [u8; 4] = [140, 140, 210, 255];
const TOGGLE_ON_COLOR: [u8; 4] = [90, 190, 90, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleAction {
    Start,
    ToggleHitboxes,
    Quit,
}

/// First screen. A three-entry keyboard menu: start the game, toggle
/// the hitbox overlay for the play scene, or quit. Vertical or
/// horizontal navigation keys both move the cursor.
pub(crate) struct TitleScene {
    menu: MenuModel<TitleAction>,
    show_hitboxes: Rc<Cell<bool>>,
}

impl TitleScene {
    pub(crate) fn new(show_hitboxes: Rc<Cell<bool>>) -> Self {
        let initially_on = show_hitboxes.get();
        let menu = MenuModel::new(vec![
            Button::simple("start", menu_row(0), TitleAction::Start),
            Button::toggle(
                "hitboxes on",
                "hitboxes off",
                menu_row(1),
                TitleAction::ToggleHitboxes,
                initially_on,
            ),
            Button::simple("quit", menu_row(2), TitleAction::Quit),
        ]);
        Self {
            menu,
            show_hitboxes,
        }
    }
}

fn menu_row(index: u32) -> Rect {
    Rect::new(20.0, 30.0 + index as f32 * 20.0, 80.0, 14.0)
}

impl Scene for TitleScene {
    fn load(&mut self) {
        info!("title_ready");
    }

    fn update(&mut self, _ticks: u64, input: &InputSnapshot) -> SceneCommand {
        if input.was_pressed(InputAction::MoveDown) || input.was_pressed(InputAction::MoveRight) {
            self.menu.select_next();
        }
        if input.was_pressed(InputAction::MoveUp) || input.was_pressed(InputAction::MoveLeft) {
            self.menu.select_prev();
        }

        if !input.was_pressed(InputAction::Confirm) {
            return SceneCommand::None;
        }

        match self.menu.activate_selected() {
            Some(TitleAction::Start) => {
                info!("game_started");
                SceneCommand::SwitchTo(SceneKey::B)
            }
            Some(TitleAction::ToggleHitboxes) => {
                let on = self
                    .menu
                    .buttons()
                    .iter()
                    .find_map(|button| button.is_toggled_on())
                    .unwrap_or(false);
                self.show_hitboxes.set(on);
                info!(enabled = on, "hitbox_overlay_toggled");
                SceneCommand::None
            }
            Some(TitleAction::Quit) => SceneCommand::Quit,
            None => SceneCommand::None,
        }
    }

    fn draw(&mut self, canvas: &mut VirtualCanvas) {
        canvas.clear(BACKGROUND_COLOR);
        let selected = self.menu.selected_index();
        for (index, button) in self.menu.buttons().iter().enumerate() {
            let rect = button.rect();
            let fill = match button.is_toggled_on() {
                Some(true) => TOGGLE_ON_COLOR,
                _ if index == selected => BUTTON_SELECTED_COLOR,
                _ => BUTTON_COLOR,
            };
            canvas.fill_rect(
                rect.x as i32,
                rect.y as i32,
                rect.width as u32,
                rect.height as u32,
                fill,
            );
            if index == selected {
                canvas.outline_rect(
                    rect.x as i32 - 2,
                    rect.y as i32 - 2,
                    rect.width as u32 + 4,
                    rect.height as u32 + 4,
                    BUTTON_SELECTED_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> TitleScene {
        TitleScene::new(Rc::new(Cell::new(false)))
    }

    fn pressed(action: InputAction) -> InputSnapshot {
        InputSnapshot::empty().with_action_pressed(action)
    }

    #[test]
    fn confirm_on_start_switches_to_the_play_scene() {
        let mut scene = scene();
        let command = scene.update(0, &pressed(InputAction::Confirm));
        assert_eq!(command, SceneCommand::SwitchTo(SceneKey::B));
    }

    #[test]
    fn navigation_reaches_quit_in_either_direction() {
        let mut scene = scene();
        scene.update(0, &pressed(InputAction::MoveUp));
        let command = scene.update(1, &pressed(InputAction::Confirm));
        assert_eq!(command, SceneCommand::Quit);

        let mut scene = TitleScene::new(Rc::new(Cell::new(false)));
        scene.update(0, &pressed(InputAction::MoveDown));
        scene.update(1, &pressed(InputAction::MoveDown));
        let command = scene.update(2, &pressed(InputAction::Confirm));
        assert_eq!(command, SceneCommand::Quit);
    }

    #[test]
    fn hitbox_toggle_writes_through_to_the_shared_flag() {
        let shared = Rc::new(Cell::new(false));
        let mut scene = TitleScene::new(Rc::clone(&shared));
        scene.update(0, &pressed(InputAction::MoveDown));

        scene.update(1, &pressed(InputAction::Confirm));
        assert!(shared.get());

        scene.update(2, &pressed(InputAction::Confirm));
        assert!(!shared.get());
    }

    #[test]
    fn held_keys_do_not_repeat_navigation() {
        let mut scene = scene();
        let held = InputSnapshot::empty().with_action_down(InputAction::MoveDown, true);
        scene.update(0, &held);
        scene.update(1, &held);
        let command = scene.update(2, &pressed(InputAction::Confirm));
        assert_eq!(command, SceneCommand::SwitchTo(SceneKey::B));
    }
}
