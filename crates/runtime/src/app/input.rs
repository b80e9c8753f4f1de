#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Quit,
}

const ACTION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub(crate) fn clear(&mut self) {
        self.down = [false; ACTION_COUNT];
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Confirm => 4,
            InputAction::Quit => 5,
        }
    }
}

/// The per-tick view of input the runtime hands to scenes. Held state
/// answers "is this key currently down"; pressed state is an edge that
/// fires for exactly one tick per physical key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    held: ActionStates,
    pressed: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, held: ActionStates, pressed: ActionStates) -> Self {
        Self {
            quit_requested,
            held,
            pressed,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.held.is_down(action)
    }

    pub fn was_pressed(&self, action: InputAction) -> bool {
        self.pressed.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.held.set(action, is_down);
        self
    }

    pub fn with_action_pressed(mut self, action: InputAction) -> Self {
        self.pressed.set(action, true);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_reports_nothing() {
        let snapshot = InputSnapshot::empty();
        assert!(!snapshot.quit_requested());
        assert!(!snapshot.is_down(InputAction::MoveLeft));
        assert!(!snapshot.was_pressed(InputAction::Confirm));
    }

    #[test]
    fn held_and_pressed_states_are_independent() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::MoveRight, true)
            .with_action_pressed(InputAction::Confirm);

        assert!(snapshot.is_down(InputAction::MoveRight));
        assert!(!snapshot.was_pressed(InputAction::MoveRight));
        assert!(snapshot.was_pressed(InputAction::Confirm));
        assert!(!snapshot.is_down(InputAction::Confirm));
    }

    #[test]
    fn action_states_clear_resets_everything() {
        let mut states = ActionStates::default();
        states.set(InputAction::MoveUp, true);
        states.set(InputAction::Quit, true);
        states.clear();
        assert!(!states.is_down(InputAction::MoveUp));
        assert!(!states.is_down(InputAction::Quit));
    }
}
