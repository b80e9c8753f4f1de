use crate::world::Rect;

/// Variant behavior behind [`Button::activate`]. A simple button only
/// reports its action; a toggle also flips its on/off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Simple,
    Toggle { on: bool },
}

/// A menu entry. Buttons carry no drawing behavior of their own; the
/// owning scene renders them from `rect`, `label` and toggle state.
/// `A` is a caller-chosen action token returned on activation, so the
/// scene decides what an activation means.
#[derive(Debug, Clone)]
pub struct Button<A: Copy> {
    label: &'static str,
    off_label: &'static str,
    rect: Rect,
    kind: ButtonKind,
    action: A,
}

impl<A: Copy> Button<A> {
    pub fn simple(label: &'static str, rect: Rect, action: A) -> Self {
        Self {
            label,
            off_label: label,
            rect,
            kind: ButtonKind::Simple,
            action,
        }
    }

    pub fn toggle(
        on_label: &'static str,
        off_label: &'static str,
        rect: Rect,
        action: A,
        initially_on: bool,
    ) -> Self {
        Self {
            label: on_label,
            off_label,
            rect,
            kind: ButtonKind::Toggle { on: initially_on },
            action,
        }
    }

    /// Explicit activation entry point. Toggles flip before the action
    /// token is returned, so the caller observes the new state.
    pub fn activate(&mut self) -> A {
        if let ButtonKind::Toggle { on } = &mut self.kind {
            *on = !*on;
        }
        self.action
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            ButtonKind::Simple => self.label,
            ButtonKind::Toggle { on: true } => self.label,
            ButtonKind::Toggle { on: false } => self.off_label,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_toggled_on(&self) -> Option<bool> {
        match self.kind {
            ButtonKind::Simple => None,
            ButtonKind::Toggle { on } => Some(on),
        }
    }
}

/// Keyboard-navigable button list with a wrapping cursor. Pure state
/// machine: the owning scene feeds it navigation edges and draws the
/// buttons itself.
#[derive(Debug, Clone)]
pub struct MenuModel<A: Copy> {
    buttons: Vec<Button<A>>,
    cursor: usize,
}

impl<A: Copy> MenuModel<A> {
    pub fn new(buttons: Vec<Button<A>>) -> Self {
        Self { buttons, cursor: 0 }
    }

    pub fn buttons(&self) -> &[Button<A>] {
        &self.buttons
    }

    pub fn selected_index(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.buttons.len();
    }

    pub fn select_prev(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(self.buttons.len() - 1);
    }

    pub fn activate_selected(&mut self) -> Option<A> {
        self.buttons.get_mut(self.cursor).map(Button::activate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Start,
        Toggle,
        Quit,
    }

    fn row(index: f32) -> Rect {
        Rect::new(10.0, 10.0 + index * 14.0, 60.0, 12.0)
    }

    fn menu() -> MenuModel<Action> {
        MenuModel::new(vec![
            Button::simple("start", row(0.0), Action::Start),
            Button::toggle("hitboxes on", "hitboxes off", row(1.0), Action::Toggle, false),
            Button::simple("quit", row(2.0), Action::Quit),
        ])
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut menu = menu();
        menu.select_prev();
        assert_eq!(menu.selected_index(), 2);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn activation_returns_the_selected_action() {
        let mut menu = menu();
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.activate_selected(), Some(Action::Quit));
    }

    #[test]
    fn toggle_flips_state_and_label_on_each_activation() {
        let mut menu = menu();
        menu.select_next();
        assert_eq!(menu.buttons()[1].label(), "hitboxes off");

        assert_eq!(menu.activate_selected(), Some(Action::Toggle));
        assert_eq!(menu.buttons()[1].is_toggled_on(), Some(true));
        assert_eq!(menu.buttons()[1].label(), "hitboxes on");

        menu.activate_selected();
        assert_eq!(menu.buttons()[1].is_toggled_on(), Some(false));
    }

    #[test]
    fn simple_buttons_report_no_toggle_state() {
        let menu = menu();
        assert_eq!(menu.buttons()[0].is_toggled_on(), None);
    }

    #[test]
    fn empty_menu_is_inert() {
        let mut menu: MenuModel<Action> = MenuModel::new(Vec::new());
        menu.select_next();
        menu.select_prev();
        assert_eq!(menu.activate_selected(), None);
    }
}
