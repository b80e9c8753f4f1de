use super::input::InputSnapshot;
use super::rendering::VirtualCanvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKey {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    SwitchTo(SceneKey),
    Quit,
}

/// One screen of the application (title menu, play field). The loop
/// driver owns two scenes and forwards each iteration to the active
/// one: update with this tick's input, then draw onto the logical
/// canvas.
pub trait Scene {
    /// Called once, the first time the scene becomes active.
    fn load(&mut self);

    /// One tick of game logic. `ticks` is the loop's wrapping tick
    /// counter, the only clock scenes see.
    fn update(&mut self, ticks: u64, input: &InputSnapshot) -> SceneCommand;

    fn draw(&mut self, canvas: &mut VirtualCanvas);
}

struct SceneSlot {
    scene: Box<dyn Scene>,
    loaded: bool,
}

impl SceneSlot {
    fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            loaded: false,
        }
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.scene.load();
            self.loaded = true;
        }
    }
}

pub(crate) struct SceneMachine {
    scene_a: SceneSlot,
    scene_b: SceneSlot,
    active: SceneKey,
}

impl SceneMachine {
    pub(crate) fn new(scene_a: Box<dyn Scene>, scene_b: Box<dyn Scene>, active: SceneKey) -> Self {
        Self {
            scene_a: SceneSlot::new(scene_a),
            scene_b: SceneSlot::new(scene_b),
            active,
        }
    }

    pub(crate) fn active_scene(&self) -> SceneKey {
        self.active
    }

    pub(crate) fn load_active(&mut self) {
        self.active_slot_mut().ensure_loaded();
    }

    pub(crate) fn update_active(&mut self, ticks: u64, input: &InputSnapshot) -> SceneCommand {
        self.active_slot_mut().scene.update(ticks, input)
    }

    pub(crate) fn draw_active(&mut self, canvas: &mut VirtualCanvas) {
        self.active_slot_mut().scene.draw(canvas);
    }

    /// Returns true when the active scene actually changed.
    pub(crate) fn switch_to(&mut self, key: SceneKey) -> bool {
        if key == self.active {
            return false;
        }
        self.active = key;
        self.load_active();
        true
    }

    fn active_slot_mut(&mut self) -> &mut SceneSlot {
        match self.active {
            SceneKey::A => &mut self.scene_a,
            SceneKey::B => &mut self.scene_b,
        }
    }
}
