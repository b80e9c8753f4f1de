mod clock;
mod input;
mod loop_runner;
mod menu;
mod metrics;
pub mod rendering;
mod scene;

pub use clock::{FrameClock, TICK_WRAP};
pub use input::{InputAction, InputSnapshot};
pub use loop_runner::{run_app, AppError, LoopConfig, RuntimeContext};
pub use menu::{Button, ButtonKind, MenuModel};
pub use metrics::LoopMetricsSnapshot;
pub use scene::{Scene, SceneCommand, SceneKey};
