use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use super::clock::FrameClock;
use super::input::{ActionStates, InputAction, InputSnapshot};
use super::metrics::MetricsAccumulator;
use super::rendering::Renderer;
use super::scene::{Scene, SceneCommand, SceneKey, SceneMachine};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Logical drawing size. `None` draws at the window's own size
    /// with no scaling pass.
    pub logical_size: Option<(u32, u32)>,
    pub target_fps: u32,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "runtime".to_string(),
            window_width: 900,
            window_height: 600,
            logical_size: None,
            target_fps: 30,
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Process-wide graphics lifecycle: event loop, window and renderer
/// are created once by [`RuntimeContext::init`] and released when the
/// context is dropped at process exit. Nothing initializes windowing
/// as an import side effect; the loop driver receives this context
/// explicitly.
pub struct RuntimeContext {
    config: LoopConfig,
    event_loop: EventLoop<()>,
    window: &'static Window,
    renderer: Renderer,
}

impl RuntimeContext {
    pub fn init(config: LoopConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
        // The window must outlive the renderer's surface; the loop
        // never tears it down before process exit.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(config.window_title.clone())
                .with_inner_size(LogicalSize::new(
                    config.window_width as f64,
                    config.window_height as f64,
                ))
                .build(&event_loop)
                .map_err(AppError::CreateWindow)?,
        ));
        let renderer =
            Renderer::new(window, config.logical_size).map_err(AppError::CreateRenderer)?;

        Ok(Self {
            config,
            event_loop,
            window,
            renderer,
        })
    }
}

/// Drives the cooperative single-threaded loop: sample input, update
/// the active scene, draw, present, then let the frame clock sleep
/// off the rest of the frame budget. One scene update per presented
/// frame; scene time advances in whole ticks.
pub fn run_app(
    context: RuntimeContext,
    scene_a: Box<dyn Scene>,
    scene_b: Box<dyn Scene>,
) -> Result<(), AppError> {
    let RuntimeContext {
        config,
        event_loop,
        window,
        mut renderer,
    } = context;

    let mut scenes = SceneMachine::new(scene_a, scene_b, SceneKey::A);
    scenes.load_active();

    let mut clock = FrameClock::new(config.target_fps);
    let metrics_log_interval = normalize_non_zero_duration(
        config.metrics_log_interval,
        Duration::from_secs(1),
    );
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut input_collector = InputCollector::default();
    let mut last_frame_instant = Instant::now();

    info!(
        target_fps = config.target_fps,
        window_width = config.window_width,
        window_height = config.window_height,
        logical_size = ?config.logical_size,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    if let Err(error) = renderer.resize(size.width, size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_keyboard_input(&event);
                    if input_collector.quit_requested {
                        info!(reason = "escape_key", "shutdown_requested");
                        window_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let frame_dt = now.saturating_duration_since(last_frame_instant);
                    last_frame_instant = now;

                    let input_snapshot = input_collector.snapshot_for_tick();
                    let command = scenes.update_active(clock.ticks(), &input_snapshot);
                    match command {
                        SceneCommand::SwitchTo(key) => {
                            if scenes.switch_to(key) {
                                info!(scene = ?scenes.active_scene(), "scene_switched");
                            }
                        }
                        SceneCommand::Quit => {
                            info!(reason = "scene_command", "shutdown_requested");
                            window_target.exit();
                        }
                        SceneCommand::None => {}
                    }

                    scenes.draw_active(renderer.canvas_mut());
                    if let Err(error) = renderer.present() {
                        warn!(error = %error, "renderer_present_failed");
                        window_target.exit();
                    }

                    metrics_accumulator.record_frame(frame_dt);
                    if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                        info!(
                            fps = snapshot.fps,
                            frame_time_ms = snapshot.frame_time_ms,
                            ticks = clock.ticks(),
                            scene = ?scenes.active_scene(),
                            "loop_metrics"
                        );
                    }

                    // The only suspension point in the iteration.
                    clock.tick();
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    held: ActionStates,
    pressed_edges: ActionStates,
}

impl InputCollector {
    fn handle_keyboard_input(&mut self, key_event: &winit::event::KeyEvent) {
        let Some(action) = action_for_physical_key(key_event.physical_key) else {
            return;
        };
        let is_pressed = key_event.state == ElementState::Pressed;
        self.set_action_state(action, is_pressed);
    }

    fn set_action_state(&mut self, action: InputAction, is_pressed: bool) {
        if is_pressed && !self.held.is_down(action) {
            self.pressed_edges.set(action, true);
        }
        self.held.set(action, is_pressed);
        if action == InputAction::Quit && is_pressed {
            self.quit_requested = true;
        }
    }

    /// Edges are consumed by the snapshot; held state persists until
    /// the key is released.
    fn snapshot_for_tick(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot::new(self.quit_requested, self.held, self.pressed_edges);
        self.pressed_edges.clear();
        snapshot
    }
}

fn action_for_physical_key(key: PhysicalKey) -> Option<InputAction> {
    match key {
        PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
            Some(InputAction::MoveUp)
        }
        PhysicalKey::Code(KeyCode::KeyS) | PhysicalKey::Code(KeyCode::ArrowDown) => {
            Some(InputAction::MoveDown)
        }
        PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
            Some(InputAction::MoveLeft)
        }
        PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
            Some(InputAction::MoveRight)
        }
        PhysicalKey::Code(KeyCode::Enter) | PhysicalKey::Code(KeyCode::Space) => {
            Some(InputAction::Confirm)
        }
        PhysicalKey::Code(KeyCode::Escape) => Some(InputAction::Quit),
        _ => None,
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrow_keys_map_to_move_actions() {
        assert_eq!(
            action_for_physical_key(PhysicalKey::Code(KeyCode::KeyW)),
            Some(InputAction::MoveUp)
        );
        assert_eq!(
            action_for_physical_key(PhysicalKey::Code(KeyCode::ArrowLeft)),
            Some(InputAction::MoveLeft)
        );
        assert_eq!(
            action_for_physical_key(PhysicalKey::Code(KeyCode::KeyF)),
            None
        );
    }

    #[test]
    fn confirm_press_is_edge_triggered_for_single_tick() {
        let mut input = InputCollector::default();
        input.set_action_state(InputAction::Confirm, true);

        let first = input.snapshot_for_tick();
        let second = input.snapshot_for_tick();

        assert!(first.was_pressed(InputAction::Confirm));
        assert!(!second.was_pressed(InputAction::Confirm));
        assert!(second.is_down(InputAction::Confirm));
    }

    #[test]
    fn held_key_does_not_spam_press_edges() {
        let mut input = InputCollector::default();

        input.set_action_state(InputAction::MoveDown, true);
        let first = input.snapshot_for_tick();

        input.set_action_state(InputAction::MoveDown, true);
        let second = input.snapshot_for_tick();

        input.set_action_state(InputAction::MoveDown, false);
        input.set_action_state(InputAction::MoveDown, true);
        let third = input.snapshot_for_tick();

        assert!(first.was_pressed(InputAction::MoveDown));
        assert!(!second.was_pressed(InputAction::MoveDown));
        assert!(third.was_pressed(InputAction::MoveDown));
    }

    #[test]
    fn key_release_clears_held_state() {
        let mut input = InputCollector::default();
        input.set_action_state(InputAction::MoveRight, true);
        input.set_action_state(InputAction::MoveRight, false);

        let snapshot = input.snapshot_for_tick();
        assert!(!snapshot.is_down(InputAction::MoveRight));
    }

    #[test]
    fn escape_marks_quit_requested() {
        let mut input = InputCollector::default();
        input.set_action_state(InputAction::Quit, true);

        assert!(input.quit_requested);
        assert!(input.snapshot_for_tick().quit_requested());
    }

    #[test]
    fn zero_metrics_interval_falls_back() {
        assert_eq!(
            normalize_non_zero_duration(Duration::ZERO, Duration::from_secs(1)),
            Duration::from_secs(1)
        );
        assert_eq!(
            normalize_non_zero_duration(Duration::from_millis(250), Duration::from_secs(1)),
            Duration::from_millis(250)
        );
    }
}
