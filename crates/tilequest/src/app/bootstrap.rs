use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use runtime::{resolve_app_paths, LoopConfig, Scene};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::config::load_game_config;
use super::gameplay::PlayScene;
use super::title::TitleScene;

/// Everything `main` needs to hand the runtime: the loop settings plus
/// the two scenes (title in slot A, play field in slot B).
pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene_a: Box<dyn Scene>,
    pub(crate) scene_b: Box<dyn Scene>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Tile Quest Startup ===");

    let assets_dir = match resolve_app_paths() {
        Ok(paths) => {
            info!(root = %paths.root.display(), "project_root_resolved");
            paths.assets_dir
        }
        Err(error) => {
            warn!(error = %error, "project_root_unresolved_using_cwd_assets");
            PathBuf::from("assets")
        }
    };

    let game_config = load_game_config(&assets_dir.join("config.json"));
    info!(
        window_width = game_config.window_width,
        window_height = game_config.window_height,
        pixel_scale = game_config.pixel_scale,
        frame_rate = game_config.frame_rate,
        "game_config"
    );

    let show_hitboxes = Rc::new(Cell::new(false));
    let title = TitleScene::new(Rc::clone(&show_hitboxes));
    let play = PlayScene::new(assets_dir, show_hitboxes);

    let config = LoopConfig {
        window_title: "Tile Quest".to_string(),
        window_width: game_config.window_width,
        window_height: game_config.window_height,
        logical_size: game_config.logical_size(),
        target_fps: game_config.frame_rate,
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        scene_a: Box::new(title),
        scene_b: Box::new(play),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
