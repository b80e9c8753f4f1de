mod map;
mod player;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use runtime::{
    InputSnapshot, Scene, SceneCommand, Sprite, TileCatalog, TileGrid, TileWorld, Vec2,
    VirtualCanvas,
};
use tracing::{info, warn};

use map::{load_tile_grid, parse_tile_grid};
use player::Player;

const CELL_SIZE: Vec2 = Vec2 { x: 16.0, y: 4.0 };
const PLAYER_SPAWN: Vec2 = Vec2 { x: 32.0, y: 8.0 };
const SKY_COLOR: [u8; 4] = [135, 206, 235, 255];
const GRASS_COLOR: [u8; 4] = [58, 137, 35, 255];
const PLAYER_COLOR: [u8; 4] = [220, 180, 140, 255];

const TILE_ID_SOLID: runtime::TileId = 0;
const TILE_ID_GRASS: runtime::TileId = 1;

/// Map used when assets/map.txt is missing or malformed. A walkable
/// field fenced by solid border cells.
const FALLBACK_MAP: &str = "\
000000000000000
011111111111110
011111111111110
011111111111110
011111111111110
000000000000000
";

/// The play field: a static tile world and the player moving through
/// it. Loading is deferred to the first activation so the title menu
/// comes up without touching the asset directory.
pub(crate) struct PlayScene {
    assets_dir: PathBuf,
    show_hitboxes: Rc<Cell<bool>>,
    world: Option<TileWorld>,
    player: Option<Player>,
    camera_scroll: Vec2,
}

impl PlayScene {
    pub(crate) fn new(assets_dir: PathBuf, show_hitboxes: Rc<Cell<bool>>) -> Self {
        Self {
            assets_dir,
            show_hitboxes,
            world: None,
            player: None,
            camera_scroll: Vec2::ZERO,
        }
    }

    fn load_grid(&self) -> TileGrid {
        let map_path = self.assets_dir.join("map.txt");
        match load_tile_grid(&map_path) {
            Ok(grid) => grid,
            Err(err) => {
                warn!(path = %map_path.display(), error = %err, "map_load_failed_using_fallback");
                parse_tile_grid(FALLBACK_MAP).expect("fallback map is well formed")
            }
        }
    }

    fn build_catalog(&self) -> TileCatalog {
        let grass = Sprite::load_or_placeholder(
            &self.assets_dir.join("grass.png"),
            CELL_SIZE.x as u32,
            CELL_SIZE.y as u32,
            GRASS_COLOR,
        );
        let mut catalog = TileCatalog::new();
        catalog.insert_solid(TILE_ID_SOLID);
        catalog.insert_sprite(TILE_ID_GRASS, grass);
        catalog
    }

    fn build_player(&self) -> Player {
        let idle = Sprite::load_or_placeholder(&self.assets_dir.join("player.png"), 7, 8, PLAYER_COLOR);
        let step = Sprite::load_or_placeholder(
            &self.assets_dir.join("player_step.png"),
            7,
            8,
            PLAYER_COLOR,
        );
        let walk_cycle = runtime::AnimationSequence::new(
            vec![idle.clone(), step],
            vec![4, 4],
            None,
        )
        .expect("walk cycle frames and durations agree");
        Player::new(PLAYER_SPAWN, idle, walk_cycle)
    }
}

impl Scene for PlayScene {
    fn load(&mut self) {
        let grid = self.load_grid();
        let world = match TileWorld::new(grid, self.build_catalog(), CELL_SIZE) {
            Ok(world) => world,
            Err(err) => {
                warn!(error = %err, "world_build_failed_using_fallback");
                let grid = parse_tile_grid(FALLBACK_MAP).expect("fallback map is well formed");
                TileWorld::new(grid, self.build_catalog(), CELL_SIZE)
                    .expect("fallback world covers every tile id")
            }
        };
        info!(
            width = world.grid().width(),
            height = world.grid().height(),
            solids = world.collision_set().len(),
            "world_loaded"
        );
        self.player = Some(self.build_player());
        self.world = Some(world);
    }

    fn update(&mut self, _ticks: u64, input: &InputSnapshot) -> SceneCommand {
        let (Some(world), Some(player)) = (self.world.as_ref(), self.player.as_mut()) else {
            return SceneCommand::None;
        };
        player.update(input, world.collision_set());
        SceneCommand::None
    }

    fn draw(&mut self, canvas: &mut VirtualCanvas) {
        canvas.clear(SKY_COLOR);
        let (Some(world), Some(player)) = (self.world.as_ref(), self.player.as_ref()) else {
            return;
        };
        world.draw(canvas, self.camera_scroll);
        player.draw(canvas, self.camera_scroll, self.show_hitboxes.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::InputAction;

    fn scene_with_missing_assets() -> PlayScene {
        PlayScene::new(
            PathBuf::from("no-such-assets-dir"),
            Rc::new(Cell::new(false)),
        )
    }

    #[test]
    fn load_falls_back_to_builtin_map() {
        let mut scene = scene_with_missing_assets();
        scene.load();
        let world = scene.world.as_ref().expect("world loaded");
        assert_eq!(world.grid().width(), 15);
        assert_eq!(world.grid().height(), 6);
        assert!(!world.collision_set().is_empty());
    }

    #[test]
    fn player_spawns_inside_the_walkable_area() {
        let mut scene = scene_with_missing_assets();
        scene.load();
        let world = scene.world.as_ref().expect("world loaded");
        let player = scene.player.as_ref().expect("player loaded");
        assert!(world
            .collision_set()
            .iter()
            .all(|solid| !player.actor.rect.overlaps(solid)));
    }

    #[test]
    fn held_direction_moves_the_player() {
        let mut scene = scene_with_missing_assets();
        scene.load();
        let before = scene.player.as_ref().expect("player").actor.rect.x;
        let input = InputSnapshot::empty().with_action_down(InputAction::MoveRight, true);
        assert_eq!(scene.update(0, &input), SceneCommand::None);
        let after = scene.player.as_ref().expect("player").actor.rect.x;
        assert_eq!(after - before, player::PLAYER_SPEED_PX_PER_TICK);
    }

    #[test]
    fn border_walls_contain_the_player() {
        let mut scene = scene_with_missing_assets();
        scene.load();
        let input = InputSnapshot::empty().with_action_down(InputAction::MoveUp, true);
        for tick in 0..50 {
            scene.update(tick, &input);
        }
        let player = scene.player.as_ref().expect("player");
        // Row 0 is solid, so the hitbox can never rise above row 1.
        assert_eq!(player.actor.rect.top(), CELL_SIZE.y);
    }
}
