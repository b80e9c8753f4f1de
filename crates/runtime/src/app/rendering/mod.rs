mod canvas;
mod renderer;
mod sprite;

pub use canvas::VirtualCanvas;
pub use renderer::Renderer;
pub use sprite::{Sprite, SpriteError};
