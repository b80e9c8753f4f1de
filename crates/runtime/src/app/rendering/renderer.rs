use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::canvas::VirtualCanvas;

/// Owns the GPU-backed physical frame (`pixels`) and the logical
/// drawing canvas. Scenes draw on the canvas; `present` performs the
/// once-per-frame scaled copy onto the physical frame and pushes it to
/// the window.
pub struct Renderer {
    window: &'static Window,
    pixels: Pixels<'static>,
    canvas: VirtualCanvas,
}

impl Renderer {
    pub fn new(window: &'static Window, logical_size: Option<(u32, u32)>) -> Result<Self, Error> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let pixels = Self::build_pixels(window, width, height)?;
        Ok(Self {
            window,
            pixels,
            canvas: VirtualCanvas::new(width, height, logical_size),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(self.window, width, height)?;
        self.canvas.set_physical_size(width, height);
        Ok(())
    }

    fn build_pixels(
        window: &'static Window,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn canvas_mut(&mut self) -> &mut VirtualCanvas {
        &mut self.canvas
    }

    pub fn present(&mut self) -> Result<(), Error> {
        self.canvas.present_into(self.pixels.frame_mut());
        self.pixels.render()
    }
}
