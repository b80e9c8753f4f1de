use super::sprite::Sprite;

/// Logical drawing surface with a scaled hand-off to the physical one.
///
/// Game code draws in logical pixels; [`VirtualCanvas::present_into`]
/// copies the whole logical surface onto the physical frame at (0,0)
/// once per frame. When the logical size differs from the physical
/// size the copy is a nearest-neighbour scale with independent X and Y
/// factors, so non-uniform stretching is expected and correct. When
/// the sizes match (or no logical size was configured) presenting is a
/// plain copy with no scaling pass.
#[derive(Debug)]
pub struct VirtualCanvas {
    physical_width: u32,
    physical_height: u32,
    logical_width: u32,
    logical_height: u32,
    logical_override: Option<(u32, u32)>,
    frame: Vec<u8>,
}

impl VirtualCanvas {
    pub fn new(physical_width: u32, physical_height: u32, logical: Option<(u32, u32)>) -> Self {
        let physical_width = physical_width.max(1);
        let physical_height = physical_height.max(1);
        let logical_override =
            logical.map(|(width, height)| (width.max(1), height.max(1)));
        let (logical_width, logical_height) =
            logical_override.unwrap_or((physical_width, physical_height));
        Self {
            physical_width,
            physical_height,
            logical_width,
            logical_height,
            logical_override,
            frame: vec![0; logical_width as usize * logical_height as usize * 4],
        }
    }

    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_width, self.logical_height)
    }

    pub fn physical_size(&self) -> (u32, u32) {
        (self.physical_width, self.physical_height)
    }

    pub fn is_scaled(&self) -> bool {
        (self.logical_width, self.logical_height) != (self.physical_width, self.physical_height)
    }

    /// Window resizes change only the physical side. A canvas built
    /// without a logical override keeps tracking the physical size.
    pub fn set_physical_size(&mut self, width: u32, height: u32) {
        self.physical_width = width.max(1);
        self.physical_height = height.max(1);
        if self.logical_override.is_none() {
            self.logical_width = self.physical_width;
            self.logical_height = self.physical_height;
            self.frame =
                vec![0; self.logical_width as usize * self.logical_height as usize * 4];
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + width as i32).min(self.logical_width as i32);
        let bottom = (y + height as i32).min(self.logical_height as i32);
        if left >= right || top >= bottom {
            return;
        }

        let row_stride = self.logical_width as usize * 4;
        for out_y in top..bottom {
            let row_offset = out_y as usize * row_stride;
            for out_x in left..right {
                let offset = row_offset + out_x as usize * 4;
                self.frame[offset..offset + 4].copy_from_slice(&color);
            }
        }
    }

    /// One-pixel border, for hitbox and selection overlays.
    pub fn outline_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        if width == 0 || height == 0 {
            return;
        }
        self.fill_rect(x, y, width, 1, color);
        self.fill_rect(x, y + height as i32 - 1, width, 1, color);
        self.fill_rect(x, y, 1, height, color);
        self.fill_rect(x + width as i32 - 1, y, 1, height, color);
    }

    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        self.blit_impl(sprite, x, y, false);
    }

    /// Horizontal mirror, for sprites facing away from their art.
    pub fn blit_flipped(&mut self, sprite: &Sprite, x: i32, y: i32) {
        self.blit_impl(sprite, x, y, true);
    }

    fn blit_impl(&mut self, sprite: &Sprite, x: i32, y: i32, flip_x: bool) {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + sprite.width() as i32).min(self.logical_width as i32);
        let bottom = (y + sprite.height() as i32).min(self.logical_height as i32);
        if left >= right || top >= bottom {
            return;
        }

        let rgba = sprite.rgba();
        let sprite_stride = sprite.width() as usize * 4;
        let frame_stride = self.logical_width as usize * 4;
        for out_y in top..bottom {
            let src_y = (out_y - y) as usize;
            let src_row = src_y * sprite_stride;
            let dst_row = out_y as usize * frame_stride;
            for out_x in left..right {
                let mut src_x = (out_x - x) as usize;
                if flip_x {
                    src_x = sprite.width() as usize - 1 - src_x;
                }
                let src_offset = src_row + src_x * 4;
                let alpha = rgba[src_offset + 3];
                if alpha == 0 {
                    continue;
                }
                let dst_offset = dst_row + out_x as usize * 4;
                self.frame[dst_offset..dst_offset + 4]
                    .copy_from_slice(&rgba[src_offset..src_offset + 4]);
            }
        }
    }

    /// Copies the whole logical surface onto `target` (the physical
    /// frame) at origin. No partial updates: every physical pixel is
    /// written on every call.
    pub fn present_into(&self, target: &mut [u8]) {
        let expected = self.physical_width as usize * self.physical_height as usize * 4;
        if target.len() < expected {
            return;
        }

        if !self.is_scaled() {
            target[..expected].copy_from_slice(&self.frame);
            return;
        }

        let src_stride = self.logical_width as usize * 4;
        let dst_stride = self.physical_width as usize * 4;
        for out_y in 0..self.physical_height as usize {
            let src_y = out_y * self.logical_height as usize / self.physical_height as usize;
            let src_row = src_y * src_stride;
            let dst_row = out_y * dst_stride;
            for out_x in 0..self.physical_width as usize {
                let src_x = out_x * self.logical_width as usize / self.physical_width as usize;
                let src_offset = src_row + src_x * 4;
                let dst_offset = dst_row + out_x * 4;
                target[dst_offset..dst_offset + 4]
                    .copy_from_slice(&self.frame[src_offset..src_offset + 4]);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.logical_width as usize + x as usize) * 4;
        [
            self.frame[offset],
            self.frame[offset + 1],
            self.frame[offset + 2],
            self.frame[offset + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_at(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * width as usize + x as usize) * 4;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    #[test]
    fn matching_sizes_present_as_plain_copy() {
        let mut canvas = VirtualCanvas::new(2, 2, None);
        assert!(!canvas.is_scaled());
        canvas.clear([9, 8, 7, 255]);

        let mut target = vec![0u8; 2 * 2 * 4];
        canvas.present_into(&mut target);
        for chunk in target.chunks_exact(4) {
            assert_eq!(chunk, &[9, 8, 7, 255]);
        }
    }

    #[test]
    fn explicit_logical_size_equal_to_physical_is_unscaled() {
        let canvas = VirtualCanvas::new(300, 300, Some((300, 300)));
        assert!(!canvas.is_scaled());
    }

    #[test]
    fn present_scales_every_physical_pixel_from_logical_source() {
        // Logical (150,150) onto physical (300,300): each logical
        // pixel covers a 2x2 physical block.
        let mut canvas = VirtualCanvas::new(300, 300, Some((150, 150)));
        assert!(canvas.is_scaled());
        canvas.clear([0, 0, 0, 255]);
        canvas.fill_rect(0, 0, 1, 1, [255, 0, 0, 255]);

        let mut target = vec![0u8; 300 * 300 * 4];
        canvas.present_into(&mut target);

        assert_eq!(pixel_at(&target, 300, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&target, 300, 1, 1), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&target, 300, 2, 0), [0, 0, 0, 255]);
        assert_eq!(pixel_at(&target, 300, 299, 299), [0, 0, 0, 255]);
    }

    #[test]
    fn non_uniform_scaling_uses_independent_axis_factors() {
        let mut canvas = VirtualCanvas::new(4, 2, Some((2, 2)));
        canvas.clear([0, 0, 0, 255]);
        canvas.fill_rect(1, 0, 1, 1, [0, 255, 0, 255]);

        let mut target = vec![0u8; 4 * 2 * 4];
        canvas.present_into(&mut target);

        // X doubles, Y is one-to-one.
        assert_eq!(pixel_at(&target, 4, 2, 0), [0, 255, 0, 255]);
        assert_eq!(pixel_at(&target, 4, 3, 0), [0, 255, 0, 255]);
        assert_eq!(pixel_at(&target, 4, 1, 0), [0, 0, 0, 255]);
        assert_eq!(pixel_at(&target, 4, 2, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn blit_clips_at_canvas_edges() {
        let mut canvas = VirtualCanvas::new(4, 4, None);
        let sprite = Sprite::solid(3, 3, [1, 2, 3, 255]);
        canvas.blit(&sprite, -1, -1);
        canvas.blit(&sprite, 3, 3);

        assert_eq!(canvas.pixel(0, 0), [1, 2, 3, 255]);
        assert_eq!(canvas.pixel(1, 1), [1, 2, 3, 255]);
        assert_eq!(canvas.pixel(3, 3), [1, 2, 3, 255]);
        assert_eq!(canvas.pixel(2, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn blit_skips_transparent_texels() {
        let mut canvas = VirtualCanvas::new(2, 1, None);
        canvas.clear([5, 5, 5, 255]);
        let sprite =
            Sprite::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 0, 0]).expect("sprite");
        canvas.blit(&sprite, 0, 0);

        assert_eq!(canvas.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(1, 0), [5, 5, 5, 255]);
    }

    #[test]
    fn flipped_blit_mirrors_horizontally() {
        let mut canvas = VirtualCanvas::new(2, 1, None);
        let sprite =
            Sprite::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).expect("sprite");
        canvas.blit_flipped(&sprite, 0, 0);

        assert_eq!(canvas.pixel(0, 0), [0, 0, 255, 255]);
        assert_eq!(canvas.pixel(1, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn resize_without_override_tracks_physical_size() {
        let mut canvas = VirtualCanvas::new(4, 4, None);
        canvas.set_physical_size(8, 6);
        assert_eq!(canvas.logical_size(), (8, 6));
        assert!(!canvas.is_scaled());
    }

    #[test]
    fn resize_with_override_keeps_logical_size() {
        let mut canvas = VirtualCanvas::new(300, 300, Some((150, 150)));
        canvas.set_physical_size(600, 450);
        assert_eq!(canvas.logical_size(), (150, 150));
        assert!(canvas.is_scaled());
    }

    #[test]
    fn outline_rect_draws_only_the_border() {
        let mut canvas = VirtualCanvas::new(4, 4, None);
        canvas.outline_rect(0, 0, 4, 4, [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(3, 2), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(1, 1), [0, 0, 0, 0]);
    }
}
