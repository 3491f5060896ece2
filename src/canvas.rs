use crate::assets::Image;

/// RGBA8 frame buffer view, `width * height * 4` bytes.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    w: i32,
    h: i32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], w: i32, h: i32) -> Self {
        debug_assert!(frame.len() >= (w * h * 4) as usize);
        Self { frame, w, h }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn rect_fill(&mut self, x: i32, y: i32, rw: i32, rh: i32, color: [u8; 4]) {
        for yy in y.max(0)..(y + rh).min(self.h) {
            for xx in x.max(0)..(x + rw).min(self.w) {
                let idx = ((yy * self.w + xx) * 4) as usize;
                self.frame[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }

    /// Draws `image` with its top-left at (x, y), alpha-blended and clipped.
    pub fn blit(&mut self, image: &Image, x: i32, y: i32) {
        let size = image.size();
        let (iw, ih) = (size.width as i32, size.height as i32);
        for sy in (-y).max(0)..ih.min(self.h - y) {
            for sx in (-x).max(0)..iw.min(self.w - x) {
                let src = image.pixel(sx as u32, sy as u32);
                let idx = (((y + sy) * self.w + (x + sx)) * 4) as usize;
                let dst = &mut self.frame[idx..idx + 4];
                match src[3] {
                    0 => {}
                    255 => dst.copy_from_slice(&src),
                    a => {
                        let a = a as u16;
                        for c in 0..3 {
                            dst[c] = ((src[c] as u16 * a + dst[c] as u16 * (255 - a)) / 255) as u8;
                        }
                        dst[3] = 255;
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return None;
        }
        let idx = ((y * self.w + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }
}
