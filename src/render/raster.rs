// raster.rs - RGBA8 drawing surface
//
// Row-major, 4 bytes per pixel, always opaque. Every primitive clips to
// the surface and alpha-blends over what is already there.

use super::color::Color;

pub struct Raster {
    px: Vec<u8>,
    w: u32,
    h: u32,
}

impl Raster {
    pub fn new(w: u32, h: u32) -> Self {
        let mut raster = Self { px: Vec::new(), w, h };
        raster.resize(w, h);
        raster
    }

    /// Reallocate for a new size; contents start black
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.px = vec![0; w as usize * h as usize * 4];
        self.clear();
    }

    pub fn clear(&mut self) {
        for chunk in self.px.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn pixels(&self) -> &[u8] { &self.px }
    pub fn ptr(&self) -> *const u8 { self.px.as_ptr() }
    pub fn len(&self) -> usize { self.px.len() }
    pub fn is_empty(&self) -> bool { self.px.is_empty() }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.w || y >= self.h { return None; }
        let idx = (y as usize * self.w as usize + x as usize) * 4;
        Some([self.px[idx], self.px[idx + 1], self.px[idx + 2], self.px[idx + 3]])
    }

    /// Darken every pixel toward black by `alpha`
    pub fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        for chunk in self.px.chunks_exact_mut(4) {
            chunk[0] = (chunk[0] as f32 * keep) as u8;
            chunk[1] = (chunk[1] as f32 * keep) as u8;
            chunk[2] = (chunk[2] as f32 * keep) as u8;
        }
    }

    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, c: Color, alpha: f32) {
        if (x as u32) < self.w && (y as u32) < self.h {
            let idx = (y as usize * self.w as usize + x as usize) * 4;
            let dst = Color::from_rgb(self.px[idx], self.px[idx + 1], self.px[idx + 2]);
            let (r, g, b) = c.over(dst, alpha.clamp(0.0, 1.0)).to_rgb();
            self.px[idx] = r;
            self.px[idx + 1] = g;
            self.px[idx + 2] = b;
        }
    }

    /// One pixel wide line between two points
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), c: Color, alpha: f32) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;

        let mut last = None;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let p = ((from.0 + dx * t).floor() as i32, (from.1 + dy * t).floor() as i32);
            // don't double-blend a pixel the previous step already hit
            if last == Some(p) { continue; }
            self.blend(p.0, p.1, c, alpha);
            last = Some(p);
        }
    }

    /// Ring of the given stroke width centered on `radius`
    pub fn stroke_ring(&mut self, center: (f32, f32), radius: f32, width: f32, c: Color, alpha: f32) {
        let half = width * 0.5;
        let outer = radius + half;
        let Some((x0, y0, x1, y1)) = self.clip(center.0 - outer, center.1 - outer, center.0 + outer, center.1 + outer) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.0;
                let dy = y as f32 + 0.5 - center.1;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - radius).abs() <= half {
                    self.blend(x, y, c, alpha);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, c: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(center.0 - radius, center.1 - radius, center.0 + radius, center.1 + radius) else {
            return;
        };

        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.0;
                let dy = y as f32 + 0.5 - center.1;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, c, 1.0);
                }
            }
        }
    }

    /// Fill a convex polygon given in either winding order
    pub fn fill_convex(&mut self, points: &[(f32, f32)], c: Color) {
        if points.len() < 3 { return; }

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let Some((x0, y0, x1, y1)) = self.clip(min_x, min_y, max_x, max_y) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                if contains_convex(points, (x as f32 + 0.5, y as f32 + 0.5)) {
                    self.blend(x, y, c, 1.0);
                }
            }
        }
    }

    // Pixel bounds of a float box, clipped to the surface
    fn clip(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(i32, i32, i32, i32)> {
        if self.w == 0 || self.h == 0 { return None; }

        let x0 = (min_x.floor() as i32).max(0);
        let y0 = (min_y.floor() as i32).max(0);
        let x1 = (max_x.ceil() as i32).min(self.w as i32 - 1);
        let y1 = (max_y.ceil() as i32).min(self.h as i32 - 1);
        if x0 > x1 || y0 > y1 { return None; }
        Some((x0, y0, x1, y1))
    }
}

fn contains_convex(points: &[(f32, f32)], p: (f32, f32)) -> bool {
    let mut sign = 0.0f32;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
        if cross == 0.0 { continue; }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color { r: 255.0, g: 255.0, b: 255.0 };

    #[test]
    fn starts_opaque_black() {
        let raster = Raster::new(4, 3);
        assert_eq!(raster.len(), 4 * 3 * 4);
        assert_eq!(raster.pixel(3, 2), Some([0, 0, 0, 255]));
        assert_eq!(raster.pixel(4, 0), None);
    }

    #[test]
    fn fade_darkens_toward_black() {
        let mut raster = Raster::new(1, 1);
        raster.blend(0, 0, WHITE, 1.0);
        raster.fade(0.5);
        assert_eq!(raster.pixel(0, 0), Some([127, 127, 127, 255]));

        for _ in 0..200 {
            raster.fade(0.05);
        }
        assert_eq!(raster.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn blend_outside_is_ignored() {
        let mut raster = Raster::new(2, 2);
        raster.blend(-1, 0, WHITE, 1.0);
        raster.blend(0, 5, WHITE, 1.0);
        assert!(raster.pixels().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn line_reaches_both_ends() {
        let mut raster = Raster::new(10, 10);
        raster.stroke_line((1.5, 1.5), (8.5, 6.5), WHITE, 1.0);
        assert_eq!(raster.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(8, 6), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(8, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn line_alpha_blends() {
        let mut raster = Raster::new(4, 1);
        raster.stroke_line((0.0, 0.5), (3.0, 0.5), WHITE, 0.5);
        assert_eq!(raster.pixel(2, 0), Some([127, 127, 127, 255]));
    }

    #[test]
    fn ring_leaves_center_empty() {
        let mut raster = Raster::new(40, 40);
        raster.stroke_ring((20.0, 20.0), 10.0, 2.0, WHITE, 1.0);
        assert_eq!(raster.pixel(20, 20), Some([0, 0, 0, 255]));
        assert_eq!(raster.pixel(29, 19), Some([255, 255, 255, 255]));
    }

    #[test]
    fn circle_fills_center() {
        let mut raster = Raster::new(20, 20);
        raster.fill_circle((10.0, 10.0), 3.0, WHITE);
        assert_eq!(raster.pixel(10, 10), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(15, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn convex_fill_accepts_both_windings() {
        let square = [(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)];
        let mut cw = Raster::new(8, 8);
        let mut ccw = Raster::new(8, 8);
        cw.fill_convex(&square, WHITE);
        let mut reversed = square;
        reversed.reverse();
        ccw.fill_convex(&reversed, WHITE);

        assert_eq!(cw.pixels(), ccw.pixels());
        assert_eq!(cw.pixel(4, 4), Some([255, 255, 255, 255]));
        assert_eq!(cw.pixel(7, 7), Some([0, 0, 0, 255]));
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let mut raster = Raster::new(0, 0);
        raster.fill_circle((0.0, 0.0), 5.0, WHITE);
        raster.stroke_line((0.0, 0.0), (5.0, 5.0), WHITE, 1.0);
        raster.fade(0.1);
        assert!(raster.is_empty());
    }
}
