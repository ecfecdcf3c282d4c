// color.rs - Color operations
//
// Channels are kept as f32 in [0, 255] while blending and quantized once
// when written to the raster.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r: r as f32, g: g as f32, b: b as f32 }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
        )
    }

    /// CSS-style hsl(): hue in degrees, saturation and lightness in percent
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self {
            r: (r + m) * 255.0,
            g: (g + m) * 255.0,
            b: (b + m) * 255.0,
        }
    }

    /// hsla(): the color plus its opacity pulled into [0, 1]
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> (Self, f32) {
        (Self::from_hsl(hue, saturation, lightness), alpha.clamp(0.0, 1.0))
    }

    /// Source-over composite of `self` at `alpha` onto `dst`
    #[inline]
    pub fn over(self, dst: Color, alpha: f32) -> Self {
        dst * (1.0 - alpha) + self * alpha
    }
}

impl std::ops::Add for Color {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self { r: self.r + o.r, g: self.g + o.g, b: self.b + o.b }
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self { r: self.r * s, g: self.g * s, b: self.b * s }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn primary_hues() {
        assert_eq!(Color::from_hsl(0.0, 100.0, 50.0).to_rgb(), (255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 100.0, 50.0).to_rgb(), (0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 100.0, 50.0).to_rgb(), (0, 0, 255));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(
            Color::from_hsl(360.0, 100.0, 50.0).to_rgb(),
            Color::from_hsl(0.0, 100.0, 50.0).to_rgb()
        );
        assert_eq!(
            Color::from_hsl(-120.0, 100.0, 50.0).to_rgb(),
            Color::from_hsl(240.0, 100.0, 50.0).to_rgb()
        );
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(Color::from_hsl(200.0, 80.0, 100.0).to_rgb(), (255, 255, 255));
        assert_eq!(Color::from_hsl(200.0, 80.0, 0.0).to_rgb(), (0, 0, 0));
        assert_eq!(Color::from_hsl(10.0, 0.0, 50.0).to_rgb(), (127, 127, 127));
    }

    #[test]
    fn hsla_clamps_opacity() {
        let (c, a) = Color::hsla(120.0, 100.0, 50.0, 1.7);
        assert_eq!((c.to_rgb(), a), ((0, 255, 0), 1.0));
        assert_eq!(Color::hsla(0.0, 0.0, 100.0, -0.2).1, 0.0);
    }

    #[test]
    fn over_composites_toward_source() {
        let dst = Color::from_rgb(0, 0, 0);
        let src = Color::from_rgb(200, 100, 50);
        assert_eq!(src.over(dst, 0.5).to_rgb(), (100, 50, 25));
        assert_eq!(src.over(dst, 1.0).to_rgb(), (200, 100, 50));
        assert_eq!(src.over(dst, 0.0), dst);
    }

    #[test]
    fn mix_by_ops() {
        let mixed = Color::from_rgb(200, 100, 0) * 0.5 + Color::from_rgb(0, 100, 200) * 0.5;
        assert_eq!(mixed.to_rgb(), (100, 100, 100));
    }
}
