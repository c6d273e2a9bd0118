//! Color types and utilities

use std::fmt;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255) and a 0.0-1.0 alpha
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            1.0,
        )
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color at the given opacity. Mirrors CSS `rgba(color, alpha)` helpers.
    pub fn rgba(self, alpha: f32) -> Self {
        self.with_alpha(alpha)
    }

    /// Weighted mix of two colors, `weight` being the share of `first`.
    ///
    /// Follows the Sass `mix()` algorithm, so alpha differences bias the
    /// channel weights the same way stylesheet tooling does.
    pub fn mix(first: Color, second: Color, weight: f32) -> Color {
        let p = weight.clamp(0.0, 1.0);
        let w = 2.0 * p - 1.0;
        let a = first.a - second.a;
        let w1 = if (w * a - -1.0).abs() < f32::EPSILON {
            w
        } else {
            (w + a) / (1.0 + w * a)
        };
        let w1 = (w1 + 1.0) / 2.0;
        let w2 = 1.0 - w1;

        Color {
            r: first.r * w1 + second.r * w2,
            g: first.g * w1 + second.g * w2,
            b: first.b * w1 + second.b * w2,
            a: first.a * p + second.a * (1.0 - p),
        }
    }

    /// Mix toward black by `amount` (0.0 to 1.0)
    pub fn shade(self, amount: f32) -> Self {
        Color::mix(Color::BLACK, self, amount)
    }

    /// Mix toward white by `amount` (0.0 to 1.0)
    pub fn tint(self, amount: f32) -> Self {
        Color::mix(Color::WHITE, self, amount)
    }

    /// Reduce HSL lightness by `amount`
    pub fn darken(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0), self.a)
    }

    /// Increase HSL lightness by `amount`
    pub fn lighten(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0), self.a)
    }

    /// Convert to rounded u8 channels [r, g, b]
    pub fn to_rgb8(&self) -> [u8; 3] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Hue (degrees), saturation and lightness (0.0 to 1.0)
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta.abs() < f32::EPSILON {
            return (0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (h * 60.0, s, l)
    }

    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        if s.abs() < f32::EPSILON {
            return Self::new(l, l, l, a);
        }

        fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;

        Self::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    /// Serialize as a CSS color value.
    ///
    /// Opaque colors become `#rrggbb`; anything translucent becomes
    /// `rgba(r,g,b,a)`.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            format!("rgba({},{},{},{})", r, g, b, a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
