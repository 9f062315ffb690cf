use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Diverging scale: value → red / yellow / green
// ---------------------------------------------------------------------------

/// Red-yellow-green stops (low → high).
const RDYLGN: [(u8, u8, u8); 5] = [
    (215, 48, 39),
    (252, 141, 89),
    (255, 255, 191),
    (145, 207, 96),
    (26, 152, 80),
];

/// Maps a numeric range onto the red-yellow-green diverging scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    pub min: f64,
    pub max: f64,
}

impl DivergingScale {
    /// Scale spanning the given values; `None` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(s) => Some(Self {
                min: s.min.min(v),
                max: s.max.max(v),
            }),
        })
    }

    /// Position of `value` in `[0, 1]`. A flat range maps to the midpoint.
    pub fn normalize(&self, value: f64) -> f32 {
        if self.max <= self.min {
            return 0.5;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        Self::color_at(self.normalize(value))
    }

    /// Colour at position `t ∈ [0, 1]`, interpolated in linear RGB.
    pub fn color_at(t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let segments = (RDYLGN.len() - 1) as f32;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(RDYLGN.len() - 2);
        let local = pos - i as f32;

        let stop = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
            Srgb::new(r, g, b).into_format::<f32>().into_linear()
        };
        let mixed = stop(RDYLGN[i]).mix(stop(RDYLGN[i + 1]), local);
        to_color32(Srgb::from_linear(mixed))
    }
}
