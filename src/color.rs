use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generators
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
            to_color32(hsl.into_color())
        })
        .collect()
}

/// Anchor points of matplotlib's viridis colour map.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// `n` colours sampled evenly along viridis, dark to light.
pub fn viridis(n: usize) -> Vec<Color32> {
    let anchors: Vec<LinSrgb> = VIRIDIS
        .iter()
        .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
        .collect();
    let segments = (anchors.len() - 1) as f32;

    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let pos = t * segments;
            let seg = (pos.floor() as usize).min(anchors.len() - 2);
            let mixed = anchors[seg].mix(anchors[seg + 1], pos - seg as f32);
            to_color32(Srgb::from_linear(mixed))
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: journal → Color32
// ---------------------------------------------------------------------------

/// Maps journal names to distinct colours for the scatter plot and legend.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the dataset's distinct journals.
    pub fn new(journals: &BTreeSet<String>) -> Self {
        let palette = generate_palette(journals.len());
        let mapping = journals.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a journal. Unknown or missing journals are grey.
    pub fn color_for(&self, journal: Option<&str>) -> Color32 {
        journal
            .and_then(|j| self.mapping.get(j))
            .copied()
            .unwrap_or(self.default_color)
    }
}
