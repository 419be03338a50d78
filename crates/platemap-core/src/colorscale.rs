//! Sequential colorscales for numeric well colors.
//!
//! When a plate is colored from numeric values rather than literal CSS colors,
//! the renderer maps each value onto a [`Colorscale`]. Each scale is a list of
//! stops at normalized positions in `[0, 1]`; sampling interpolates linearly
//! in sRGB between the two surrounding stops.
//!
//! # Example
//!
//! ```
//! # use platemap_core::colorscale::Colorscale;
//! let scale = Colorscale::Blues;
//! assert_eq!(scale.sample(0.0), "rgb(247, 251, 255)");
//! assert_eq!(scale.sample(1.0), "rgb(8, 48, 107)");
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

type Stop = (f64, [u8; 3]);

const BLUES: &[Stop] = &[
    (0.0, [247, 251, 255]),
    (0.125, [222, 235, 247]),
    (0.25, [198, 219, 239]),
    (0.375, [158, 202, 225]),
    (0.5, [107, 174, 214]),
    (0.625, [66, 146, 198]),
    (0.75, [33, 113, 181]),
    (0.875, [8, 81, 156]),
    (1.0, [8, 48, 107]),
];

const GREENS: &[Stop] = &[
    (0.0, [247, 252, 245]),
    (0.125, [229, 245, 224]),
    (0.25, [199, 233, 192]),
    (0.375, [161, 217, 155]),
    (0.5, [116, 196, 118]),
    (0.625, [65, 171, 93]),
    (0.75, [35, 139, 69]),
    (0.875, [0, 109, 44]),
    (1.0, [0, 68, 27]),
];

const GREYS: &[Stop] = &[
    (0.0, [255, 255, 255]),
    (0.125, [240, 240, 240]),
    (0.25, [217, 217, 217]),
    (0.375, [189, 189, 189]),
    (0.5, [150, 150, 150]),
    (0.625, [115, 115, 115]),
    (0.75, [82, 82, 82]),
    (0.875, [37, 37, 37]),
    (1.0, [0, 0, 0]),
];

const REDS: &[Stop] = &[
    (0.0, [255, 245, 240]),
    (0.125, [254, 224, 210]),
    (0.25, [252, 187, 161]),
    (0.375, [252, 146, 114]),
    (0.5, [251, 106, 74]),
    (0.625, [239, 59, 44]),
    (0.75, [203, 24, 29]),
    (0.875, [165, 15, 21]),
    (1.0, [103, 0, 13]),
];

const VIRIDIS: &[Stop] = &[
    (0.0, [68, 1, 84]),
    (0.111, [72, 40, 120]),
    (0.222, [62, 74, 137]),
    (0.333, [49, 104, 142]),
    (0.444, [38, 130, 142]),
    (0.555, [31, 158, 137]),
    (0.666, [53, 183, 121]),
    (0.777, [110, 206, 88]),
    (0.888, [181, 222, 43]),
    (1.0, [253, 231, 37]),
];

/// A named sequential colorscale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colorscale {
    /// Light to dark blue (default)
    #[default]
    Blues,
    /// Light to dark green
    Greens,
    /// White to black
    Greys,
    /// Light to dark red
    Reds,
    /// Perceptually uniform purple-green-yellow
    Viridis,
}

impl Colorscale {
    /// Returns the lowercase name of this scale.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blues => "blues",
            Self::Greens => "greens",
            Self::Greys => "greys",
            Self::Reds => "reds",
            Self::Viridis => "viridis",
        }
    }

    fn stops(self) -> &'static [Stop] {
        match self {
            Self::Blues => BLUES,
            Self::Greens => GREENS,
            Self::Greys => GREYS,
            Self::Reds => REDS,
            Self::Viridis => VIRIDIS,
        }
    }

    /// Returns the stops of this scale as `(offset, css color)` pairs,
    /// suitable for building a gradient.
    pub fn css_stops(self) -> Vec<(f64, String)> {
        self.stops()
            .iter()
            .map(|(offset, rgb)| (*offset, css_rgb(*rgb)))
            .collect()
    }

    /// Samples the scale at `t`, clamped to `[0, 1]`, returning a CSS
    /// `rgb(r, g, b)` string. `NaN` samples the low end.
    pub fn sample(self, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();

        let upper = stops
            .iter()
            .position(|(offset, _)| *offset >= t)
            .unwrap_or(stops.len() - 1);
        if upper == 0 {
            return css_rgb(stops[0].1);
        }

        let (lo_offset, lo) = stops[upper - 1];
        let (hi_offset, hi) = stops[upper];
        let span = hi_offset - lo_offset;
        let frac = if span > 0.0 { (t - lo_offset) / span } else { 0.0 };

        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let a = f64::from(lo[channel]);
            let b = f64::from(hi[channel]);
            *out = (a + (b - a) * frac).round() as u8;
        }
        css_rgb(rgb)
    }

    /// Maps `value` from `[min, max]` onto the scale. A degenerate range
    /// samples the middle of the scale.
    pub fn sample_range(self, value: f64, min: f64, max: f64) -> String {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            return self.sample(0.5);
        }
        self.sample((value - min) / span)
    }
}

fn css_rgb([r, g, b]: [u8; 3]) -> String {
    format!("rgb({r}, {g}, {b})")
}

impl fmt::Display for Colorscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colorscale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blues" => Ok(Self::Blues),
            "greens" => Ok(Self::Greens),
            "greys" | "grays" => Ok(Self::Greys),
            "reds" => Ok(Self::Reds),
            "viridis" => Ok(Self::Viridis),
            _ => Err(format!(
                "invalid colorscale `{s}`, valid values: blues, greens, greys, reds, viridis"
            )),
        }
    }
}
