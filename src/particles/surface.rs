//! 2D drawing surface abstraction.

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity (0-1).
    pub a: f64,
}

impl Rgba {
    /// Create a color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different opacity.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The accent blue used by every particle canvas.
pub const ACCENT: Rgba = Rgba::new(111, 140, 255, 1.0);

/// Where particles draw themselves.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`.
pub trait Surface2d {
    /// Clear the rectangle `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

/// A surface that records draw calls instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Number of `clear` calls.
    pub clears: usize,
    /// Every circle filled since the last `clear`.
    pub circles: Vec<(f64, f64, f64, Rgba)>,
}

impl Surface2d for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.circles.push((x, y, radius, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(ACCENT.with_alpha(0.25).to_css(), "rgba(111, 140, 255, 0.25)");
    }
}
