// src/logo.rs
use crate::raster::{disc_mask, fill_mask, pixel_grid, segment_mask};
use image::{Rgba, RgbaImage};

/// Side length the reference geometry is drawn at
pub const REFERENCE_SIZE: f64 = 64.0;

/// Sawtooth vertices at the reference size
pub const REFERENCE_POINTS: [(u32, u32); 5] = [(8, 40), (22, 26), (36, 40), (50, 26), (58, 32)];

/// Stroke width at the reference size
pub const REFERENCE_STROKE: f64 = 8.0;

/// `#0a0a0a`
pub const BACKGROUND: Rgba<u8> = Rgba([10, 10, 10, 255]);

/// `#FF2A7B`
pub const ACCENT: Rgba<u8> = Rgba([255, 42, 123, 255]);

pub fn scale_for(size: u32) -> f64 {
    f64::from(size) / REFERENCE_SIZE
}

/// Logo geometry resolved for one canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub points: [(u32, u32); 5],
    pub stroke_width: u32,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let scale = scale_for(size);

        // Coordinates truncate, matching the pixel grid of the original artwork
        let points = REFERENCE_POINTS
            .map(|(x, y)| ((f64::from(x) * scale) as u32, (f64::from(y) * scale) as u32));

        // Never let the stroke vanish on tiny canvases
        let stroke_width = ((REFERENCE_STROKE * scale).round() as u32).max(1);

        Layout {
            points,
            stroke_width,
        }
    }

    /// Radius of the discs standing in for round caps and joins
    pub fn cap_radius(&self) -> u32 {
        self.stroke_width / 2
    }
}

/// Draw the sawtooth logo onto a fresh `size` x `size` canvas.
///
/// Segments are stroked with flat ends, then a filled disc is stamped on
/// every vertex so the joins and both ends come out rounded.
pub fn render(size: u32) -> RgbaImage {
    let layout = Layout::for_size(size);
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);
    let (x_grid, y_grid) = pixel_grid(size);

    let as_f64 = |(x, y): (u32, u32)| (f64::from(x), f64::from(y));
    let half_width = f64::from(layout.stroke_width) / 2.0;

    for pair in layout.points.windows(2) {
        let mask = segment_mask(&x_grid, &y_grid, as_f64(pair[0]), as_f64(pair[1]), half_width);
        fill_mask(&mut img, &mask, ACCENT);
    }

    let radius = f64::from(layout.cap_radius());
    for &point in &layout.points {
        let mask = disc_mask(&x_grid, &y_grid, as_f64(point), radius);
        fill_mask(&mut img, &mask, ACCENT);
    }

    img
}
