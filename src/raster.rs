// src/raster.rs
use image::{Rgba, RgbaImage};
use ndarray::{Array1, Array2, Zip};

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let nx = x.len();
    let ny = y.len();

    let mut x_grid = Array2::zeros((ny, nx));
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    let mut y_grid = Array2::zeros((ny, nx));
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

/// Integer pixel positions of a `size` x `size` canvas, indexed `[[y, x]]`
pub fn pixel_grid(size: u32) -> (Array2<f64>, Array2<f64>) {
    let axis: Array1<f64> = (0..size).map(f64::from).collect();
    meshgrid(&axis, &axis)
}

/// Pixels covered by a thick segment from `a` to `b` with flat ends.
///
/// A pixel is inside when it projects onto the segment and lies no further
/// than `half_width` from it. A zero-length segment degrades to a disc.
pub fn segment_mask(
    x: &Array2<f64>,
    y: &Array2<f64>,
    a: (f64, f64),
    b: (f64, f64),
    half_width: f64,
) -> Array2<bool> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let limit = half_width * half_width;

    let mut mask = Array2::from_elem(x.dim(), false);
    Zip::from(&mut mask)
        .and(x)
        .and(y)
        .for_each(|m, &px, &py| {
            let t = if len2 > 0.0 {
                ((px - a.0) * dx + (py - a.1) * dy) / len2
            } else {
                0.0
            };
            if !(0.0..=1.0).contains(&t) {
                return;
            }
            let ex = px - (a.0 + t * dx);
            let ey = py - (a.1 + t * dy);
            *m = ex * ex + ey * ey <= limit;
        });
    mask
}

/// Pixels inside the closed disc of `radius` around `center`
pub fn disc_mask(x: &Array2<f64>, y: &Array2<f64>, center: (f64, f64), radius: f64) -> Array2<bool> {
    let limit = radius * radius;
    let mut mask = Array2::from_elem(x.dim(), false);
    Zip::from(&mut mask)
        .and(x)
        .and(y)
        .for_each(|m, &px, &py| {
            let (ex, ey) = (px - center.0, py - center.1);
            *m = ex * ex + ey * ey <= limit;
        });
    mask
}

/// Paint every masked pixel of `img` with `color`
pub fn fill_mask(img: &mut RgbaImage, mask: &Array2<bool>, color: Rgba<u8>) {
    for ((y, x), &covered) in mask.indexed_iter() {
        if covered {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
