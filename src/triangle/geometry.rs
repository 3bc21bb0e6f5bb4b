//! Band geometry of the apex-up triangle

use crate::facet::FACET_COUNT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Corners of one band, clockwise from the top-left.
///
/// For the apex band the top edge has zero width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Trapezoid {
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    pub fn top_width(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }

    pub fn bottom_width(&self) -> f64 {
        self.bottom_right.x - self.bottom_left.x
    }

    pub fn area(&self) -> f64 {
        (self.top_width() + self.bottom_width()) * 0.5 * (self.bottom_left.y - self.top_left.y)
    }
}

/// Non-positive or non-finite dimensions collapse to zero
pub(crate) fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Both dimensions collapse to zero when either one is unusable, so a
/// degenerate triangle always sits at the origin
pub(crate) fn sanitize_dimensions(width: f64, height: f64) -> (f64, f64) {
    match (sanitize_dimension(width), sanitize_dimension(height)) {
        (w, h) if w > 0.0 && h > 0.0 => (w, h),
        _ => (0.0, 0.0),
    }
}

/// Slice the triangle into `FACET_COUNT` equal-height bands, apex first
pub(crate) fn band_shapes(width: f64, height: f64) -> [Trapezoid; FACET_COUNT] {
    let (width, height) = sanitize_dimensions(width, height);
    let center_x = width / 2.0;
    let slice = height / FACET_COUNT as f64;

    let half_width_at = |y: f64| {
        if height > 0.0 {
            (y / height) * (width / 2.0)
        } else {
            0.0
        }
    };

    std::array::from_fn(|i| {
        let y1 = i as f64 * slice;
        // exact base, free of slice rounding
        let y2 = if i + 1 == FACET_COUNT {
            height
        } else {
            (i + 1) as f64 * slice
        };
        let top_half = half_width_at(y1);
        let bottom_half = half_width_at(y2);

        Trapezoid {
            top_left: Point {
                x: center_x - top_half,
                y: y1,
            },
            top_right: Point {
                x: center_x + top_half,
                y: y1,
            },
            bottom_right: Point {
                x: center_x + bottom_half,
                y: y2,
            },
            bottom_left: Point {
                x: center_x - bottom_half,
                y: y2,
            },
        }
    })
}
