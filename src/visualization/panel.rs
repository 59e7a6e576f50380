//! Plot panels drawn with gizmos
//!
//! A [`Panel`] maps data coordinates into a screen rectangle (world units of
//! the default 2D camera, origin at the window center) and draws its frame
//! and line series every frame.

use bevy::prelude::*;

use crate::simulation::trajectory::Series;

/// Space left around each panel, in pixels
const MARGIN: f32 = 36.0;

/// Room kept above each panel for its title
const TITLE_SPACE: f32 = 24.0;

/// Line colors, cycled by series index
pub const PALETTE: [Color; 4] = [
    Color::srgb(0.35, 0.65, 1.0),
    Color::srgb(1.0, 0.55, 0.2),
    Color::srgb(0.4, 0.85, 0.4),
    Color::srgb(0.9, 0.3, 0.5),
];

pub const FRAME_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
pub const AXIS_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);

#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub rect: Rect,        // screen area in world units
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Panel {
    /// Panel inside `cell` scaled to fit every series, with 5% headroom on y
    pub fn fit(cell: Rect, series: &[&Series]) -> Self {
        let bounds = series
            .iter()
            .filter_map(|s| s.bounds())
            .reduce(|(a0, a1, a2, a3), (b0, b1, b2, b3)| (a0.min(b0), a1.max(b1), a2.min(b2), a3.max(b3)));
        let (x0, x1, y0, y1) = bounds.unwrap_or((0.0, 1.0, 0.0, 1.0));

        let pad = 0.05 * (y1 - y0);
        let rect = Rect::new(
            cell.min.x + MARGIN,
            cell.min.y + MARGIN,
            cell.max.x - MARGIN,
            cell.max.y - MARGIN - TITLE_SPACE,
        );
        Self {
            rect,
            x_range: widen(x0, x1),
            y_range: widen(y0 - pad, y1 + pad),
        }
    }

    pub fn to_world(&self, x: f64, y: f64) -> Vec2 {
        let u = ((x - self.x_range.0) / (self.x_range.1 - self.x_range.0)) as f32;
        let v = ((y - self.y_range.0) / (self.y_range.1 - self.y_range.0)) as f32;
        Vec2::new(
            self.rect.min.x + u * self.rect.width(),
            self.rect.min.y + v * self.rect.height(),
        )
    }

    pub fn draw_frame(&self, gizmos: &mut Gizmos) {
        let (lo, hi) = (self.rect.min, self.rect.max);
        gizmos.linestrip_2d(
            [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y), lo],
            FRAME_COLOR,
        );
        // y = 0 when it falls inside the panel
        if self.y_range.0 < 0.0 && self.y_range.1 > 0.0 {
            gizmos.line_2d(
                self.to_world(self.x_range.0, 0.0),
                self.to_world(self.x_range.1, 0.0),
                AXIS_COLOR,
            );
        }
    }

    pub fn draw_series(&self, gizmos: &mut Gizmos, series: &Series, color: Color) {
        gizmos.linestrip_2d(series.points().map(|(x, y)| self.to_world(x, y)), color);
    }
}

// a flat series still needs a non-empty range to map into
fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo > f64::EPSILON {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// World-space rectangle of grid cell `(row, col)`, rows counted from the top
pub fn grid_cell(window: &Window, rows: usize, cols: usize, row: usize, col: usize) -> Rect {
    let (w, h) = (window.width(), window.height());
    let (cw, ch) = (w / cols as f32, h / rows as f32);
    let left = -w / 2.0 + col as f32 * cw;
    let top = h / 2.0 - row as f32 * ch;
    Rect::new(left, top - ch, left + cw, top)
}
