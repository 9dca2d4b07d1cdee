//! Differential renderer: gradient background plus a pseudo-3D cube for every
//! cell that was born since the previous generation.

mod color;
mod screen;

pub use color::{Rgb, interpolate_color, row_color};
pub use screen::MacroquadSurface;

use crate::config;
use crate::domain::Grid;

/// Drawing primitives the renderer needs from the display
pub trait Surface {
    /// Solid axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);

    /// Closed polygon outline of the given thickness
    fn draw_polygon(&mut self, points: &[(i32, i32)], thickness: f32, color: Rgb);

    /// One-pixel horizontal line from x0 to x1 on pixel row y
    fn draw_hline(&mut self, y: i32, x0: i32, x1: i32, color: Rgb);
}

/// Surface that only counts draw calls. Used headless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountingSurface {
    pub rects: usize,
    pub polygons: usize,
    pub lines: usize,
}

impl Surface for CountingSurface {
    fn fill_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _color: Rgb) {
        self.rects += 1;
    }

    fn draw_polygon(&mut self, _points: &[(i32, i32)], _thickness: f32, _color: Rgb) {
        self.polygons += 1;
    }

    fn draw_hline(&mut self, _y: i32, _x0: i32, _x1: i32, _color: Rgb) {
        self.lines += 1;
    }
}

/// Canvas geometry and palette
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub background_top: Rgb,
    pub background_bottom: Rgb,
    pub live_top: Rgb,
    pub live_bottom: Rgb,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            width: config::WIDTH,
            height: config::HEIGHT,
            cell_size: config::CELL_SIZE,
            background_top: config::BACKGROUND_TOP,
            background_bottom: config::BACKGROUND_BOTTOM,
            live_top: config::LIVE_TOP,
            live_bottom: config::LIVE_BOTTOM,
        }
    }
}

impl Renderer {
    /// Paint one frame and return the number of cube glyphs drawn.
    ///
    /// Only cells alive in `current` and dead in `previous` get a glyph.
    /// Cells that died are cleared by the background repaint.
    pub fn draw_frame<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        current: &Grid,
        previous: &Grid,
        scale: f32,
    ) -> usize {
        self.draw_background(surface);

        let rows = current.rows();
        let size = self.glyph_size(scale);

        let mut glyphs = 0;
        for (row, col) in current.births_since(previous) {
            let color = row_color(row, rows, self.live_top, self.live_bottom);
            let x = (col * self.cell_size) as i32;
            let y = (row * self.cell_size) as i32;
            draw_cube(surface, x, y, size, color);
            glyphs += 1;
        }
        glyphs
    }

    /// Vertical gradient, one horizontal line per pixel row
    pub fn draw_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        let width = self.width as i32;
        for y in 0..self.height {
            let t = y as f32 / self.height as f32;
            let color = interpolate_color(self.background_top, self.background_bottom, t);
            surface.draw_hline(y as i32, 0, width, color);
        }
    }

    /// Edge length of a glyph at the given pulsation scale
    pub fn glyph_size(&self, scale: f32) -> i32 {
        let cell = self.cell_size as f32;
        (cell + cell * scale) as i32
    }
}

/// Six faces: solid front, then back, left, right, top and bottom outlines
fn draw_cube<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, size: i32, color: Rgb) {
    let s = size;
    let h = size / 2;
    let thickness = config::FACE_THICKNESS;
    let shade = interpolate_color(color, Rgb::BLACK, 0.2);

    surface.fill_rect(x, y, s, s, color);

    surface.draw_polygon(
        &[(x, y), (x + s, y), (x + s, y + s), (x, y + s)],
        thickness,
        interpolate_color(color, Rgb::BLACK, 0.5),
    );

    surface.draw_polygon(
        &[(x, y), (x + h, y - h), (x + h, y + h), (x, y + s)],
        thickness,
        shade,
    );

    surface.draw_polygon(
        &[(x + s, y), (x + h, y - h), (x + h, y + h), (x + s, y + s)],
        thickness,
        shade,
    );

    surface.draw_polygon(
        &[(x, y), (x + s, y), (x + h, y - h)],
        thickness,
        interpolate_color(color, Rgb::WHITE, 0.5),
    );

    surface.draw_polygon(
        &[(x, y + s), (x + s, y + s), (x + h, y + s + h)],
        thickness,
        interpolate_color(color, Rgb::BLACK, 0.5),
    );
}
