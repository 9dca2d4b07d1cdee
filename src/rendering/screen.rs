use macroquad::prelude::*;

use super::{Rgb, Surface};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

/// Surface backed by macroquad's immediate-mode shape drawing.
/// Presenting the frame is left to `next_frame().await` in the main loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        draw_rectangle(x as f32, y as f32, width as f32, height as f32, color.into());
    }

    fn draw_polygon(&mut self, points: &[(i32, i32)], thickness: f32, color: Rgb) {
        let color: Color = color.into();
        // Close the outline by pairing the last point with the first
        let closing = points.iter().skip(1).chain(points.first());
        for (&(x0, y0), &(x1, y1)) in points.iter().zip(closing) {
            draw_line(x0 as f32, y0 as f32, x1 as f32, y1 as f32, thickness, color);
        }
    }

    fn draw_hline(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        // Centre the 1px line on the pixel row
        let y = y as f32 + 0.5;
        draw_line(x0 as f32, y, x1 as f32, y, 1.0, color.into());
    }
}
