/// An opaque RGB colour. Derived colours are computed per frame, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-channel linear blend `c1 + (c2 - c1) * t`, truncated toward zero
pub fn interpolate_color(c1: Rgb, c2: Rgb, t: f32) -> Rgb {
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb::new(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
}

/// Colour of a live cell on `row` out of `rows`.
///
/// The blend weight is an 8-bit alpha: row 0 gets `bottom`, and the colour
/// moves toward `top` as the row index grows.
pub fn row_color(row: usize, rows: usize, top: Rgb, bottom: Rgb) -> Rgb {
    let alpha = ((255.0 * (row as f64 / rows as f64)) as u32).min(255);
    let blend = |t: u8, b: u8| ((t as u32 * alpha + b as u32 * (255 - alpha)) / 255) as u8;
    Rgb::new(blend(top.r, bottom.r), blend(top.g, bottom.g), blend(top.b, bottom.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Rgb = Rgb::new(60, 173, 100);
    const B: Rgb = Rgb::new(52, 152, 219);

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate_color(A, B, 0.0), A);
        assert_eq!(interpolate_color(A, B, 1.0), B);
    }

    #[test]
    fn test_interpolate_same_color_is_identity() {
        for t in [0.0, 0.1, 0.33, 0.5, 0.99, 1.0] {
            assert_eq!(interpolate_color(A, A, t), A);
        }
    }

    #[test]
    fn test_interpolate_truncates_toward_zero() {
        // 60 + (0 - 60) * 0.2 = 48, 173 * 0.8 = 138.4, 100 * 0.8 = 80
        assert_eq!(interpolate_color(A, Rgb::BLACK, 0.2), Rgb::new(48, 138, 80));
        // 60 + 195 * 0.5 = 157.5, 173 + 82 * 0.5 = 214, 100 + 155 * 0.5 = 177.5
        assert_eq!(interpolate_color(A, Rgb::WHITE, 0.5), Rgb::new(157, 214, 177));
    }

    #[test]
    fn test_row_color_extremes() {
        assert_eq!(row_color(0, 80, A, B), B);
        assert_eq!(row_color(80, 80, A, B), A);
        // Clamped past the last row
        assert_eq!(row_color(200, 80, A, B), A);
    }

    #[test]
    fn test_row_color_midpoint() {
        // alpha = 127: (60*127 + 52*128) / 255 = 55, (173*127 + 152*128) / 255 = 162,
        // (100*127 + 219*128) / 255 = 159
        assert_eq!(row_color(40, 80, A, B), Rgb::new(55, 162, 159));
    }
}
