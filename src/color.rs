// Simple color struct, created from an unsigned 32 representing RRGGBB,
// plus helpers for the css color strings the 2d context consumes

#[derive(Copy, Clone)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // rgba() string with a per-call alpha, for stroke styles
    pub fn css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

// hsla() string for particle fills
pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        hue, saturation, lightness, alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_connection_stroke_color() {
        let color = Color::from_u32(0x4dc9f6);
        assert_eq!(color.r, 77);
        assert_eq!(color.g, 201);
        assert_eq!(color.b, 246);
    }

    #[test]
    fn formats_rgba_with_alpha() {
        let color = Color::from_u32(0x4dc9f6);
        assert_eq!(color.css(0.075), "rgba(77, 201, 246, 0.075)");
    }

    #[test]
    fn formats_hsla_fill() {
        assert_eq!(hsla(210.0, 80.0, 65.0, 0.5), "hsla(210, 80%, 65%, 0.5)");
    }
}
