// Renderer struct that handles the 2d context calls for the particle field:
// clearing the surface, filling particle circles, and stroking the faded
// connection lines between nearby particles.

use crate::color::{self, Color};
use crate::particle::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    pub const FILL_SATURATION: f64 = 80.0;
    pub const FILL_LIGHTNESS: f64 = 65.0;
    pub const CONNECTION_COLOR: Color = Color::from_u32(0x4dc9f6);
    pub const CONNECTION_ALPHA: f64 = 0.15;
    pub const CONNECTION_WIDTH: f64 = 0.5;

    // On creation grabs a reference to the 2d context from the canvas on the DOM
    pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Renderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas did not provide a 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Renderer { context })
    }

    pub fn clear_screen(&self, width: u32, height: u32) {
        self.context
            .clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    pub fn render_particles(&self, particles: &[Particle]) {
        for particle in particles {
            self.context.begin_path();
            let _ = self.context.arc(
                particle.pos[0],
                particle.pos[1],
                particle.size,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            let fill = color::hsla(
                particle.hue,
                Self::FILL_SATURATION,
                Self::FILL_LIGHTNESS,
                particle.opacity,
            );
            #[allow(deprecated)]
            self.context.set_fill_style(&JsValue::from_str(&fill));
            self.context.fill();
        }
    }

    // O(n^2) pass over all pairs every frame, acceptable because the field
    // caps the particle count
    pub fn render_connections(&self, particles: &[Particle], radius: f64) {
        self.context.set_line_width(Self::CONNECTION_WIDTH);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let between = vecmath::vec2_sub(particles[i].pos, particles[j].pos);
                let dist = vecmath::vec2_len(between);
                if dist < radius {
                    let stroke = Self::CONNECTION_COLOR.css(connection_alpha(dist, radius));
                    self.context.begin_path();
                    self.context.move_to(particles[i].pos[0], particles[i].pos[1]);
                    self.context.line_to(particles[j].pos[0], particles[j].pos[1]);
                    #[allow(deprecated)]
                    self.context.set_stroke_style(&JsValue::from_str(&stroke));
                    self.context.stroke();
                }
            }
        }
    }
}

// Stroke alpha fades linearly, reaching zero at the connection radius
pub fn connection_alpha(dist: f64, radius: f64) -> f64 {
    (1.0 - dist / radius) * Renderer::CONNECTION_ALPHA
}
