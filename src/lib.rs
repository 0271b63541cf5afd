mod utils;

pub mod app;
pub mod color;
pub mod config;
pub mod particle;
pub mod renderer;

use config::FieldConfig;
use particle::Particle;
use rand::Rng;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// The animated background behind a landing page: a fixed set of particles
// drifting across the viewport, pulled and brightened near the pointer,
// wrapping at the edges. The count is decided once from the viewport area.
#[wasm_bindgen]
pub struct ParticleField {
    width: u32,
    height: u32,
    pointer: Vector2<f64>,
    config: FieldConfig,
    particles: Vec<Particle>,
}

#[wasm_bindgen]
impl ParticleField {
    pub fn new(width: u32, height: u32) -> ParticleField {
        ParticleField::with_config(width, height, &FieldConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: &FieldConfig) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            pointer: [0.0, 0.0],
            config: *config,
            particles: Vec::new(),
        };
        field.spawn_particles();
        field
    }

    pub fn update(&mut self) {
        let width = self.width as f64;
        let height = self.height as f64;
        let pointer = self.pointer;
        let attraction_radius = self.config.attraction_radius;
        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];

            let to_pointer = vecmath::vec2_sub(pointer, particle.pos);
            let dist = vecmath::vec2_len(to_pointer);
            if dist < attraction_radius {
                particle.pos[0] -= to_pointer[0] * Particle::POINTER_PULL;
                particle.pos[1] -= to_pointer[1] * Particle::POINTER_PULL;
                particle.opacity =
                    (particle.opacity + Particle::BRIGHTEN_STEP).min(Particle::MAX_OPACITY);
            } else {
                particle.opacity =
                    (particle.opacity - Particle::FADE_STEP).max(Particle::MIN_OPACITY);
            }

            // Teleport wrap, not modulo: a particle leaving one edge reappears
            // exactly on the opposite one
            if particle.pos[0] < 0.0 {
                particle.pos[0] = width;
            }
            if particle.pos[0] > width {
                particle.pos[0] = 0.0;
            }
            if particle.pos[1] < 0.0 {
                particle.pos[1] = height;
            }
            if particle.pos[1] > height {
                particle.pos[1] = 0.0;
            }
        }
    }

    // Resize only moves the wrap bounds; existing particles re-wrap into view
    // the next time they cross an edge
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl ParticleField {
    fn spawn_particles(&mut self) {
        let count = density_capped_count(self.width, self.height, &self.config);
        self.particles.reserve(count as usize);
        let mut rng = rand::thread_rng();
        let width = self.width as f64;
        let height = self.height as f64;
        for _ in 0..count {
            let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
            let vel = [
                (rng.gen::<f64>() - 0.5) * 0.5,
                (rng.gen::<f64>() - 0.5) * 0.5,
            ];
            let size = rng.gen::<f64>() * 2.0 + 0.5;
            let opacity = rng.gen::<f64>() * 0.5 + Particle::MIN_OPACITY;
            let hue = rng.gen::<f64>() * self.config.hue_span + self.config.hue_min;
            self.particles.push(Particle::new(pos, vel, size, opacity, hue));
        }
    }

    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn config(&self) -> &FieldConfig {
        &self.config
    }
}

// Density-capped count: scales with viewport area, never exceeds the cap.
// A zero-area viewport yields an empty field rather than an error.
pub fn density_capped_count(width: u32, height: u32, config: &FieldConfig) -> u32 {
    let by_area = (width as f64 * height as f64 / config.density_divisor) as u32;
    config.max_particles.min(by_area)
}
