// Page-level knobs for the particle field. Defaults reproduce the landing
// pages; a host can construct a tuned config and pass it to the start call.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug)]
pub struct FieldConfig {
    // Hard cap on the particle count regardless of viewport area
    pub max_particles: u32,
    // Viewport area (in px^2) per particle
    pub density_divisor: f64,
    // Distance under which a particle reacts to the pointer
    pub attraction_radius: f64,
    // Distance under which two particles are joined by a faded line
    pub connection_radius: f64,
    pub hue_min: f64,
    pub hue_span: f64,
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 80,
            density_divisor: 15_000.0,
            attraction_radius: 150.0,
            connection_radius: 120.0,
            hue_min: 190.0,
            hue_span: 40.0,
        }
    }
}
