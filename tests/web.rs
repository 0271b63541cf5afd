//! Test suite for the wasm-compiled particle field.

#![cfg(target_arch = "wasm32")]

use landing_particles::config::FieldConfig;
use landing_particles::{density_capped_count, ParticleField};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn field_spawns_the_density_capped_count() {
    let field = ParticleField::new(1600, 900);
    assert_eq!(field.particle_count(), 80);
}

#[wasm_bindgen_test]
fn cap_formula_matches_the_spawned_count() {
    let config = FieldConfig::new();
    let field = ParticleField::with_config(300, 200, &config);
    assert_eq!(field.particle_count(), density_capped_count(300, 200, &config));
    assert_eq!(field.particle_count(), 4);
}

#[wasm_bindgen_test]
fn updates_and_resize_leave_the_population_fixed() {
    let mut field = ParticleField::new(640, 480);
    let spawned = field.particle_count();
    field.pointer_moved(320.0, 240.0);
    for _ in 0..240 {
        field.update();
    }
    field.resize(1280, 960);
    for _ in 0..240 {
        field.update();
    }
    assert_eq!(field.particle_count(), spawned);
}

#[wasm_bindgen_test]
fn zero_area_viewport_is_a_valid_degenerate_field() {
    let mut field = ParticleField::new(0, 0);
    assert_eq!(field.particle_count(), 0);
    field.update();
}
