//! Scene rendering: starfield, explosion particles, asteroids, and the ship.
//!
//! The simulation works directly in pixel coordinates, so no camera is
//! involved. Draw order gives the layering: stars behind everything, then
//! particles, asteroids, and the ship on top.

use macroquad::prelude::*;

use nebula_core::constants::{COCKPIT_COLOR, DEBRIS_COLOR, SPACE_COLOR, STAR_COLOR};
use nebula_core::entities::{Asteroid, Particle, Player, Star};
use nebula_core::state::World;

use crate::theme;

/// Vertices in the craggy asteroid outline.
const ASTEROID_VERTICES: usize = 8;
/// Crag radius multiplier range: [CRAG_MIN, CRAG_MIN + CRAG_SPAN).
const CRAG_MIN: f64 = 0.8;
const CRAG_SPAN: f64 = 0.4;
/// Asteroid outline thickness.
const OUTLINE_THICKNESS: f32 = 2.0;

/// Draw the whole scene for one frame.
pub fn draw_world(world: &World) {
    clear_background(theme::color(SPACE_COLOR));
    for star in &world.stars {
        draw_star(star);
    }
    for particle in &world.particles {
        draw_particle(particle);
    }
    for asteroid in &world.asteroids {
        draw_asteroid(asteroid);
    }
    draw_ship(&world.player);
}

fn draw_star(star: &Star) {
    draw_circle(
        star.pos.x as f32,
        star.pos.y as f32,
        star.size as f32,
        theme::color(STAR_COLOR),
    );
}

fn draw_particle(particle: &Particle) {
    let mut color = theme::color(particle.body.color);
    color.a = particle.life.clamp(0.0, 1.0) as f32;
    draw_circle(
        particle.body.pos.x as f32,
        particle.body.pos.y as f32,
        particle.body.radius as f32,
        color,
    );
}

/// Stable crag multiplier for one outline vertex of one asteroid.
///
/// Hashing (id, vertex) keeps the silhouette fixed for the asteroid's
/// lifetime instead of re-rolling it every frame.
fn crag_scale(id: u32, vertex: usize) -> f64 {
    let mut h = (u64::from(id) << 32) | vertex as u64;
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    CRAG_MIN + (h % 4096) as f64 / 4096.0 * CRAG_SPAN
}

fn draw_asteroid(asteroid: &Asteroid) {
    let pos = asteroid.body.pos;
    let mut vertices = [Vec2::ZERO; ASTEROID_VERTICES];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle =
            asteroid.rotation + (i as f64 / ASTEROID_VERTICES as f64) * std::f64::consts::TAU;
        let r = asteroid.body.radius * crag_scale(asteroid.id, i);
        *vertex = vec2((pos.x + angle.cos() * r) as f32, (pos.y + angle.sin() * r) as f32);
    }

    // Crag radii keep the outline star-shaped around the center, so a fan
    // from the center fills it exactly.
    let center = vec2(pos.x as f32, pos.y as f32);
    let fill = theme::color(asteroid.body.color);
    for i in 0..ASTEROID_VERTICES {
        draw_triangle(center, vertices[i], vertices[(i + 1) % ASTEROID_VERTICES], fill);
    }
    let outline = theme::color(DEBRIS_COLOR);
    for i in 0..ASTEROID_VERTICES {
        let a = vertices[i];
        let b = vertices[(i + 1) % ASTEROID_VERTICES];
        draw_line(a.x, a.y, b.x, b.y, OUTLINE_THICKNESS, outline);
    }
}

fn draw_ship(player: &Player) {
    let x = player.body.pos.x as f32;
    let y = player.body.pos.y as f32;

    // Thruster glow: translucent layers approximate a radial falloff, with
    // a per-frame flicker on the radius.
    let flicker = macroquad::rand::gen_range(0.0f32, 5.0);
    let glow = theme::with_alpha(theme::THRUSTER, 0.22);
    for layer in 0..3 {
        let radius = (15.0 + flicker) * (1.0 - layer as f32 * 0.3);
        draw_circle(x - 15.0, y, radius, glow);
    }

    // Hull: a concave arrowhead, split into two triangles at the tail notch.
    let hull = theme::color(player.body.color);
    let nose = vec2(x + 25.0, y);
    let notch = vec2(x - 8.0, y);
    draw_triangle(nose, vec2(x - 15.0, y - 12.0), notch, hull);
    draw_triangle(nose, notch, vec2(x - 15.0, y + 12.0), hull);

    // Cockpit canopy.
    draw_ellipse(x + 5.0, y, 8.0, 4.0, 0.0, theme::color(COCKPIT_COLOR));
}
