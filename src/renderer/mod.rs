//! Canvas 2D renderer
//!
//! Draws solid-colour shapes from a read-only view of the simulation.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::settings::Settings;
use crate::sim::Simulation;

const SKY: &str = "#70c5ce";
const GATE: &str = "#4CAF50";
const GATE_RIM: &str = "#2e7d32";
const GROUND: &str = "#8B4513";
const GROUND_STRIPE: &str = "#a0522d";
const ACTOR: &str = "#ffd700";
const EYE: &str = "#222";

/// Width of one ground stripe, in world units
const STRIPE_WIDTH: f32 = 24.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one frame
    pub fn render(&self, sim: &Simulation, settings: &Settings) {
        let ctx = &self.ctx;
        let world = sim.world();
        let (w, h) = (world.width as f64, world.height as f64);
        let ground_y = world.ground_y() as f64;

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(SKY);
        ctx.fill_rect(0.0, 0.0, w, h);

        // Gates
        let width = sim.tuning().obstacle_width as f64;
        for obstacle in sim.obstacles() {
            let x = obstacle.x as f64;
            let top = obstacle.top_height as f64;
            let bottom_y = obstacle.bottom_y as f64;
            let bottom_h = obstacle.bottom_gate_height(world) as f64;

            ctx.set_fill_style_str(GATE);
            ctx.fill_rect(x, 0.0, width, top);
            ctx.fill_rect(x, bottom_y, width, bottom_h);

            ctx.set_fill_style_str(GATE_RIM);
            ctx.fill_rect(x - 3.0, (top - 16.0).max(0.0), width + 6.0, top.min(16.0));
            if bottom_h > 0.0 {
                ctx.fill_rect(x - 3.0, bottom_y, width + 6.0, bottom_h.min(16.0));
            }
        }

        // Ground, scrolling with the gates
        ctx.set_fill_style_str(GROUND);
        ctx.fill_rect(0.0, ground_y, w, world.ground_height as f64);
        ctx.set_fill_style_str(GROUND_STRIPE);
        let offset = (sim.run().scroll % (STRIPE_WIDTH * 2.0)) as f64;
        let mut x = -offset;
        while x < w {
            ctx.fill_rect(x, ground_y, STRIPE_WIDTH as f64, 8.0);
            x += STRIPE_WIDTH as f64 * 2.0;
        }

        // Actor
        let actor = sim.actor();
        let rotation = settings.effective_rotation(actor.rotation) as f64;
        let (hw, hh) = (actor.size.x as f64 / 2.0, actor.size.y as f64 / 2.0);
        ctx.save();
        let _ = ctx.translate(actor.pos.x as f64, actor.pos.y as f64);
        let _ = ctx.rotate(rotation * PI / 180.0);
        ctx.set_fill_style_str(ACTOR);
        ctx.begin_path();
        let _ = ctx.ellipse(0.0, 0.0, hw, hh, 0.0, 0.0, PI * 2.0);
        ctx.fill();
        ctx.set_fill_style_str(EYE);
        ctx.begin_path();
        let _ = ctx.arc(hw * 0.45, -hh * 0.3, 3.0, 0.0, PI * 2.0);
        ctx.fill();
        ctx.restore();
    }
}
