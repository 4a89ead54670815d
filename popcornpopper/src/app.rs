//! The overlay application
//!
//! A transparent always-on-top window whose frame loop polls whichever
//! timer is running: the display timer launches a cycle and hands over to
//! the motion timer; the motion timer advances the cycle one tick at a
//! time and hands back when the cycle finishes.

use std::time::{Duration, Instant};

use egui::{Context, Key, Pos2, Rect, Vec2, ViewportCommand};
use popcorncore::animation::{Popper, TickOutcome};
use popcorncore::geometry::{DisplayRegion, GeometryError, ScreenGeometry};
use popcorncore::timer::IntervalTimer;

use crate::sprites::{PopcornTextures, PIECE_SIZE};

/// Pause between animation cycles.
const DISPLAY_INTERVAL: Duration = Duration::from_secs(10);

/// Cadence of motion ticks during a cycle.
const MOTION_INTERVAL: Duration = Duration::from_millis(15);

pub struct PopcornApp {
    popper: Popper,
    display_timer: IntervalTimer,
    motion_timer: IntervalTimer,
    textures: Option<PopcornTextures>,
    initialized: bool,
}

impl PopcornApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            popper: Popper::new(ScreenGeometry::fallback()),
            display_timer: IntervalTimer::new(DISPLAY_INTERVAL),
            motion_timer: IntervalTimer::new(MOTION_INTERVAL),
            textures: None,
            initialized: false,
        }
    }

    /// One-time startup work that needs a live context: read the host
    /// display geometry, size the window to span it, upload the sprite
    /// textures, and arm the display timer.
    fn ensure_initialized(&mut self, ctx: &Context, now: Instant) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let geometry = match detect_geometry(ctx) {
            Ok(geometry) => geometry,
            Err(err) => {
                eprintln!("[popcornpopper] error reading screen geometry: {err}; using fallback layout");
                ScreenGeometry::fallback()
            }
        };

        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(Pos2::new(
            geometry.leftmost,
            0.0,
        )));
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(Vec2::new(
            geometry.total_width,
            geometry.min_height,
        )));

        self.popper = Popper::new(geometry);
        self.textures = Some(PopcornTextures::load(ctx));
        self.display_timer.start(now);
    }

    fn paint(&self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let Some(textures) = &self.textures else {
                    return;
                };
                for (index, piece) in self.popper.pieces().iter().enumerate() {
                    let Some(texture) = textures.get(index) else {
                        continue;
                    };
                    let rect = Rect::from_min_size(piece.pos, Vec2::splat(PIECE_SIZE));
                    let angle = piece.rotation.unwrap_or(0.0).to_radians();
                    egui::Image::from_texture(texture)
                        .rotate(angle, Vec2::splat(0.5))
                        .paint_at(ui, rect);
                }
            });
    }
}

impl eframe::App for PopcornApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.ensure_initialized(ctx, now);

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        // Launch: randomize every piece and hand over to the motion timer.
        if self.display_timer.fire(now) {
            self.popper.launch(&mut rand::thread_rng());
            self.display_timer.stop();
            self.motion_timer.start(now);
        }

        // Motion tick: advance the cycle; hand back once it finishes.
        if self.motion_timer.fire(now) && self.popper.tick() == TickOutcome::Finished {
            self.motion_timer.stop();
            self.display_timer.start(now);
        }

        // Exactly one countdown is active from init until exit.
        debug_assert!(self.display_timer.is_running() != self.motion_timer.is_running());

        self.paint(ctx);

        let wake = [
            self.display_timer.time_until_due(now),
            self.motion_timer.time_until_due(now),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(wake) = wake {
            ctx.request_repaint_after(wake);
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

/// Read the display regions the host reports and fold them into the
/// startup aggregate. eframe only exposes the monitor the window is on,
/// so the aggregate is built from that single region; the fold itself
/// handles any number of regions.
fn detect_geometry(ctx: &Context) -> Result<ScreenGeometry, GeometryError> {
    let regions: Vec<DisplayRegion> = ctx
        .input(|i| i.viewport().monitor_size)
        .filter(|size| size.x > 0.0 && size.y > 0.0)
        .map(|size| DisplayRegion {
            left: 0.0,
            width: size.x,
            height: size.y,
        })
        .into_iter()
        .collect();
    ScreenGeometry::from_regions(&regions)
}
