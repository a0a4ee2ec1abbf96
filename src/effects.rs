//! Effects — short celebratory overlays drawn above everything else.
//!
//! Positions are in terminal cells. `step` is called once per effects frame
//! (`FRAME`); everything expires on its own.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::canvas::Canvas;
use crate::types::{Celebration, Color, NamedColor, Style};

pub const FRAME: Duration = Duration::from_millis(33);
const FRAMES_PER_SEC: f32 = 30.0;

const CONFETTI_COUNT: usize = 100;
const SPARK_COUNT: usize = 20;
const FLASH_FRAMES: u32 = 60;
const ROCKET_FRAMES: f32 = 30.0;

const CONFETTI_COLORS: [NamedColor; 4] = [
    NamedColor::Cyan,
    NamedColor::Magenta,
    NamedColor::Green,
    NamedColor::Yellow,
];
const SPARK_COLORS: [NamedColor; 4] = [
    NamedColor::Yellow,
    NamedColor::Magenta,
    NamedColor::Cyan,
    NamedColor::White,
];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    ch: char,
    color: NamedColor,
    /// Frames left; `None` lives until it falls off the bottom.
    life: Option<u32>,
}

#[derive(Debug, Clone)]
struct Rocket {
    x: f32,
    y: f32,
    vy: f32,
    burst_at: f32,
}

#[derive(Debug, Default)]
pub struct Effects {
    width: u16,
    height: u16,
    particles: Vec<Particle>,
    rockets: Vec<Rocket>,
    flash: u32,
}

impl Effects {
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty() || !self.rockets.is_empty() || self.flash > 0
    }

    /// True while a matrix flash is tinting the screen.
    pub fn flashing(&self) -> bool {
        self.flash > 0
    }

    pub fn start<R: Rng>(&mut self, kind: Celebration, rng: &mut R) {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        match kind {
            Celebration::Confetti => {
                for _ in 0..CONFETTI_COUNT {
                    let secs = rng.gen_range(2.0..5.0);
                    self.particles.push(Particle {
                        x: rng.gen_range(0.0..w),
                        y: -rng.gen_range(0.0..h / 3.0),
                        vx: 0.0,
                        vy: h / (secs * FRAMES_PER_SEC),
                        ch: '■',
                        color: *CONFETTI_COLORS.choose(rng).unwrap_or(&NamedColor::Cyan),
                        life: None,
                    });
                }
            }
            Celebration::Fireworks => {
                let start = h - 1.0;
                let burst_at = h * 0.3;
                self.rockets.push(Rocket {
                    x: rng.gen_range(0.0..w),
                    y: start,
                    vy: (start - burst_at) / ROCKET_FRAMES,
                    burst_at,
                });
            }
            Celebration::MatrixFlash => self.flash = FLASH_FRAMES,
        }
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.flash = self.flash.saturating_sub(1);

        let mut bursts = Vec::new();
        self.rockets.retain_mut(|r| {
            r.y -= r.vy;
            if r.y <= r.burst_at {
                bursts.push((r.x, r.y));
                false
            } else {
                true
            }
        });
        for (x, y) in bursts {
            for _ in 0..SPARK_COUNT {
                let secs = rng.gen_range(0.5..1.5);
                self.particles.push(Particle {
                    x,
                    y,
                    vx: rng.gen_range(-1.5..1.5),
                    vy: rng.gen_range(-0.75..0.75),
                    ch: '*',
                    color: *SPARK_COLORS.choose(rng).unwrap_or(&NamedColor::White),
                    life: Some((secs * FRAMES_PER_SEC) as u32),
                });
            }
        }

        let bottom = self.height as f32;
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            if let Some(life) = p.life.as_mut() {
                *life = life.saturating_sub(1);
                if *life == 0 {
                    return false;
                }
            }
            p.y < bottom && p.x >= 0.0 && p.x < f32::from(u16::MAX)
        });
    }

    pub fn draw(&self, canvas: &mut Canvas, z_order: i32) {
        for r in &self.rockets {
            if r.y >= 0.0 {
                let style = Style::fg(Color::Named(NamedColor::White)).bold();
                canvas.put(r.x as u16, r.y as u16, '^', style, z_order);
            }
        }
        for p in &self.particles {
            if p.y >= 0.0 {
                let style = Style::fg(Color::Named(p.color)).bold();
                canvas.put(p.x as u16, p.y as u16, p.ch, style, z_order);
            }
        }
    }
}
