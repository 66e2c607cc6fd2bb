//! Animation state for the decorative effects: the falling piece, the landing
//! bounce, the winning-line blink, and the game-over fireworks. Each effect is
//! stepped from the event loop against `Instant` timers and only describes
//! what to draw; the board itself is never touched here.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

use crate::game::{Coord, Player};

/// A piece drawn over the grid while an animation owns it.
#[derive(Debug, Clone, Copy)]
pub struct Overlay {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// The one in-game animation running at a time, in sequence order:
/// a drop, then a bounce, then (on a win) the blink.
#[derive(Debug)]
pub enum Effect {
    Drop(DropAnimation),
    Bounce(BounceAnimation),
    Blink(BlinkAnimation),
}

/// A piece travelling from the top of the grid to its landing row, one row
/// per interval. The move commits only once the piece has landed.
#[derive(Debug)]
pub struct DropAnimation {
    pub col: usize,
    pub target_row: usize,
    current_row: usize,
    pub player: Player,
    last_step: Instant,
}

impl DropAnimation {
    pub fn new(col: usize, target_row: usize, player: Player) -> Self {
        DropAnimation {
            col,
            target_row,
            current_row: 0,
            player,
            last_step: Instant::now(),
        }
    }

    /// Advance one row per interval; true once the piece has rested on its
    /// landing row for a full interval.
    pub fn step(&mut self, interval: Duration) -> bool {
        if self.last_step.elapsed() < interval {
            return false;
        }
        self.last_step = Instant::now();

        if self.current_row >= self.target_row {
            return true;
        }
        self.current_row += 1;
        false
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            row: self.current_row,
            col: self.col,
            player: self.player,
        }
    }
}

/// A just-landed piece lifting one row and settling back, a fixed number of
/// times. The piece is already on the board; while lifted, its cell is drawn
/// empty and the piece one row up.
#[derive(Debug)]
pub struct BounceAnimation {
    pub col: usize,
    pub row: usize,
    pub player: Player,
    cycles_left: u32,
    lifted: bool,
    last_step: Instant,
}

impl BounceAnimation {
    pub fn new(col: usize, row: usize, player: Player, cycles: u32) -> Self {
        BounceAnimation {
            col,
            row,
            player,
            cycles_left: cycles,
            lifted: true,
            last_step: Instant::now(),
        }
    }

    /// Toggle between lifted and settled each interval; true when all cycles
    /// have settled.
    pub fn step(&mut self, interval: Duration) -> bool {
        if self.cycles_left == 0 {
            return true;
        }
        if self.last_step.elapsed() < interval {
            return false;
        }
        self.last_step = Instant::now();

        if self.lifted {
            self.lifted = false;
            self.cycles_left -= 1;
        } else {
            self.lifted = true;
        }
        self.cycles_left == 0
    }

    /// Where to draw the piece right now.
    pub fn overlay(&self) -> Overlay {
        let row = if self.lifted {
            self.row.saturating_sub(1)
        } else {
            self.row
        };
        Overlay {
            row,
            col: self.col,
            player: self.player,
        }
    }

    /// The board cell to draw as empty while the piece is lifted.
    pub fn hidden_cell(&self) -> Option<Coord> {
        if self.lifted && self.row > 0 {
            Some((self.row, self.col))
        } else {
            None
        }
    }
}

/// The four winning cells flashing green.
#[derive(Debug)]
pub struct BlinkAnimation {
    pub line: [Coord; 4],
    cycles_left: u32,
    on: bool,
    last_step: Instant,
}

impl BlinkAnimation {
    pub fn new(line: [Coord; 4], cycles: u32) -> Self {
        BlinkAnimation {
            line,
            cycles_left: cycles,
            on: true,
            last_step: Instant::now(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Toggle the highlight each interval; true after the final off phase.
    pub fn step(&mut self, interval: Duration) -> bool {
        if self.cycles_left == 0 {
            return true;
        }
        if self.last_step.elapsed() < interval {
            return false;
        }
        self.last_step = Instant::now();

        if self.on {
            self.on = false;
            self.cycles_left -= 1;
        } else {
            self.on = true;
        }
        self.cycles_left == 0
    }
}

const FIREWORK_STEP: Duration = Duration::from_millis(40);
const BURST_EVERY_TICKS: u32 = 18;
const PARTICLES_PER_BURST: usize = 24;
const PARTICLE_TTL: u32 = 22;
const GRAVITY: f32 = 0.045;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::White,
];

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    ttl: u32,
    pub color: Color,
}

/// A simple particle system for the game-over screen: bursts spawn at random
/// spots in the upper part of the area and fall apart under gravity.
#[derive(Debug, Default)]
pub struct Fireworks {
    particles: Vec<Particle>,
    ticks: u32,
    last_step: Option<Instant>,
}

impl Fireworks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the simulation if a frame interval has elapsed.
    pub fn step(&mut self, width: u16, height: u16) {
        match self.last_step {
            Some(last) if last.elapsed() < FIREWORK_STEP => return,
            _ => self.last_step = Some(Instant::now()),
        }
        self.advance(width, height);
    }

    fn advance(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.ttl = p.ttl.saturating_sub(1);
        }
        self.particles
            .retain(|p| p.ttl > 0 && p.x >= 0.0 && p.x < width as f32 && p.y < height as f32);

        if self.ticks % BURST_EVERY_TICKS == 0 {
            self.spawn_burst(width, height);
        }
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn spawn_burst(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        let cx = rng.gen_range(0.15..0.85) * width as f32;
        let cy = rng.gen_range(0.1..0.5) * height as f32;
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];

        for i in 0..PARTICLES_PER_BURST {
            let angle = i as f32 / PARTICLES_PER_BURST as f32 * std::f32::consts::TAU;
            let speed = rng.gen_range(0.3..0.9);
            self.particles.push(Particle {
                x: cx,
                y: cy,
                // Terminal cells are taller than wide, so spread twice as
                // fast horizontally.
                vx: angle.cos() * speed * 2.0,
                vy: angle.sin() * speed,
                ttl: PARTICLE_TTL - rng.gen_range(0..6),
                color,
            });
        }
    }
}
