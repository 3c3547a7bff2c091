use crossterm::style::Color;
use rand::prelude::SliceRandom;
use rand::Rng;

/// A single particle in the celebration
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }
}

/// Effect types for the completion celebration
#[derive(Clone, Copy)]
enum EffectType {
    Confetti,
    Fireworks,
}

impl EffectType {
    fn random() -> Self {
        if rand::thread_rng().gen_bool(0.5) {
            EffectType::Confetti
        } else {
            EffectType::Fireworks
        }
    }
}

/// Generate a random bright color
fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}

/// Convert hue (0.0-1.0) to RGB color
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue * 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;

    let (r, g, b) = match h as i32 % 6 {
        0 => (255, x as u8, 0),
        1 => (x as u8, 255, 0),
        2 => (0, 255, x as u8),
        3 => (0, x as u8, 255),
        4 => (x as u8, 0, 255),
        _ => (255, 0, x as u8),
    };

    Color::Rgb { r, g, b }
}

/// Confetti characters
const CONFETTI_CHARS: &[char] = &['*', '✦', '✧', '◆', '◇', '○', '●', '■', '□', '▲', '▽'];

const FINISH_MESSAGES: [&str; 5] = [
    "TOUR COMPLETE!",
    "EVERY SQUARE VISITED!",
    "THE KNIGHT RESTS!",
    "FULL BOARD!",
    "FLAWLESS RIDE!",
];

/// The completion celebration overlay
pub struct Celebration {
    particles: Vec<Particle>,
    effect_type: EffectType,
    frame_count: u32,
    rainbow_offset: f32,
    message_index: usize,
    firework_cooldown: u32,
    pub width: u16,
    pub height: u16,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            effect_type: EffectType::random(),
            frame_count: 0,
            rainbow_offset: 0.0,
            message_index: rand::thread_rng().gen_range(0..FINISH_MESSAGES.len()),
            firework_cooldown: 0,
            width: 80,
            height: 24,
        }
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.frame_count = 0;
        self.rainbow_offset = 0.0;
        self.effect_type = EffectType::random();
        self.message_index = rand::thread_rng().gen_range(0..FINISH_MESSAGES.len());
        self.firework_cooldown = 0;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        self.frame_count += 1;
        self.rainbow_offset += 0.05;

        // Update particles
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += 0.15; // Gravity
            p.lifetime -= 0.016;
            p.lifetime > 0.0 && p.y < self.height as f32 + 5.0
        });

        match self.effect_type {
            EffectType::Confetti => self.spawn_confetti(),
            EffectType::Fireworks => self.spawn_fireworks(),
        }
    }

    fn spawn_confetti(&mut self) {
        let mut rng = rand::thread_rng();
        for _ in 0..3 {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.width as f32),
                y: -2.0,
                vx: rng.gen_range(-0.5..0.5),
                vy: rng.gen_range(0.3..1.0),
                char: *CONFETTI_CHARS.choose(&mut rng).unwrap(),
                color: random_bright_color(),
                lifetime: rng.gen_range(3.0..6.0),
            });
        }
    }

    fn spawn_fireworks(&mut self) {
        if self.firework_cooldown > 0 {
            self.firework_cooldown -= 1;
            return;
        }

        let mut rng = rand::thread_rng();
        if rng.gen_bool(0.08) {
            let x = rng.gen_range(10.0..(self.width as f32 - 10.0).max(11.0));
            let y = rng.gen_range(2.0..(self.height as f32 / 2.0).max(3.0));
            let color = random_bright_color();

            for _ in 0..25 {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let speed = rng.gen_range(0.5..2.0);
                self.particles.push(Particle {
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    char: '●',
                    color,
                    lifetime: rng.gen_range(1.0..2.5),
                });
            }
            self.firework_cooldown = 15;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn message(&self) -> &'static str {
        FINISH_MESSAGES[self.message_index]
    }

    pub fn rainbow_offset(&self) -> f32 {
        self.rainbow_offset
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}
