use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

const GRAVITY: f64 = 12.0;
const BANNERS: [&str; 4] = ["PERFECT!", "NO MISTAKES!", "FLAWLESS!", "SPOT ON!"];
const SYMBOLS: [char; 6] = ['*', '+', '✦', '✧', '•', '✓'];

/// One falling piece of confetti
#[derive(Debug, Clone)]
pub struct Confetti {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    age: f64,
    max_age: f64,
}

impl Confetti {
    fn burst<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-4.0..4.0),
            vel_y: rng.gen_range(-6.0..-1.0),
            symbol: *SYMBOLS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..6),
            age: 0.0,
            max_age: rng.gen_range(1.5..3.0),
        }
    }

    /// Returns false once the piece has burned out
    fn update(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += GRAVITY * dt;
        self.age += dt;
        self.age < self.max_age
    }
}

/// Confetti burst shown over the summary of a stage without mistakes
#[derive(Debug)]
pub struct Celebration {
    pub pieces: Vec<Confetti>,
    pub banner: &'static str,
    pub is_active: bool,
    elapsed: Duration,
    duration: Duration,
    width: f64,
    height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            banner: BANNERS[0],
            is_active: false,
            elapsed: Duration::ZERO,
            duration: Duration::from_secs(3),
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.width = width as f64;
        self.height = height as f64;
        self.elapsed = Duration::ZERO;
        self.is_active = true;
        self.banner = BANNERS.choose(&mut rng).copied().unwrap_or(BANNERS[0]);

        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        self.pieces = (0..40)
            .map(|_| {
                Confetti::burst(
                    cx + rng.gen_range(-12.0..12.0),
                    cy + rng.gen_range(-3.0..3.0),
                    &mut rng,
                )
            })
            .collect();
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.pieces.clear();
    }

    pub fn update(&mut self, elapsed: Duration) {
        if !self.is_active {
            return;
        }

        self.elapsed += elapsed;
        if self.elapsed >= self.duration {
            self.stop();
            return;
        }

        let dt = elapsed.as_secs_f64();
        let (width, height) = (self.width, self.height);
        self.pieces.retain_mut(|piece| {
            let alive = piece.update(dt);
            let on_screen = piece.y <= height && piece.x >= 0.0 && piece.x < width;
            alive && on_screen
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn test_starts_inactive() {
        let celebration = Celebration::new();
        assert!(!celebration.is_active);
        assert!(celebration.pieces.is_empty());
    }

    #[test]
    fn test_start_spawns_confetti_and_banner() {
        let mut celebration = Celebration::new();
        celebration.start(80, 24);

        assert!(celebration.is_active);
        assert!(!celebration.pieces.is_empty());
        assert!(BANNERS.contains(&celebration.banner));
    }

    #[test]
    fn test_confetti_falls() {
        let mut piece = Confetti::burst(10.0, 10.0, &mut rand::thread_rng());
        let vel_y = piece.vel_y;
        assert!(piece.update(0.1));
        assert!(piece.vel_y > vel_y);
    }

    #[test]
    fn test_ends_after_duration() {
        let mut celebration = Celebration::new();
        celebration.start(80, 24);

        for _ in 0..10 {
            celebration.update(STEP);
        }
        assert!(celebration.is_active);

        for _ in 0..25 {
            celebration.update(STEP);
        }
        assert!(!celebration.is_active);
        assert!(celebration.pieces.is_empty());
    }

    #[test]
    fn test_off_screen_pieces_removed() {
        let mut celebration = Celebration::new();
        celebration.start(20, 10);
        celebration.pieces.push(Confetti::burst(500.0, 500.0, &mut rand::thread_rng()));

        celebration.update(STEP);
        assert!(celebration
            .pieces
            .iter()
            .all(|p| p.x >= 0.0 && p.x < 20.0 && p.y <= 10.0));
    }

    #[test]
    fn test_update_when_inactive_is_noop() {
        let mut celebration = Celebration::new();
        celebration.update(Duration::from_secs(10));
        assert!(!celebration.is_active);
    }
}
