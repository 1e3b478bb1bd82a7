//! Decorative particle backdrop.
//!
//! Purely cosmetic: a fixed-size field of drifting particles, advanced
//! once per frame from the main loop and drawn behind the dashboard
//! panels. It shares no state with the query pipeline and cannot block
//! input handling. The field is mutated strictly by index; a particle
//! that shrinks below the visibility threshold is respawned in place,
//! so the population never changes mid-iteration.

use rand::Rng;

/// Number of particles in the field
pub const PARTICLE_COUNT: usize = 100;

/// Maximum distance at which two particles are joined by a line
const LINK_DISTANCE: f64 = 14.0;

/// Particles below this size are respawned
const MIN_SIZE: f64 = 0.3;

/// Shrink applied per tick
const SHRINK_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    dx: f64,
    dy: f64,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
            size: rng.random_range(1.0..6.0),
            dx: rng.random_range(-0.5..0.5),
            dy: rng.random_range(-0.25..0.25),
        }
    }
}

#[derive(Debug)]
pub struct Backdrop {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl Backdrop {
    pub fn new(width: f64, height: f64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rebuild the field when the drawable area changes
    pub fn resize(&mut self, width: f64, height: f64) {
        let width = width.max(1.0);
        let height = height.max(1.0);
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    /// Advance the field by one frame
    pub fn tick(&mut self) {
        let mut rng = rand::rng();
        for i in 0..self.particles.len() {
            let mut p = self.particles[i];
            p.x += p.dx;
            p.y += p.dy;
            if p.size > 0.2 {
                p.size -= SHRINK_RATE;
            }
            if p.x < 0.0 || p.x > self.width {
                p.dx = -p.dx;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.dy = -p.dy;
                p.y = p.y.clamp(0.0, self.height);
            }
            if p.size <= MIN_SIZE {
                p = Particle::spawn(&mut rng, self.width, self.height);
            }
            self.particles[i] = p;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pairs of particles close enough to be joined by a line
    pub fn links(&self) -> Vec<(Particle, Particle)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                if (dx * dx + dy * dy).sqrt() < LINK_DISTANCE {
                    links.push((*a, *b));
                }
            }
        }
        links
    }
}
