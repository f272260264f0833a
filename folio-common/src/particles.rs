//! Decorative floating particles for the hero banner
//!
//! The field is advanced on a fixed cadence by whoever owns the timer. Each
//! tick may spawn particles and always drops the ones that outlived their
//! lifetime, so the number alive stays bounded.

use rand::Rng;

/// Timing of the particle effect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleConfig {
    /// Interval between ticks
    pub tick_ms: u64,
    /// Number of leading ticks that each spawn one particle
    pub initial_burst: u64,
    /// Steady-state spawn interval, aligned to multiples of this from start
    pub spawn_every_ms: u64,
    /// A particle is removed once it is this old
    pub lifetime_ms: u64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1_000,
            initial_burst: 15,
            spawn_every_ms: 2_000,
            lifetime_ms: 35_000,
        }
    }
}

/// One particle and its randomized appearance
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub size_px: f64,
    pub opacity: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    /// Length of one float animation cycle
    pub duration_s: f64,
    pub born_ms: u64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(id: u64, born_ms: u64, rng: &mut R) -> Self {
        Self {
            id,
            size_px: rng.gen_range(2.0..8.0),
            opacity: rng.gen_range(0.1..0.4),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(15.0..35.0),
            born_ms,
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; background: rgba(59, 130, 246, {opacity:.2}); \
             left: {left:.1}%; top: {top:.1}%; animation: float {duration:.1}s infinite linear;",
            size = self.size_px,
            opacity = self.opacity,
            left = self.left_pct,
            top = self.top_pct,
            duration = self.duration_s,
        )
    }
}

/// Live particles plus the tick clock that drives them
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    next_id: u64,
    ticks: u64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            next_id: 0,
            ticks: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Milliseconds since the field started, as of the next tick
    pub fn elapsed_ms(&self) -> u64 {
        self.ticks * self.config.tick_ms
    }

    /// Advance one tick. Returns how many particles were spawned.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let now = self.elapsed_ms();
        let lifetime = self.config.lifetime_ms;
        self.particles
            .retain(|particle| now.saturating_sub(particle.born_ms) < lifetime);

        let mut spawned = 0;
        if self.ticks < self.config.initial_burst {
            self.spawn(now, rng);
            spawned += 1;
        }
        if now > 0 && self.config.spawn_every_ms > 0 && now % self.config.spawn_every_ms == 0 {
            self.spawn(now, rng);
            spawned += 1;
        }

        self.ticks += 1;
        spawned
    }

    fn spawn<R: Rng + ?Sized>(&mut self, now: u64, rng: &mut R) {
        let particle = Particle::random(self.next_id, now, rng);
        self.next_id += 1;
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(field: &mut ParticleField, ticks: usize, rng: &mut StdRng) -> usize {
        (0..ticks).map(|_| field.tick(rng)).sum()
    }

    #[test]
    fn test_initial_burst_plus_interval_spawns() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::new(ParticleConfig::default());

        // t = 0s..14s: one burst particle per tick, interval spawns at 2s, 4s, ... 14s
        let spawned = run(&mut field, 15, &mut rng);
        assert_eq!(spawned, 15 + 7);
        assert_eq!(field.particles().len(), 22);
    }

    #[test]
    fn test_first_tick_spawns_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(ParticleConfig::default());
        assert_eq!(field.tick(&mut rng), 1);
        assert_eq!(field.particles()[0].born_ms, 0);
    }

    #[test]
    fn test_only_interval_spawns_after_burst() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(ParticleConfig::default());
        run(&mut field, 15, &mut rng);

        // t = 15s: odd second, nothing; t = 16s: interval spawn
        assert_eq!(field.tick(&mut rng), 0);
        assert_eq!(field.tick(&mut rng), 1);
    }

    #[test]
    fn test_no_particle_outlives_lifetime() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ParticleConfig::default();
        let mut field = ParticleField::new(config);

        for _ in 0..120 {
            field.tick(&mut rng);
            let now = field.elapsed_ms() - config.tick_ms;
            assert!(field
                .particles()
                .iter()
                .all(|p| now - p.born_ms < config.lifetime_ms));
        }
        // Steady state: one spawn every 2s, each living 35s
        assert!(field.particles().len() <= 18);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(ParticleConfig::default());
        run(&mut field, 60, &mut rng);
        let ids: Vec<u64> = field.particles().iter().map(|p| p.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_random_attributes_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::new(ParticleConfig::default());
        run(&mut field, 30, &mut rng);
        for p in field.particles() {
            assert!((2.0..8.0).contains(&p.size_px));
            assert!((0.1..0.4).contains(&p.opacity));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((15.0..35.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn test_style_string() {
        let particle = Particle {
            id: 0,
            size_px: 4.0,
            opacity: 0.25,
            left_pct: 10.0,
            top_pct: 50.5,
            duration_s: 20.0,
            born_ms: 0,
        };
        assert_eq!(
            particle.style(),
            "width: 4.0px; height: 4.0px; background: rgba(59, 130, 246, 0.25); \
             left: 10.0%; top: 50.5%; animation: float 20.0s infinite linear;"
        );
    }
}
