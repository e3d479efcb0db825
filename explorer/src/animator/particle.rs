// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use crate::Point;

pub const PROGRESS_COMPLETE: f64 = 100.0;

/// The symbol a bit-flow particle carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum Bit {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
}

/// A short lived visual entity. Bit-flow particles travel from `origin` to `target`;
/// ambient particles have no target and just fade in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub id: u64,
    pub origin: Point,
    pub target: Option<Point>,
    /// `0.0..=100.0`.
    pub progress: f64,
    pub payload: Option<Bit>,
}

impl Particle {
    /// Where to draw this particle right now.
    #[must_use]
    pub fn position(&self) -> Point {
        match self.target {
            Some(target) => self.origin.lerp(target, self.progress / PROGRESS_COMPLETE),
            None => self.origin,
        }
    }

    #[must_use]
    pub fn is_spent(&self) -> bool { self.progress >= PROGRESS_COMPLETE }
}

/// One tick of the particle rule shared by both flow lanes: drop every particle that
/// already reached the end, then move the rest forward. A particle therefore shows at
/// exactly 100 for one tick before it is removed.
pub fn cull_and_advance(particles: &mut Vec<Particle>, increment: f64) {
    particles.retain(|it| !it.is_spent());
    for particle in particles.iter_mut() {
        particle.progress = (particle.progress + increment).min(PROGRESS_COMPLETE);
    }
}
