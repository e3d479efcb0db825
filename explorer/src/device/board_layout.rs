// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A position on the motherboard, in whatever units the layout uses (percent of the
/// board, or grid cells).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Linear interpolation, `fraction` in `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Point, fraction: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * fraction,
            y: self.y + (other.y - self.y) * fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardComponent {
    Cpu,
    Ram,
    Storage,
    Fan,
    Battery,
}

/// Where each component sits on the board. Bit-flow bursts travel from the cpu to the
/// storage along a straight line between these points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub cpu: Point,
    pub ram: Point,
    pub storage: Point,
    pub fan: Point,
    pub battery: Point,
}

impl BoardLayout {
    /// Percent of the board, used by the strict curriculum.
    #[must_use]
    pub fn percent() -> Self {
        Self {
            cpu: Point::new(20.0, 25.0),
            ram: Point::new(50.0, 25.0),
            storage: Point::new(80.0, 25.0),
            fan: Point::new(20.0, 75.0),
            battery: Point::new(80.0, 75.0),
        }
    }

    /// A 10x10 grid, used by the lenient curriculum.
    #[must_use]
    pub fn grid() -> Self {
        Self {
            cpu: Point::new(2.0, 2.0),
            ram: Point::new(5.0, 2.0),
            storage: Point::new(8.0, 2.0),
            fan: Point::new(2.0, 8.0),
            battery: Point::new(8.0, 8.0),
        }
    }

    #[must_use]
    pub fn position_of(&self, component: BoardComponent) -> Point {
        match component {
            BoardComponent::Cpu => self.cpu,
            BoardComponent::Ram => self.ram,
            BoardComponent::Storage => self.storage,
            BoardComponent::Fan => self.fan,
            BoardComponent::Battery => self.battery,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self { Self::percent() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_lerp() {
        let from = Point::new(20.0, 25.0);
        let to = Point::new(80.0, 25.0);
        assert_eq2!(from.lerp(to, 0.0), from);
        assert_eq2!(from.lerp(to, 0.5), Point::new(50.0, 25.0));
        assert_eq2!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn test_position_of() {
        let layout = BoardLayout::grid();
        assert_eq2!(layout.position_of(BoardComponent::Storage), Point::new(8.0, 2.0));
        assert_eq2!(
            BoardLayout::default().position_of(BoardComponent::Cpu),
            Point::new(20.0, 25.0)
        );
    }
}
