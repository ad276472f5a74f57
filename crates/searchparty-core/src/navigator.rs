//! # Navigator
//!
//! A turtle-style state machine on the integer grid. The navigator starts at
//! the origin facing [`Bearing::North`] and only ever changes state through
//! three transitions:
//!
//! | Transition | Position | Bearing |
//! |------------|----------|---------|
//! | `move_forward` | `+= bearing.unit_vector()` | unchanged |
//! | `turn_right` | unchanged | next clockwise |
//! | `turn_left` | unchanged | three clockwise steps |
//!
//! There is no terminal state. A navigator is created for a single run, fed a
//! finite instruction sequence and then queried for its final [`Position`].

use crate::instruction::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer coordinate on the search grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// The starting point of every run
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position one unit away along `bearing`
    #[must_use]
    pub fn step(self, bearing: Bearing) -> Self {
        let (dx, dy) = bearing.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction the navigator is facing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bearing {
    #[default]
    North,
    East,
    South,
    West,
}

impl Bearing {
    /// All bearings in clockwise order starting from north
    pub const CLOCKWISE: [Bearing; 4] = [
        Bearing::North,
        Bearing::East,
        Bearing::South,
        Bearing::West,
    ];

    /// Next bearing in the cycle NORTH → EAST → SOUTH → WEST → NORTH
    #[must_use]
    pub fn clockwise(self) -> Self {
        match self {
            Bearing::North => Bearing::East,
            Bearing::East => Bearing::South,
            Bearing::South => Bearing::West,
            Bearing::West => Bearing::North,
        }
    }

    /// Previous bearing in the clockwise cycle
    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        self.clockwise().clockwise().clockwise()
    }

    /// Displacement produced by one forward move
    pub fn unit_vector(self) -> (i64, i64) {
        match self {
            Bearing::North => (0, 1),
            Bearing::East => (1, 0),
            Bearing::South => (0, -1),
            Bearing::West => (-1, 0),
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bearing::North => "NORTH",
            Bearing::East => "EAST",
            Bearing::South => "SOUTH",
            Bearing::West => "WEST",
        };
        f.write_str(name)
    }
}

/// Tracks bearing and position while instructions are replayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    position: Position,
    bearing: Bearing,
}

impl Navigator {
    /// Navigator at the origin, facing north
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_forward(&mut self) {
        self.position = self.position.step(self.bearing);
    }

    pub fn turn_right(&mut self) {
        self.bearing = self.bearing.clockwise();
    }

    /// Three right turns.
    pub fn turn_left(&mut self) {
        self.turn_right();
        self.turn_right();
        self.turn_right();
    }

    /// Snapshot of the current position
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// Apply a single instruction
    pub fn apply(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Forward => self.move_forward(),
            Instruction::Right => self.turn_right(),
            Instruction::Left => self.turn_left(),
        }
    }

    /// Apply every instruction in order
    pub fn apply_all<I>(&mut self, instructions: I)
    where
        I: IntoIterator<Item = Instruction>,
    {
        for instruction in instructions {
            self.apply(instruction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_initial_state() {
        let navigator = Navigator::new();
        assert_eq!(navigator.position(), Position::ORIGIN);
        assert_eq!(navigator.bearing(), Bearing::North);
    }

    #[rstest]
    #[case(Bearing::North, Bearing::East)]
    #[case(Bearing::East, Bearing::South)]
    #[case(Bearing::South, Bearing::West)]
    #[case(Bearing::West, Bearing::North)]
    fn test_clockwise_cycle(#[case] from: Bearing, #[case] to: Bearing) {
        assert_eq!(from.clockwise(), to);
        assert_eq!(to.counter_clockwise(), from);
    }

    #[rstest]
    #[case(Bearing::North, Position::new(0, 1))]
    #[case(Bearing::East, Position::new(1, 0))]
    #[case(Bearing::South, Position::new(0, -1))]
    #[case(Bearing::West, Position::new(-1, 0))]
    fn test_step_follows_bearing(#[case] bearing: Bearing, #[case] expected: Position) {
        assert_eq!(Position::ORIGIN.step(bearing), expected);
    }

    #[test]
    fn test_turns_do_not_move() {
        let mut navigator = Navigator::new();
        navigator.turn_right();
        navigator.turn_left();
        navigator.turn_left();

        assert_eq!(navigator.position(), Position::ORIGIN);
        assert_eq!(navigator.bearing(), Bearing::West);
    }

    #[test]
    fn test_four_right_turns_restore_bearing() {
        let mut navigator = Navigator::new();
        navigator.move_forward();
        for _ in 0..4 {
            navigator.turn_right();
        }

        assert_eq!(navigator.bearing(), Bearing::North);
        assert_eq!(navigator.position(), Position::new(0, 1));
    }

    #[test]
    fn test_apply_dispatches_each_instruction() {
        let mut navigator = Navigator::new();
        navigator.apply_all([Instruction::Right, Instruction::Forward, Instruction::Left]);

        assert_eq!(navigator.position(), Position::new(1, 0));
        assert_eq!(navigator.bearing(), Bearing::North);
    }

    #[test]
    fn test_position_snapshot_is_detached() {
        let mut navigator = Navigator::new();
        let before = navigator.position();
        navigator.move_forward();

        assert_eq!(before, Position::ORIGIN);
        assert_eq!(navigator.position(), Position::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(5, -2).to_string(), "(5, -2)");
        assert_eq!(Bearing::South.to_string(), "SOUTH");
    }
}
