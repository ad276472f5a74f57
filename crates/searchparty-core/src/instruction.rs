//! Navigation instructions.
//!
//! An [`Instruction`] is one discrete command replayed against a
//! [`Navigator`](crate::Navigator). The set is closed: every producer must
//! map its own symbols onto these three variants before handing them over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single navigation command.
///
/// On the wire instructions travel as lowercase symbols (`"forward"`,
/// `"left"`, `"right"`); for display they are rendered upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Advance one unit along the current bearing
    Forward,
    /// Turn 90° counter-clockwise
    Left,
    /// Turn 90° clockwise
    Right,
}

impl Instruction {
    /// All instruction variants, in declaration order
    pub const ALL: [Instruction; 3] = [Instruction::Forward, Instruction::Left, Instruction::Right];

    /// Upper-case symbol for this instruction
    pub fn as_str(&self) -> &'static str {
        match self {
            Instruction::Forward => "FORWARD",
            Instruction::Left => "LEFT",
            Instruction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_wire_representation_is_lowercase() {
        let json = serde_json::to_string(&Instruction::ALL).unwrap();
        assert_eq!(json, r#"["forward","left","right"]"#);

        let parsed: Vec<Instruction> = serde_json::from_str(r#"["right","forward"]"#).unwrap();
        assert_eq!(parsed, vec![Instruction::Right, Instruction::Forward]);
    }

    #[rstest]
    #[case(r#""FORWARD""#)]
    #[case(r#""Left""#)]
    #[case(r#""backward""#)]
    fn test_wire_form_only_accepts_lowercase_symbols(#[case] json: &str) {
        assert!(serde_json::from_str::<Instruction>(json).is_err());
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Instruction::Forward.to_string(), "FORWARD");
        assert_eq!(Instruction::Right.to_string(), "RIGHT");
    }
}
