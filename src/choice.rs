//! # Choice
//! The three moves of rock-paper-scissors and their commitment codes.

use crate::error::Error;
use std::{fmt, str::FromStr};

/// A move in rock-paper-scissors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The numeric code that goes into the commitment preimage.
    pub fn code(self) -> u8 {
        match self {
            Choice::Rock => 1,
            Choice::Paper => 2,
            Choice::Scissors => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Choice::Rock => "r",
            Choice::Paper => "p",
            Choice::Scissors => "s",
        }
    }
}

impl FromStr for Choice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Choice::Rock),
            "p" => Ok(Choice::Paper),
            "s" => Ok(Choice::Scissors),
            other => Err(Error::UnrecognizedChoice(other.to_owned())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
