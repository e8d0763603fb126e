use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_FORMATION: &str = "4-3-3";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationParseError {
    #[error("formation '{0}' needs at least a defender and a midfield line")]
    TooFewLines(String),
    #[error("formation '{formation}' has an invalid line '{line}'")]
    InvalidLine { formation: String, line: String },
}

/// Outfield shape written as "D-M-A". Extra middle lines ("4-2-3-1") count as midfield.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Formation {
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
}

impl Formation {
    pub fn new(defenders: u8, midfielders: u8, forwards: u8) -> Self {
        Formation {
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Sum of per-line differences between this shape and the lineup's.
    pub fn mismatch(&self, defenders: usize, midfielders: usize, forwards: usize) -> usize {
        (self.defenders as usize).abs_diff(defenders)
            + (self.midfielders as usize).abs_diff(midfielders)
            + (self.forwards as usize).abs_diff(forwards)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::new(4, 3, 3)
    }
}

impl Display for Formation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

impl FromStr for Formation {
    type Err = FormationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .trim()
            .split('-')
            .map(|line| {
                line.trim().parse::<u8>().map_err(|_| FormationParseError::InvalidLine {
                    formation: s.to_string(),
                    line: line.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match lines.as_slice() {
            [] | [_] => Err(FormationParseError::TooFewLines(s.to_string())),
            [defenders, midfielders] => Ok(Formation::new(*defenders, *midfielders, 1)),
            [defenders, middle @ .., forwards] => Ok(Formation::new(
                *defenders,
                middle.iter().fold(0u8, |acc, m| acc.saturating_add(*m)),
                *forwards,
            )),
        }
    }
}
