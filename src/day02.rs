//! Rock Paper Scissors.

use crate::error::malformed;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {Rock, Paper, Scissors}

impl Shape {
    fn from_column(c: u8) -> Option<Shape> {
        match c {
            b'A' | b'X' => Some(Shape::Rock),
            b'B' | b'Y' => Some(Shape::Paper),
            b'C' | b'Z' => Some(Shape::Scissors),
            _ => None
        }
    }

    pub fn score(self) -> u32 {self as u32 + 1}

    /// The shape that beats `self`.
    pub fn winner(self) -> Shape {
        match self {Shape::Rock => Shape::Paper, Shape::Paper => Shape::Scissors, Shape::Scissors => Shape::Rock}
    }

    /// The shape `self` beats.
    pub fn loser(self) -> Shape {
        match self {Shape::Rock => Shape::Scissors, Shape::Paper => Shape::Rock, Shape::Scissors => Shape::Paper}
    }
}

pub fn play(mine: Shape, theirs: Shape) -> u32 {
    mine.score() + if mine == theirs.winner() {6} else if mine == theirs {3} else {0}
}

/// Part 2 reads the second column as the outcome to aim for.
pub fn shape_for_outcome(theirs: Shape, outcome: u8) -> Option<Shape> {
    match outcome {
        b'X' => Some(theirs.loser()),
        b'Y' => Some(theirs),
        b'Z' => Some(theirs.winner()),
        _ => None
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut score = 0;
    for (ix, line) in input.trim().lines().enumerate() {
        let &[first, b' ', second] = line.trim().as_bytes() else {
            return Err(malformed(ix + 1, format!("expected two columns, got {:?}", line)));
        };
        let theirs = Shape::from_column(first);
        let mine = if part == 1 {Shape::from_column(second)} else {theirs.and_then(|t| shape_for_outcome(t, second))};
        let (Some(theirs), Some(mine)) = (theirs, mine) else {
            return Err(malformed(ix + 1, format!("unknown strategy {:?}", line)));
        };
        score += play(mine, theirs);
    }
    Ok(score.to_string())
}
