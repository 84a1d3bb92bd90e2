//! Rope Bridge.

use arrayvec::ArrayVec;
use rustc_hash::FxHashSet;

use crate::error::malformed;
use crate::{number, Result};

pub const MAX_KNOTS: usize = 10;

pub type Knot = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {Up, Down, Left, Right}

impl Direction {
    fn parse(s: &str) -> Option<Direction> {
        match s {
            "U" => Some(Direction::Up), "D" => Some(Direction::Down),
            "L" => Some(Direction::Left), "R" => Some(Direction::Right),
            _ => None
        }
    }

    fn step(self) -> Knot {
        match self {
            Direction::Up => (0, 1), Direction::Down => (0, -1),
            Direction::Left => (-1, 0), Direction::Right => (1, 0),
        }
    }
}

pub struct Rope {
    knots: ArrayVec<Knot, MAX_KNOTS>,
}

impl Rope {
    /// A rope of `len` knots, all at the origin. `len` is clamped to
    /// 1 ..= [`MAX_KNOTS`].
    pub fn new(len: usize) -> Rope {
        Rope { knots: std::iter::repeat((0, 0)).take(len.clamp(1, MAX_KNOTS)).collect() }
    }

    pub fn head(&self) -> Knot {self.knots[0]}

    pub fn tail(&self) -> Knot {self.knots[self.knots.len() - 1]}

    pub fn move_head(&mut self, dir: Direction) {
        let (dx, dy) = dir.step();
        self.knots[0].0 += dx;
        self.knots[0].1 += dy;
        for i in 1 .. self.knots.len() {
            let (hx, hy) = self.knots[i - 1];
            let (tx, ty) = &mut self.knots[i];
            // still touching, nothing further down the rope moves either
            if (hx - *tx).abs() <= 1 && (hy - *ty).abs() <= 1 {break}
            *tx += (hx - *tx).signum();
            *ty += (hy - *ty).signum();
        }
    }
}

pub fn parse_motion(line_no: usize, line: &str) -> Result<(Direction, u32)> {
    let (dir, count) = line.trim().split_once(' ').ok_or_else(|| malformed(line_no, format!("not a motion: {:?}", line)))?;
    let dir = Direction::parse(dir).ok_or_else(|| malformed(line_no, format!("unknown direction {:?}", dir)))?;
    Ok((dir, number(count)?))
}

pub fn tail_positions(input: &str, knots: usize) -> Result<FxHashSet<Knot>> {
    let mut rope = Rope::new(knots);
    let mut visited = FxHashSet::default();
    visited.insert(rope.tail());
    for (ix, line) in input.trim().lines().enumerate() {
        let (dir, count) = parse_motion(ix + 1, line)?;
        for _ in 0 .. count {
            rope.move_head(dir);
            visited.insert(rope.tail());
        }
    }
    Ok(visited)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(tail_positions(input, if part == 1 {2} else {10})?.len().to_string())
}
