//! Regolith Reservoir.

use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::malformed;
use crate::{number, Result};

pub type Point = (i32, i32);

pub const SOURCE: Point = (500, 0);

pub struct Cave {
    rock: FxHashSet<Point>,
    sand: FxHashSet<Point>,
    bottom: i32,
    /// With a floor, sand rests on `bottom + 2`; without, it falls past
    /// `bottom` into the abyss.
    floor: bool,
}

impl Cave {
    pub fn parse(input: &str) -> Result<Cave> {
        let point = Regex::new(r"(\d+),(\d+)").expect("point pattern is valid");
        let mut rock = FxHashSet::default();
        for (ix, line) in input.trim().lines().enumerate() {
            let corners = point.captures_iter(line)
                .map(|caps| -> Result<Point> {Ok((number(&caps[1])?, number(&caps[2])?))})
                .collect::<Result<Vec<_>>>()?;
            if corners.is_empty() {return Err(malformed(ix + 1, "rock path without points"))}
            if corners.len() == 1 {rock.insert(corners[0]);}
            for (&(x0, y0), &(x1, y1)) in corners.iter().tuple_windows() {
                if x0 != x1 && y0 != y1 {
                    return Err(malformed(ix + 1, format!("diagonal rock from {},{} to {},{}", x0, y0, x1, y1)));
                }
                for x in x0.min(x1) ..= x0.max(x1) {
                    for y in y0.min(y1) ..= y0.max(y1) {
                        rock.insert((x, y));
                    }
                }
            }
        }
        let bottom = rock.iter().map(|&(_, y)| y).max().ok_or_else(|| malformed(1, "the cave has no rock"))?;
        debug!(rocks = rock.len(), bottom, "scanned cave");
        Ok(Cave { rock, sand: FxHashSet::default(), bottom, floor: false })
    }

    pub fn with_floor(mut self) -> Cave {self.floor = true; self}

    pub fn rock_count(&self) -> usize {self.rock.len()}

    pub fn sand_count(&self) -> usize {self.sand.len()}

    fn is_blocked(&self, p: Point) -> bool {
        self.rock.contains(&p) || self.sand.contains(&p) || (self.floor && p.1 == self.bottom + 2)
    }

    /// Drops one unit of sand from [`SOURCE`]; returns where it came to
    /// rest, or `None` when it falls into the abyss or the source is
    /// already buried.
    pub fn drop_sand(&mut self) -> Option<Point> {
        if self.is_blocked(SOURCE) {return None}
        let (mut x, mut y) = SOURCE;
        loop {
            if !self.floor && y > self.bottom {return None}
            match [(x, y + 1), (x - 1, y + 1), (x + 1, y + 1)].into_iter().find(|&p| !self.is_blocked(p)) {
                Some((nx, ny)) => {x = nx; y = ny},
                None => {
                    self.sand.insert((x, y));
                    return Some((x, y));
                }
            }
        }
    }

    /// Drops sand until a unit fails to come to rest.
    pub fn fill(&mut self) -> usize {
        while self.drop_sand().is_some() {}
        self.sand_count()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let cave = Cave::parse(input)?;
    let mut cave = if part == 1 {cave} else {cave.with_floor()};
    Ok(cave.fill().to_string())
}
