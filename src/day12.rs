//! Hill Climbing Algorithm.

use std::collections::VecDeque;

use bitvec::prelude::*;
use tracing::debug;

use crate::error::malformed;
use crate::{Error, Result};

pub struct HeightMap {
    heights: Vec<u8>,
    cols: usize,
    start: usize,
    end: usize,
}

impl HeightMap {
    pub fn parse(input: &str) -> Result<HeightMap> {
        let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |line| line.len());
        let (mut start, mut end) = (None, None);
        let mut heights = Vec::with_capacity(lines.len() * cols);
        for (ri, line) in lines.iter().enumerate() {
            if line.len() != cols {return Err(malformed(ri + 1, format!("expected {} columns", cols)))}
            for &c in line.as_bytes() {
                let h = match c {
                    b'S' => {start = Some(heights.len()); b'a'},
                    b'E' => {end = Some(heights.len()); b'z'},
                    b'a' ..= b'z' => c,
                    _ => return Err(malformed(ri + 1, format!("unexpected height {:?}", c as char)))
                };
                heights.push(h);
            }
        }
        let (Some(start), Some(end)) = (start, end) else {
            return Err(malformed(1, "map needs both S and E"));
        };
        Ok(HeightMap { heights, cols, start, end })
    }

    pub fn start(&self) -> usize {self.start}

    pub fn end(&self) -> usize {self.end}

    fn neighbours(&self, at: usize) -> impl Iterator<Item = usize> + '_ {
        let (ri, ci) = (at / self.cols, at % self.cols);
        let rows = self.heights.len() / self.cols;
        [
            (ri > 0).then(|| at - self.cols),
            (ri + 1 < rows).then(|| at + self.cols),
            (ci > 0).then(|| at - 1),
            (ci + 1 < self.cols).then(|| at + 1),
        ].into_iter().flatten()
    }

    /// Fewest steps from `from` to any cell satisfying `is_goal`, where
    /// `can_step(height_here, height_there)` decides each move.
    pub fn bfs(&self, from: usize, is_goal: impl Fn(usize) -> bool, can_step: impl Fn(u8, u8) -> bool) -> Option<usize> {
        let mut seen = bitvec![0; self.heights.len()];
        let mut queue = VecDeque::from([(from, 0)]);
        seen.set(from, true);
        while let Some((at, dist)) = queue.pop_front() {
            if is_goal(at) {return Some(dist)}
            for next in self.neighbours(at) {
                if !seen[next] && can_step(self.heights[at], self.heights[next]) {
                    seen.set(next, true);
                    queue.push_back((next, dist + 1));
                }
            }
        }
        None
    }

    pub fn climb(&self) -> Option<usize> {
        self.bfs(self.start, |at| at == self.end, |here, there| there <= here + 1)
    }

    /// Walks down from the summit, so the first lowland cell reached is the
    /// closest of them all.
    pub fn best_trail(&self) -> Option<usize> {
        self.bfs(self.end, |at| self.heights[at] == b'a', |here, there| here <= there + 1)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = HeightMap::parse(input)?;
    debug!(cells = map.heights.len(), cols = map.cols, start = map.start, end = map.end, "height map");
    let steps = if part == 1 {map.climb()} else {map.best_trail()};
    steps.map(|steps| steps.to_string()).ok_or(Error::NoAnswer("the summit is unreachable"))
}
