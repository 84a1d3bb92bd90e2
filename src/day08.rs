//! Treetop Tree House.

use bitvec::prelude::*;

use crate::error::malformed;
use crate::Result;

pub struct Forest {
    heights: Vec<u8>,
    rows: usize,
    cols: usize,
}

const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Forest {
    pub fn parse(input: &str) -> Result<Forest> {
        let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |line| line.len());
        let mut heights = Vec::with_capacity(lines.len() * cols);
        for (ix, line) in lines.iter().enumerate() {
            if line.len() != cols {return Err(malformed(ix + 1, format!("expected {} trees", cols)))}
            for &c in line.as_bytes() {
                if !c.is_ascii_digit() {return Err(malformed(ix + 1, format!("unexpected tree {:?}", c as char)))}
                heights.push(c - b'0');
            }
        }
        Ok(Forest { heights, rows: lines.len(), cols })
    }

    fn height(&self, ri: usize, ci: usize) -> u8 {self.heights[ri * self.cols + ci]}

    /// Trees from (ri, ci) outward, the tree itself excluded.
    fn line_of_sight(&self, ri: usize, ci: usize, (dr, dc): (isize, isize)) -> impl Iterator<Item = u8> + '_ {
        (1 ..).map_while(move |n| {
            let r = ri.checked_add_signed(n * dr).filter(|&r| r < self.rows)?;
            let c = ci.checked_add_signed(n * dc).filter(|&c| c < self.cols)?;
            Some(self.height(r, c))
        })
    }

    pub fn visible_count(&self) -> usize {
        let mut visible = bitvec![0; self.heights.len()];
        for ri in 0 .. self.rows {
            for ci in 0 .. self.cols {
                let h = self.height(ri, ci);
                let seen = DIRS.iter().any(|&dir| self.line_of_sight(ri, ci, dir).all(|other| other < h));
                visible.set(ri * self.cols + ci, seen);
            }
        }
        visible.count_ones()
    }

    pub fn scenic_score(&self, ri: usize, ci: usize) -> usize {
        let h = self.height(ri, ci);
        DIRS.iter().map(|&dir| {
            let mut seen = 0;
            for other in self.line_of_sight(ri, ci, dir) {
                seen += 1;
                if other >= h {break}
            }
            seen
        }).product()
    }

    pub fn best_scenic_score(&self) -> usize {
        (0 .. self.rows).flat_map(|ri| (0 .. self.cols).map(move |ci| (ri, ci)))
            .map(|(ri, ci)| self.scenic_score(ri, ci))
            .max().unwrap_or(0)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let forest = Forest::parse(input)?;
    Ok((if part == 1 {forest.visible_count()} else {forest.best_scenic_score()}).to_string())
}
