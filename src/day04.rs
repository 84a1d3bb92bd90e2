//! Camp Cleanup.

use std::ops::RangeInclusive;

use crate::error::malformed;
use crate::{number, Result};

pub type Sections = RangeInclusive<u32>;

pub fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

pub fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

fn sections(line_no: usize, s: &str) -> Result<Sections> {
    let (first, last) = s.split_once('-').ok_or_else(|| malformed(line_no, format!("no '-' in {:?}", s)))?;
    Ok(number(first)? ..= number(last)?)
}

pub fn parse_pair(line_no: usize, line: &str) -> Result<(Sections, Sections)> {
    let (a, b) = line.trim().split_once(',').ok_or_else(|| malformed(line_no, format!("no ',' in {:?}", line)))?;
    Ok((sections(line_no, a)?, sections(line_no, b)?))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut count = 0;
    for (ix, line) in input.trim().lines().enumerate() {
        let (a, b) = parse_pair(ix + 1, line)?;
        let hit = if part == 1 {contains(&a, &b) || contains(&b, &a)} else {overlaps(&a, &b)};
        count += hit as usize;
    }
    Ok(count.to_string())
}
