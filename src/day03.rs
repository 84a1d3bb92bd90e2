//! Rucksack Reorganization.

use itertools::Itertools;

use crate::error::malformed;
use crate::Result;

pub fn priority(item: u8) -> Option<u32> {
    match item {
        b'a' ..= b'z' => Some((item - b'a') as u32 + 1),
        b'A' ..= b'Z' => Some((item - b'A') as u32 + 27),
        _ => None
    }
}

/// Set of priorities present, one bit each.
fn contents(line_no: usize, items: &[u8]) -> Result<u64> {
    items.iter().try_fold(0, |set, &item| match priority(item) {
        Some(p) => Ok(set | 1 << p),
        None => Err(malformed(line_no, format!("unexpected item {:?}", item as char))),
    })
}

fn common_priority(line_no: usize, sets: impl IntoIterator<Item = u64>) -> Result<u32> {
    let common = sets.into_iter().fold(u64::MAX, |acc, set| acc & set);
    if common.count_ones() != 1 {
        return Err(malformed(line_no, format!("expected one shared item, found {}", common.count_ones())));
    }
    Ok(common.trailing_zeros())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let lines = input.trim().lines().map(str::trim).enumerate().map(|(ix, line)| (ix + 1, line));
    let mut sum = 0;
    if part == 1 {
        for (line_no, line) in lines {
            let (left, right) = line.as_bytes().split_at(line.len() / 2);
            sum += common_priority(line_no, [contents(line_no, left)?, contents(line_no, right)?])?;
        }
    } else {
        for group in &lines.chunks(3) {
            let group = group.map(|(line_no, line)| contents(line_no, line.as_bytes()).map(|set| (line_no, set)))
                .collect::<Result<Vec<_>>>()?;
            let line_no = group[0].0;
            if group.len() != 3 {return Err(malformed(line_no, "incomplete group of three"))}
            sum += common_priority(line_no, group.into_iter().map(|(_, set)| set))?;
        }
    }
    Ok(sum.to_string())
}
