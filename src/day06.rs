//! Tuning Trouble.

use crate::{Error, Result};

/// Number of characters read once the last `size` of them are pairwise
/// distinct.
pub fn marker_end(stream: &[u8], size: usize) -> Option<usize> {
    if size == 0 {return Some(0)}
    stream.windows(size).position(|window| {
        let mut seen = [false; 256];
        window.iter().all(|&c| !std::mem::replace(&mut seen[c as usize], true))
    }).map(|start| start + size)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let size = if part == 1 {4} else {14};
    marker_end(input.trim().as_bytes(), size)
        .map(|end| end.to_string())
        .ok_or(Error::NoAnswer("no marker in the datastream"))
}
