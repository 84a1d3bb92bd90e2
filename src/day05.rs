//! Supply Stacks.

use regex::Regex;

use crate::error::malformed;
use crate::{integer_words, number, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cargo {
    stacks: Vec<Vec<u8>>,
}

impl Cargo {
    /// Builds the stacks from the drawing, label line last.
    pub fn from_drawing(lines: &[&str]) -> Result<Cargo> {
        let Some((labels, rows)) = lines.split_last() else {
            return Err(malformed(1, "empty stack drawing"));
        };
        let count = integer_words::<usize>(labels)?.last().copied()
            .ok_or_else(|| malformed(lines.len(), "stack labels have no numbers"))?;
        let mut stacks = vec![Vec::new(); count];
        for row in rows.iter().rev() {
            for (ix, stack) in stacks.iter_mut().enumerate() {
                match row.as_bytes().get(4 * ix + 1) {
                    Some(&c) if c.is_ascii_uppercase() => stack.push(c),
                    _ => ()
                }
            }
        }
        Ok(Cargo { stacks })
    }

    pub fn tops(&self) -> String {
        self.stacks.iter().filter_map(|stack| stack.last().map(|&c| c as char)).collect()
    }

    /// Moves `count` crates from stack `from` to stack `to` (0-based); one at
    /// a time reverses their order, `at_once` keeps it.
    pub fn move_crates(&mut self, count: usize, from: usize, to: usize, at_once: bool) -> std::result::Result<(), String> {
        let stacks = self.stacks.len();
        if from >= stacks || to >= stacks {return Err(format!("only {} stacks", stacks))}
        let height = self.stacks[from].len();
        let at = height.checked_sub(count).ok_or_else(|| format!("stack {} holds only {}", from + 1, height))?;
        let mut moved = self.stacks[from].split_off(at);
        if !at_once {moved.reverse()}
        self.stacks[to].extend(moved);
        Ok(())
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let lines = input.lines().collect::<Vec<_>>();
    let gap = lines.iter().position(|line| line.trim().is_empty())
        .ok_or_else(|| malformed(lines.len(), "no blank line after the drawing"))?;
    let mut cargo = Cargo::from_drawing(&lines[.. gap])?;

    let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("move pattern is valid");
    for (ix, line) in lines.iter().enumerate().skip(gap + 1) {
        if line.trim().is_empty() {continue}
        let caps = re.captures(line.trim()).ok_or_else(|| malformed(ix + 1, format!("not a move: {:?}", line)))?;
        let (count, from, to): (usize, usize, usize) = (number(&caps[1])?, number(&caps[2])?, number(&caps[3])?);
        if from == 0 || to == 0 {return Err(malformed(ix + 1, "stacks are numbered from 1"))}
        cargo.move_crates(count, from - 1, to - 1, part == 2).map_err(|reason| malformed(ix + 1, reason))?;
    }
    Ok(cargo.tops())
}
