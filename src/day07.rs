//! No Space Left On Device.
//!
//! The terminal transcript is lexed line by line into [`Token`]s, then folded
//! into a map from directory path to the total size beneath it.

use rustc_hash::FxHashMap;

use crate::error::malformed;
use crate::{number, Error, Result};

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;
const SMALL: u64 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    ChangeDir(&'a str),
    List,
    Directory(&'a str),
    File(u64),
}

pub fn lex(line_no: usize, line: &str) -> Result<Token<'_>> {
    let line = line.trim();
    if let Some(dir) = line.strip_prefix("$ cd ") {
        Ok(Token::ChangeDir(dir.trim()))
    } else if line == "$ ls" {
        Ok(Token::List)
    } else if let Some(dir) = line.strip_prefix("dir ") {
        Ok(Token::Directory(dir.trim()))
    } else {
        let (size, _name) = line.split_once(' ').ok_or_else(|| malformed(line_no, format!("unknown line {:?}", line)))?;
        Ok(Token::File(number(size)?))
    }
}

/// Total size per directory path, subdirectories included. Paths are
/// written `/`, `/a`, `/a/e`.
pub type DirSizes = FxHashMap<String, u64>;

pub fn dir_sizes<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> DirSizes {
    let mut sizes = DirSizes::default();
    let mut cwd: Vec<&str> = Vec::new();
    let path = |parts: &[&str]| format!("/{}", parts.join("/"));
    sizes.insert(path(&cwd[..]), 0);
    for token in tokens {
        match token {
            Token::ChangeDir("/") => cwd.clear(),
            Token::ChangeDir("..") => {cwd.pop();},
            Token::ChangeDir(dir) => {
                cwd.push(dir);
                sizes.entry(path(&cwd[..])).or_insert(0);
            }
            Token::File(size) => {
                // every ancestor, the root included
                for depth in 0 ..= cwd.len() {
                    *sizes.entry(path(&cwd[.. depth])).or_insert(0) += size;
                }
            }
            Token::List | Token::Directory(_) => (),
        }
    }
    sizes
}

pub fn space_to_free(sizes: &DirSizes) -> u64 {
    let used = sizes.get("/").copied().unwrap_or(0);
    (NEEDED + used).saturating_sub(DISK)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let tokens = input.trim().lines().enumerate()
        .map(|(ix, line)| lex(ix + 1, line))
        .collect::<Result<Vec<_>>>()?;
    let sizes = dir_sizes(tokens);
    if part == 1 {
        Ok(sizes.values().filter(|&&size| size <= SMALL).sum::<u64>().to_string())
    } else {
        let goal = space_to_free(&sizes);
        sizes.values().filter(|&&size| size >= goal).min()
            .map(|size| size.to_string())
            .ok_or(Error::NoAnswer("no directory frees enough space"))
    }
}
