//! Advent of Code 2022, days 1 to 14.
//!
//! Every day exposes `solve(part, input)`; [`solve`] dispatches on the day
//! number the same way the runner in `main.rs` does.

use std::num::ParseIntError;
use std::str::FromStr;

pub mod error;
pub mod logging;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;

pub use error::{Error, Result};

pub fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
/// `None` when the result does not fit in a `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {if a == 0 || b == 0 {Some(0)} else {(a / gcd(a, b)).checked_mul(b)}}

pub fn number<T: FromStr<Err = ParseIntError>>(token: &str) -> Result<T> {
    token.trim().parse().map_err(|source| Error::NotANumber { token: token.to_string(), source })
}

/// Every whitespace-separated token of `line` that looks like an integer,
/// in order. Separators stuck to a token (`79,` or `2:`) are ignored, as are
/// tokens that are plainly words; a token that starts like a number but does
/// not parse is an error.
pub fn integer_words<T: FromStr<Err = ParseIntError>>(line: &str) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|token| token.trim_matches(|c: char| matches!(c, ',' | ':' | ';' | '.')))
        .filter(|&token| {
            let digits = token.strip_prefix('-').unwrap_or(token);
            digits.starts_with(|c: char| c.is_ascii_digit())
        })
        .map(number::<T>)
        .collect()
}

pub type Solver = fn(u8, &str) -> Result<String>;

pub const DAYS: [Solver; 14] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve, day06::solve, day07::solve,
    day08::solve, day09::solve, day10::solve, day11::solve, day12::solve, day13::solve, day14::solve,
];

pub fn solve(day: usize, part: u8, input: &str) -> Result<String> {
    let solver = day.checked_sub(1).and_then(|ix| DAYS.get(ix)).ok_or(Error::UnknownDay(day))?;
    solver(part, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_words_skip_words_and_separators() {
        assert_eq!(integer_words::<u64>("move 1 from 2 to 1").unwrap(), vec![1, 2, 1]);
        assert_eq!(integer_words::<u64>("  Starting items: 79, 98").unwrap(), vec![79, 98]);
        assert_eq!(integer_words::<i64>("addx -5").unwrap(), vec![-5]);
        assert!(integer_words::<u64>("  Operation: new = old * old").unwrap().is_empty());
    }

    #[test]
    fn integer_words_reject_malformed_numbers() {
        assert!(matches!(integer_words::<u64>("items: 12x"), Err(Error::NotANumber { .. })));
        assert!(matches!(integer_words::<u8>("items: 300"), Err(Error::NotANumber { .. })));
    }

    #[test]
    fn lcm_of_divisors() {
        assert_eq!([23, 19, 13, 17].into_iter().try_fold(1, lcm), Some(96577));
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(u64::MAX, 2), None);
    }

    #[test]
    fn unknown_day() {
        assert!(matches!(solve(0, 1, ""), Err(Error::UnknownDay(0))));
        assert!(matches!(solve(15, 1, ""), Err(Error::UnknownDay(15))));
    }
}
