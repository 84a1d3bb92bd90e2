//! Calorie Counting.

use itertools::Itertools;

use crate::{number, Result};

/// Calorie total carried by each elf, in input order.
pub fn elf_totals(input: &str) -> Result<Vec<u64>> {
    let mut totals = Vec::new();
    for (is_gap, mut group) in &input.trim().lines().chunk_by(|line| line.trim().is_empty()) {
        if is_gap {continue}
        totals.push(group.try_fold(0, |sum, meal| number::<u64>(meal).map(|kcal| sum + kcal))?);
    }
    Ok(totals)
}

pub fn sum_of_largest(count: usize, totals: &[u64]) -> u64 {
    totals.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(count).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let totals = elf_totals(input)?;
    Ok(sum_of_largest(if part == 1 {1} else {3}, &totals).to_string())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        1000
        2000
        3000

        4000

        5000
        6000

        7000
        8000
        9000

        10000
    "};

    #[test]
    fn groups() {
        let totals = elf_totals("123\n100\n\n100\n\n500\n100\n100\n\n200\n").unwrap();
        assert_eq!(totals, vec![223, 100, 700, 200]);
        assert_eq!(sum_of_largest(1, &totals), 700);
        assert_eq!(sum_of_largest(3, &totals), 1123);
    }

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "24000");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "45000");
    }

    #[test]
    fn rejects_words() {
        assert!(elf_totals("100\nlots\n").is_err());
    }
}
