//! Monkey in the Middle.
//!
//! Monkeys pass worry levels around in rounds. Each monkey, in index order,
//! drains its whole queue: inspect the front item, relieve it, pick a target
//! by a divisibility test and throw it to the back of the target's queue.
//! Items thrown to a monkey that already had its turn wait for the next
//! round.
//!
//! Part 1 relieves worry by dividing by 3 for 20 rounds. Part 2 keeps worry
//! levels bounded by reducing modulo the least common multiple of all test
//! divisors, which leaves every divisibility test unchanged, for 10000
//! rounds.

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, trace};

use crate::error::malformed;
use crate::{integer_words, lcm, Result};

pub type Worry = u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonkeyError {
    #[error("a game needs at least one monkey")]
    NoMonkeys,

    #[error("monkey {monkey} throws to monkey {target}, but there are only {count}")]
    UnknownTarget { monkey: usize, target: usize, count: usize },

    #[error("monkey {monkey} throws to itself")]
    SelfTarget { monkey: usize },

    #[error("monkey {monkey} tests divisibility by zero")]
    ZeroDivisor { monkey: usize },

    #[error("monkey {monkey} relieves worry by {relief:?}")]
    ZeroRelief { monkey: usize, relief: Relief },

    #[error("monkey has no items")]
    EmptyQueue,

    #[error("worry level {worry} overflows under {inspection}")]
    Overflow { worry: Worry, inspection: Inspection },

    #[error("least common multiple of the divisors overflows")]
    ModulusOverflow,
}

/// How a monkey changes a worry level while inspecting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inspection {
    Add(Worry),
    Multiply(Worry),
    Square,
}

impl Inspection {
    pub fn apply(self, worry: Worry) -> std::result::Result<Worry, MonkeyError> {
        let inspected = match self {
            Inspection::Add(k) => worry.checked_add(k),
            Inspection::Multiply(k) => worry.checked_mul(k),
            Inspection::Square => worry.checked_mul(worry),
        };
        inspected.ok_or(MonkeyError::Overflow { worry, inspection: self })
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspection::Add(k) => write!(f, "old + {k}"),
            Inspection::Multiply(k) => write!(f, "old * {k}"),
            Inspection::Square => write!(f, "old * old"),
        }
    }
}

/// How worry drops after an inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relief {
    DivideFloor(Worry),
    Modulo(Worry),
}

impl Relief {
    pub fn divisor(self) -> Worry {
        match self {Relief::DivideFloor(k) | Relief::Modulo(k) => k}
    }

    pub fn apply(self, worry: Worry) -> Worry {
        match self {
            Relief::DivideFloor(k) => worry / k,
            Relief::Modulo(m) => worry % m,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub divisor: Worry,
    pub if_true: usize,
    pub if_false: usize,
}

impl Route {
    pub fn target(&self, worry: Worry) -> usize {
        if worry % self.divisor == 0 {self.if_true} else {self.if_false}
    }
}

/// One stanza of the puzzle input, before a relief rule is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonkeyNotes {
    pub items: Vec<Worry>,
    pub inspection: Inspection,
    pub route: Route,
}

#[derive(Clone, Debug)]
pub struct Monkey {
    items: VecDeque<Worry>,
    inspection: Inspection,
    route: Route,
    relief: Relief,
    activity: u64,
}

impl Monkey {
    pub fn new(items: impl IntoIterator<Item = Worry>, inspection: Inspection, route: Route, relief: Relief) -> Self {
        Monkey { items: items.into_iter().collect(), inspection, route, relief, activity: 0 }
    }

    pub fn has_items(&self) -> bool {!self.items.is_empty()}

    pub fn items(&self) -> impl Iterator<Item = Worry> + '_ {self.items.iter().copied()}

    pub fn activity(&self) -> u64 {self.activity}

    pub fn route(&self) -> Route {self.route}

    /// Inspects and relieves the front item in place and counts the
    /// inspection. The item stays at the front.
    pub fn inspect_front(&mut self) -> std::result::Result<(), MonkeyError> {
        let front = self.items.front_mut().ok_or(MonkeyError::EmptyQueue)?;
        *front = self.relief.apply(self.inspection.apply(*front)?);
        self.activity += 1;
        Ok(())
    }

    pub fn route_target_for_front(&self) -> std::result::Result<usize, MonkeyError> {
        self.items.front().map(|&worry| self.route.target(worry)).ok_or(MonkeyError::EmptyQueue)
    }

    pub fn drop_front(&mut self) -> std::result::Result<Worry, MonkeyError> {
        self.items.pop_front().ok_or(MonkeyError::EmptyQueue)
    }

    pub fn add_item(&mut self, worry: Worry) {self.items.push_back(worry)}
}

/// Least common multiple of all test divisors.
pub fn divisor_modulus(divisors: impl IntoIterator<Item = Worry>) -> std::result::Result<Worry, MonkeyError> {
    divisors.into_iter().try_fold(1, lcm).ok_or(MonkeyError::ModulusOverflow)
}

/// Product of the two largest activity counts.
pub fn monkey_business(activity: &[u64]) -> u64 {
    activity.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(2).product()
}

#[derive(Clone, Debug)]
pub struct MonkeyGame {
    monkeys: Vec<Monkey>,
}

impl MonkeyGame {
    /// Rejects games whose routes point outside the troop, at the thrower
    /// itself, or test divisibility by zero, and games whose relief divides
    /// by zero. A monkey throwing to itself would keep the item in its own
    /// queue forever.
    pub fn new(monkeys: Vec<Monkey>) -> std::result::Result<Self, MonkeyError> {
        if monkeys.is_empty() {return Err(MonkeyError::NoMonkeys)}
        let count = monkeys.len();
        for (monkey, Monkey {route, ..}) in monkeys.iter().enumerate() {
            if route.divisor == 0 {return Err(MonkeyError::ZeroDivisor { monkey })}
            for target in [route.if_true, route.if_false] {
                if target >= count {return Err(MonkeyError::UnknownTarget { monkey, target, count })}
                if target == monkey {return Err(MonkeyError::SelfTarget { monkey })}
            }
        }
        if let Some((monkey, relief)) = monkeys.iter().map(|monkey| monkey.relief).find_position(|relief| relief.divisor() == 0) {
            return Err(MonkeyError::ZeroRelief { monkey, relief });
        }
        Ok(MonkeyGame { monkeys })
    }

    pub fn from_notes(notes: &[MonkeyNotes], relief: Relief) -> std::result::Result<Self, MonkeyError> {
        MonkeyGame::new(notes.iter().map(|note|
            Monkey::new(note.items.iter().copied(), note.inspection, note.route, relief)
        ).collect())
    }

    /// Divide-by-3 relief.
    pub fn gentle(notes: &[MonkeyNotes]) -> std::result::Result<Self, MonkeyError> {
        MonkeyGame::from_notes(notes, Relief::DivideFloor(3))
    }

    /// Modulo-LCM relief.
    pub fn stressful(notes: &[MonkeyNotes]) -> std::result::Result<Self, MonkeyError> {
        let modulus = divisor_modulus(notes.iter().map(|note| note.route.divisor))?;
        debug!(monkeys = notes.len(), modulus, "derived worry modulus");
        MonkeyGame::from_notes(notes, Relief::Modulo(modulus))
    }

    pub fn monkeys(&self) -> &[Monkey] {&self.monkeys}

    pub fn item_count(&self) -> usize {self.monkeys.iter().map(|monkey| monkey.items.len()).sum()}

    pub fn play_round(&mut self) -> std::result::Result<(), MonkeyError> {
        for ix in 0 .. self.monkeys.len() {
            while self.monkeys[ix].has_items() {
                let monkey = &mut self.monkeys[ix];
                monkey.inspect_front()?;
                let target = monkey.route_target_for_front()?;
                let worry = monkey.drop_front()?;
                self.monkeys[target].add_item(worry);
            }
        }
        Ok(())
    }

    pub fn play(&mut self, rounds: usize) -> std::result::Result<(), MonkeyError> {
        for round in 1 ..= rounds {
            self.play_round()?;
            trace!(round, activity = ?self.activity());
        }
        Ok(())
    }

    pub fn activity(&self) -> Vec<u64> {
        self.monkeys.iter().map(Monkey::activity).collect()
    }
}

fn parse_inspection(line_no: usize, line: &str) -> Result<Inspection> {
    let (_, expression) = line.split_once('=').ok_or_else(|| malformed(line_no, "operation without '='"))?;
    let operand = integer_words::<Worry>(expression)?.into_iter().next();
    Ok(match (expression.contains('*'), expression.contains('+'), operand) {
        (true, false, Some(k)) => Inspection::Multiply(k),
        (true, false, None) => Inspection::Square,
        (false, true, Some(k)) => Inspection::Add(k),
        (false, true, None) => Inspection::Multiply(2),
        _ => return Err(malformed(line_no, format!("unsupported operation {:?}", expression.trim()))),
    })
}

fn single_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(line_no: usize, line: &str) -> Result<T> {
    integer_words(line)?.into_iter().exactly_one()
        .map_err(|_| malformed(line_no, format!("expected exactly one number in {:?}", line.trim())))
}

pub fn parse(input: &str) -> Result<Vec<MonkeyNotes>> {
    let mut notes = Vec::new();
    let mut lines = input.lines().enumerate().map(|(ix, line)| (ix + 1, line));
    while let Some((header_no, header)) = lines.next() {
        if header.trim().is_empty() {continue}
        if !header.trim_start().starts_with("Monkey") {
            return Err(malformed(header_no, format!("expected a monkey header, got {:?}", header.trim())));
        }
        let id: usize = single_number(header_no, header)?;
        if id != notes.len() {
            return Err(malformed(header_no, format!("monkey {} listed in position {}", id, notes.len())));
        }

        let mut field = |name: &str| match lines.next() {
            Some((line_no, line)) if line.trim_start().starts_with(name) => Ok((line_no, line)),
            Some((line_no, line)) => Err(malformed(line_no, format!("expected {name:?} for monkey {id}, got {:?}", line.trim()))),
            None => Err(malformed(header_no, format!("monkey {id} lacks {name:?}"))),
        };
        let (_, items) = field("Starting items")?;
        let (op_no, op) = field("Operation")?;
        let (test_no, test) = field("Test")?;
        let (true_no, if_true) = field("If true")?;
        let (false_no, if_false) = field("If false")?;

        notes.push(MonkeyNotes {
            items: integer_words(items)?,
            inspection: parse_inspection(op_no, op)?,
            route: Route {
                divisor: single_number(test_no, test)?,
                if_true: single_number(true_no, if_true)?,
                if_false: single_number(false_no, if_false)?,
            },
        });
    }
    Ok(notes)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let notes = parse(input)?;
    let (mut game, rounds) = if part == 1 {
        (MonkeyGame::gentle(&notes)?, 20)
    } else {
        (MonkeyGame::stressful(&notes)?, 10_000)
    };
    game.play(rounds)?;
    let activity = game.activity();
    debug!(?activity, rounds, "game over");
    Ok(monkey_business(&activity).to_string())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::Error;

    const EXAMPLE: &str = indoc! {"
        Monkey 0:
          Starting items: 79, 98
          Operation: new = old * 19
          Test: divisible by 23
            If true: throw to monkey 2
            If false: throw to monkey 3

        Monkey 1:
          Starting items: 54, 65, 75, 74
          Operation: new = old + 6
          Test: divisible by 19
            If true: throw to monkey 2
            If false: throw to monkey 0

        Monkey 2:
          Starting items: 79, 60, 97
          Operation: new = old * old
          Test: divisible by 13
            If true: throw to monkey 1
            If false: throw to monkey 3

        Monkey 3:
          Starting items: 74
          Operation: new = old + 3
          Test: divisible by 17
            If true: throw to monkey 0
            If false: throw to monkey 1
    "};

    fn route(divisor: Worry, if_true: usize, if_false: usize) -> Route {
        Route { divisor, if_true, if_false }
    }

    fn example_notes() -> Vec<MonkeyNotes> {
        vec![
            MonkeyNotes { items: vec![79, 98], inspection: Inspection::Multiply(19), route: route(23, 2, 3) },
            MonkeyNotes { items: vec![54, 65, 75, 74], inspection: Inspection::Add(6), route: route(19, 2, 0) },
            MonkeyNotes { items: vec![79, 60, 97], inspection: Inspection::Square, route: route(13, 1, 3) },
            MonkeyNotes { items: vec![74], inspection: Inspection::Add(3), route: route(17, 0, 1) },
        ]
    }

    #[test]
    fn monkey_queue() {
        let mut monkey = Monkey::new([], Inspection::Multiply(10), route(1, 1, 1), Relief::DivideFloor(3));
        assert!(!monkey.has_items());
        assert_eq!(monkey.drop_front(), Err(MonkeyError::EmptyQueue));
        assert_eq!(monkey.inspect_front(), Err(MonkeyError::EmptyQueue));

        monkey.add_item(5);
        assert!(monkey.has_items());
        assert_eq!(monkey.drop_front(), Ok(5));
        assert!(!monkey.has_items());
    }

    #[test]
    fn monkey_inspects_in_place() {
        let mut monkey = Monkey::new([5, 7], Inspection::Multiply(10), route(1, 1, 1), Relief::DivideFloor(3));
        monkey.inspect_front().unwrap();
        assert_eq!(monkey.activity(), 1);
        assert_eq!(monkey.items().collect::<Vec<_>>(), vec![16, 7]);
        assert_eq!(monkey.route_target_for_front(), Ok(1));
        assert_eq!(monkey.drop_front(), Ok(16));
    }

    #[test]
    fn inspections() {
        assert_eq!(Inspection::Multiply(19).apply(1), Ok(19));
        assert_eq!(Inspection::Square.apply(2), Ok(4));
        assert_eq!(Inspection::Add(5).apply(2), Ok(7));
        assert_eq!(
            Inspection::Square.apply(1 << 32),
            Err(MonkeyError::Overflow { worry: 1 << 32, inspection: Inspection::Square })
        );
    }

    #[test]
    fn routes() {
        let route = route(19, 2, 0);
        assert_eq!(route.target(19), 2);
        assert_eq!(route.target(18), 0);
    }

    #[test]
    fn parse_example() {
        assert_eq!(parse(EXAMPLE).unwrap(), example_notes());
    }

    #[test]
    fn parse_operations() {
        assert_eq!(parse_inspection(1, "  Operation: new = old * 19").unwrap(), Inspection::Multiply(19));
        assert_eq!(parse_inspection(1, "  Operation: new = old * old").unwrap(), Inspection::Square);
        assert_eq!(parse_inspection(1, "  Operation: new = old + 5").unwrap(), Inspection::Add(5));
        assert_eq!(parse_inspection(1, "  Operation: new = old + old").unwrap(), Inspection::Multiply(2));
        assert!(parse_inspection(1, "  Operation: new = old - 5").is_err());
    }

    #[test]
    fn parse_rejects_bad_numbers_and_order() {
        let bad_item = EXAMPLE.replace("79, 98", "79, 9x8");
        assert!(matches!(parse(&bad_item), Err(Error::NotANumber { .. })));

        let swapped = EXAMPLE.replace("Monkey 1:", "Monkey 7:");
        assert!(matches!(parse(&swapped), Err(Error::Malformed { line: 8, .. })));

        let truncated = EXAMPLE.lines().take(4).join("\n");
        assert!(matches!(parse(&truncated), Err(Error::Malformed { line: 1, .. })));

        let misspelt = EXAMPLE.replacen("Operation:", "Operatoin:", 1);
        assert!(matches!(parse(&misspelt), Err(Error::Malformed { line: 3, .. })));
    }

    #[test]
    fn gentle_example_game() {
        let mut game = MonkeyGame::gentle(&example_notes()).unwrap();
        game.play(20).unwrap();
        assert_eq!(game.activity(), vec![101, 95, 7, 105]);
        assert_eq!(monkey_business(&game.activity()), 10605);
    }

    #[test]
    fn first_gentle_round() {
        let mut game = MonkeyGame::gentle(&example_notes()).unwrap();
        game.play_round().unwrap();
        let queues = game.monkeys().iter().map(|monkey| monkey.items().collect::<Vec<_>>()).collect::<Vec<_>>();
        assert_eq!(queues, vec![
            vec![20, 23, 27, 26],
            vec![2080, 25, 167, 207, 401, 1046],
            vec![],
            vec![],
        ]);
    }

    #[test]
    fn stressful_example_game() {
        assert_eq!(divisor_modulus([23, 19, 13, 17]), Ok(96577));
        let mut game = MonkeyGame::stressful(&example_notes()).unwrap();
        assert!(game.monkeys().iter().all(|monkey| monkey.relief == Relief::Modulo(96577)));
        game.play(10_000).unwrap();
        assert_eq!(game.activity(), vec![52166, 47830, 1938, 52013]);
        assert_eq!(monkey_business(&game.activity()), 2713310158);
    }

    #[test]
    fn solve_example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "10605");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "2713310158");
    }

    #[test]
    fn self_routing_is_rejected() {
        let lonely = vec![Monkey::new([1, 2], Inspection::Add(1), route(2, 0, 0), Relief::DivideFloor(3))];
        assert_eq!(MonkeyGame::new(lonely).unwrap_err(), MonkeyError::SelfTarget { monkey: 0 });
    }

    #[test]
    fn bad_configurations_are_rejected() {
        assert_eq!(MonkeyGame::new(vec![]).unwrap_err(), MonkeyError::NoMonkeys);

        let mut notes = example_notes();
        notes[3].route.if_false = 4;
        assert_eq!(
            MonkeyGame::gentle(&notes).unwrap_err(),
            MonkeyError::UnknownTarget { monkey: 3, target: 4, count: 4 }
        );

        let mut notes = example_notes();
        notes[1].route.divisor = 0;
        assert_eq!(MonkeyGame::stressful(&notes).unwrap_err(), MonkeyError::ZeroDivisor { monkey: 1 });
        assert_eq!(MonkeyGame::gentle(&notes).unwrap_err(), MonkeyError::ZeroDivisor { monkey: 1 });

        assert_eq!(
            MonkeyGame::from_notes(&example_notes(), Relief::Modulo(0)).unwrap_err(),
            MonkeyError::ZeroRelief { monkey: 0, relief: Relief::Modulo(0) }
        );
        assert_eq!(
            MonkeyGame::from_notes(&example_notes(), Relief::DivideFloor(0)).unwrap_err(),
            MonkeyError::ZeroRelief { monkey: 0, relief: Relief::DivideFloor(0) }
        );
    }

    #[test]
    fn top_two_product() {
        assert_eq!(monkey_business(&[101, 95, 7, 105]), 10605);
        assert_eq!(monkey_business(&[4, 4, 1]), 16);
    }
}
