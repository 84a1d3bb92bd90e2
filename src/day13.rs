//! Distress Signal.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::error::malformed;
use crate::{number, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => std::slice::from_ref(&Packet::Int(*a)).cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp(std::slice::from_ref(&Packet::Int(*b))),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {Some(self.cmp(other))}
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Int(n) => write!(f, "{n}"),
            Packet::List(items) => write!(f, "[{}]", items.iter().format(",")),
        }
    }
}

fn unexpected(line_no: usize, text: &str, at: usize) -> crate::Error {
    let found = text[at ..].chars().next().map_or("end of line".to_string(), |c| format!("{:?}", c));
    malformed(line_no, format!("unexpected {} at column {}", found, at + 1))
}

impl Packet {
    pub fn parse(line_no: usize, line: &str) -> Result<Packet> {
        let text = line.trim();
        let (packet, end) = Packet::parse_from(line_no, text, 0)?;
        if end != text.len() {return Err(unexpected(line_no, text, end))}
        Ok(packet)
    }

    /// Parses the packet starting at byte `at`; returns it with the index
    /// just past its end.
    fn parse_from(line_no: usize, text: &str, at: usize) -> Result<(Packet, usize)> {
        let bytes = text.as_bytes();
        match bytes.get(at) {
            Some(b'0' ..= b'9') => {
                let end = bytes[at ..].iter().position(|c| !c.is_ascii_digit()).map_or(bytes.len(), |len| at + len);
                Ok((Packet::Int(number(&text[at .. end])?), end))
            }
            Some(b'[') => {
                let mut items = Vec::new();
                if bytes.get(at + 1) == Some(&b']') {return Ok((Packet::List(items), at + 2))}
                let mut at = at + 1;
                loop {
                    let (item, next) = Packet::parse_from(line_no, text, at)?;
                    items.push(item);
                    match bytes.get(next) {
                        Some(b',') => at = next + 1,
                        Some(b']') => return Ok((Packet::List(items), next + 1)),
                        _ => return Err(unexpected(line_no, text, next)),
                    }
                }
            }
            _ => Err(unexpected(line_no, text, at)),
        }
    }

    pub fn divider(n: u32) -> Packet {Packet::List(vec![Packet::List(vec![Packet::Int(n)])])}
}

pub fn parse(input: &str) -> Result<Vec<Packet>> {
    input.lines().enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ix, line)| Packet::parse(ix + 1, line))
        .collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let packets = parse(input)?;
    if part == 1 {
        if packets.len() % 2 != 0 {return Err(malformed(input.lines().count(), "odd number of packets"))}
        Ok(packets.iter().tuples::<(_, _)>().positions(|(left, right)| left < right).map(|ix| ix + 1).sum::<usize>().to_string())
    } else {
        let (two, six) = (Packet::divider(2), Packet::divider(6));
        // 1-based positions in the sorted list, the other divider included
        let two_at = packets.iter().filter(|&p| p < &two).count() + 1;
        let six_at = packets.iter().filter(|&p| p < &six).count() + 2;
        Ok((two_at * six_at).to_string())
    }
}
