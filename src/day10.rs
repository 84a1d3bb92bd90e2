//! Cathode-Ray Tube.
//!
//! The CPU reports every cycle, with the X register as it stands during that
//! cycle, to whichever observers the caller hands it.

use crate::error::malformed;
use crate::{number, Result};

pub const CRT_WIDTH: usize = 40;
pub const CRT_HEIGHT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub cycles: u32,
    pub delta: i64,
}

impl Command {
    pub const NOOP: Command = Command { cycles: 1, delta: 0 };

    pub fn addx(delta: i64) -> Command {Command { cycles: 2, delta }}

    pub fn parse(line_no: usize, line: &str) -> Result<Command> {
        match line.trim().split_once(' ') {
            None if line.trim() == "noop" => Ok(Command::NOOP),
            Some(("addx", v)) => Ok(Command::addx(number(v)?)),
            _ => Err(malformed(line_no, format!("unknown instruction {:?}", line))),
        }
    }
}

pub trait CycleObserver {
    fn on_cycle(&mut self, cycle: u32, x: i64);
}

#[derive(Debug)]
pub struct Cpu {
    cycle: u32,
    x: i64,
}

impl Default for Cpu {
    fn default() -> Self {Cpu { cycle: 0, x: 1 }}
}

impl Cpu {
    pub fn cycle(&self) -> u32 {self.cycle}

    pub fn x(&self) -> i64 {self.x}

    pub fn execute(&mut self, cmd: Command, observers: &mut [&mut dyn CycleObserver]) {
        for _ in 0 .. cmd.cycles {
            self.cycle += 1;
            for observer in observers.iter_mut() {
                observer.on_cycle(self.cycle, self.x);
            }
        }
        self.x += cmd.delta;
    }
}

/// Collects `cycle * x` at the subscribed cycles.
#[derive(Debug, Default)]
pub struct SignalSampler {
    cycles: Vec<u32>,
    strengths: Vec<i64>,
}

impl SignalSampler {
    pub fn new(cycles: impl IntoIterator<Item = u32>) -> Self {
        SignalSampler { cycles: cycles.into_iter().collect(), strengths: Vec::new() }
    }

    pub fn strengths(&self) -> &[i64] {&self.strengths}
}

impl CycleObserver for SignalSampler {
    fn on_cycle(&mut self, cycle: u32, x: i64) {
        if self.cycles.contains(&cycle) {self.strengths.push(cycle as i64 * x)}
    }
}

pub struct Crt {
    pixels: [[u8; CRT_WIDTH]; CRT_HEIGHT],
}

impl Default for Crt {
    fn default() -> Self {Crt { pixels: [[b'.'; CRT_WIDTH]; CRT_HEIGHT] }}
}

impl Crt {
    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        // only ever b'.' and b'#'
        self.pixels.iter().map(|row| std::str::from_utf8(row).unwrap_or_default())
    }
}

impl CycleObserver for Crt {
    /// Cycles past the last pixel draw nothing.
    fn on_cycle(&mut self, cycle: u32, x: i64) {
        let Some(pixel) = (cycle as usize).checked_sub(1).filter(|&pixel| pixel < CRT_WIDTH * CRT_HEIGHT) else {return};
        let (row, col) = (pixel / CRT_WIDTH, pixel % CRT_WIDTH);
        if (col as i64 - x).abs() <= 1 {self.pixels[row][col] = b'#'}
    }
}

pub fn parse(input: &str) -> Result<Vec<Command>> {
    input.trim().lines().enumerate().map(|(ix, line)| Command::parse(ix + 1, line)).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let program = parse(input)?;
    let mut cpu = Cpu::default();
    if part == 1 {
        let mut sampler = SignalSampler::new((20 ..= 220).step_by(40));
        for &cmd in &program {cpu.execute(cmd, &mut [&mut sampler])}
        Ok(sampler.strengths().iter().sum::<i64>().to_string())
    } else {
        let mut crt = Crt::default();
        for &cmd in &program {cpu.execute(cmd, &mut [&mut crt])}
        Ok(crt.rows().collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let cpu = Cpu::default();
        assert_eq!((cpu.cycle(), cpu.x()), (0, 1));
    }

    #[test]
    fn cycles_and_register() {
        let mut cpu = Cpu::default();
        cpu.execute(Command { cycles: 1, delta: 5 }, &mut []);
        assert_eq!((cpu.cycle(), cpu.x()), (1, 6));
        cpu.execute(Command { cycles: 5, delta: -4 }, &mut []);
        assert_eq!((cpu.cycle(), cpu.x()), (6, 2));
    }

    #[test]
    fn sampled_cycles() {
        let mut cpu = Cpu::default();
        let mut idle = SignalSampler::new([5]);
        cpu.execute(Command { cycles: 5, delta: 0 }, &mut [&mut idle]);
        assert_eq!(idle.strengths(), [5]);

        let mut cpu = Cpu::default();
        let mut sampler = SignalSampler::new([5]);
        for _ in 0 .. 3 {cpu.execute(Command::addx(1), &mut [&mut sampler])}
        assert_eq!(sampler.strengths(), [15]);

        let mut cpu = Cpu::default();
        let mut sampler = SignalSampler::new([1, 2, 5]);
        cpu.execute(Command::NOOP, &mut [&mut sampler]);
        cpu.execute(Command::addx(1), &mut [&mut sampler]);
        cpu.execute(Command::addx(1), &mut [&mut sampler]);
        assert_eq!(sampler.strengths(), [1, 2, 10]);
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse(1, "noop").unwrap(), Command::NOOP);
        assert_eq!(Command::parse(1, "addx 20").unwrap(), Command { cycles: 2, delta: 20 });
        assert_eq!(Command::parse(1, "addx -5").unwrap(), Command::addx(-5));
        assert!(Command::parse(1, "mulx 2").is_err());
    }

    #[test]
    fn several_observers() {
        let mut cpu = Cpu::default();
        let mut crt = Crt::default();
        let mut sampler = SignalSampler::new([2]);
        cpu.execute(Command::addx(15), &mut [&mut crt, &mut sampler]);
        assert_eq!(crt.rows().next(), Some("##......................................"));
        assert_eq!(sampler.strengths(), [2]);
    }

    #[test]
    fn crt_stops_after_last_row() {
        let mut crt = Crt::default();
        crt.on_cycle(240, 39);
        crt.on_cycle(241 + 20, 20);
        let rows = crt.rows().collect::<Vec<_>>();
        assert!(rows[.. CRT_HEIGHT - 1].iter().all(|row| !row.contains('#')));
        assert_eq!(rows[CRT_HEIGHT - 1], ".......................................#");
    }

    #[test]
    fn small_program() {
        let program = parse("noop\naddx 3\naddx -5\n").unwrap();
        let mut cpu = Cpu::default();
        let mut sampler = SignalSampler::new(1 ..= 5);
        for cmd in program {cpu.execute(cmd, &mut [&mut sampler])}
        assert_eq!(sampler.strengths(), [1, 2, 3, 16, 20]);
        assert_eq!(cpu.x(), -1);
    }
}
