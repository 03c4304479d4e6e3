use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;

const EXAMPLE: &str = "[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "13"), Example::new(2, EXAMPLE, "140")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 13, tags = ["parsing", "sorting"])]
pub struct Solver;

/// A distress signal packet
#[derive(Debug, Clone, PartialEq, Eq)]
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
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Packet {
    fn divider(value: u32) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Int(value)])])
    }
}

/// Recursive descent over the packet bytes
struct PacketParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl PacketParser<'_> {
    fn parse(text: &str) -> Result<Packet, ParseError> {
        let mut parser = PacketParser { bytes: text.as_bytes(), pos: 0 };
        let packet = parser.list()?;
        if parser.pos != parser.bytes.len() {
            return Err(parser.error("trailing characters"));
        }
        Ok(packet)
    }

    fn error(&self, what: &str) -> ParseError {
        ParseError::InvalidFormat(format!("{what} at column {}", self.pos + 1))
    }

    fn eat(&mut self, byte: u8) -> bool {
        let found = self.bytes.get(self.pos) == Some(&byte);
        if found {
            self.pos += 1;
        }
        found
    }

    fn list(&mut self) -> Result<Packet, ParseError> {
        if !self.eat(b'[') {
            return Err(self.error("expected `[`"));
        }
        let mut items = Vec::new();
        if self.eat(b']') {
            return Ok(Packet::List(items));
        }
        loop {
            items.push(self.value()?);
            if self.eat(b']') {
                return Ok(Packet::List(items));
            }
            if !self.eat(b',') {
                return Err(self.error("expected `,` or `]`"));
            }
        }
    }

    fn value(&mut self) -> Result<Packet, ParseError> {
        if self.bytes.get(self.pos) == Some(&b'[') {
            return self.list();
        }
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .map(Packet::Int)
            .ok_or_else(|| self.error("expected a number"))
    }
}

impl AocParser for Solver {
    /// Packets in input order; pairs are consecutive entries
    type SharedData<'a> = Vec<Packet>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let packets = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                PacketParser::parse(line).map_err(|e| ParseError::InvalidFormat(format!("(packet {}) {e}", idx + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if packets.is_empty() || packets.len() % 2 != 0 {
            return Err(ParseError::MissingData(format!(
                "expected pairs of packets, got {}",
                packets.len()
            )));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    /// Sum of the 1-based indices of pairs already in order
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = shared
            .chunks_exact(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Product of the divider positions once every packet is sorted
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (first, second) = (Packet::divider(2), Packet::divider(6));
        // Counting smaller packets locates the dividers without sorting
        let first_at = 1 + shared.iter().filter(|&packet| *packet < first).count();
        let second_at = 2 + shared.iter().filter(|&packet| *packet < second).count();
        Ok((first_at * second_at).to_string())
    }
}
