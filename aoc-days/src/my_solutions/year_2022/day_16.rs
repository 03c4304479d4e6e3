use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::collections::{HashMap, VecDeque};

const EXAMPLE: &str = "Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "1651"), Example::new(2, EXAMPLE, "1707")];

const START: &str = "AA";
/// Valves with a positive rate are tracked as bits of a mask
const MAX_USEFUL_VALVES: usize = 20;
const MAX_RATE: u32 = 1_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 16, tags = ["graph", "dynamic-programming"])]
pub struct Solver;

/// The tunnel network reduced to the start and the valves worth opening
#[derive(Debug, Clone)]
pub struct SharedData {
    /// Flow rate of each useful valve
    rates: Vec<u32>,
    /// Minutes from the start to each useful valve
    from_start: Vec<u32>,
    /// Minutes between each pair of useful valves
    between: Vec<Vec<u32>>,
}

/// Fewest minutes from `from` to every valve, `None` where unreachable
fn distances(tunnels: &[Vec<usize>], from: usize) -> Vec<Option<u32>> {
    let mut minutes = vec![None; tunnels.len()];
    minutes[from] = Some(0);
    let mut queue = VecDeque::from([(from, 0u32)]);
    while let Some((valve, taken)) = queue.pop_front() {
        for &next in &tunnels[valve] {
            if minutes[next].is_none() {
                minutes[next] = Some(taken + 1);
                queue.push_back((next, taken + 1));
            }
        }
    }
    minutes
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let reports = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad valve report `{line}`"));
                let caps = re.captures(line).ok_or_else(bad)?;
                let (Some(name), Some(exits)) = (caps.get(1), caps.get(3)) else {
                    return Err(bad());
                };
                let rate = caps[2].parse::<u32>().ok().filter(|&rate| rate <= MAX_RATE).ok_or_else(bad)?;
                let exits = exits.as_str().split(',').map(str::trim).collect::<Vec<_>>();
                Ok((name.as_str(), rate, exits))
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        let index: HashMap<&str, usize> = reports.iter().enumerate().map(|(idx, (name, ..))| (*name, idx)).collect();
        let start = *index
            .get(START)
            .ok_or_else(|| ParseError::MissingData(format!("no valve {START}")))?;
        let tunnels = reports
            .iter()
            .map(|(name, _, exits)| {
                exits
                    .iter()
                    .map(|exit| {
                        index
                            .get(exit)
                            .copied()
                            .ok_or_else(|| ParseError::InvalidFormat(format!("valve {name} leads to unknown {exit}")))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let useful: Vec<usize> = (0..reports.len()).filter(|&idx| reports[idx].1 > 0).collect();
        if useful.len() > MAX_USEFUL_VALVES {
            return Err(ParseError::InvalidFormat(format!(
                "{} valves have a flow rate, at most {MAX_USEFUL_VALVES} are supported",
                useful.len()
            )));
        }

        // Unreachable valves can never be opened; a distance past any time limit keeps them out
        let unreachable = u32::MAX / 2;
        let reach = |from: usize| -> Vec<u32> {
            let minutes = distances(&tunnels, from);
            useful.iter().map(|&to| minutes[to].unwrap_or(unreachable)).collect()
        };
        Ok(SharedData {
            rates: useful.iter().map(|&idx| reports[idx].1).collect(),
            from_start: reach(start),
            between: useful.iter().map(|&idx| reach(idx)).collect(),
        })
    }
}

impl SharedData {
    /// Most pressure released within `minutes` for each set of opened valves, indexed by bit mask
    fn best_per_mask(&self, minutes: u32) -> Vec<u32> {
        let mut best = vec![0; 1 << self.rates.len()];
        for (valve, &travel) in self.from_start.iter().enumerate() {
            self.visit(&mut best, valve, travel, minutes, 0, 0);
        }
        best
    }

    /// Walk to `valve` taking `travel` minutes, then open it
    fn visit(&self, best: &mut [u32], valve: usize, travel: u32, left: u32, opened: usize, released: u32) {
        let Some(left) = left.checked_sub(travel + 1).filter(|&left| left > 0) else {
            return;
        };
        let opened = opened | (1 << valve);
        let released = released + self.rates[valve] * left;
        best[opened] = best[opened].max(released);
        for (next, &travel) in self.between[valve].iter().enumerate() {
            if opened & (1 << next) == 0 {
                self.visit(best, next, travel, left, opened, released);
            }
        }
    }
}

impl PartSolver<1> for Solver {
    /// Alone, in 30 minutes
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best_per_mask(30);
        Ok(best.iter().max().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Solver {
    /// With an elephant, in 26 minutes; the two open disjoint sets of valves
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut best = shared.best_per_mask(26);
        let full = best.len() - 1;
        let by_mask = best.clone();

        // Best over every subset of each mask
        for bit in 0..shared.rates.len() {
            for mask in 0..best.len() {
                if mask & (1 << bit) != 0 {
                    best[mask] = best[mask].max(best[mask ^ (1 << bit)]);
                }
            }
        }

        let total = by_mask
            .iter()
            .enumerate()
            .map(|(mask, &mine)| mine + best[full ^ mask])
            .max()
            .unwrap_or_default();
        Ok(total.to_string())
    }
}
