//! Day 23: LAN Party.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::parsing::pair;
use crate::{Part, Result, Settings};

struct Network<'a> {
    names: Vec<&'a str>,
    links: Vec<FxHashSet<usize>>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut network = Network {names: vec![], links: vec![]};
        for line in input.trim().lines() {
            let (a, b) = pair(line.trim(), "-")?;
            let [a, b] = [a, b].map(|name| *ids.entry(name).or_insert_with(|| {
                network.names.push(name);
                network.links.push(FxHashSet::default());
                network.names.len() - 1
            }));
            network.links[a].insert(b);
            network.links[b].insert(a);
        }
        Ok(network)
    }

    fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (0 .. self.names.len()).flat_map(move |a| {
            self.links[a].iter().filter(move |&&b| b > a).flat_map(move |&b| {
                self.links[b].iter().filter(move |&&c| c > b && self.links[a].contains(&c)).map(move |&c| [a, b, c])
            })
        })
    }

    /// Bron–Kerbosch with pivoting, remembering the largest maximal clique.
    fn largest_clique(&self, clique: &mut Vec<usize>, mut candidates: FxHashSet<usize>, mut excluded: FxHashSet<usize>, best: &mut Vec<usize>) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > best.len() {best.clone_from(clique)}
            return;
        }
        let Some(pivot) = candidates.union(&excluded).copied()
            .max_by_key(|&v| self.links[v].intersection(&candidates).count()) else {return};
        let branches = candidates.iter().copied().filter(|v| !self.links[pivot].contains(v)).collect_vec();
        for v in branches {
            clique.push(v);
            self.largest_clique(
                clique,
                candidates.intersection(&self.links[v]).copied().collect(),
                excluded.intersection(&self.links[v]).copied().collect(),
                best,
            );
            clique.pop();
            candidates.remove(&v);
            excluded.insert(v);
        }
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let network = Network::parse(input)?;
    match part {
        Part::One => Ok(network.triangles()
            .filter(|triangle| triangle.iter().any(|&n| network.names[n].starts_with('t')))
            .count()
            .to_string()),
        Part::Two => {
            let mut best = vec![];
            let everyone = (0 .. network.names.len()).collect();
            network.largest_clique(&mut vec![], everyone, FxHashSet::default(), &mut best);
            Ok(best.iter().map(|&n| network.names[n]).sorted().join(","))
        }
    }
}
