//! Graphs realizing a given degree sequence.

use crate::graph::PropertyGraph;
use crate::model::NodeId;
use crate::{Error, Result};

/// Erdős–Gallai test: can `degrees` be realized by a simple graph?
pub fn is_graphical(degrees: &[usize]) -> bool {
    let mut d = degrees.to_vec();
    d.sort_unstable_by(|a, b| b.cmp(a));
    let n = d.len();
    if d.iter().sum::<usize>() % 2 != 0 {
        return false;
    }
    let mut lhs = 0;
    for k in 1..=n {
        lhs += d[k - 1];
        let rhs = k * (k - 1) + d[k..].iter().map(|&x| x.min(k)).sum::<usize>();
        if lhs > rhs {
            return false;
        }
    }
    true
}

/// Simple undirected graph on nodes `0..degrees.len()` where node `i` has
/// degree `degrees[i]`.
///
/// Havel–Hakimi: repeatedly connect the node with the largest remaining
/// degree to the next-largest ones. Ties pop the most recently queued node.
pub fn havel_hakimi_graph(degrees: &[usize]) -> Result<PropertyGraph> {
    let p = degrees.len();
    let graph = PropertyGraph::undirected();
    for i in 0..p {
        graph.add_node(NodeId(i as u64));
    }

    if degrees.iter().sum::<usize>() % 2 != 0 {
        return Err(Error::NotGraphical(format!("odd degree sum in {degrees:?}")));
    }
    if let Some(&d) = degrees.iter().find(|&&d| d >= p) {
        return Err(Error::NotGraphical(format!("degree {d} exceeds {} possible neighbors", p.saturating_sub(1))));
    }

    // buckets[d] = nodes still needing d more edges
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); p];
    let mut dmax = 0;
    let mut remaining = 0;
    for (node, &d) in degrees.iter().enumerate() {
        if d > 0 {
            buckets[d].push(node);
            dmax = dmax.max(d);
            remaining += 1;
        }
    }

    let mut restubs: Vec<(usize, usize)> = Vec::with_capacity(dmax);
    while remaining > 0 {
        while buckets[dmax].is_empty() {
            dmax -= 1;
        }
        if dmax > remaining - 1 {
            return Err(Error::NotGraphical(format!("{degrees:?}")));
        }
        let Some(source) = buckets[dmax].pop() else { break };
        remaining -= 1;

        restubs.clear();
        let mut k = dmax;
        for _ in 0..dmax {
            while buckets[k].is_empty() {
                k -= 1;
            }
            let Some(target) = buckets[k].pop() else { break };
            graph.add_edge(NodeId(source as u64), NodeId(target as u64));
            remaining -= 1;
            if k > 1 {
                restubs.push((k - 1, target));
            }
        }
        for &(d, target) in &restubs {
            buckets[d].push(target);
            remaining += 1;
        }
    }

    tracing::debug!(nodes = p, "built Havel-Hakimi graph");
    Ok(graph)
}
