//! Shortest paths on a small weighted graph.
//!
//! The frontier of the search is a min heap keyed by node, and so when a shorter path to a node on the frontier is found the distance to the node is revised in place, rather than adding a second entry for the node.
//! The data of each entry is the node the path arrives from.

use std::collections::HashMap;

use keyed_heap::{config::Mode, heap::KeyedHeap, types::err};

type Graph<'a> = HashMap<&'a str, Vec<(&'a str, u32)>>;

/// The distance to each node reachable from `source`, together with the node the shortest path arrives from.
fn search<'a>(
    graph: &Graph<'a>,
    source: &'a str,
) -> Result<HashMap<&'a str, (u32, Option<&'a str>)>, err::HeapError> {
    let mut frontier = KeyedHeap::new(Mode::Min);
    let mut settled = HashMap::default();

    frontier.insert(source, 0, None)?;

    while let Some(entry) = frontier.pop() {
        let (node, distance, via) = entry.into_parts();
        settled.insert(node, (distance, via));

        for &(next, weight) in graph.get(node).into_iter().flatten() {
            if settled.contains_key(next) {
                continue;
            }

            let candidate = distance + weight;
            match frontier.value_of(next) {
                Ok(&present) if present <= candidate => {}

                Ok(_) => {
                    frontier.update(next, candidate)?;
                    frontier.set_data(next, Some(node))?;
                }

                Err(_) => frontier.insert(next, candidate, Some(node))?,
            }
        }
    }

    Ok(settled)
}

fn main() {
    env_logger::init();

    let edges = [
        ("home", "bakery", 7),
        ("home", "station", 9),
        ("home", "park", 14),
        ("bakery", "station", 10),
        ("bakery", "library", 15),
        ("station", "library", 11),
        ("station", "park", 2),
        ("library", "office", 6),
        ("park", "office", 9),
    ];

    let mut graph: Graph = HashMap::default();
    for (from, to, weight) in edges {
        graph.entry(from).or_default().push((to, weight));
        graph.entry(to).or_default().push((from, weight));
    }

    let settled = match search(&graph, "home") {
        Ok(settled) => settled,
        Err(e) => {
            println!("Search failed: {e}");
            std::process::exit(2);
        }
    };

    let mut nodes = settled.keys().copied().collect::<Vec<_>>();
    nodes.sort_by_key(|node| settled[node].0);

    for node in nodes {
        let mut path = vec![node];
        let mut step = node;
        while let Some((_, Some(via))) = settled.get(step) {
            path.push(*via);
            step = *via;
        }
        path.reverse();

        println!("{node:>8} {:>3} via {}", settled[node].0, path.join(" → "));
    }
}
