/*!
Reachability, the lines each line transitively relies on.

The immediate edges of a line are the dependencies of the line and the lines cited by the rule of the line.
Reachability is the transitive closure of these edges, computed by position in the document:

- The closure of each line contains the (position of the) line itself.
- A backward edge adds the closure of the referenced line, which was finalised earlier in the single left-to-right pass.
- A forward edge, to a line at a later position, is noted by a [ForwardDependency](FlagKind::ForwardDependency) flag, and is not added.
- An edge from a line to itself is ignored.

Reachability is distinct from the dependencies a rule expects, which are exact sets rather than closures.
A line may be reachable from another without being a dependency of the other.

The immediate (backward) edges are also kept as a [Graph], for presentation.
*/

use std::collections::BTreeSet;

use petgraph::{
    dot::{Config, Dot},
    graph::NodeIndex,
    Graph,
};

use crate::{
    misc::log::targets::{self},
    procedures::renumber::LabelIndex,
    structures::{
        document::Document,
        flag::{Flag, FlagKind},
        line::Line,
    },
};

/// Reachability of each line of a document, indexed by document position.
#[derive(Clone, Debug, Default)]
pub struct Reachability {
    /// The positions reachable from each position, including the position itself.
    pub closures: Vec<BTreeSet<usize>>,

    /// [ForwardDependency](FlagKind::ForwardDependency) flags for each position.
    pub flags: Vec<Vec<Flag>>,

    /// The immediate backward edges, with a node for each position weighted by the position.
    pub graph: Graph<usize, ()>,
}

impl Reachability {
    /// The immediate edges, in the dot language.
    pub fn dot(&self) -> String {
        format!("{:?}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}

/// The reachability of each line of a renumbered `document`, given the index from canonical labels to positions.
pub fn reach(document: &Document, index: &LabelIndex) -> Reachability {
    let mut reachability = Reachability::default();

    let nodes = (0..document.len())
        .map(|position| reachability.graph.add_node(position))
        .collect::<Vec<NodeIndex>>();

    for (position, line) in document.lines.iter().enumerate() {
        let mut closure = BTreeSet::from([position]);
        let mut flags = Vec::default();

        if let Line::Logic(logic) = line {
            for label in logic.references() {
                let Some(referenced) = index.position(label) else {
                    log::error!(target: targets::REACH, "No position for label {label}");
                    continue;
                };

                match referenced.cmp(&position) {
                    std::cmp::Ordering::Greater => {
                        log::debug!(target: targets::REACH, "Forward reference from {} to {label}", logic.label);
                        flags.push(Flag::new(
                            FlagKind::ForwardDependency,
                            format!(
                                "({}) depends on ({label}), which cannot occur after it.",
                                logic.label
                            ),
                        ));
                    }

                    std::cmp::Ordering::Equal => {}

                    std::cmp::Ordering::Less => {
                        closure.extend(reachability.closures[referenced].iter().copied());
                        reachability
                            .graph
                            .update_edge(nodes[position], nodes[referenced], ());
                    }
                }
            }
        }

        reachability.closures.push(closure);
        reachability.flags.push(flags);
    }

    reachability
}
