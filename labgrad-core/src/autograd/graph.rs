use crate::node::{Node, NodeId};
use std::collections::HashSet;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first, post-order: a node is emitted only after all of its inputs, so
/// the returned list has parents before children and ends with `root`. Walking
/// it back to front is the backward execution order.
///
/// Nodes are deduplicated by [`NodeId`], never by value, so a shared
/// subexpression is emitted exactly once however many consumers it has. The
/// traversal keeps its own stack so long chains do not recurse.
pub(crate) fn topological_sort<T>(nodes: &[Node<T>], root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, inputs already scheduled)
    let mut stack = vec![(root, false)];

    while let Some((node_id, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node_id);
            continue;
        }
        if !visited.insert(node_id) {
            continue;
        }
        stack.push((node_id, true));

        let inputs = nodes[node_id.index()].op.inputs();
        for input_id in inputs.into_iter().rev() {
            debug_assert!(
                input_id < node_id,
                "input {} of node {} was created after it",
                input_id,
                node_id
            );
            if !visited.contains(&input_id) {
                stack.push((input_id, false));
            }
        }
    }

    log::trace!(
        "topological_sort: {} nodes reachable from {}",
        sorted_list.len(),
        root
    );
    sorted_list
}
