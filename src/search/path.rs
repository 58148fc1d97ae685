use crate::error::{Result, SearchError};
use crate::search::node::{NodeId, SearchNode};
use crate::search::report::Step;

/// Walks parent links from `goal` back to the root and returns the path in
/// root-to-goal order.
///
/// Parents are created before their children, so every parent reference must
/// point at a strictly earlier table entry; anything else is a corrupt chain
/// and aborts the run rather than silently truncating the path.
pub(crate) fn reconstruct<S: Clone>(
    nodes: &[SearchNode<S>],
    goal: NodeId,
) -> Result<Vec<Step<S>>> {
    let mut path = Vec::new();
    let mut current = goal;

    loop {
        let node = &nodes[current as usize];
        path.push(Step {
            state: node.state.clone(),
            action: node.action.clone(),
            depth: node.depth,
            g_cost: node.g_cost,
        });
        match node.parent {
            None => break,
            Some(parent) => {
                if parent >= current {
                    return Err(SearchError::CorruptParentChain {
                        node: current,
                        parent,
                    }
                    .into());
                }
                current = parent;
            }
        }
    }

    path.reverse();
    Ok(path)
}
