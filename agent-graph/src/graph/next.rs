//! Routing decision returned by a node.

/// What the graph runs after the current node.
///
/// - **Continue**: follow the linear edge order; after the last node this ends the run.
/// - **Node(id)**: jump to the given node.
/// - **End**: stop; return current state as final result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow linear edge order; if current node is last, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
