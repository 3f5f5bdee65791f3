//! StateGraph compile failure cases: unknown node, invalid chain, etc.

use std::sync::Arc;

use agent_graph::{CompilationError, MessagesState, StateGraph, END, START};

use crate::common::{EchoNode, ShoutNode};

#[tokio::test]
async fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph.add_node("echo", Arc::new(EchoNode));
    graph.add_edge(START, "echo");
    graph.add_edge("echo", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected NodeNotFound"),
    }
}

#[tokio::test]
async fn compile_fails_without_start_edge() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph.add_node("echo", Arc::new(EchoNode));
    graph.add_edge("echo", END);

    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

#[tokio::test]
async fn compile_fails_without_end_edge() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph.add_node("echo", Arc::new(EchoNode));
    graph.add_edge(START, "echo");

    assert!(matches!(graph.compile(), Err(CompilationError::MissingEnd)));
}

#[tokio::test]
async fn compile_fails_on_branch() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph
        .add_node("echo", Arc::new(EchoNode))
        .add_node("shout", Arc::new(ShoutNode))
        .add_edge(START, "echo")
        .add_edge("echo", "shout")
        .add_edge("echo", END);

    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}

#[tokio::test]
async fn compile_fails_when_chain_does_not_reach_end() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph
        .add_node("echo", Arc::new(EchoNode))
        .add_node("shout", Arc::new(ShoutNode))
        .add_edge(START, "echo")
        .add_edge("shout", END);

    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}
