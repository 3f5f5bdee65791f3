//! StateGraph invoke: nodes run in edge order and the final state is returned.

use std::sync::Arc;

use agent_graph::{Message, MessagesState, StateGraph, END, START};

use crate::common::{EchoNode, ShoutNode};

#[tokio::test]
async fn invoke_runs_nodes_in_edge_order() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph
        .add_node("shout", Arc::new(ShoutNode))
        .add_node("echo", Arc::new(EchoNode))
        .add_edge(START, "echo")
        .add_edge("echo", "shout")
        .add_edge("shout", END);
    let compiled = graph.compile().expect("graph compiles");

    let state = MessagesState {
        messages: vec![Message::user("hello")],
    };
    let out = compiled.invoke(state).await.unwrap();
    assert_eq!(
        out.messages,
        vec![Message::user("hello"), Message::assistant("HELLO")]
    );
}

/// **Scenario**: The same compiled graph can serve concurrent invocations without sharing state.
#[tokio::test]
async fn invoke_concurrently_keeps_states_apart() {
    let mut graph = StateGraph::<MessagesState>::new();
    graph
        .add_node("echo", Arc::new(EchoNode))
        .add_edge(START, "echo")
        .add_edge("echo", END);
    let compiled = Arc::new(graph.compile().expect("graph compiles"));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let compiled = Arc::clone(&compiled);
            tokio::spawn(async move {
                let state = MessagesState {
                    messages: vec![Message::user(format!("q{}", i))],
                };
                (i, compiled.invoke(state).await.unwrap())
            })
        })
        .collect();

    for h in handles {
        let (i, out) = h.await.unwrap();
        assert_eq!(out.messages.last(), Some(&Message::assistant(format!("q{}", i))));
    }
}
