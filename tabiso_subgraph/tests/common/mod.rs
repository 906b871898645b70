#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::OnceLock;

use tabiso_common::{Graph, TableId};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Graph from `(u, v, weight)` triples with string labels.
pub fn labelled(edges: &[(&str, &str, i64)]) -> Graph<String> {
    let mut b = Graph::builder();
    for &(u, v, w) in edges {
        b.edge(u.to_string(), v.to_string(), w).unwrap();
    }
    b.build().unwrap()
}

/// Table from a full weight matrix.
pub fn table(rows: &[&[i64]]) -> Graph<TableId> {
    let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
    Graph::from_matrix(&rows).unwrap()
}

pub fn labels(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn positions(items: &[u32]) -> BTreeSet<TableId> {
    items.iter().copied().map(TableId::new).collect()
}
