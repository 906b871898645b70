//! Dense positional view of a [`Graph`].
//!
//! The search works on `usize` node ids rather than on labels so that the
//! partial assignment can live in flat vectors. Node ids follow the graph's
//! ascending vertex order.

use tabiso_common::{Graph, Vertex, Weight};

/// Index of a vertex inside a [`GraphIndex`].
pub(crate) type NodeId = usize;

#[derive(Clone, Debug)]
pub(crate) struct GraphIndex<'a, V: Vertex> {
    /// Vertex labels in ascending order; position is the node id.
    nodes: Vec<&'a V>,
    /// Neighbor list per node, ascending by neighbor id.
    neighbors: Vec<Vec<(NodeId, Weight)>>,
    /// Row-major `n x n` weight lookup.
    weights: Vec<Option<Weight>>,
}

impl<'a, V: Vertex> GraphIndex<'a, V> {
    pub(crate) fn build(graph: &'a Graph<V>) -> Self {
        let nodes: Vec<&'a V> = graph.vertices().collect();
        let n = nodes.len();
        let id_of = |v: &V| nodes.binary_search_by(|probe| (*probe).cmp(v)).ok();

        let mut neighbors = Vec::with_capacity(n);
        let mut weights = vec![None; n * n];
        for (a, vertex) in nodes.iter().enumerate() {
            let list: Vec<(NodeId, Weight)> = graph
                .neighbors(vertex)
                .into_iter()
                .flatten()
                .filter_map(|(neighbor, &w)| id_of(neighbor).map(|b| (b, w)))
                .collect();
            for &(b, w) in &list {
                weights[a * n + b] = Some(w);
            }
            neighbors.push(list);
        }

        Self {
            nodes,
            neighbors,
            weights,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn vertex(&self, id: NodeId) -> &'a V {
        self.nodes[id]
    }

    pub(crate) fn neighbors(&self, id: NodeId) -> &[(NodeId, Weight)] {
        &self.neighbors[id]
    }

    pub(crate) fn degree(&self, id: NodeId) -> usize {
        self.neighbors[id].len()
    }

    pub(crate) fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.weights[a * self.len() + b]
    }

    /// Every undirected edge once, as `(a, b, weight)` with `a < b`.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(a, list)| {
            list.iter()
                .filter(move |(b, _)| a < *b)
                .map(move |&(b, w)| (a, b, w))
        })
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_vertex_order() {
        let mut b = Graph::builder();
        b.edge("C", "A", 2).unwrap();
        b.edge("A", "B", 3).unwrap();
        let g = b.build().unwrap();
        let idx = GraphIndex::build(&g);

        assert_eq!(idx.len(), 3);
        assert_eq!(*idx.vertex(0), "A");
        assert_eq!(*idx.vertex(2), "C");
        assert_eq!(idx.neighbors(0), &[(1, 3), (2, 2)]);
        assert_eq!(idx.degree(1), 1);
        assert_eq!(idx.weight(2, 0), Some(2));
        assert_eq!(idx.weight(1, 2), None);
        assert_eq!(idx.edges().collect::<Vec<_>>(), vec![(0, 1, 3), (0, 2, 2)]);
        assert_eq!(idx.edge_count(), 2);
    }
}
