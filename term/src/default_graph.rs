use std::fmt;

/// The default graph.
///
/// It is used as the graph of quads belonging to no named graph.
/// Its value is the empty string, and it is only equal to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefaultGraph;

impl DefaultGraph {
    /// The value of the default graph, which is always empty.
    pub fn value(&self) -> &'static str {
        ""
    }
}

impl fmt::Display for DefaultGraph {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
