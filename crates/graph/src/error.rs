use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal entry point names an entity that is not in the graph.
    /// Only explicit lookups fail; reference resolution never does.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}
