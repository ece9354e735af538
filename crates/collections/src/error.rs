use thiserror::Error;

/// Reported conditions for [`crate::Deque`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    #[error("pop from an empty container")]
    EmptyContainer,
}

/// Reported conditions for [`crate::Graph`].
///
/// The mutation variants are advisory: the operation was a no-op and the
/// graph is unchanged. Callers that expect the condition (e.g. re-adding an
/// interchange station that sits on two lines) may ignore them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex '{0}' already exists")]
    DuplicateVertex(String),

    #[error("both vertices must exist before adding an edge '{src}' -> '{dst}'")]
    MissingEndpoint { src: String, dst: String },

    #[error("vertex '{0}' not found")]
    VertexNotFound(String),

    #[error("no route from '{start}' to '{end}'")]
    RouteNotFound { start: String, end: String },
}
