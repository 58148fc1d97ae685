use std::backtrace::Backtrace;

use crate::search::node::NodeId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The problem definition cannot produce a meaningful run. Detected by
    /// [`SearchDomain::validate`](crate::search::domain::SearchDomain::validate)
    /// before any node is generated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A node's parent reference does not resolve to an earlier entry in the
    /// node table. The table is append-only and parents are always created
    /// before their children, so this indicates a bug in the engine rather
    /// than bad user input.
    #[error("corrupt parent chain: node {node} references parent {parent}")]
    CorruptParentChain { node: NodeId, parent: NodeId },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SearchError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`SearchError`], without the captured backtrace.
    pub fn inner(&self) -> &SearchError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<SearchError> for Error {
    fn from(inner: SearchError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
