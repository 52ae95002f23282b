use crate::scene::NodeId;

/// Failures raised while building the scene. The interactive path never
/// produces these; picking and popups degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("node {0:?} does not exist in this scene")]
    UnknownNode(NodeId),
    #[error("node {0:?} has a parent; memories attach to top-level groups only")]
    PayloadOnChild(NodeId),
    #[error("memory text must not be empty")]
    EmptyMemoryText,
    #[error("garden needs at least one memory to hand out to flowers")]
    NoMemories,
}
