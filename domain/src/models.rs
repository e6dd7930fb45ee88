use serde::{Deserialize, Serialize};

/// One (question, answer) example from the knowledge base.
///
/// Immutable once loaded; its identity is its position in the loaded
/// sequence, which stays stable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamplePair {
    pub question: String,
    pub answer: String,
}

/// The example pair retrieved as most relevant to a user query.
#[derive(Debug, Clone)]
pub struct RetrievedContext {
    pub index: usize,
    pub score: f32,
    pub pair: ExamplePair,
}
