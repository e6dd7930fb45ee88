pub mod completion_client;
pub mod config;
pub mod embedding_client;
pub mod knowledge_base;
pub mod search;
