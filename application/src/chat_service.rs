use crate::prompt;
use domain::models::{ExamplePair, RetrievedContext};
use infrastructure::completion_client::CompletionClient;
use infrastructure::config::Config;
use infrastructure::embedding_client::EmbeddingClient;
use infrastructure::knowledge_base;
use infrastructure::search::EmbeddingIndex;
use shared::error::ChatError;
use std::time::Duration;

/// Related questions offered after each answer.
pub const RELATED_LIMIT: usize = 4;

/// One successful chat turn.
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub answer: String,
    pub context: RetrievedContext,
    pub related: Vec<String>,
}

/// Startup-built retrieval pipeline: knowledge base, embedding index, and
/// the two external clients.
///
/// Holds no session state; lookups are pure against the immutable index, so
/// one service can back any number of sessions.
pub struct ChatService {
    pairs: Vec<ExamplePair>,
    questions: Vec<String>,
    index: EmbeddingIndex,
    embeddings: EmbeddingClient,
    completions: CompletionClient,
}

impl ChatService {
    /// Load the knowledge base, embed every question once, and build the
    /// index. Any error here is fatal; there is no degraded mode.
    pub async fn start(config: &Config) -> Result<Self, ChatError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let pairs = knowledge_base::load(&config.kb_path)?;
        let questions: Vec<String> = pairs.iter().map(|p| p.question.clone()).collect();

        let embeddings =
            EmbeddingClient::new(&config.embedding_base_url, &config.embedding_model, timeout)?;
        eprintln!("Embedding {} example questions...", questions.len());
        let vectors = embeddings.embed_batch(&questions).await?;
        let index = EmbeddingIndex::from_vectors(vectors, pairs.len())?;

        let completions = CompletionClient::new(
            &config.groq_api_url,
            &config.groq_api_key,
            &config.llm_model,
            timeout,
        )?;

        Ok(Self {
            pairs,
            questions,
            index,
            embeddings,
            completions,
        })
    }

    /// All knowledge-base questions, in index order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Answer one query: embed, retrieve the nearest context pair, forward
    /// context + query to the completion service.
    ///
    /// Errors here are per-turn; the caller reports them and the session
    /// continues untouched.
    pub async fn answer(&self, query: &str) -> Result<TurnReply, ChatError> {
        let query_vec = self.embeddings.embed(query).await?;
        let (best, score) = self.index.lookup(&query_vec);
        let pair = self.pairs[best].clone();

        let user_message = prompt::build_user_message(&pair, query);
        let reply = self
            .completions
            .complete(prompt::SYSTEM_PROMPT, &user_message)
            .await?;

        let related = self
            .index
            .related_top_k(&query_vec, query, &self.questions, best, RELATED_LIMIT)
            .into_iter()
            .map(|i| self.questions[i].clone())
            .collect();

        Ok(TurnReply {
            answer: reply.trim().to_string(),
            context: RetrievedContext {
                index: best,
                score,
                pair,
            },
            related,
        })
    }
}
