use domain::models::ExamplePair;
use serde::Deserialize;
use serde_json::Value;
use shared::error::ChatError;
use std::path::Path;

/// Section id marking the sample-intents source inside the knowledge base.
pub const SAMPLE_INTENTS_SECTION: &str = "sample_intents_entities";

#[derive(Deserialize)]
struct KnowledgeBase {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Deserialize)]
struct Section {
    #[serde(default)]
    id: String,
    #[serde(default)]
    intents: Vec<Intent>,
}

#[derive(Deserialize)]
struct Intent {
    #[serde(default)]
    examples: Vec<ExamplePair>,
}

/// Load the knowledge base document and flatten its example pairs.
///
/// Any failure here is fatal: without a knowledge base there is nothing to
/// retrieve against, so the caller halts instead of degrading.
pub fn load(path: &Path) -> Result<Vec<ExamplePair>, ChatError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ChatError::Configuration(format!(
            "failed to read knowledge base {}: {e}",
            path.display()
        ))
    })?;
    parse(&raw)
}

/// Parse a knowledge base document.
///
/// The document is a JSON object whose top-level key wraps a `sections`
/// list; every `{question, answer}` example under an intent of a
/// `sample_intents_entities` section is collected in source order.
pub fn parse(raw: &str) -> Result<Vec<ExamplePair>, ChatError> {
    let root: Value = serde_json::from_str(raw)
        .map_err(|e| ChatError::Configuration(format!("knowledge base is not valid JSON: {e}")))?;
    let body = root
        .as_object()
        .and_then(|obj| obj.values().find(|v| v.get("sections").is_some()))
        .ok_or_else(|| {
            ChatError::Configuration(
                "knowledge base has no top-level object wrapping a 'sections' list".to_string(),
            )
        })?;
    let kb: KnowledgeBase = serde_json::from_value(body.clone())
        .map_err(|e| ChatError::Configuration(format!("knowledge base sections are malformed: {e}")))?;

    let mut pairs = Vec::new();
    for section in kb.sections {
        if section.id != SAMPLE_INTENTS_SECTION {
            continue;
        }
        for intent in section.intents {
            pairs.extend(intent.examples);
        }
    }

    if pairs.is_empty() {
        return Err(ChatError::Configuration(format!(
            "knowledge base has no examples under a '{SAMPLE_INTENTS_SECTION}' section"
        )));
    }
    Ok(pairs)
}
