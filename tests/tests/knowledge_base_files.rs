//! Loader behavior against real files: a well-formed document loads, and a
//! malformed or empty one halts startup with a configuration error.

use infrastructure::knowledge_base;
use shared::error::ChatError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_doc(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_examples_from_a_file() {
    let file = write_doc(
        r#"{
            "kb": {
                "sections": [
                    {
                        "id": "sample_intents_entities",
                        "intents": [
                            { "examples": [ { "question": "How to register?", "answer": "Open app, tap Register" } ] }
                        ]
                    }
                ]
            }
        }"#,
    );
    let pairs = knowledge_base::load(file.path()).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].answer, "Open app, tap Register");
}

#[test]
fn empty_document_halts_with_configuration_error() {
    let file = write_doc("{}");
    let err = knowledge_base::load(file.path()).unwrap_err();
    assert!(matches!(err, ChatError::Configuration(_)));
}

#[test]
fn malformed_document_halts_with_configuration_error() {
    let file = write_doc("sections: [this is not json]");
    let err = knowledge_base::load(file.path()).unwrap_err();
    assert!(matches!(err, ChatError::Configuration(_)));
}

#[test]
fn section_without_examples_halts_with_configuration_error() {
    let file = write_doc(
        r#"{ "kb": { "sections": [ { "id": "sample_intents_entities", "intents": [ { "examples": [] } ] } ] } }"#,
    );
    let err = knowledge_base::load(file.path()).unwrap_err();
    assert!(matches!(err, ChatError::Configuration(_)));
}
