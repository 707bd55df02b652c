//! Integration tests: streamed deltas → full text → parsed document.
//!
//! None of these touch the network; a scripted service replays a canned
//! event stream through the real SSE decoder.

use mf_core::{Id, MockupDocument, SelectionItem, parse_mockup_response};
use mf_gen::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;

const CHECKOUT: &str = include_str!("fixtures/checkout.json");

/// Replays a fixed SSE body in small chunks and records the prompts it saw.
struct ScriptedService {
    body: String,
    chunk_size: usize,
    seen: RefCell<Vec<Vec<ChatMessage>>>,
}

impl ScriptedService {
    fn replaying(text: &str, pieces: usize, chunk_size: usize) -> Self {
        let step = text.len().div_ceil(pieces);
        let mut body = String::new();
        let mut start = 0;
        while start < text.len() {
            let mut end = (start + step).min(text.len());
            while !text.is_char_boundary(end) {
                end += 1;
            }
            let event =
                serde_json::json!({ "choices": [{ "delta": { "content": &text[start..end] } }] });
            body.push_str(&format!("data: {event}\n\n"));
            start = end;
        }
        body.push_str("data: [DONE]\n\n");
        Self {
            body,
            chunk_size,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl GenerationService for ScriptedService {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str, &str),
    ) -> Result<String, GenerationError> {
        self.seen.borrow_mut().push(messages.to_vec());
        let mut decoder = SseDecoder::new();
        let mut full = String::new();
        for bytes in self.body.as_bytes().chunks(self.chunk_size) {
            for delta in decoder.feed(bytes) {
                full.push_str(&delta);
                on_chunk(&delta, &full);
            }
        }
        Ok(full)
    }
}

#[tokio::test]
async fn generated_stream_parses_into_document() {
    let reply = format!("Here is your mockup:\n```json\n{CHECKOUT}\n```");
    let service = ScriptedService::replaying(&reply, 12, 7);

    let mut deltas = Vec::new();
    let mut last_full = String::new();
    let full = service
        .generate_mockup("pizza delivery", &mut |delta, full| {
            deltas.push(delta.to_string());
            last_full = full.to_string();
        })
        .await
        .unwrap();

    assert_eq!(full, reply);
    assert_eq!(last_full, reply);
    assert_eq!(deltas.concat(), reply);
    assert!(deltas.len() >= 12);

    let doc = parse_mockup_response(&full).unwrap();
    assert_eq!(doc, MockupDocument::from_json(CHECKOUT).unwrap());

    let seen = service.seen.borrow();
    assert_eq!(
        seen[0][1].content,
        "Create a mobile app mockup for: pizza delivery"
    );
}

#[tokio::test]
async fn edit_sends_selection_context() {
    let doc = MockupDocument::from_json(CHECKOUT).unwrap();
    let service = ScriptedService::replaying(CHECKOUT, 3, 64);
    let selection = [
        SelectionItem::screen("s2"),
        SelectionItem::element("s1", "title"),
    ];

    let full = service
        .edit_mockup(&doc, &selection, "rename the title", &mut |_, _| {})
        .await
        .unwrap();
    let edited = parse_mockup_response(&full).unwrap();
    assert!(edited.screen(Id::intern("s2")).is_some());

    let seen = service.seen.borrow();
    let user = &seen[0][1].content;
    assert!(user.contains("Selected screens: s2\nSelected elements: s1/title"));
    assert!(user.contains("User request: rename the title"));
}

#[tokio::test]
async fn truncated_stream_keeps_previous_document() {
    let half = &CHECKOUT[..CHECKOUT.len() / 2];
    let service = ScriptedService::replaying(half, 4, 16);
    let full = service
        .generate_mockup("anything", &mut |_, _| {})
        .await
        .unwrap();
    assert!(parse_mockup_response(&full).is_err());
}

#[tokio::test]
async fn nim_client_without_key_fails_fast() {
    let client = NimClient::new(GenerationConfig::default()).unwrap();
    let err = client
        .generate_mockup("todo app", &mut |_, _| panic!("no chunks expected"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredential));
}
