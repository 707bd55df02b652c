//! Incremental decoder for streamed chat-completion responses.
//!
//! The body arrives as arbitrary byte chunks; an event line (or even a
//! multi-byte character) may be split across two of them. Complete lines
//! are decoded, partial ones wait for the next chunk.

use serde::Deserialize;

const DATA_PREFIX: &str = "data:";
const DONE: &str = "[DONE]";

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<StreamDelta>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Buffers partial lines and yields the `choices[0].delta.content` of each
/// complete `data:` event.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the `[DONE]` sentinel has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one network chunk, returning the deltas completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut deltas = Vec::new();
        while let Some(newline) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            if let Some(delta) = self.decode_line(&line[..newline]) {
                deltas.push(delta);
            }
        }
        deltas
    }

    /// Flush a trailing line that was not newline-terminated.
    pub fn finish(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.pending);
        self.decode_line(&line)
    }

    fn decode_line(&mut self, line: &[u8]) -> Option<String> {
        let line = String::from_utf8_lossy(line);
        let line = line.trim_end_matches('\r');
        let data = line.strip_prefix(DATA_PREFIX)?;
        let data = data.strip_prefix(' ').unwrap_or(data);
        if data == DONE {
            self.done = true;
            return None;
        }

        match serde_json::from_str::<StreamChunk>(data) {
            Ok(chunk) => chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta)
                .and_then(|delta| delta.content)
                .filter(|content| !content.is_empty()),
            Err(err) => {
                log::trace!("skipping unparseable event: {err}");
                None
            }
        }
    }
}
