//! Registry of per-element style blocks.
//!
//! Raw-markup elements may carry a `css` payload. Each one is registered
//! under `css-<screen>-<element>` the first time it renders; later renders
//! of the same element are no-ops, so re-rendering never duplicates blocks.

use crate::markup::escape;
use mf_core::Id;
use std::collections::HashSet;

/// One registered `<style>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    /// DOM id of the block (`css-<screen>-<element>`).
    pub key: String,
    pub css: String,
}

impl StyleBlock {
    pub fn to_html(&self) -> String {
        format!("<style id=\"{}\">{}</style>", escape(&self.key), self.css)
    }
}

/// Long-lived registry, owned by whoever owns the rendered page.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    keys: HashSet<String>,
    blocks: Vec<StyleBlock>,
    /// Index of the first block not yet handed out by `take_new`.
    flushed: usize,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block. Returns `true` if it was not registered before.
    pub fn register(&mut self, screen_id: Id, element_id: Id, css: &str) -> bool {
        let key = format!("css-{screen_id}-{element_id}");
        if !self.keys.insert(key.clone()) {
            return false;
        }
        log::trace!("register style block {key}");
        self.blocks.push(StyleBlock {
            key,
            css: css.to_string(),
        });
        true
    }

    /// All blocks in first-registration order.
    pub fn blocks(&self) -> &[StyleBlock] {
        &self.blocks
    }

    /// Blocks registered since the previous call, for incremental injection.
    pub fn take_new(&mut self) -> &[StyleBlock] {
        let start = self.flushed;
        self.flushed = self.blocks.len();
        &self.blocks[start..]
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Concatenated `<style>` tags for a standalone page.
    pub fn to_html(&self) -> String {
        self.blocks.iter().map(StyleBlock::to_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        let mut reg = StyleRegistry::new();
        assert!(reg.register(Id::intern("s1"), Id::intern("e1"), ".a{}"));
        assert!(!reg.register(Id::intern("s1"), Id::intern("e1"), ".a{}"));
        assert!(reg.register(Id::intern("s2"), Id::intern("e1"), ".b{}"));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.blocks()[0].key, "css-s1-e1");
    }

    #[test]
    fn take_new_hands_out_each_block_once() {
        let mut reg = StyleRegistry::new();
        reg.register(Id::intern("s"), Id::intern("a"), "x");
        assert_eq!(reg.take_new().len(), 1);
        assert!(reg.take_new().is_empty());
        reg.register(Id::intern("s"), Id::intern("b"), "y");
        let fresh = reg.take_new();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].css, "y");
    }

    #[test]
    fn block_id_is_escaped() {
        let mut reg = StyleRegistry::new();
        reg.register(Id::intern("s1"), Id::intern("x\"><b"), ".x{}");
        assert_eq!(
            reg.blocks()[0].to_html(),
            "<style id=\"css-s1-x&quot;&gt;&lt;b\">.x{}</style>"
        );
    }
}
