//! Single-character vertex names for display

use crate::error::{GraphError, Result};
use crate::graph::types::Vertex;

/// Maps vertices `0..count` to consecutive characters starting at `base`
/// (`a`, `b`, `c`, ... by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLabels {
    base: char,
    count: usize,
}

impl VertexLabels {
    /// Labels `a..` for `count` vertices
    pub fn alphabetic(count: usize) -> Self {
        Self::with_base('a', count)
    }

    pub fn with_base(base: char, count: usize) -> Self {
        Self { base, count }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn index_of(&self, label: char) -> Result<Vertex> {
        let offset = (label as u32)
            .checked_sub(self.base as u32)
            .map(|o| o as usize)
            .filter(|&o| o < self.count);
        offset.ok_or(GraphError::UnknownLabel(label))
    }

    /// Parse a command-line style label such as `"c"`
    pub fn parse(&self, label: &str) -> Result<Vertex> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.index_of(c),
            _ => Err(GraphError::InvalidLabel(label.to_string())),
        }
    }

    pub fn label_of(&self, vertex: Vertex) -> Option<char> {
        if vertex >= self.count {
            return None;
        }
        u32::try_from(vertex)
            .ok()
            .and_then(|v| (self.base as u32).checked_add(v))
            .and_then(char::from_u32)
    }

    /// Label for display, falling back to the numeric index
    pub fn display(&self, vertex: Vertex) -> String {
        self.label_of(vertex)
            .map(String::from)
            .unwrap_or_else(|| vertex.to_string())
    }
}
