// Wed Jan 15 2026 - Alex

use crate::signature::Signature;

const ROW_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRole {
    /// Matched a literal byte of the signature.
    Literal,
    /// Matched a wildcard position.
    Wildcard,
    /// Trailing context after the signature.
    Context,
}

/// The bytes at a match, tagged with the part of the signature they lined
/// up against.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDump {
    offset: usize,
    bytes: Vec<(u8, ByteRole)>,
}

impl MatchDump {
    /// `bytes` starts at the match `offset` and may run past the signature.
    pub fn new(signature: &Signature, bytes: &[u8], offset: usize) -> Self {
        let bytes = bytes.iter()
            .enumerate()
            .map(|(i, &b)| {
                let role = if i >= signature.len() {
                    ByteRole::Context
                } else if signature.is_wildcard_at(i) {
                    ByteRole::Wildcard
                } else {
                    ByteRole::Literal
                };
                (b, role)
            })
            .collect();

        Self { offset, bytes }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().map(|&(b, _)| b)
    }

    /// One line per 16 bytes: the absolute offset, then every byte passed
    /// through `paint` with its role.
    pub fn render<F>(&self, paint: F) -> String
    where
        F: Fn(String, ByteRole) -> String,
    {
        self.bytes.chunks(ROW_WIDTH)
            .enumerate()
            .map(|(row, chunk)| {
                let cells: Vec<String> = chunk.iter()
                    .map(|&(b, role)| paint(format!("{:02X}", b), role))
                    .collect();
                format!("{:08x}  {}\n", self.offset + row * ROW_WIDTH, cells.join(" "))
            })
            .collect()
    }
}
