// Tue Jan 13 2026 - Alex

use crate::signature::Signature;
use std::ops::Range;

impl Signature {
    /// Returns the offset of the first match in `haystack`, or `None`.
    ///
    /// The empty signature never matches. A match may end exactly at the end
    /// of `haystack`.
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        if self.is_empty() || haystack.len() < self.len() {
            return None;
        }

        let found = haystack.windows(self.len())
            .position(|window| self.matches_window(window));

        log::trace!("Searched {} bytes for {}: {:?}", haystack.len(), self, found);
        found
    }

    /// Searches `haystack[range]` and returns the match offset relative to
    /// the start of `haystack`. Out-of-bounds ranges are clamped.
    pub fn find_in_range(&self, haystack: &[u8], range: Range<usize>) -> Option<usize> {
        let end = range.end.min(haystack.len());
        let start = range.start.min(end);

        self.find(&haystack[start..end]).map(|offset| start + offset)
    }

    /// Tests a single candidate offset.
    pub fn matches_at(&self, haystack: &[u8], offset: usize) -> bool {
        if self.is_empty() {
            return false;
        }

        match offset.checked_add(self.len()) {
            Some(end) if end <= haystack.len() => self.matches_window(&haystack[offset..end]),
            _ => false,
        }
    }

    fn matches_window(&self, window: &[u8]) -> bool {
        let wildcard = self.wildcard();
        self.as_bytes().iter()
            .zip(window.iter())
            .all(|(&p, &b)| p == wildcard || p == b)
    }
}
