//! Per-kind in-flight counters backing the loading indicators.

use super::request::RequestKind;

/// Outstanding request count per [`RequestKind`].
///
/// Each kind is its own loading scope; settling a price lookup never clears
/// the indicator of a chart fetch still in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    counts: [u32; RequestKind::ALL.len()],
}

impl InFlight {
    pub fn start(&mut self, kind: RequestKind) {
        self.counts[kind.index()] += 1;
    }

    /// Saturates at zero, so a stray completion cannot underflow.
    pub fn finish(&mut self, kind: RequestKind) {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_sub(1);
    }

    pub fn count(&self, kind: RequestKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn is_loading(&self, kind: RequestKind) -> bool {
        self.count(kind) > 0
    }

    pub fn any(&self) -> bool {
        self.counts.iter().any(|c| *c > 0)
    }
}
