//! Probe points reported by the search algorithms.
//!
//! Every algorithm has an `*_observed` variant that takes a [`SearchObserver`].
//! The plain variants pass `&mut ()` which ignores everything.

/// A single step taken by one of the search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEvent {
    /// Jump search compared the last item of block `block` (numbered from 1).
    BlockEnd { block: usize, index: usize },
    /// Linear scan over `[start, end)` is about to start.
    LinearScan { start: usize, end: usize },
    /// Binary search probed `cut` inside the window `[low, high)`.
    Bisect { low: usize, high: usize, cut: usize },
    /// Interpolation search estimated `cut` inside the window `[low, high)`.
    ///
    /// `cut` is `None` if the estimate fell outside of the window.
    Interpolate {
        low: usize,
        high: usize,
        cut: Option<usize>,
    },
    /// Interpolation search hit a window where first and last values are equal.
    FlatWindow { low: usize, high: usize },
}

impl ProbeEvent {
    pub fn algorithm(&self) -> &'static str {
        match self {
            ProbeEvent::BlockEnd { .. } => "jump",
            ProbeEvent::LinearScan { .. } => "linear",
            ProbeEvent::Bisect { .. } => "binary",
            ProbeEvent::Interpolate { .. } | ProbeEvent::FlatWindow { .. } => "interpolation",
        }
    }
}

pub trait SearchObserver {
    fn on_probe(&mut self, event: ProbeEvent);
}

impl SearchObserver for () {
    #[inline]
    fn on_probe(&mut self, _event: ProbeEvent) {}
}

/// Records every event in order.
impl SearchObserver for Vec<ProbeEvent> {
    fn on_probe(&mut self, event: ProbeEvent) {
        self.push(event);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_probe(&mut self, event: ProbeEvent) {
        (**self).on_probe(event)
    }
}

/// Counts probes by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeCounter {
    pub block_ends: usize,
    pub linear_scans: usize,
    pub bisections: usize,
    pub interpolations: usize,
    pub flat_windows: usize,
}

impl ProbeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.block_ends + self.linear_scans + self.bisections + self.interpolations + self.flat_windows
    }
}

impl SearchObserver for ProbeCounter {
    fn on_probe(&mut self, event: ProbeEvent) {
        match event {
            ProbeEvent::BlockEnd { .. } => self.block_ends += 1,
            ProbeEvent::LinearScan { .. } => self.linear_scans += 1,
            ProbeEvent::Bisect { .. } => self.bisections += 1,
            ProbeEvent::Interpolate { .. } => self.interpolations += 1,
            ProbeEvent::FlatWindow { .. } => self.flat_windows += 1,
        }
    }
}

/// Emits every event as a `TRACE` level [`tracing`] event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_probe(&mut self, event: ProbeEvent) {
        let algorithm = event.algorithm();
        match event {
            ProbeEvent::BlockEnd { block, index } => {
                tracing::trace!(algorithm, block, index, "end of block");
            }
            ProbeEvent::LinearScan { start, end } => {
                tracing::trace!(algorithm, start, end, "linear scan");
            }
            ProbeEvent::Bisect { low, high, cut } => {
                tracing::trace!(algorithm, low, high, cut, "bisect");
            }
            ProbeEvent::Interpolate { low, high, cut } => {
                tracing::trace!(algorithm, low, high, cut = ?cut, "interpolate");
            }
            ProbeEvent::FlatWindow { low, high } => {
                tracing::trace!(algorithm, low, high, "flat window");
            }
        }
    }
}
