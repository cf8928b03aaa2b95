//! Event types and sinks for observing sampling runs.
//!
//! This module defines [`SampleEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing [`crate::poisson::driver::run_sampling`]
//! or [`crate::poisson::driver::PoissonSampler::run_with_events`].
use glam::Vec2;

use crate::config::SampleConfig;
use crate::poisson::driver::SampleStats;

/// Describes events emitted while sampling.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SampleEvent {
    /// Emitted once the grid is built, before the seed is placed.
    RunStarted {
        /// The configuration used.
        config: SampleConfig,
        /// Grid columns.
        cols: usize,
        /// Grid rows.
        rows: usize,
    },

    /// Emitted when the seed point is stored.
    SeedPlaced {
        /// Seed position in domain coordinates.
        position: Vec2,
        /// Random draws used to find an in-grid seed.
        attempts: u32,
    },

    /// Emitted when a candidate is stored in the grid and becomes active.
    CandidateAccepted {
        /// Active point the candidate was spawned from.
        parent: Vec2,
        /// Accepted position.
        position: Vec2,
    },

    /// Emitted for every discarded candidate.
    CandidateRejected {
        /// Active point the candidate was spawned from.
        parent: Vec2,
        /// Discarded position.
        candidate: Vec2,
        /// Why it was discarded.
        reason: RejectReason,
    },

    /// Emitted when an active point exhausts its attempts and leaves the active set.
    PointRetired {
        /// Retired position; it remains a sample.
        position: Vec2,
    },

    /// Emitted when the active set is empty and the run completed.
    RunFinished {
        /// Number of samples produced.
        point_count: usize,
        /// Counters collected during the run.
        stats: SampleStats,
    },
}

/// Why a spawned candidate was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Outside the inset domain.
    OutOfDomain,
    /// Closer than the minimum distance to an accepted point.
    TooClose,
    /// Inside the domain but mapped to a cell past the last grid row or column.
    OutsideGrid,
}

/// Discriminant of [`SampleEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEventKind {
    RunStarted,
    SeedPlaced,
    CandidateAccepted,
    CandidateRejected,
    PointRetired,
    RunFinished,
}

impl SampleEvent {
    pub fn kind(&self) -> SampleEventKind {
        match self {
            SampleEvent::RunStarted { .. } => SampleEventKind::RunStarted,
            SampleEvent::SeedPlaced { .. } => SampleEventKind::SeedPlaced,
            SampleEvent::CandidateAccepted { .. } => SampleEventKind::CandidateAccepted,
            SampleEvent::CandidateRejected { .. } => SampleEventKind::CandidateRejected,
            SampleEvent::PointRetired { .. } => SampleEventKind::PointRetired,
            SampleEvent::RunFinished { .. } => SampleEventKind::RunFinished,
        }
    }
}

/// A generic event sink that accepts [`SampleEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SampleEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: SampleEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SampleEvent) {}

    #[inline]
    fn wants(&self, _kind: SampleEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SampleEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SampleEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SampleEvent),
{
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SampleEvent>,
    only: Option<Vec<SampleEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collects only the listed kinds.
    pub fn only(kinds: impl IntoIterator<Item = SampleEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SampleEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SampleEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: SampleEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    #[inline]
    fn wants(&self, kind: SampleEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SampleEvent) {
        let kind = event.kind();
        for sink in &mut self.sinks {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
    }

    fn wants(&self, kind: SampleEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retired(x: f32) -> SampleEvent {
        SampleEvent::PointRetired {
            position: Vec2::new(x, x),
        }
    }

    #[test]
    fn event_kind_matches_variant() {
        assert_eq!(retired(1.0).kind(), SampleEventKind::PointRetired);
        let rejected = SampleEvent::CandidateRejected {
            parent: Vec2::ZERO,
            candidate: Vec2::ONE,
            reason: RejectReason::TooClose,
        };
        assert_eq!(rejected.kind(), SampleEventKind::CandidateRejected);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(SampleEventKind::RunStarted));
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());
        sink.send(retired(1.0));
        sink.send(retired(2.0));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(SampleEventKind::PointRetired), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn vec_sink_only_filters_kinds() {
        let mut sink = VecSink::only([SampleEventKind::SeedPlaced]);
        assert!(!sink.wants(SampleEventKind::PointRetired));
        sink.send(retired(1.0));
        sink.send(SampleEvent::SeedPlaced {
            position: Vec2::ONE,
            attempts: 1,
        });
        assert_eq!(sink.len(), 1);
        assert!(matches!(
            sink.as_slice()[0],
            SampleEvent::SeedPlaced { attempts: 1, .. }
        ));
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(retired(3.0));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
    }

    #[test]
    fn multi_sink_skips_sinks_that_do_not_want_kind() {
        let mut multi = MultiSink::new();
        multi.push(VecSink::only([SampleEventKind::RunStarted]));
        multi.push(VecSink::new());
        assert!(multi.wants(SampleEventKind::PointRetired));
        multi.send(retired(3.0));
        let sinks = multi.into_inner();
        assert!(sinks[0].is_empty());
        assert_eq!(sinks[1].len(), 1);
    }

    #[test]
    fn empty_multi_sink_wants_nothing() {
        let multi: MultiSink<VecSink> = MultiSink::default();
        assert!(multi.is_empty());
        assert!(!multi.wants(SampleEventKind::RunFinished));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(retired(0.0));
        sink.send(retired(1.0));
        assert_eq!(count, 2);
    }
}
