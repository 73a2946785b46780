//! Cooperative progress notification and abort polling.
//!
//! Grounded in `original_source/src/picross/include/picross/picross_observer.h`'s
//! `ObserverEvent` enum and `Observer` function-object signature. Modeled here
//! as a trait object rather than a boxed closure, matching the teacher's
//! preference for trait-based extension points (e.g. the `GameBoard` trait in
//! `game/src/model/gameboard.rs`) while staying zero-cost when no observer is
//! attached (`Option<&dyn Observer>`).

use crate::core::Line;

/// What happened during a solve, reported to an attached [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverEvent {
    /// A line became fully determined.
    KnownLine,
    /// A line changed, whether or not it became fully determined.
    DeltaLine,
    /// The solver is about to branch on a line.
    Branching,
    /// A complete solution was found.
    SolvedGrid,
    /// Internal bookkeeping (reduction state transition), for diagnostics.
    InternalState,
}

/// A sink for solve-progress notifications. Implementors never see tile
/// data they should not have access to -- `line` carries exactly the line
/// that changed.
pub trait Observer {
    fn notify(&self, event: ObserverEvent, line: Option<&Line>, depth: usize);

    /// Called once per reduction pass with the current alternatives
    /// threshold, independent of `notify`. Default no-op: most observers
    /// only care about line-level events.
    fn notify_progress(&self, _max_alternatives: u32, _depth: usize) {}
}

/// Polled between lines and between branches; returning `true` aborts the
/// solve as soon as practical, mirroring `PicrossSolverAborted` in
/// `original_source/src/picross/src/work_grid.h` (thrown rather than
/// polled in C++; polling is the idiomatic Rust shape for cooperative
/// cancellation without unwinding).
pub trait AbortSignal {
    fn should_abort(&self) -> bool;
}

impl<F: Fn() -> bool> AbortSignal for F {
    fn should_abort(&self) -> bool {
        self()
    }
}
