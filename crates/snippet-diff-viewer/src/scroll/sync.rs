//! Scroll synchronization between the two diff columns.
//!
//! Mirroring a scroll to the other pane makes that pane report a scroll of
//! its own. Instead of a timed guard, the sync remembers which pane it moved
//! and to which offset, and swallows exactly that one echo.
//!
//! A pane clamps a programmatic scroll to its own extent, so the echo may
//! report a smaller offset than the one requested. Such an echo is still the
//! echo, and the clamped components are remembered as that pane's limit so
//! later mirrors never ask for an offset the pane cannot reach.

/// One of the two diff columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Left,
    Right,
}

impl Pane {
    /// The opposite column.
    pub fn other(self) -> Self {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }

    fn index(self) -> usize {
        match self {
            Pane::Left => 0,
            Pane::Right => 1,
        }
    }
}

/// Vertical and horizontal scroll position of a pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScrollOffset {
    pub top: u32,
    pub left: u32,
}

impl ScrollOffset {
    pub fn new(top: u32, left: u32) -> Self {
        Self { top, left }
    }

    /// Whether `self` is `requested` after clamping to some extent.
    fn fits_within(self, requested: ScrollOffset) -> bool {
        self.top <= requested.top && self.left <= requested.left
    }
}

/// Largest offsets a pane has been observed to accept, per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Extent {
    top: Option<u32>,
    left: Option<u32>,
}

impl Extent {
    fn clamp(&self, offset: ScrollOffset) -> ScrollOffset {
        ScrollOffset {
            top: self.top.map_or(offset.top, |max| offset.top.min(max)),
            left: self.left.map_or(offset.left, |max| offset.left.min(max)),
        }
    }

    /// Record the axes on which `reported` fell short of `requested`.
    fn learn(&mut self, requested: ScrollOffset, reported: ScrollOffset) {
        if reported.top < requested.top {
            self.top = Some(reported.top);
        }
        if reported.left < requested.left {
            self.left = Some(reported.left);
        }
    }

    /// Forget a limit the pane has since scrolled past (it grew).
    fn widen(&mut self, reported: ScrollOffset) {
        if self.top.is_some_and(|max| reported.top > max) {
            self.top = None;
        }
        if self.left.is_some_and(|max| reported.left > max) {
            self.left = None;
        }
    }
}

/// What the host must do in response to a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Move `target` to `offset`.
    Mirror { target: Pane, offset: ScrollOffset },
    /// The event was the echo of a previous mirror; do nothing.
    Suppressed,
    /// The other pane is already there; do nothing.
    Unchanged,
}

/// Keeps two panes at the same scroll offset without feedback loops.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    positions: [ScrollOffset; 2],
    extents: [Extent; 2],
    /// Pane moved by the last mirror and the offset it was moved to.
    expected_echo: Option<(Pane, ScrollOffset)>,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known offset of a pane.
    pub fn position(&self, pane: Pane) -> ScrollOffset {
        self.positions[pane.index()]
    }

    /// Whether an echo from a mirrored pane is still outstanding.
    pub fn is_awaiting_echo(&self) -> bool {
        self.expected_echo.is_some()
    }

    /// Forget positions, learned extents and any outstanding echo, e.g.
    /// after the columns were re-rendered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Handle a scroll event reported by `pane`.
    pub fn on_scroll(&mut self, pane: Pane, offset: ScrollOffset) -> ScrollOutcome {
        self.positions[pane.index()] = offset;
        self.extents[pane.index()].widen(offset);

        if let Some((echo_pane, requested)) = self.expected_echo {
            if echo_pane == pane {
                // Any event from the mirrored pane settles the expectation;
                // only the requested offset, possibly clamped, is the echo.
                self.expected_echo = None;
                if offset.fits_within(requested) {
                    self.extents[pane.index()].learn(requested, offset);
                    log::trace!("ScrollSync: suppressed echo from {:?}", pane);
                    return ScrollOutcome::Suppressed;
                }
            }
        }

        let target = pane.other();
        let mirrored = self.extents[target.index()].clamp(offset);
        if self.positions[target.index()] == mirrored {
            return ScrollOutcome::Unchanged;
        }

        self.positions[target.index()] = mirrored;
        self.expected_echo = Some((target, mirrored));
        ScrollOutcome::Mirror {
            target,
            offset: mirrored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    /// Two fake scrollable panes that, like a browser, clamp to their own
    /// extent and fire a scroll event whenever their offset actually changes.
    struct Harness {
        sync: ScrollSync,
        panes: [ScrollOffset; 2],
        maxima: [ScrollOffset; 2],
        events: VecDeque<(Pane, ScrollOffset)>,
        handler_calls: usize,
    }

    impl Harness {
        fn new() -> Self {
            let unbounded = ScrollOffset::new(u32::MAX, u32::MAX);
            Self::with_maxima(unbounded, unbounded)
        }

        fn with_maxima(left: ScrollOffset, right: ScrollOffset) -> Self {
            Self {
                sync: ScrollSync::new(),
                panes: [ScrollOffset::default(); 2],
                maxima: [left, right],
                events: VecDeque::new(),
                handler_calls: 0,
            }
        }

        fn set(&mut self, pane: Pane, offset: ScrollOffset) {
            let max = self.maxima[pane.index()];
            let offset = ScrollOffset::new(offset.top.min(max.top), offset.left.min(max.left));
            if self.panes[pane.index()] != offset {
                self.panes[pane.index()] = offset;
                self.events.push_back((pane, offset));
            }
        }

        fn user_scroll(&mut self, pane: Pane, offset: ScrollOffset) {
            self.set(pane, offset);
            self.drain();
        }

        fn drain(&mut self) {
            // Bounded so a feedback loop fails the test instead of hanging it
            for _ in 0..100 {
                let Some((pane, offset)) = self.events.pop_front() else {
                    return;
                };
                self.handler_calls += 1;
                if let ScrollOutcome::Mirror { target, offset } = self.sync.on_scroll(pane, offset)
                {
                    self.set(target, offset);
                }
            }
        }

        fn pane(&self, pane: Pane) -> ScrollOffset {
            self.panes[pane.index()]
        }
    }

    #[test]
    fn test_left_scroll_reaches_right_without_echo_loop() {
        let mut harness = Harness::new();
        harness.user_scroll(Pane::Left, ScrollOffset::new(100, 0));

        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(100, 0));
        assert!(harness.handler_calls <= 2);
        assert_eq!(harness.handler_calls, 2);
        assert!(!harness.sync.is_awaiting_echo());
    }

    #[test]
    fn test_horizontal_offset_is_mirrored() {
        let mut harness = Harness::new();
        harness.user_scroll(Pane::Right, ScrollOffset::new(20, 35));

        assert_eq!(harness.pane(Pane::Left), ScrollOffset::new(20, 35));
        assert_eq!(harness.handler_calls, 2);
    }

    #[test]
    fn test_rapid_scrolls_from_both_sides_are_not_dropped() {
        let mut harness = Harness::new();
        harness.user_scroll(Pane::Left, ScrollOffset::new(100, 0));
        harness.user_scroll(Pane::Left, ScrollOffset::new(110, 0));
        harness.user_scroll(Pane::Right, ScrollOffset::new(50, 0));

        assert_eq!(harness.pane(Pane::Left), ScrollOffset::new(50, 0));
        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(50, 0));
        assert_eq!(harness.handler_calls, 6);
    }

    #[test]
    fn test_genuine_scroll_from_mirrored_pane_is_not_swallowed() {
        let mut sync = ScrollSync::new();
        assert_eq!(
            sync.on_scroll(Pane::Left, ScrollOffset::new(100, 0)),
            ScrollOutcome::Mirror {
                target: Pane::Right,
                offset: ScrollOffset::new(100, 0)
            }
        );

        // The user scrolls the right pane before its echo arrives
        assert_eq!(
            sync.on_scroll(Pane::Right, ScrollOffset::new(140, 0)),
            ScrollOutcome::Mirror {
                target: Pane::Left,
                offset: ScrollOffset::new(140, 0)
            }
        );
        assert_eq!(
            sync.on_scroll(Pane::Left, ScrollOffset::new(140, 0)),
            ScrollOutcome::Suppressed
        );
    }

    #[test]
    fn test_clamped_echo_keeps_longer_pane_where_the_user_put_it() {
        let mut harness =
            Harness::with_maxima(ScrollOffset::new(400, 0), ScrollOffset::new(60, 0));
        harness.user_scroll(Pane::Left, ScrollOffset::new(100, 0));

        assert_eq!(harness.pane(Pane::Left), ScrollOffset::new(100, 0));
        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(60, 0));
        assert_eq!(harness.handler_calls, 2);
        assert!(!harness.sync.is_awaiting_echo());
    }

    #[test]
    fn test_scrolling_past_the_shorter_pane_does_not_arm_a_lost_echo() {
        let mut harness =
            Harness::with_maxima(ScrollOffset::new(400, 0), ScrollOffset::new(60, 0));
        harness.user_scroll(Pane::Left, ScrollOffset::new(100, 0));
        harness.handler_calls = 0;

        // The right pane is already at its end, so nothing is mirrored
        harness.user_scroll(Pane::Left, ScrollOffset::new(150, 0));
        assert_eq!(harness.handler_calls, 1);
        assert!(!harness.sync.is_awaiting_echo());

        // A later scroll of the shorter pane is still a genuine scroll
        harness.user_scroll(Pane::Right, ScrollOffset::new(30, 0));
        assert_eq!(harness.pane(Pane::Left), ScrollOffset::new(30, 0));
        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(30, 0));
    }

    #[test]
    fn test_clamped_horizontal_axis_only() {
        let mut harness =
            Harness::with_maxima(ScrollOffset::new(400, 80), ScrollOffset::new(400, 20));
        harness.user_scroll(Pane::Left, ScrollOffset::new(50, 70));

        assert_eq!(harness.pane(Pane::Left), ScrollOffset::new(50, 70));
        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(50, 20));
        assert_eq!(harness.handler_calls, 2);

        harness.handler_calls = 0;
        harness.user_scroll(Pane::Left, ScrollOffset::new(90, 70));
        assert_eq!(harness.pane(Pane::Right), ScrollOffset::new(90, 20));
        assert_eq!(harness.handler_calls, 2);
    }

    #[test]
    fn test_no_mirror_when_already_aligned() {
        let mut sync = ScrollSync::new();
        assert_eq!(
            sync.on_scroll(Pane::Left, ScrollOffset::default()),
            ScrollOutcome::Unchanged
        );
        assert!(!sync.is_awaiting_echo());
    }

    #[test]
    fn test_reset() {
        let mut sync = ScrollSync::new();
        let _ = sync.on_scroll(Pane::Left, ScrollOffset::new(5, 5));
        sync.reset();
        assert_eq!(sync.position(Pane::Right), ScrollOffset::default());
        assert!(!sync.is_awaiting_echo());
    }
}
