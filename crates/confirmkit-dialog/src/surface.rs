#![forbid(unsafe_code)]

//! The presentation seam between the dialog core and a widget host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::DialogLayout;

/// A host that can present and dismiss a modal dialog.
pub trait DialogSurface {
    /// Present the dialog as described by `layout`.
    fn show(&mut self, layout: &DialogLayout);

    /// Dismiss the dialog.
    fn hide(&mut self);
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Shown,
    Hidden,
}

#[derive(Debug, Default)]
struct SurfaceLog {
    events: Vec<SurfaceEvent>,
    shown: Vec<DialogLayout>,
}

/// Headless surface that records every call.
///
/// Clones share one log, so a test can keep a clone after handing the
/// surface to a dialog.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in order.
    #[must_use]
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.log.borrow().events.clone()
    }

    #[must_use]
    pub fn show_count(&self) -> usize {
        self.count(SurfaceEvent::Shown)
    }

    #[must_use]
    pub fn hide_count(&self) -> usize {
        self.count(SurfaceEvent::Hidden)
    }

    /// Whether the last call was a show.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.log.borrow().events.last() == Some(&SurfaceEvent::Shown)
    }

    /// The layout passed to the most recent show.
    #[must_use]
    pub fn last_shown(&self) -> Option<DialogLayout> {
        self.log.borrow().shown.last().cloned()
    }

    fn count(&self, kind: SurfaceEvent) -> usize {
        self.log
            .borrow()
            .events
            .iter()
            .filter(|e| **e == kind)
            .count()
    }
}

impl DialogSurface for RecordingSurface {
    fn show(&mut self, layout: &DialogLayout) {
        let mut log = self.log.borrow_mut();
        log.events.push(SurfaceEvent::Shown);
        log.shown.push(layout.clone());
    }

    fn hide(&mut self) {
        self.log.borrow_mut().events.push(SurfaceEvent::Hidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let probe = RecordingSurface::new();
        let mut surface = probe.clone();
        surface.show(&DialogLayout::default());
        surface.hide();
        surface.show(&DialogLayout::default());
        assert_eq!(
            probe.events(),
            [SurfaceEvent::Shown, SurfaceEvent::Hidden, SurfaceEvent::Shown]
        );
        assert_eq!(probe.show_count(), 2);
        assert_eq!(probe.hide_count(), 1);
        assert!(probe.is_visible());
        assert!(probe.last_shown().is_some());
    }

    #[test]
    fn fresh_surface_is_hidden() {
        let probe = RecordingSurface::new();
        assert!(!probe.is_visible());
        assert!(probe.last_shown().is_none());
    }
}
