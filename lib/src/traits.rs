//! Hooks for whoever displays the board.

use crate::{cells::Transition, dimensions::Dimensions};

/// Notifications sent by a [`Board`](crate::Board).
///
/// All methods do nothing by default, so an implementor only overrides
/// the ones it cares about. `()` is an observer that ignores everything.
///
/// The calls are synchronous: the board waits for them to return.
pub trait Observer {
    /// A generation step has finished and the new grid is in place.
    ///
    /// `transitions` lists the cells that changed, for incremental redrawing.
    fn generation_advanced(&mut self, generation: u64, transitions: &[Transition]) {
        let _ = (generation, transitions);
    }

    /// A loaded pattern suggests a zoom level.
    fn zoom_change_requested(&mut self, zoom: u32) {
        let _ = zoom;
    }

    /// The board has been resized, e.g. to fit a loaded pattern.
    ///
    /// The descriptor displays as `RxC`.
    fn viewport_change_requested(&mut self, viewport: Dimensions) {
        let _ = viewport;
    }
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn generation_advanced(&mut self, generation: u64, transitions: &[Transition]) {
        (**self).generation_advanced(generation, transitions);
    }

    fn zoom_change_requested(&mut self, zoom: u32) {
        (**self).zoom_change_requested(zoom);
    }

    fn viewport_change_requested(&mut self, viewport: Dimensions) {
        (**self).viewport_change_requested(viewport);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn generation_advanced(&mut self, generation: u64, transitions: &[Transition]) {
        (**self).generation_advanced(generation, transitions);
    }

    fn zoom_change_requested(&mut self, zoom: u32) {
        (**self).zoom_change_requested(zoom);
    }

    fn viewport_change_requested(&mut self, viewport: Dimensions) {
        (**self).viewport_change_requested(viewport);
    }
}
