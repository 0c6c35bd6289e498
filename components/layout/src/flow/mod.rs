//! Flow layout: items arranged horizontally and wrapped vertically.
//!
//! [`FlowLayoutEngine`] is the pure positioning algorithm and also the
//! [`Layout`] used when a flow participates in a larger layout pass.
//! [`FlowContainer`] is the stateful host that owns arranged children.

mod container;
mod engine;

pub use container::FlowContainer;
pub use engine::{FlowLayoutEngine, FlowPlacement};

use alloc::vec::Vec;

use crate::{HorizontalAlignment, Layout, ProposalSize, Rect, Size, SubView};

/// Measures a child the way flow containers do.
///
/// The child is asked for its compressed size first. Views that report a zero
/// or negative dimension there (typically views without constraints of their
/// own) are measured from their content instead.
#[must_use]
pub fn measure_size(view: &dyn SubView) -> Size {
    let size = view.size_that_fits(ProposalSize::ZERO);
    if size.is_degenerate() {
        view.content_size()
    } else {
        size
    }
}

fn measure_all(children: &[&dyn SubView]) -> Vec<Rect> {
    children
        .iter()
        .map(|child| Rect::from_size(measure_size(*child)))
        .collect()
}

impl Layout for FlowLayoutEngine {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::new(proposal.finite_width().unwrap_or(0.0), 0.0);
        }

        let items = measure_all(children);

        if let Some(width) = proposal.finite_width() {
            let bounds = Rect::from_size(Size::new(width, 0.0));
            let placement = self.position(&items, bounds);
            return Size::new(width, placement.fitting_height);
        }

        // Unconstrained: everything fits on one leading-aligned row.
        let single_row = self.horizontal_alignment(HorizontalAlignment::Leading);
        let bounds = Rect::from_size(Size::new(f64::INFINITY, 0.0));
        let placement = single_row.position(&items, bounds);
        let width = placement
            .frames(&items)
            .map(|frame| frame.max_x())
            .fold(0.0, f64::max);
        Size::new(width, placement.fitting_height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let items = measure_all(children);
        let placement = self.position(&items, bounds);
        placement.frames(&items).collect()
    }
}
