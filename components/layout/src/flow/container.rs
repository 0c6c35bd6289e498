//! A layout host that owns its arranged children.
//!
//! [`FlowContainer`] keeps the children in order, measures them on every
//! pass, and remembers the height its last layout needed so it can report an
//! intrinsic height to whatever contains it.

use alloc::vec::Vec;

use crate::{
    Direction, FlowLayoutEngine, HorizontalAlignment, Rect, Size, SubView, VerticalAlignment,
    flow::measure_size,
};

/// A container whereby children are arranged horizontally and wrapped
/// vertically.
///
/// Every mutation that could change the outcome of a layout pass marks the
/// container as needing layout; [`layout_subviews`](Self::layout_subviews)
/// clears the flag again.
#[derive(Debug, Clone)]
pub struct FlowContainer<V> {
    engine: FlowLayoutEngine,
    arranged: Vec<V>,
    bounds: Rect,
    last_fitting_height: f64,
    needs_layout: bool,
}

impl<V> Default for FlowContainer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FlowContainer<V> {
    /// Creates an empty container with the default engine configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_engine(FlowLayoutEngine::new())
    }

    /// Creates an empty container using `engine` for its configuration.
    #[must_use]
    pub const fn with_engine(engine: FlowLayoutEngine) -> Self {
        Self {
            engine,
            arranged: Vec::new(),
            bounds: Rect::from_size(Size::zero()),
            last_fitting_height: 0.0,
            needs_layout: false,
        }
    }

    /// The engine configuration used for the next pass.
    #[must_use]
    pub const fn engine(&self) -> &FlowLayoutEngine {
        &self.engine
    }

    /// The arranged children, in layout order.
    #[must_use]
    pub fn views(&self) -> &[V] {
        &self.arranged
    }

    /// Number of arranged children.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.arranged.len()
    }

    /// Whether the container has no arranged children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arranged.is_empty()
    }

    /// The bounds the next pass lays out in.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether something changed since the last pass.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// The height the last pass needed to fit every child.
    ///
    /// The container has no intrinsic width; it takes whatever width it is
    /// given and grows downwards.
    #[must_use]
    pub const fn intrinsic_height(&self) -> f64 {
        self.last_fitting_height
    }

    /// Marks the container as needing a layout pass.
    pub fn set_needs_layout(&mut self) {
        if !self.needs_layout {
            tracing::debug!(views = self.arranged.len(), "flow container invalidated");
        }
        self.needs_layout = true;
    }

    /// Sets the direction children flow within a row.
    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.engine.direction = direction;
        self.set_needs_layout();
        self
    }

    /// Sets the horizontal alignment of each row.
    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) -> &mut Self {
        self.engine.horizontal_alignment = alignment;
        self.set_needs_layout();
        self
    }

    /// Sets the vertical alignment of children within their row.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) -> &mut Self {
        self.engine.vertical_alignment = alignment;
        self.set_needs_layout();
        self
    }

    /// Sets the gap between children in a row.
    pub fn set_horizontal_spacing(&mut self, spacing: f64) -> &mut Self {
        self.engine.horizontal_spacing = spacing;
        self.set_needs_layout();
        self
    }

    /// Sets the gap between rows.
    pub fn set_vertical_spacing(&mut self, spacing: f64) -> &mut Self {
        self.engine.vertical_spacing = spacing;
        self.set_needs_layout();
        self
    }

    /// Sets both the horizontal and vertical spacing.
    pub fn set_spacing(&mut self, spacing: f64) -> &mut Self {
        self.engine.horizontal_spacing = spacing;
        self.engine.vertical_spacing = spacing;
        self.set_needs_layout();
        self
    }

    /// Moves the container to new bounds.
    ///
    /// Only the size is used for layout: frames from
    /// [`layout_subviews`](Self::layout_subviews) are relative to the
    /// container's own origin. Only a real change invalidates the layout.
    pub fn set_bounds(&mut self, bounds: Rect) -> &mut Self {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.set_needs_layout();
        }
        self
    }

    /// Adds a child after the existing ones.
    pub fn append(&mut self, view: V) -> &mut Self {
        self.arranged.push(view);
        self.set_needs_layout();
        self
    }

    /// Adds several children after the existing ones, keeping their order.
    pub fn append_many(&mut self, views: impl IntoIterator<Item = V>) -> &mut Self {
        self.arranged.extend(views);
        self.set_needs_layout();
        self
    }

    /// Inserts a child at `position`, clamped to the current child count.
    pub fn insert(&mut self, view: V, position: usize) -> &mut Self {
        let position = position.min(self.arranged.len());
        self.arranged.insert(position, view);
        self.set_needs_layout();
        self
    }

    /// Removes the child at `position`, or the last child when `None`.
    ///
    /// Returns `None` and leaves the container untouched when the position is
    /// out of range or there are no children.
    pub fn pop(&mut self, position: Option<usize>) -> Option<V> {
        let last = self.arranged.len().checked_sub(1)?;
        let index = position.unwrap_or(last);
        if index > last {
            return None;
        }
        let view = self.arranged.remove(index);
        self.set_needs_layout();
        Some(view)
    }

    /// Removes the first child equal to `view`.
    pub fn remove(&mut self, view: &V) -> Option<V>
    where
        V: PartialEq,
    {
        let index = self.arranged.iter().position(|candidate| candidate == view)?;
        self.pop(Some(index))
    }
}

impl<V: SubView> FlowContainer<V> {
    fn measured_items(&self) -> Vec<Rect> {
        self.arranged
            .iter()
            .map(|view| Rect::from_size(measure_size(view)))
            .collect()
    }

    /// Lays the children out in the current bounds.
    ///
    /// Returns one frame per child, in child order, and caches the fitting
    /// height as the container's intrinsic height.
    pub fn layout_subviews(&mut self) -> Vec<Rect> {
        self.needs_layout = false;

        if self.arranged.is_empty() {
            self.last_fitting_height = 0.0;
            return Vec::new();
        }

        let items = self.measured_items();
        let local = Rect::from_size(*self.bounds.size());
        let placement = self.engine.position(&items, local);
        self.last_fitting_height = placement.fitting_height;
        tracing::debug!(
            views = items.len(),
            width = self.bounds.width(),
            fitting_height = placement.fitting_height,
            "flow container laid out"
        );
        placement.frames(&items).collect()
    }

    /// The size the container needs for a proposed size.
    ///
    /// A non-finite proposed width falls back to the current bounds' width.
    /// The proposed height is ignored; the returned height always fits every
    /// child.
    #[must_use]
    pub fn size_that_fits(&self, size: Size) -> Size {
        let width = if size.width.is_finite() {
            size.width
        } else {
            self.bounds.width()
        };
        let items = self.measured_items();
        let bounds = Rect::from_size(Size::new(width, 0.0));
        let placement = self.engine.position(&items, bounds);
        Size::new(width, placement.fitting_height)
    }

    /// The size the container needs when fitted into a parent.
    ///
    /// `Some(width)` requires that width (when finite); `None` lets the
    /// container keep its current bounds' width.
    #[must_use]
    pub fn fitting_size(&self, required_width: Option<f64>) -> Size {
        let width = required_width
            .filter(|width| width.is_finite())
            .unwrap_or_else(|| self.bounds.width());
        let measured = self.size_that_fits(Size::new(width, f64::MAX));
        Size::new(width, measured.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, ProposalSize};
    use alloc::vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Tile {
        id: u32,
        size: Size,
    }

    impl Tile {
        const fn new(id: u32, width: f64, height: f64) -> Self {
            Self {
                id,
                size: Size::new(width, height),
            }
        }
    }

    impl SubView for Tile {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }
    }

    fn container_with(width: f64) -> FlowContainer<Tile> {
        let mut flow = FlowContainer::new();
        flow.set_bounds(Rect::from_size(Size::new(width, 0.0)));
        flow
    }

    #[test]
    fn test_setters_chain_and_invalidate() {
        let mut flow: FlowContainer<Tile> = FlowContainer::new();
        assert!(!flow.needs_layout());

        flow.set_spacing(8.0)
            .set_vertical_alignment(VerticalAlignment::Bottom)
            .set_direction(Direction::Reverse);

        assert!(flow.needs_layout());
        assert_eq!(flow.engine().horizontal_spacing, 8.0);
        assert_eq!(flow.engine().vertical_spacing, 8.0);
        assert_eq!(flow.engine().vertical_alignment, VerticalAlignment::Bottom);
        assert_eq!(flow.engine().direction, Direction::Reverse);
    }

    #[test]
    fn test_layout_subviews_caches_fitting_height() {
        let mut flow = container_with(100.0);
        flow.set_vertical_spacing(4.0)
            .append(Tile::new(1, 60.0, 20.0))
            .append(Tile::new(2, 60.0, 30.0));

        let frames = flow.layout_subviews();

        assert!(!flow.needs_layout());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].origin(), Point::new(0.0, 24.0));
        assert_eq!(flow.intrinsic_height(), 54.0);
    }

    #[test]
    fn test_layout_subviews_resets_height_when_empty() {
        let mut flow = container_with(100.0);
        flow.append(Tile::new(1, 60.0, 20.0));
        flow.layout_subviews();
        assert_eq!(flow.intrinsic_height(), 20.0);

        assert_eq!(flow.pop(None), Some(Tile::new(1, 60.0, 20.0)));
        assert!(flow.layout_subviews().is_empty());
        assert_eq!(flow.intrinsic_height(), 0.0);
    }

    #[test]
    fn test_insert_clamps_position() {
        let mut flow: FlowContainer<Tile> = FlowContainer::new();
        flow.append_many([Tile::new(1, 1.0, 1.0), Tile::new(2, 1.0, 1.0)])
            .insert(Tile::new(3, 1.0, 1.0), 0)
            .insert(Tile::new(4, 1.0, 1.0), 99);

        let ids: Vec<u32> = flow.views().iter().map(|tile| tile.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_pop_out_of_range_is_noop() {
        let mut flow: FlowContainer<Tile> = FlowContainer::new();
        assert_eq!(flow.pop(None), None);

        flow.append(Tile::new(1, 1.0, 1.0));
        flow.layout_subviews();
        assert_eq!(flow.pop(Some(1)), None);
        assert_eq!(flow.view_count(), 1);
        assert!(!flow.needs_layout());
    }

    #[test]
    fn test_remove_by_value() {
        let mut flow: FlowContainer<Tile> = FlowContainer::new();
        flow.append_many([Tile::new(1, 1.0, 1.0), Tile::new(2, 1.0, 1.0)]);

        assert_eq!(flow.remove(&Tile::new(2, 1.0, 1.0)), Some(Tile::new(2, 1.0, 1.0)));
        assert_eq!(flow.remove(&Tile::new(9, 1.0, 1.0)), None);
        assert_eq!(flow.view_count(), 1);
    }

    #[test]
    fn test_set_bounds_only_invalidates_on_change() {
        let mut flow = container_with(100.0);
        flow.layout_subviews();

        flow.set_bounds(Rect::from_size(Size::new(100.0, 0.0)));
        assert!(!flow.needs_layout());

        flow.set_bounds(Rect::from_size(Size::new(120.0, 0.0)));
        assert!(flow.needs_layout());
    }

    #[test]
    fn test_frames_are_relative_to_container_origin() {
        let mut flow: FlowContainer<Tile> = FlowContainer::new();
        flow.set_bounds(Rect::new(Point::new(16.0, 30.0), Size::new(100.0, 0.0)))
            .append_many([Tile::new(1, 60.0, 20.0), Tile::new(2, 60.0, 20.0)]);

        let frames = flow.layout_subviews();

        assert_eq!(frames[0].origin(), Point::zero());
        assert_eq!(frames[1].origin(), Point::new(0.0, 20.0));
    }

    #[test]
    fn test_size_that_fits_uses_bounds_width_when_unbounded() {
        let mut flow = container_with(100.0);
        flow.append_many([Tile::new(1, 60.0, 20.0), Tile::new(2, 60.0, 30.0)]);

        assert_eq!(flow.size_that_fits(Size::new(200.0, 0.0)), Size::new(200.0, 30.0));
        assert_eq!(
            flow.size_that_fits(Size::new(f64::INFINITY, 0.0)),
            Size::new(100.0, 50.0)
        );
        // Measuring never touches the cached height.
        assert_eq!(flow.intrinsic_height(), 0.0);
    }

    #[test]
    fn test_fitting_size() {
        let mut flow = container_with(100.0);
        flow.append_many([Tile::new(1, 60.0, 20.0), Tile::new(2, 60.0, 30.0)]);

        assert_eq!(flow.fitting_size(Some(130.0)), Size::new(130.0, 30.0));
        assert_eq!(flow.fitting_size(None), Size::new(100.0, 50.0));
        assert_eq!(flow.fitting_size(Some(f64::INFINITY)), Size::new(100.0, 50.0));
    }
}
