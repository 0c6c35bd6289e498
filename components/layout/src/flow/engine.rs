//! The flow positioning algorithm.
//!
//! Items are packed left to right into rows. A row is closed as soon as the
//! next item would cross the bound's right edge, so every row holds at least
//! one item and no item is ever dropped. Rows stack downwards and the total
//! height they need is reported alongside the positions.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use crate::{Direction, HorizontalAlignment, Point, Rect, VerticalAlignment};

/// The positions computed for a list of items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowPlacement {
    /// The position of each item, index for index with the input items.
    pub positions: Vec<Point>,
    /// The height required to fit every row, based on the width of the bounds
    /// passed in.
    pub fitting_height: f64,
}

impl FlowPlacement {
    /// Pairs every position with the size of the matching item.
    pub fn frames<'a>(&'a self, items: &'a [Rect]) -> impl Iterator<Item = Rect> + 'a {
        self.positions
            .iter()
            .zip(items)
            .map(|(position, item)| Rect::new(*position, *item.size()))
    }
}

/// A contiguous run of items sharing one visual line.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    items: Range<usize>,
    /// The offset from the bounds' min-y (not necessarily zero).
    top_offset: f64,
    /// The height of the tallest item in the row.
    height: f64,
    /// The sum of the items' widths, not counting spacing.
    total_items_width: f64,
}

/// Computes the positions of items within a bound, arranging them
/// horizontally and wrapping them vertically.
///
/// The engine only holds configuration; every call to
/// [`position`](Self::position) starts from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FlowLayoutEngine {
    /// The direction items flow within a row.
    pub direction: Direction,
    /// The horizontal alignment of items within a row.
    pub horizontal_alignment: HorizontalAlignment,
    /// The vertical alignment of items within a row.
    pub vertical_alignment: VerticalAlignment,
    /// The horizontal distance between adjacent items within a row.
    pub horizontal_spacing: f64,
    /// The vertical distance between adjacent rows.
    pub vertical_spacing: f64,
}

impl Default for FlowLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowLayoutEngine {
    /// Creates an engine flowing forward, leading-aligned, vertically
    /// centred, with no spacing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            direction: Direction::Forward,
            horizontal_alignment: HorizontalAlignment::Leading,
            vertical_alignment: VerticalAlignment::Center,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
        }
    }

    /// Sets the direction items flow within a row.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the horizontal alignment of each row.
    #[must_use]
    pub const fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Sets the vertical alignment of items within their row.
    #[must_use]
    pub const fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Sets the gap between items in a row.
    #[must_use]
    pub const fn horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Sets the gap between rows.
    #[must_use]
    pub const fn vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Sets both the horizontal and vertical spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self.vertical_spacing = spacing;
        self
    }

    /// Returns the positions of the items within the specified bounds,
    /// and the height required to fit all items within the bounds.
    ///
    /// Only the width and height of each item are read. The bounds' origin
    /// and width drive wrapping; their height is ignored, so the result
    /// always fits every item.
    #[must_use]
    pub fn position(&self, items: &[Rect], bounds: Rect) -> FlowPlacement {
        let (rows, fitting_height) = self.rows(items, bounds);
        let mut positions = vec![Point::zero(); items.len()];
        for row in &rows {
            self.place_row(row, items, bounds, &mut positions);
        }
        tracing::trace!(
            items = items.len(),
            rows = rows.len(),
            width = bounds.width(),
            fitting_height,
            "positioned flow items"
        );
        FlowPlacement {
            positions,
            fitting_height,
        }
    }

    /// Groups items into rows based on the width available in `bounds`.
    #[allow(clippy::cast_precision_loss)]
    fn rows(&self, items: &[Rect], bounds: Rect) -> (Vec<Row>, f64) {
        let mut rows: Vec<Row> = Vec::new();
        let mut cursor = 0;

        while cursor < items.len() {
            let top_offset = rows.last().map_or(bounds.min_y(), |previous| {
                previous.top_offset + previous.height + self.vertical_spacing
            });
            let start = cursor;
            let mut height = 0.0_f64;
            let mut total_items_width = 0.0;
            let mut leading_offset = bounds.min_x();

            loop {
                let item = &items[cursor];
                cursor += 1;
                total_items_width += item.width();
                height = height.max(item.height());
                leading_offset += item.width() + self.horizontal_spacing;

                let Some(next) = items.get(cursor) else {
                    break;
                };
                let overflows = leading_offset + next.width() > bounds.max_x();
                if overflows {
                    break;
                }
            }

            tracing::trace!(row = rows.len(), start, end = cursor, height, "formed flow row");
            rows.push(Row {
                items: start..cursor,
                top_offset,
                height,
                total_items_width,
            });
        }

        let vertical_gaps = rows.len().saturating_sub(1) as f64;
        let fitting_height =
            rows.iter().map(|row| row.height).sum::<f64>() + vertical_gaps * self.vertical_spacing;
        (rows, fitting_height)
    }

    /// Writes the position of every item in `row` into `positions`.
    ///
    /// In reverse direction the row is walked back to front, so the first
    /// item takes the rightmost slot; each position is still stored at the
    /// item's own index.
    fn place_row(&self, row: &Row, items: &[Rect], bounds: Rect, positions: &mut [Point]) {
        let mut leading_offset = self.initial_leading_offset(row, bounds);
        let count = row.items.len();

        for step in 0..count {
            let index = match self.direction {
                Direction::Forward => row.items.start + step,
                Direction::Reverse => row.items.end - 1 - step,
            };
            let item = &items[index];
            positions[index] = Point::new(leading_offset, self.top_offset(item, row));
            leading_offset += item.width() + self.horizontal_spacing;
        }
    }

    fn top_offset(&self, item: &Rect, row: &Row) -> f64 {
        let shift = match self.vertical_alignment {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => (row.height - item.height()) / 2.0,
            VerticalAlignment::Bottom => row.height - item.height(),
        };
        row.top_offset + shift
    }

    /// Returns the leading offset the row's first item is placed at.
    #[allow(clippy::cast_precision_loss)]
    fn initial_leading_offset(&self, row: &Row, bounds: Rect) -> f64 {
        let gaps = row.items.len().saturating_sub(1) as f64;
        let gaps_width = gaps * self.horizontal_spacing;
        let remaining_space = bounds.width() - (row.total_items_width + gaps_width);
        let shift = match self.horizontal_alignment {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => remaining_space / 2.0,
            HorizontalAlignment::Trailing => remaining_space,
        };
        bounds.min_x() + shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn items(sizes: &[(f64, f64)]) -> Vec<Rect> {
        sizes
            .iter()
            .map(|&(width, height)| Rect::from_size(Size::new(width, height)))
            .collect()
    }

    fn bounds(width: f64) -> Rect {
        Rect::from_size(Size::new(width, 0.0))
    }

    #[test]
    fn test_rows_wrap_when_next_item_overflows() {
        let engine = FlowLayoutEngine::new().horizontal_spacing(10.0);
        let (rows, fitting_height) =
            engine.rows(&items(&[(100.0, 20.0), (100.0, 30.0), (100.0, 25.0)]), bounds(250.0));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].items, 0..2);
        assert_eq!(rows[0].height, 30.0);
        assert_eq!(rows[0].total_items_width, 200.0);
        assert_eq!(rows[1].items, 2..3);
        assert_eq!(rows[1].top_offset, 30.0);
        assert_eq!(fitting_height, 55.0);
    }

    #[test]
    fn test_row_that_exactly_fills_bounds_does_not_wrap() {
        let engine = FlowLayoutEngine::new().horizontal_spacing(10.0);
        let (rows, _) = engine.rows(&items(&[(120.0, 10.0), (120.0, 10.0)]), bounds(250.0));

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_rows_start_at_bounds_min_y() {
        let engine = FlowLayoutEngine::new().vertical_spacing(4.0);
        let bounds = Rect::new(Point::new(0.0, 12.0), Size::new(50.0, 0.0));
        let (rows, fitting_height) = engine.rows(&items(&[(40.0, 10.0), (40.0, 20.0)]), bounds);

        assert_eq!(rows[0].top_offset, 12.0);
        assert_eq!(rows[1].top_offset, 26.0);
        // Fitting height measures the rows only, not the bounds' offset.
        assert_eq!(fitting_height, 34.0);
    }

    #[test]
    fn test_center_alignment_splits_remaining_space() {
        let engine = FlowLayoutEngine::new()
            .horizontal_spacing(10.0)
            .horizontal_alignment(HorizontalAlignment::Center);
        let placement = engine.position(&items(&[(40.0, 10.0), (50.0, 10.0)]), bounds(200.0));

        // remaining = 200 - (90 + 10) = 100
        assert_eq!(placement.positions[0].x, 50.0);
        assert_eq!(placement.positions[1].x, 100.0);
    }

    #[test]
    fn test_bounds_origin_offsets_rows() {
        let engine = FlowLayoutEngine::new().horizontal_alignment(HorizontalAlignment::Trailing);
        let bounds = Rect::new(Point::new(20.0, 5.0), Size::new(100.0, 0.0));
        let placement = engine.position(&items(&[(30.0, 10.0)]), bounds);

        assert_eq!(placement.positions[0], Point::new(90.0, 5.0));
    }

    #[test]
    fn test_vertical_alignment_within_row() {
        let sizes = items(&[(10.0, 40.0), (10.0, 10.0)]);
        let cases = [
            (VerticalAlignment::Top, 0.0),
            (VerticalAlignment::Center, 15.0),
            (VerticalAlignment::Bottom, 30.0),
        ];
        for (alignment, expected) in cases {
            let engine = FlowLayoutEngine::new().vertical_alignment(alignment);
            let placement = engine.position(&sizes, bounds(100.0));
            assert_eq!(placement.positions[0].y, 0.0, "{alignment}");
            assert_eq!(placement.positions[1].y, expected, "{alignment}");
        }
    }

    #[test]
    fn test_frames_pair_positions_with_sizes() {
        let sizes = items(&[(10.0, 20.0), (30.0, 40.0)]);
        let placement = FlowLayoutEngine::new().position(&sizes, bounds(100.0));
        let frames: Vec<Rect> = placement.frames(&sizes).collect();

        assert_eq!(frames[0], Rect::new(Point::new(0.0, 10.0), Size::new(10.0, 20.0)));
        assert_eq!(frames[1], Rect::new(Point::new(10.0, 0.0), Size::new(30.0, 40.0)));
    }
}
