#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub use zilliax_layout as layout;

#[doc(inline)]
pub use zilliax_layout::{
    Direction, FlowContainer, FlowLayoutEngine, FlowPlacement, HorizontalAlignment, Layout,
    ParseError, Point, ProposalSize, Rect, Size, SubView, VerticalAlignment, measure_size,
};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use zilliax::prelude::*;
    //!
    //! let engine = FlowLayoutEngine::new().spacing(8.0);
    //! let items = [Rect::from_size(Size::new(40.0, 20.0))];
    //! let placement = engine.position(&items, Rect::from_size(Size::new(100.0, 0.0)));
    //! assert_eq!(placement.positions, vec![Point::new(0.0, 0.0)]);
    //! ```
    pub use super::{
        Direction, FlowContainer, FlowLayoutEngine, FlowPlacement, HorizontalAlignment, Layout,
        Point, ProposalSize, Rect, Size, SubView, VerticalAlignment,
    };
}
