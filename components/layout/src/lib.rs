#![no_std]
//! Flow layout for Zilliax.
//!
//! This crate bridges measured child views and the pure positioning
//! algorithm that arranges them. It contains:
//!
//! - [`FlowLayoutEngine`], which packs fixed-size items into rows that wrap
//!   when the bound's width runs out,
//! - the alignment and [`Direction`] settings the engine honours,
//! - [`FlowContainer`], a stateful host that owns arranged children, keeps
//!   their last fitting height and knows when it needs another pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use zilliax_layout::{FlowLayoutEngine, VerticalAlignment};
//! use zilliax_core::{Point, Rect, Size};
//!
//! let engine = FlowLayoutEngine::new()
//!     .spacing(8.0)
//!     .vertical_alignment(VerticalAlignment::Bottom);
//! let items = [
//!     Rect::from_size(Size::new(50.0, 50.0)),
//!     Rect::from_size(Size::new(70.0, 30.0)),
//! ];
//! let placement = engine.position(&items, Rect::from_size(Size::new(100.0, 0.0)));
//! assert_eq!(placement.positions.len(), 2);
//! ```

extern crate alloc;

pub use zilliax_core::layout::*;

pub mod alignment;
pub use alignment::{Direction, HorizontalAlignment, ParseError, VerticalAlignment};

pub mod flow;
pub use flow::{FlowContainer, FlowLayoutEngine, FlowPlacement, measure_size};
