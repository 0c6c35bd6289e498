#![no_std]
//! Core types shared by every Zilliax layout container.
//!
//! The crate is deliberately small: it holds the geometry primitives
//! ([`Point`], [`Size`], [`Rect`], [`ProposalSize`]) and the two traits that
//! make up the measure-then-place protocol between a layout host and its
//! children ([`SubView`] and [`Layout`]).

extern crate alloc;

pub mod layout;

pub use layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
