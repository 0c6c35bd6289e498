//! Layout primitives and geometry types for the Zilliax layout system.
//!
//! # Points
//!
//! Every length is expressed in logical points, the unit the host toolkit
//! lays its views out in. Values are `f64` and are never rounded here;
//! hosts that snap to physical pixels do so after placement.
//!
//! # Example
//!
//! ```ignore
//! let bounds = Rect::new(Point::new(16.0, 0.0), Size::new(320.0, 0.0));
//! assert_eq!(bounds.max_x(), 336.0);
//! ```

use core::fmt::Debug;

use alloc::vec::Vec;

// ============================================================================
// SubView Trait - Child View Proxy
// ============================================================================

/// A proxy for querying a child's size during layout.
///
/// Layout containers ask "if I propose this size, how big would you be?"
/// and may ask more than once with different proposals:
///
/// - `ProposalSize::UNSPECIFIED` - ideal/intrinsic size
/// - `ProposalSize::ZERO` - compressed (minimum) size
/// - `ProposalSize::new(Some(200.0), None)` - constrained width
pub trait SubView {
    /// Query the child's size for a given proposal.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// Size derived from the child's content alone.
    ///
    /// Used as a fallback when a child reports a degenerate compressed size,
    /// which happens for views that carry no constraints of their own.
    fn content_size(&self) -> Size {
        self.size_that_fits(ProposalSize::UNSPECIFIED)
    }
}

impl<T: SubView + ?Sized> SubView for &T {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn content_size(&self) -> Size {
        (**self).content_size()
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
///
/// # Two-Phase Layout
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): how big this
///    container wants to be for a proposal
/// 2. **Placement** ([`place`](Self::place)): the frame of every child
///    within the final bounds
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - References to child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Returns one rect per child, in the same order as `children`.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns the minimum x-coordinate (left edge).
    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Returns the minimum y-coordinate (top edge).
    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f64,
    /// The height in points.
    pub height: f64,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if either dimension is zero or negative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ============================================================================
// Point
// ============================================================================

/// Coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f64,
    /// The y-coordinate in points.
    pub y: f64,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(0.0)` - "Tell me your minimum size"
/// - `Some(f64::INFINITY)` - "Tell me your maximum size"
/// - `Some(value)` - "I suggest you use this size"
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f64)` = suggested width
    pub width: Option<f64>,
    /// Height proposal: `None` = unspecified, `Some(f64)` = suggested height
    pub height: Option<f64>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero proposal - asks for minimum size.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Infinite proposal - asks for maximum size.
    pub const INFINITY: Self = Self {
        width: Some(f64::INFINITY),
        height: Some(f64::INFINITY),
    };

    /// Returns the proposed width if it is present and finite.
    #[must_use]
    pub fn finite_width(&self) -> Option<f64> {
        self.width.filter(|width| width.is_finite())
    }
}

// ============================================================================
// Tests
// ============================================================================
