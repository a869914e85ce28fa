//! Core geometry types: Point, Size, Rect, Padding, Alignment.
//!
//! All coordinates are `f32` pixels. Widget geometry is expressed in parent
//! space; screen space is the root's coordinate system.

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Unbounded in both directions. Used as the fallback maximum size.
    pub const INFINITE: Size = Size { width: f32::INFINITY, height: f32::INFINITY };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size { width: self.width.max(other.width), height: self.height.max(other.height) }
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from a position and a size.
    #[inline]
    pub const fn from_parts(position: Point, size: Size) -> Self {
        Self { x: position.x, y: position.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive).
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether `point` lies inside this rectangle (right/bottom edges excluded).
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Intersection of two rectangles, or [`Rect::EMPTY`] when they do not overlap.
    pub fn intersection(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            Rect::EMPTY
        } else {
            Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
    }

    /// Move the rectangle by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Contract the rectangle inward by `padding`. Dimensions clamp at zero.
    pub fn shrink(self, padding: Padding) -> Rect {
        Rect {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// Space reserved around a widget's content.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Padding = Padding { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create padding with explicit values for each side.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Only horizontal padding (top and bottom are zero).
    #[inline]
    pub const fn horizontal_only(left: f32, right: f32) -> Self {
        Self { top: 0.0, right, bottom: 0.0, left }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Grow `size` by this padding.
    #[inline]
    pub fn expand(self, size: Size) -> Size {
        Size { width: size.width + self.horizontal(), height: size.height + self.vertical() }
    }
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Anchor used to place content of one size inside a larger rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Top-left position of `inner` when aligned inside `outer`.
    pub fn align(self, inner: Size, outer: Rect) -> Point {
        let free_x = outer.width - inner.width;
        let free_y = outer.height - inner.height;
        let x = match self {
            Alignment::TopLeft | Alignment::MiddleLeft | Alignment::BottomLeft => 0.0,
            Alignment::TopCenter | Alignment::MiddleCenter | Alignment::BottomCenter => free_x / 2.0,
            Alignment::TopRight | Alignment::MiddleRight | Alignment::BottomRight => free_x,
        };
        let y = match self {
            Alignment::TopLeft | Alignment::TopCenter | Alignment::TopRight => 0.0,
            Alignment::MiddleLeft | Alignment::MiddleCenter | Alignment::MiddleRight => free_y / 2.0,
            Alignment::BottomLeft | Alignment::BottomCenter | Alignment::BottomRight => free_y,
        };
        Point { x: outer.x + x, y: outer.y + y }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.5);
        assert_eq!(a + b, Point::new(4.0, 5.5));
        assert_eq!(a - b, Point::new(2.0, 2.5));
        assert_eq!(-a, Point::new(-3.0, -4.0));
    }

    #[test]
    fn rect_contains_excludes_far_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 14.9)));
        assert!(!r.contains(Point::new(30.0, 12.0)));
        assert!(!r.contains(Point::new(15.0, 15.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn rect_intersection_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn rect_intersection_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 5.0, 5.0);
        assert_eq!(a.intersection(b), Rect::EMPTY);
    }

    #[test]
    fn rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 5.0, 10.0);
        assert_eq!(a.union(b), Rect::new(0.0, 0.0, 25.0, 15.0));
    }

    #[test]
    fn rect_shrink_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 6.0, 4.0);
        let shrunk = r.shrink(Padding::all(4.0));
        assert_eq!(shrunk, Rect::new(4.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn padding_expand() {
        let p = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.horizontal(), 6.0);
        assert_eq!(p.vertical(), 4.0);
        assert_eq!(p.expand(Size::new(10.0, 10.0)), Size::new(16.0, 14.0));
    }

    #[test]
    fn alignment_middle_left() {
        let outer = Rect::new(10.0, 20.0, 100.0, 30.0);
        let pos = Alignment::MiddleLeft.align(Size::new(40.0, 10.0), outer);
        assert_eq!(pos, Point::new(10.0, 30.0));
    }

    #[test]
    fn alignment_center_and_bottom_right() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = Size::new(20.0, 10.0);
        assert_eq!(Alignment::MiddleCenter.align(inner, outer), Point::new(40.0, 20.0));
        assert_eq!(Alignment::BottomRight.align(inner, outer), Point::new(80.0, 40.0));
    }

    #[test]
    fn infinite_size_is_unbounded() {
        assert!(Size::INFINITE.width.is_infinite());
        assert!(Size::INFINITE.height.is_infinite());
    }
}
