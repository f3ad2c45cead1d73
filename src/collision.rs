//! Geometry and collision: integer points, axis-aligned boxes, overlap test.
//!
//! Boxes use half-open extents `[x, x + w) × [y, y + h)`, so two boxes that
//! only share an edge do not collide, and an empty box collides with nothing.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in world pixels. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centred on `center` (odd sizes lean left/up).
    pub fn centered(center: Point, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    pub fn set_center(&mut self, center: Point) {
        self.x = center.x - self.w / 2;
        self.y = center.y - self.h / 2;
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// True iff `a` and `b` overlap on both axes.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
