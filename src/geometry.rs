#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.width as f32,
            h: size.height as f32,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    /// Touching edges count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.max_x() < other.x || self.max_y() < other.y {
            return false;
        }
        if self.x > other.max_x() || self.y > other.max_y() {
            return false;
        }
        true
    }

    pub fn contained_in(&self, bounds: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.max_x() <= bounds.width as f32
            && self.max_y() <= bounds.height as f32
    }
}
