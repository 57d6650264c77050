/// Inclusive pixel box: `(2, 2, 19, 19)` covers columns and rows 2..=19.
///
/// In continuous canvas coordinates the box spans
/// `[left, right + 1) x [top, bottom + 1)`, with pixel `(x, y)` occupying
/// the unit square starting at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        (self.right - self.left + 1) as f32
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top + 1) as f32
    }

    fn x0(&self) -> f32 {
        self.left as f32
    }

    fn y0(&self) -> f32 {
        self.top as f32
    }

    fn x1(&self) -> f32 {
        (self.right + 1) as f32
    }

    fn y1(&self) -> f32 {
        (self.bottom + 1) as f32
    }
}

/// Anything that can be rasterised onto a [`super::Canvas`].
pub trait Shape {
    /// Whether the point `(x, y)`, in continuous canvas coordinates, is inside.
    fn contains(&self, x: f32, y: f32) -> bool;

    /// Pixel bounds worth sampling. Points outside never hit.
    fn bounds(&self) -> BoundingBox;
}

/// Filled ellipse inscribed in a bounding box. A square box gives a circle.
#[derive(Debug, Clone, Copy)]
pub struct Ellipse {
    bbox: BoundingBox,
}

impl Ellipse {
    pub fn new(bbox: BoundingBox) -> Self {
        Self { bbox }
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.bbox.x0() + self.bbox.x1()) / 2.0,
            (self.bbox.y0() + self.bbox.y1()) / 2.0,
        )
    }

    fn radii(&self) -> (f32, f32) {
        (self.bbox.width() / 2.0, self.bbox.height() / 2.0)
    }

    fn contains_inset(&self, x: f32, y: f32, inset: f32) -> bool {
        let (cx, cy) = self.center();
        let (rx, ry) = self.radii();
        let (rx, ry) = (rx - inset, ry - inset);
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (x - cx) / rx;
        let dy = (y - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

impl Shape for Ellipse {
    fn contains(&self, x: f32, y: f32) -> bool {
        self.contains_inset(x, y, 0.0)
    }

    fn bounds(&self) -> BoundingBox {
        self.bbox
    }
}

/// Outline band of `width` pixels running along the inside edge of an ellipse.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    ellipse: Ellipse,
    width: f32,
}

impl Ring {
    pub fn new(bbox: BoundingBox, width: f32) -> Self {
        Self {
            ellipse: Ellipse::new(bbox),
            width,
        }
    }
}

impl Shape for Ring {
    fn contains(&self, x: f32, y: f32) -> bool {
        self.ellipse.contains(x, y) && !self.ellipse.contains_inset(x, y, self.width)
    }

    fn bounds(&self) -> BoundingBox {
        self.ellipse.bbox
    }
}

/// Axis-aligned rectangle with circular corners.
#[derive(Debug, Clone, Copy)]
pub struct RoundedRect {
    bbox: BoundingBox,
    radius: f32,
}

impl RoundedRect {
    /// The radius is clamped so opposite corners never overlap.
    pub fn new(bbox: BoundingBox, radius: f32) -> Self {
        let max = bbox.width().min(bbox.height()) / 2.0;
        Self {
            bbox,
            radius: radius.clamp(0.0, max),
        }
    }
}

impl Shape for RoundedRect {
    fn contains(&self, x: f32, y: f32) -> bool {
        let b = &self.bbox;
        if x < b.x0() || x >= b.x1() || y < b.y0() || y >= b.y1() {
            return false;
        }
        let r = self.radius;
        // Distance to the inner rectangle whose corners are the arc centres.
        let nx = x.clamp(b.x0() + r, b.x1() - r);
        let ny = y.clamp(b.y0() + r, b.y1() - r);
        let dx = x - nx;
        let dy = y - ny;
        dx * dx + dy * dy <= r * r
    }

    fn bounds(&self) -> BoundingBox {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_box_size() {
        let b = BoundingBox::new(2, 2, 19, 19);
        assert_eq!(b.width(), 18.0);
        assert_eq!(b.height(), 18.0);
    }

    #[test]
    fn test_ellipse_center_and_edges() {
        let e = Ellipse::new(BoundingBox::new(2, 2, 19, 19));
        assert!(e.contains(11.0, 11.0));
        assert!(e.contains(2.5, 11.0));
        assert!(!e.contains(1.5, 11.0));
        // Box corner lies outside the inscribed circle
        assert!(!e.contains(2.5, 2.5));
    }

    #[test]
    fn test_ring_excludes_interior() {
        let ring = Ring::new(BoundingBox::new(2, 2, 19, 19), 2.0);
        assert!(ring.contains(2.5, 11.0));
        assert!(ring.contains(3.5, 11.0));
        assert!(!ring.contains(4.5, 11.0));
        assert!(!ring.contains(11.0, 11.0));
    }

    #[test]
    fn test_rounded_rect_corners() {
        let rect = RoundedRect::new(BoundingBox::new(0, 0, 59, 149), 10.0);
        assert!(rect.contains(30.0, 75.0));
        assert!(rect.contains(0.5, 75.0));
        assert!(rect.contains(30.0, 0.5));
        assert!(!rect.contains(0.5, 0.5));
        assert!(!rect.contains(59.5, 149.5));
        assert!(!rect.contains(60.5, 75.0));
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        let rect = RoundedRect::new(BoundingBox::new(0, 0, 9, 9), 50.0);
        // Fully rounded: behaves like a circle of radius 5
        assert!(rect.contains(5.0, 5.0));
        assert!(!rect.contains(0.5, 0.5));
    }
}
