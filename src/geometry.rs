// Globe geometry: hit testing against the circular globe and mapping screen
// points into the percentage space objects are stored in.
use serde::{Deserialize, Serialize};

/// A point in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position inside the globe's bounding box, each axis in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Percent {
    pub x: f64,
    pub y: f64,
}

impl Percent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inclusive clamp range applied to both axes of a [`Percent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentBand {
    pub min: f64,
    pub max: f64,
}

impl PercentBand {
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    pub fn contains(&self, p: Percent) -> bool {
        (self.min..=self.max).contains(&p.x) && (self.min..=self.max).contains(&p.y)
    }
}

/// Band for freshly dropped objects and for shake re-scatter.
pub const PLACEMENT_BAND: PercentBand = PercentBand { min: 15.0, max: 85.0 };
/// Band for objects being dragged around inside the globe. Wider than
/// [`PLACEMENT_BAND`]; both are kept as they are until product intent is settled.
pub const REPOSITION_BAND: PercentBand = PercentBand { min: 10.0, max: 90.0 };

/// The globe element's bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl GlobeRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn radius(&self) -> f64 {
        self.width.min(self.height) * 0.5
    }

    /// Raw, unclamped percentage of `point` within the box. A degenerate box
    /// maps everything to its center.
    pub fn percent_of(&self, point: Point) -> Percent {
        let px = if self.width > 0.0 { (point.x - self.left) / self.width * 100.0 } else { 50.0 };
        let py = if self.height > 0.0 { (point.y - self.top) / self.height * 100.0 } else { 50.0 };
        Percent::new(px, py)
    }

    /// Inverse of [`GlobeRect::percent_of`].
    #[cfg(test)]
    pub fn point_at(&self, pos: Percent) -> Point {
        Point::new(self.left + pos.x / 100.0 * self.width, self.top + pos.y / 100.0 * self.height)
    }
}

impl From<&web_sys::DomRect> for GlobeRect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }
}

/// True when `point` lies within the globe circle shrunk by `margin_px`.
/// Points exactly on the shrunk boundary count as inside.
pub fn is_inside_globe(point: Point, rect: &GlobeRect, margin_px: f64) -> bool {
    let c = rect.center();
    let dx = point.x - c.x;
    let dy = point.y - c.y;
    let distance = (dx * dx + dy * dy).sqrt();
    distance <= rect.radius() - margin_px
}

/// Maps `point` into percent space and clamps both axes to `band`.
pub fn to_percent(point: Point, rect: &GlobeRect, band: PercentBand) -> Percent {
    let raw = rect.percent_of(point);
    Percent::new(band.clamp(raw.x), band.clamp(raw.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> GlobeRect {
        GlobeRect::new(100.0, 50.0, 320.0, 320.0)
    }

    #[test]
    fn center_is_inside() {
        let r = rect();
        assert!(is_inside_globe(r.center(), &r, 20.0));
    }

    #[test]
    fn boundary_respects_margin() {
        let r = rect();
        let c = r.center();
        // radius 160, margin 20 -> limit 140
        assert!(is_inside_globe(Point::new(c.x + 140.0, c.y), &r, 20.0));
        assert!(!is_inside_globe(Point::new(c.x + 140.5, c.y), &r, 20.0));
        assert!(!is_inside_globe(Point::new(c.x + 100.0, c.y + 100.0), &r, 20.0));
    }

    #[test]
    fn box_corners_are_outside() {
        let r = rect();
        for p in [
            Point::new(r.left, r.top),
            Point::new(r.left + r.width, r.top),
            Point::new(r.left, r.top + r.height),
            Point::new(r.left + r.width, r.top + r.height),
        ] {
            assert!(!is_inside_globe(p, &r, 20.0));
        }
    }

    #[test]
    fn radius_uses_smaller_side() {
        let r = GlobeRect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(r.radius(), 100.0);
        assert!(!is_inside_globe(Point::new(200.0, 190.0), &r, 20.0));
    }

    #[test]
    fn percent_mapping_is_linear() {
        let r = rect();
        let p = r.percent_of(Point::new(180.0, 130.0));
        assert!((p.x - 25.0).abs() < 1e-9);
        assert!((p.y - 25.0).abs() < 1e-9);
        let back = r.point_at(p);
        assert!((back.x - 180.0).abs() < 1e-9);
    }

    #[test]
    fn placement_band_clamps_edges() {
        let r = rect();
        let p = to_percent(Point::new(r.left + 1.0, r.top + r.height - 1.0), &r, PLACEMENT_BAND);
        assert_eq!(p, Percent::new(15.0, 85.0));
    }

    #[test]
    fn reposition_band_clamps_far_outside() {
        let r = rect();
        let p = to_percent(Point::new(-5000.0, 9000.0), &r, REPOSITION_BAND);
        assert_eq!(p, Percent::new(10.0, 90.0));
    }

    #[test]
    fn placement_and_reposition_bands_differ() {
        // Same raw edge point lands on different stored coordinates depending on
        // which gesture produced it.
        let r = rect();
        let edge = Point::new(r.left, r.top);
        assert_eq!(to_percent(edge, &r, PLACEMENT_BAND), Percent::new(15.0, 15.0));
        assert_eq!(to_percent(edge, &r, REPOSITION_BAND), Percent::new(10.0, 10.0));
        assert_ne!(PLACEMENT_BAND, REPOSITION_BAND);
    }

    #[test]
    fn degenerate_rect_maps_to_center_and_rejects() {
        let r = GlobeRect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(to_percent(Point::new(10.0, 10.0), &r, PLACEMENT_BAND), Percent::new(50.0, 50.0));
        assert!(!is_inside_globe(Point::new(10.0, 10.0), &r, 20.0));
    }
}
