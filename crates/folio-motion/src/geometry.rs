//! Tracked-axis geometry for the dock.

/// Which screen axis the dock tracks.
///
/// A horizontal dock samples pointer x and ignores y entirely; a vertical
/// dock does the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Pick the coordinate on this axis out of an `(x, y)` pair.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}

/// Screen-space bounding box of a rendered icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Stand-in for an element that has not been laid out yet: a zero-sized
    /// box at the origin. Its center sits far from any realistic pointer
    /// coordinate, so an unmeasured icon holds its resting size.
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center coordinate along the tracked axis.
    pub fn center(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x + self.width / 2.0,
            Axis::Vertical => self.y + self.height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_picks_its_own_coordinate() {
        assert_eq!(Axis::Horizontal.pick(12.0, 99.0), 12.0);
        assert_eq!(Axis::Vertical.pick(12.0, 99.0), 99.0);
    }

    #[test]
    fn center_is_the_box_midpoint() {
        let rect = Rect::new(100.0, 200.0, 40.0, 60.0);
        assert_eq!(rect.center(Axis::Horizontal), 120.0);
        assert_eq!(rect.center(Axis::Vertical), 230.0);
    }

    #[test]
    fn unmeasured_rect_centers_at_origin() {
        assert_eq!(Rect::ZERO.center(Axis::Horizontal), 0.0);
        assert_eq!(Rect::ZERO.center(Axis::Vertical), 0.0);
    }
}
