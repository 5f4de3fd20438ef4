use std::ops::Range;

use glam::IVec2;

/// Axis-aligned bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    /// Contact test used for ball/paddle hits.
    ///
    /// The far edge of `self` counts when it lands exactly on the near edge of
    /// `other`, but not the other way round.
    pub fn touches(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x < other.max.x
            && self.max.y >= other.min.y
            && self.min.y < other.max.y
    }
}

/// The playfield, sized once from the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
}

impl GameMap {
    pub fn new(width: i32, height: i32) -> Self {
        if width < 2 || height < 2 {
            log::warn!("Degenerate playfield {}x{}", width, height);
        }
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Horizontal spawn band: the middle half of the width
    pub fn spawn_x(&self) -> Range<i32> {
        spawn_band(self.width)
    }

    /// Vertical spawn band: the middle half of the height
    pub fn spawn_y(&self) -> Range<i32> {
        spawn_band(self.height)
    }

    pub fn exits_right(&self, aabb: &Aabb) -> bool {
        aabb.max.x >= self.width
    }

    pub fn exits_left(&self, aabb: &Aabb) -> bool {
        aabb.min.x <= 0
    }

    pub fn touches_floor_or_ceiling(&self, aabb: &Aabb) -> bool {
        aabb.max.y >= self.height || aabb.min.y <= 0
    }
}

fn spawn_band(extent: i32) -> Range<i32> {
    let start = extent / 4;
    // Keep at least one candidate so tiny viewports still spawn
    start..start + (extent / 2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_overlapping_boxes() {
        let a = Aabb::from_pos_size(IVec2::new(0, 0), IVec2::new(20, 20));
        let b = Aabb::from_pos_size(IVec2::new(10, 10), IVec2::new(20, 20));
        assert!(a.touches(&b));
        assert!(b.touches(&a));
    }

    #[test]
    fn test_touches_is_asymmetric_on_shared_edge() {
        let ball = Aabb::from_pos_size(IVec2::new(0, 50), IVec2::new(20, 20));
        let paddle = Aabb::from_pos_size(IVec2::new(20, 0), IVec2::new(10, 400));
        // Ball's right edge sits on the paddle's left edge
        assert!(ball.touches(&paddle));
        // Paddle's right edge is strictly exclusive
        let ball_after = Aabb::from_pos_size(IVec2::new(30, 50), IVec2::new(20, 20));
        assert!(!ball_after.touches(&paddle));
    }

    #[test]
    fn test_separated_boxes_do_not_touch() {
        let a = Aabb::from_pos_size(IVec2::new(0, 0), IVec2::new(10, 10));
        let b = Aabb::from_pos_size(IVec2::new(100, 100), IVec2::new(10, 10));
        assert!(!a.touches(&b));
    }

    #[test]
    fn test_spawn_bands() {
        let map = GameMap::new(800, 600);
        assert_eq!(map.spawn_x(), 200..600);
        assert_eq!(map.spawn_y(), 150..450);
        assert_eq!(map.center(), IVec2::new(400, 300));
    }

    #[test]
    fn test_spawn_band_never_empty() {
        let map = GameMap::new(1, 0);
        assert!(!map.spawn_x().is_empty());
        assert!(!map.spawn_y().is_empty());
    }

    #[test]
    fn test_edge_checks() {
        let map = GameMap::new(800, 600);
        let size = IVec2::new(20, 20);
        assert!(map.exits_right(&Aabb::from_pos_size(IVec2::new(780, 300), size)));
        assert!(!map.exits_right(&Aabb::from_pos_size(IVec2::new(779, 300), size)));
        assert!(map.exits_left(&Aabb::from_pos_size(IVec2::new(0, 300), size)));
        assert!(!map.exits_left(&Aabb::from_pos_size(IVec2::new(1, 300), size)));
        assert!(map.touches_floor_or_ceiling(&Aabb::from_pos_size(IVec2::new(400, 0), size)));
        assert!(map.touches_floor_or_ceiling(&Aabb::from_pos_size(IVec2::new(400, 580), size)));
        assert!(!map.touches_floor_or_ceiling(&Aabb::from_pos_size(IVec2::new(400, 300), size)));
    }
}
