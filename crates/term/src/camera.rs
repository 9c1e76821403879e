//! World-to-screen projection.

/// Offset added to world coordinates to get viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraOffset {
    pub dx: i32,
    pub dy: i32,
}

impl CameraOffset {
    /// Viewport-relative position of a world tile.
    pub fn project(self, (x, y): (i32, i32)) -> (i32, i32) {
        (x + self.dx, y + self.dy)
    }

    /// First visible world tile.
    pub fn origin(self) -> (i32, i32) {
        (-self.dx, -self.dy)
    }
}

/// Center the view on `player`, clamped so it never shows past the map edge.
///
/// Each axis is clamped independently; a map smaller than the viewport is
/// pinned to the top-left.
pub fn camera_offset(
    player: (i32, i32),
    map_w: i32,
    map_h: i32,
    view_w: i32,
    view_h: i32,
) -> CameraOffset {
    let x = clamp_axis(player.0 - view_w / 2, map_w - view_w);
    let y = clamp_axis(player.1 - view_h / 2, map_h - view_h);
    CameraOffset { dx: -x, dy: -y }
}

fn clamp_axis(ideal: i32, max: i32) -> i32 {
    ideal.min(max).max(0)
}
