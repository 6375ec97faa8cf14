//! Board projection interface.

use crate::state::{Ray, TilePos, Vec2, Vec3};

/// Maps between tiles, world space and the screen.
pub trait BoardOracle {
    /// World-space center of a tile, or `None` if the tile is off the board.
    fn tile_center(&self, tile: TilePos) -> Option<Vec3>;

    /// Ray through a screen point, expressed in the board's local frame
    /// (board plane at `z = 0`). `None` if no camera is available.
    fn screen_ray(&self, screen: Vec2) -> Option<Ray>;

    /// Projects a screen point onto the board plane.
    fn screen_to_board(&self, screen: Vec2) -> Option<Vec2> {
        self.screen_ray(screen)?.intersect_board_plane()
    }
}
