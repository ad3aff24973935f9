//! Collision detection and scoring
//!
//! All checks are axis-aligned interval tests: the avatar's extent against
//! the playfield bounds and against the solid segments above and below each
//! gap. Any hit is terminal; there is no damage model.

use super::state::{Avatar, Obstacle};

/// Check the avatar against the bounds and every overlapping obstacle.
///
/// Returns whether the run continues. All comparisons are strict: touching a
/// bound or an obstacle edge exactly is not a hit.
pub fn check_collisions(avatar: &Avatar, playfield_height: f32, obstacles: &[Obstacle]) -> bool {
    // Top/bottom bounds
    if avatar.pos.y + avatar.radius > playfield_height || avatar.pos.y - avatar.radius < 0.0 {
        return false;
    }

    for obstacle in obstacles {
        // Horizontal overlap with the obstacle column
        if avatar.pos.x + avatar.radius > obstacle.x
            && avatar.pos.x - avatar.radius < obstacle.trailing_edge()
        {
            // Vertical overlap with the segment above or below the gap
            if avatar.pos.y - avatar.radius < obstacle.gap_top
                || avatar.pos.y + avatar.radius > playfield_height - obstacle.gap_bottom
            {
                return false;
            }
        }
    }

    true
}

/// Mark newly cleared obstacles and return how many points were earned.
///
/// An obstacle scores once its trailing edge moves strictly left of the
/// avatar's center. The passed flag keeps this idempotent per obstacle; the
/// column is walked in ascending position order.
pub fn update_score(avatar: &Avatar, obstacles: &mut [Obstacle]) -> u32 {
    let mut delta = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.trailing_edge() < avatar.pos.x {
            obstacle.passed = true;
            delta += 1;
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn avatar_at(x: f32, y: f32) -> Avatar {
        Avatar::new(Vec2::new(x, y))
    }

    fn obstacle_at(x: f32, gap_top: f32, gap_bottom: f32) -> Obstacle {
        Obstacle {
            x,
            width: OBSTACLE_WIDTH,
            gap_top,
            gap_bottom,
            passed: false,
            tint: 0,
        }
    }

    #[test]
    fn test_bounds_are_terminal() {
        // 600-high playfield, radius 20
        assert!(!check_collisions(&avatar_at(200.0, 590.0), 600.0, &[]));
        assert!(!check_collisions(&avatar_at(200.0, 10.0), 600.0, &[]));
        assert!(check_collisions(&avatar_at(200.0, 300.0), 600.0, &[]));
    }

    #[test]
    fn test_touching_bound_exactly_is_not_a_hit() {
        // y + radius == height and y - radius == 0: strict comparisons
        assert!(check_collisions(&avatar_at(200.0, 580.0), 600.0, &[]));
        assert!(check_collisions(&avatar_at(200.0, 20.0), 600.0, &[]));
    }

    #[test]
    fn test_top_segment_collision() {
        // Obstacle x 100, width 80, gap from 150 to 350 in a 600 playfield
        let obstacles = [obstacle_at(100.0, 150.0, 250.0)];
        // Avatar at x 140 overlaps [100, 180]; y 100 reaches into [0, 150]
        assert!(!check_collisions(&avatar_at(140.0, 100.0), 600.0, &obstacles));
    }

    #[test]
    fn test_bottom_segment_collision() {
        let obstacles = [obstacle_at(100.0, 150.0, 250.0)];
        // y 340: extent reaches 360, past the bottom segment start at 350
        assert!(!check_collisions(&avatar_at(140.0, 340.0), 600.0, &obstacles));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let obstacles = [obstacle_at(100.0, 150.0, 250.0)];
        // Vertical extent [230, 270] sits inside the gap [150, 350]
        assert!(check_collisions(&avatar_at(140.0, 250.0), 600.0, &obstacles));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        let obstacles = [obstacle_at(300.0, 150.0, 250.0)];
        // Avatar extent [180, 220] ends left of the obstacle at 300
        assert!(check_collisions(&avatar_at(200.0, 100.0), 600.0, &obstacles));
        // Exactly touching the left edge is not an overlap
        assert!(check_collisions(&avatar_at(280.0, 100.0), 600.0, &obstacles));
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let avatar = avatar_at(200.0, 300.0);
        let mut obstacles = [obstacle_at(100.0, 150.0, 250.0)];
        // Trailing edge 180 < 200: cleared
        assert_eq!(update_score(&avatar, &mut obstacles), 1);
        assert!(obstacles[0].passed);
        // Re-running is a no-op
        assert_eq!(update_score(&avatar, &mut obstacles), 0);
    }

    #[test]
    fn test_score_requires_strictly_past_trailing_edge() {
        let avatar = avatar_at(200.0, 300.0);
        // Trailing edge exactly at the avatar's center
        let mut obstacles = [obstacle_at(120.0, 150.0, 250.0)];
        assert_eq!(update_score(&avatar, &mut obstacles), 0);
        assert!(!obstacles[0].passed);
    }

    #[test]
    fn test_score_counts_each_cleared_obstacle() {
        let avatar = avatar_at(500.0, 300.0);
        let mut obstacles = [
            obstacle_at(100.0, 150.0, 250.0),
            obstacle_at(300.0, 200.0, 200.0),
            obstacle_at(700.0, 250.0, 150.0),
        ];
        assert_eq!(update_score(&avatar, &mut obstacles), 2);
        assert!(obstacles[0].passed);
        assert!(obstacles[1].passed);
        assert!(!obstacles[2].passed);
    }
}
