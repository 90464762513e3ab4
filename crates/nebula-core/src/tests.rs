#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::entities::Body;
    use crate::enums::GamePhase;
    use crate::events::SimEvent;
    use crate::lore::SectorLore;
    use crate::state::{alloc_id, World};
    use crate::types::{Rgb, Vec2, Viewport};

    fn body_at(x: f64, y: f64, radius: f64) -> Body {
        Body {
            pos: Vec2::new(x, y),
            radius,
            velocity: Vec2::ZERO,
            color: Rgb::gray(128),
        }
    }

    /// Verify GamePhase round-trips through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::SectorBreak,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_initial_phase_is_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Resume,
            PlayerCommand::Restart,
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\""), "commands serialize tagged: {json}");
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    /// Verify SimEvent round-trips through serde with its payload intact.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::GameOver { score: 1234 },
            SimEvent::SectorComplete { score: 1500 },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    // ---- Body geometry ----

    #[test]
    fn test_overlap_when_distance_below_radius_sum() {
        let a = body_at(0.0, 0.0, 10.0);
        let b = body_at(15.0, 0.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a), "overlap test is symmetric");
    }

    #[test]
    fn test_no_overlap_when_separated() {
        let a = body_at(0.0, 0.0, 10.0);
        let b = body_at(100.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    /// Touching circles (distance exactly equal to the radius sum) must not
    /// count as a collision: the test is strictly less-than.
    #[test]
    fn test_touching_circles_do_not_overlap() {
        let a = body_at(0.0, 0.0, 10.0);
        let b = body_at(20.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_uses_euclidean_distance() {
        // Diagonal separation of 5 with radii summing to 6.
        let a = body_at(0.0, 0.0, 3.0);
        let b = body_at(3.0, 4.0, 3.0);
        assert!(a.overlaps(&b));
        // Same radii, diagonal separation of 10.
        let c = body_at(6.0, 8.0, 3.0);
        assert!(!a.overlaps(&c));
    }

    // ---- World ----

    #[test]
    fn test_fresh_world_is_empty_and_centered() {
        let viewport = Viewport::new(1280.0, 720.0);
        let world = World::new(viewport);
        assert!(world.asteroids.is_empty());
        assert!(world.particles.is_empty());
        assert!(world.stars.is_empty(), "stars are seeded by the generator");
        assert_eq!(world.player.body.pos.x, PLAYER_X);
        assert_eq!(world.player.body.pos.y, 360.0);
        assert_eq!(world.player.target_y, 360.0);
        assert_eq!(world.player.body.radius, PLAYER_RADIUS);
    }

    #[test]
    fn test_alloc_id_is_monotonic() {
        let mut next_id = 0;
        let a = alloc_id(&mut next_id);
        let b = alloc_id(&mut next_id);
        let c = alloc_id(&mut next_id);
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(next_id, 3);
    }

    #[test]
    fn test_world_serde_roundtrip() {
        let world = World::new(Viewport::default());
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(world, back);
    }

    // ---- Lore ----

    /// The fallback record is fixed verbatim; the sector-break screen and the
    /// failure-path tests rely on these exact strings.
    #[test]
    fn test_lore_fallback_is_verbatim() {
        let lore = SectorLore::fallback();
        assert_eq!(lore.name, "The Silent Void");
        assert_eq!(
            lore.description,
            "Communications are jammed. You are alone in the darkness."
        );
        assert_eq!(lore.hazard_level, "UNKNOWN");
    }

    /// Wire payloads carry `hazardLevel` in camelCase.
    #[test]
    fn test_lore_serializes_camel_case() {
        let lore = SectorLore::fallback();
        let json = serde_json::to_string(&lore).unwrap();
        assert!(json.contains("\"hazardLevel\":\"UNKNOWN\""), "got {json}");
        let back: SectorLore = serde_json::from_str(&json).unwrap();
        assert_eq!(lore, back);
    }

    // ---- Types ----

    #[test]
    fn test_gray_is_neutral() {
        let g = Rgb::gray(90);
        assert_eq!(g, Rgb::new(90, 90, 90));
    }

    #[test]
    fn test_viewport_center() {
        assert_eq!(Viewport::new(800.0, 600.0).center_y(), 300.0);
        let default = Viewport::default();
        assert_eq!(default.width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(default.height, DEFAULT_VIEWPORT_HEIGHT);
    }
}
