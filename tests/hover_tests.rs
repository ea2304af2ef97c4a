use hover_scene::hover::{HoverEvent, HoverPhase, MAX_OFFSET};
use hover_scene::viewport::Viewport;
use hover_scene::SceneContext;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// Pointer position whose ray lands on the front face of cube-0
const OVER_CUBE_0: (f32, f32) = (WIDTH as f32 / 3.0, HEIGHT as f32 / 2.0);
/// Between cube-0 and cube-1
const GAP: (f32, f32) = (333.0, HEIGHT as f32 / 2.0);
const TOP_LEFT: (f32, f32) = (0.0, 0.0);

fn context() -> SceneContext {
    SceneContext::with_default_scene(Viewport::new(WIDTH, HEIGHT))
}

fn cube_y(ctx: &SceneContext, cube: usize) -> f32 {
    ctx.scene().cubes()[cube].position.y
}

#[cfg(test)]
mod hover_scenario_tests {
    use super::*;

    #[test]
    fn test_hover_rise_clamp_and_leave() {
        let mut ctx = context();

        let events = ctx.on_pointer_move(OVER_CUBE_0.0, OVER_CUBE_0.1);
        assert_eq!(
            events,
            vec![HoverEvent::Entered { cube: 0, name: "cube-0".into() }]
        );
        assert_eq!(events[0].to_string(), "Hovered over cube: cube-0");

        for _ in 0..180 {
            ctx.on_tick();
        }
        assert_eq!(cube_y(&ctx, 0), MAX_OFFSET, "Should sit exactly at the clamp");
        assert_eq!(ctx.hover().states()[0].phase(), HoverPhase::Held);

        for _ in 0..60 {
            ctx.on_tick();
        }
        assert_eq!(cube_y(&ctx, 0), MAX_OFFSET, "Extra ticks must not climb past the clamp");

        let events = ctx.on_pointer_move(TOP_LEFT.0, TOP_LEFT.1);
        assert_eq!(events, vec![HoverEvent::Left { cube: 0, name: "cube-0".into() }]);
        assert_eq!(events[0].to_string(), "Left cube: cube-0");

        for _ in 0..30 {
            ctx.on_tick();
        }
        assert_eq!(cube_y(&ctx, 0), MAX_OFFSET, "Leaving never lowers the cube");
        assert_eq!(ctx.hover().states()[0].phase(), HoverPhase::Raised);
    }

    #[test]
    fn test_offset_tracks_min_of_ticks_and_clamp() {
        for n in [0u32, 1, 50, 179, 180, 181, 400] {
            let mut ctx = context();
            ctx.on_pointer_move(OVER_CUBE_0.0, OVER_CUBE_0.1);
            for _ in 0..n {
                ctx.on_tick();
            }
            let expected = (n as f32 * 0.01).min(MAX_OFFSET);
            assert!(
                (cube_y(&ctx, 0) - expected).abs() < 1e-4,
                "After {} ticks expected {}, got {}", n, expected, cube_y(&ctx, 0)
            );
        }
    }

    #[test]
    fn test_pointer_in_gap_hovers_nothing() {
        let mut ctx = context();
        assert!(ctx.on_pointer_move(GAP.0, GAP.1).is_empty());
        assert_eq!(ctx.hover().hovered(), None);

        ctx.on_tick();
        assert!(ctx.scene().cubes().iter().all(|c| c.position.y == 0.0));
    }

    #[test]
    fn test_raised_cube_slides_out_from_under_still_pointer() {
        let mut ctx = context();
        ctx.on_pointer_move(OVER_CUBE_0.0, OVER_CUBE_0.1);
        for _ in 0..180 {
            ctx.on_tick();
        }

        // Same pointer position, but the cube is now above the ray
        let events = ctx.on_pointer_move(OVER_CUBE_0.0, OVER_CUBE_0.1);
        assert_eq!(events, vec![HoverEvent::Left { cube: 0, name: "cube-0".into() }]);
    }

    #[test]
    fn test_repeated_moves_over_same_cube_are_silent() {
        let mut ctx = context();
        assert_eq!(ctx.on_pointer_move(400.0, 300.0).len(), 1);
        assert!(ctx.on_pointer_move(401.0, 300.0).is_empty());
        assert!(ctx.on_pointer_move(399.0, 301.0).is_empty());
        assert_eq!(ctx.hover().hovered(), Some(1));
    }

    #[test]
    fn test_at_most_one_cube_hovered() {
        let mut ctx = context();
        let sweep = (0..=WIDTH).step_by(20).map(|x| x as f32);

        for x in sweep {
            ctx.on_pointer_move(x, HEIGHT as f32 / 2.0);
            let hovered = ctx.hover().states().iter().filter(|s| s.is_hovered()).count();
            assert!(hovered <= 1, "{} cubes hovered at x={}", hovered, x);
            ctx.on_tick();
        }
    }

    #[test]
    fn test_direct_switch_releases_previous_cube_first() {
        let mut ctx = context();
        ctx.on_pointer_move(OVER_CUBE_0.0, OVER_CUBE_0.1);

        let events = ctx.on_pointer_move(400.0, 300.0);
        assert_eq!(
            events,
            vec![
                HoverEvent::Left { cube: 0, name: "cube-0".into() },
                HoverEvent::Entered { cube: 1, name: "cube-1".into() },
            ]
        );
    }
}
