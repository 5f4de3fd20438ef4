use hecs::World;

use crate::{GameMap, Paddle, Side};

/// A single discrete paddle step requested by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub side: Side,
    pub delta: i32, // negative = up, positive = down
}

impl PaddleCommand {
    pub fn up(side: Side, step: i32) -> Self {
        Self { side, delta: -step }
    }

    pub fn down(side: Side, step: i32) -> Self {
        Self { side, delta: step }
    }
}

/// Apply a command to the matching paddle right away
pub fn move_paddle(world: &mut World, map: &GameMap, command: PaddleCommand) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == command.side {
            paddle.move_by(command.delta, map.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;
    use glam::IVec2;

    fn setup_world() -> (World, hecs::Entity, hecs::Entity) {
        let mut world = World::new();
        let left = create_paddle(
            &mut world,
            Paddle::new(Side::Left, IVec2::new(10, 10), IVec2::new(10, 400)),
        );
        let right = create_paddle(
            &mut world,
            Paddle::new(Side::Right, IVec2::new(780, 10), IVec2::new(10, 400)),
        );
        (world, left, right)
    }

    #[test]
    fn test_command_moves_only_its_paddle() {
        let (mut world, left, right) = setup_world();
        let map = GameMap::new(800, 600);

        move_paddle(&mut world, &map, PaddleCommand::down(Side::Left, 20));

        assert_eq!(world.get::<&Paddle>(left).unwrap().pos.y, 30);
        assert_eq!(world.get::<&Paddle>(right).unwrap().pos.y, 10);
    }

    #[test]
    fn test_up_command_clamps_at_top() {
        let (mut world, _left, right) = setup_world();
        let map = GameMap::new(800, 600);

        move_paddle(&mut world, &map, PaddleCommand::up(Side::Right, 20));

        assert_eq!(world.get::<&Paddle>(right).unwrap().pos.y, 0);
    }

    #[test]
    fn test_repeated_down_commands_stop_at_bottom() {
        let (mut world, left, _right) = setup_world();
        let map = GameMap::new(800, 600);

        for _ in 0..50 {
            move_paddle(&mut world, &map, PaddleCommand::down(Side::Left, 20));
        }

        assert_eq!(world.get::<&Paddle>(left).unwrap().pos.y, 200);
    }
}
