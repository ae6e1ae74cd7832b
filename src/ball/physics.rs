//! Ball flight systems

use bevy::prelude::*;

use crate::ball::components::*;
use crate::constants::*;
use crate::input::LaunchInput;
use crate::projectile::FlightStep;

/// Move airborne balls along their parabola and record the trail.
/// Runs in FixedUpdate after launch_ball so a fresh launch starts at t = 0.
pub fn advance_flight(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut BallFlight, &mut TrajectoryPath), With<Ball>>,
) {
    let now = time.elapsed_secs_f64();

    for (mut transform, mut flight, mut path) in &mut query {
        let Some(active) = flight.0 else {
            continue;
        };

        let step = active.advance(now, GROUND_Y);
        let pos = step.position();
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        path.push(pos);

        if let FlightStep::Landed(pos) = step {
            flight.0 = None;
            info!(
                "Ball landed at ({:.1}, {:.1}) after {} frames",
                pos.x,
                pos.y,
                path.points().len()
            );
        }
    }
}

/// Put the ball back at the start when R was pressed
pub fn reset_ball(
    mut input: ResMut<LaunchInput>,
    mut query: Query<(&mut Transform, &mut BallFlight, &mut TrajectoryPath), With<Ball>>,
) {
    if !input.take_reset() {
        return;
    }

    for (mut transform, mut flight, mut path) in &mut query {
        flight.0 = None;
        path.clear();
        transform.translation.x = INITIAL_BALL_POSITION.x;
        transform.translation.y = INITIAL_BALL_POSITION.y;
    }
    info!("Ball reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectile::Flight;
    use crate::tuning::LaunchTuning;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn spawn_ball(world: &mut World, flight: Option<Flight>) -> Entity {
        world
            .spawn((
                Ball,
                Transform::from_translation(INITIAL_BALL_POSITION.extend(1.0)),
                BallFlight(flight),
                TrajectoryPath::default(),
            ))
            .id()
    }

    fn test_tuning() -> LaunchTuning {
        LaunchTuning {
            gravity: 10.0,
            time_multiplier: 1.0,
            ..Default::default()
        }
    }

    fn flight_from(start: Vec2, velocity: Vec2) -> Flight {
        Flight::new(start, 0.0, velocity, &test_tuning())
    }

    fn test_world(elapsed: f32) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(elapsed));
        world.insert_resource(time);
        world.insert_resource(test_tuning());
        world.init_resource::<LaunchInput>();
        world
    }

    #[test]
    fn test_advance_moves_ball_and_records_path() {
        let mut world = test_world(1.0);
        let flight = flight_from(INITIAL_BALL_POSITION, Vec2::new(20.0, 30.0));
        let ball = spawn_ball(&mut world, Some(flight));

        world.run_system_once(advance_flight).unwrap();

        let transform = world.get::<Transform>(ball).unwrap();
        assert_eq!(transform.translation.x, INITIAL_BALL_POSITION.x + 20.0);
        assert_eq!(transform.translation.y, INITIAL_BALL_POSITION.y + 25.0);
        assert_eq!(transform.translation.z, 1.0, "Draw order is untouched");
        assert_eq!(world.get::<TrajectoryPath>(ball).unwrap().points().len(), 1);
        assert!(world.get::<BallFlight>(ball).unwrap().is_airborne());
    }

    #[test]
    fn test_tuning_reload_mid_flight_keeps_path() {
        let mut world = test_world(1.0);
        let flight = flight_from(INITIAL_BALL_POSITION, Vec2::new(50.0, 50.0));
        let ball = spawn_ball(&mut world, Some(flight));

        world.run_system_once(advance_flight).unwrap();
        let before = world.get::<Transform>(ball).unwrap().translation.truncate();

        // Hot reload with much stronger gravity, then one more frame
        world.insert_resource(LaunchTuning {
            gravity: 30.0,
            time_multiplier: 4.0,
            ..Default::default()
        });
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(1.0 / 60.0));
        world.run_system_once(advance_flight).unwrap();

        let after = world.get::<Transform>(ball).unwrap().translation.truncate();
        assert!(world.get::<BallFlight>(ball).unwrap().is_airborne(), "Still in flight");
        // Speed at t = 1 is |(50, 40)| = 64, so one frame moves about 1.07
        assert!(
            after.distance(before) < 2.0,
            "Frame-sized move expected, moved from {:?} to {:?}",
            before,
            after
        );
    }

    #[test]
    fn test_landing_clamps_to_ground_and_ends_flight() {
        // vy = 10, g = 10: back on the ground after 2s
        let mut world = test_world(3.0);
        let flight = flight_from(INITIAL_BALL_POSITION, Vec2::new(5.0, 10.0));
        let ball = spawn_ball(&mut world, Some(flight));

        world.run_system_once(advance_flight).unwrap();

        let transform = world.get::<Transform>(ball).unwrap();
        assert_eq!(transform.translation.y, GROUND_Y);
        assert_eq!(transform.translation.x, INITIAL_BALL_POSITION.x + 15.0);
        assert!(!world.get::<BallFlight>(ball).unwrap().is_airborne());
    }

    #[test]
    fn test_resting_ball_untouched() {
        let mut world = test_world(1.0);
        let ball = spawn_ball(&mut world, None);

        world.run_system_once(advance_flight).unwrap();

        assert!(world.get::<TrajectoryPath>(ball).unwrap().points().is_empty());
        assert_eq!(
            world.get::<Transform>(ball).unwrap().translation.truncate(),
            INITIAL_BALL_POSITION
        );
    }

    #[test]
    fn test_reset_clears_flight_and_path() {
        let mut world = test_world(1.0);
        let flight = flight_from(Vec2::new(0.0, 100.0), Vec2::new(5.0, 10.0));
        let ball = spawn_ball(&mut world, Some(flight));
        world
            .get_mut::<TrajectoryPath>(ball)
            .unwrap()
            .push(Vec2::new(0.0, 100.0));
        world.get_mut::<Transform>(ball).unwrap().translation = Vec3::new(0.0, 100.0, 1.0);
        world.resource_mut::<LaunchInput>().reset_pressed = true;

        world.run_system_once(reset_ball).unwrap();

        assert!(!world.get::<BallFlight>(ball).unwrap().is_airborne());
        assert!(world.get::<TrajectoryPath>(ball).unwrap().points().is_empty());
        assert_eq!(
            world.get::<Transform>(ball).unwrap().translation.truncate(),
            INITIAL_BALL_POSITION
        );
        assert!(!world.resource::<LaunchInput>().reset_pressed);
    }

    #[test]
    fn test_reset_without_request_does_nothing() {
        let mut world = test_world(1.0);
        let flight = flight_from(INITIAL_BALL_POSITION, Vec2::new(5.0, 10.0));
        let ball = spawn_ball(&mut world, Some(flight));

        world.run_system_once(reset_ball).unwrap();

        assert!(world.get::<BallFlight>(ball).unwrap().is_airborne());
    }
}
