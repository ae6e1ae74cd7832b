//! Ball-related components

use bevy::prelude::*;

use crate::projectile::Flight;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// Active launch, None while the ball is at rest
#[derive(Component, Default, Debug)]
pub struct BallFlight(pub Option<Flight>);

impl BallFlight {
    pub fn is_airborne(&self) -> bool {
        self.0.is_some()
    }
}

/// Positions the ball passed through during the current launch
#[derive(Component, Default, Debug)]
pub struct TrajectoryPath(pub Vec<Vec2>);

impl TrajectoryPath {
    pub fn push(&mut self, pos: Vec2) {
        self.0.push(pos);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn points(&self) -> &[Vec2] {
        &self.0
    }
}
