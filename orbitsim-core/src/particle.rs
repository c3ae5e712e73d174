use glam::DVec2;

/// A point moving on a circular arc around the origin
///
/// The sign of `angular_velocity` picks the rotation direction: positive is
/// counter-clockwise, negative is clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub angular_velocity: f64,
}

impl Particle {
    /// Store the given coordinates and angular velocity as-is, without validation
    pub fn new(x: f64, y: f64, angular_velocity: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            angular_velocity,
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        (self.pos.x * self.pos.x + self.pos.y * self.pos.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_values_verbatim() {
        let p = Particle::new(0.3, -0.5, -2.0);
        assert_eq!(p.x(), 0.3);
        assert_eq!(p.y(), -0.5);
        assert_eq!(p.angular_velocity, -2.0);
    }

    #[test]
    fn test_origin_is_accepted() {
        let p = Particle::new(0.0, 0.0, 1.0);
        assert_eq!(p.radius(), 0.0);
    }

    #[test]
    fn test_radius() {
        let p = Particle::new(3.0, 4.0, 1.0);
        assert_eq!(p.radius(), 5.0);
    }
}
