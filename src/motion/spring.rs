use std::time::Duration;

/// Sub-step used to keep stiff springs stable at coarse frame rates.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.01;

/// A damped spring that follows a target value.
#[derive(Debug, Clone)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, initial: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Integrate the spring forward by `dt`. Once at rest it snaps onto the target.
    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
