//! Simulated "level three" projectile: gravity, quadratic drag and a spring
//! anchored at the origin. Produces logs in the format the loader reads.

use std::io::{self, Write};

pub type Vec3 = [f64; 3];

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: Vec3, k: f64) -> Vec3 {
    [a[0] * k, a[1] * k, a[2] * k]
}

fn norm(a: Vec3) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

/// How the summed force turns into an acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceModel {
    /// Forces are summed straight into the acceleration, mass only scales
    /// gravity. This is how the level-three logs were produced.
    #[default]
    Unscaled,
    /// Newton's second law, `a = F / m`.
    PerUnitMass,
}

/// Scenario constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThree {
    pub mass: f64,
    pub gravity: f64,
    /// Quadratic drag coefficient: `F = -C |v| v`.
    pub drag: f64,
    pub spring_k: f64,
    pub spring_rest_length: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub dt: f64,
    /// Simulate while the accumulated time is `<= duration`.
    pub duration: f64,
    pub force_model: ForceModel,
}

impl Default for LevelThree {
    fn default() -> Self {
        Self {
            mass: 3.0,
            gravity: 9.8,
            drag: 0.5,
            spring_k: 9.0,
            spring_rest_length: 3.0,
            position: [-1.0, 1.0, -3.0],
            velocity: [5.0, -1.0, -3.0],
            dt: 0.01,
            duration: 20.01,
            force_model: ForceModel::Unscaled,
        }
    }
}

/// One logged step: state at `t`, acceleration from the forces at `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub t: f64,
    pub position: Vec3,
    pub speed: f64,
    pub acceleration: f64,
}

impl LevelThree {
    fn net_force(&self, p: Vec3, v: Vec3) -> Vec3 {
        let gravity = [0.0, 0.0, -self.mass * self.gravity];
        let drag = scale(v, -self.drag * norm(v));

        let r = norm(p);
        let spring = if r > 0.0 {
            scale(p, -self.spring_k * (r - self.spring_rest_length) / r)
        } else {
            [0.0; 3]
        };
        add(add(gravity, drag), spring)
    }

    fn acceleration(&self, p: Vec3, v: Vec3) -> Vec3 {
        let force = self.net_force(p, v);
        match self.force_model {
            ForceModel::Unscaled => force,
            ForceModel::PerUnitMass => scale(force, 1.0 / self.mass),
        }
    }

    /// Run with semi-implicit Euler; returns one [`Step`] per tick.
    ///
    /// Time is a running sum of `dt`, so rounding decides whether the tick
    /// landing on `duration` is taken (for the defaults it is not: 2001
    /// steps, the last at t = 20.00).
    pub fn simulate(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut p = self.position;
        let mut v = self.velocity;
        let mut t = 0.0;

        while t <= self.duration {
            let a = self.acceleration(p, v);
            steps.push(Step {
                t,
                position: p,
                speed: norm(v),
                acceleration: norm(a),
            });

            v = add(v, scale(a, self.dt));
            p = add(p, scale(v, self.dt));
            t += self.dt;
        }
        steps
    }
}

/// Last logged time at which the speed was at least 1 m/s.
pub fn last_time_above_one(steps: &[Step]) -> f64 {
    steps
        .iter()
        .rev()
        .find(|s| s.speed >= 1.0)
        .map(|s| s.t)
        .unwrap_or(0.0)
}

/// Write a log: header, one `t x y z v a` row per step, summary footer.
pub fn write_log<W: Write>(steps: &[Step], mut out: W) -> io::Result<()> {
    writeln!(out, "t x y z v a")?;
    for s in steps {
        let [x, y, z] = s.position;
        writeln!(
            out,
            "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
            s.t, x, y, z, s.speed, s.acceleration
        )?;
    }
    writeln!(out, "last time above 1 m/s was {:.2}", last_time_above_one(steps))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_whole_duration() {
        let steps = LevelThree::default().simulate();
        assert_eq!(steps.len(), 2001);
        assert_eq!(steps[0].t, 0.0);
        assert!((steps.last().unwrap().t - 20.0).abs() < 1e-9);
    }

    #[test]
    fn default_run_matches_level_three_log() {
        let steps = LevelThree::default().simulate();
        assert!((steps[0].acceleration - 22.817).abs() < 5e-4);

        let [x, y, z] = steps[3].position;
        assert!((x + 0.858).abs() < 5e-4);
        assert!((y - 0.971).abs() < 5e-4);
        assert!((z + 3.101).abs() < 5e-4);
    }

    #[test]
    fn per_unit_mass_divides_the_force() {
        let scenario = LevelThree {
            force_model: ForceModel::PerUnitMass,
            ..LevelThree::default()
        };
        let steps = scenario.simulate();
        assert!((steps[0].acceleration - 22.817 / 3.0).abs() < 5e-4);
        assert_eq!(steps.len(), 2001);
    }

    #[test]
    fn first_step_is_the_initial_state() {
        let scenario = LevelThree::default();
        let first = scenario.simulate()[0];
        assert_eq!(first.position, scenario.position);
        assert!((first.speed - 35f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn free_fall_without_drag_or_spring() {
        let scenario = LevelThree {
            drag: 0.0,
            spring_k: 0.0,
            position: [0.0; 3],
            velocity: [0.0; 3],
            duration: 0.02,
            force_model: ForceModel::PerUnitMass,
            ..LevelThree::default()
        };
        let steps = scenario.simulate();
        assert_eq!(steps.len(), 3);
        for s in &steps {
            assert!((s.acceleration - 9.8).abs() < 1e-12);
        }
        // v1 = -0.098, p1 = -0.00098
        assert!((steps[1].position[2] + 0.00098).abs() < 1e-12);
    }

    #[test]
    fn motion_is_damped() {
        let steps = LevelThree::default().simulate();
        let last = steps.last().unwrap();
        assert!(last.speed < steps[0].speed);
        assert!(last_time_above_one(&steps) > 0.0);
    }

    #[test]
    fn log_has_header_rows_and_footer() {
        let steps = LevelThree {
            duration: 0.02,
            ..LevelThree::default()
        }
        .simulate();
        let mut buf = Vec::new();
        write_log(&steps, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "t x y z v a");
        assert!(lines[1].starts_with("0.000 -1.000 1.000 -3.000 5.916"));
        assert!(lines[4].starts_with("last time above 1 m/s was "));
    }
}
