use glam::DVec2;

use crate::config::DEFAULT_TRAIL_SPACING;

/// Sampled path of the particle in normalized units.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<DVec2>,
    min_spacing: f64,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_SPACING)
    }
}

impl Trail {
    pub fn new(min_spacing: f64) -> Self {
        Self {
            points: Vec::new(),
            min_spacing,
        }
    }

    /// Records `point` unless it lies within the minimum spacing of the last sample.
    pub fn sample(&mut self, point: DVec2) -> bool {
        match self.points.last() {
            Some(last) if last.distance(point) <= self.min_spacing => false,
            _ => {
                self.points.push(point);
                true
            }
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_points_closer_than_spacing() {
        let mut trail = Trail::new(0.1);
        assert!(trail.sample(DVec2::ZERO));
        assert!(!trail.sample(DVec2::new(0.05, 0.0)));
        assert!(trail.sample(DVec2::new(0.2, 0.0)));
        assert_eq!(trail.len(), 2);
    }
}
