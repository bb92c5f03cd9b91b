use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::Region;
use crate::utils::Axis;

/// Axis-aligned box spanning `[lo, hi)` along each axis
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    xlo: f64,
    xhi: f64,
    ylo: f64,
    yhi: f64,
    zlo: f64,
    zhi: f64,
}
impl Rect {
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64, zlo: f64, zhi: f64) -> Self {
        assert!(
            xlo < xhi && ylo < yhi && zlo < zhi,
            "Lower bounds should be less than upper bounds, found x [{}, {}], y [{}, {}], z [{}, {}]",
            xlo,
            xhi,
            ylo,
            yhi,
            zlo,
            zhi,
        );
        Self {
            xlo,
            xhi,
            ylo,
            yhi,
            zlo,
            zhi,
        }
    }
    pub fn lx(&self) -> f64 {
        self.xhi - self.xlo
    }
    pub fn ly(&self) -> f64 {
        self.yhi - self.ylo
    }
    pub fn lz(&self) -> f64 {
        self.zhi - self.zlo
    }
    pub fn lengths(&self) -> [f64; 3] {
        [self.lx(), self.ly(), self.lz()]
    }
    pub fn get_bounds(&self, axis: Axis) -> [f64; 2] {
        match axis {
            Axis::X => [self.xlo, self.xhi],
            Axis::Y => [self.ylo, self.yhi],
            Axis::Z => [self.zlo, self.zhi],
        }
    }
}
impl Region for Rect {
    fn contains(&self, coord: &[f64; 3]) -> bool {
        self.xlo <= coord[0]
            && coord[0] < self.xhi
            && self.ylo <= coord[1]
            && coord[1] < self.yhi
            && self.zlo <= coord[2]
            && coord[2] < self.zhi
    }
    fn get_random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        [
            Uniform::new(self.xlo, self.xhi).sample(rng),
            Uniform::new(self.ylo, self.yhi).sample(rng),
            Uniform::new(self.zlo, self.zhi).sample(rng),
        ]
    }
}
