use crate::{
    region::{Rect, Region},
    utils::{self, Axis},
};

/// Simulation box, periodic along every axis
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    rect: Rect,
}
impl Container {
    /// Create a fully periodic container from a given rectangular box
    pub fn from_rect_periodic(rect: Rect) -> Self {
        Self { rect }
    }

    /// A reference to the rectangular box
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Squared minimum-image distance between two coordinates
    pub fn distance_squared(&self, coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
        let lengths = self.rect.lengths();
        Axis::all()
            .iter()
            .map(|axis| {
                let i = axis.index();
                let d = utils::minimum_image(coord1[i] - coord2[i], lengths[i]);
                d * d
            })
            .sum()
    }
    /// Map a coordinate back into the box
    pub fn wrap(&self, coord: &mut [f64; 3]) {
        for axis in Axis::all() {
            let [lo, hi] = self.rect.get_bounds(axis);
            coord[axis.index()] = utils::wrap(coord[axis.index()], lo, hi);
        }
    }
    pub fn contains(&self, coord: &[f64; 3]) -> bool {
        self.rect.contains(coord)
    }
}
