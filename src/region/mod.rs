pub mod rect;
pub use rect::Rect;

use rand::Rng;

pub trait Region {
    fn contains(&self, coord: &[f64; 3]) -> bool;
    /// Uniformly distributed coordinate inside the region
    fn get_random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3];
}
