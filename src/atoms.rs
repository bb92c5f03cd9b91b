/// Per-atom properties of a structure
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Atoms {
    pub ids: Vec<usize>,
    pub types: Vec<usize>,
    pub positions: Vec<[f64; 3]>,
    type_masses: Vec<f64>,
}
impl Atoms {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn num_atoms(&self) -> usize {
        self.ids.len()
    }
    pub fn ids(&self) -> &Vec<usize> {
        &self.ids
    }
    pub fn types(&self) -> &Vec<usize> {
        &self.types
    }
    pub fn positions(&self) -> &Vec<[f64; 3]> {
        &self.positions
    }
    pub fn type_masses(&self) -> &Vec<f64> {
        &self.type_masses
    }
    pub fn num_types(&self) -> usize {
        self.type_masses.len()
    }
    /// Register a new atom type, returning its index
    pub fn add_type(&mut self, mass: f64) -> usize {
        assert!(mass > 0.0, "Mass should be positive, found {}", mass);
        self.type_masses.push(mass);
        self.type_masses.len() - 1
    }
    pub fn set_position(&mut self, i: usize, new_pos: [f64; 3]) {
        self.positions[i] = new_pos;
    }
    pub fn increment_position(&mut self, i: usize, increment: [f64; 3]) {
        self.positions[i][0] += increment[0];
        self.positions[i][1] += increment[1];
        self.positions[i][2] += increment[2];
    }
    /// Append atoms of one type at the given coordinates. Ids continue from
    /// the largest existing id, starting at 1.
    pub fn add_atoms(&mut self, atom_type: usize, coords: Vec<[f64; 3]>) {
        assert!(
            atom_type < self.num_types(),
            "Atom type {} has not been registered",
            atom_type
        );
        let num_atoms = coords.len();
        let atom_id = match self.ids().iter().max() {
            Some(j) => j + 1,
            None => 1,
        };
        self.ids.extend(atom_id..atom_id + num_atoms);
        self.types.extend(std::iter::repeat(atom_type).take(num_atoms));
        self.positions.extend(coords);
    }
}
