//! LAMMPS `data` files with atom style `atomic`.
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    generator::Structure,
    region::Rect,
    utils::{float_repr, Axis},
    Atoms, Container, Error,
};

/// Write `structure` in LAMMPS data format. `title` fills the comment line.
pub fn write_data<W: Write>(writer: &mut W, structure: &Structure, title: &str) -> Result<(), Error> {
    let atoms = &structure.atoms;
    let rect = structure.container().rect();

    writeln!(writer, "{} (written by amorph)", title)?;
    writeln!(writer)?;
    writeln!(writer, "{} atoms", atoms.num_atoms())?;
    writeln!(writer, "{} atom types", atoms.num_types())?;
    writeln!(writer)?;
    for axis in Axis::all() {
        let [lo, hi] = rect.get_bounds(axis);
        let label = axis.label();
        writeln!(
            writer,
            "{} {} {}lo {}hi",
            float_repr(lo),
            float_repr(hi),
            label,
            label
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Masses")?;
    writeln!(writer)?;
    for (i, mass) in atoms.type_masses().iter().enumerate() {
        writeln!(writer, "{} {}", i + 1, float_repr(*mass))?;
    }
    writeln!(writer)?;

    writeln!(writer, "Atoms # atomic")?;
    writeln!(writer)?;
    for i in 0..atoms.num_atoms() {
        let [x, y, z] = atoms.positions()[i];
        writeln!(
            writer,
            "{} {} {} {} {}",
            atoms.ids()[i],
            atoms.types()[i] + 1,
            float_repr(x),
            float_repr(y),
            float_repr(z)
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_data_file(path: &Path, structure: &Structure, title: &str) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_data(&mut writer, structure, title)
}

/// Parse a LAMMPS data file with atom style `atomic`. The box is assumed
/// periodic along every axis, and atoms are returned in file order.
pub fn read_data<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let mut lines = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        let content = match line.find('#') {
            Some(idx) => line[..idx].trim().to_string(),
            None => line.trim().to_string(),
        };
        if !content.is_empty() {
            lines.push(content);
        }
    }
    let mut lines = lines.into_iter().peekable();

    let mut num_atoms: Option<usize> = None;
    let mut num_types: Option<usize> = None;
    let mut bounds: [Option<[f64; 2]>; 3] = [None; 3];

    while let Some(line) = lines.next_if(|l| !is_section(l)) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [n, "atoms"] => num_atoms = Some(parse_field(n, &line)?),
            [n, "atom", "types"] => num_types = Some(parse_field(n, &line)?),
            [lo, hi, lo_label, hi_label] => {
                let axis = Axis::all()
                    .into_iter()
                    .find(|axis| {
                        *lo_label == format!("{}lo", axis.label())
                            && *hi_label == format!("{}hi", axis.label())
                    })
                    .ok_or_else(|| Error::Format(format!("unknown header line '{}'", line)))?;
                bounds[axis.index()] = Some([parse_field(lo, &line)?, parse_field(hi, &line)?]);
            }
            _ => return Err(Error::Format(format!("unknown header line '{}'", line))),
        }
    }

    let num_atoms = num_atoms.ok_or_else(|| Error::Format(String::from("missing atom count")))?;
    let num_types =
        num_types.ok_or_else(|| Error::Format(String::from("missing atom type count")))?;
    let mut box_bounds = [[0.0; 2]; 3];
    for axis in Axis::all() {
        box_bounds[axis.index()] = bounds[axis.index()].ok_or_else(|| {
            Error::Format(format!("missing {}lo {}hi", axis.label(), axis.label()))
        })?;
    }

    let mut masses = vec![None; num_types];
    let mut entries: Vec<(usize, usize, [f64; 3])> = Vec::with_capacity(num_atoms);
    let mut seen_atoms = false;
    while let Some(section) = lines.next() {
        match section.as_str() {
            "Masses" => {
                for _ in 0..num_types {
                    let line = section_line(&mut lines, "Masses")?;
                    let fields: Vec<&str> = line.split_whitespace().collect();
                    let [t, m] = fields.as_slice() else {
                        return Err(Error::Format(format!("bad Masses line '{}'", line)));
                    };
                    let t: usize = parse_field(t, &line)?;
                    let slot = type_slot(t, num_types, &line)?;
                    masses[slot] = Some(parse_field::<f64>(m, &line)?);
                }
            }
            "Atoms" => {
                seen_atoms = true;
                for _ in 0..num_atoms {
                    let line = section_line(&mut lines, "Atoms")?;
                    let fields: Vec<&str> = line.split_whitespace().collect();
                    if fields.len() < 5 {
                        return Err(Error::Format(format!("bad Atoms line '{}'", line)));
                    }
                    let id: usize = parse_field(fields[0], &line)?;
                    let t: usize = parse_field(fields[1], &line)?;
                    let slot = type_slot(t, num_types, &line)?;
                    let coord = [
                        parse_field(fields[2], &line)?,
                        parse_field(fields[3], &line)?,
                        parse_field(fields[4], &line)?,
                    ];
                    entries.push((id, slot, coord));
                }
            }
            other => return Err(Error::Format(format!("unsupported section '{}'", other))),
        }
    }
    if !seen_atoms && num_atoms > 0 {
        return Err(Error::Format(String::from("missing Atoms section")));
    }

    let mut atoms = Atoms::new();
    for (t, mass) in masses.into_iter().enumerate() {
        let mass = mass.ok_or_else(|| Error::Format(format!("no mass for atom type {}", t + 1)))?;
        atoms.add_type(mass);
    }
    for (id, t, coord) in entries {
        atoms.ids.push(id);
        atoms.types.push(t);
        atoms.positions.push(coord);
    }

    let [[xlo, xhi], [ylo, yhi], [zlo, zhi]] = box_bounds;
    if !(xlo < xhi && ylo < yhi && zlo < zhi) {
        return Err(Error::Format(String::from("box bounds are inverted")));
    }
    let container = Container::from_rect_periodic(Rect::new(xlo, xhi, ylo, yhi, zlo, zhi));
    Ok(Structure::new(atoms, container))
}

pub fn read_data_file(path: &Path) -> Result<Structure, Error> {
    read_data(BufReader::new(File::open(path)?))
}

fn is_section(line: &str) -> bool {
    matches!(line, "Masses" | "Atoms" | "Velocities")
}

fn section_line<I: Iterator<Item = String>>(lines: &mut I, section: &str) -> Result<String, Error> {
    lines
        .next()
        .filter(|l| !is_section(l))
        .ok_or_else(|| Error::Format(format!("{} section ended early", section)))
}

fn type_slot(t: usize, num_types: usize, line: &str) -> Result<usize, Error> {
    if t == 0 || t > num_types {
        return Err(Error::Format(format!("atom type out of range in '{}'", line)));
    }
    Ok(t - 1)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: &str) -> Result<T, Error> {
    field
        .parse()
        .map_err(|_| Error::Format(format!("cannot parse '{}' in '{}'", field, line)))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::generator::{generate_structure, GeneratorSettings};

    fn sample() -> Structure {
        let mut rng = StdRng::seed_from_u64(17);
        generate_structure(&GeneratorSettings::new(4, 2.0), &mut rng).unwrap()
    }

    #[test]
    fn writes_header_and_atoms() {
        let structure = sample();
        let mut buf = Vec::new();
        write_data(&mut buf, &structure, "N-4-density-2.0-id-1").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let a = float_repr(structure.container().rect().lx());
        assert_eq!(lines[0], "N-4-density-2.0-id-1 (written by amorph)");
        assert_eq!(lines[2], "4 atoms");
        assert_eq!(lines[3], "1 atom types");
        assert_eq!(lines[5], format!("0.0 {} xlo xhi", a));
        assert_eq!(lines[6], format!("0.0 {} ylo yhi", a));
        assert_eq!(lines[7], format!("0.0 {} zlo zhi", a));
        assert_eq!(lines[9], "Masses");
        assert_eq!(lines[11], "1 12.0");
        assert_eq!(lines[13], "Atoms # atomic");
        assert_eq!(lines.len(), 15 + 4);
        assert!(lines[15].starts_with("1 1 "));
        assert!(lines[18].starts_with("4 1 "));
    }

    #[test]
    fn reads_back_written_structure() {
        let structure = sample();
        let mut buf = Vec::new();
        write_data(&mut buf, &structure, "sample").unwrap();
        let parsed = read_data(buf.as_slice()).unwrap();
        assert_eq!(parsed.atoms, structure.atoms);
        assert_eq!(parsed.container(), structure.container());
    }

    #[test]
    fn reads_file_without_masses_section_fails() {
        let text = "title\n\n1 atoms\n1 atom types\n0 1 xlo xhi\n0 1 ylo yhi\n0 1 zlo zhi\n\nAtoms\n\n1 1 0.1 0.2 0.3\n";
        assert!(matches!(read_data(text.as_bytes()), Err(Error::Format(_))));
    }

    #[test]
    fn rejects_truncated_atoms_section() {
        let text = "title\n\n2 atoms\n1 atom types\n0 1 xlo xhi\n0 1 ylo yhi\n0 1 zlo zhi\n\nMasses\n\n1 12.0\n\nAtoms # atomic\n\n1 1 0.1 0.2 0.3\n";
        assert!(matches!(read_data(text.as_bytes()), Err(Error::Format(_))));
    }

    #[test]
    fn ignores_comments_and_image_flags() {
        let text = "title\n\n1 atoms # count\n1 atom types\n0.0 2.0 xlo xhi\n0.0 2.0 ylo yhi\n0.0 2.0 zlo zhi\n\nMasses\n\n1 12.0 # C\n\nAtoms # atomic\n\n1 1 0.5 1.0 1.5 0 0 0\n";
        let structure = read_data(text.as_bytes()).unwrap();
        assert_eq!(structure.num_atoms(), 1);
        assert_eq!(structure.atoms.positions()[0], [0.5, 1.0, 1.5]);
        assert_eq!(structure.container().rect().lengths(), [2.0; 3]);
    }
}
