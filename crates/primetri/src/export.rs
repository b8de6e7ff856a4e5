//! MetaPost export of a triangulation.
//!
//! Every point is placed on the page by its edge distances used as (unnormalized)
//! barycentric weights against a fixed sample triangle, so every exported
//! triangle looks like the same upright shape regardless of the lattice shape.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::interior::find_inside_points;
use crate::lattice::Lat2;
use crate::triangle::Triangle;

/// Page coordinates of the three corners of every exported picture.
pub const SAMPLE_VERTICES: [(i64, i64); 3] = [(-12, 0), (12, 0), (0, 18)];

/// Page position of `pt`: its distances to the edges opposite `v0, v1, v2`
/// (edges `v1v2, v2v0, v0v1`) weight the sample corners.
pub fn page_coordinates(pt: Lat2, t: &Triangle) -> (f64, f64) {
    let d = t.distances(pt);
    let weights = [d.y, d.z, d.x];
    let mut x = 0.0;
    let mut y = 0.0;
    for (&(sx, sy), w) in SAMPLE_VERTICES.iter().zip(weights) {
        x += (sx * w) as f64;
        y += (sy * w) as f64;
    }
    (x, y)
}

fn write_point<W: Write>(w: &mut W, pt: Lat2, t: &Triangle, id: usize) -> std::io::Result<()> {
    let (x, y) = page_coordinates(pt, t);
    writeln!(w, "z{id} = ({x},{y});")
}

/// Write a MetaPost figure: each face drawn as a closed path, each interior
/// point of `t` labelled with its distance triple.
pub fn write_metapost<W: Write>(
    w: &mut W,
    triangulation: &[Triangle],
    t: &Triangle,
    output_format: &str,
) -> std::io::Result<()> {
    writeln!(w, "outputformat:=\"{output_format}\";")?;
    writeln!(w, "prologues:=3;")?;
    writeln!(w, "verbatimtex")?;
    writeln!(w, "%&latex")?;
    writeln!(w, "\\documentclass{{minimal}}")?;
    writeln!(w, "\\begin{{document}}")?;
    writeln!(w, "etex")?;
    writeln!(w, "beginfig(0);")?;

    let mut id = 1;
    for face in triangulation {
        for (offset, v) in face.vertices().into_iter().enumerate() {
            write_point(w, v, t, id + offset)?;
        }
        writeln!(w, "draw z{}--z{}--z{}--z{};", id, id + 1, id + 2, id)?;
        id += 3;
    }

    for pt in find_inside_points(t) {
        write_point(w, pt, t, id)?;
        let d = t.distances(pt);
        writeln!(w, "label.urt(\"({},{},{})\", z{});", d.x, d.y, d.z, id)?;
        id += 1;
    }

    write!(w, "endfig;\nend.")?;
    Ok(())
}

/// Write the figure to `path` (created or truncated).
pub fn export_metapost<P: AsRef<Path>>(
    path: P,
    triangulation: &[Triangle],
    t: &Triangle,
    output_format: &str,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_metapost(&mut file, triangulation, t, output_format)?;
    file.flush()
}
