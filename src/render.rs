//! Heat-map rendering of a lattice, one solid block per cell.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::SimulationError;
use crate::lattice::Lattice;

/// Black → red → yellow → white colour map for `t` in `[0, 1]`.
pub fn hot(t: f64) -> RGBColor {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(
        channel(t / 0.375),
        channel((t - 0.375) / 0.375),
        channel((t - 0.75) / 0.25),
    )
}

fn render_err(e: impl std::fmt::Display) -> SimulationError {
    SimulationError::Render(e.to_string())
}

/// Pixel size of a heat map with `cell_px` pixels per cell side.
pub fn image_size(lattice: &Lattice, cell_px: u32) -> (u32, u32) {
    (lattice.cols() as u32 * cell_px, lattice.rows() as u32 * cell_px)
}

/// Draw `lattice` onto `area`, row `x` top to bottom, column `y` left to right.
pub fn draw_heat_map<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lattice: &Lattice,
    cell_px: u32,
) -> Result<(), SimulationError> {
    if cell_px == 0 {
        return Err(SimulationError::Render("cell size must be at least 1 px".into()));
    }
    let side = cell_px as i32;

    area.fill(&hot(0.0)).map_err(render_err)?;
    for c in lattice.coords() {
        if !lattice[c] {
            continue;
        }
        let (left, top) = (c.y as i32 * side, c.x as i32 * side);
        area.draw(&Rectangle::new(
            [(left, top), (left + side - 1, top + side - 1)],
            hot(1.0).filled(),
        ))
        .map_err(render_err)?;
    }
    Ok(())
}

/// Render `lattice` to a PNG file.
pub fn save_heat_map(
    filename: impl AsRef<Path>,
    lattice: &Lattice,
    cell_px: u32,
) -> Result<(), SimulationError> {
    let root = BitMapBackend::new(filename.as_ref(), image_size(lattice, cell_px))
        .into_drawing_area();
    draw_heat_map(&root, lattice, cell_px)?;
    root.present().map_err(render_err)
}
