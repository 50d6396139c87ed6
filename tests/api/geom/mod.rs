mod plotter;
mod solvent;
mod tiler;
mod to_cells;
