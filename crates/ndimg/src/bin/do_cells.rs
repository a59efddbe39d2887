//! Sends two cells on a 100 x 100 raster through `read_cells`.

use std::process::ExitCode;

use ndimg::demo;
use ndimg::prelude::host;

fn main() -> ExitCode {
    if let Err(err) = ndimg::prepare() {
        eprintln!("do_cells: {err}");
        return ExitCode::FAILURE;
    }

    let cells = demo::cells();
    tracing::debug!(count = cells.len(), "sending cells");
    ndimg::exit_code("read_cells", host::read_cells(&cells, demo::CELL_RASTER))
}
