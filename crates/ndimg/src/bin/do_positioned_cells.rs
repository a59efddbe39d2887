//! Sends two self-positioned cells through `read_cells_with_position`.

use std::process::ExitCode;

use ndimg::demo;
use ndimg::prelude::host;

fn main() -> ExitCode {
    if let Err(err) = ndimg::prepare() {
        eprintln!("do_positioned_cells: {err}");
        return ExitCode::FAILURE;
    }

    let cells = demo::positioned_cells();
    tracing::debug!(count = cells.len(), "sending positioned cells");
    ndimg::exit_code("read_cells_with_position", host::read_cells_with_position(&cells))
}
