//! Flattens a 3 x 3 matrix for `show_matrix`, then sends a vector and
//! checks `double_input`.

use std::process::ExitCode;

use ndimg::demo;
use ndimg::prelude::{host, NdimgStatus};

fn main() -> ExitCode {
    if let Err(err) = ndimg::prepare() {
        eprintln!("do_matrix: {err}");
        return ExitCode::FAILURE;
    }

    let matrix = match demo::matrix() {
        Ok(matrix) => matrix,
        Err(err) => {
            tracing::error!(error = %err, "could not build matrix");
            return ExitCode::FAILURE;
        }
    };
    let status = host::show_matrix(&matrix);
    if status != NdimgStatus::Ok {
        return ndimg::exit_code("show_matrix", status);
    }

    let status = host::show_vector(&demo::vector());
    if status != NdimgStatus::Ok {
        return ndimg::exit_code("show_vector", status);
    }

    let doubled = ndimg_ffi::double_input(21);
    tracing::info!(input = 21, output = doubled, "double_input");
    ndimg::exit_code("double_input", ndimg_ffi::last_status())
}
