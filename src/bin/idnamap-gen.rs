use std::process::ExitCode;

use ucd_tablegen::{cli, mapping::IdnaMap};

fn main() -> ExitCode {
    cli::main::<IdnaMap>()
}
