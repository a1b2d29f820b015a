use std::process::ExitCode;

use ucd_tablegen::{casefold::CaseFold, cli};

fn main() -> ExitCode {
    cli::main::<CaseFold>()
}
