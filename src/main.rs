use std::io::Write;

use cfdscore::args;
use cfdscore::commands;
use cfdscore::constants::USAGE;
use cfdscore::errors;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);

    // Length errors already end with the usage line
    if let errors::ErrorKind::InvalidInputLength(..) = e.kind() {
        return;
    }

    writeln!(stderr, "Usage: {}", USAGE).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    let args = args::parse_score_args()?;

    commands::score::main(&args)
}

fn main() {
    env_logger::init();

    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
