use std::io::Write;

use cfdscore::args;
use cfdscore::commands;
use cfdscore::errors;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();

    writeln!(stderr, "{}", e.display_chain()).expect("Error writing to stderr");
}

fn main() {
    env_logger::init();

    let result = args::parse_batch_args().and_then(|args| commands::batch::main(&args));
    if let Err(e) = result {
        print_err(&e);

        ::std::process::exit(1);
    }
}
