use clap::Parser;

mod cli;

use cli::render::print_error;
use cli::setup::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = cli::run(cli) {
        print_error(&e);
        std::process::exit(1);
    }
}
