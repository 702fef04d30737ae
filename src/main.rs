use clap::error::ErrorKind;
use clap::Parser;
use xor::{print_usage, run, Arguments};

fn main() {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            print_usage();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(error) = run(args) {
        eprintln!("{}", error);
        std::process::exit(1);
    };
}
