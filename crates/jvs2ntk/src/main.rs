use clap::Parser;
use jvs2ntk::{Cli, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = cli.run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
