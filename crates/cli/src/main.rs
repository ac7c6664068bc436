//! `typegen` binary.

fn main() {
    typegen_cli::init_tracing();
    std::process::exit(typegen_cli::run_cli(std::env::args().collect()));
}
