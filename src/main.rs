// src/main.rs

use task_heap::{cli, logging};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("sortbench error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    cli::run(args)
}
