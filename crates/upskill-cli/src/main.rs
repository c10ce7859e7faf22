//! `thermo` binary entry point

use upskill_cli::{build_cli, dispatch, logging, GlobalArgs};

fn main() {
    let matches = build_cli().get_matches();

    let globals = GlobalArgs::from_matches(&matches);
    logging::init(globals.verbosity);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = match dispatch(&matches, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            2
        }
    };

    std::process::exit(status);
}
