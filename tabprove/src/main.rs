use clap::Parser;
use log::info;
use std::fs::File;
use std::io::Write;
use tableau::szs::{self, SuccessKind};
use tableau::{Prover, Tableau};
use tabprove::{parse, Cli, Error};

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print!("{}", szs::Status(e.get_kind()));
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.output(format!("{}\n", e)) {
                log::error!("cannot write output: {}", e)
            }
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let sequent = parse::parse_file(&cli.file, cli.tptp)?;
    info!("sequent: {}", sequent);

    let tableau = Tableau::build(sequent)?;
    info!("initial tableau:\n{}", tableau);

    let mut prover = Prover::new(tableau, cli.opt());
    let closed = prover.prove()?;

    let stats = prover.stats();
    info!("{} of {} branches closed", stats.closed, stats.branches);
    if let Some(file) = &cli.stats {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string(&stats)?)?;
    }

    print!("{}", szs::Status(SuccessKind::new(closed)));
    cli.output(prover.tableau())?;
    Ok(())
}
