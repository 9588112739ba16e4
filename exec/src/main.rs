// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate dgm;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate prettytable;
extern crate env_logger;
extern crate time;

use std::path::Path;
use dgm::graph_models::{ExactInf, new_inf_alg};
use dgm::properties::PropertySet;
use helper::*;

mod input;
mod helper;

pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        links {
            Dgm(::dgm::errors::Error, ::dgm::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}

use errors::*;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            eprintln!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut timer = Timer::start();

    let app_m = clap_app!(dgm_exec =>
        (about: "Exact inference on a discrete factor graph")
        (@arg input: -i +required +takes_value "factor graph file (JSON)")
        (@arg alg: -a +takes_value "inference algorithm [default=EXACT]")
        (@arg props: -p +takes_value "properties of the algorithm [default=[verbose=0]]")
        (@arg factors: -f --factors "also report the marginal of every factor")
    ).get_matches();

    let finput = app_m.value_of("input").ok_or("input file is required")?;
    let fg = input::read_factor_graph(Path::new(finput))?;
    debug!("Loaded factor graph with {} variables and {} factors", fg.nr_vars(), fg.nr_factors());

    let opts: PropertySet = app_m.value_of("props").unwrap_or("[verbose=0]").parse::<PropertySet>()
        .chain_err(|| "Invalid properties")?;
    let alg_name = app_m.value_of("alg").unwrap_or(ExactInf::NAME);
    let mut alg = new_inf_alg(alg_name, fg, &opts)?;

    timer.lap();
    alg.run()?;
    debug!("Inference take: {:.5}s", timer.lap().0);

    println!("{}", alg.identify());
    println!("logZ = {}", alg.log_z());
    beliefs_table(alg.as_ref()).printstd();
    if app_m.is_present("factors") {
        factor_beliefs_table(alg.as_ref())?.printstd();
    }

    Ok(())
}
