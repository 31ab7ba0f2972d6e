use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the simulated price paths.
/// The id templates both the input and output paths:
/// ./simulations/sim_<id>.csv and ./plots/plot_<id>.png
pub fn parse_cli() -> (usize, usize, PathBuf, PathBuf) {
    let arg_periods = Arg::with_name("num_time_periods")
        .help("number of time periods in each simulation path, > 0")
        .required(true)
        .index(1);
    let arg_simulations = Arg::with_name("num_simulations")
        .help("number of simulation paths to plot, > 0")
        .required(true)
        .index(2);
    let arg_id = Arg::with_name("id")
        .help("identifier for the input and output file names")
        .required(true)
        .index(3);
    let cli_args = App::new("Simpaths_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the simulated price paths")
        .arg(arg_periods)
        .arg(arg_simulations)
        .arg(arg_id)
        .get_matches();
    let num_time_periods = cli_args
        .value_of("num_time_periods")
        .unwrap()
        .parse::<usize>()
        .unwrap();
    let num_simulations = cli_args
        .value_of("num_simulations")
        .unwrap()
        .parse::<usize>()
        .unwrap();
    assert!(num_time_periods > 0, "num_time_periods must be > 0");
    assert!(num_simulations > 0, "num_simulations must be > 0");
    let id = cli_args.value_of("id").unwrap();
    let csvin = PathBuf::from(format!("./simulations/sim_{}.csv", id));
    let pngout = PathBuf::from(format!("./plots/plot_{}.png", id));
    return (num_time_periods, num_simulations, csvin, pngout);
}
