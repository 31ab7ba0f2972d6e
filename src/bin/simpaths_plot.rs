use simpaths::plot::parse_cli;
use simpaths::SimPaths;

fn main() {
    let (num_time_periods, num_simulations, csvin, pngout) = parse_cli();
    println!(
        "read data from {} and plot to {}",
        csvin.to_str().unwrap(),
        pngout.to_str().unwrap()
    );
    let sp = SimPaths::from_csv(csvin).unwrap();
    if let Some(dir) = pngout.parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    sp.plot_paths(pngout, num_time_periods, num_simulations)
        .unwrap();
}
