use simpaths::SimPaths;
use std::io::Write;

fn write_csv(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let fname = dir.join(name);
    let mut file = std::fs::File::create(&fname).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    fname
}

// 2 paths of 4 observations each, so 3 time periods plus time zero
const TWO_PATHS: &str = "100.0,101.2,100.7,102.3\n100.0,98.9,99.4,97.8\n";

#[test]
fn plot_two_paths_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let csvin = write_csv(dir.path(), "sim_test.csv", TWO_PATHS);
    let pngout = dir.path().join("plot_test.png");
    let sp = SimPaths::from_csv(csvin).unwrap();
    assert_eq!(sp.paths.len(), 2);
    sp.plot_paths(pngout.clone(), 3, 2).unwrap();
    assert!(std::fs::metadata(&pngout).unwrap().len() > 0);
}

#[test]
fn rerun_overwrites_the_plot() {
    let dir = tempfile::tempdir().unwrap();
    let csvin = write_csv(dir.path(), "sim_test.csv", TWO_PATHS);
    let pngout = dir.path().join("plot_test.png");
    let sp = SimPaths::from_csv(csvin).unwrap();
    sp.plot_paths(pngout.clone(), 3, 2).unwrap();
    let first = std::fs::metadata(&pngout).unwrap().len();
    sp.plot_paths(pngout.clone(), 3, 2).unwrap();
    let second = std::fs::metadata(&pngout).unwrap().len();
    assert!(first > 0);
    assert_eq!(first, second);
}

#[test]
fn simulations_equal_to_row_count_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let csvin = write_csv(dir.path(), "sim_test.csv", TWO_PATHS);
    let pngout = dir.path().join("plot_test.png");
    let sp = SimPaths::from_csv(csvin).unwrap();
    sp.plot_paths(pngout, 3, 2).unwrap();
}

#[test]
fn more_simulations_than_rows_fail() {
    let dir = tempfile::tempdir().unwrap();
    let csvin = write_csv(dir.path(), "sim_test.csv", TWO_PATHS);
    let pngout = dir.path().join("plot_test.png");
    let sp = SimPaths::from_csv(csvin).unwrap();
    let err = sp.plot_paths(pngout.clone(), 3, 3).unwrap_err();
    assert!(err.to_string().contains("2 rows"));
    assert!(!pngout.exists());
}

#[test]
fn inconsistent_time_periods_fail() {
    let dir = tempfile::tempdir().unwrap();
    let csvin = write_csv(dir.path(), "sim_test.csv", TWO_PATHS);
    let pngout = dir.path().join("plot_test.png");
    let sp = SimPaths::from_csv(csvin).unwrap();
    assert!(sp.plot_paths(pngout, 5, 2).is_err());
}
