use plotters::prelude::*;
use std::path::PathBuf;
pub mod plot;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// The main struct for the simulated price paths,
/// one path per csv row, one column per time period.
#[derive(Debug, Clone)]
pub struct SimPaths {
    pub paths: Vec<Vec<f64>>,
}

impl SimPaths {
    pub fn new(capacity: usize) -> SimPaths {
        let paths: Vec<Vec<f64>> = Vec::with_capacity(capacity);
        let simpaths: SimPaths = SimPaths { paths };
        simpaths
    }

    /// Init a SimPaths from a headerless csv, all fields numeric.
    /// Rows may have different lengths here;
    /// the shape is checked against the cli arguments separately.
    pub fn from_csv(fin: PathBuf) -> Result<SimPaths, Box<dyn std::error::Error>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&fin)?;
        let mut simpaths = SimPaths::new(100);
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let mut path: Vec<f64> = Vec::with_capacity(record.len());
            for (j, field) in record.iter().enumerate() {
                let value: f64 = field.trim().parse().map_err(|e| {
                    format!("could not parse row {} column {} ({:?}): {}", i, j, field, e)
                })?;
                path.push(value);
            }
            simpaths.paths.push(path);
        }
        Ok(simpaths)
    }

    /// checks that there are enough rows for the requested simulations
    /// and that each plotted row has time zero plus num_time_periods steps
    pub fn check_shape(
        &self,
        num_time_periods: usize,
        num_simulations: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.paths.len() < num_simulations {
            return Err(format!(
                "requested {} simulations but the csv has {} rows",
                num_simulations,
                self.paths.len()
            )
            .into());
        }
        for (i, path) in self.paths[..num_simulations].iter().enumerate() {
            if path.len() != num_time_periods + 1 {
                return Err(format!(
                    "row {} has {} values, expected {} for {} time periods",
                    i,
                    path.len(),
                    num_time_periods + 1,
                    num_time_periods
                )
                .into());
            }
        }
        Ok(())
    }

    /// plots the first num_simulations paths to png,
    /// all on the shared x axis 0..=num_time_periods
    pub fn plot_paths(
        &self,
        fout: PathBuf,
        num_time_periods: usize,
        num_simulations: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.check_shape(num_time_periods, num_simulations)?;
        let values: Vec<f64> = self.paths[..num_simulations]
            .iter()
            .flatten()
            .copied()
            .collect();
        let (ymin, ymax) = min_and_max(&values[..]);
        let yspan = (ymax - ymin) / 10f64;
        // keep a visible band when all paths are flat
        let (ymin, ymax) = if yspan == 0. {
            (ymin - 1., ymax + 1.)
        } else {
            (ymin - yspan, ymax + yspan)
        };
        let xmax = num_time_periods as i32;
        let root = BitMapBackend::new(&fout, (1600, 800)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Plot", ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(0..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_desc("Time Periods")
            .y_desc("Underlying Price")
            .y_label_formatter(&|y: &f64| format!("{:5}", y))
            .draw()?;
        for (i, path) in self.paths[..num_simulations].iter().enumerate() {
            let line = LineSeries::new(
                path.iter().enumerate().map(|(x, y)| (x as i32, *y)),
                Palette99::pick(i).stroke_width(2),
            );
            chart.draw_series(line)?;
        }
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for SimPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for path in self.paths.iter() {
            let row: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            write!(f, "{}\n", row.join(","))?
        }
        Ok(())
    }
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
