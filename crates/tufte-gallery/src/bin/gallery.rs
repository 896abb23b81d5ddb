// File: crates/tufte-gallery/src/bin/gallery.rs
// Summary: Renders one PNG per graph variant into target/out/.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tufte_core::{Graph, Series, StepWhere, ValueLabels};

fn main() -> Result<()> {
    let _ = tufte_core::init_default_tracing();
    let out_dir = PathBuf::from("target/out");

    let years = ["2019", "2020", "2021", "2022", "2023"];
    let revenue = vec![4.2, 3.1, 5.6, 6.3, 7.9];

    let mut vbar = Graph::vertical_bar();
    vbar.add(Series::categorical(years, revenue.clone()))?;
    vbar.title("Revenue by year");
    vbar.show_values(ValueLabels::default())?;
    vbar.rotate_xlabels(0.8);

    let mut hbar = Graph::horizontal_bar();
    hbar.add(Series::categorical(["north", "east", "south", "west"], vec![12.0, 7.5, 9.25, 3.0]))?;
    hbar.title("Units by region");
    hbar.show_values(ValueLabels { precision: 2, ..ValueLabels::default() })?;

    // two overlaid series share one set of limited spines
    let mut line = Graph::line();
    line.add(Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], revenue.clone()))?;
    line.add(Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 2.4, 3.9, 4.1, 5.2]))?;
    line.title("Revenue and cost").x_label("quarter").y_label("millions");
    line.limit_spines()?;

    let mut scatter = Graph::scatter();
    let xs: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 1.3).sin() * 3.0 + x * 0.8).collect();
    scatter.add(Series::new(xs, ys))?;
    scatter.title("Scatter with limited spines");
    scatter.limit_spines()?;

    let mut step = Graph::step(StepWhere::Post);
    step.add(Series::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, 1.0, 3.0, 2.0, 4.0, 4.5]))?;
    step.title("Step (post)");
    step.limit_spines()?;

    for (name, graph) in [("vbar", vbar), ("hbar", hbar), ("line", line), ("scatter", scatter), ("step", step)] {
        let out = out_dir.join(format!("gallery_{name}.png"));
        graph.save(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}
