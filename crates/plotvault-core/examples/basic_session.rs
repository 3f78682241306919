//! Save a histogram-style plot into a versioned container, the way a
//! plotting script would at the end of a run.

use plotvault_core::{Plot, PlotWriter, Series};

fn main() -> Result<(), plotvault_core::WriterError> {
    let mut pv = PlotWriter::open("_plots.db")?;

    let values: Vec<f64> = (1..=10).map(|bin| f64::from(11 - bin)).collect();
    let h1 = Plot::new("h1", "Falling counts")
        .with_labels("bin", "entries")
        .with_series(Series::from_values("h1", &values));
    pv.save(&h1)?;

    pv.tag("yeah, a tag (-:")?;
    pv.comment("with tags!")?;

    println!("saved under {}", pv.namespace_key());
    pv.close()
}
