//! Segment the repeated zigzag series with both methods.
//!
//! Run with `RUST_LOG=debug cargo run --example zigzag` to see the search.

use anofox_trend::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let x: Vec<f64> = (1..=22).map(|i| i as f64).collect();
    let y = vec![
        1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
        1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
    ];

    let series = build(&x, &y)?;
    for sample in series.samples() {
        println!("{sample}");
    }
    println!(
        "extrema={} x_range={} y_range={}",
        series.extremum_count(),
        series.x_range(),
        series.y_range()
    );

    for method in [Method::Correlation, Method::Distance] {
        let result = fit(&series, method, &ThresholdConfig::default())?;
        println!(
            "\n{method:?}: threshold={} trials={}",
            result.threshold, result.trials
        );
        for seg in &result.segments {
            println!(
                "  [{}, {}] slope={:.3} intercept={:.3}{}",
                seg.start_x,
                seg.end_x,
                seg.slope,
                seg.intercept,
                seg.quality
                    .map(|q| format!(" ssr={q:.1}"))
                    .unwrap_or_default()
            );
        }
    }

    Ok(())
}
