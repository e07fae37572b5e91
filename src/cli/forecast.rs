use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::open_ledger;
use crate::error::Result;
use crate::fmt::money;
use crate::forecast::{Forecast, ForecastRunner, Trend, HORIZON_LABELS};
use crate::metrics;

pub fn run() -> Result<()> {
    let ledger = open_ledger();
    let snapshot = ledger.snapshot();
    let series = metrics::forecast_series(&snapshot);
    let last_observed = series.last().copied();

    let mut runner = ForecastRunner::new();
    runner.start(series);

    // Loading state while the fit runs in the background.
    let spinner = ['|', '/', '-', '\\'];
    let mut tick = 0;
    let result = loop {
        if let Some(forecast) = runner.poll() {
            break forecast;
        }
        print!("\rFitting model {}", spinner[tick % spinner.len()]);
        std::io::stdout().flush()?;
        tick += 1;
        std::thread::sleep(Duration::from_millis(50));
    };
    print!("\r                \r");

    let fitted = match result {
        Forecast::Insufficient => {
            println!("Add at least two investments to see predictions.");
            return Ok(());
        }
        Forecast::Fitted(f) => f,
    };

    let mut table = Table::new();
    table.set_header(vec!["Horizon", "Projected value"]);
    for (label, point) in HORIZON_LABELS.iter().zip(fitted.points.iter()) {
        table.add_row(vec![Cell::new(label), Cell::new(money(*point))]);
    }
    println!("Portfolio forecast\n{table}");

    let trend = match fitted.trend {
        Trend::Up => "trending up".green(),
        Trend::Down => "trending down".red(),
    };
    println!("Your portfolio is {trend} (confidence {}%).", fitted.confidence);
    if let Some(last) = last_observed {
        println!("Last observed value: {}", money(last));
    }
    Ok(())
}
