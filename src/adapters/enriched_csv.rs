//! CSV export of the bar series with its indicator columns.
//!
//! Undefined indicator entries are written as empty fields, never as zero.

use crate::domain::bar_series::BarSeries;
use crate::domain::error::TrendscopeError;
use crate::domain::indicator_frame::IndicatorFrame;
use std::io;

pub fn write_enriched_csv<W: io::Write>(
    writer: W,
    series: &BarSeries,
    frame: &IndicatorFrame,
) -> Result<(), TrendscopeError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = ["date", "open", "high", "low", "close", "volume"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend(frame.keys().map(|k| k.to_string()));
    wtr.write_record(&header).map_err(io::Error::from)?;

    for (i, bar) in series.bars().iter().enumerate() {
        let mut record = vec![
            bar.date.format("%Y-%m-%d").to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
        ];
        record.extend(
            frame
                .series()
                .iter()
                .map(|s| s.value_at(i).map(|v| format!("{:.6}", v)).unwrap_or_default()),
        );
        wtr.write_record(&record).map_err(io::Error::from)?;
    }

    wtr.flush()?;
    Ok(())
}
