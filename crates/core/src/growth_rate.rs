use crate::error::{Result, SummaryError};
use crate::fields::{GROWTH_RATE, GROWTH_TIME, THICKNESS};
use crate::record::Record;
use growthsum_sheet::CellValue;
use serde::Serialize;
use tracing::debug;

/// What [`fill_growth_rate`] did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRateOutcome {
    /// Thickness / Growth Time, now stored in the Growth Rate field.
    Computed(f64),
    /// One of the inputs was not a digit string; Growth Rate is unchanged.
    Skipped,
}

/// True for a non-empty string made only of ASCII digits.
///
/// Signs and decimal points are rejected, so `"1.5"` and `"-3"` do not count.
pub fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn field_text(record: &Record, name: &str) -> Result<String> {
    record
        .get(name)
        .map(CellValue::as_str)
        .ok_or_else(|| SummaryError::MissingField {
            name: name.to_string(),
        })
}

fn parse_digits(field: &str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| SummaryError::MalformedNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Set Growth Rate to Thickness / Growth Time when both are digit strings.
///
/// The record must already carry a Growth Rate field (normally the
/// placeholder). A zero Growth Time is an error rather than an infinite rate.
pub fn fill_growth_rate(record: &mut Record) -> Result<GrowthRateOutcome> {
    let thickness = field_text(record, THICKNESS)?;
    let growth_time = field_text(record, GROWTH_TIME)?;
    if record.get(GROWTH_RATE).is_none() {
        return Err(SummaryError::MissingField {
            name: GROWTH_RATE.to_string(),
        });
    }

    if !(is_digit_string(&thickness) && is_digit_string(&growth_time)) {
        debug!(%thickness, %growth_time, "growth rate inputs not numeric, keeping placeholder");
        return Ok(GrowthRateOutcome::Skipped);
    }

    if growth_time.bytes().all(|b| b == b'0') {
        return Err(SummaryError::ZeroGrowthTime { thickness });
    }
    let t = parse_digits(THICKNESS, &thickness)?;
    let g = parse_digits(GROWTH_TIME, &growth_time)?;

    let rate = t / g;
    record.set(GROWTH_RATE, rate)?;
    debug!(rate, "growth rate derived");
    Ok(GrowthRateOutcome::Computed(rate))
}
