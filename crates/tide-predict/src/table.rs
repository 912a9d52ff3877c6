//! The prediction table returned to callers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Output columns, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    JulianDay,
    CalendarDate,
    Latitude,
    Longitude,
    ShortTide,
    LongPeriodTide,
    PureTide,
    GeoTide,
    RadialTide,
}

impl Column {
    /// All columns in their fixed output order.
    pub const ALL: [Column; 9] = [
        Column::JulianDay,
        Column::CalendarDate,
        Column::Latitude,
        Column::Longitude,
        Column::ShortTide,
        Column::LongPeriodTide,
        Column::PureTide,
        Column::GeoTide,
        Column::RadialTide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::JulianDay => "julian_day",
            Column::CalendarDate => "calendar_date",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::ShortTide => "short_tide",
            Column::LongPeriodTide => "long_period_tide",
            Column::PureTide => "pure_tide",
            Column::GeoTide => "geo_tide",
            Column::RadialTide => "radial_tide",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One hourly prediction.
///
/// Field order matches [`Column::ALL`]. `hour_of_day` is kept for callers
/// but is not an output column.
///
/// Serialization is export only: non-finite tide values are written as
/// JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    /// Whole days since 1950-01-01 (CNES julian day, truncated).
    pub julian_day: i64,
    pub calendar_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub short_tide: f64,
    pub long_period_tide: f64,
    /// short_tide + long_period_tide
    pub pure_tide: f64,
    /// short_tide + long_period_tide + radial_tide
    pub geo_tide: f64,
    pub radial_tide: f64,
    #[serde(skip)]
    pub hour_of_day: f64,
}

impl PredictionRow {
    /// Numeric value of a column. `None` for the calendar date.
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::JulianDay => Some(self.julian_day as f64),
            Column::CalendarDate => None,
            Column::Latitude => Some(self.latitude),
            Column::Longitude => Some(self.longitude),
            Column::ShortTide => Some(self.short_tide),
            Column::LongPeriodTide => Some(self.long_period_tide),
            Column::PureTide => Some(self.pure_tide),
            Column::GeoTide => Some(self.geo_tide),
            Column::RadialTide => Some(self.radial_tide),
        }
    }

    fn cell(&self, column: Column) -> String {
        match column {
            Column::JulianDay => self.julian_day.to_string(),
            Column::CalendarDate => self.calendar_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            other => self.value(other).map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

/// Hourly predictions in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionTable {
    rows: Vec<PredictionRow>,
}

impl PredictionTable {
    pub fn new(rows: Vec<PredictionRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<PredictionRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionRow> {
        self.rows.iter()
    }

    pub fn first(&self) -> Option<&PredictionRow> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&PredictionRow> {
        self.rows.last()
    }

    /// Column names in output order.
    pub fn column_names() -> Vec<&'static str> {
        Column::ALL.iter().map(Column::name).collect()
    }

    /// All values of a numeric column. `None` for the calendar date.
    pub fn numeric_column(&self, column: Column) -> Option<Vec<f64>> {
        if column == Column::CalendarDate {
            return None;
        }
        Some(self.rows.iter().filter_map(|r| r.value(column)).collect())
    }

    /// Serialize the rows as a JSON array of objects, keys in column order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Pretty-printed variant of [`PredictionTable::to_json`].
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a PredictionTable {
    type Item = &'a PredictionRow;
    type IntoIter = std::slice::Iter<'a, PredictionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Plain-text rendering with centered headers and right-aligned cells.
impl fmt::Display for PredictionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| Column::ALL.iter().map(|&c| row.cell(c)).collect())
            .collect();

        let widths: Vec<usize> = Column::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| {
                cells
                    .iter()
                    .map(|r| r[i].len())
                    .chain(std::iter::once(c.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:^w$}", c.name()))
            .collect();
        writeln!(f, "{}", header.join("  "))?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>w$}", cell))
                .collect();
            writeln!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
