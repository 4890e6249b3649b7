use crate::errors::{LoadError, RangeError};
use crate::models::{MeasurementRecord, NutritionPage, NutritionRecord, RangeView, WeightDomain};
use chrono::{Duration, NaiveDate};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_RANGE_DAYS: i64 = 30;
pub const NUTRITION_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;
const DOMAIN_STEP: f64 = 5.0;

/// Loaded sources plus the range view currently on screen.
#[derive(Debug)]
pub struct DashboardState {
    pub measurements: Result<Vec<MeasurementRecord>, LoadError>,
    pub nutrition: Result<Vec<NutritionRecord>, LoadError>,
    pub view: Option<RangeView>,
}

impl DashboardState {
    pub fn new(
        measurements: Result<Vec<MeasurementRecord>, LoadError>,
        nutrition: Result<Vec<NutritionRecord>, LoadError>,
    ) -> Self {
        Self {
            measurements,
            nutrition,
            view: None,
        }
    }

    /// Starts a fresh page: drops whatever an earlier page left on screen and
    /// applies the default window ending `today`.
    pub fn mount(&mut self, today: NaiveDate) -> Result<&RangeView, ApplyRangeError> {
        self.view = None;
        let (start, end) = default_range(today);
        self.apply_range(start, end).inspect_err(|err| info!("default range not applied: {err}"))
    }

    /// Replaces the view on success. On any error the previous view is kept.
    pub fn apply_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<&RangeView, ApplyRangeError> {
        let records = self
            .measurements
            .as_ref()
            .map_err(|err| ApplyRangeError::Source(err.clone()))?;
        let view = filter_range(records, start, end).map_err(ApplyRangeError::Range)?;
        info!(%start, %end, points = view.points.len(), "range applied");
        Ok(&*self.view.insert(view))
    }
}

/// Why a range could not be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyRangeError {
    #[error(transparent)]
    Source(LoadError),
    #[error(transparent)]
    Range(RangeError),
}

pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(DEFAULT_RANGE_DAYS), today)
}

/// Selects records dated within `[start, end]` and computes the rounded
/// weight domain over them. `records` must be sorted by date.
pub fn filter_range(
    records: &[MeasurementRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RangeView, RangeError> {
    if start > end {
        return Err(RangeError::InvalidRange { start, end });
    }

    let lower = records.partition_point(|record| record.date < start);
    let upper = records.partition_point(|record| record.date <= end);
    let points = records[lower..upper].to_vec();
    if points.is_empty() {
        return Err(RangeError::NoDataInRange { start, end });
    }

    Ok(RangeView {
        start,
        end,
        domain: weight_domain(&points),
        points,
    })
}

/// Rounds the min weight down and the max weight up to multiples of 5.
/// `NaN` weights are skipped; `None` when no finite weight is left.
pub fn weight_domain(points: &[MeasurementRecord]) -> Option<WeightDomain> {
    let (min, max) = points
        .iter()
        .map(|point| point.weight)
        .filter(|weight| weight.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), weight| {
            (min.min(weight), max.max(weight))
        });
    if min > max {
        return None;
    }
    Some(WeightDomain {
        floor: (min / DOMAIN_STEP).floor() * DOMAIN_STEP,
        ceiling: (max / DOMAIN_STEP).ceil() * DOMAIN_STEP,
    })
}

/// One page of the nutrition table. Pages are 1-based.
pub fn nutrition_page(records: &[NutritionRecord], page: Option<usize>, per_page: Option<usize>) -> NutritionPage {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(NUTRITION_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let rows = records
        .iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .cloned()
        .collect();

    NutritionPage {
        page,
        per_page,
        total: records.len(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn series() -> Vec<MeasurementRecord> {
        [(1, 81.2), (3, 80.4), (5, 79.0), (8, 78.6), (12, 77.1)]
            .into_iter()
            .map(|(d, weight)| MeasurementRecord { date: day(d), weight })
            .collect()
    }

    #[test]
    fn filter_is_inclusive_on_both_ends() {
        let view = filter_range(&series(), day(3), day(8)).unwrap();
        let dates: Vec<_> = view.points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(3), day(5), day(8)]);
    }

    #[test]
    fn single_day_range_matches_that_day() {
        let view = filter_range(&series(), day(5), day(5)).unwrap();
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].weight, 79.0);
    }

    #[test]
    fn domain_rounds_outward_to_multiples_of_five() {
        let view = filter_range(&series(), day(1), day(31)).unwrap();
        let domain = view.domain.unwrap();
        assert_eq!(domain.floor, 75.0);
        assert_eq!(domain.ceiling, 85.0);
        for point in &view.points {
            assert!(domain.floor <= point.weight && point.weight <= domain.ceiling);
        }
    }

    #[test]
    fn domain_keeps_exact_multiples() {
        let points = vec![
            MeasurementRecord { date: day(1), weight: 80.0 },
            MeasurementRecord { date: day(2), weight: 85.0 },
        ];
        let domain = weight_domain(&points).unwrap();
        assert_eq!((domain.floor, domain.ceiling), (80.0, 85.0));
    }

    #[test]
    fn nan_weights_are_skipped_by_domain() {
        let points = vec![
            MeasurementRecord { date: day(1), weight: f64::NAN },
            MeasurementRecord { date: day(2), weight: 72.0 },
        ];
        let domain = weight_domain(&points).unwrap();
        assert_eq!((domain.floor, domain.ceiling), (70.0, 75.0));

        let only_nan = vec![MeasurementRecord { date: day(1), weight: f64::NAN }];
        assert!(weight_domain(&only_nan).is_none());
    }

    #[test]
    fn reversed_range_is_invalid() {
        let err = filter_range(&series(), day(8), day(3)).unwrap_err();
        assert_eq!(err, RangeError::InvalidRange { start: day(8), end: day(3) });
    }

    #[test]
    fn empty_range_reports_no_data() {
        let err = filter_range(&series(), day(13), day(20)).unwrap_err();
        assert_eq!(err, RangeError::NoDataInRange { start: day(13), end: day(20) });
    }

    #[test]
    fn failed_update_keeps_previous_view() {
        let mut state = DashboardState::new(Ok(series()), Ok(Vec::new()));
        state.apply_range(day(1), day(5)).unwrap();
        let before = state.view.clone();

        let invalid = state.apply_range(day(9), day(2)).unwrap_err();
        assert!(matches!(invalid, ApplyRangeError::Range(RangeError::InvalidRange { .. })));
        assert_eq!(state.view, before);

        let empty = state.apply_range(day(20), day(25)).unwrap_err();
        assert!(matches!(empty, ApplyRangeError::Range(RangeError::NoDataInRange { .. })));
        assert_eq!(state.view, before);
    }

    #[test]
    fn missing_source_blocks_range() {
        let mut state = DashboardState::new(
            Err(LoadError::fetch("measurements", "not found")),
            Ok(Vec::new()),
        );
        let err = state.apply_range(day(1), day(5)).unwrap_err();
        assert!(matches!(err, ApplyRangeError::Source(LoadError::FetchFailure { .. })));
        assert!(state.view.is_none());
    }

    #[test]
    fn filter_matches_brute_force_for_every_window() {
        let records = series();
        for start_day in 1..=14 {
            for end_day in start_day..=14 {
                let (start, end) = (day(start_day), day(end_day));
                let expected: Vec<_> = records
                    .iter()
                    .filter(|record| start <= record.date && record.date <= end)
                    .copied()
                    .collect();
                match filter_range(&records, start, end) {
                    Ok(view) => assert_eq!(view.points, expected, "{start}..={end}"),
                    Err(err) => {
                        assert!(expected.is_empty(), "{start}..={end}");
                        assert_eq!(err, RangeError::NoDataInRange { start, end });
                    }
                }
            }
        }

        let before = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(filter_range(&records, before, after).unwrap().points, records);
        assert!(filter_range(&records, before, day(1) - Duration::days(1)).is_err());
        assert!(filter_range(&records, day(13), after).is_err());
    }

    #[test]
    fn mount_resets_to_default_window() {
        let mut state = DashboardState::new(Ok(series()), Ok(Vec::new()));
        state.mount(day(12)).unwrap();
        state.apply_range(day(1), day(3)).unwrap();

        let view = state.mount(day(12)).unwrap().clone();
        assert_eq!((view.start, view.end), default_range(day(12)));
        assert_eq!(view.points, series());
    }

    #[test]
    fn mount_without_recent_data_clears_view() {
        let mut state = DashboardState::new(Ok(series()), Ok(Vec::new()));
        state.apply_range(day(1), day(5)).unwrap();

        let later = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let err = state.mount(later).unwrap_err();
        assert!(matches!(err, ApplyRangeError::Range(RangeError::NoDataInRange { .. })));
        assert!(state.view.is_none());
    }

    #[test]
    fn default_range_spans_thirty_days() {
        let (start, end) = default_range(day(31));
        assert_eq!(start, day(1));
        assert_eq!(end, day(31));
    }

    #[test]
    fn nutrition_pages_of_ten() {
        let records: Vec<_> = (0..23)
            .map(|i| NutritionRecord {
                meal: format!("meal {i}"),
                ..NutritionRecord::default()
            })
            .collect();

        let first = nutrition_page(&records, None, None);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.rows[0].meal, "meal 0");
        assert_eq!(first.total, 23);

        let last = nutrition_page(&records, Some(3), None);
        assert_eq!(last.rows.len(), 3);
        assert_eq!(last.rows[0].meal, "meal 20");

        let beyond = nutrition_page(&records, Some(9), Some(500));
        assert_eq!(beyond.per_page, 100);
        assert!(beyond.rows.is_empty());
    }
}
