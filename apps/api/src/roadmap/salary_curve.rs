//! Salary Curve: piecewise-linear salary lookup over experience anchor points.
//!
//! Inside the anchored range the curve interpolates linearly. Outside it, the
//! nearest end point is extended by a flat `ANNUAL_INCREMENT` per year.

use tracing::debug;

use crate::errors::RoadmapError;
use crate::models::roadmap::SalaryAnchorPoint;

/// Salary gained (or lost) per year of experience outside the anchored range.
pub const ANNUAL_INCREMENT: f64 = 10_000.0;

/// Base of the fallback formula used when no curve is available.
pub const FALLBACK_BASE_SALARY: f64 = 70_000.0;

/// Anchor years closer than this count as the same point.
const YEARS_TOLERANCE: f64 = 1e-9;

/// Beyond this distance the differential no longer bends the curve.
const DIFFERENTIAL_DECAY_YEARS: f64 = 10.0;

/// Looks up the salary at `years` of experience.
///
/// Exact anchor → its salary unchanged. Between anchors → rounded linear
/// interpolation. Outside the range → extrapolated from the nearest end.
/// Anchor order does not matter; the bracketing points are found by scan.
pub fn query(points: &[SalaryAnchorPoint], years: f64) -> Result<f64, RoadmapError> {
    if points.is_empty() {
        return Err(RoadmapError::EmptyCurve);
    }

    if let Some(exact) = points
        .iter()
        .find(|p| (p.years_experience - years).abs() <= YEARS_TOLERANCE)
    {
        return Ok(exact.salary);
    }

    let mut lower: Option<&SalaryAnchorPoint> = None;
    let mut upper: Option<&SalaryAnchorPoint> = None;

    for point in points {
        if point.years_experience < years
            && lower.map_or(true, |l| point.years_experience > l.years_experience)
        {
            lower = Some(point);
        }
        if point.years_experience > years
            && upper.map_or(true, |u| point.years_experience < u.years_experience)
        {
            upper = Some(point);
        }
    }

    let salary = match (lower, upper) {
        (Some(lo), Some(hi)) => {
            let ratio = (years - lo.years_experience) / (hi.years_experience - lo.years_experience);
            lo.salary + (hi.salary - lo.salary) * ratio
        }
        // Above every anchor
        (Some(highest), None) => highest.salary + (years - highest.years_experience) * ANNUAL_INCREMENT,
        // Below every anchor. Not floored: extreme inputs can go negative.
        (None, Some(lowest)) => lowest.salary - (lowest.years_experience - years) * ANNUAL_INCREMENT,
        // Only reachable with a NaN query
        (None, None) => return Err(RoadmapError::EmptyCurve),
    };

    Ok(salary.round())
}

/// Default formula used when there is no curve data at all.
pub fn fallback_salary(years: f64) -> f64 {
    FALLBACK_BASE_SALARY + years * ANNUAL_INCREMENT
}

/// `query`, substituting the fallback formula for an empty curve.
pub fn estimate_salary(points: &[SalaryAnchorPoint], years: f64) -> f64 {
    query(points, years).unwrap_or_else(|_| fallback_salary(years))
}

/// Finds the anchor nearest to `years`, provided it lies strictly within one year.
/// Ties go to the earlier point.
pub fn nearest_anchor(points: &[SalaryAnchorPoint], years: f64) -> Option<&SalaryAnchorPoint> {
    points
        .iter()
        .filter(|p| (p.years_experience - years).abs() < 1.0)
        .min_by(|a, b| {
            let da = (a.years_experience - years).abs();
            let db = (b.years_experience - years).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Bends the curve towards a user's actual salary.
///
/// `diff_ratio = (actual - anchor) / anchor`, taken at the nearest anchor within a year
/// of `user_years`. Every point at or beyond `user_years` is scaled by
/// `1 + diff_ratio * max(0, 1 - distance / 10)`, so the effect fades out over a decade.
///
/// Returns `false` (and leaves `points` untouched) when no anchor is close enough.
pub fn apply_salary_differential(
    points: &mut [SalaryAnchorPoint],
    user_years: f64,
    actual_salary: f64,
) -> bool {
    let Some(anchor) = nearest_anchor(points, user_years).copied() else {
        debug!(user_years, "no anchor within a year; salary differential skipped");
        return false;
    };
    if anchor.salary <= 0.0 {
        return false;
    }

    let diff_ratio = (actual_salary - anchor.salary) / anchor.salary;
    debug!(
        user_years,
        anchor_years = anchor.years_experience,
        diff_ratio,
        "applying salary differential"
    );

    for point in points
        .iter_mut()
        .filter(|p| p.years_experience >= user_years)
    {
        let distance = point.years_experience - user_years;
        let factor = (1.0 - distance / DIFFERENTIAL_DECAY_YEARS).max(0.0);
        point.salary = (point.salary * (1.0 + diff_ratio * factor)).round();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[(f64, f64)]) -> Vec<SalaryAnchorPoint> {
        points
            .iter()
            .map(|&(years_experience, salary)| SalaryAnchorPoint {
                years_experience,
                salary,
            })
            .collect()
    }

    fn three_point() -> Vec<SalaryAnchorPoint> {
        curve(&[(0.0, 60_000.0), (5.0, 110_000.0), (10.0, 160_000.0)])
    }

    #[test]
    fn test_exact_anchor_returned_unchanged() {
        assert_eq!(query(&three_point(), 5.0).unwrap(), 110_000.0);
    }

    #[test]
    fn test_interpolates_between_anchors() {
        assert_eq!(query(&three_point(), 2.5).unwrap(), 85_000.0);
    }

    #[test]
    fn test_interpolation_rounds_to_whole_units() {
        let points = curve(&[(0.0, 60_000.0), (3.0, 70_000.0)]);
        // 60000 + 10000/3 = 63333.33…
        assert_eq!(query(&points, 1.0).unwrap(), 63_333.0);
    }

    #[test]
    fn test_extrapolates_above_range() {
        assert_eq!(query(&three_point(), 12.0).unwrap(), 180_000.0);
    }

    #[test]
    fn test_extrapolates_below_range_without_floor() {
        let points = curve(&[(2.0, 80_000.0), (5.0, 110_000.0)]);
        assert_eq!(query(&points, 0.5).unwrap(), 65_000.0);

        let cheap = curve(&[(20.0, 50_000.0)]);
        assert!(query(&cheap, 0.0).unwrap() < 0.0);
    }

    #[test]
    fn test_unsorted_anchors_still_bracket_correctly() {
        let points = curve(&[(10.0, 160_000.0), (0.0, 60_000.0), (5.0, 110_000.0)]);
        assert_eq!(query(&points, 7.5).unwrap(), 135_000.0);
    }

    #[test]
    fn test_empty_curve_is_an_error() {
        assert_eq!(query(&[], 3.0), Err(RoadmapError::EmptyCurve));
    }

    #[test]
    fn test_estimate_falls_back_to_default_formula() {
        assert_eq!(estimate_salary(&[], 3.0), 100_000.0);
        assert_eq!(estimate_salary(&three_point(), 2.5), 85_000.0);
    }

    #[test]
    fn test_interpolation_stays_between_neighbours() {
        let points = curve(&[
            (0.0, 60_000.0),
            (1.0, 70_000.0),
            (3.0, 90_000.0),
            (5.0, 110_000.0),
            (7.0, 130_000.0),
            (10.0, 160_000.0),
        ]);
        for window in points.windows(2) {
            let (lo, hi) = (window[0], window[1]);
            for step in 1..10 {
                let years = lo.years_experience
                    + (hi.years_experience - lo.years_experience) * step as f64 / 10.0;
                let salary = query(&points, years).unwrap();
                assert!(
                    salary >= lo.salary && salary <= hi.salary,
                    "{salary} outside [{}, {}] at {years}",
                    lo.salary,
                    hi.salary
                );
            }
        }
    }

    #[test]
    fn test_nearest_anchor_requires_strictly_under_one_year() {
        let points = curve(&[(3.0, 90_000.0), (5.0, 110_000.0)]);
        assert!(nearest_anchor(&points, 4.0).is_none());
        assert_eq!(nearest_anchor(&points, 4.5).unwrap().years_experience, 5.0);
    }

    #[test]
    fn test_nearest_anchor_tie_prefers_earlier_point() {
        let points = curve(&[(1.0, 70_000.0), (2.0, 80_000.0)]);
        assert_eq!(nearest_anchor(&points, 1.5).unwrap().years_experience, 1.0);
    }

    #[test]
    fn test_differential_decays_over_a_decade() {
        let mut points = curve(&[
            (2.0, 80_000.0),
            (3.0, 90_000.0),
            (8.0, 140_000.0),
            (13.0, 190_000.0),
            (20.0, 260_000.0),
        ]);
        // 10% above the curve at 3 years
        assert!(apply_salary_differential(&mut points, 3.0, 99_000.0));

        assert_eq!(points[0].salary, 80_000.0, "past points untouched");
        assert_eq!(points[1].salary, 99_000.0, "full effect at current experience");
        assert_eq!(points[2].salary, 147_000.0, "half effect five years out");
        assert_eq!(points[3].salary, 190_000.0, "no effect ten years out");
        assert_eq!(points[4].salary, 260_000.0, "never reversed beyond ten years");
    }

    #[test]
    fn test_salary_below_curve_lowers_future_points() {
        let mut points = curve(&[
            (2.0, 80_000.0),
            (3.0, 90_000.0),
            (8.0, 140_000.0),
            (13.0, 190_000.0),
        ]);
        // 10% below the curve at 3 years
        assert!(apply_salary_differential(&mut points, 3.0, 81_000.0));

        assert_eq!(points[0].salary, 80_000.0);
        assert_eq!(points[1].salary, 81_000.0);
        assert_eq!(points[2].salary, 133_000.0);
        assert_eq!(points[3].salary, 190_000.0);
    }

    #[test]
    fn test_differential_skipped_without_close_anchor() {
        let mut points = curve(&[(0.0, 60_000.0), (5.0, 110_000.0)]);
        let before = points.clone();
        assert!(!apply_salary_differential(&mut points, 2.5, 200_000.0));
        assert_eq!(points, before);
    }
}
