//! Turns the fetched row sets into baseline-relative chart points and a summary.

use crate::types::asset_risk::{AssetRiskData, ChartPoint, Statement};
use crate::types::monthly_record::MonthlyRecord;
use crate::utils::format_fixed;

/// Divisor for the annual means. Fixed, not the number of rows present.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Computes the chart data and summary for one historical/projected pair.
///
/// The annual means are the sum of the monthly `avg` values divided by 12,
/// whatever the number of rows; missing values are skipped. Each historical
/// month becomes a [`ChartPoint`] whose values are deviations from the
/// historical baseline, with a ±1σ band and the projected deviation for the
/// same month, if the projection has that month.
///
/// # Examples
///
/// ```
/// use climate_risk::{transform, MonthlyRecord, Statement};
///
/// let historical: Vec<_> = (1..=12).map(|m| MonthlyRecord::historical(m, 10.0, 2.0)).collect();
/// let projected: Vec<_> = (1..=12).map(|m| MonthlyRecord::projected(m, 12.0, 30)).collect();
///
/// let data = transform(&historical, &projected);
/// assert_eq!(data.annual_avg_temp, 10.0);
/// assert_eq!(data.statement, Statement::Warmer);
/// assert_eq!(data.temp_change, "2.0");
/// ```
pub fn transform(historical_data: &[MonthlyRecord], rcp_data: &[MonthlyRecord]) -> AssetRiskData {
    let annual_avg_temp = annual_average(historical_data);
    let annual_avg_future_temp = annual_average(rcp_data);

    let chart_data = historical_data
        .iter()
        .map(|d| chart_point(d, rcp_data, annual_avg_temp))
        .collect();

    // Sign of the projected mean, not its difference from the baseline.
    let statement = if annual_avg_future_temp > 0.0 {
        Statement::Warmer
    } else {
        Statement::Colder
    };

    AssetRiskData {
        chart_data,
        annual_avg_temp,
        annual_avg_future_temp,
        statement,
        temp_change: format_fixed(annual_avg_future_temp - annual_avg_temp, 1),
    }
}

fn annual_average(rows: &[MonthlyRecord]) -> f64 {
    rows.iter().filter_map(|r| r.avg).sum::<f64>() / MONTHS_PER_YEAR
}

fn chart_point(d: &MonthlyRecord, rcp_data: &[MonthlyRecord], baseline: f64) -> ChartPoint {
    let avg = d.avg.map(|a| a - baseline);
    let band = |sign: f64| avg.zip(d.stddev).map(|(a, s)| a + sign * s);
    let rcp = rcp_data
        .iter()
        .find(|r| r.month == d.month)
        .and_then(|r| r.avg)
        .map(|a| a - baseline);

    ChartPoint {
        month: d.month,
        avg,
        stddev: d.stddev,
        count: d.count,
        lower_stddev: band(-1.0),
        upper_stddev: band(1.0),
        rcp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_history(avg: f64, stddev: f64) -> Vec<MonthlyRecord> {
        (1..=12)
            .map(|m| MonthlyRecord::historical(m, avg, stddev))
            .collect()
    }

    #[test]
    fn baseline_of_flat_history() {
        let data = transform(&flat_history(10.0, 2.0), &[]);
        assert_eq!(data.annual_avg_temp, 10.0);
        assert_eq!(data.chart_data.len(), 12);
        assert!(data.chart_data.iter().all(|p| p.avg == Some(0.0)));
    }

    #[test]
    fn future_average_divides_by_twelve_regardless_of_row_count() {
        let three_rows = vec![
            MonthlyRecord::projected(1, 8.0, 10),
            MonthlyRecord::projected(2, 8.0, 10),
            MonthlyRecord::projected(3, 8.0, 10),
        ];
        assert_eq!(transform(&[], &three_rows).annual_avg_future_temp, 2.0);

        let one_row = vec![MonthlyRecord::projected(6, 24.0, 10)];
        assert_eq!(transform(&[], &one_row).annual_avg_future_temp, 2.0);
    }

    #[test]
    fn statement_follows_sign_of_projected_mean() {
        let warm = vec![MonthlyRecord::projected(1, 24.0, 1)];
        assert_eq!(transform(&[], &warm).statement, Statement::Warmer);

        let cold = vec![MonthlyRecord::projected(1, -12.0, 1)];
        let data = transform(&[], &cold);
        assert_eq!(data.annual_avg_future_temp, -1.0);
        assert_eq!(data.statement, Statement::Colder);
    }

    #[test]
    fn statement_ignores_baseline() {
        // Projection is cooler than history but still above zero.
        let data = transform(&flat_history(10.0, 1.0), &[MonthlyRecord::projected(1, 60.0, 1)]);
        assert_eq!(data.annual_avg_future_temp, 5.0);
        assert_eq!(data.statement, Statement::Warmer);
        assert_eq!(data.temp_change, "-5.0");
    }

    #[test]
    fn zero_projection_is_colder() {
        assert_eq!(transform(&[], &[]).statement, Statement::Colder);
    }

    #[test]
    fn temp_change_is_one_decimal_difference() {
        let projected: Vec<_> = (1..=12)
            .map(|m| MonthlyRecord::projected(m, 12.0, 30))
            .collect();
        let data = transform(&flat_history(10.0, 2.0), &projected);
        assert_eq!(data.annual_avg_temp, 10.0);
        assert_eq!(data.annual_avg_future_temp, 12.0);
        assert_eq!(data.temp_change, "2.0");
    }

    #[test]
    fn temp_change_rounds_quarter_degree_ties_up() {
        // 123 / 12 = 10.25, exactly a quarter degree above the baseline.
        let projected = vec![MonthlyRecord::projected(1, 123.0, 30)];
        let data = transform(&flat_history(10.0, 2.0), &projected);
        assert_eq!(data.annual_avg_future_temp - data.annual_avg_temp, 0.25);
        assert_eq!(data.temp_change, "0.3");

        // 117 / 12 = 9.75, a quarter degree below.
        let projected = vec![MonthlyRecord::projected(1, 117.0, 30)];
        assert_eq!(transform(&flat_history(10.0, 2.0), &projected).temp_change, "-0.3");
    }

    #[test]
    fn rcp_matches_by_month_and_is_none_when_missing() {
        let historical = flat_history(10.0, 2.0);
        let projected = vec![MonthlyRecord::projected(3, 13.0, 30)];
        let data = transform(&historical, &projected);

        let march = &data.chart_data[2];
        assert_eq!(march.month, 3);
        assert_eq!(march.rcp, Some(3.0));

        let april = &data.chart_data[3];
        assert_eq!(april.month, 4);
        assert_eq!(april.rcp, None);
    }

    #[test]
    fn first_matching_projection_wins() {
        let historical = vec![MonthlyRecord::historical(5, 12.0, 1.0)];
        let projected = vec![
            MonthlyRecord::projected(5, 13.0, 30),
            MonthlyRecord::projected(5, 99.0, 30),
        ];
        let data = transform(&historical, &projected);
        assert_eq!(data.chart_data[0].rcp, Some(13.0 - 1.0));
    }

    #[test]
    fn band_is_symmetric_around_deviation() {
        let historical: Vec<_> = (1..=12)
            .map(|m| MonthlyRecord::historical(m, m as f64 * 1.5, 0.25 * m as f64))
            .collect();
        let data = transform(&historical, &[]);
        for (point, row) in data.chart_data.iter().zip(&historical) {
            let avg = point.avg.unwrap();
            let stddev = row.stddev.unwrap();
            let upper = point.upper_stddev.unwrap();
            let lower = point.lower_stddev.unwrap();
            assert!((upper - avg - stddev).abs() < 1e-12);
            assert!((avg - lower - stddev).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_history_does_not_fail() {
        let data = transform(&[], &[MonthlyRecord::projected(1, 12.0, 1)]);
        assert_eq!(data.annual_avg_temp, 0.0);
        assert!(data.chart_data.is_empty());
        assert_eq!(data.temp_change, "1.0");
    }

    #[test]
    fn missing_fields_propagate_as_none() {
        let historical = vec![
            MonthlyRecord {
                month: 1,
                avg: None,
                stddev: Some(1.0),
                count: None,
            },
            MonthlyRecord {
                month: 2,
                avg: Some(24.0),
                stddev: None,
                count: None,
            },
        ];
        let projected = vec![MonthlyRecord {
            month: 1,
            avg: None,
            stddev: None,
            count: Some(3),
        }];
        let data = transform(&historical, &projected);

        assert_eq!(data.annual_avg_temp, 2.0);
        let jan = &data.chart_data[0];
        assert_eq!(jan.avg, None);
        assert_eq!(jan.lower_stddev, None);
        assert_eq!(jan.rcp, None);

        let feb = &data.chart_data[1];
        assert_eq!(feb.avg, Some(22.0));
        assert_eq!(feb.upper_stddev, None);
    }

    #[test]
    fn all_null_averages_give_zero_mean() {
        let historical: Vec<_> = (1..=12)
            .map(|month| MonthlyRecord {
                month,
                avg: None,
                stddev: None,
                count: None,
            })
            .collect();
        let data = transform(&historical, &historical);
        assert_eq!(data.annual_avg_temp, 0.0);
        assert_eq!(data.annual_avg_future_temp, 0.0);
        assert_eq!(data.statement, Statement::Colder);
        assert_eq!(data.temp_change, "0.0");
        assert!(data.chart_data.iter().all(|p| p.avg.is_none() && p.rcp.is_none()));
    }

    #[test]
    fn chart_point_keeps_source_fields() {
        let historical = vec![MonthlyRecord {
            month: 9,
            avg: Some(12.0),
            stddev: Some(0.5),
            count: Some(400),
        }];
        let point = &transform(&historical, &[]).chart_data[0];
        assert_eq!(point.month, 9);
        assert_eq!(point.stddev, Some(0.5));
        assert_eq!(point.count, Some(400));
    }
}
