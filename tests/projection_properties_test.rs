use capacity_estimator::core::projector::{project_detail, KB_PER_GB};
use capacity_estimator::{project, ProjectionInput};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn test_worked_example() {
    let input = ProjectionInput {
        current_users: 100_000.0,
        daily_transactions_per_user: 5.0,
        average_transaction_size_kb: 0.5,
        users_growth_rate_pct: 5.0,
        transactions_growth_rate_pct: 3.0,
        retention_period_months: 12,
    };

    let detail = project_detail(&input);
    assert_eq!(detail.current_daily_data_kb, 250_000.0);
    assert_close(detail.projected_users, 179_585.63, 0.01);
    assert_close(detail.projected_daily_transactions, 7.129, 0.001);

    let result = project(&input);
    assert_close(result.current_daily_gb, 0.238, 0.001);
    assert_close(result.current_yearly_gb, 87.02, 0.01);
    assert_close(result.projected_daily_gb, 0.610, 0.001);
}

#[test]
fn test_zero_retention_uses_current_rates() {
    for (users, tx, size) in [(1.0, 1.0, 1.0), (3_500.0, 12.0, 2.25), (10.0, 0.0, 4.0)] {
        let input = ProjectionInput {
            current_users: users,
            daily_transactions_per_user: tx,
            average_transaction_size_kb: size,
            users_growth_rate_pct: 17.0,
            transactions_growth_rate_pct: -8.0,
            retention_period_months: 0,
        };
        let detail = project_detail(&input);
        assert_eq!(detail.projected_daily_data_kb, users * tx * size);
    }
}

#[test]
fn test_current_volume_is_monotonic_in_each_factor() {
    let base = ProjectionInput::DEFAULT;
    let baseline = project_detail(&base).current_daily_data_kb;

    let bumped = [
        ProjectionInput {
            current_users: base.current_users * 1.5,
            ..base
        },
        ProjectionInput {
            daily_transactions_per_user: base.daily_transactions_per_user + 1.0,
            ..base
        },
        ProjectionInput {
            average_transaction_size_kb: base.average_transaction_size_kb * 3.0,
            ..base
        },
    ];

    for input in bumped {
        assert!(project_detail(&input).current_daily_data_kb >= baseline);
    }
}

#[test]
fn test_monthly_and_yearly_scale_daily() {
    let inputs = [
        ProjectionInput::DEFAULT,
        ProjectionInput {
            users_growth_rate_pct: -3.0,
            retention_period_months: 36,
            ..ProjectionInput::DEFAULT
        },
    ];

    for input in inputs {
        let result = project(&input);
        assert_close(result.current_monthly_gb, result.current_daily_gb * 30.0, 1e-12);
        assert_close(result.current_yearly_gb, result.current_daily_gb * 365.0, 1e-12);
        assert_close(result.projected_monthly_gb, result.projected_daily_gb * 30.0, 1e-12);
        assert_close(result.projected_yearly_gb, result.projected_daily_gb * 365.0, 1e-12);
    }
}

#[test]
fn test_gb_conversion_divides_by_1048576() {
    let input = ProjectionInput {
        retention_period_months: 7,
        ..ProjectionInput::DEFAULT
    };
    let detail = project_detail(&input);
    let result = project(&input);

    assert_eq!(KB_PER_GB, 1_048_576.0);
    assert_eq!(result.current_daily_gb, detail.current_daily_data_kb / 1_048_576.0);
    assert_eq!(result.projected_yearly_gb, detail.projected_yearly_data_kb / 1_048_576.0);
}

#[test]
fn test_all_zero_input() {
    let result = project(&ProjectionInput::ZERO);
    for (metric, value) in result.metrics() {
        assert_eq!(value, 0.0, "{} should be zero", metric);
    }
}

#[test]
fn test_repeated_calls_are_independent() {
    let first = project(&ProjectionInput::DEFAULT);
    let _ = project(&ProjectionInput::ZERO);
    let again = project(&ProjectionInput::DEFAULT);
    assert_eq!(first, again);
}
