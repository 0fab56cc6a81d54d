use crate::core::session::InputField;
use crate::domain::model::{ProjectionInput, ProjectionResult};

const METRIC_HEADER: &str = "Metric";
const VALUE_HEADER: &str = "Value (GB)";

/// Two-column text table of the six metrics, values to two decimals.
pub fn render_results(result: &ProjectionResult) -> String {
    let rows: Vec<(String, String)> = result
        .metrics()
        .map(|(metric, value)| (metric.label().to_string(), format!("{:.2}", value)))
        .collect();
    render_table(METRIC_HEADER, VALUE_HEADER, &rows)
}

pub fn render_inputs(input: &ProjectionInput) -> String {
    let rows: Vec<(String, String)> = InputField::ALL
        .iter()
        .map(|field| (field.label().to_string(), field.value_of(input)))
        .collect();
    render_table("Input", "Value", &rows)
}

fn render_table(left_header: &str, right_header: &str, rows: &[(String, String)]) -> String {
    let left_width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .chain(std::iter::once(left_header.chars().count()))
        .max()
        .unwrap_or(0);
    let right_width = rows
        .iter()
        .map(|(_, right)| right.chars().count())
        .chain(std::iter::once(right_header.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<lw$} | {:>rw$}\n",
        left_header,
        right_header,
        lw = left_width,
        rw = right_width
    ));
    out.push_str(&format!("{}-+-{}\n", "-".repeat(left_width), "-".repeat(right_width)));
    for (left, right) in rows {
        out.push_str(&format!(
            "{:<lw$} | {:>rw$}\n",
            left,
            right,
            lw = left_width,
            rw = right_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector;

    #[test]
    fn test_results_table_uses_two_decimals() {
        let result = projector::project(&ProjectionInput::DEFAULT);
        let table = render_results(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Metric"));
        assert!(lines[0].ends_with("Value (GB)"));
        assert!(lines[2].starts_with("Current Daily Data"));
        assert!(lines[2].ends_with("0.24"));
        assert!(lines[4].ends_with("87.02"));

        let widths: Vec<usize> = lines.iter().map(|l| l.len()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_inputs_table_lists_every_field() {
        let table = render_inputs(&ProjectionInput::DEFAULT);
        assert!(table.contains("Current Number of Users"));
        assert!(table.contains("100000"));
        assert!(table.contains("Retention Period (months)"));
        assert_eq!(table.lines().count(), 8);
    }
}
