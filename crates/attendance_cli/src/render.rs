//! Plain-text tables and the dashboard bar chart.

use attendance_core::{AttendanceRecord, DailySummary, Employee};

const CHART_WIDTH: usize = 40;

pub fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        eprintln!("warning: No employees registered yet.");
        return;
    }
    let rows = employees
        .iter()
        .map(|e| vec![e.id.clone(), e.name.clone(), e.position.clone()])
        .collect::<Vec<_>>();
    print!("{}", format_table(&["ID", "Name", "Position"], &rows));
}

pub fn print_records(records: &[AttendanceRecord]) {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.date.to_string(),
                r.time.format("%H:%M:%S").to_string(),
                r.status.to_string(),
                r.photo.clone(),
                r.location.clone(),
            ]
        })
        .collect::<Vec<_>>();
    print!(
        "{}",
        format_table(
            &["ID", "Name", "Date", "Time", "Status", "Photo", "Location"],
            &rows
        )
    );
}

pub fn print_dashboard(summary: &DailySummary) {
    println!("Attendance Dashboard");
    let rows = summary
        .rows()
        .iter()
        .map(|row| vec![row.date.to_string(), row.total.to_string()])
        .collect::<Vec<_>>();
    print!("{}", format_table(&["Date", "Total Attendance"], &rows));
    println!();
    println!("Daily Attendance Summary");
    let (labels, values) = summary.series();
    print!("{}", format_bar_chart(&labels, &values, CHART_WIDTH));
}

fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn format_bar_chart(labels: &[String], values: &[usize], width: usize) -> String {
    let max = values.iter().copied().max().unwrap_or(0).max(1);
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    labels
        .iter()
        .zip(values)
        .map(|(label, value)| {
            let bar = (value * width).div_ceil(max);
            format!("{label:<label_width$} | {} {value}\n", "#".repeat(bar))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_bar_chart, format_table};

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let table = format_table(
            &["Date", "Total Attendance"],
            &[vec!["2024-01-01".to_string(), "2".to_string()]],
        );
        assert_eq!(
            table,
            "Date        Total Attendance\n----------  ----------------\n2024-01-01  2\n"
        );
    }

    #[test]
    fn bar_chart_scales_to_largest_value() {
        let chart = format_bar_chart(
            &["2024-01-01".to_string(), "2024-01-02".to_string()],
            &[4, 1],
            8,
        );
        assert_eq!(chart, "2024-01-01 | ######## 4\n2024-01-02 | ## 1\n");
    }
}
