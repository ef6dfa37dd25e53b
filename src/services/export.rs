use crate::models::StatisticsRow;

const BOM: &str = "\u{feff}";

/// Renders statistics as CSV. The BOM makes spreadsheet apps read the file
/// as UTF-8.
pub fn statistics_csv(rows: &[StatisticsRow]) -> String {
    let mut csv = String::from(BOM);
    csv.push_str(&StatisticsRow::CSV_HEADER.join(","));
    csv.push('\n');

    for r in rows {
        let row = format!(
            "{},{},{},{},{},{}\n",
            esc(&r.class_code),
            esc(&r.class_name),
            esc(&r.student_number),
            esc(&r.full_name),
            r.attendance_count,
            r.absence_count
        );
        csv.push_str(&row);
    }

    csv
}

/// `report_<class_code>.csv`, with anything outside `[A-Za-z0-9_-]` replaced.
pub fn report_filename(class_code: &str) -> String {
    let safe: String = class_code
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("report_{}.csv", safe)
}

fn esc(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> StatisticsRow {
        StatisticsRow {
            class_code: "CS101".to_string(),
            class_name: "Intro, Programming".to_string(),
            student_number: "SV001".to_string(),
            full_name: name.to_string(),
            attendance_count: 4,
            absence_count: 11,
        }
    }

    #[test]
    fn csv_has_header_and_quotes_awkward_fields() {
        let csv = statistics_csv(&[row("Nguyễn \"Bé\" An")]);
        let mut lines = csv.trim_start_matches(BOM).lines();
        assert_eq!(
            lines.next(),
            Some("class_code,class_name,student_number,full_name,attendance_count,absence_count")
        );
        assert_eq!(
            lines.next(),
            Some("CS101,\"Intro, Programming\",SV001,\"Nguyễn \"\"Bé\"\" An\",4,11")
        );
        assert_eq!(lines.next(), None);
        assert!(csv.starts_with(BOM));
    }

    #[test]
    fn empty_report_is_just_the_header() {
        let csv = statistics_csv(&[]);
        assert_eq!(csv.trim_start_matches(BOM).lines().count(), 1);
    }

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(report_filename("CS101"), "report_CS101.csv");
        assert_eq!(report_filename("../etc/x y"), "report____etc_x_y.csv");
    }
}
