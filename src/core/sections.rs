use chrono::{DateTime, Local};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// First line of every generated file.
pub fn generation_line(at: DateTime<Local>) -> String {
    format!("> generated {}", at.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

/// Appends `# <title>` and its body, leaving a blank line before the next section.
pub fn push_section(out: &mut String, title: &str, body: &str) {
    out.push_str(LINE_ENDING);
    out.push_str("# ");
    out.push_str(title);
    out.push_str(LINE_ENDING);
    out.push_str(body);
    out.push_str(LINE_ENDING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generation_line_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(generation_line(at), "> generated 3/7/2024, 2:05:09 PM");

        let at = Local.with_ymd_and_hms(2024, 11, 21, 0, 30, 0).unwrap();
        assert_eq!(generation_line(at), "> generated 11/21/2024, 12:30:00 AM");
    }

    #[test]
    fn test_push_section() {
        let mut out = "> header".to_string();
        push_section(&mut out, "first", "- a");
        push_section(&mut out, "second", "");
        let expected = ["> header", "# first", "- a", "", "# second", "", ""].join(LINE_ENDING);
        assert_eq!(out, expected);
    }
}
