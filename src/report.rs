//! The text the UI puts on the clipboard: the nine inputs as typed, then the solution.
use serde::{Deserialize, Serialize};

use crate::format::FormattedResult;
use crate::parser::RawCells;

/// Caller-supplied headings and component labels, usually localized strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub initial_data: String,
    pub solution: String,
    pub ux: String,
    pub uy: String,
    pub uz: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        ReportLabels {
            initial_data: "Initial data:".to_string(),
            solution: "Solution:".to_string(),
            ux: "u_x".to_string(),
            uy: "u_y".to_string(),
            uz: "u_z".to_string(),
        }
    }
}

/// Renders the clipboard report. Cell text is copied verbatim, not reformatted.
pub fn render_report(raw: &RawCells, display: &FormattedResult, labels: &ReportLabels) -> String {
    let mut lines = vec![labels.initial_data.clone()];
    let texts: Vec<&str> = raw.iter().map(|(_, text)| text).collect();
    for (r, row) in texts.chunks(3).enumerate() {
        let end = if r == 2 { '.' } else { ';' };
        lines.push(format!("| {} , {} , {} |{end}", row[0], row[1], row[2]));
    }
    lines.push(String::new());
    lines.push(labels.solution.clone());
    match display {
        FormattedResult::Numeral { expression, answer } => {
            lines.push(format!("{expression} = {answer}."));
        }
        FormattedResult::Vector { x, y, z } => {
            lines.push(format!("{} ({x});", labels.ux));
            lines.push(format!("{} ({y});", labels.uy));
            lines.push(format!("{} ({z}).", labels.uz));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, ResultMode};

    fn raw() -> RawCells {
        RawCells::from_row_major(["1", "2", "3", "4", "5", "6", "7", "8", "9.0"])
    }

    #[test]
    fn test_numeral_report() {
        let engine = Engine::default();
        let calc = engine.calculate(&raw(), ResultMode::Numeral).unwrap();
        assert_eq!(
            engine.report(&raw(), &calc),
            "Initial data:\n\
             | 1 , 2 , 3 |;\n\
             | 4 , 5 , 6 |;\n\
             | 7 , 8 , 9.0 |.\n\
             \n\
             Solution:\n\
             1×(5×9 - 6×8) - 2×(4×9 - 6×7) + 3×(4×8 - 5×7) = 0."
        );
    }

    #[test]
    fn test_vector_report_with_labels() {
        let labels = ReportLabels {
            initial_data: "Дано:".to_string(),
            solution: "Ответ:".to_string(),
            ..Default::default()
        };
        let display = FormattedResult::Vector {
            x: "-3".to_string(),
            y: "6".to_string(),
            z: "-3".to_string(),
        };
        let report = render_report(&raw(), &display, &labels);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Дано:");
        assert_eq!(lines[3], "| 7 , 8 , 9.0 |.");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Ответ:");
        assert_eq!(&lines[6..], ["u_x (-3);", "u_y (6);", "u_z (-3)."]);
    }
}
