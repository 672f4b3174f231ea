use super::DocReport;

pub const REPORT_TITLE: &str = "Functions Documentation";

/// Serializes the report: a title, one `##` section per file and one `###`
/// section per function holding its comment verbatim.
pub fn render_markdown(report: &DocReport) -> String {
    let mut output = format!("# {}\n\n", REPORT_TITLE);

    for (file_path, functions) in report.files() {
        output.push_str(&format!("## {}\n", file_path));
        for function in functions {
            output.push_str(&format!("### {}\n", function.name));
            output.push_str(&function.comment);
            output.push_str("\n\n");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc_report::DocFunction;

    #[test]
    fn empty_report_renders_title_only() {
        assert_eq!(
            render_markdown(&DocReport::new()),
            "# Functions Documentation\n\n"
        );
    }

    #[test]
    fn renders_heading_hierarchy() {
        let mut report = DocReport::new();
        report.add_file(
            "utils/array.ts".to_string(),
            vec![
                DocFunction::new("/** Sums. */".to_string(), "sum".to_string()),
                DocFunction::new(
                    "/**\n * Averages.\n */".to_string(),
                    "mean".to_string(),
                ),
            ],
        );
        report.add_file(
            "dom.ts".to_string(),
            vec![DocFunction::new("/** Query. */".to_string(), "query".to_string())],
        );

        let expected = "# Functions Documentation\n\n\
                        ## utils/array.ts\n\
                        ### sum\n\
                        /** Sums. */\n\n\
                        ### mean\n\
                        /**\n * Averages.\n */\n\n\
                        ## dom.ts\n\
                        ### query\n\
                        /** Query. */\n\n";
        assert_eq!(render_markdown(&report), expected);
    }
}
