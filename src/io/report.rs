use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::graph::FlowSummary;

/// Plain-text report for one network: the input echoed back, the flow on
/// every edge and the max flow value.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, V, C> {
    pub input_name: &'a str,
    pub input_text: &'a str,
    pub summary: &'a FlowSummary<V, C>,
}

impl<V, C> Display for Report<'_, V, C>
where
    V: Display,
    C: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input File: {}\n", self.input_name)?;
        writeln!(f, "Input:")?;
        writeln!(f, "{}", self.input_text)?;
        writeln!(f, "\nNetwork Flow:")?;
        for edge in &self.summary.edges {
            writeln!(
                f,
                "{},{}\t flow:  {}/{}",
                edge.start, edge.end, edge.flow, edge.capacity
            )?;
        }
        writeln!(f, "\nMax flow in this network is {}", self.summary.max_flow)
    }
}

pub fn render_report<V, C>(
    input_name: &str,
    input_text: &str,
    summary: &FlowSummary<V, C>,
) -> String
where
    V: Display,
    C: Display,
{
    Report {
        input_name,
        input_text,
        summary,
    }
    .to_string()
}

/// `dir/network1.txt` with suffix `_output` becomes `dir/network1_output.txt`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

pub fn write_report<V, C>(
    path: &Path,
    input_name: &str,
    input_text: &str,
    summary: &FlowSummary<V, C>,
) -> Result<()>
where
    V: Display,
    C: Display,
{
    fs::write(path, render_report(input_name, input_text, summary))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeFlow;

    fn summary() -> FlowSummary<&'static str, i64> {
        FlowSummary {
            max_flow: 2,
            edges: vec![
                EdgeFlow {
                    start: "s",
                    end: "a",
                    capacity: 3,
                    flow: 2,
                },
                EdgeFlow {
                    start: "a",
                    end: "t",
                    capacity: 2,
                    flow: 2,
                },
            ],
        }
    }

    #[test]
    fn test_render_report() {
        let report = render_report("network1.txt", "s,a,3\na,t,2", &summary());
        let expected = "Input File: network1.txt\n\n\
                        Input:\n\
                        s,a,3\na,t,2\n\
                        \nNetwork Flow:\n\
                        s,a\t flow:  2/3\n\
                        a,t\t flow:  2/2\n\
                        \nMax flow in this network is 2\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_report_zero_flow() {
        let zero = FlowSummary {
            max_flow: 0,
            edges: vec![EdgeFlow {
                start: "s",
                end: "a",
                capacity: 1,
                flow: 0,
            }],
        };
        let report = render_report("n.txt", "s,a,1", &zero);
        assert!(report.contains("s,a\t flow:  0/1"));
        assert!(report.ends_with("Max flow in this network is 0\n"));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("data/network1.txt"), "_output"),
            PathBuf::from("data/network1_output.txt")
        );
        assert_eq!(
            output_path(Path::new("network"), "_output"),
            PathBuf::from("network_output")
        );
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n_output.txt");
        write_report(&path, "n.txt", "s,a,3\na,t,2", &summary()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report("n.txt", "s,a,3\na,t,2", &summary()));
    }
}
