use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};

use flownet::io::{load_network, output_path, write_report};
use flownet::{FlowConfig, Result};

/// Files named `network*.txt` in `dir`, sorted by name, skipping reports
/// written by an earlier run.
fn discover(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let report_tail = format!("{}.txt", suffix);
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("network") && n.ends_with(".txt") && !n.ends_with(&report_tail))
            .unwrap_or(false);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn process(path: &Path, config: &FlowConfig) -> Result<PathBuf> {
    let text = fs::read_to_string(path)?;
    let mut network = load_network(&text)?;

    let value = match config.max_augmentations {
        Some(limit) => network.max_flow_bounded(&config.source, &config.sink, limit)?,
        None => network.max_flow(&config.source, &config.sink)?,
    };
    let summary = network.flow_summary(&config.source)?;

    let out = output_path(path, &config.output_suffix);
    write_report(&out, &path.display().to_string(), &text, &summary)?;
    info!("{}: max flow {} written to {}", path.display(), value, out.display());
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match FlowConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    let files = if args.is_empty() {
        match discover(Path::new("."), &config.output_suffix) {
            Ok(files) => files,
            Err(e) => {
                error!("could not list the current directory: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args
    };

    if files.is_empty() {
        info!("no network files to process");
    }

    let mut failed = 0;
    for file in &files {
        match process(file, &config) {
            Ok(out) => println!("{} -> {}", file.display(), out.display()),
            Err(e) => {
                error!("{}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "s,t,1\n").unwrap();
    }

    #[test]
    fn test_discover_picks_network_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "network2.txt");
        touch(dir.path(), "network1.txt");
        touch(dir.path(), "network1_output.txt");
        touch(dir.path(), "network3.csv");
        touch(dir.path(), "graph.txt");
        fs::create_dir(dir.path().join("network_dir.txt")).unwrap();

        let names: Vec<_> = discover(dir.path(), "_output")
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["network1.txt", "network2.txt"]);
    }

    #[test]
    fn test_discover_respects_custom_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "network1.txt");
        touch(dir.path(), "network1_output.txt");
        touch(dir.path(), "network1_flow.txt");

        let found = discover(dir.path(), "_flow").unwrap();
        assert_eq!(
            found,
            vec![dir.path().join("network1.txt"), dir.path().join("network1_output.txt")]
        );
    }

    #[test]
    fn test_process_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("network1.txt");
        fs::write(&input, "s,a,3\na,t,2\n").unwrap();

        let out = process(&input, &FlowConfig::default()).unwrap();
        assert_eq!(out, dir.path().join("network1_output.txt"));
        let report = fs::read_to_string(out).unwrap();
        assert!(report.ends_with("Max flow in this network is 2\n"));
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(&dir.path().join("absent"), "_output").is_err());
    }
}
