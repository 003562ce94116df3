use std::{fs, path::PathBuf};

use tempfile::tempdir;

use gwa_cli::{Args, run};

/// Collects all .gwa files from a directory
fn collect_gwa_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("gwa")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Samples live at the workspace root, not inside the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &PathBuf, output: Option<PathBuf>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.map(|path| path.to_string_lossy().to_string()),
        config: None,
        delimiter: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_gwa_files(samples_dir());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.gwa",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(sample_path, Some(output_path.clone()))) {
            failed_samples.push((sample_path.clone(), e.to_string()));
            continue;
        }

        // The canonical output must itself survive the round trip
        if let Err(e) = run(&args_for(&output_path, None)) {
            failed_samples.push((output_path, e.to_string()));
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let error_samples = collect_gwa_files(samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        if run(&args_for(sample_path, None)).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_canonical_output_drops_comments() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("portal_frame.gwa");

    run(&args_for(
        &samples_dir().join("portal_frame.gwa"),
        Some(output_path.clone()),
    ))
    .expect("portal frame sample should pass");

    let canonical = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<_> = canonical.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|line| !line.starts_with('!')));
    assert_eq!(lines[0], "NODE.3\tSET\t1\tBase left\tNO_RGB\t0\t0\t0\tfix");
}
