use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

const REPORT: &str = "read\tref\tstart\tamplicon\n\
                      R1\tMN908947.3\t30\tAmpA\n\
                      R2\tMN908947.3\t320\tAmpB\n\
                      R3\tMN908947.3\t610\tAmpC\n";

fn setup(bins: &str) -> (TempDir, PathBuf, PathBuf) {
    let d = tempdir().expect("tempdir should be creatable");
    let truth = d.path().join("alignreport.txt");
    let binning = d.path().join("bins.tsv");
    fs::write(&truth, REPORT).expect("truth set should be writable");
    fs::write(&binning, bins).expect("binning file should be writable");
    (d, truth, binning)
}

fn run(truth: &Path, binning: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_amplicon-binning-check"))
        .arg("-t")
        .arg(truth)
        .args(extra)
        .arg(binning)
        .output()
        .expect("checker should run")
}

#[test]
fn reports_correct_and_incorrect_counts() {
    let (_d, truth, binning) = setup("R1\tAmpA\nR2\tAmpX\nR3\tAmpC\n");
    let out = run(&truth, &binning, &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = format!(
        "---\nreference:\t{}\nread total:\t3\n---\nbinning file:\t{}\n\
         correctly binned:\t2\t66.67% of reference reads\n\
         incorrectly binned:\t1\t33.33% of reference reads\n",
        truth.display(),
        binning.display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn unknown_read_exits_with_code_one() {
    let (_d, truth, binning) = setup("R1\tAmpA\nR4\tAmpA\n");
    let out = run(&truth, &binning, &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no report expected on failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("R4"));
}

#[test]
fn unknown_read_reported_even_when_crate_logging_is_off() {
    let (_d, truth, binning) = setup("R4\tAmpA\n");
    let out = Command::new(env!("CARGO_BIN_EXE_amplicon-binning-check"))
        .env("RUST_LOG", "amplicon_binning_check=off")
        .arg("-t")
        .arg(&truth)
        .arg(&binning)
        .output()
        .expect("checker should run");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("read not found in truth set: R4"));
}

#[test]
fn read_binned_both_ways_counts_as_correct_only() {
    let (_d, truth, binning) = setup("R1\tAmpA\nR1\tAmpZ\n");
    let out = run(&truth, &binning, &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("correctly binned:\t1\t33.33% of reference reads\n"));
    assert!(stdout.contains("incorrectly binned:\t0\t0.00% of reference reads\n"));
}

#[test]
fn duplicate_truth_read_keeps_last_label() {
    let d = tempdir().expect("tempdir should be creatable");
    let truth = d.path().join("alignreport.txt");
    let binning = d.path().join("bins.tsv");
    fs::write(&truth, "h\th\th\th\nR1\t.\t.\tAmpA\nR1\t.\t.\tAmpB\n").unwrap();
    fs::write(&binning, "R1\tAmpB\n").unwrap();

    let out = run(&truth, &binning, &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("read total:\t1\n"));
    assert!(stdout.contains("correctly binned:\t1\t100.00% of reference reads\n"));
}

#[test]
fn output_is_identical_across_runs() {
    let (_d, truth, binning) = setup("R2\tAmpA\nR1\tAmpA\nR3\tAmpB\n");
    let first = run(&truth, &binning, &[]);
    let second = run(&truth, &binning, &[]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn writes_mismatch_table() {
    let (d, truth, binning) = setup("R1\tAmpA\t0.93\nR2\tAmpC\t0.41\n");
    let table = d.path().join("mismatches.tsv");
    let out = run(
        &truth,
        &binning,
        &["--mismatches", table.to_str().expect("temp path should be utf-8")],
    );

    assert!(out.status.success());
    let text = fs::read_to_string(&table).expect("mismatch table should exist");
    assert_eq!(text, "read\tgot\twanted\tkmerFrac\nR2\tAmpC\tAmpB\t0.41\n");
}

#[test]
fn malformed_binning_line_fails() {
    let (_d, truth, binning) = setup("R1\tAmpA\nR2\n");
    let out = run(&truth, &binning, &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed line 2"));
}

#[test]
fn missing_default_truth_set_fails() {
    let d = tempdir().expect("tempdir should be creatable");
    let binning = d.path().join("bins.tsv");
    fs::write(&binning, "R1\tAmpA\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_amplicon-binning-check"))
        .current_dir(d.path())
        .arg(&binning)
        .output()
        .expect("checker should run");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("CVR1.artic.alignreport.txt"));
}
