use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "vanet-report-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn analyze(metrics_dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_analyze_results"))
        .args(["--metrics-dir", metrics_dir.to_str().unwrap(), "--no-plot"])
        .output()
        .expect("run analyze_results")
}

#[test]
fn analyze_results_writes_summary_csv() {
    let dir = unique_temp_dir("cli-analyze");
    write_file(
        &dir,
        "run_b.csv",
        "Throughput,EndToEndDelay,PacketLossRate\n4,20,3\n6,30,5\n",
    );
    write_file(
        &dir,
        "run_a.csv",
        "Throughput,EndToEndDelay,PacketLossRate\n1,10,2\n3,20,2\n",
    );

    let output = analyze(&dir);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary = fs::read_to_string(dir.join("summary_metrics.csv")).expect("read summary");
    let lines = summary.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "Simulation Run,Throughput (Mbps),End-to-End Delay (ms),Packet Loss Rate (%)",
            "1,2.0,15.0,2.0",
            "2,5.0,25.0,4.0",
        ]
    );
    assert!(!dir.join("performance_metrics.png").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Summary metrics saved to"), "stdout: {stdout}");

    // A second run ignores the summary it wrote the first time.
    let again = analyze(&dir);
    assert!(again.status.success());
    let rerun = fs::read_to_string(dir.join("summary_metrics.csv")).expect("read summary");
    assert_eq!(rerun, summary);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn analyze_results_fails_on_missing_directory() {
    let dir = unique_temp_dir("cli-analyze-missing");

    let output = analyze(&dir.join("nope"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing input"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn analyze_results_fails_on_empty_directory() {
    let dir = unique_temp_dir("cli-analyze-empty");

    let output = analyze(&dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to summarize"), "stderr: {stderr}");
    assert!(!dir.join("summary_metrics.csv").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn analyze_results_renders_performance_plot() {
    let dir = unique_temp_dir("cli-analyze-plot");
    write_file(
        &dir,
        "run_1.csv",
        "Throughput,EndToEndDelay,PacketLossRate\n1,10,2\n3,20,2\n",
    );
    write_file(
        &dir,
        "run_2.csv",
        "Throughput,EndToEndDelay,PacketLossRate\n4,20,3\n6,30,5\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_analyze_results"))
        .args(["--metrics-dir", dir.to_str().unwrap()])
        .output()
        .expect("run analyze_results");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(dir.join("summary_metrics.csv").exists());
    let plot = dir.join("performance_metrics.png");
    assert!(fs::metadata(&plot).expect("stat plot").len() > 0);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Performance metrics plot saved to"), "stdout: {stdout}");

    let _ = fs::remove_dir_all(&dir);
}
