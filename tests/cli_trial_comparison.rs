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

#[test]
fn trial_comparison_writes_metric_and_stacked_pngs() {
    let dir = unique_temp_dir("cli-trial");
    let header = "Trial,Total_Throughput_Kbps,Average_Delay_ms,Packet_Delivery_Ratio\n";
    let aodv = write_file(
        &dir,
        "aodv.txt",
        &format!("{header}2,220.5,4,92%\n1,210.25,3,91%\n3,230,5,93%\n"),
    );
    let dsdv = write_file(
        &dir,
        "dsdv.txt",
        &format!("{header}1,110,6,81\n2,120,7,82\n3,130,8,83\n"),
    );
    let out_dir = dir.join("out");

    let output = Command::new(env!("CARGO_BIN_EXE_trial_comparison"))
        .args([
            "--input",
            aodv.to_str().unwrap(),
            "--input",
            dsdv.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("run trial_comparison");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let mut names = fs::read_dir(&out_dir)
        .expect("read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    assert_eq!(
        names,
        vec![
            "Average_Delay_ms_comparison.png",
            "Packet_Delivery_Ratio_comparison.png",
            "Total_Throughput_Kbps_comparison.png",
            "all_metrics_comparison.png",
        ]
    );

    // One written path per line, in render order.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed = stdout.lines().collect::<Vec<_>>();
    assert_eq!(printed.len(), 4, "stdout: {stdout}");
    assert!(printed[0].ends_with("Total_Throughput_Kbps_comparison.png"));
    assert!(printed[3].ends_with("all_metrics_comparison.png"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trial_comparison_reports_missing_input() {
    let dir = unique_temp_dir("cli-trial-missing");
    let out_dir = dir.join("out");

    let output = Command::new(env!("CARGO_BIN_EXE_trial_comparison"))
        .args([
            "--input",
            dir.join("aodv.txt").to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("run trial_comparison");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing input"), "stderr: {stderr}");
    assert!(!out_dir.exists());

    let _ = fs::remove_dir_all(&dir);
}
