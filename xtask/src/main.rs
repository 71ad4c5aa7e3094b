use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quiver workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite and render a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "digraph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    // Build first to avoid measuring build time.
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!(">>> Running {BENCH}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the Criterion runner go after --
    cmd.arg("--");
    if quick {
        // Aggressive settings for CI to avoid timeouts
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run the benchmark suite")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut means = BTreeMap::new();
    collect_means(criterion_dir, &mut means);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Ops/s | vs std |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, mean_ns) in &means {
        let ops = if *mean_ns > 0.0 { 1e9 / mean_ns } else { 0.0 };

        // Workloads come in digraph_/std_ pairs; show the ratio against
        // the std twin where one exists.
        let ratio = workload
            .strip_prefix("digraph_")
            .and_then(|suffix| means.get(&format!("std_{suffix}")))
            .map_or_else(
                || "-".to_string(),
                |std_ns| format!("**{:.2}x**", std_ns / mean_ns),
            );

        writeln!(
            file,
            "| {} | {} | {} | {} |",
            workload,
            format_time(*mean_ns),
            format_ops(ops),
            ratio
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2}us", ns / 1_000.0)
    } else {
        format!("{ns:.0}ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn collect_means(dir: &Path, means: &mut BTreeMap<String, f64>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_means(&path, means);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            // Structure: .../workload/new/estimates.json
            let Some(run_dir) = path.parent() else { continue };
            if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
                continue;
            }
            let Some(workload) = run_dir
                .parent()
                .and_then(|d| d.file_name())
                .and_then(|s| s.to_str())
            else {
                continue;
            };
            if workload == "report" {
                continue;
            }

            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(mean) = json.get("mean").and_then(|m| m.get("point_estimate")) {
                        let time_ns = mean.as_f64().unwrap_or(0.0);
                        if time_ns > 0.0 {
                            means.insert(workload.to_string(), time_ns);
                        }
                    }
                }
            }
        }
    }
}
