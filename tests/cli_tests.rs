//! Integration tests for the grafo CLI
//!
//! These tests run the grafo binary against the sample graph and small
//! graphs given with `--edge`.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Get a Command for grafo with an empty config directory
fn grafo(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("grafo");
    cmd.env("GRAFO_CONFIG_DIR", config_dir.path())
        .env_remove("GRAFO_CONFIG")
        .env_remove("GRAFO_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grafo"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("kruskal"))
        .stdout(predicate::str::contains("menu"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grafo"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("grafo --help"));
}

// ============================================================================
// Sample graph
// ============================================================================

#[test]
fn test_kruskal_sample_total_weight() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("kruskal")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Kruskal minimum spanning tree\n  D -- E (1)\n"))
        .stdout(predicate::str::contains("14 vertices, 13 edges, total weight 32"));
}

#[test]
fn test_prim_matches_kruskal_weight() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args(["--format", "json", "prim", "h"]));
    assert_eq!(json["algorithm"], "prim");
    assert_eq!(json["root"], "H");
    assert_eq!(json["total_weight"], 32.0);
    assert_eq!(json["edge_count"], 13);
}

#[test]
fn test_bfs_json_shape() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args(["--format", "json", "bfs", "A"]));
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["vertex_count"], 14);
    assert_eq!(json["partial"], false);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 13);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[0]["to"], "E");
    assert_eq!(edges[0]["weight"], 4.0);
}

#[test]
fn test_dfs_records_header() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["--format", "records", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H grafo=1 records=1 mode=dfs root=A vertices=14 edges=13",
        ))
        .stdout(predicate::str::contains("\nE A E 4\nE E D 1\n"));
}

#[test]
fn test_show_sample_graph() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("  I: E, N, D, F, H, M, K, P"))
        .stdout(predicate::str::contains("14 vertices, 29 edges"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_vertex_exit_code() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["bfs", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: vertex not found: Z"));
}

#[test]
fn test_unknown_vertex_json_envelope() {
    let dir = tempdir().unwrap();
    let output = grafo(&dir)
        .args(["--format", "json", "prim", "Z"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["message"], "vertex not found: Z");
}

#[test]
fn test_bad_edge_spec_is_usage_error() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["--edge", "AB:3", "kruskal"])
        .assert()
        .code(2);
}

#[test]
fn test_bad_edge_spec_json_envelope() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["--format", "json", "--edge", "A-B:x", "kruskal"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_duplicate_edge_rejected_by_default() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["-e", "A-B:1", "-e", "B-A:2", "kruskal"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate edge"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["--quiet", "dfs", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Custom graphs
// ============================================================================

#[test]
fn test_custom_edges() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args([
        "--format", "json", "-e", "a-b:4", "-e", "b-c:1", "-e", "a-c:2", "kruskal",
    ]));
    assert_eq!(json["total_weight"], 3.0);
    assert_eq!(json["edges"][0]["from"], "B");
    assert_eq!(json["edges"][0]["to"], "C");
    assert_eq!(json["edges"][1]["from"], "A");
    assert_eq!(json["edges"][1]["to"], "C");
}

#[test]
fn test_duplicate_edges_overwrite() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args([
        "--format",
        "json",
        "--duplicate-edges",
        "overwrite",
        "-e",
        "A-B:9",
        "-e",
        "B-A:2",
        "prim",
    ]));
    assert_eq!(json["total_weight"], 2.0);
}

#[test]
fn test_duplicate_edges_without_edges_is_usage_error() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["--duplicate-edges", "ignore", "kruskal"])
        .assert()
        .code(2);
}

#[test]
fn test_partial_result_flagged() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["-e", "A-B:1", "-e", "C-D:1", "--vertex", "x", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vertices, 1 edges"))
        .stderr(predicate::str::contains("note: result covers 2 of 5 vertices"));

    let json = json_stdout(grafo(&dir).args([
        "--format", "json", "-e", "A-B:1", "-e", "C-D:1", "kruskal",
    ]));
    assert_eq!(json["partial"], true);
    assert_eq!(json["edge_count"], 2);
}

#[test]
fn test_unweighted_edges() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args([
        "--format",
        "json",
        "-e",
        "A-B",
        "-e",
        "B-C:3",
        "kruskal",
        "--default-weight",
        "5",
    ]));
    assert_eq!(json["total_weight"], 8.0);

    grafo(&dir)
        .args(["-e", "A-B", "kruskal", "--reject-unweighted"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge A-B has no weight"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_default_start() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "default_start = \"k\"\n").unwrap();
    let json = json_stdout(grafo(&dir).args(["--format", "json", "bfs"]));
    assert_eq!(json["root"], "K");
}

#[test]
fn test_config_reject_unweighted() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[mst]\nunweighted = \"reject\"\n",
    )
    .unwrap();
    grafo(&dir)
        .args(["-e", "A-B", "prim"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "default_start = 3\n").unwrap();
    grafo(&dir).arg("kruskal").assert().code(1);
}

#[test]
fn test_configured_default_weight_in_totals() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[mst]\ndefault_weight = 5\n").unwrap();
    grafo(&dir)
        .args(["-e", "A-B", "-e", "B-C:2", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 7"));
    grafo(&dir)
        .args(["-e", "A-B", "-e", "B-C:2", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 7"));
}

#[test]
fn test_config_shows_defaults() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found, defaults)"))
        .stdout(predicate::str::contains("default_start = \"A\""));
}

#[test]
fn test_config_init_writes_file_once() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wrote "));
    let text = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(text.contains("[mst]"));

    grafo(&dir)
        .args(["config", "--init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let json = json_stdout(grafo(&dir).args(["--format", "json", "config"]));
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["graph"]["duplicate_edges"], "reject");
}

#[test]
fn test_negative_zero_weight_prints_as_zero() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .args(["-e", "A-B:-0", "kruskal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  A -- B (0)\n"))
        .stdout(predicate::str::contains("total weight 0"));
}

#[test]
fn test_huge_weights_total_stays_finite() {
    let dir = tempdir().unwrap();
    let json = json_stdout(grafo(&dir).args([
        "--format", "json", "-e", "A-B:1e308", "-e", "B-C:1e308", "kruskal",
    ]));
    assert_eq!(json["total_weight"], f64::MAX);
}

// ============================================================================
// Interactive menu
// ============================================================================

#[test]
fn test_menu_session() {
    let dir = tempdir().unwrap();
    grafo(&dir)
        .arg("menu")
        .write_stdin("a\nz\nc\nq\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("vertex not found: Z"))
        .stdout(predicate::str::contains("total weight 32"))
        .stdout(predicate::str::contains("Invalid option. Try again."));
}
