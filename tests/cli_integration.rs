// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the graphwalk CLI commands

use assert_cmd::Command;
use graphwalk::types::Graph;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const THREE_NODES: &str = r#"{
    "nodes": [
        { "id": "Node 1", "x": 100.0, "y": 100.0 },
        { "id": "Node 2", "x": 200.0, "y": 100.0 },
        { "id": "Node 3", "x": 150.0, "y": 200.0 }
    ],
    "edges": [
        { "from": "Node 1", "to": "Node 2", "weight": 1 },
        { "from": "Node 2", "to": "Node 3", "weight": 2 },
        { "from": "Node 1", "to": "Node 3", "weight": 5 }
    ]
}"#;

/// Command isolated from any user configuration, colour off
fn graphwalk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("graphwalk").unwrap();
    cmd.env("GRAPHWALK_CONFIG", dir.path().join("absent.toml"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Write the three-node fixture and return its path
fn write_graph(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("graph.json");
    std::fs::write(&path, THREE_NODES).unwrap();
    path
}

/// Helper to get stdout as string
fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_run_bfs_on_file() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    let output = graphwalk(&dir)
        .args(["run", "bfs", "--input"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    insta::assert_snapshot!(stdout_str(&output).trim_end(), @r"
    Output: Breadth First Search
    Start: Node 1
    Visited Nodes: Node 1, Node 2, Node 3
    ");
}

#[test]
fn test_run_kruskal_text() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    graphwalk(&dir)
        .args(["run", "kruskal", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selected Edges: Node 1 -- Node 2 (Weight: 1), Node 2 -- Node 3 (Weight: 2)",
        ))
        .stdout(predicate::str::contains("Total Weight: 3"));
}

#[test]
fn test_run_json_report() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    let output = graphwalk(&dir)
        .args(["--json", "run", "prim", "--input"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "prim");
    assert_eq!(report["start"], "Node 1");
    assert_eq!(report["result"]["kind"], "spanning_tree");
    assert_eq!(report["total_weight"], 3);
    assert_eq!(report["display"][0], "Node 1 -- Node 2 (Weight: 1)");
    assert_eq!(report["graph"]["nodes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_run_dijkstra_shows_distances() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    graphwalk(&dir)
        .args(["run", "dijkstra", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: Dijkstra's Algorithm"))
        .stdout(predicate::str::contains("Distances: Node 1=0, Node 2=1, Node 3=3"));
}

#[test]
fn test_run_dot_highlights_tree() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    graphwalk(&dir)
        .args(["run", "kruskal", "--format", "dot", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph walk {"))
        .stdout(predicate::str::contains(
            "\"Node 1\" -- \"Node 2\" [label=\"1\", color=red, penwidth=2];",
        ));
}

#[test]
fn test_run_with_start_node() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    graphwalk(&dir)
        .args(["run", "dfs", "--start", "Node 3", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Visited Nodes: Node 3, Node 2, Node 1"));

    graphwalk(&dir)
        .args(["run", "dfs", "--start", "Node 9", "--input"])
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains("start node not found: Node 9"));
}

#[test]
fn test_run_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    graphwalk(&dir)
        .args(["run", "bfs", "--input"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load graph"));
}

#[test]
fn test_run_on_empty_graph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{ "nodes": [], "edges": [] }"#).unwrap();

    for algorithm in ["bfs", "dfs", "dijkstra", "astar", "prim", "kruskal"] {
        graphwalk(&dir)
            .args(["run", algorithm, "--input"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("(none)"));
    }
}

#[test]
fn test_run_generated_graph_is_reproducible() {
    let dir = TempDir::new().unwrap();

    let first = graphwalk(&dir)
        .args(["run", "a-star", "--seed", "17"])
        .output()
        .unwrap();
    let second = graphwalk(&dir)
        .args(["run", "a-star", "--seed", "17"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(stdout_str(&first).starts_with("Output: A* Algorithm"));
}

#[test]
fn test_generate_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.json");

    graphwalk(&dir)
        .args(["generate", "--seed", "5", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let graph = Graph::load(&out).unwrap();
    assert!((5..=10).contains(&graph.node_count()));
    assert_eq!(graph.nodes[0].id, "Node 1");
    assert!(graph.validate().is_ok());

    // The saved graph feeds straight back into the run command.
    graphwalk(&dir)
        .args(["run", "bfs", "--input"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Visited Nodes: Node 1"));
}

#[test]
fn test_generate_text_summary() {
    let dir = TempDir::new().unwrap();

    graphwalk(&dir)
        .args(["generate", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Graph: "))
        .stdout(predicate::str::contains("Nodes:"))
        .stdout(predicate::str::contains("Edges:"));
}

#[test]
fn test_algorithms_catalogue() {
    let dir = TempDir::new().unwrap();

    graphwalk(&dir)
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("Kruskal's Algorithm"));

    graphwalk(&dir)
        .args(["algorithms", "A* Algorithm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no heuristic"));

    graphwalk(&dir)
        .args(["algorithms", "bogosort"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm: bogosort"));
}

#[test]
fn test_config_file_sets_default_algorithm() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);
    let config = dir.path().join("graphwalk.toml");
    std::fs::write(&config, "default_algorithm = \"depth-first\"\n").unwrap();

    graphwalk(&dir)
        .arg("--config")
        .arg(&config)
        .args(["run", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: Depth First Search"));
}

#[test]
fn test_config_environment_override() {
    let dir = TempDir::new().unwrap();

    graphwalk(&dir)
        .env("GRAPHWALK_GENERATOR__MAX_NODES", "7")
        .args(["config", "generator.max_nodes"])
        .assert()
        .success()
        .stdout("7\n");

    graphwalk(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[generator]"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[generator]\nmin_weight = 0\n").unwrap();

    graphwalk(&dir)
        .arg("--config")
        .arg(&config)
        .args(["generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_no_color_environment() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    for value in ["1", "true"] {
        let mut cmd = Command::cargo_bin("graphwalk").unwrap();
        cmd.env("GRAPHWALK_CONFIG", dir.path().join("absent.toml"))
            .env_remove("RUST_LOG")
            .env("NO_COLOR", value)
            .args(["run", "bfs", "--input"])
            .arg(&graph)
            .assert()
            .success()
            .stdout(predicate::str::contains("Visited Nodes: Node 1, Node 2, Node 3"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    // Empty means unset.
    Command::cargo_bin("graphwalk")
        .unwrap()
        .env("GRAPHWALK_CONFIG", dir.path().join("absent.toml"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "")
        .arg("algorithms")
        .assert()
        .success();
}

#[test]
fn test_run_accepts_display_names() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir);

    graphwalk(&dir)
        .args(["run", "Prim's Algorithm", "--input"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: Prim's Algorithm"));

    graphwalk(&dir)
        .args(["run", "bogosort", "--input"])
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm: bogosort"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    graphwalk(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}
