// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod store;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;
use crate::config::model::MapFile;
use crate::engine::{Snapshot, StatusEngine};
use crate::graph::{ActivityGraph, NodeId, check_graph};
use crate::store::{FileStore, Session};
use crate::types::Status;

/// High-level entry point used by `main.rs`.
///
/// Loads the map, then either inspects the graph (`check`, `dimensions`) or
/// opens a session on the file store, runs the command, and saves the
/// completed set if it changed.
pub fn run(args: CliArgs) -> Result<()> {
    let map_path = PathBuf::from(&args.map);
    let map = load_and_validate(&map_path)
        .with_context(|| format!("loading activity map {:?}", map_path))?;

    match args.command {
        Command::Check { json } => run_check(&map.build_graph(), json),
        Command::Dimensions { tight, json } => print_dimensions(&map.build_graph(), tight, json),
        Command::Status { json, only } => {
            let session = open_session(&map_path, &map, args.state_dir.as_deref())?;
            print_status(session.engine(), map.map.name.as_deref(), json, only)
        }
        Command::Toggle { label } => {
            let mut session = open_session(&map_path, &map, args.state_dir.as_deref())?;
            let id = session.engine().require(&label)?;
            session.engine_mut().toggle_completed(id);
            session.save()?;
            print_change(session.engine(), id)
        }
        Command::Complete { label } => {
            let mut session = open_session(&map_path, &map, args.state_dir.as_deref())?;
            let id = session.engine().require(&label)?;
            session.engine_mut().mark_completed(id);
            session.save()?;
            print_change(session.engine(), id)
        }
        Command::Uncomplete { label } => {
            let mut session = open_session(&map_path, &map, args.state_dir.as_deref())?;
            let id = session.engine().require(&label)?;
            session.engine_mut().mark_not_completed(id);
            session.save()?;
            print_change(session.engine(), id)
        }
        Command::Export => {
            let session = open_session(&map_path, &map, args.state_dir.as_deref())?;
            println!("{}", session.engine().save_completed());
            Ok(())
        }
    }
}

fn open_session(
    map_path: &Path,
    map: &MapFile,
    state_dir_override: Option<&str>,
) -> Result<Session<FileStore>> {
    let dir = match state_dir_override {
        Some(dir) => PathBuf::from(dir),
        None => storage_dir(map_path, &map.storage.dir),
    };
    info!(store = ?dir, key = %map.storage.key, "using completed-activities store");

    let session = Session::open(map.build_graph(), FileStore::new(dir), &map.storage.key)?;
    Ok(session)
}

/// Resolve `[storage].dir` relative to the map file's directory.
///
/// A bare file name like `ActivityMap.toml` (parent = "") resolves against
/// the current working directory.
pub fn storage_dir(map_path: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match map_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir),
        _ => dir.to_path_buf(),
    }
}

fn print_status(
    engine: &StatusEngine,
    name: Option<&str>,
    json: bool,
    only: Option<Status>,
) -> Result<()> {
    let mut snapshot = Snapshot::capture(engine)
        .context("deriving statuses (run `activitymap check` to find cycles)")?;
    if let Some(status) = only {
        snapshot.nodes.retain(|n| n.status == status);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!(
        "{} ({} activities, {} completed)",
        name.unwrap_or("activity map"),
        engine.graph().len(),
        engine.completed().len()
    );
    for node in snapshot.nodes.iter() {
        println!("  [{:<9}] {}", node.status.as_str(), node.label);
    }

    debug!(shown = snapshot.nodes.len(), "status listing complete");
    Ok(())
}

/// Report the new state of a changed activity and of its direct dependents.
fn print_change(engine: &StatusEngine, id: NodeId) -> Result<()> {
    let graph = engine.graph();
    println!("{}: {}", graph.label(id), engine.status(id)?);

    for dependent in graph.dependents_of(id) {
        println!("  -> {}: {}", graph.label(dependent), engine.status(dependent)?);
    }
    Ok(())
}

fn print_dimensions(graph: &ActivityGraph, tight: bool, json: bool) -> Result<()> {
    let dims = if tight {
        graph.tight_dimensions()
    } else {
        Some(graph.dimensions())
    };
    let Some(dims) = dims else {
        bail!("activity map has no nodes");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dims)?);
    } else {
        println!("min: ({}, {})", dims.min_x, dims.min_y);
        println!("max: ({}, {})", dims.max_x, dims.max_y);
        println!("size: {} x {}", dims.width, dims.height);
    }
    Ok(())
}

fn run_check(graph: &ActivityGraph, json: bool) -> Result<()> {
    let report = check_graph(graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for edge in report.unresolved.iter() {
            println!(
                "unresolved connection #{}: {:?} -> {:?}{}{}",
                edge.index,
                edge.from,
                edge.to,
                if edge.from_missing { " (from missing)" } else { "" },
                if edge.to_missing { " (to missing)" } else { "" },
            );
        }
        for label in report.duplicates.iter() {
            println!("duplicate label: {:?}", label);
        }
        for cycle in report.cycles.iter() {
            println!("cycle: {}", cycle.join(", "));
        }
        for edge in report.upward_edges.iter() {
            println!(
                "note: connection {:?} -> {:?} may have a wrong order",
                edge.from, edge.to
            );
        }
        if report.is_ok() {
            println!("ok: {} activities, {} connections", graph.len(), graph.edges().len());
        }
    }

    if !report.is_ok() {
        bail!("activity map has integrity problems");
    }
    Ok(())
}
