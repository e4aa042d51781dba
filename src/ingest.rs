// src/ingest.rs
//! Batch ingestion: fan the uploaded files out over a small worker pool,
//! join on every completion, then hand back one batch in the original
//! selection order. The caller appends the whole batch to its collection in
//! a single operation: partial results never interleave, and a failed file
//! never aborts its siblings.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

use crate::{
    config::{consts::WORKERS, options::ExtractOptions},
    error::ExtractError,
    extract,
    model::TeamRecord,
    progress::Progress,
};

/// One uploaded file: name (for fallbacks and messages) plus its full text.
/// Reading from disk is the caller's concern.
pub struct SourceFile {
    pub name: String,
    pub html: String,
}

pub struct BatchOutcome {
    /// Extracted records, in the order the files were submitted.
    pub records: Vec<TeamRecord>,
    /// Per-file failures, same ordering rule.
    pub failures: Vec<(String, ExtractError)>,
}

pub fn collect_teams(
    files: Vec<SourceFile>,
    options: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> BatchOutcome {
    if files.is_empty() {
        return BatchOutcome {
            records: Vec::new(),
            failures: Vec::new(),
        };
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    type Slot = (usize, String, Result<TeamRecord, ExtractError>);

    let files = Arc::new(files);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Slot>();

    let workers = WORKERS.min(files.len()).max(1);

    // Spawn workers; each parses whole files independently.
    for _ in 0..workers {
        let files = Arc::clone(&files);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let opts = *options;

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= files.len() {
                    break;
                }
                let file = &files[i];
                let result = extract::parse_team_file(&file.html, &file.name, &opts);
                let _ = tx.send((i, file.name.clone(), result));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Join on ALL completions before anything is released to the caller.
    let mut slots: Vec<Slot> = Vec::with_capacity(files.len());
    for _ in 0..files.len() {
        match res_rx.recv() {
            Ok(slot) => {
                if let Some(p) = progress.as_deref_mut() {
                    match &slot.2 {
                        Ok(_) => p.item_done(&slot.1),
                        Err(_) => p.item_failed(&slot.1),
                    }
                }
                slots.push(slot);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Restore submission order; completion order is scheduling noise.
    slots.sort_by_key(|(i, _, _)| *i);

    let mut records = Vec::new();
    let mut failures = Vec::new();
    for (_, name, result) in slots {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("{name}: {e}");
                failures.push((name, e));
            }
        }
    }

    BatchOutcome { records, failures }
}

/// Append one completed batch to the caller's collection. The collection is
/// the caller's value; this is its only mutation per batch.
pub fn append_batch(collection: &mut Vec<TeamRecord>, batch: Vec<TeamRecord>) {
    collection.extend(batch);
}
