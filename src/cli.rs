// src/cli.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail, eyre};

use crate::{
    config::options::{ExtractOptions, Variant},
    ingest::{self, SourceFile},
    model::TeamRecord,
    progress::Progress,
    report::{self, ScoutClient},
    store,
};

#[derive(Parser)]
#[command(
    name = "teamhub",
    version,
    about = "Extract exported FACEIT team pages into a local dashboard"
)]
pub struct Cli {
    /// Store blob location (default: .store/teamhub_pro_data.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract exported pages and append them to the stored collection
    Ingest {
        /// Exported .html team pages, in the order they should land
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Single-team variant: roster capped at 5, no season stats
        #[arg(long)]
        single: bool,
        /// Legacy global-list pairing of player sub-fields
        #[arg(long)]
        index_aligned: bool,
        /// Also generate an AI scouting report per new team
        #[arg(long)]
        report: bool,
    },
    /// List stored teams
    List,
    /// Render one team's dashboard
    Show { id: String },
    /// Generate and attach the AI scouting report
    Report { id: String },
    /// Remove a team from the collection
    Remove { id: String },
    /// Delete the persisted store
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let store_path = cli.store.unwrap_or_else(store::default_path);

    match cli.command {
        Command::Ingest {
            files,
            single,
            index_aligned,
            report,
        } => ingest_files(&store_path, &files, single, index_aligned, report),
        Command::List => list(&store_path),
        Command::Show { id } => show(&store_path, &id),
        Command::Report { id } => refresh_report(&store_path, &id),
        Command::Remove { id } => remove(&store_path, &id),
        Command::Clear => {
            store::clear(&store_path)?;
            println!("Store cleared.");
            Ok(())
        }
    }
}

/* ---------------- Ingest ---------------- */

struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, source: &str) {
        self.done += 1;
        println!("[{}/{}] {source}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, source: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] {source}: failed", self.done + self.failed, self.total);
    }
}

fn ingest_files(
    store_path: &Path,
    files: &[PathBuf],
    single: bool,
    index_aligned: bool,
    with_report: bool,
) -> Result<()> {
    let options = ExtractOptions {
        variant: if single { Variant::Single } else { Variant::Multi },
        index_aligned,
    };

    // Unreadable files are skipped the way unparseable ones are: siblings
    // keep going.
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        match fs::read_to_string(path) {
            Ok(html) => sources.push(SourceFile {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                html,
            }),
            Err(e) => eprintln!("skipped {}: {e}", path.display()),
        }
    }
    if sources.is_empty() {
        bail!("no readable input files");
    }

    let mut progress = ConsoleProgress {
        done: 0,
        failed: 0,
        total: 0,
    };
    let outcome = ingest::collect_teams(sources, &options, Some(&mut progress));

    for (name, e) in &outcome.failures {
        eprintln!("skipped {name}: {e}");
    }

    let mut batch = outcome.records;
    if with_report {
        match ScoutClient::from_env() {
            Ok(client) => {
                for team in &mut batch {
                    report::attach_report(team, &client);
                }
            }
            Err(e) => eprintln!("reports skipped: {e}"),
        }
    }

    let mut collection = store::load(store_path)?;
    let added = batch.len();
    ingest::append_batch(&mut collection, batch);
    store::save(store_path, &collection)?;

    println!("Added {added} team(s); {} stored.", collection.len());
    Ok(())
}

/* ---------------- Stored-collection commands ---------------- */

fn list(store_path: &Path) -> Result<()> {
    let collection = store::load(store_path)?;
    if collection.is_empty() {
        println!("No teams stored.");
        return Ok(());
    }
    for team in &collection {
        let record = team
            .stats
            .as_ref()
            .map(|s| format!("  {} / {}", s.wins, s.losses))
            .unwrap_or_default();
        println!(
            "{}  {} ({} players){record}",
            team.id,
            team.name,
            team.players.len()
        );
    }
    Ok(())
}

fn show(store_path: &Path, id: &str) -> Result<()> {
    let collection = store::load(store_path)?;
    let team = collection
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| eyre!("no team with id {id}"))?;
    print_team(team);
    Ok(())
}

fn refresh_report(store_path: &Path, id: &str) -> Result<()> {
    let mut collection = store::load(store_path)?;
    let client = ScoutClient::from_env()?;
    let team = collection
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| eyre!("no team with id {id}"))?;

    report::attach_report(team, &client);
    if let Some(text) = &team.ai_report {
        println!("{text}");
    }
    store::save(store_path, &collection)?;
    Ok(())
}

fn remove(store_path: &Path, id: &str) -> Result<()> {
    let mut collection = store::load(store_path)?;
    if !store::remove_team(&mut collection, id) {
        bail!("no team with id {id}");
    }
    store::save(store_path, &collection)?;
    println!("Removed {id}; {} stored.", collection.len());
    Ok(())
}

fn print_team(team: &TeamRecord) {
    println!("{}  [{}]", team.name, team.id);
    println!("{} • {}", team.region, team.league);

    println!("\nRoster ({}):", team.players.len());
    for p in &team.players {
        println!("  {}  Elo {}  [{} lvl {}]", p.nickname, p.elo, p.country, p.lvl);
    }

    if let Some(stats) = &team.stats {
        println!("\nSeason: {}  {}  •  {}", stats.wins, stats.losses, stats.position);
    }

    println!("\nUpcoming:");
    if team.matches.is_empty() {
        println!("  (no matches scheduled)");
    }
    for m in &team.matches {
        println!("  {} {}  vs {}", m.date, m.time, m.opponent);
    }

    if let Some(ai_report) = &team.ai_report {
        println!("\nScouting report:\n{ai_report}");
    }
}
