//! Pressregister CLI: journalist directory over SQLite.
//!
//! Usage:
//!   pressregister import <csv> [--db path]
//!   pressregister list [--db path]
//!   pressregister search <term> [--case-sensitive] [--db path]
//!   pressregister add-subject <id> <tag> [--db path]
//!   pressregister graph [--db path]

use clap::{Parser, Subcommand};
use pressregister::{
    import_csv, Directory, DirectoryError, OpenStore, Record, RecordId, SearchMode, SqliteStore,
    StoreError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pressregister",
    version,
    about = "Journalist directory with a subject-tag graph"
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the database contents from a CSV export
    Import {
        /// Path to the CSV source file
        source: PathBuf,
    },
    /// List every journalist
    List,
    /// Search the subjects and analysis text
    Search {
        /// Substring to look for
        term: String,
        /// Match case exactly instead of folding it
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Merge a new subject tag into one journalist's subjects
    AddSubject {
        /// Stable record identifier (see `list`)
        id: i64,
        /// Subject tag to merge
        tag: String,
    },
    /// Print the journalist-to-subject graph as JSON
    Graph,
}

/// Default database path (~/.local/share/pressregister/journalists.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("pressregister").join("journalists.db")
}

fn open_directory(
    db: Option<PathBuf>,
    mode: SearchMode,
) -> Result<Directory<SqliteStore>, String> {
    let db_path = db.unwrap_or_else(default_db_path);
    let store = SqliteStore::open(&db_path)
        .map_err(|e| format!("Failed to open database: {}", e))?
        .with_search_mode(mode);
    Ok(Directory::new(store))
}

fn print_record(record: &Record) {
    println!("[{}] {}", record.id, record.name);
    if let Some(category) = &record.category {
        println!("    Kategori:  {}", category);
    }
    println!("    Ämnen:     {}", record.subjects);
    if let Some(platforms) = &record.platforms {
        println!("    Plattform: {}", platforms);
    }
    if let Some(analysis) = &record.analysis {
        println!("    Analys:    {}", analysis);
    }
}

/// Read-path degradation: show the diagnostic and an empty listing
/// instead of failing the session.
fn print_listing(result: Result<Vec<Record>, StoreError>, heading: &str) -> i32 {
    let records = match result {
        Ok(records) => records,
        Err(e @ (StoreError::SchemaMissing(_) | StoreError::Unavailable(_))) => {
            eprintln!("Warning: {}", e);
            Vec::new()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    println!("{}: {}", heading, records.len());
    for record in &records {
        print_record(record);
    }
    0
}

fn cmd_import(directory: &Directory<SqliteStore>, source: &PathBuf) -> i32 {
    match import_csv(source, directory.store()) {
        Ok(summary) => {
            println!(
                "Imported {} rows ({} read, {} dropped)",
                summary.written, summary.read, summary.dropped
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_list(directory: &Directory<SqliteStore>) -> i32 {
    print_listing(directory.scan(), "Journalists")
}

fn cmd_search(directory: &Directory<SqliteStore>, term: &str) -> i32 {
    print_listing(directory.search(term), &format!("Matches for '{}'", term))
}

fn cmd_add_subject(directory: &Directory<SqliteStore>, id: i64, tag: &str) -> i32 {
    match directory.add_subject(RecordId::new(id), tag) {
        Ok(merged) => {
            println!("Updated subjects for record {}: {}", id, merged);
            0
        }
        Err(DirectoryError::Tag(e)) => {
            eprintln!("Rejected: {}", e);
            1
        }
        Err(DirectoryError::Store(e)) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_graph(directory: &Directory<SqliteStore>) -> i32 {
    let graph = match directory.graph() {
        Ok(graph) => graph,
        Err(e @ (StoreError::SchemaMissing(_) | StoreError::Unavailable(_))) => {
            eprintln!("Warning: {}", e);
            Default::default()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match serde_json::to_string_pretty(&graph) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = match &cli.command {
        Commands::Search {
            case_sensitive: true,
            ..
        } => SearchMode::CaseSensitive,
        _ => SearchMode::default(),
    };

    let directory = match open_directory(cli.db, mode) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Import { source } => cmd_import(&directory, &source),
        Commands::List => cmd_list(&directory),
        Commands::Search { term, .. } => cmd_search(&directory, &term),
        Commands::AddSubject { id, tag } => cmd_add_subject(&directory, id, &tag),
        Commands::Graph => cmd_graph(&directory),
    };
    std::process::exit(code);
}
