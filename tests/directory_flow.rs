//! End-to-end flow: import a CSV, browse, merge a subject, rebuild the graph.

use pressregister::{
    import_csv, Directory, DirectoryError, DirectoryStore, ImportSummary, OpenStore, SearchMode,
    SqliteStore, StoreError, SubjectGraph, TagError,
};
use std::io::Write;

const HEADER: &str = "Namn,Kategori,Ämnesområden,Typiska Plattformar,Analys av Position";

fn write_fixture_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let csv = format!(
        "{HEADER}\n\
         Anna Lindqvist,Politik,\"Politik, Ekonomi\",Dagens Nyheter,Bevakar riksdagen och public service\n\
         Björn Åkesson,Miljö,\"Miljö, Klimat.\",Sveriges Radio,Liberal profil inom klimatfrågor\n\
         ,Kultur,Teater,SvD,Raden saknar namn\n\
         Cecilia Öberg,Media,\"Public service, Granskning\",SVT,Granskar mediebranschen\n"
    );
    let path = dir.path().join("journalists.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(csv.as_bytes()).unwrap();
    path
}

#[test]
fn import_browse_merge_and_graph() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = write_fixture_csv(&dir);
    let db_path = dir.path().join("journalists.db");

    // Import replaces the (empty) table and reports the drop.
    let store = SqliteStore::open(&db_path).unwrap();
    let summary = import_csv(&csv_path, &store).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            read: 4,
            dropped: 1,
            written: 3
        }
    );

    let directory = Directory::new(store);

    // Browse: full scan and substring search over both text columns.
    let all = directory.scan().unwrap();
    assert_eq!(all.len(), 3);

    let hits = directory.search("public service").unwrap();
    assert_eq!(hits.len(), 2); // Anna's analysis + Cecilia's subjects

    assert!(directory.search("").unwrap().is_empty());
    assert!(directory.search("kryptozoologi").unwrap().is_empty());

    // Merge a tag and observe it on the very next read.
    let anna = all.iter().find(|r| r.name == "Anna Lindqvist").unwrap();
    let merged = directory.add_subject(anna.id, "Miljö").unwrap();
    assert_eq!(merged, "Politik, Ekonomi, Miljö");

    let rescanned = directory.scan().unwrap();
    let anna_after = rescanned.iter().find(|r| r.id == anna.id).unwrap();
    assert_eq!(anna_after.subjects, "Politik, Ekonomi, Miljö");

    // Second merge of the same tag in a different case is rejected.
    match directory.add_subject(anna.id, "miljö") {
        Err(DirectoryError::Tag(TagError::AlreadyExists(_))) => {}
        other => panic!("expected AlreadyExists, got {:?}", other),
    }

    // The graph picks up the merged tag: Miljö now links two journalists.
    let graph = directory.graph().unwrap();
    assert_eq!(graph.journalist_count(), 3);
    let miljo_edges = graph
        .edges
        .iter()
        .filter(|e| e.subject == "Miljö")
        .count();
    assert_eq!(miljo_edges, 2);
}

#[test]
fn identifiers_stay_stable_across_process_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = write_fixture_csv(&dir);
    let db_path = dir.path().join("journalists.db");

    let bjorn_id = {
        let store = SqliteStore::open(&db_path).unwrap();
        import_csv(&csv_path, &store).unwrap();
        let directory = Directory::new(store);
        directory
            .scan()
            .unwrap()
            .iter()
            .find(|r| r.name == "Björn Åkesson")
            .unwrap()
            .id
    };

    // A fresh process (fresh store, fresh cache) resolves the same id to
    // the same record.
    let store = SqliteStore::open(&db_path).unwrap();
    let directory = Directory::new(store);
    let bjorn = directory.store().get(bjorn_id).unwrap().unwrap();
    assert_eq!(bjorn.name, "Björn Åkesson");
    assert_eq!(bjorn.subjects, "Miljö, Klimat.");
}

#[test]
fn case_sensitive_mode_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = write_fixture_csv(&dir);
    let db_path = dir.path().join("journalists.db");

    let store = SqliteStore::open(&db_path).unwrap();
    import_csv(&csv_path, &store).unwrap();
    drop(store);

    let sensitive = SqliteStore::open(&db_path)
        .unwrap()
        .with_search_mode(SearchMode::CaseSensitive);
    assert!(sensitive.search("politik").unwrap().is_empty());
    assert_eq!(sensitive.search("Politik").unwrap().len(), 1);
}

#[test]
fn first_run_degrades_to_schema_missing_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("fresh.db");

    let store = SqliteStore::open(&db_path).unwrap();
    let directory = Directory::new(store);

    match directory.scan() {
        Err(StoreError::SchemaMissing(_)) => {}
        other => panic!("expected SchemaMissing, got {:?}", other),
    }
    match directory.search("politik") {
        Err(StoreError::SchemaMissing(_)) => {}
        other => panic!("expected SchemaMissing, got {:?}", other),
    }

    // An empty record set still builds an empty graph for the front end.
    let graph = SubjectGraph::build(&[]);
    assert_eq!(graph.node_count(), 0);
}
