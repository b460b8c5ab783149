use skirun_core::config::StoreConfig;
use skirun_core::ski_run::{SkiRun, SkiRunRepository};
use skirun_infrastructure::{ConfigService, XmlSkiRunRepository};
use std::fs;
use tempfile::TempDir;

const LEGACY_DOCUMENT: &str = r#"<?xml version="1.0"?>
<SkiRuns xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <SkiRun>
    <ID>1</ID>
    <Name>Buttermilk</Name>
    <Vertical>1000</Vertical>
  </SkiRun>
  <SkiRun>
    <ID>2</ID>
    <Name>Highlands Bowl</Name>
    <Vertical>2000</Vertical>
  </SkiRun>
</SkiRuns>
"#;

fn write_legacy(temp_dir: &TempDir) -> StoreConfig {
    let path = temp_dir.path().join("ski_runs.xml");
    fs::write(&path, LEGACY_DOCUMENT).unwrap();
    StoreConfig::new(path)
}

fn ids(runs: &[SkiRun]) -> Vec<i32> {
    runs.iter().map(|run| run.id).collect()
}

#[test]
fn test_crud_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_legacy(&temp_dir);
    let mut store = XmlSkiRunRepository::open(config.clone()).unwrap();

    store.insert(SkiRun::new(3, "Ruthie's", 1500)).unwrap();
    assert_eq!(ids(&store.get_all().unwrap()), vec![1, 2, 3]);

    assert_eq!(
        store.query_by_vertical(1200, 1800).unwrap(),
        vec![SkiRun::new(3, "Ruthie's", 1500)]
    );

    store.delete_by_id(2).unwrap();
    assert_eq!(ids(&store.get_all().unwrap()), vec![1, 3]);

    store.update(SkiRun::new(1, "Buttermilk", 3000)).unwrap();
    assert_eq!(
        store.get_all().unwrap(),
        vec![
            SkiRun::new(3, "Ruthie's", 1500),
            SkiRun::new(1, "Buttermilk", 3000),
        ]
    );

    // A fresh store sees exactly what the first one wrote
    store.dispose();
    let reopened = XmlSkiRunRepository::open(config).unwrap();
    assert_eq!(ids(&reopened.get_all().unwrap()), vec![3, 1]);
    assert_eq!(reopened.get_by_id(1).unwrap().unwrap().vertical, 3000);
    assert_eq!(reopened.get_by_id(2).unwrap(), None);
}

#[test]
fn test_round_trip_preserves_order_and_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ski_runs.xml");
    XmlSkiRunRepository::initialize(&path).unwrap();

    let runs = vec![
        SkiRun::new(9, "Walsh's", 1800),
        SkiRun::new(-1, "Lift Line", 0),
        SkiRun::new(4, "Jack & Jill <upper>", -250),
        SkiRun::new(9, "Walsh's", 1800),
    ];

    let mut store = XmlSkiRunRepository::open(StoreConfig::new(&path)).unwrap();
    for run in &runs {
        store.insert(run.clone()).unwrap();
    }

    assert_eq!(XmlSkiRunRepository::load(&path).unwrap(), runs);
}

#[test]
fn test_store_resolved_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[store]\ndata_file = \"data/ski_runs.xml\"\n").unwrap();

    let store_config = ConfigService::with_path(&config_path)
        .resolve_store_config(None)
        .unwrap();
    assert!(XmlSkiRunRepository::initialize(store_config.data_file()).unwrap());

    let mut store = XmlSkiRunRepository::open(store_config).unwrap();
    store.insert(SkiRun::new(1, "Buttermilk", 1000)).unwrap();

    let on_disk = XmlSkiRunRepository::load(&temp_dir.path().join("data").join("ski_runs.xml"))
        .unwrap();
    assert_eq!(on_disk, vec![SkiRun::new(1, "Buttermilk", 1000)]);
}

#[test]
fn test_independent_stores_last_writer_wins() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_legacy(&temp_dir);
    let mut first = XmlSkiRunRepository::open(config.clone()).unwrap();
    let mut second = XmlSkiRunRepository::open(config.clone()).unwrap();

    first.insert(SkiRun::new(3, "From first", 100)).unwrap();
    second.delete_by_id(1).unwrap();

    let on_disk = XmlSkiRunRepository::load(config.data_file()).unwrap();
    assert_eq!(ids(&on_disk), vec![2]);
}
