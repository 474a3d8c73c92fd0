use std::fs::File;

use anyhow::Result;
use simplelog::{Config, LevelFilter, WriteLogger};

use serpent::app;
use serpent::config::project_paths;
use serpent::storage::{FileStore, KeyValueStore, MemoryStore};

fn main() -> Result<()> {
    let store: Box<dyn KeyValueStore> = match project_paths() {
        Ok(paths) => {
            // stdout belongs to the raw-mode UI, so logs go to a file
            if let Ok(file) = File::create(&paths.log_path) {
                let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
            }
            Box::new(FileStore::open(paths.scores_path))
        }
        Err(err) => {
            eprintln!(
                "warning: no data directory, scores will not persist ({:#})",
                err
            );
            Box::new(MemoryStore::default())
        }
    };

    app::run(store)
}
