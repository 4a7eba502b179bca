use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use projectile_viewer::data::loader::default_data_path;
use projectile_viewer::sample::{last_time_above_one, write_log, LevelThree};

fn main() -> Result<()> {
    env_logger::init();

    let output_path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => default_data_path().context("locating data directory")?,
    };
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let steps = LevelThree::default().simulate();

    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    write_log(&steps, BufWriter::new(file))
        .with_context(|| format!("writing {}", output_path.display()))?;

    log::info!(
        "last time above 1 m/s was {:.2}",
        last_time_above_one(&steps)
    );
    println!(
        "Wrote {} trajectory samples to {}",
        steps.len(),
        output_path.display()
    );
    Ok(())
}
