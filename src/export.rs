use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use eframe::egui::ColorImage;

use crate::data::model::TrajectoryTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the table to a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `t,x,y,z`, one record per sample
/// * `.json` – `[{ "t": .., "x": .., "y": .., "z": .. }, ...]`
pub fn export_to(table: &TrajectoryTable, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || -> Result<BufWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        Ok(BufWriter::new(file))
    };

    match ext.as_str() {
        "csv" => write_csv(table, open()?),
        "json" => write_json(table, open()?),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Table writers
// ---------------------------------------------------------------------------

pub fn write_csv<W: Write>(table: &TrajectoryTable, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for sample in table.samples() {
        writer.serialize(sample).context("writing CSV record")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

pub fn write_json<W: Write>(table: &TrajectoryTable, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, table.samples()).context("writing JSON")?;
    out.flush().context("flushing JSON")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Screenshot
// ---------------------------------------------------------------------------

/// Encode an egui screenshot as PNG.
pub fn save_png(image: &ColorImage, path: &Path) -> Result<()> {
    let [width, height] = image.size;
    let rgba: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .context("screenshot buffer does not match its size")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TrajectorySample;
    use eframe::egui::Color32;

    fn table() -> TrajectoryTable {
        TrajectoryTable::from_samples(vec![
            TrajectorySample::new(0.0, 0.0, 0.0, 0.0),
            TrajectorySample::new(0.1, 1.0, 0.98, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn csv_has_header_and_rows_in_order() {
        let mut buf = Vec::new();
        write_csv(&table(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["t,x,y,z", "0.0,0.0,0.0,0.0", "0.1,1.0,0.98,0.0"]);
    }

    #[test]
    fn json_is_records_oriented() {
        let mut buf = Vec::new();
        write_json(&table(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["y"].as_f64(), Some(0.98));
        assert_eq!(records[1]["t"].as_f64(), Some(0.1));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_to(&table(), &dir.path().join("out.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn png_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        let image = ColorImage::new([4, 3], Color32::from_rgb(30, 30, 46));
        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0).0, [30, 30, 46, 255]);
    }
}
