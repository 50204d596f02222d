//! CSV export and default file naming.

use std::io::{self, Write};
use std::path::Path;

use crate::data::datasets::Datasets;

/// Write all datasets as `dataset,x,y` rows.
///
/// The dataset column holds the display name at export time; datasets that
/// share a name become indistinguishable in the output.
pub fn write_csv<W: Write>(w: &mut W, datasets: &Datasets) -> io::Result<()> {
    // header
    writeln!(w, "dataset,x,y")?;
    for ds in datasets.iter() {
        for p in ds.points.iter() {
            writeln!(w, "{},{},{}", ds.name, p[0], p[1])?;
        }
    }
    Ok(())
}

/// Write the CSV export to a file at the given path.
pub fn write_csv_path<P: AsRef<Path>>(path: P, datasets: &Datasets) -> io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    write_csv(&mut f, datasets)
}

/// Reduce a project title to a safe file stem.
///
/// Everything outside `[A-Za-z0-9_.-]` becomes `_`, runs of `_` collapse,
/// and leading or trailing `_`/`.` are trimmed.
pub fn sanitize_file_stem(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches(|c| c == '_' || c == '.').to_string()
}

/// Default export file stem: the sanitized title, or a timestamp when the
/// title sanitizes away to nothing.
pub fn default_file_stem(title: &str) -> String {
    let stem = sanitize_file_stem(title);
    if stem.is_empty() {
        format!("digitized_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        stem
    }
}
