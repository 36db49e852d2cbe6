use std::io;
use std::path::Path;

use crate::domain::Job;

const PRIMARY_SUFFIX: &str = ".txt";
const RESTORED_SUFFIX: &str = ".sync.txt";

/// Builds jobs from a newline-delimited listing of input paths.
///
/// `dir/name.wav` maps to `<out_dir>/name.txt` and, when `with_restored` is
/// set, `<out_dir>/name.sync.txt`. Blank lines are skipped.
pub fn parse_listing(contents: &str, out_dir: &Path, with_restored: bool) -> Vec<Job> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let input = Path::new(line);
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| line.to_string());

            let output = out_dir.join(format!("{}{}", stem, PRIMARY_SUFFIX));
            let restored = with_restored.then(|| out_dir.join(format!("{}{}", stem, RESTORED_SUFFIX)));
            Job::new(input, output, restored)
        })
        .collect()
}

pub fn load_listing(path: &Path, out_dir: &Path, with_restored: bool) -> io::Result<Vec<Job>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_listing(&contents, out_dir, with_restored))
}
