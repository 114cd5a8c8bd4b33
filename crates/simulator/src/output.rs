use crate::shots::ShotCounts;
use statevec::{QuditError, Result};
use std::fs::File;
use std::io::{self, Write};

/// Write `counts` as `state,count` rows to `path`.
pub fn write_csv(path: &str, counts: &ShotCounts) -> Result<()> {
    write_rows(path, counts).map_err(|err| QuditError::output(path, err))
}

fn write_rows(path: &str, counts: &ShotCounts) -> io::Result<()> {
    let mut f = File::create(path)?;
    writeln!(f, "state,count")?;
    for (state, count) in &counts.counts {
        writeln!(f, "{},{}", state, count)?;
    }
    Ok(())
}
