use crate::sweep::SweepPoint;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "channel,strength,tick,purity,rmag,p0";

pub fn write_rows<W: Write>(mut w: W, rows: &[SweepPoint]) -> io::Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for r in rows {
        writeln!(
            w,
            "{},{},{},{},{},{}",
            r.channel, r.strength, r.tick, r.purity, r.rmag, r.p0
        )?;
    }
    w.flush()
}

pub fn write_csv(path: impl AsRef<Path>, rows: &[SweepPoint]) -> io::Result<()> {
    let f = File::create(path)?;
    write_rows(BufWriter::new(f), rows)
}
