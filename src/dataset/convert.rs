use std::io::{BufReader, BufWriter, Write};
use std::time::Instant;

use log::info;

use super::{create, open};
use crate::codec::{pack_stream, skip_header, PackStats};
use crate::config::Config;
use crate::error::Result;

// Pack mode: training images then test images, headers skipped, into one packed file.
// Both sources are opened before the packed file is created, so a missing
// source leaves any existing packed file alone. Every handle is dropped
// (closed) on the way out, error or not.
pub fn convert(config: &Config) -> Result<PackStats> {
    let sources = config
        .sources()
        .into_iter()
        .map(|path| open(path).map(|file| (path, file)))
        .collect::<Result<Vec<_>>>()?;

    let mut writer = BufWriter::new(create(&config.packed)?);
    let mut total = PackStats::default();
    for (path, file) in sources {
        let now = Instant::now();
        let mut reader = BufReader::new(file);
        skip_header(&mut reader, config.header_len)?;
        let stats = pack_stream(&mut reader, &mut writer, config.threshold)?;
        info!(
            "Packed {} images from {} [{}ms]",
            stats.images(),
            path.display(),
            now.elapsed().as_millis()
        );
        total += stats;
    }
    writer.flush()?;
    Ok(total)
}
