use std::{fs, io, path::Path};

use crate::pexels::SearchResult;

/// Writes `result` as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_result<P: AsRef<Path>>(path: P, result: &SearchResult) -> io::Result<()> {
    let content =
        serde_json::to_string_pretty(result).map_err(|err| Into::<io::Error>::into(err))?;

    fs::write(path, content)
}
