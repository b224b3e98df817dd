use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("source is required: pass a file path (\"-\" for stdin) or -e/--source")]
    Missing,
}

pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<String, LoadError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = path {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            return Ok(buf);
        }
        return fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.display().to_string(),
            source,
        });
    }

    Err(LoadError::Missing)
}
