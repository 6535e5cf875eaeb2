use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// The three file paths a compilation touches, all siblings of the
/// source file and named after its stem (`foo.c` -> `foo.i`, `foo.s`,
/// `foo`).
pub struct CompilationPaths {
    pub preprocessed: PathBuf,
    pub assembly: PathBuf,
    pub binary: PathBuf,
}

impl CompilationPaths {
    pub fn derive(source: &Path) -> Result<Self> {
        let Some(extension) = source.extension() else {
            bail!("expected a source file ending in `.c`, got {}", source.display());
        };
        if extension != "c" {
            bail!("expected a source file ending in `.c`, got {}", source.display());
        }

        let stem = source
            .file_stem()
            .expect("a path with a `.c` extension always has a stem")
            .to_string_lossy()
            .into_owned();
        let parent = source.parent().unwrap_or_else(|| Path::new(""));

        Ok(Self {
            preprocessed: parent.join(format!("{stem}.i")),
            assembly: parent.join(format!("{stem}.s")),
            binary: parent.join(stem),
        })
    }
}

/// Deletes the wrapped path when dropped, ignoring a missing file.
/// Used for the preprocessed `.i` and generated `.s` files so they are
/// cleaned up on every exit path out of the pipeline, success or
/// error, without needing a cleanup call at each `?`.
pub struct CleanupOnDrop(pub PathBuf);

impl Drop for CleanupOnDrop {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sibling_paths_from_the_source_stem() {
        let paths = CompilationPaths::derive(Path::new("/tmp/demo/prog.c")).unwrap();
        assert_eq!(paths.preprocessed, Path::new("/tmp/demo/prog.i"));
        assert_eq!(paths.assembly, Path::new("/tmp/demo/prog.s"));
        assert_eq!(paths.binary, Path::new("/tmp/demo/prog"));
    }

    #[test]
    fn rejects_a_non_c_extension() {
        assert!(CompilationPaths::derive(Path::new("prog.txt")).is_err());
        assert!(CompilationPaths::derive(Path::new("prog")).is_err());
    }
}
