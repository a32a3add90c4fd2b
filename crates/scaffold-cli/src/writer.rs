//! Artifact writer
//!
//! Places a rendered skeleton under an output directory, mirroring the
//! package as nested directories.

use scaffold_synth::SuitePlan;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes rendered skeletons below an output root
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    out: PathBuf,
}

impl ArtifactWriter {
    /// Create writer for output root
    #[inline]
    #[must_use]
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self { out: out.into() }
    }

    /// Get output root
    #[inline]
    #[must_use]
    pub fn out(&self) -> &Path {
        &self.out
    }

    /// `<out>/<package path>/<TestClass>.java`
    #[must_use]
    pub fn path_for(&self, plan: &SuitePlan) -> PathBuf {
        let mut path = self.out.clone();
        path.extend(plan.namespace.split('.').filter(|s| !s.is_empty()));
        path.push(format!("{}.java", plan.test_class));
        path
    }

    /// Render and write the plan, creating directories as needed
    ///
    /// # Errors
    /// Returns the underlying I/O error if a directory or the file cannot be
    /// written
    pub fn write(&self, plan: &SuitePlan) -> io::Result<PathBuf> {
        let path = self.path_for(plan);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, plan.render())?;

        tracing::debug!("Wrote {} cases to {}", plan.cases.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_decl::TargetType;
    use scaffold_synth::{Generator, GeneratorConfig};
    use scaffold_test_utils::widget_declaration;
    use tempfile::TempDir;

    fn widget_plan() -> SuitePlan {
        Generator::new(GeneratorConfig::new())
            .unwrap()
            .plan(&widget_declaration())
            .unwrap()
    }

    #[test]
    fn path_mirrors_package() {
        let writer = ArtifactWriter::new("/out");
        assert_eq!(
            writer.path_for(&widget_plan()),
            PathBuf::from("/out/ch/example/geometry/WidgetTest.java")
        );
    }

    #[test]
    fn default_package_writes_to_root() {
        let decl = scaffold_decl::Declaration::new(TargetType::new("", "Plain"));
        let plan = Generator::new(GeneratorConfig::new())
            .unwrap()
            .plan(&decl)
            .unwrap();
        assert_eq!(
            ArtifactWriter::new("/out").path_for(&plan),
            PathBuf::from("/out/PlainTest.java")
        );
    }

    #[test]
    fn write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(dir.path());
        let plan = widget_plan();

        let path = writer.write(&plan).unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), plan.render());
    }

    #[test]
    fn rewrite_replaces_previous_file() {
        let dir = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(dir.path());
        let plan = widget_plan();

        let path = writer.write(&plan).unwrap();
        fs::write(&path, "stale").unwrap();
        writer.write(&plan).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), plan.render());
    }
}
