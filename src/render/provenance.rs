use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::course::CourseData;
use crate::error::RenderError;
use crate::render::helpers::{provenance_path, write_string};
use crate::render::templates::TemplateId;
use crate::util::hash::sha256_hex;

/// Sidecar record describing how a page was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub input_sha256: String,
    pub titulo_curso: String,
    pub template: String,
    pub block_count: usize,
    pub generator_version: String,
    pub generated_at: String,
}

impl Provenance {
    pub fn new(raw: &str, course: &CourseData, template: TemplateId) -> Self {
        Self {
            input_sha256: sha256_hex(raw.as_bytes()),
            titulo_curso: course.titulo_curso.clone(),
            template: template.as_str().to_string(),
            block_count: course.content_blocks().len(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Writes `<out>.provenance.json` and returns its path.
pub fn write_provenance(out: &Path, provenance: &Provenance) -> Result<PathBuf, RenderError> {
    let path = provenance_path(out);
    let json = serde_json::to_string_pretty(provenance)?;
    write_string(&path, &json).map_err(RenderError::Io)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::ingest;
    use uuid::Uuid;

    #[test]
    fn records_hash_template_and_block_count() {
        let raw = r#"{"tituloCurso":"BD","landing":{"contentBlocks":[{"tipo":"sqlBasics"},{"tipo":"x"}]}}"#;
        let course = ingest(raw).expect("course");
        let record = Provenance::new(raw, &course, TemplateId::DatabaseCourse);
        assert_eq!(record.input_sha256, sha256_hex(raw.as_bytes()));
        assert_eq!(record.block_count, 2);
        assert_eq!(record.template, "databaseCourse");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.generated_at).is_ok());
    }

    #[test]
    fn sidecar_round_trips_from_disk() {
        let tmp = std::env::temp_dir().join(format!("provenance-test-{}", Uuid::new_v4()));
        let out = tmp.join("curso.html");
        let course = ingest(r#"{"tituloCurso":"BD","secciones":[]}"#).expect("course");
        let record = Provenance::new("{}", &course, TemplateId::Minimal);
        let path = write_provenance(&out, &record).expect("write");
        let stored: Provenance =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(stored, record);
        let _ = std::fs::remove_dir_all(tmp);
    }
}
