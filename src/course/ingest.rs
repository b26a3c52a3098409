use serde_json::Value;
use tracing::{debug, info};

use crate::error::IngestError;

use super::types::CourseData;

/// Parses raw course JSON and applies the shallow shape check.
///
/// A document is accepted when it is an object with a non-blank
/// `tituloCurso` and either a `secciones` entry or a `landing` object.
pub fn ingest(raw: &str) -> Result<CourseData, IngestError> {
  let parsed: Value = serde_json::from_str(raw).map_err(|e| {
    debug!(error = %e, "course JSON rejected by parser");
    IngestError::Syntax(e.to_string())
  })?;
  check_shape(&parsed)?;

  let course: CourseData = serde_json::from_value(parsed)
    .map_err(|e| IngestError::Shape(format!("field has an unexpected type: {e}")))?;
  info!(
    titulo = %course.titulo_curso,
    secciones = course.secciones.as_ref().map_or(0, Vec::len),
    blocks = course.content_blocks().len(),
    "course JSON accepted"
  );
  Ok(course)
}

fn check_shape(value: &Value) -> Result<(), IngestError> {
  let root = value
    .as_object()
    .ok_or_else(|| IngestError::Shape(format!("expected an object at the top level, found {}", type_name(value))))?;

  let has_title = root
    .get("tituloCurso")
    .and_then(Value::as_str)
    .map(|t| !t.trim().is_empty())
    .unwrap_or(false);
  if !has_title {
    return Err(IngestError::Shape("missing or empty tituloCurso".to_string()));
  }

  let has_sections = root.get("secciones").map(|v| !v.is_null()).unwrap_or(false);
  let has_landing = root.get("landing").map(Value::is_object).unwrap_or(false);
  if !has_sections && !has_landing {
    return Err(IngestError::Shape("expected secciones or a landing object".to_string()));
  }
  Ok(())
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use super::ingest;
  use crate::course::block::BlockKind;
  use crate::error::IngestErrorKind;

  #[test]
  fn accepts_classic_sections_document() {
    let raw = r#"{"tituloCurso":"X","intro":"Y","secciones":[],"resumen":"Z"}"#;
    let course = ingest(raw).expect("ingest");
    assert_eq!(course.titulo_curso, "X");
    assert_eq!(course.intro.as_deref(), Some("Y"));
    assert!(course.landing.is_none());
  }

  #[test]
  fn accepts_landing_without_secciones() {
    let raw = r#"{
      "tituloCurso": "Bases de Datos",
      "landing": {
        "overview": {"titulo": "BD", "texto": "Curso"},
        "contentBlocks": [{"tipo": "introduction", "titulo": "Intro"}, {"tipo": "mystery"}]
      }
    }"#;
    let course = ingest(raw).expect("ingest");
    let blocks = course.content_blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].tipo, BlockKind::Introduction);
    assert_eq!(blocks[1].tipo, BlockKind::Other("mystery".to_string()));
  }

  #[test]
  fn rejects_bad_syntax_and_empty_input() {
    for raw in ["not json", "", "{\"tituloCurso\": "] {
      let err = ingest(raw).expect_err("should fail");
      assert_eq!(err.kind(), IngestErrorKind::Syntax, "input {raw:?}");
    }
  }

  #[test]
  fn rejects_wrong_shapes() {
    let cases = [
      r#"{"foo":1}"#,
      r#"[1, 2, 3]"#,
      r#""a string""#,
      r#"{"tituloCurso":"","secciones":[]}"#,
      r#"{"tituloCurso":"   ","secciones":[]}"#,
      r#"{"tituloCurso":"X"}"#,
      r#"{"tituloCurso":"X","secciones":null}"#,
      r#"{"tituloCurso":"X","landing":[]}"#,
      r#"{"tituloCurso":42,"secciones":[]}"#,
    ];
    for raw in cases {
      let err = ingest(raw).expect_err("should fail");
      assert_eq!(err.kind(), IngestErrorKind::Shape, "input {raw}");
      assert!(err.to_string().contains("unexpected JSON shape"));
    }
  }

  #[test]
  fn wrongly_typed_nested_field_is_a_shape_error() {
    let raw = r#"{"tituloCurso":"X","landing":{"contentBlocks":[{"tipo":"introduction","bullets":"one"}]}}"#;
    let err = ingest(raw).expect_err("should fail");
    assert_eq!(err.kind(), IngestErrorKind::Shape);
  }

  #[test]
  fn null_block_tag_goes_to_fallback_kind() {
    let raw = r#"{"tituloCurso":"X","landing":{"contentBlocks":[{"tipo":null,"titulo":"a"},{"titulo":"b"}]}}"#;
    let course = ingest(raw).expect("null tipo accepted");
    let blocks = course.content_blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].tipo, BlockKind::Other(String::new()));
    assert_eq!(blocks[0].titulo.as_deref(), Some("a"));
    assert!(!blocks[1].tipo.is_known());
  }
}
