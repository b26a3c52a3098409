use tera::{Context, Tera};
use tracing::{info, warn};

use crate::course::{ingest, CourseData};
use crate::error::{IngestError, RenderError};
use crate::render::blocks::render_blocks;
use crate::render::registry::BlockRegistry;
use crate::render::templates::{engine, select_template, TemplateId};
use crate::resolve::{hero, legacy};

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
  Empty,
  Populated(CourseData),
}

impl PreviewState {
  pub fn course(&self) -> Option<&CourseData> {
    match self {
      Self::Empty => None,
      Self::Populated(course) => Some(course),
    }
  }
}

/// Renders a full page for `course` with the given design. Pure: the same
/// inputs always produce the same document.
pub fn render_page(course: &CourseData, template: TemplateId, tera: &Tera) -> Result<String, RenderError> {
  let mut ctx = Context::new();
  ctx.insert("titulo_curso", &course.titulo_curso);
  ctx.insert("template", template.as_str());
  ctx.insert("closing", &legacy::resolve_closing(course));

  // The legacy layout only lists blocks when the course carries a landing.
  let wants_blocks = template != TemplateId::Minimal || course.landing.is_some();
  let fragments = if wants_blocks {
    render_blocks(course.content_blocks(), &BlockRegistry::for_template(template), tera)?
  } else {
    Vec::new()
  };
  ctx.insert("fragments", &fragments);

  match template {
    TemplateId::Minimal => ctx.insert("minimal", &legacy::resolve_minimal(course)),
    TemplateId::Premium => {
      ctx.insert("hero", &hero::resolve_course(course));
      ctx.insert("premium", &legacy::resolve_premium(course.landing.as_ref()));
    }
    TemplateId::DatabaseFigma => ctx.insert("hero", &hero::resolve_figma(course.overview())),
    TemplateId::DatabaseCourse => {
      ctx.insert("hero", &hero::resolve_course(course));
      ctx.insert("progress", &legacy::resolve_progress(course));
    }
    TemplateId::DatabaseJose => ctx.insert("hero", &hero::resolve_jose(course.overview())),
  }

  tera
    .render(template.layout(), &ctx)
    .map_err(|e| RenderError::template(template.layout(), e))
}

/// Neutral page shown before any course has been accepted.
pub fn render_placeholder(tera: &Tera) -> Result<String, RenderError> {
  tera
    .render("layouts/placeholder.html", &Context::new())
    .map_err(|e| RenderError::template("layouts/placeholder.html", e))
}

/// Single owner of the editable input, the selected design and the accepted
/// course. Everything below it only reads.
#[derive(Debug)]
pub struct CourseBuilder {
  raw: String,
  template: TemplateId,
  state: PreviewState,
  last_error: Option<IngestError>,
  tera: Tera,
}

impl CourseBuilder {
  pub fn new(template: TemplateId) -> Result<Self, RenderError> {
    Ok(Self {
      raw: String::new(),
      template,
      state: PreviewState::Empty,
      last_error: None,
      tera: engine()?,
    })
  }

  /// Ingests `raw`. On failure the previous preview stays as it was.
  pub fn submit(&mut self, raw: &str) -> Result<&CourseData, IngestError> {
    self.raw = raw.to_string();
    let course = ingest(raw).map_err(|err| {
      warn!(error = %err, "submission rejected, keeping previous preview");
      self.last_error = Some(err.clone());
      err
    })?;
    self.last_error = None;
    self.state = PreviewState::Populated(course);
    let PreviewState::Populated(course) = &self.state else {
      return Err(IngestError::Shape("accepted course was not retained".to_string()));
    };
    Ok(course)
  }

  pub fn select_template(&mut self, id: &str) -> TemplateId {
    self.template = select_template(id);
    self.template
  }

  pub fn set_template(&mut self, template: TemplateId) {
    self.template = template;
  }

  pub fn template(&self) -> TemplateId {
    self.template
  }

  pub fn state(&self) -> &PreviewState {
    &self.state
  }

  pub fn raw(&self) -> &str {
    &self.raw
  }

  pub fn last_error(&self) -> Option<&IngestError> {
    self.last_error.as_ref()
  }

  pub fn render(&self) -> Result<String, RenderError> {
    match &self.state {
      PreviewState::Empty => render_placeholder(&self.tera),
      PreviewState::Populated(course) => {
        info!(template = self.template.as_str(), "rendering preview");
        render_page(course, self.template, &self.tera)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::IngestErrorKind;

  const VALID: &str = r#"{"tituloCurso":"X","intro":"Y","secciones":[],"resumen":"Z"}"#;

  #[test]
  fn empty_state_renders_placeholder() {
    let builder = CourseBuilder::new(TemplateId::DEFAULT).expect("builder");
    let html = builder.render().expect("render");
    assert!(html.contains("Pega un JSON válido"));
    assert_eq!(builder.state(), &PreviewState::Empty);
  }

  #[test]
  fn failed_submit_keeps_previous_course() {
    let mut builder = CourseBuilder::new(TemplateId::DEFAULT).expect("builder");
    builder.submit(VALID).expect("valid");
    let before = builder.render().expect("render");

    let err = builder.submit("not json").expect_err("syntax");
    assert_eq!(err.kind(), IngestErrorKind::Syntax);
    let err = builder.submit(r#"{"foo":1}"#).expect_err("shape");
    assert_eq!(err.kind(), IngestErrorKind::Shape);
    assert_eq!(builder.last_error().map(IngestError::kind), Some(IngestErrorKind::Shape));
    assert_eq!(builder.raw(), r#"{"foo":1}"#);

    assert_eq!(builder.render().expect("render"), before);
    assert_eq!(builder.state().course().map(|c| c.titulo_curso.as_str()), Some("X"));
  }

  #[test]
  fn success_clears_last_error() {
    let mut builder = CourseBuilder::new(TemplateId::Minimal).expect("builder");
    let _ = builder.submit("{");
    assert!(builder.last_error().is_some());
    builder.submit(VALID).expect("valid");
    assert!(builder.last_error().is_none());
  }

  #[test]
  fn accepted_course_is_returned_and_retained() {
    let mut builder = CourseBuilder::new(TemplateId::DEFAULT).expect("builder");
    let titulo = builder.submit(VALID).expect("valid").titulo_curso.clone();
    assert_eq!(titulo, "X");
    assert_eq!(builder.state().course().map(|c| c.titulo_curso.as_str()), Some("X"));
    assert_eq!(builder.raw(), VALID);
  }

  #[test]
  fn unknown_template_id_falls_back() {
    let mut builder = CourseBuilder::new(TemplateId::Minimal).expect("builder");
    assert_eq!(builder.select_template("googleStudio"), TemplateId::DEFAULT);
    assert_eq!(builder.template(), TemplateId::DEFAULT);
  }
}
