use serde::Serialize;
use strsim::normalized_levenshtein;
use tera::Tera;
use tracing::{debug, warn};

use crate::error::RenderError;
use crate::util::text::normalize_token;

/// Visual designs a course can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateId {
  Minimal,
  Premium,
  DatabaseFigma,
  DatabaseCourse,
  DatabaseJose,
}

impl TemplateId {
  pub const ALL: &'static [TemplateId] = &[
    TemplateId::Minimal,
    TemplateId::Premium,
    TemplateId::DatabaseFigma,
    TemplateId::DatabaseCourse,
    TemplateId::DatabaseJose,
  ];

  pub const DEFAULT: TemplateId = TemplateId::DatabaseFigma;

  pub fn parse(id: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|t| t.as_str() == id.trim())
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Minimal => "minimal",
      Self::Premium => "premium",
      Self::DatabaseFigma => "databaseFigma",
      Self::DatabaseCourse => "databaseCourse",
      Self::DatabaseJose => "databaseJose",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Minimal => "Minimal",
      Self::Premium => "Premium",
      Self::DatabaseFigma => "Landing Bases de Datos (Figma)",
      Self::DatabaseCourse => "Curso interactivo de Bases de Datos",
      Self::DatabaseJose => "Plantilla José",
    }
  }

  pub fn layout(self) -> &'static str {
    match self {
      Self::Minimal => "layouts/minimal.html",
      Self::Premium => "layouts/premium.html",
      Self::DatabaseFigma => "layouts/database_figma.html",
      Self::DatabaseCourse => "layouts/database_course.html",
      Self::DatabaseJose => "layouts/database_jose.html",
    }
  }
}

impl Default for TemplateId {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl std::fmt::Display for TemplateId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Resolves a user-supplied identifier, falling back to the default design.
pub fn select_template(id: &str) -> TemplateId {
  if let Some(template) = TemplateId::parse(id) {
    debug!(template = template.as_str(), "template selected");
    return template;
  }
  match closest_template(id) {
    Some(suggestion) => warn!(
      requested = id,
      suggestion = suggestion.as_str(),
      fallback = TemplateId::DEFAULT.as_str(),
      "unknown template, using default"
    ),
    None => warn!(
      requested = id,
      fallback = TemplateId::DEFAULT.as_str(),
      "unknown template, using default"
    ),
  }
  TemplateId::DEFAULT
}

/// Closest known identifier by normalized edit distance, if any is close enough.
pub fn closest_template(id: &str) -> Option<TemplateId> {
  let needle = normalize_token(id);
  TemplateId::ALL
    .iter()
    .map(|t| (*t, normalized_levenshtein(&needle, &normalize_token(t.as_str()))))
    .filter(|(_, score)| *score >= 0.5)
    .max_by(|a, b| a.1.total_cmp(&b.1))
    .map(|(t, _)| t)
}

const SOURCES: &[(&str, &str)] = &[
  ("layouts/shell.html", include_str!("../../templates/layouts/shell.html")),
  ("layouts/placeholder.html", include_str!("../../templates/layouts/placeholder.html")),
  ("layouts/minimal.html", include_str!("../../templates/layouts/minimal.html")),
  ("layouts/premium.html", include_str!("../../templates/layouts/premium.html")),
  ("layouts/database_figma.html", include_str!("../../templates/layouts/database_figma.html")),
  ("layouts/database_course.html", include_str!("../../templates/layouts/database_course.html")),
  ("layouts/database_jose.html", include_str!("../../templates/layouts/database_jose.html")),
  ("partials/nav.html", include_str!("../../templates/partials/nav.html")),
  ("partials/blocks.html", include_str!("../../templates/partials/blocks.html")),
  ("partials/closing.html", include_str!("../../templates/partials/closing.html")),
  ("partials/empty_blocks.html", include_str!("../../templates/partials/empty_blocks.html")),
  ("sections/figma_hero.html", include_str!("../../templates/sections/figma_hero.html")),
  ("sections/course_hero.html", include_str!("../../templates/sections/course_hero.html")),
  ("sections/jose_hero.html", include_str!("../../templates/sections/jose_hero.html")),
  ("sections/progress.html", include_str!("../../templates/sections/progress.html")),
  ("sections/legacy_sections.html", include_str!("../../templates/sections/legacy_sections.html")),
  ("sections/legacy_landing.html", include_str!("../../templates/sections/legacy_landing.html")),
  ("sections/generic.html", include_str!("../../templates/sections/generic.html")),
  ("sections/course_intro.html", include_str!("../../templates/sections/course_intro.html")),
  ("sections/db_introduction.html", include_str!("../../templates/sections/db_introduction.html")),
  ("sections/marketing_intro.html", include_str!("../../templates/sections/marketing_intro.html")),
  ("sections/key_concepts.html", include_str!("../../templates/sections/key_concepts.html")),
  ("sections/product.html", include_str!("../../templates/sections/product.html")),
  ("sections/entity_relationship.html", include_str!("../../templates/sections/entity_relationship.html")),
  ("sections/sql_basics.html", include_str!("../../templates/sections/sql_basics.html")),
  ("sections/normalization.html", include_str!("../../templates/sections/normalization.html")),
  ("sections/database_types.html", include_str!("../../templates/sections/database_types.html")),
  ("sections/transactions.html", include_str!("../../templates/sections/transactions.html")),
];

/// Builds the tera engine from the templates compiled into the binary.
pub fn engine() -> Result<Tera, RenderError> {
  let mut tera = Tera::default();
  tera
    .add_raw_templates(SOURCES.iter().copied())
    .map_err(|e| RenderError::template("engine", e))?;
  Ok(tera)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identifiers_round_trip() {
    for template in TemplateId::ALL {
      assert_eq!(TemplateId::parse(template.as_str()), Some(*template));
    }
    assert_eq!(TemplateId::default(), TemplateId::DatabaseFigma);
  }

  #[test]
  fn unknown_identifier_selects_default() {
    assert_eq!(select_template("doesNotExist"), TemplateId::DEFAULT);
    assert_eq!(select_template(""), TemplateId::DEFAULT);
    assert_eq!(select_template("databaseJose"), TemplateId::DatabaseJose);
  }

  #[test]
  fn suggests_near_miss() {
    assert_eq!(closest_template("premiun"), Some(TemplateId::Premium));
    assert_eq!(closest_template("databasecourse"), Some(TemplateId::DatabaseCourse));
    assert_eq!(closest_template("zzzzzzzzzzzzzzzzzzzzzzz"), None);
  }

  #[test]
  fn embedded_templates_load() {
    let tera = engine().expect("engine");
    for template in TemplateId::ALL {
      assert!(tera.get_template_names().any(|n| n == template.layout()));
    }
  }
}
