use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;
use crate::render::registry::BlockContext;
use crate::resolve;

/// Renders one section template with its resolved view under `view`.
pub fn render_view<T: Serialize>(
  tera: &Tera,
  name: &str,
  view: &T,
  index: usize,
) -> Result<String, RenderError> {
  let mut ctx = Context::new();
  ctx.insert("view", view);
  ctx.insert("index", &index);
  ctx.insert("number", &(index + 1));
  tera.render(name, &ctx).map_err(|e| RenderError::template(name, e))
}

pub fn generic(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::generic::resolve(ctx.block, ctx.index);
  render_view(tera, "sections/generic.html", &view, ctx.index)
}

pub fn course_intro(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::course_intro::resolve(ctx.block);
  render_view(tera, "sections/course_intro.html", &view, ctx.index)
}

pub fn db_introduction(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::introduction::resolve(ctx.block);
  render_view(tera, "sections/db_introduction.html", &view, ctx.index)
}

pub fn marketing_intro(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::marketing_intro::resolve(ctx.block);
  render_view(tera, "sections/marketing_intro.html", &view, ctx.index)
}

pub fn key_concepts(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::key_concepts::resolve(ctx.block);
  render_view(tera, "sections/key_concepts.html", &view, ctx.index)
}

pub fn product(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::product::resolve(ctx.block);
  render_view(tera, "sections/product.html", &view, ctx.index)
}

pub fn entity_relationship(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::entity_relationship::resolve(ctx.block);
  render_view(tera, "sections/entity_relationship.html", &view, ctx.index)
}

pub fn sql_basics(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::sql_basics::resolve(ctx.block);
  render_view(tera, "sections/sql_basics.html", &view, ctx.index)
}

pub fn normalization(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::normalization::resolve(ctx.block);
  render_view(tera, "sections/normalization.html", &view, ctx.index)
}

pub fn database_types(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::database_types::resolve(ctx.block);
  render_view(tera, "sections/database_types.html", &view, ctx.index)
}

pub fn transactions(ctx: &BlockContext<'_>, tera: &Tera) -> Result<String, RenderError> {
  let view = resolve::transactions::resolve(ctx.block);
  render_view(tera, "sections/transactions.html", &view, ctx.index)
}
