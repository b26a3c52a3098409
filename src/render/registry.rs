use std::collections::HashMap;

use tera::Tera;

use crate::course::{BlockKind, ContentBlock};
use crate::error::RenderError;
use crate::render::sections;
use crate::render::templates::TemplateId;

/// What a block renderer sees: the block and its position in the page.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
  pub block: &'a ContentBlock,
  pub index: usize,
}

pub type BlockRenderer = fn(&BlockContext<'_>, &Tera) -> Result<String, RenderError>;

/// Dispatch table from block tag to renderer, with exactly one fallback for
/// every tag it does not list.
#[derive(Clone)]
pub struct BlockRegistry {
  handlers: HashMap<BlockKind, BlockRenderer>,
  fallback: BlockRenderer,
}

impl BlockRegistry {
  pub fn new(fallback: BlockRenderer) -> Self {
    Self {
      handlers: HashMap::new(),
      fallback,
    }
  }

  pub fn with(mut self, kind: BlockKind, renderer: BlockRenderer) -> Self {
    self.handlers.insert(kind, renderer);
    self
  }

  pub fn handles(&self, kind: &BlockKind) -> bool {
    self.handlers.contains_key(kind)
  }

  /// The renderer for `kind` and whether it is the fallback.
  pub fn lookup(&self, kind: &BlockKind) -> (BlockRenderer, bool) {
    match self.handlers.get(kind) {
      Some(renderer) => (*renderer, false),
      None => (self.fallback, true),
    }
  }

  pub fn kinds(&self) -> Vec<&BlockKind> {
    let mut kinds: Vec<&BlockKind> = self.handlers.keys().collect();
    kinds.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    kinds
  }

  pub fn for_template(template: TemplateId) -> Self {
    let base = Self::new(sections::generic);
    match template {
      TemplateId::Minimal => base,
      TemplateId::DatabaseFigma => base
        .with(BlockKind::Introduction, sections::marketing_intro)
        .with(BlockKind::Conceptos, sections::key_concepts)
        .with(BlockKind::Producto, sections::product),
      TemplateId::DatabaseCourse | TemplateId::Premium => base
        .with(BlockKind::Introduction, sections::db_introduction)
        .with(BlockKind::EntityRelationship, sections::entity_relationship)
        .with(BlockKind::SqlBasics, sections::sql_basics)
        .with(BlockKind::Normalization, sections::normalization)
        .with(BlockKind::DatabaseTypes, sections::database_types)
        .with(BlockKind::Transactions, sections::transactions)
        .with(BlockKind::Conceptos, sections::key_concepts)
        .with(BlockKind::Producto, sections::product),
      TemplateId::DatabaseJose => base.with(BlockKind::Introduction, sections::course_intro),
    }
  }
}

impl std::fmt::Debug for BlockRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BlockRegistry")
      .field("kinds", &self.kinds())
      .finish_non_exhaustive()
  }
}
