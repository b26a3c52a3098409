use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::course::ContentBlock;
use crate::error::RenderError;
use crate::render::registry::{BlockContext, BlockRegistry};

pub const EMPTY_BLOCKS_NOTICE: &str = "No se encontraron landing.contentBlocks en el JSON.";

/// One rendered piece of the block list, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
  pub position: usize,
  pub kind: String,
  pub used_fallback: bool,
  pub placeholder: bool,
  pub html: String,
}

/// Renders every block through the registry. The output has one fragment per
/// block, never reordered or filtered; an empty list yields a single notice.
pub fn render_blocks(
  blocks: &[ContentBlock],
  registry: &BlockRegistry,
  tera: &Tera,
) -> Result<Vec<Fragment>, RenderError> {
  if blocks.is_empty() {
    let mut ctx = Context::new();
    ctx.insert("notice", EMPTY_BLOCKS_NOTICE);
    let html = tera
      .render("partials/empty_blocks.html", &ctx)
      .map_err(|e| RenderError::template("partials/empty_blocks.html", e))?;
    return Ok(vec![Fragment {
      position: 0,
      kind: String::new(),
      used_fallback: true,
      placeholder: true,
      html,
    }]);
  }

  blocks
    .iter()
    .enumerate()
    .map(|(index, block)| {
      let (renderer, used_fallback) = registry.lookup(&block.tipo);
      if used_fallback {
        debug!(index, tipo = block.tipo.as_str(), "no specialized renderer, using fallback");
      }
      let html = renderer(&BlockContext { block, index }, tera)?;
      Ok(Fragment {
        position: index,
        kind: block.tipo.as_str().to_string(),
        used_fallback,
        placeholder: false,
        html,
      })
    })
    .collect()
}
