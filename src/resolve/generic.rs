use serde::Serialize;

use crate::course::ContentBlock;
use crate::util::text::slugify;

use super::{opt_list, opt_text};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnView {
    pub titulo: String,
    pub texto: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemView {
    pub titulo: String,
    pub texto: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExampleView {
    pub titulo: String,
    pub enunciado: String,
    pub desarrollo: String,
}

/// View for blocks without a specialized section. Nothing is defaulted here:
/// absent or empty fields produce no markup at all.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenericView {
    pub anchor: String,
    pub number: usize,
    pub tipo: Option<String>,
    pub titulo: Option<String>,
    pub subtitulo: Option<String>,
    pub texto: Option<String>,
    pub bullets: Vec<String>,
    pub columnas: Vec<ColumnView>,
    pub checklist: Vec<String>,
    pub items_secundarios: Vec<ItemView>,
    pub ejemplo: Option<ExampleView>,
}

pub fn resolve(block: &ContentBlock, index: usize) -> GenericView {
    let titulo = opt_text(block.titulo.as_deref());
    let tipo = opt_text(Some(block.tipo.as_str()));
    let anchor_source = titulo.as_deref().or(tipo.as_deref()).unwrap_or("bloque");
    GenericView {
        anchor: format!("bloque-{}-{}", index + 1, slugify(anchor_source)),
        number: index + 1,
        tipo,
        titulo,
        subtitulo: opt_text(block.subtitulo.as_deref()),
        texto: opt_text(block.texto.as_deref()),
        bullets: opt_list(block.bullets.as_deref()),
        columnas: block
            .columnas
            .iter()
            .flatten()
            .map(|c| ColumnView {
                titulo: c.titulo.clone().unwrap_or_default(),
                texto: c.texto.clone().unwrap_or_default(),
                bullets: opt_list(c.bullets.as_deref()),
            })
            .collect(),
        checklist: opt_list(block.checklist.as_deref()),
        items_secundarios: block
            .items_secundarios
            .iter()
            .flatten()
            .map(|i| ItemView {
                titulo: i.titulo.clone().unwrap_or_default(),
                texto: i.texto.clone().unwrap_or_default(),
            })
            .collect(),
        ejemplo: block.ejemplo.as_ref().map(|e| ExampleView {
            titulo: e.titulo.clone().unwrap_or_default(),
            enunciado: e.enunciado.clone().unwrap_or_default(),
            desarrollo: e.desarrollo.clone().unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::course::{BlockKind, ContentBlock};

    #[test]
    fn keeps_only_present_fields() {
        let mut block = ContentBlock::of_kind(BlockKind::parse("unknownXYZ"));
        block.titulo = Some("Mystery".to_string());
        block.bullets = Some(vec![]);
        let view = resolve(&block, 2);
        assert_eq!(view.number, 3);
        assert_eq!(view.titulo.as_deref(), Some("Mystery"));
        assert_eq!(view.tipo.as_deref(), Some("unknownXYZ"));
        assert_eq!(view.anchor, "bloque-3-mystery");
        assert!(view.bullets.is_empty());
        assert!(view.texto.is_none());
        assert!(view.ejemplo.is_none());
    }

    #[test]
    fn untitled_untyped_block_still_has_anchor() {
        let view = resolve(&ContentBlock::default(), 0);
        assert_eq!(view.anchor, "bloque-1-bloque");
        assert!(view.tipo.is_none());
    }
}
