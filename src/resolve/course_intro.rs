use serde::Serialize;

use crate::course::ContentBlock;

use super::{nth, opt_list, text};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseIntroView {
    pub titulo: String,
    pub subtitulo: String,
    pub texto: String,
    pub purpose_title: String,
    pub purpose_text: String,
    pub list_heading: &'static str,
    pub bullets: Vec<String>,
}

pub fn resolve(block: &ContentBlock) -> CourseIntroView {
    let purpose = nth(block.items_secundarios.as_deref(), 0);
    let bullets = opt_list(block.bullets.as_deref());
    CourseIntroView {
        titulo: text(block.titulo.as_deref(), "Introducción al Curso"),
        subtitulo: text(block.subtitulo.as_deref(), "Título de introducción (subtítulo)"),
        texto: text(
            block.texto.as_deref(),
            "Aquí puedes colocar texto introductorio dinámico desde el JSON.",
        ),
        purpose_title: text(purpose.and_then(|p| p.titulo.as_deref()), "Propósito del curso"),
        purpose_text: text(
            purpose.and_then(|p| p.texto.as_deref()),
            "Texto dinámico para propósito del curso.",
        ),
        list_heading: if bullets.is_empty() {
            "Título dinámico"
        } else {
            "Objetivos de Aprendizaje"
        },
        bullets,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::course::types::SecondaryItem;
    use crate::course::{BlockKind, ContentBlock};

    #[test]
    fn empty_block_uses_placeholder_copy() {
        let view = resolve(&ContentBlock::of_kind(BlockKind::Introduction));
        assert_eq!(view.titulo, "Introducción al Curso");
        assert_eq!(view.purpose_title, "Propósito del curso");
        assert_eq!(view.list_heading, "Título dinámico");
        assert!(view.bullets.is_empty());
    }

    #[test]
    fn bullets_switch_the_list_heading() {
        let mut block = ContentBlock::of_kind(BlockKind::Introduction);
        block.bullets = Some(vec!["Analizar".to_string()]);
        block.items_secundarios = Some(vec![SecondaryItem {
            titulo: Some("Meta".to_string()),
            texto: None,
        }]);
        let view = resolve(&block);
        assert_eq!(view.list_heading, "Objetivos de Aprendizaje");
        assert_eq!(view.purpose_title, "Meta");
        assert_eq!(view.purpose_text, "Texto dinámico para propósito del curso.");
    }
}
