use serde::Serialize;

use crate::course::ContentBlock;

use super::{opt_list, text};

const ICONS: &[&str] = &["database", "layers", "box", "network"];
const TONES: &[&str] = &["blue", "green", "orange", "purple"];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeCard {
    pub icon: &'static str,
    pub tone: &'static str,
    pub acronym: String,
    pub titulo: String,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatabaseTypesView {
    pub badge: &'static str,
    pub titulo: String,
    pub subtitulo: String,
    pub cards: Vec<TypeCard>,
    pub checklist: Vec<String>,
}

/// Cards come only from `columnas`; there is no built-in catalogue.
pub fn resolve(block: &ContentBlock) -> DatabaseTypesView {
    let cards = block
        .columnas
        .iter()
        .flatten()
        .enumerate()
        .map(|(i, col)| {
            let mut bullets = opt_list(col.bullets.as_deref()).into_iter();
            TypeCard {
                icon: ICONS.get(i).copied().unwrap_or(ICONS[0]),
                tone: TONES.get(i).copied().unwrap_or(TONES[0]),
                acronym: bullets.next().unwrap_or_default(),
                titulo: col.titulo.clone().unwrap_or_default(),
                characteristics: bullets.collect(),
            }
        })
        .collect();

    DatabaseTypesView {
        badge: "Bloque 5 · Tipos de Bases de Datos",
        titulo: text(block.titulo.as_deref(), "Tipos de bases de datos"),
        subtitulo: text(
            block.subtitulo.as_deref(),
            "Existen diferentes tipos de bases de datos, cada una diseñada para resolver problemas específicos.",
        ),
        cards,
        checklist: opt_list(block.checklist.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::course::types::BlockColumn;
    use crate::course::{BlockKind, ContentBlock};

    #[test]
    fn no_columns_means_no_cards() {
        let view = resolve(&ContentBlock::of_kind(BlockKind::DatabaseTypes));
        assert!(view.cards.is_empty());
        assert!(view.checklist.is_empty());
        assert_eq!(view.titulo, "Tipos de bases de datos");
    }

    #[test]
    fn first_bullet_is_acronym() {
        let mut block = ContentBlock::of_kind(BlockKind::DatabaseTypes);
        let col = BlockColumn {
            titulo: Some("Relacionales".to_string()),
            texto: None,
            bullets: Some(vec!["SQL".to_string(), "Tablas".to_string(), "ACID".to_string()]),
        };
        block.columnas = Some(vec![col.clone(), col.clone(), col.clone(), col.clone(), col]);
        let view = resolve(&block);
        assert_eq!(view.cards[0].acronym, "SQL");
        assert_eq!(view.cards[0].characteristics, vec!["Tablas".to_string(), "ACID".to_string()]);
        assert_eq!(view.cards[3].icon, "network");
        assert_eq!(view.cards[4].icon, "database");
        assert_eq!(view.cards[4].tone, "blue");
    }
}
