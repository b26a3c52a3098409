use serde::Serialize;

use crate::course::ContentBlock;

use super::generic::ItemView;
use super::{opt_list, text};

pub const DEFAULT_TEXT: &str = "Una base de datos organiza la información para que pueda guardarse, consultarse y actualizarse de forma segura. En este curso verás cómo se diseñan, cómo se consultan y qué garantías ofrecen.";

const DEFAULT_CONCEPTS: &[(&str, &str)] = &[
    ("Base de Datos", "Colección organizada de datos estructurados"),
    ("SGBD", "Sistema que gestiona y administra las bases de datos"),
    ("Persistencia", "Almacenamiento permanente de información"),
    ("Concurrencia", "Múltiples usuarios accediendo simultáneamente"),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConceptView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailPanel {
    pub heading: String,
    pub items: Vec<ItemView>,
    pub bullets_heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntroductionView {
    pub badge: String,
    pub titulo: String,
    pub texto: String,
    pub concepts: Vec<ConceptView>,
    pub detail: Option<DetailPanel>,
}

pub fn resolve(block: &ContentBlock) -> IntroductionView {
    let concepts = match block.columnas.as_deref() {
        Some(cols) if !cols.is_empty() => cols
            .iter()
            .map(|c| ConceptView {
                title: c.titulo.clone().unwrap_or_default(),
                description: c.texto.clone().unwrap_or_default(),
            })
            .collect(),
        _ => DEFAULT_CONCEPTS
            .iter()
            .map(|(title, description)| ConceptView {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    };

    let has_detail = block.items_secundarios.is_some() || block.bullets.is_some();
    let detail = has_detail.then(|| DetailPanel {
        heading: text(
            block.ejemplo.as_ref().and_then(|e| e.titulo.as_deref()),
            "Componentes de un Sistema de Base de Datos",
        ),
        items: block
            .items_secundarios
            .iter()
            .flatten()
            .map(|i| ItemView {
                titulo: i.titulo.clone().unwrap_or_default(),
                texto: i.texto.clone().unwrap_or_default(),
            })
            .collect(),
        bullets_heading: text(block.subtitulo.as_deref(), "Puntos clave"),
        bullets: opt_list(block.bullets.as_deref()),
    });

    IntroductionView {
        badge: text(block.subtitulo.as_deref(), "Introducción"),
        titulo: text(block.titulo.as_deref(), "Introducción a Bases de Datos"),
        texto: text(block.texto.as_deref(), DEFAULT_TEXT),
        concepts,
        detail,
    }
}
