use serde::Serialize;

use crate::course::ContentBlock;

use super::{list, opt_list, text};

struct FormSlot {
    code: &'static str,
    title: &'static str,
    description: &'static str,
    rules: &'static [&'static str],
}

const FORM_SLOTS: &[FormSlot] = &[
    FormSlot {
        code: "1FN",
        title: "Primera Forma Normal",
        description: "Cada columna guarda un único valor atómico y no hay grupos repetidos.",
        rules: &[
            "Valores atómicos en cada celda",
            "Sin columnas repetidas (telefono1, telefono2…)",
            "Cada fila se identifica con una clave primaria",
        ],
    },
    FormSlot {
        code: "2FN",
        title: "Segunda Forma Normal",
        description: "Está en 1FN y cada atributo depende de la clave primaria completa.",
        rules: &[
            "Cumple 1FN",
            "Sin dependencias parciales de claves compuestas",
        ],
    },
    FormSlot {
        code: "3FN",
        title: "Tercera Forma Normal",
        description: "Está en 2FN y ningún atributo depende de otro atributo no clave.",
        rules: &["Cumple 2FN", "Sin dependencias transitivas"],
    },
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormView {
    pub code: &'static str,
    pub title: String,
    pub description: String,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizationExample {
    pub titulo: String,
    pub enunciado: String,
    pub desarrollo: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizationView {
    pub lesson: String,
    pub titulo: String,
    pub texto: String,
    pub forms: Vec<FormView>,
    pub example: Option<NormalizationExample>,
    pub checklist: Vec<String>,
}

pub fn resolve(block: &ContentBlock) -> NormalizationView {
    let columns = block.columnas.as_deref().unwrap_or_default();
    let slots = FORM_SLOTS.len().max(columns.len());
    let forms = (0..slots)
        .map(|i| {
            let slot = FORM_SLOTS.get(i).unwrap_or(&FORM_SLOTS[FORM_SLOTS.len() - 1]);
            let col = columns.get(i);
            FormView {
                code: if i < FORM_SLOTS.len() { slot.code } else { "" },
                title: text(col.and_then(|c| c.titulo.as_deref()), slot.title),
                description: text(col.and_then(|c| c.texto.as_deref()), slot.description),
                rules: list(col.and_then(|c| c.bullets.as_deref()), slot.rules),
            }
        })
        .collect();

    NormalizationView {
        lesson: text(block.subtitulo.as_deref(), "Lección 4 de 10"),
        titulo: text(block.titulo.as_deref(), "Normalización de Bases de Datos"),
        texto: text(
            block.texto.as_deref(),
            "La normalización organiza las tablas para eliminar redundancia y evitar anomalías al insertar, actualizar o eliminar datos.",
        ),
        forms,
        example: block.ejemplo.as_ref().map(|e| NormalizationExample {
            titulo: text(e.titulo.as_deref(), "Ejemplo práctico"),
            enunciado: e.enunciado.clone().unwrap_or_default(),
            desarrollo: e.desarrollo.clone().unwrap_or_default(),
        }),
        checklist: opt_list(block.checklist.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::course::types::BlockColumn;
    use crate::course::{BlockKind, ContentBlock};

    #[test]
    fn three_normal_forms_by_default() {
        let view = resolve(&ContentBlock::of_kind(BlockKind::Normalization));
        let codes: Vec<&str> = view.forms.iter().map(|f| f.code).collect();
        assert_eq!(codes, ["1FN", "2FN", "3FN"]);
        assert!(view.example.is_none());
        assert_eq!(view.lesson, "Lección 4 de 10");
    }

    #[test]
    fn columns_override_slot_by_slot() {
        let mut block = ContentBlock::of_kind(BlockKind::Normalization);
        block.columnas = Some(vec![
            BlockColumn::default(),
            BlockColumn {
                titulo: Some("2NF".to_string()),
                texto: Some("  ".to_string()),
                bullets: Some(vec!["Dependencia total".to_string()]),
            },
        ]);
        let view = resolve(&block);
        assert_eq!(view.forms.len(), 3);
        assert_eq!(view.forms[0].title, "Primera Forma Normal");
        assert_eq!(view.forms[1].title, "2NF");
        assert!(view.forms[1].description.starts_with("Está en 1FN"));
        assert_eq!(view.forms[1].rules, vec!["Dependencia total".to_string()]);
        assert_eq!(view.forms[2].code, "3FN");
    }
}
