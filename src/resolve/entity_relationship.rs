use serde::Serialize;

use crate::course::ContentBlock;

use super::text;

struct ConceptSlot {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    extra_title: &'static str,
    extra_lines: &'static [&'static str],
}

const CONCEPT_SLOTS: &[ConceptSlot] = &[
    ConceptSlot {
        icon: "square",
        title: "Entidades",
        description: "Representan objetos del mundo real que tienen existencia propia",
        extra_title: "Ejemplos:",
        extra_lines: &["Estudiante", "Curso", "Profesor"],
    },
    ConceptSlot {
        icon: "circle",
        title: "Atributos",
        description: "Características o propiedades de las entidades",
        extra_title: "Para Estudiante:",
        extra_lines: &["ID (clave)", "Nombre", "Email"],
    },
    ConceptSlot {
        icon: "diamond",
        title: "Relaciones",
        description: "Asociaciones entre dos o más entidades",
        extra_title: "Ejemplos:",
        extra_lines: &["Estudiante inscribe Curso", "Profesor dicta Curso"],
    },
];

const CARDINALITY_SLOTS: &[(&str, &str, &str)] = &[
    (
        "Uno a Uno (1:1)",
        "Una entidad se relaciona con exactamente una de otra entidad",
        "Persona → Pasaporte",
    ),
    (
        "Uno a Muchos (1:N)",
        "Una entidad se relaciona con muchas de otra entidad",
        "Departamento → Empleados",
    ),
    (
        "Muchos a Muchos (N:M)",
        "Múltiples entidades se relacionan con múltiples",
        "Estudiantes ↔ Cursos",
    ),
];

/// JSON columns replace the built-in cards only from this count on.
const MIN_COLUMNS: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErConceptView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub extra_title: &'static str,
    pub extra_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardinalityView {
    pub title: String,
    pub text: String,
    pub example: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErExampleView {
    pub titulo: String,
    pub desarrollo: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntityRelationshipView {
    pub lesson: String,
    pub titulo: String,
    pub texto: String,
    pub concepts: Vec<ErConceptView>,
    pub cardinality_heading: String,
    pub cardinalities: Vec<CardinalityView>,
    pub example: Option<ErExampleView>,
}

pub fn resolve(block: &ContentBlock) -> EntityRelationshipView {
    let concepts = match block.columnas.as_deref() {
        Some(cols) if cols.len() >= MIN_COLUMNS => cols
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let slot = CONCEPT_SLOTS.get(i).unwrap_or(&CONCEPT_SLOTS[0]);
                ErConceptView {
                    icon: slot.icon,
                    title: text(col.titulo.as_deref(), slot.title),
                    description: text(col.texto.as_deref(), slot.description),
                    extra_title: slot.extra_title,
                    extra_lines: super::list(col.bullets.as_deref(), slot.extra_lines),
                }
            })
            .collect(),
        _ => CONCEPT_SLOTS
            .iter()
            .map(|slot| ErConceptView {
                icon: slot.icon,
                title: slot.title.to_string(),
                description: slot.description.to_string(),
                extra_title: slot.extra_title,
                extra_lines: slot.extra_lines.iter().map(|l| l.to_string()).collect(),
            })
            .collect(),
    };

    let cardinalities = match block.items_secundarios.as_deref() {
        Some(items) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (title, text_default, example) =
                    CARDINALITY_SLOTS.get(i).copied().unwrap_or(("", "", ""));
                CardinalityView {
                    title: text(item.titulo.as_deref(), title),
                    text: text(item.texto.as_deref(), text_default),
                    example: example.to_string(),
                }
            })
            .collect(),
        _ => CARDINALITY_SLOTS
            .iter()
            .map(|(title, text, example)| CardinalityView {
                title: title.to_string(),
                text: text.to_string(),
                example: example.to_string(),
            })
            .collect(),
    };

    let example_title = block.ejemplo.as_ref().and_then(|e| e.titulo.as_deref());
    EntityRelationshipView {
        lesson: text(block.subtitulo.as_deref(), "Lección 2 de 10"),
        titulo: text(block.titulo.as_deref(), "Modelo Entidad-Relación"),
        texto: text(
            block.texto.as_deref(),
            "El modelo ER es una técnica de diseño que nos permite representar gráficamente la estructura de una base de datos antes de implementarla.",
        ),
        concepts,
        cardinality_heading: text(example_title, "Cardinalidad de Relaciones"),
        cardinalities,
        example: block.ejemplo.as_ref().map(|e| ErExampleView {
            titulo: text(e.titulo.as_deref(), "Ejemplo: Sistema Universitario"),
            desarrollo: text(
                e.desarrollo.as_deref(),
                "Un estudiante puede inscribirse en muchos cursos, y un curso puede tener muchos estudiantes (N:M).",
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::course::types::{BlockColumn, SecondaryItem, WorkedExample};
    use crate::course::{BlockKind, ContentBlock};

    fn column(title: &str) -> BlockColumn {
        BlockColumn {
            titulo: Some(title.to_string()),
            ..BlockColumn::default()
        }
    }

    #[test]
    fn fewer_than_three_columns_are_ignored() {
        let mut block = ContentBlock::of_kind(BlockKind::EntityRelationship);
        block.columnas = Some(vec![column("A"), column("B")]);
        let view = resolve(&block);
        let titles: Vec<&str> = view.concepts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Entidades", "Atributos", "Relaciones"]);
    }

    #[test]
    fn fourth_column_falls_back_to_first_slot() {
        let mut block = ContentBlock::of_kind(BlockKind::EntityRelationship);
        block.columnas = Some(vec![column("A"), column("B"), BlockColumn::default(), BlockColumn::default()]);
        let view = resolve(&block);
        assert_eq!(view.concepts.len(), 4);
        assert_eq!(view.concepts[0].title, "A");
        assert_eq!(view.concepts[2].title, "Relaciones");
        assert_eq!(view.concepts[3].title, "Entidades");
        assert_eq!(view.concepts[3].icon, "square");
        assert_eq!(view.concepts[1].extra_lines[0], "ID (clave)");
    }

    #[test]
    fn cardinality_examples_come_from_slot_defaults() {
        let mut block = ContentBlock::of_kind(BlockKind::EntityRelationship);
        block.items_secundarios = Some(
            (0..4)
                .map(|i| SecondaryItem {
                    titulo: Some(format!("R{i}")),
                    texto: None,
                })
                .collect(),
        );
        let view = resolve(&block);
        assert_eq!(view.cardinalities[1].title, "R1");
        assert_eq!(view.cardinalities[1].example, "Departamento → Empleados");
        assert_eq!(view.cardinalities[3].text, "");
        assert_eq!(view.cardinalities[3].example, "");
    }

    #[test]
    fn example_only_when_present() {
        let mut block = ContentBlock::of_kind(BlockKind::EntityRelationship);
        assert!(resolve(&block).example.is_none());
        block.ejemplo = Some(WorkedExample::default());
        let view = resolve(&block);
        assert_eq!(view.cardinality_heading, "Cardinalidad de Relaciones");
        let example = view.example.expect("example");
        assert_eq!(example.titulo, "Ejemplo: Sistema Universitario");
    }
}
