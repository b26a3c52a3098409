use serde::Serialize;

use crate::course::ContentBlock;

use super::text;

pub const DEFAULT_TEXT: &str = "El marketing es el proceso social y administrativo mediante el cual individuos y grupos obtienen lo que necesitan y desean, creando e intercambiando productos y valor con otros.";

const OBJECTIVE_ICONS: &[&str] = &["target", "lightbulb", "trending-up"];

const DEFAULT_OBJECTIVES: &[(&str, &str)] = &[
    (
        "Dominar el Marketing Mix",
        "Comprender y aplicar las 4Ps (Producto, Precio, Plaza, Promoción) en situaciones reales.",
    ),
    (
        "Analizar mercados",
        "Identificar oportunidades mediante segmentación y análisis del comportamiento del consumidor.",
    ),
    (
        "Crear estrategias",
        "Desarrollar posicionamiento de marca y propuestas de valor diferenciadas.",
    ),
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Era {
    pub period: &'static str,
    pub title: &'static str,
    pub short: &'static str,
    pub full: &'static str,
    pub example: &'static str,
    pub icon: &'static str,
}

pub const ERAS: &[Era] = &[
    Era {
        period: "1900-1950",
        title: "Era de la Producción",
        short: "Si lo fabricas, se venderá",
        full: "Enfoque en eficiencia productiva, demanda superaba la oferta. Las empresas se centraban en producir en masa y reducir costos. El marketing era innecesario porque todo se vendía.",
        example: "Ford Model T: 'Cualquier color, siempre que sea negro'",
        icon: "🏭",
    },
    Era {
        period: "1950-1970",
        title: "Era de las Ventas",
        short: "Vender es la prioridad",
        full: "Aumento de competencia llevó a exceso de oferta. Las empresas necesitaban convencer activamente a los clientes. Énfasis en técnicas de venta agresiva y persuasión.",
        example: "Vendedores puerta a puerta, anuncios en TV masivos",
        icon: "📢",
    },
    Era {
        period: "1970-2000",
        title: "Era del Marketing",
        short: "El cliente es el rey",
        full: "Surge el concepto moderno de marketing. Investigación de mercados, segmentación, y enfoque en satisfacer necesidades del cliente mejor que la competencia.",
        example: "P&G segmenta por beneficios buscados (Tide, Cheer, Bold)",
        icon: "🎯",
    },
    Era {
        period: "2000-Hoy",
        title: "Era Digital",
        short: "Personalización y datos",
        full: "Marketing personalizado, data-driven, omnicanal. El cliente tiene control total y las marcas deben estar donde el cliente está. Marketing de contenidos y redes sociales.",
        example: "Amazon: 'Los clientes que compraron esto también...'",
        icon: "💻",
    },
];

pub const PHILOSOPHY: &[(&str, &str)] = &[
    ("Necesidad", "Estado de carencia básica"),
    ("Deseo", "Forma moldeada por cultura"),
    ("Demanda", "Deseo + Poder de compra"),
    ("Valor", "Beneficio vs Costo"),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObjectiveView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarketingIntroView {
    pub label: String,
    pub titulo: String,
    pub texto: String,
    pub concept_title: String,
    pub objectives: Vec<ObjectiveView>,
    pub eras: &'static [Era],
    pub philosophy: Vec<(&'static str, &'static str)>,
}

pub fn resolve(block: &ContentBlock) -> MarketingIntroView {
    let objectives = match block.columnas.as_deref() {
        Some(cols) if !cols.is_empty() => cols
            .iter()
            .enumerate()
            .map(|(i, c)| ObjectiveView {
                icon: objective_icon(i),
                title: c.titulo.clone().unwrap_or_default(),
                description: c.texto.clone().unwrap_or_default(),
            })
            .collect(),
        _ => DEFAULT_OBJECTIVES
            .iter()
            .enumerate()
            .map(|(i, (title, description))| ObjectiveView {
                icon: objective_icon(i),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    };

    MarketingIntroView {
        label: text(block.subtitulo.as_deref(), "Sección 01"),
        titulo: text(block.titulo.as_deref(), "Introducción al Marketing"),
        texto: text(block.texto.as_deref(), DEFAULT_TEXT),
        concept_title: text(block.subtitulo.as_deref(), "¿Qué es el Marketing?"),
        objectives,
        eras: ERAS,
        philosophy: PHILOSOPHY.to_vec(),
    }
}

fn objective_icon(index: usize) -> &'static str {
    OBJECTIVE_ICONS.get(index).copied().unwrap_or(OBJECTIVE_ICONS[0])
}

#[cfg(test)]
mod tests {
    use super::{resolve, DEFAULT_TEXT};
    use crate::course::types::BlockColumn;
    use crate::course::{BlockKind, ContentBlock};

    #[test]
    fn title_kept_and_paragraph_defaulted() {
        let mut block = ContentBlock::of_kind(BlockKind::Introduction);
        block.titulo = Some("Intro".to_string());
        let view = resolve(&block);
        assert_eq!(view.titulo, "Intro");
        assert_eq!(view.texto, DEFAULT_TEXT);
        assert_eq!(view.label, "Sección 01");
        assert_eq!(view.objectives.len(), 3);
        assert_eq!(view.objectives[2].icon, "trending-up");
        assert_eq!(view.eras.len(), 4);
    }

    #[test]
    fn fourth_objective_reuses_first_icon() {
        let mut block = ContentBlock::of_kind(BlockKind::Introduction);
        block.columnas = Some(
            (0..4)
                .map(|i| BlockColumn {
                    titulo: Some(format!("O{i}")),
                    ..BlockColumn::default()
                })
                .collect(),
        );
        let view = resolve(&block);
        assert_eq!(view.objectives.len(), 4);
        assert_eq!(view.objectives[3].icon, "target");
        assert_eq!(view.objectives[3].title, "O3");
    }
}
