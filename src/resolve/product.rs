use serde::Serialize;

use crate::course::types::{BrandStrategy, LifeCycle, ProductCategory, ProductLevel};
use crate::course::ContentBlock;

use super::text;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LevelView {
    pub level: String,
    pub icon: String,
    pub desc: String,
    pub detail: String,
    pub example: String,
    pub key_point: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryView {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub examples: String,
    pub strategy: String,
    pub icon: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhaseView {
    pub stage: String,
    pub sales: String,
    pub profit: String,
    pub strategy: String,
    pub example: String,
    pub tone: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LifeCycleView {
    pub titulo: String,
    pub descripcion: String,
    pub phases: Vec<PhaseView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrandBulletView {
    pub label: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseStudyView {
    pub titulo: String,
    pub valor_marca: String,
    pub asociaciones: String,
    pub resultado: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrandView {
    pub titulo: String,
    pub descripcion: String,
    pub bullets: Vec<BrandBulletView>,
    pub case_study: CaseStudyView,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductView {
    pub label: String,
    pub titulo: String,
    pub texto: String,
    pub levels: Vec<LevelView>,
    pub categories: Vec<CategoryView>,
    pub life_cycle: LifeCycleView,
    pub brand: BrandView,
}

const DEFAULT_LEVELS: &[[&str; 6]] = &[
    [
        "Producto Básico",
        "🎯",
        "El beneficio central que el cliente compra",
        "No compras un iPhone, compras comunicación y estatus. No compras un taladro, compras un agujero.",
        "Hotel → descanso y dormir",
        "¿Qué está realmente comprando el cliente?",
    ],
    [
        "Producto Real",
        "📦",
        "Características tangibles y diseño",
        "Donde ocurre la diferenciación. Incluye calidad, características, diseño, marca y empaque.",
        "Hotel → cama king, WiFi, marca Marriott",
        "Aquí se juega la batalla competitiva",
    ],
    [
        "Producto Aumentado",
        "✨",
        "Servicios y beneficios extra",
        "Crea lealtad y justifica precios premium. Son los extras que superan expectativas.",
        "Hotel → concierge, spa gratis, puntos",
        "Diferenciación para relaciones a largo plazo",
    ],
];

const DEFAULT_CATEGORIES: &[[&str; 6]] = &[
    [
        "conveniencia",
        "Conveniencia",
        "Compra frecuente, bajo esfuerzo",
        "Chicles, pan, agua",
        "Distribución intensiva, precio bajo",
        "🛒",
    ],
    [
        "comparacion",
        "Compra Comparada",
        "Cliente compara precio/calidad",
        "Ropa, muebles, autos",
        "Venta personal, ubicaciones selectas",
        "⚖️",
    ],
    [
        "especialidad",
        "Especialidad",
        "Características únicas o marca",
        "Rolex, Ferrari, Medicina",
        "Distribución exclusiva, precio premium",
        "💎",
    ],
    [
        "nobuscados",
        "No Buscados",
        "No se piensa en comprar",
        "Seguros, donaciones",
        "Publicidad agresiva y persuasiva",
        "🔔",
    ],
];

struct DefaultPhase {
    stage: &'static str,
    sales: &'static str,
    profit: &'static str,
    strategy: &'static str,
    example: &'static str,
    tone: &'static str,
    actions: [&'static str; 2],
}

const DEFAULT_PHASES: &[DefaultPhase] = &[
    DefaultPhase {
        stage: "Introducción",
        sales: "Bajas",
        profit: "Negativas",
        strategy: "Crear conciencia",
        example: "Vision Pro",
        tone: "blue",
        actions: ["Promoción alta", "Distribución selectiva"],
    },
    DefaultPhase {
        stage: "Crecimiento",
        sales: "Rápido aumento",
        profit: "Aumentan",
        strategy: "Maximizar cuota",
        example: "Autos eléctricos",
        tone: "green",
        actions: ["Mejorar producto", "Expandir distribución"],
    },
    DefaultPhase {
        stage: "Madurez",
        sales: "Pico máximo",
        profit: "Máximas",
        strategy: "Defender cuota",
        example: "Smartphones",
        tone: "orange",
        actions: ["Diferenciación", "Guerra de precios"],
    },
    DefaultPhase {
        stage: "Declive",
        sales: "Caen",
        profit: "Bajas",
        strategy: "Cosechar/Retirar",
        example: "DVD Players",
        tone: "red",
        actions: ["Reducir costos", "Descontinuar"],
    },
];

const KNOWN_TONES: &[&str] = &["blue", "green", "orange", "red"];

const DEFAULT_BRAND_BULLETS: &[(&str, &str)] = &[
    ("Reconocimiento", "¿Te conocen?"),
    ("Percepción", "¿Qué piensan de ti?"),
    ("Lealtad", "¿Vuelven a comprar?"),
    ("Asociaciones", "¿Qué emociones evocas?"),
];

pub fn resolve(block: &ContentBlock) -> ProductView {
    ProductView {
        label: text(block.subtitulo.as_deref(), "Módulo 01"),
        titulo: text(block.titulo.as_deref(), "Producto: Creando Valor"),
        texto: text(
            block.texto.as_deref(),
            "Entender los niveles y clasificaciones del producto es vital para crear una propuesta de valor sólida.",
        ),
        levels: levels(block.product_levels.as_deref()),
        categories: categories(block.product_categories.as_deref()),
        life_cycle: life_cycle(block.life_cycle.as_ref()),
        brand: brand(block.brand_strategy.as_ref()),
    }
}

fn levels(given: Option<&[ProductLevel]>) -> Vec<LevelView> {
    let source: Vec<ProductLevel> = match given {
        Some(levels) if !levels.is_empty() => levels.to_vec(),
        _ => DEFAULT_LEVELS
            .iter()
            .map(|[level, icon, desc, detail, example, key_point]| ProductLevel {
                level: Some(level.to_string()),
                icon: Some(icon.to_string()),
                desc: Some(desc.to_string()),
                color: None,
                detail: Some(detail.to_string()),
                example: Some(example.to_string()),
                key_point: Some(key_point.to_string()),
            })
            .collect(),
    };
    source
        .into_iter()
        .enumerate()
        .map(|(i, l)| LevelView {
            level: l.level.unwrap_or_default(),
            icon: l.icon.unwrap_or_default(),
            desc: l.desc.unwrap_or_default(),
            detail: l.detail.unwrap_or_default(),
            example: l.example.unwrap_or_default(),
            key_point: l.key_point.unwrap_or_default(),
            active: i == 0,
        })
        .collect()
}

fn categories(given: Option<&[ProductCategory]>) -> Vec<CategoryView> {
    let source: Vec<ProductCategory> = match given {
        Some(categories) if !categories.is_empty() => categories.to_vec(),
        _ => DEFAULT_CATEGORIES
            .iter()
            .map(|[id, title, desc, examples, strategy, icon]| ProductCategory {
                id: Some(id.to_string()),
                title: Some(title.to_string()),
                desc: Some(desc.to_string()),
                examples: Some(examples.to_string()),
                strategy: Some(strategy.to_string()),
                icon: Some(icon.to_string()),
            })
            .collect(),
    };
    source
        .into_iter()
        .enumerate()
        .map(|(i, c)| CategoryView {
            id: c.id.unwrap_or_else(|| format!("categoria-{}", i + 1)),
            title: c.title.unwrap_or_default(),
            desc: c.desc.unwrap_or_default(),
            examples: c.examples.unwrap_or_default(),
            strategy: c.strategy.unwrap_or_default(),
            icon: c.icon.unwrap_or_default(),
            expanded: i == 0,
        })
        .collect()
}

fn life_cycle(given: Option<&LifeCycle>) -> LifeCycleView {
    let phases = match given.and_then(|lc| lc.phases.as_deref()) {
        Some(phases) if !phases.is_empty() => phases
            .iter()
            .map(|p| PhaseView {
                stage: p.stage.clone().unwrap_or_default(),
                sales: p.sales.clone().unwrap_or_default(),
                profit: p.profit.clone().unwrap_or_default(),
                strategy: p.strategy.clone().unwrap_or_default(),
                example: p.example.clone().unwrap_or_default(),
                tone: p
                    .color
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| KNOWN_TONES.contains(c))
                    .unwrap_or(KNOWN_TONES[0])
                    .to_string(),
                actions: p.actions.clone().unwrap_or_default(),
            })
            .collect(),
        _ => DEFAULT_PHASES
            .iter()
            .map(|p| PhaseView {
                stage: p.stage.to_string(),
                sales: p.sales.to_string(),
                profit: p.profit.to_string(),
                strategy: p.strategy.to_string(),
                example: p.example.to_string(),
                tone: p.tone.to_string(),
                actions: p.actions.iter().map(|a| a.to_string()).collect(),
            })
            .collect(),
    };
    LifeCycleView {
        titulo: text(given.and_then(|lc| lc.titulo.as_deref()), "Ciclo de Vida (CVP)"),
        descripcion: text(
            given.and_then(|lc| lc.descripcion.as_deref()),
            "Etapas desde el lanzamiento hasta el declive.",
        ),
        phases,
    }
}

fn brand(given: Option<&BrandStrategy>) -> BrandView {
    let case = given.and_then(|b| b.case_study.as_ref());
    let bullets = match given.and_then(|b| b.bullets.as_deref()) {
        Some(bullets) if !bullets.is_empty() => bullets
            .iter()
            .map(|b| BrandBulletView {
                label: b.label.clone().unwrap_or_default(),
                desc: b.desc.clone().unwrap_or_default(),
            })
            .collect(),
        _ => DEFAULT_BRAND_BULLETS
            .iter()
            .map(|(label, desc)| BrandBulletView {
                label: label.to_string(),
                desc: desc.to_string(),
            })
            .collect(),
    };
    BrandView {
        titulo: text(given.and_then(|b| b.titulo.as_deref()), "Estrategia de Marca"),
        descripcion: text(
            given.and_then(|b| b.descripcion.as_deref()),
            "Una marca fuerte genera lealtad y permite precios premium. Es el activo intangible más valioso.",
        ),
        bullets,
        case_study: CaseStudyView {
            titulo: text(case.and_then(|c| c.titulo.as_deref()), "Caso: Apple"),
            valor_marca: text(case.and_then(|c| c.valor_marca.as_deref()), "$880 Billones"),
            asociaciones: text(
                case.and_then(|c| c.asociaciones.as_deref()),
                "Innovación, Diseño, Estatus",
            ),
            resultado: text(case.and_then(|c| c.resultado.as_deref()), "Price Premium del 40%"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::BlockKind;

    #[test]
    fn empty_block_gets_full_default_module() {
        let view = resolve(&ContentBlock::of_kind(BlockKind::Producto));
        assert_eq!(view.label, "Módulo 01");
        assert_eq!(view.levels.len(), 3);
        assert!(view.levels[0].active);
        assert_eq!(view.categories.len(), 4);
        assert_eq!(view.categories[3].id, "nobuscados");
        assert!(view.categories[0].expanded);
        assert_eq!(view.life_cycle.phases.len(), 4);
        assert_eq!(view.life_cycle.phases[3].tone, "red");
        assert_eq!(view.brand.case_study.valor_marca, "$880 Billones");
    }

    #[test]
    fn partial_brand_strategy_keeps_other_defaults() {
        let raw = r#"{
      "tipo": "producto",
      "brandStrategy": {"titulo": "Marca Propia", "caseStudy": {"titulo": "Caso: Nike"}},
      "lifeCycle": {"phases": [{"stage": "Lanzamiento", "color": "violet"}]}
    }"#;
        let block: ContentBlock = serde_json::from_str(raw).expect("block");
        let view = resolve(&block);
        assert_eq!(view.brand.titulo, "Marca Propia");
        assert_eq!(view.brand.bullets.len(), 4);
        assert_eq!(view.brand.case_study.titulo, "Caso: Nike");
        assert_eq!(view.brand.case_study.resultado, "Price Premium del 40%");
        assert_eq!(view.life_cycle.phases.len(), 1);
        assert_eq!(view.life_cycle.phases[0].tone, "blue");
        assert_eq!(view.life_cycle.titulo, "Ciclo de Vida (CVP)");
    }
}
