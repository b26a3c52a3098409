use serde::Serialize;

use crate::course::types::{MarketingMix, MarketingMixCase};
use crate::course::ContentBlock;

use super::{nth, opt_list, text};

const ICONS: &[&str] = &["package", "dollar", "map-pin", "megaphone", "users", "trending-up"];
const TONES: &[&str] = &["blue", "green", "orange", "purple", "indigo", "pink"];

const FALLBACK_BACK: &str = "Este concepto es clave para entender cómo se conecta la propuesta de valor con las necesidades del cliente.";
const FALLBACK_DETAIL: &str =
    "Puedes usar itemsSecundarios en el JSON para personalizar este detalle.";

struct DefaultCard {
    term: &'static str,
    definition: &'static str,
    back: &'static str,
    examples: &'static [&'static str],
    detail: &'static str,
}

const DEFAULT_CARDS: &[DefaultCard] = &[
    DefaultCard {
        term: "Producto",
        definition: "Cualquier cosa que se puede ofrecer al mercado para satisfacer una necesidad o deseo.",
        back: "Incluye bienes físicos, servicios, experiencias, eventos, personas, lugares, organizaciones e ideas. El producto es la razón por la cual los clientes vienen a ti.",
        examples: &["iPhone (bien)", "Netflix (servicio)", "Concierto (experiencia)"],
        detail: "Es más que un objeto físico: incluye características, diseño, calidad, marca y empaque.",
    },
    DefaultCard {
        term: "Precio",
        definition: "Cantidad de dinero que se cobra por un producto o servicio.",
        back: "Es el único elemento del marketing mix que genera ingresos; los demás representan costos. El precio debe reflejar el valor percibido por el cliente y ser competitivo en el mercado.",
        examples: &["Premium: Rolex", "Penetración: Xiaomi", "Freemium: Spotify"],
        detail: "Estrategias: Descreme, penetración, competitiva, psicológica, por valor.",
    },
    DefaultCard {
        term: "Plaza (Distribución)",
        definition: "Actividades para que el producto esté disponible y accesible para los clientes meta.",
        back: "Incluye canales, cobertura, surtido, ubicaciones y logística. La plaza correcta significa estar donde y cuando el cliente te necesita.",
        examples: &["Directa: Tesla", "Intensiva: Coca-Cola", "Selectiva: Apple Store"],
        detail: "Canales: minoristas, mayoristas, online, directos, híbridos.",
    },
    DefaultCard {
        term: "Promoción",
        definition: "Actividades que comunican las ventajas del producto y persuaden a los clientes.",
        back: "Incluye publicidad, ventas personales, promoción de ventas, relaciones públicas y marketing directo. La voz de tu marca hacia el mercado.",
        examples: &["Publicidad TV", "Influencers", "Email marketing", "SEO/SEM"],
        detail: "Mix promocional: push (empujar) vs pull (atraer) strategies.",
    },
    DefaultCard {
        term: "Segmentación",
        definition: "Dividir el mercado en grupos con necesidades y comportamientos diferentes.",
        back: "Permite personalizar ofertas y mensajes para cada grupo, aumentando efectividad. No todos los clientes son iguales ni quieren lo mismo.",
        examples: &["Demográfica", "Psicográfica", "Conductual", "Geográfica"],
        detail: "Base para targeting (a quién) y positioning (cómo te perciben).",
    },
    DefaultCard {
        term: "Posicionamiento",
        definition: "Lugar que ocupa el producto en la mente del consumidor vs competidores.",
        back: "No es lo que haces al producto, sino lo que haces en la mente del prospecto. Define cómo quieres que te perciban y qué te hace único.",
        examples: &["Volvo = Seguridad", "Apple = Innovación", "IKEA = Económico"],
        detail: "Estrategias: por atributo, precio, uso, usuario, competidor, categoría.",
    },
];

const DEFAULT_CASES: &[[&str; 7]] = &[
    [
        "starbucks",
        "Starbucks",
        "☕",
        "Café premium + experiencia 'tercer lugar' (no casa, no trabajo)",
        "Premium ($4-6 por café, justificado por calidad y ambiente)",
        "Ubicaciones estratégicas de alto tráfico + app móvil para pedidos",
        "Programa de lealtad Rewards + marketing en redes sociales",
    ],
    [
        "tesla",
        "Tesla",
        "⚡",
        "Vehículos eléctricos de alto rendimiento + tecnología Autopilot",
        "Premium con financiamiento ($40k-$100k+, ahorro en gasolina)",
        "Venta directa online + showrooms propios (sin concesionarios)",
        "Word of mouth + Elon Musk como influencer + test drives",
    ],
    [
        "mcdonalds",
        "McDonald's",
        "🍔",
        "Comida rápida estandarizada + experiencia consistente global",
        "Económico accesible ($1-$10, combos de valor)",
        "Drive-thru, locales, aeropuertos, delivery apps",
        "Publicidad masiva TV + Happy Meal + mascota de marca",
    ],
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConceptCard {
    pub icon: &'static str,
    pub tone: &'static str,
    pub term: String,
    pub definition: String,
    pub examples: Vec<String>,
    pub back: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MixCaseView {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub producto: String,
    pub precio: String,
    pub plaza: String,
    pub promocion: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarketingMixView {
    pub titulo: String,
    pub descripcion: String,
    pub casos: Vec<MixCaseView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeyConceptsView {
    pub label: String,
    pub titulo: String,
    pub texto: String,
    pub cards: Vec<ConceptCard>,
    pub marketing_mix: MarketingMixView,
}

pub fn resolve(block: &ContentBlock) -> KeyConceptsView {
    let cards = match block.columnas.as_deref() {
        Some(cols) if !cols.is_empty() => cols
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let detail = nth(block.items_secundarios.as_deref(), i)
                    .and_then(|item| item.texto.clone());
                ConceptCard {
                    icon: ICONS.get(i).copied().unwrap_or(ICONS[0]),
                    tone: TONES[i % TONES.len()],
                    term: col.titulo.clone().unwrap_or_default(),
                    definition: col.texto.clone().unwrap_or_default(),
                    examples: opt_list(col.bullets.as_deref()),
                    back: detail.clone().unwrap_or_else(|| FALLBACK_BACK.to_string()),
                    detail: detail.unwrap_or_else(|| FALLBACK_DETAIL.to_string()),
                }
            })
            .collect(),
        _ => DEFAULT_CARDS
            .iter()
            .enumerate()
            .map(|(i, card)| ConceptCard {
                icon: ICONS[i],
                tone: TONES[i],
                term: card.term.to_string(),
                definition: card.definition.to_string(),
                examples: card.examples.iter().map(|e| e.to_string()).collect(),
                back: card.back.to_string(),
                detail: card.detail.to_string(),
            })
            .collect(),
    };

    KeyConceptsView {
        label: text(block.subtitulo.as_deref(), "Sección 02"),
        titulo: text(block.titulo.as_deref(), "Conceptos Fundamentales del Marketing"),
        texto: text(
            block.texto.as_deref(),
            "Los pilares del marketing que todo profesional debe dominar: desde el marketing mix clásico hasta la segmentación y el posicionamiento estratégico.",
        ),
        cards,
        marketing_mix: resolve_mix(block.marketing_mix.as_ref()),
    }
}

fn resolve_mix(mix: Option<&MarketingMix>) -> MarketingMixView {
    let casos: Vec<MarketingMixCase> = match mix.and_then(|m| m.casos.as_deref()) {
        Some(casos) if !casos.is_empty() => casos.to_vec(),
        _ => DEFAULT_CASES
            .iter()
            .map(|[id, name, logo, producto, precio, plaza, promocion]| MarketingMixCase {
                id: Some(id.to_string()),
                name: Some(name.to_string()),
                logo: Some(logo.to_string()),
                producto: Some(producto.to_string()),
                precio: Some(precio.to_string()),
                plaza: Some(plaza.to_string()),
                promocion: Some(promocion.to_string()),
            })
            .collect(),
    };

    MarketingMixView {
        titulo: text(
            mix.and_then(|m| m.titulo.as_deref()),
            "Las 4Ps: El Marketing Mix en Acción",
        ),
        descripcion: text(
            mix.and_then(|m| m.descripcion.as_deref()),
            "Propuestas por E. Jerome McCarthy, estas variables deben trabajar en perfecta sincronía. Analiza cómo las aplican los líderes del mercado:",
        ),
        casos: casos
            .into_iter()
            .enumerate()
            .map(|(i, c)| MixCaseView {
                id: c.id.unwrap_or_else(|| format!("caso-{}", i + 1)),
                name: c.name.unwrap_or_default(),
                logo: c.logo.unwrap_or_default(),
                producto: c.producto.unwrap_or_default(),
                precio: c.precio.unwrap_or_default(),
                plaza: c.plaza.unwrap_or_default(),
                promocion: c.promocion.unwrap_or_default(),
                selected: i == 0,
            })
            .collect(),
    }
}
