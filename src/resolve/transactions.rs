use serde::Serialize;

use crate::course::types::{AcidProperty, InfoCard};
use crate::course::ContentBlock;

use super::{first_text, text};

const DEFAULT_SNIPPET: &str = "-- Iniciar una transacción
BEGIN TRANSACTION;

-- Operaciones de la transacción
UPDATE cuentas SET saldo = saldo - 100 WHERE id = 1;
UPDATE cuentas SET saldo = saldo + 100 WHERE id = 2;

-- Confirmar cambios (hacer permanentes)
COMMIT;

-- O revertir cambios (en caso de error)
ROLLBACK;";

const KNOWN_ICONS: &[&str] = &["database", "shield", "lock", "refresh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Warning,
    Neutral,
}

impl StepStatus {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("success") => Self::Success,
            Some("warning") => Self::Warning,
            _ => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepView {
    pub number: usize,
    pub action: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyView {
    pub letter: String,
    pub name: String,
    pub icon: &'static str,
    pub description: String,
    pub scenario: String,
    pub steps: Vec<StepView>,
    pub result: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InfoCardView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionsView {
    pub anchor: String,
    pub lesson: String,
    pub titulo: String,
    pub descripcion: String,
    /// Shown instead of the section body when no properties were given.
    pub notice: Option<String>,
    pub properties: Vec<PropertyView>,
    pub snippet_sql: String,
    pub commit: InfoCardView,
    pub rollback: InfoCardView,
}

pub fn resolve(block: &ContentBlock) -> TransactionsView {
    let properties: Vec<PropertyView> = block
        .propiedades
        .iter()
        .flatten()
        .enumerate()
        .map(|(i, p)| property(i, p))
        .collect();

    let notice = properties.is_empty().then(|| {
        format!(
            "No se encontraron block.propiedades para la sección \"{}\". Asegúrate de que el JSON incluya el arreglo propiedades[] con las propiedades ACID.",
            block.titulo.as_deref().unwrap_or_default()
        )
    });

    TransactionsView {
        anchor: text(block.tipo_figma.as_deref(), "section-transactions"),
        lesson: format!(
            "Lección {}",
            text(block.leccion_numero.as_deref(), "7 de 10")
        ),
        titulo: text(block.titulo.as_deref(), "Transacciones y Propiedades ACID"),
        descripcion: first_text(
            &[block.descripcion.as_deref(), block.texto.as_deref()],
            "Las transacciones son unidades lógicas de trabajo que garantizan la integridad de los datos. ACID define las propiedades que debe cumplir toda transacción confiable.",
        ),
        notice,
        properties,
        snippet_sql: text(block.snippet_sql.as_deref(), DEFAULT_SNIPPET),
        commit: info_card(
            block.commit_info.as_ref(),
            "COMMIT",
            "Confirma todos los cambios realizados en la transacción. Los hace permanentes y visibles para otras transacciones.",
        ),
        rollback: info_card(
            block.rollback_info.as_ref(),
            "ROLLBACK",
            "Deshace todos los cambios de la transacción. Devuelve la base de datos al estado anterior al BEGIN.",
        ),
    }
}

fn property(index: usize, p: &AcidProperty) -> PropertyView {
    let example = p.example.clone().unwrap_or_default();
    let icon = p
        .icon
        .as_deref()
        .and_then(|i| KNOWN_ICONS.iter().find(|k| **k == i.trim()))
        .copied()
        .unwrap_or(KNOWN_ICONS[0]);
    PropertyView {
        letter: p.letter.clone().unwrap_or_default(),
        name: p.name.clone().unwrap_or_default(),
        icon,
        description: p.description.clone().unwrap_or_default(),
        scenario: example.scenario.unwrap_or_default(),
        steps: example
            .steps
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(n, s)| StepView {
                number: n + 1,
                action: s.action.unwrap_or_default(),
                status: StepStatus::parse(s.status.as_deref()),
            })
            .collect(),
        result: example.result.unwrap_or_default(),
        active: index == 0,
    }
}

fn info_card(card: Option<&InfoCard>, title: &str, description: &str) -> InfoCardView {
    InfoCardView {
        title: text(card.and_then(|c| c.title.as_deref()), title),
        description: text(card.and_then(|c| c.description.as_deref()), description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::BlockKind;

    #[test]
    fn missing_properties_produce_notice() {
        let mut block = ContentBlock::of_kind(BlockKind::Transactions);
        block.titulo = Some("ACID".to_string());
        let view = resolve(&block);
        assert!(view.properties.is_empty());
        let notice = view.notice.expect("notice");
        assert!(notice.contains("\"ACID\""));
        assert_eq!(view.anchor, "section-transactions");
        assert_eq!(view.lesson, "Lección 7 de 10");
    }

    #[test]
    fn first_property_active_and_steps_classified() {
        let raw = r#"{
      "tipo": "transactions",
      "leccionNumero": "4 de 8",
      "texto": "cuerpo",
      "propiedades": [
        {"letter": "A", "name": "Atomicidad", "icon": "shield",
         "example": {"scenario": "Transferencia", "result": "ok",
           "steps": [{"action": "Debitar", "status": "success"},
                     {"action": "Falla", "status": "warning"},
                     {"action": "Revertir"}]}},
        {"letter": "C", "name": "Consistencia", "icon": "unknown"}
      ],
      "commitInfo": {"title": "Confirmar"}
    }"#;
        let block: ContentBlock = serde_json::from_str(raw).expect("block");
        let view = resolve(&block);
        assert!(view.notice.is_none());
        assert_eq!(view.lesson, "Lección 4 de 8");
        assert_eq!(view.descripcion, "cuerpo");
        assert!(view.properties[0].active);
        assert!(!view.properties[1].active);
        assert_eq!(view.properties[0].icon, "shield");
        assert_eq!(view.properties[1].icon, "database");
        let statuses: Vec<StepStatus> = view.properties[0].steps.iter().map(|s| s.status).collect();
        assert_eq!(statuses, [StepStatus::Success, StepStatus::Warning, StepStatus::Neutral]);
        assert_eq!(view.commit.title, "Confirmar");
        assert!(view.commit.description.starts_with("Confirma todos"));
        assert_eq!(view.rollback.title, "ROLLBACK");
        assert!(view.snippet_sql.contains("BEGIN TRANSACTION;"));
    }
}
