use serde::Serialize;

use crate::course::types::{CourseData, HeroStat, LandingOverview};

use super::{first_text, opt_text, text};

const FIGMA_BADGE: &str = "Administración de Empresas";
const FIGMA_TITLE_LINE1: &str = "Fundamentos de";
const FIGMA_TITLE_LINE2: &str = "Mercadotecnia";
const FIGMA_DESCRIPTION: &str = "Aprende los principios esenciales del marketing: desde las 4Ps hasta la segmentación de mercados, comportamiento del consumidor y estrategias de posicionamiento que utilizan las empresas líderes mundiales.";
const FIGMA_DURATION: &str = "6 semanas";
const FIGMA_LEVEL: &str = "Fundamental";
const FIGMA_STUDENTS: &str = "3,200+";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub icon: &'static str,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigmaHeroView {
    pub badge: String,
    pub title_line1: String,
    pub title_line2: String,
    pub description: String,
    pub stats: Vec<StatView>,
}

pub fn resolve_figma(overview: Option<&LandingOverview>) -> FigmaHeroView {
    let o = overview.cloned().unwrap_or_default();
    let raw_stats = match o.stats.as_ref() {
        Some(stats) if !stats.is_empty() => stats.clone(),
        _ => vec![
            stat("Duración", text(o.duracion.as_deref(), FIGMA_DURATION)),
            stat("Nivel", text(o.nivel.as_deref(), FIGMA_LEVEL)),
            stat("Estudiantes", text(o.estudiantes.as_deref(), FIGMA_STUDENTS)),
        ],
    };

    FigmaHeroView {
        badge: first_text(&[o.badge.as_deref(), o.programa.as_deref()], FIGMA_BADGE),
        title_line1: text(o.titulo_principal.as_deref(), FIGMA_TITLE_LINE1),
        title_line2: text(o.titulo_resaltado.as_deref(), FIGMA_TITLE_LINE2),
        description: first_text(&[o.descripcion.as_deref(), o.intro.as_deref()], FIGMA_DESCRIPTION),
        stats: raw_stats
            .into_iter()
            .map(|s| {
                let label = s.label.unwrap_or_default();
                StatView {
                    icon: stat_icon(&label),
                    value: s.value.unwrap_or_default(),
                    label,
                }
            })
            .collect(),
    }
}

fn stat(label: &str, value: String) -> HeroStat {
    HeroStat {
        label: Some(label.to_string()),
        value: Some(value),
    }
}

fn stat_icon(label: &str) -> &'static str {
    let normalized = label.to_lowercase();
    if normalized.contains("duración") || normalized.contains("tiempo") {
        "clock"
    } else if normalized.contains("nivel") {
        "chart"
    } else if ["estudiante", "alumno", "personas"]
        .iter()
        .any(|k| normalized.contains(k))
    {
        "users"
    } else {
        "sparkles"
    }
}

const COURSE_BADGES: &[&str] = &[
    "Proyecto guiado",
    "Enfoque práctico",
    "Nivel introductorio / intermedio",
];

const COURSE_MAP: &[&str] = &[
    "Fundamentos y modelo entidad–relación",
    "Normalización y diseño de tablas",
    "SQL básico y consultas avanzadas",
    "Índices, transacciones y contraste con NoSQL",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseHeroView {
    pub titulo: String,
    pub texto: String,
    pub badges: Vec<&'static str>,
    pub course_map: Vec<&'static str>,
}

/// Hero of the database course layout; only shown when an overview exists.
pub fn resolve_course(course: &CourseData) -> Option<CourseHeroView> {
    let o = course.overview()?;
    Some(CourseHeroView {
        titulo: text(o.titulo.as_deref(), &course.titulo_curso),
        texto: first_text(&[o.texto.as_deref(), course.intro.as_deref()], ""),
        badges: COURSE_BADGES.to_vec(),
        course_map: COURSE_MAP.to_vec(),
    })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JoseHeroView {
    pub titulo: String,
    pub texto: String,
    pub call_to_action: String,
    pub badge: String,
    pub feature_title: String,
    pub feature_text: String,
}

pub fn resolve_jose(overview: Option<&LandingOverview>) -> JoseHeroView {
    let o = overview.cloned().unwrap_or_default();
    JoseHeroView {
        titulo: text(o.titulo.as_deref(), "Título del curso"),
        texto: text(o.texto.as_deref(), "Descripción breve del curso."),
        call_to_action: "Comenzar el curso".to_string(),
        badge: opt_text(o.badge.as_deref()).unwrap_or_else(|| "Introducción".to_string()),
        feature_title: "Estrategia + Data".to_string(),
        feature_text: "Análisis sistemático del branding político".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figma_hero_defaults_without_overview() {
        let view = resolve_figma(None);
        assert_eq!(view.badge, FIGMA_BADGE);
        assert_eq!(view.title_line2, FIGMA_TITLE_LINE2);
        let labels: Vec<&str> = view.stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Duración", "Nivel", "Estudiantes"]);
        assert_eq!(view.stats[0].icon, "clock");
        assert_eq!(view.stats[2].value, FIGMA_STUDENTS);
    }

    #[test]
    fn figma_hero_prefers_badge_then_programa() {
        let overview = LandingOverview {
            programa: Some("Ingeniería".to_string()),
            nivel: Some("Avanzado".to_string()),
            ..LandingOverview::default()
        };
        let view = resolve_figma(Some(&overview));
        assert_eq!(view.badge, "Ingeniería");
        assert_eq!(view.stats[1].value, "Avanzado");
        assert_eq!(view.stats[0].value, FIGMA_DURATION);
    }

    #[test]
    fn explicit_stats_replace_the_default_triple() {
        let overview = LandingOverview {
            stats: Some(vec![HeroStat {
                label: Some("Alumnos".to_string()),
                value: Some("10".to_string()),
            }]),
            ..LandingOverview::default()
        };
        let view = resolve_figma(Some(&overview));
        assert_eq!(view.stats.len(), 1);
        assert_eq!(view.stats[0].icon, "users");
    }

    #[test]
    fn empty_stats_list_falls_back_to_defaults() {
        let course = crate::course::ingest(
            r#"{"tituloCurso":"X","landing":{"overview":{"stats":[]}}}"#,
        )
        .expect("course");
        let view = resolve_figma(course.overview());
        assert_eq!(view.stats.len(), 3);
        assert_eq!(view.stats[0].label, "Duración");
        assert_eq!(view.stats[0].value, FIGMA_DURATION);
    }

    #[test]
    fn course_hero_needs_overview() {
        let mut course = CourseData {
            titulo_curso: "BD".to_string(),
            ..CourseData::default()
        };
        assert!(resolve_course(&course).is_none());
        course.landing = Some(crate::course::CourseLanding {
            overview: Some(LandingOverview::default()),
            ..Default::default()
        });
        let view = resolve_course(&course).expect("hero");
        assert_eq!(view.titulo, "BD");
    }
}
