use serde::Serialize;

use crate::course::types::{CourseData, CourseLanding, LandingStarterQuiz};

use super::{opt_list, opt_text, text};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionView {
    pub number: usize,
    pub titulo: String,
    pub texto: Option<String>,
    pub bullets: Vec<String>,
    pub ejemplo: Option<String>,
    pub quiz_pregunta: Option<String>,
    pub quiz_respuesta: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MinimalView {
    pub titulo_curso: String,
    pub intro: Option<String>,
    pub secciones: Vec<SectionView>,
    pub resumen: Option<String>,
}

pub fn resolve_minimal(course: &CourseData) -> MinimalView {
    MinimalView {
        titulo_curso: course.titulo_curso.clone(),
        intro: opt_text(course.intro.as_deref()),
        secciones: course
            .secciones
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, s)| SectionView {
                number: i + 1,
                titulo: text(s.titulo.as_deref(), &format!("Sección {}", i + 1)),
                texto: opt_text(s.texto.as_deref()),
                bullets: opt_list(s.bullets.as_deref()),
                ejemplo: opt_text(s.ejemplo.as_deref()),
                quiz_pregunta: opt_text(s.quiz_pregunta.as_deref()),
                quiz_respuesta: opt_text(s.quiz_respuesta.as_deref()),
            })
            .collect(),
        resumen: opt_text(course.resumen.as_deref()),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitledItem {
    pub titulo: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApplicationView {
    pub campo: String,
    pub rol: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModuleView {
    pub number: usize,
    pub titulo: String,
    pub temas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizOption {
    pub texto: String,
    pub correcta: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizView {
    pub titulo: String,
    pub pregunta: String,
    pub opciones: Vec<QuizOption>,
    pub explicacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Group<T> {
    pub titulo: String,
    pub descripcion: String,
    pub items: Vec<T>,
}

/// Legacy landing sections. Each is `None` when the course leaves it out,
/// so the page simply skips it.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PremiumSections {
    pub idea_central: Option<TitledItem>,
    pub pillars: Option<Group<TitledItem>>,
    pub learning_outcomes: Option<Group<String>>,
    pub applications: Option<Group<ApplicationView>>,
    pub syllabus: Option<Group<ModuleView>>,
    pub starter_quiz: Option<QuizView>,
}

pub fn resolve_premium(landing: Option<&CourseLanding>) -> PremiumSections {
    let Some(landing) = landing else {
        return PremiumSections::default();
    };

    PremiumSections {
        idea_central: landing.idea_central.as_ref().map(|idea| TitledItem {
            titulo: text(idea.concepto.as_deref(), "Idea central"),
            descripcion: idea.frase_clave.clone().unwrap_or_default(),
        }),
        pillars: landing.pillars.as_ref().map(|p| Group {
            titulo: text(p.titulo.as_deref(), "Pilares del curso"),
            descripcion: p.descripcion.clone().unwrap_or_default(),
            items: p
                .pilares
                .iter()
                .flatten()
                .map(|pilar| TitledItem {
                    titulo: pilar.titulo.clone().unwrap_or_default(),
                    descripcion: pilar.descripcion.clone().unwrap_or_default(),
                })
                .collect(),
        }),
        learning_outcomes: landing.learning_outcomes.as_ref().map(|lo| Group {
            titulo: text(lo.titulo.as_deref(), "Lo que aprenderás"),
            descripcion: String::new(),
            items: opt_list(lo.bullets.as_deref()),
        }),
        applications: landing.applications.as_ref().map(|a| Group {
            titulo: text(a.titulo.as_deref(), "Aplicaciones profesionales"),
            descripcion: a.descripcion.clone().unwrap_or_default(),
            items: a
                .items
                .iter()
                .flatten()
                .map(|item| ApplicationView {
                    campo: item.campo.clone().unwrap_or_default(),
                    rol: item.rol.clone().unwrap_or_default(),
                    descripcion: item.descripcion.clone().unwrap_or_default(),
                })
                .collect(),
        }),
        syllabus: landing.syllabus.as_ref().map(|s| Group {
            titulo: text(s.titulo.as_deref(), "Temario"),
            descripcion: s.descripcion.clone().unwrap_or_default(),
            items: s
                .unidades
                .iter()
                .flatten()
                .enumerate()
                .map(|(i, u)| ModuleView {
                    number: i + 1,
                    titulo: text(u.titulo.as_deref(), &format!("Unidad {}", i + 1)),
                    temas: opt_list(u.temas.as_deref()),
                })
                .collect(),
        }),
        starter_quiz: landing.starter_quiz.as_ref().map(quiz),
    }
}

fn quiz(q: &LandingStarterQuiz) -> QuizView {
    QuizView {
        titulo: text(q.titulo.as_deref(), "Quiz de inicio"),
        pregunta: q.pregunta.clone().unwrap_or_default(),
        opciones: q
            .opciones
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, o)| QuizOption {
                texto: o.clone(),
                correcta: q.respuesta_correcta == Some(i),
            })
            .collect(),
        explicacion: opt_text(q.explicacion.as_deref()),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClosingView {
    pub mensaje: String,
    pub call_to_action: String,
}

pub fn resolve_closing(course: &CourseData) -> Option<ClosingView> {
    let closing = course.closing()?;
    Some(ClosingView {
        mensaje: text(
            closing.mensaje.as_deref(),
            "Has llegado al final del recorrido. Repasa los bloques cuando lo necesites.",
        ),
        call_to_action: text(closing.call_to_action.as_deref(), "Volver al inicio"),
    })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressView {
    pub total: usize,
    pub completed: usize,
    pub percent: usize,
    pub intro: Option<String>,
}

pub fn resolve_progress(course: &CourseData) -> ProgressView {
    let total = course.content_blocks().len().max(1);
    let completed = 0;
    ProgressView {
        total,
        completed,
        percent: completed * 100 / total,
        intro: opt_text(course.intro.as_deref()),
    }
}
