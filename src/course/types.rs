use serde::{Deserialize, Serialize};

use super::block::BlockKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    pub titulo: Option<String>,
    pub texto: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub ejemplo: Option<String>,
    pub quiz_pregunta: Option<String>,
    pub quiz_respuesta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStat {
    pub label: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingOverview {
    pub titulo: Option<String>,
    pub texto: Option<String>,
    pub badge: Option<String>,
    pub programa: Option<String>,
    pub titulo_principal: Option<String>,
    pub titulo_resaltado: Option<String>,
    pub descripcion: Option<String>,
    pub intro: Option<String>,
    pub duracion: Option<String>,
    pub nivel: Option<String>,
    pub estudiantes: Option<String>,
    pub stats: Option<Vec<HeroStat>>,
    pub titulo_curso: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaCentral {
    pub concepto: Option<String>,
    pub frase_clave: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPillar {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPillars {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub pilares: Option<Vec<LandingPillar>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingLearningOutcomes {
    pub titulo: Option<String>,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingApplication {
    pub campo: Option<String>,
    pub rol: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingApplications {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub items: Option<Vec<LandingApplication>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingModule {
    pub titulo: Option<String>,
    pub temas: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingSyllabus {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub unidades: Option<Vec<LandingModule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingStarterQuiz {
    pub titulo: Option<String>,
    pub pregunta: Option<String>,
    pub opciones: Option<Vec<String>>,
    pub respuesta_correcta: Option<usize>,
    pub explicacion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingClosing {
    pub mensaje: Option<String>,
    pub call_to_action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLanding {
    pub overview: Option<LandingOverview>,
    pub idea_central: Option<IdeaCentral>,
    pub pillars: Option<LandingPillars>,
    pub learning_outcomes: Option<LandingLearningOutcomes>,
    pub applications: Option<LandingApplications>,
    pub syllabus: Option<LandingSyllabus>,
    pub starter_quiz: Option<LandingStarterQuiz>,
    pub content_blocks: Option<Vec<ContentBlock>>,
    pub cierre: Option<LandingClosing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub id: Option<String>,
    pub titulo_curso: String,
    pub intro: Option<String>,
    pub secciones: Option<Vec<CourseSection>>,
    pub resumen: Option<String>,
    pub landing: Option<CourseLanding>,
}

impl CourseData {
    pub fn content_blocks(&self) -> &[ContentBlock] {
        self.landing
            .as_ref()
            .and_then(|l| l.content_blocks.as_deref())
            .unwrap_or(&[])
    }

    pub fn overview(&self) -> Option<&LandingOverview> {
        self.landing.as_ref().and_then(|l| l.overview.as_ref())
    }

    pub fn closing(&self) -> Option<&LandingClosing> {
        self.landing.as_ref().and_then(|l| l.cierre.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockColumn {
    pub titulo: Option<String>,
    pub texto: Option<String>,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryItem {
    pub titulo: Option<String>,
    pub texto: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedExample {
    pub titulo: Option<String>,
    pub enunciado: Option<String>,
    pub desarrollo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcidStep {
    pub action: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcidExample {
    pub scenario: Option<String>,
    pub steps: Option<Vec<AcidStep>>,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcidProperty {
    pub letter: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub example: Option<AcidExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCard {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingMixCase {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub producto: Option<String>,
    pub precio: Option<String>,
    pub plaza: Option<String>,
    pub promocion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingMix {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub casos: Option<Vec<MarketingMixCase>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLevel {
    pub level: Option<String>,
    pub icon: Option<String>,
    pub desc: Option<String>,
    pub color: Option<String>,
    pub detail: Option<String>,
    pub example: Option<String>,
    pub key_point: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub examples: Option<String>,
    pub strategy: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCyclePhase {
    pub stage: Option<String>,
    pub sales: Option<String>,
    pub profit: Option<String>,
    pub strategy: Option<String>,
    pub example: Option<String>,
    pub color: Option<String>,
    pub actions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCycle {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub phases: Option<Vec<LifeCyclePhase>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBullet {
    pub label: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCaseStudy {
    pub titulo: Option<String>,
    pub valor_marca: Option<String>,
    pub asociaciones: Option<String>,
    pub resultado: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStrategy {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub bullets: Option<Vec<BrandBullet>>,
    pub case_study: Option<BrandCaseStudy>,
}

/// One tagged unit of landing content. Every field is optional; renderers
/// resolve missing values against their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    #[serde(default)]
    pub tipo: BlockKind,
    pub titulo: Option<String>,
    pub subtitulo: Option<String>,
    pub texto: Option<String>,
    pub tipo_figma: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub columnas: Option<Vec<BlockColumn>>,
    pub pasos: Option<Vec<String>>,
    pub ejemplo: Option<WorkedExample>,
    pub items_secundarios: Option<Vec<SecondaryItem>>,
    pub checklist: Option<Vec<String>>,
    pub leccion_numero: Option<String>,
    pub descripcion: Option<String>,
    pub propiedades: Option<Vec<AcidProperty>>,
    #[serde(rename = "snippetSQL")]
    pub snippet_sql: Option<String>,
    pub commit_info: Option<InfoCard>,
    pub rollback_info: Option<InfoCard>,
    pub marketing_mix: Option<MarketingMix>,
    pub product_levels: Option<Vec<ProductLevel>>,
    pub product_categories: Option<Vec<ProductCategory>>,
    pub life_cycle: Option<LifeCycle>,
    pub brand_strategy: Option<BrandStrategy>,
}

impl ContentBlock {
    pub fn of_kind(tipo: BlockKind) -> Self {
        Self {
            tipo,
            ..Self::default()
        }
    }
}
