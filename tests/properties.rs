use proptest::prelude::*;

use course_landing::course::{ingest, BlockKind, ContentBlock};
use course_landing::render::blocks::render_blocks;
use course_landing::render::preview::render_page;
use course_landing::render::registry::BlockRegistry;
use course_landing::render::templates::{engine, TemplateId};

const TAGS: &[&str] = &[
    "introduction",
    "entityRelationship",
    "sqlBasics",
    "normalization",
    "databaseTypes",
    "transactions",
    "conceptos",
    "producto",
    "segmentacion",
    "unknownXYZ",
];

fn template_strategy() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(TemplateId::ALL.to_vec())
}

fn tags_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(TAGS.to_vec()), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fragments_follow_input_order(tags in tags_strategy(), template in template_strategy()) {
        let tera = engine().expect("engine");
        let blocks: Vec<ContentBlock> = tags
            .iter()
            .map(|tag| ContentBlock::of_kind(BlockKind::parse(tag)))
            .collect();
        let fragments = render_blocks(&blocks, &BlockRegistry::for_template(template), &tera)
            .expect("render");
        let kinds: Vec<&str> = fragments.iter().map(|f| f.kind.as_str()).collect();
        prop_assert_eq!(kinds, tags.clone());
        for (i, fragment) in fragments.iter().enumerate() {
            prop_assert_eq!(fragment.position, i);
        }
    }

    #[test]
    fn rendering_is_deterministic(
        tags in tags_strategy(),
        titulo in "[A-Za-z][A-Za-z ]{0,20}",
        template in template_strategy(),
    ) {
        let blocks: Vec<String> = tags
            .iter()
            .map(|tag| format!(r#"{{"tipo":"{tag}","titulo":"{titulo}"}}"#))
            .collect();
        let raw = format!(
            r#"{{"tituloCurso":"{titulo}","landing":{{"contentBlocks":[{}]}}}}"#,
            blocks.join(",")
        );
        let course = ingest(&raw).expect("course");
        let tera = engine().expect("engine");
        let first = render_page(&course, template, &tera).expect("first");
        let second = render_page(&course, template, &tera).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_text_never_panics_ingest(raw in ".{0,64}") {
        let _ = ingest(&raw);
    }
}
