use tracing::info;

use crate::cli::args::ValidateArgs;
use crate::course::{ingest, CourseData};
use crate::error::CliError;

use super::read_input;

pub fn run(args: &ValidateArgs) -> Result<(), CliError> {
    let raw = read_input(&args.input)?;
    let course = ingest(&raw)?;
    info!(titulo = course.titulo_curso.as_str(), "document accepted");
    print!("{}", summary(&course));
    Ok(())
}

/// Short human-readable description of an accepted course.
pub fn summary(course: &CourseData) -> String {
    let mut lines = vec![format!("tituloCurso: {}", course.titulo_curso)];
    lines.push(format!("secciones: {}", course.secciones.as_ref().map_or(0, Vec::len)));
    match &course.landing {
        None => lines.push("landing: ausente".to_string()),
        Some(_) => {
            let blocks = course.content_blocks();
            lines.push(format!("contentBlocks: {}", blocks.len()));
            for (index, block) in blocks.iter().enumerate() {
                let marker = if block.tipo.is_known() { "" } else { " (genérico)" };
                lines.push(format!("  {}. {}{marker}", index + 1, block.tipo.as_str()));
            }
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_blocks_in_order_and_flags_unknown_tags() {
        let course = ingest(
            r#"{"tituloCurso":"BD","landing":{"contentBlocks":[{"tipo":"sqlBasics"},{"tipo":"unknownXYZ"}]}}"#,
        )
        .expect("course");
        let text = summary(&course);
        assert!(text.starts_with("tituloCurso: BD\n"));
        assert!(text.contains("contentBlocks: 2"));
        assert!(text.contains("  1. sqlBasics\n"));
        assert!(text.contains("  2. unknownXYZ (genérico)\n"));
    }

    #[test]
    fn legacy_document_reports_missing_landing() {
        let course = ingest(r#"{"tituloCurso":"X","secciones":[{"titulo":"a"}]}"#).expect("course");
        let text = summary(&course);
        assert!(text.contains("secciones: 1"));
        assert!(text.contains("landing: ausente"));
    }
}
