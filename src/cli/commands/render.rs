use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::args::RenderArgs;
use crate::error::CliError;
use crate::render::helpers::{page_path, write_string};
use crate::render::preview::CourseBuilder;
use crate::render::provenance::{write_provenance, Provenance};
use crate::render::templates::{select_template, TemplateId};
use crate::settings::Settings;

use super::read_input;

/// Where a rendered page ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub html: String,
    pub page: Option<PathBuf>,
    pub provenance: Option<PathBuf>,
}

pub fn run(args: &RenderArgs, settings: &Settings) -> Result<(), CliError> {
    let raw = read_input(&args.input)?;
    let template = match args.template.as_deref() {
        Some(id) => select_template(id),
        None => settings.template(),
    };
    let output = render_document(
        &raw,
        template,
        args.out.as_deref(),
        settings,
        settings.write_provenance && !args.no_provenance,
    )?;
    match output.page {
        Some(page) => println!("{}", page.display()),
        None => print!("{}", output.html),
    }
    Ok(())
}

/// Ingests `raw`, renders it with `template` and writes the page when a
/// target is known. Without a target the HTML is only returned.
pub fn render_document(
    raw: &str,
    template: TemplateId,
    out: Option<&Path>,
    settings: &Settings,
    with_provenance: bool,
) -> Result<RenderOutput, CliError> {
    let mut builder = CourseBuilder::new(template)?;
    let course = builder.submit(raw)?.clone();
    let html = builder.render()?;

    let Some(page) = output_target(out, settings, &course.titulo_curso) else {
        return Ok(RenderOutput {
            html,
            page: None,
            provenance: None,
        });
    };

    write_string(&page, &html).map_err(CliError::Io)?;
    info!(page = %page.display(), template = template.as_str(), "page written");

    let provenance = if with_provenance {
        let record = Provenance::new(raw, &course, template);
        Some(write_provenance(&page, &record)?)
    } else {
        None
    };

    Ok(RenderOutput {
        html,
        page: Some(page),
        provenance,
    })
}

/// An existing directory gets a file named after the course; any other path
/// is used as given. Without `--out` the settings' output directory applies.
fn output_target(out: Option<&Path>, settings: &Settings, titulo_curso: &str) -> Option<PathBuf> {
    match out {
        Some(path) if path.is_dir() => Some(page_path(path, titulo_curso)),
        Some(path) => Some(path.to_path_buf()),
        None => settings
            .output_dir()
            .map(|dir| page_path(&dir, titulo_curso)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use uuid::Uuid;

    const COURSE: &str = r#"{"tituloCurso":"Bases de Datos","intro":"Hola","secciones":[]}"#;

    #[test]
    fn without_target_only_returns_html() {
        let output = render_document(COURSE, TemplateId::Minimal, None, &Settings::default(), true)
            .expect("render");
        assert!(output.html.contains("Bases de Datos"));
        assert_eq!(output.page, None);
        assert_eq!(output.provenance, None);
    }

    #[test]
    fn directory_target_uses_course_slug() {
        let dir = std::env::temp_dir().join(format!("render-cmd-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("dir");
        let output = render_document(COURSE, TemplateId::Minimal, Some(&dir), &Settings::default(), true)
            .expect("render");
        assert_eq!(output.page, Some(dir.join("bases-de-datos.html")));
        assert_eq!(output.provenance, Some(dir.join("bases-de-datos.html.provenance.json")));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn settings_output_dir_applies_without_flag() {
        let dir = std::env::temp_dir().join(format!("render-cmd-test-{}", Uuid::new_v4()));
        let settings = Settings {
            output_dir: Some(dir.to_string_lossy().to_string()),
            write_provenance: false,
            ..Settings::default()
        };
        let output = render_document(COURSE, TemplateId::DatabaseCourse, None, &settings, false)
            .expect("render");
        let page = output.page.expect("page");
        assert!(page.starts_with(&dir));
        assert!(page.exists());
        assert_eq!(output.provenance, None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn invalid_input_maps_to_input_exit_code() {
        let err = render_document("{", TemplateId::DEFAULT, None, &Settings::default(), true)
            .expect_err("syntax");
        assert_eq!(err.exit_code(), ExitCode::INVALID_INPUT);
    }
}
