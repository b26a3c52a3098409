use crate::render::templates::TemplateId;

pub fn run() {
    print!("{}", listing());
}

/// One `id<TAB>label` line per design, the default marked with `*`.
pub fn listing() -> String {
    TemplateId::ALL
        .iter()
        .map(|t| {
            let marker = if *t == TemplateId::DEFAULT { " *" } else { "" };
            format!("{}\t{}{marker}\n", t.as_str(), t.label())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_design_once() {
        let text = listing();
        assert_eq!(text.lines().count(), TemplateId::ALL.len());
        assert!(text.contains("databaseFigma\tLanding Bases de Datos (Figma) *"));
        assert!(text.contains("minimal\tMinimal\n"));
    }
}
