use std::fs;
use std::path::{Path, PathBuf};

pub fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Unable to create directory {}: {e}", path.display()))
}

pub fn write_string(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| format!("Unable to write {}: {e}", path.display()))
}

pub fn read_string(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Unable to read {}: {e}", path.display()))
}

/// `page.html` -> `page.html.provenance.json`, next to the page.
pub fn provenance_path(out: &Path) -> PathBuf {
    let mut name = out.as_os_str().to_os_string();
    name.push(".provenance.json");
    PathBuf::from(name)
}

/// Output file inside `dir` for a course title, e.g. `dir/bases-de-datos.html`.
pub fn page_path(dir: &Path, titulo_curso: &str) -> PathBuf {
    let slug = crate::util::text::slugify(titulo_curso);
    let stem = if slug.is_empty() { "curso".to_string() } else { slug };
    dir.join(format!("{stem}.html"))
}
