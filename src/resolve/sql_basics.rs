use serde::Serialize;

use crate::course::ContentBlock;

use super::{list, nth, text};

const DEFAULT_RESULT_MESSAGE: &str = "Consulta ejecutada correctamente.";

struct CommandSlot {
    title: &'static str,
    description: &'static str,
    code: &'static str,
    result_message: Option<&'static str>,
}

const COMMAND_SLOTS: &[CommandSlot] = &[
    CommandSlot {
        title: "SELECT - Consultar Datos",
        description: "Recupera datos de una o más tablas",
        code: "-- Seleccionar todas las columnas
SELECT * FROM estudiantes;

-- Seleccionar columnas específicas
SELECT nombre, email FROM estudiantes;

-- Con condición WHERE
SELECT * FROM estudiantes
WHERE promedio > 8.0;",
        result_message: None,
    },
    CommandSlot {
        title: "INSERT - Insertar Datos",
        description: "Agrega nuevos registros a una tabla",
        code: "-- Insertar un registro
INSERT INTO estudiantes (nombre, email, promedio)
VALUES ('María Torres', 'maria@email.com', 8.8);

-- Insertar múltiples registros
INSERT INTO estudiantes (nombre, email, promedio)
VALUES
  ('Juan Pérez', 'juan@email.com', 7.5),
  ('Laura Ruiz', 'laura@email.com', 9.0);",
        result_message: Some("3 registros insertados exitosamente"),
    },
    CommandSlot {
        title: "UPDATE - Actualizar Datos",
        description: "Modifica registros existentes",
        code: "-- Actualizar un registro específico
UPDATE estudiantes
SET promedio = 9.5
WHERE id = 1;

-- Actualizar múltiples campos
UPDATE estudiantes
SET promedio = 8.0, email = 'nuevo@email.com'
WHERE nombre = 'Juan Pérez';",
        result_message: Some("Registros actualizados: 1"),
    },
    CommandSlot {
        title: "DELETE - Eliminar Datos",
        description: "Elimina registros de una tabla",
        code: "-- Eliminar un registro específico
DELETE FROM estudiantes
WHERE id = 5;

-- Eliminar con condición
DELETE FROM estudiantes
WHERE promedio < 6.0;

-- ⚠️ Cuidado: esto elimina TODOS los registros
DELETE FROM estudiantes;",
        result_message: Some("1 registro eliminado"),
    },
];

const BEST_PRACTICES: &[&str] = &[
    "Siempre usa WHERE en UPDATE y DELETE para evitar modificar/eliminar todos los registros",
    "Verifica tus consultas con SELECT antes de ejecutar UPDATE o DELETE",
    "Usa mayúsculas para palabras clave SQL (SELECT, FROM, WHERE) para mejor legibilidad",
    "Comenta tu código SQL para explicar consultas complejas",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultRow {
    pub id: u32,
    pub nombre: &'static str,
    pub promedio: f32,
}

const RESULT_ROWS: &[ResultRow] = &[
    ResultRow {
        id: 1,
        nombre: "Ana García",
        promedio: 9.2,
    },
    ResultRow {
        id: 2,
        nombre: "Carlos López",
        promedio: 8.5,
    },
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SqlCommandView {
    pub title: String,
    pub keyword: String,
    pub caption: String,
    pub description: String,
    pub code: String,
    pub result_rows: Vec<ResultRow>,
    pub result_message: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SqlBasicsView {
    pub lesson: String,
    pub titulo: String,
    pub texto: String,
    pub commands: Vec<SqlCommandView>,
    pub best_practices: Vec<String>,
}

pub fn resolve(block: &ContentBlock) -> SqlBasicsView {
    let commands: Vec<SqlCommandView> = match block.columnas.as_deref() {
        Some(cols) if !cols.is_empty() => cols
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let slot = COMMAND_SLOTS.get(i).unwrap_or(&COMMAND_SLOTS[0]);
                let description = col.bullets.as_deref().and_then(|b| b.first()).map(String::as_str);
                command(
                    i,
                    text(col.titulo.as_deref(), slot.title),
                    text(description, slot.description),
                    text(col.texto.as_deref(), slot.code),
                    text(
                        nth(block.checklist.as_deref(), i).map(String::as_str),
                        slot.result_message.unwrap_or(DEFAULT_RESULT_MESSAGE),
                    ),
                )
            })
            .collect(),
        _ => COMMAND_SLOTS
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                command(
                    i,
                    slot.title.to_string(),
                    slot.description.to_string(),
                    slot.code.to_string(),
                    slot.result_message.unwrap_or(DEFAULT_RESULT_MESSAGE).to_string(),
                )
            })
            .collect(),
    };

    SqlBasicsView {
        lesson: text(block.subtitulo.as_deref(), "Lección 3 de 10"),
        titulo: text(block.titulo.as_deref(), "SQL Básico: CRUD"),
        texto: text(
            block.texto.as_deref(),
            "SQL es el lenguaje estándar para interactuar con bases de datos relacionales. Aquí verás las operaciones fundamentales: Create, Read, Update, Delete.",
        ),
        commands,
        best_practices: list(block.bullets.as_deref(), BEST_PRACTICES),
    }
}

fn command(
    index: usize,
    title: String,
    description: String,
    code: String,
    result_message: String,
) -> SqlCommandView {
    let mut parts = title.splitn(2, " - ");
    let keyword = parts.next().unwrap_or_default().to_string();
    let caption = parts.next().unwrap_or_default().to_string();
    SqlCommandView {
        keyword,
        caption,
        title,
        description,
        code,
        result_rows: if index == 0 { RESULT_ROWS.to_vec() } else { Vec::new() },
        result_message,
        active: index == 0,
    }
}
