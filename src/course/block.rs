use serde::{Deserialize, Serialize};
use std::fmt;

/// The `tipo` discriminator of a content block. Unknown tags are kept
/// verbatim so the fallback renderer can still label them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BlockKind {
    Introduction,
    EntityRelationship,
    SqlBasics,
    Normalization,
    DatabaseTypes,
    Transactions,
    Conceptos,
    Producto,
    Segmentacion,
    Other(String),
}

impl BlockKind {
    pub const KNOWN: &'static [BlockKind] = &[
        BlockKind::Introduction,
        BlockKind::EntityRelationship,
        BlockKind::SqlBasics,
        BlockKind::Normalization,
        BlockKind::DatabaseTypes,
        BlockKind::Transactions,
        BlockKind::Conceptos,
        BlockKind::Producto,
        BlockKind::Segmentacion,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "introduction" => Self::Introduction,
            "entityRelationship" => Self::EntityRelationship,
            "sqlBasics" => Self::SqlBasics,
            "normalization" => Self::Normalization,
            "databaseTypes" => Self::DatabaseTypes,
            "transactions" => Self::Transactions,
            "conceptos" => Self::Conceptos,
            "producto" => Self::Producto,
            "segmentacion" => Self::Segmentacion,
            _ => Self::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Introduction => "introduction",
            Self::EntityRelationship => "entityRelationship",
            Self::SqlBasics => "sqlBasics",
            Self::Normalization => "normalization",
            Self::DatabaseTypes => "databaseTypes",
            Self::Transactions => "transactions",
            Self::Conceptos => "conceptos",
            Self::Producto => "producto",
            Self::Segmentacion => "segmentacion",
            Self::Other(tag) => tag.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for BlockKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for BlockKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Option<String>> for BlockKind {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<BlockKind> for String {
    fn from(value: BlockKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
