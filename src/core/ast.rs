use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub word: Option<String>,
    pub data: Vec<Section>,
}

impl Conjugation {
    /// The answer for a request that names no language or no word.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.data.iter().flat_map(|section| section.children.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub root: String,
    pub children: Vec<Block>,
}

impl Section {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub title: String,
    #[serde(flatten)]
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockContent {
    Table { rows: Vec<Vec<String>> },
    Lines { data: Vec<String> },
}

impl BlockContent {
    /// Every string the block carries, in document order.
    pub fn texts(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            BlockContent::Table { rows } => {
                Box::new(rows.iter().flatten().map(String::as_str))
            }
            BlockContent::Lines { data } => Box::new(data.iter().map(String::as_str)),
        }
    }
}
