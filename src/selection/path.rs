use tracing::debug;

/// Separator between labels in a chart node id such as `"A/A1/x"`.
const ID_SEPARATOR: char = '/';
/// Node id some charts report for their root.
const ROOT_SENTINEL: &str = "root";

/// A click on a hierarchical chart node.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClickEvent {
    /// Labels from the top-level category down to the clicked node.
    pub(crate) path: Vec<String>,
    /// Label of the clicked node, if the chart reported one.
    pub(crate) label: Option<String>,
}

impl ClickEvent {
    /// Builds a click from a chart node id of the form `first/second/item`.
    pub(crate) fn from_id(id: &str, label: Option<String>) -> Self {
        let path = if id.is_empty() {
            Vec::new()
        } else {
            id.split(ID_SEPARATOR).map(str::to_string).collect()
        };
        Self { path, label }
    }
}

/// The taxonomy node a click selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum TaxonomyPath {
    /// No node-level refinement.
    #[default]
    Root,
    FirstCat(String),
    SecondCat {
        first_cat: String,
        second_cat: String,
    },
    ItemCategory {
        first_cat: String,
        second_cat: String,
        item_category: String,
    },
}

impl TaxonomyPath {
    /// Resolves a click into a path. Anything that does not describe a node
    /// at depth 1 to 3 resolves to [`TaxonomyPath::Root`].
    pub(crate) fn resolve(click: Option<&ClickEvent>) -> Self {
        let Some(click) = click else {
            return Self::Root;
        };
        if click.path.iter().any(String::is_empty) {
            debug!("Ignoring click with an empty path segment: {:?}", click.path);
            return Self::Root;
        }
        if let (Some(label), Some(last)) = (click.label.as_deref(), click.path.last()) {
            if !label.is_empty() && label != last.as_str() {
                debug!("Ignoring click whose label {label:?} is not the node at {last:?}");
                return Self::Root;
            }
        }

        match click.path.as_slice() {
            [] => Self::Root,
            [first] if first == ROOT_SENTINEL => Self::Root,
            [first] => Self::FirstCat(first.clone()),
            [first, second] => Self::SecondCat {
                first_cat: first.clone(),
                second_cat: second.clone(),
            },
            [first, second, item] => Self::ItemCategory {
                first_cat: first.clone(),
                second_cat: second.clone(),
                item_category: item.clone(),
            },
            _ => {
                debug!("Ignoring click deeper than the taxonomy: {:?}", click.path);
                Self::Root
            }
        }
    }

    /// Number of labels from the top-level category to the clicked node.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::FirstCat(_) => 1,
            Self::SecondCat { .. } => 2,
            Self::ItemCategory { .. } => 3,
        }
    }

    pub(crate) fn labels(&self) -> Vec<&str> {
        match self {
            Self::Root => Vec::new(),
            Self::FirstCat(first) => vec![first.as_str()],
            Self::SecondCat {
                first_cat,
                second_cat,
            } => vec![first_cat.as_str(), second_cat.as_str()],
            Self::ItemCategory {
                first_cat,
                second_cat,
                item_category,
            } => vec![
                first_cat.as_str(),
                second_cat.as_str(),
                item_category.as_str(),
            ],
        }
    }
}
