/// Элемент, который можно искать и выбирать в списке
pub trait SelectableItem: Clone + Send + Sync + 'static {
    /// Stable identifier, unique within a dataset
    fn item_id(&self) -> &str;

    /// Main label; `None` means the item is never rendered
    fn display_label(&self) -> Option<&str>;

    /// Extra text fields searched by the query. Absent fields never match.
    fn secondary_fields(&self) -> Vec<Option<&str>> {
        Vec::new()
    }

    /// Auxiliary boolean filter (e.g. "include archived")
    fn passes_auxiliary(&self, _flag: bool) -> bool {
        true
    }

    fn is_renderable(&self) -> bool {
        self.display_label().is_some()
    }
}

/// Текущее состояние фильтра списка
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    /// `None` when the dataset has no auxiliary toggle
    pub auxiliary: Option<bool>,
}

pub type Predicate<T> = fn(&T, &ListFilter) -> bool;

/// Case-insensitive substring match against the label, the identifier and
/// every present secondary field.
pub fn matches_query<T: SelectableItem>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    item.display_label().is_some_and(hit)
        || hit(item.item_id())
        || item.secondary_fields().into_iter().flatten().any(hit)
}

/// Renderability, then the auxiliary filter, then the text query.
pub fn default_predicate<T: SelectableItem>(item: &T, filter: &ListFilter) -> bool {
    item.is_renderable()
        && filter
            .auxiliary
            .map_or(true, |flag| item.passes_auxiliary(flag))
        && matches_query(item, &filter.query)
}
