use contracts::tools::t101_tag_picker::TagRecord;

use crate::shared::selectable_list::SelectableItem;

/// Rows without `value` have no label and are therefore never rendered.
impl SelectableItem for TagRecord {
    fn item_id(&self) -> &str {
        &self.key
    }

    fn display_label(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    fn secondary_fields(&self) -> Vec<Option<&str>> {
        vec![self.comments.as_deref()]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::selectable_list::SelectableFilteredList;
    use contracts::tools::t101_tag_picker::decode_tagging;

    pub fn sample_tags() -> Vec<TagRecord> {
        decode_tagging(
            r#"{"data":[
                {"key":"k1","value":"Tag One"},
                {"key":"k2","value":"Tag Two","comments":"Seasonal"},
                {"key":"k3"}
            ]}"#,
        )
        .unwrap()
        .items
    }

    #[test]
    fn test_rows_without_value_never_visible() {
        let mut list = SelectableFilteredList::new(sample_tags());
        assert_eq!(list.visible_ids(), vec!["k1", "k2"]);

        list.set_query("k3");
        assert!(list.visible().is_empty());

        list.set_query("");
        list.select_all_visible();
        assert!(!list.is_selected("k3"));
        assert_eq!(list.toggle_item("k3"), None);
        assert_eq!(list.selection_count(), 2);
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut tags = sample_tags();
        tags[0].value = Some(String::new());
        let list = SelectableFilteredList::new(tags);
        assert_eq!(list.visible_ids(), vec!["k2"]);
    }

    #[test]
    fn test_duplicate_key_shows_labelled_row() {
        let tags = decode_tagging(r#"{"data":[{"key":"k1"},{"key":"k1","value":"One"}]}"#)
            .unwrap()
            .items;
        let list = SelectableFilteredList::new(tags);
        let labels: Vec<&str> = list.visible().iter().filter_map(|t| t.display_label()).collect();
        assert_eq!(labels, vec!["One"]);
    }

    #[test]
    fn test_search_by_value_key_and_comments() {
        let mut list = SelectableFilteredList::new(sample_tags());

        list.set_query("tag one");
        assert_eq!(list.visible_ids(), vec!["k1"]);

        list.set_query("K2");
        assert_eq!(list.visible_ids(), vec!["k2"]);

        list.set_query("season");
        assert_eq!(list.visible_ids(), vec!["k2"]);
    }

    #[test]
    fn test_auxiliary_toggle_has_no_effect_on_tags() {
        let mut list = SelectableFilteredList::new(sample_tags());
        list.set_auxiliary_filter(false);
        assert_eq!(list.visible_ids(), vec!["k1", "k2"]);
    }
}
