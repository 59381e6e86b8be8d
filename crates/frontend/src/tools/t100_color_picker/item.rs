use contracts::tools::t100_color_picker::ColorRecord;

use crate::shared::selectable_list::SelectableItem;

/// The auxiliary flag is "show archived colors".
impl SelectableItem for ColorRecord {
    fn item_id(&self) -> &str {
        &self.color_code
    }

    fn display_label(&self) -> Option<&str> {
        Some(&self.color_name)
    }

    fn secondary_fields(&self) -> Vec<Option<&str>> {
        vec![self.color_family.as_deref()]
    }

    fn passes_auxiliary(&self, include_archived: bool) -> bool {
        include_archived || !self.is_archived()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::selectable_list::SelectableFilteredList;
    use contracts::tools::t100_color_picker::decode_colors;

    pub fn sample_colors() -> Vec<ColorRecord> {
        decode_colors(
            r#"[{"colorCode":"C1","colorName":"Red","hexRGB":"FF0000","path":"/a"},
                {"colorCode":"C2","colorName":"Blue","hexRGB":"0000FF","path":"/b","archived":"Y"}]"#,
        )
        .unwrap()
        .items
    }

    fn picker() -> SelectableFilteredList<ColorRecord> {
        SelectableFilteredList::new(sample_colors()).with_auxiliary_filter(false)
    }

    #[test]
    fn test_archived_hidden_by_default() {
        let mut list = picker();
        assert_eq!(list.visible_ids(), vec!["C1"]);

        list.set_auxiliary_filter(true);
        assert_eq!(list.visible_ids(), vec!["C1", "C2"]);
    }

    #[test]
    fn test_search_by_name_and_code() {
        let mut list = picker();
        list.set_auxiliary_filter(true);

        list.set_query("blue");
        assert_eq!(list.visible_ids(), vec!["C2"]);

        list.set_query("C2");
        assert_eq!(list.visible_ids(), vec!["C2"]);

        list.toggle_item("C2");
        list.set_query("magenta");
        assert!(list.visible().is_empty());
        assert!(list.is_selected("C2"));
    }

    #[test]
    fn test_search_by_family() {
        let mut colors = sample_colors();
        colors[0].color_family = Some("Warm".to_string());
        let mut list = SelectableFilteredList::new(colors).with_auxiliary_filter(true);

        list.set_query("warm");
        assert_eq!(list.visible_ids(), vec!["C1"]);
    }

    #[test]
    fn test_select_all_respects_archived_filter() {
        let mut list = picker();
        list.select_all_visible();
        assert_eq!(list.selection_count(), 1);

        list.set_auxiliary_filter(true);
        list.select_all_visible();
        assert_eq!(list.selection_count(), 2);
    }
}
