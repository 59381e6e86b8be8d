use std::rc::Rc;

use contracts::tools::t101_tag_picker::{tags_to_text, TagRecord};
use futures::FutureExt;

use crate::shared::host::DaActions;
use crate::shared::selectable_list::{CommitError, CommitHandler};

/// Plain text inserted for the selected tags, in selection order.
pub fn selection_text(tags: &[TagRecord]) -> String {
    tags_to_text(tags.iter().map(|t| t.key.as_str()))
}

/// Inserts the selected tag keys as comma separated text, then closes the
/// library panel. A failed send leaves the panel open.
pub fn commit_handler(actions: DaActions) -> CommitHandler<TagRecord> {
    Rc::new(move |tags: Vec<TagRecord>| {
        let actions = actions.clone();
        let text = selection_text(&tags);

        async move {
            actions.send_text(&text).await?;
            actions.close_library().await?;
            log::info!("Selected tags sent to document: {}", text);
            Ok::<(), CommitError>(())
        }
        .boxed_local()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selectable_list::SelectableFilteredList;
    use crate::tools::t101_tag_picker::item::tests::sample_tags;

    #[test]
    fn test_selection_text_for_two_tags() {
        let mut list = SelectableFilteredList::new(sample_tags());
        list.toggle_item("k1");
        list.toggle_item("k2");

        let ticket = list.begin_commit().unwrap();
        assert_eq!(selection_text(&ticket.items), "k1, k2");
    }

    #[test]
    fn test_selection_text_after_deselect() {
        let mut list = SelectableFilteredList::new(sample_tags());
        list.select_all_visible();
        list.toggle_item("k1");
        assert_eq!(selection_text(&list.selected_items()), "k2");

        list.deselect_all();
        assert!(list.begin_commit().is_none());
    }
}
