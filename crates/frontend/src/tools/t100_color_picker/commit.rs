use std::rc::Rc;

use contracts::host::HostContext;
use contracts::tools::t100_color_picker::{colors_to_html_list, ColorRecord};
use futures::FutureExt;

use crate::shared::host::DaActions;
use crate::shared::selectable_list::{CommitError, CommitHandler};

/// Rich content inserted for the selected colors, in selection order.
pub fn selection_html(context: &HostContext, colors: &[ColorRecord]) -> String {
    colors_to_html_list(&context.org, &context.repo, colors)
}

/// Inserts the selected colors as a list of links to their EDS pages, then
/// closes the library panel. A failed send leaves the panel open.
pub fn commit_handler(actions: DaActions, context: HostContext) -> CommitHandler<ColorRecord> {
    Rc::new(move |colors: Vec<ColorRecord>| {
        let actions = actions.clone();
        let html = selection_html(&context, &colors);
        let names: Vec<String> = colors.into_iter().map(|c| c.color_name).collect();

        async move {
            actions.send_html(&html).await?;
            actions.close_library().await?;
            log::info!("Selected colors sent to document: {:?}", names);
            Ok::<(), CommitError>(())
        }
        .boxed_local()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selectable_list::SelectableFilteredList;
    use crate::tools::t100_color_picker::item::tests::sample_colors;

    #[test]
    fn test_selection_html_for_both_colors() {
        let mut list = SelectableFilteredList::new(sample_colors()).with_auxiliary_filter(false);
        list.toggle_item("C1");
        list.set_auxiliary_filter(true);
        list.toggle_item("C2");

        let ticket = list.begin_commit().unwrap();
        let html = selection_html(&HostContext::new("o", "r"), &ticket.items);
        assert_eq!(
            html,
            r#"<ul><li><a href="https://main--r--o.aem.live/a">Red</a></li><li><a href="https://main--r--o.aem.live/b">Blue</a></li></ul>"#
        );
    }

    #[test]
    fn test_selection_html_uses_selection_order() {
        let mut list = SelectableFilteredList::new(sample_colors()).with_auxiliary_filter(true);
        list.toggle_item("C2");
        list.toggle_item("C1");

        let html = selection_html(&HostContext::new("o", "r"), &list.selected_items());
        assert!(html.starts_with(r#"<ul><li><a href="https://main--r--o.aem.live/b">Blue</a>"#));
    }
}
