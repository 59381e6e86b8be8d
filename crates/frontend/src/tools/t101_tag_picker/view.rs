use contracts::host::tagging_source_url;
use contracts::tools::t101_tag_picker::TagRecord;
use leptos::prelude::*;

use super::api::fetch_tagging;
use super::commit::commit_handler;
use crate::shared::config::ToolsConfig;
use crate::shared::host::{load_sdk, HostSdk};
use crate::shared::load_state::{
    ErrorMessage, LoadMessages, LoadState, LoadingIndicator, NoDataMessage,
};
use crate::shared::selectable_list::{RowCheckbox, RowContext, SelectableList};

const TITLE: &str = "TAGGER";

const MESSAGES: LoadMessages = LoadMessages {
    loading: "Loading tags...",
    init_failed: "❌ Error initializing tags tool",
    failed: "❌ Failed to load tagging data",
    no_data: "⚠️ No tagging data found",
};

#[derive(Clone, Debug)]
struct TagsReady {
    tags: Vec<TagRecord>,
    sdk: HostSdk,
}

/// Теггер: поиск по листу tagging.json и вставка ключей в документ
#[component]
pub fn TagPicker(config: ToolsConfig) -> impl IntoView {
    let (state, set_state) = signal_local(LoadState::<TagsReady>::Loading);
    let tags_config = config.tags.clone();

    leptos::task::spawn_local(async move {
        let sdk = match load_sdk().await {
            Ok(sdk) => sdk,
            Err(e) => {
                log::error!("Error initializing tags tool: {}", e);
                set_state.set(LoadState::InitFailed(e));
                return;
            }
        };

        let url = tagging_source_url(&tags_config.da_origin, &sdk.context, &tags_config.sheet_path);
        let loaded = fetch_tagging(&sdk.actions, &url).await;
        if let Err(e) = &loaded {
            log::error!("Failed to fetch tagging data from {}: {}", url, e);
        }
        set_state.set(LoadState::from_load(loaded.map(|tags| TagsReady { tags, sdk })));
    });

    let commit = config.commit;

    move || match state.get() {
        LoadState::Loading => view! { <LoadingIndicator text={MESSAGES.loading} /> }.into_any(),
        LoadState::InitFailed(_) => view! { <ErrorMessage text={MESSAGES.init_failed} /> }.into_any(),
        LoadState::Failed(_) => view! { <ErrorMessage text={MESSAGES.failed} /> }.into_any(),
        LoadState::NoData => view! {
            <NoDataMessage text={MESSAGES.no_data} title=TITLE class_prefix="tags" />
        }
        .into_any(),
        LoadState::Ready(ready) => view! {
            <SelectableList
                dataset={ready.tags}
                render_row=tag_row
                on_commit={commit_handler(ready.sdk.actions)}
                title=TITLE
                class_prefix="tags"
                search_placeholder="Search tags..."
                no_results_message="No tags found matching your search"
                commit_timeout_ms={commit.timeout_ms}
                error_display_ms={commit.error_display_ms}
            />
        }
        .into_any(),
    }
}

fn tag_row(row: RowContext<TagRecord>) -> AnyView {
    let RowContext {
        item,
        checked,
        on_toggle,
    } = row;
    let value = item.value.clone().unwrap_or_default();

    view! {
        <div class="tag-item">
            <RowCheckbox checked=checked on_toggle=on_toggle class="tag-checkbox" />
            <div class="tag-info" on:click=move |_| on_toggle.run(())>
                {item.comments.clone().filter(|c| !c.is_empty()).map(|comments| view! {
                    <div class="tag-comments">{comments}</div>
                })}
                <div class="tag-value">{value}</div>
                <div class="tag-key">{format!("Key: {}", item.key)}</div>
            </div>
        </div>
    }
    .into_any()
}
