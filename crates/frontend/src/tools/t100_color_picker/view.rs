use contracts::tools::t100_color_picker::ColorRecord;
use leptos::prelude::*;

use super::api::fetch_colors;
use super::commit::commit_handler;
use crate::shared::config::ToolsConfig;
use crate::shared::host::{load_sdk, HostSdk};
use crate::shared::load_state::{
    ErrorMessage, LoadMessages, LoadState, LoadingIndicator, NoDataMessage,
};
use crate::shared::selectable_list::{RowCheckbox, RowContext, SelectableList};

const TITLE: &str = "COLOR PICKER";

const MESSAGES: LoadMessages = LoadMessages {
    loading: "Loading colors...",
    init_failed: "Error initializing colors tool",
    failed: "Failed to load colors data",
    no_data: "No colors data found",
};

#[derive(Clone, Debug)]
struct ColorsReady {
    colors: Vec<ColorRecord>,
    sdk: HostSdk,
}

/// Пикер цветов: поиск, фильтр архивных, отправка ссылок в документ
#[component]
pub fn ColorPicker(config: ToolsConfig) -> impl IntoView {
    let (state, set_state) = signal_local(LoadState::<ColorsReady>::Loading);
    let endpoint = config.colors.endpoint.clone();

    leptos::task::spawn_local(async move {
        let sdk = match load_sdk().await {
            Ok(sdk) => sdk,
            Err(e) => {
                log::error!("Error initializing colors tool: {}", e);
                set_state.set(LoadState::InitFailed(e));
                return;
            }
        };

        let loaded = fetch_colors(&endpoint).await;
        if let Err(e) = &loaded {
            log::error!("Failed to fetch colors data: {}", e);
        }
        set_state.set(LoadState::from_load(
            loaded.map(|colors| ColorsReady { colors, sdk }),
        ));
    });

    let commit = config.commit;

    move || match state.get() {
        LoadState::Loading => view! { <LoadingIndicator text={MESSAGES.loading} /> }.into_any(),
        LoadState::InitFailed(_) => view! { <ErrorMessage text={MESSAGES.init_failed} /> }.into_any(),
        LoadState::Failed(_) => view! { <ErrorMessage text={MESSAGES.failed} /> }.into_any(),
        LoadState::NoData => view! {
            <NoDataMessage text={MESSAGES.no_data} title=TITLE class_prefix="colors" />
        }
        .into_any(),
        LoadState::Ready(ready) => view! {
            <SelectableList
                dataset={ready.colors}
                render_row=color_row
                on_commit={commit_handler(ready.sdk.actions, ready.sdk.context)}
                title=TITLE
                class_prefix="colors"
                search_placeholder="Search colors..."
                no_results_message="No colors found matching your search"
                auxiliary_label="Show archived colors"
                error_label="Error"
                commit_timeout_ms={commit.timeout_ms}
                error_display_ms={commit.error_display_ms}
            />
        }
        .into_any(),
    }
}

fn color_row(row: RowContext<ColorRecord>) -> AnyView {
    let RowContext {
        item,
        checked,
        on_toggle,
    } = row;

    view! {
        <div class="color-item">
            <RowCheckbox checked=checked on_toggle=on_toggle class="color-checkbox" />
            <div
                class="color-swatch"
                style={format!("background-color: {};", item.swatch_color())}
            ></div>
            // Вся информация о цвете кликабельна
            <div class="color-info" on:click=move |_| on_toggle.run(())>
                <div class="color-name">{item.color_name.clone()}</div>
                <div class="color-code">{format!("Code: {}", item.color_code)}</div>
                {item.color_family.clone().filter(|f| !f.is_empty()).map(|family| view! {
                    <div class="color-family">{family}</div>
                })}
            </div>
        </div>
    }
    .into_any()
}
