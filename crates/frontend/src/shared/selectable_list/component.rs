use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::commit::{run_commit, CommitHandler};
use super::state::SelectableFilteredList;
use super::traits::{Predicate, SelectableItem};

/// Всё, что нужно для отрисовки одной строки списка
#[derive(Clone)]
pub struct RowContext<T> {
    pub item: T,
    /// Pure function of the selection: `item_id ∈ selection`
    pub checked: Signal<bool>,
    /// Flips the item's membership in the selection
    pub on_toggle: Callback<()>,
}

/// Чекбокс строки, состояние которого берётся из выбора
#[component]
pub fn RowCheckbox(
    checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class=class
            prop:checked=checked
            on:change=move |_| on_toggle.run(())
        />
    }
}

/// Список с поиском, мультивыбором и кнопкой отправки
///
/// Rows are keyed by item id; toggling an item re-evaluates only the
/// `checked` signals, never the visible subset.
#[component]
pub fn SelectableList<T, R>(
    /// Загруженный набор данных (не меняется за время жизни компонента)
    dataset: Vec<T>,
    /// Отрисовка одной строки
    render_row: R,
    /// Отправка выбранного
    on_commit: CommitHandler<T>,
    /// Заголовок
    #[prop(into)]
    title: String,
    /// CSS prefix for the container and header, e.g. `colors`
    #[prop(into)]
    class_prefix: String,
    #[prop(into)] search_placeholder: String,
    #[prop(into)] no_results_message: String,
    /// Подпись вспомогательного фильтра; без неё фильтр не показывается
    #[prop(optional, into)]
    auxiliary_label: Option<String>,
    /// Custom filter; defaults to [`super::default_predicate`]
    #[prop(optional)]
    predicate: Option<Predicate<T>>,
    /// Подпись кнопки при ошибке отправки
    #[prop(optional)]
    error_label: Option<&'static str>,
    commit_timeout_ms: u32,
    error_display_ms: u32,
) -> impl IntoView
where
    T: SelectableItem,
    R: Fn(RowContext<T>) -> AnyView + Clone + Send + Sync + 'static,
{
    let mut initial = SelectableFilteredList::new(dataset);
    if let Some(predicate) = predicate {
        initial = initial.with_predicate(predicate);
    }
    if auxiliary_label.is_some() {
        initial = initial.with_auxiliary_filter(false);
    }
    if let Some(label) = error_label {
        initial = initial.with_error_label(label);
    }

    let list = RwSignal::new(initial);
    let on_commit_sv = StoredValue::new_local(on_commit);

    // Toggles leave the visible ids unchanged, so rows are not rebuilt
    let visible_ids = Memo::new(move |_| list.with(|l| l.visible_ids()));
    let commit_button = Memo::new(move |_| list.with(|l| l.commit_button()));

    let handle_query = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        list.update(|l| l.set_query(query));
    };

    let handle_auxiliary = move |ev: leptos::ev::Event| {
        let flag = event_target_checked(&ev);
        list.update(|l| l.set_auxiliary_filter(flag));
    };

    let handle_select_all = move |_| {
        list.update(|l| {
            let added = l.select_all_visible();
            log::debug!("select all: {} added, {} selected", added, l.selection_count());
        });
    };

    let handle_deselect_all = move |_| list.update(|l| l.deselect_all());

    let handle_commit = move |_| {
        let Some(ticket) = list.try_update(|l| l.begin_commit()).flatten() else {
            return;
        };
        let handler = on_commit_sv.get_value();

        leptos::task::spawn_local(async move {
            let outcome = run_commit(
                &handler,
                ticket.items.clone(),
                TimeoutFuture::new(commit_timeout_ms),
                commit_timeout_ms,
            )
            .await;

            match &outcome {
                Ok(()) => log::info!("sent {} selected items to document", ticket.items.len()),
                Err(e) => log::error!("error sending selection to document: {}", e),
            }

            // The picker may already be gone after a successful send
            let Some(Some(generation)) = list.try_update(|l| l.finish_commit(&ticket, &outcome))
            else {
                return;
            };

            TimeoutFuture::new(error_display_ms).await;
            list.try_update(|l| l.clear_commit_error(generation));
        });
    };

    let header_class = format!("{}-header", class_prefix);
    let container_class = format!("{}-container", class_prefix);

    view! {
        <div class=container_class>
            <h2 class=header_class>{title}</h2>

            <div class="search-container">
                <input
                    type="text"
                    class="search-input"
                    placeholder=search_placeholder
                    prop:value=move || list.with(|l| l.filter().query.clone())
                    on:input=handle_query
                />
                {auxiliary_label.map(|label| view! {
                    <div class="filter-container">
                        <label class="filter-label">
                            <input
                                type="checkbox"
                                class="filter-checkbox"
                                prop:checked=move || list.with(|l| l.filter().auxiliary.unwrap_or(false))
                                on:change=handle_auxiliary
                            />
                            {format!(" {}", label)}
                        </label>
                    </div>
                })}
            </div>

            <div class="results-container">
                {move || visible_ids.with(|ids| ids.is_empty()).then(|| {
                    view! { <div class="no-results">{no_results_message.clone()}</div> }
                })}
                <For
                    each=move || visible_ids.get()
                    key=|id| id.clone()
                    children=move |id: String| {
                        let Some(item) = list.with_untracked(|l| l.item(&id).cloned()) else {
                            return ().into_any();
                        };
                        let id_for_checked = id.clone();
                        let checked = Signal::derive(move || list.with(|l| l.is_selected(&id_for_checked)));
                        let on_toggle = Callback::new(move |_: ()| {
                            list.update(|l| {
                                l.toggle_item(&id);
                            });
                        });
                        render_row(RowContext { item, checked, on_toggle })
                    }
                />
            </div>

            <div class="action-container">
                <button class="btn btn-secondary" on:click=handle_select_all>
                    "Select All"
                </button>
                <button class="btn btn-secondary" on:click=handle_deselect_all>
                    "Deselect All"
                </button>
                <button
                    class=move || commit_button.with(|b| b.class)
                    prop:disabled=move || commit_button.with(|b| b.disabled)
                    on:click=handle_commit
                >
                    {move || commit_button.with(|b| b.label.clone())}
                </button>
            </div>
        </div>
    }
}
