//! Main module for the Recipe Finder application using Yew.
//! Wires UI components, selection state and the ranking engine.

use log::{debug, error};
use recipe_finder::{rank, Catalog, MatchGroups, RankError, ResultFilter, SelectionStore};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{render_results, SelectedTags, SuggestionList};
use config::*;
use hooks::use_ingredient_entry;

/// Result of the last "Find Recipes" press, with the ingredients it used.
#[derive(Clone, PartialEq)]
struct Outcome {
    ranked_with: Vec<String>,
    result: Result<Rc<MatchGroups>, RankError>,
}

/// Helper to apply one mutation to the selection and publish it only if it changed.
fn update_selection(
    selection: &UseStateHandle<SelectionStore>,
    mutate: impl FnOnce(&mut SelectionStore) -> bool,
) {
    let mut next = (**selection).clone();
    if mutate(&mut next) {
        selection.set(next);
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, callbacks, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::reference());
    let selection = use_state(SelectionStore::new);
    let outcome = use_state(|| None::<Outcome>);
    let filter = use_state(ResultFilter::default);

    let on_add_text = {
        let selection = selection.clone();
        Callback::from(move |text: String| {
            update_selection(&selection, |s| s.add_many(&text) > 0);
        })
    };
    let entry = use_ingredient_entry(on_add_text);

    let on_pick = {
        let selection = selection.clone();
        Callback::from(move |name: String| {
            update_selection(&selection, |s| s.add(name));
        })
    };

    let on_remove = {
        let selection = selection.clone();
        Callback::from(move |name: String| {
            update_selection(&selection, |s| s.remove(&name));
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |tab: ResultFilter| filter.set(tab))
    };

    let catalog = match &*catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load recipe catalog: {}", e);
            return html! {
                <div class="container">
                    <div class="current-error">{ format!("Could not load recipes: {}", e) }</div>
                </div>
            };
        }
    };

    let on_generate = {
        let selection = selection.clone();
        let outcome = outcome.clone();
        let filter = filter.clone();
        let recipes = catalog.recipes().to_vec();
        Callback::from(move |_: MouseEvent| {
            let started = js_sys::Date::now();
            let result = rank(selection.all(), &recipes).map(Rc::new);
            debug!("Ranking took {:.2} ms", js_sys::Date::now() - started);

            filter.set(ResultFilter::All);
            outcome.set(Some(Outcome {
                ranked_with: selection.all().to_vec(),
                result,
            }));
        })
    };

    let suggestions: Vec<String> = catalog
        .suggestions(&entry.query, selection.all(), MAX_SUGGESTIONS)
        .into_iter()
        .map(str::to_string)
        .collect();

    html! {
        <div class="container">
            <h1>{ "Recipe Finder" }</h1>

            <div class="ingredient-entry">
                <div class="form-row">
                    <input
                        type="text"
                        id="ingredient-input"
                        placeholder={INPUT_PLACEHOLDER}
                        value={entry.text.clone()}
                        oninput={entry.on_text_input.clone()}
                        onkeydown={entry.on_keydown.clone()}
                    />
                    <button class="btn-secondary" onclick={entry.on_commit.reform(|_: MouseEvent| ())}>
                        { "Add" }
                    </button>
                </div>
                <SuggestionList suggestions={suggestions} on_pick={on_pick} />
            </div>

            <div class="selected-ingredients">
                <h3>{ "Selected Ingredients" }</h3>
                <SelectedTags items={selection.all().to_vec()} on_remove={on_remove} />
            </div>

            <button class="btn-primary" onclick={on_generate}>{ "Find Recipes" }</button>

            // Results section
            <div class="recipe-output">
                { match &*outcome {
                    Some(Outcome { result: Ok(groups), ranked_with }) => {
                        render_results(groups, ranked_with, *filter, on_filter.clone())
                    }
                    Some(Outcome { result: Err(e), .. }) => html! {
                        <p class="prompt-message">{ e.to_string() }</p>
                    },
                    None => html! {
                        <div class="no-results-message">
                            <p>{ IDLE_MESSAGE }</p>
                        </div>
                    },
                } }
            </div>
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
