//! Pure Yew view components for the recipe finder UI.
//!
//! This module contains stateless components that render based on props;
//! all state lives in the application component.

use crate::config::{EMPTY_GROUP_MESSAGE, QUICK_COOK_MINUTES};
use recipe_finder::utils::{format_percentage, join_names, parse_cook_minutes};
use recipe_finder::{MatchGroup, MatchGroups, RankedRecipe, ResultFilter};
use std::rc::Rc;
use yew::prelude::*;

/// Renders the ranked recipes: the ingredient summary, the filter tabs and
/// every section the active filter makes visible.
pub fn render_results(
    groups: &Rc<MatchGroups>,
    ranked_with: &[String],
    filter: ResultFilter,
    on_filter: Callback<ResultFilter>,
) -> Html {
    html! {
        <div class="results">
            <h3>{ "Recipe Suggestions" }</h3>
            <p class="your-ingredients">
                { format!("Your ingredients: {}", join_names(ranked_with)) }
            </p>

            <FilterTabs groups={groups.clone()} active={filter} on_select={on_filter} />

            <div class="recipe-sections">
                { filter.visible_groups(groups).into_iter().map(|group| {
                    render_section(groups.group(group), group)
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Renders one match group with its title, or an empty-state line.
fn render_section(recipes: &[RankedRecipe], group: MatchGroup) -> Html {
    html! {
        <div class="recipe-section" data-match={group.key()}>
            <h4 class="section-title">{ group.title() }</h4>
            if recipes.is_empty() {
                <p class="empty-group">{ EMPTY_GROUP_MESSAGE }</p>
            } else {
                { recipes.iter().map(render_recipe_card).collect::<Html>() }
            }
        </div>
    }
}

/// Renders a single recipe card.
fn render_recipe_card(ranked: &RankedRecipe) -> Html {
    let recipe = &ranked.recipe;
    let quick = parse_cook_minutes(&recipe.cook_time)
        .map(|m| m <= QUICK_COOK_MINUTES)
        .unwrap_or(false);

    html! {
        <div class="recipe-card" key={recipe.name.clone()}>
            <h4>{ &recipe.name }</h4>
            <p class="match-percentage">
                <strong>{ "Match: " }</strong>
                <span class={ranked.tier().css_class()}>
                    { format_percentage(ranked.match_percentage) }
                </span>
            </p>
            <p>
                <strong>{ "Cook Time: " }</strong>
                { &recipe.cook_time }
                if quick {
                    <span class="quick-badge">{ "Quick" }</span>
                }
            </p>
            <p>
                <strong>{ "Required Ingredients: " }</strong>
                { join_names(&recipe.ingredients) }
            </p>
            if !ranked.missing_ingredients.is_empty() {
                <p class="missing-ingredients">
                    <strong>{ "Missing Ingredients: " }</strong>
                    { join_names(&ranked.missing_ingredients) }
                </p>
            }
            <p><strong>{ "Instructions:" }</strong></p>
            <pre>{ &recipe.instructions }</pre>
        </div>
    }
}

/// Tab row switching between all results and a single group.
#[derive(Properties, PartialEq)]
pub struct FilterTabsProps {
    pub groups: Rc<MatchGroups>,
    pub active: ResultFilter,
    pub on_select: Callback<ResultFilter>,
}

#[function_component(FilterTabs)]
pub fn filter_tabs(props: &FilterTabsProps) -> Html {
    html! {
        <div class="filter-tabs">
            { ResultFilter::TABS.into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("filter-tab", (tab == props.active).then_some("active"))}
                        onclick={Callback::from(move |_| on_select.emit(tab))}
                    >
                        { tab.label(&props.groups) }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Currently selected ingredients as removable tags.
#[derive(Properties, PartialEq)]
pub struct SelectedTagsProps {
    pub items: Vec<String>,
    pub on_remove: Callback<String>,
}

#[function_component(SelectedTags)]
pub fn selected_tags(props: &SelectedTagsProps) -> Html {
    html! {
        <div class="selected-list">
            { props.items.iter().map(|ingredient| {
                let on_remove = props.on_remove.clone();
                let name = ingredient.clone();
                html! {
                    <div class="selected-tag" key={ingredient.clone()}>
                        { ingredient }
                        <span class="remove-ingredient"
                            title="Remove"
                            onclick={Callback::from(move |_| on_remove.emit(name.clone()))}
                        >
                            { "×" }
                        </span>
                    </div>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// One-click ingredient buttons.
#[derive(Properties, PartialEq)]
pub struct SuggestionListProps {
    pub suggestions: Vec<String>,
    pub on_pick: Callback<String>,
}

#[function_component(SuggestionList)]
pub fn suggestion_list(props: &SuggestionListProps) -> Html {
    if props.suggestions.is_empty() {
        return html! {};
    }

    html! {
        <div class="ingredient-suggestions">
            { props.suggestions.iter().map(|ingredient| {
                let on_pick = props.on_pick.clone();
                let name = ingredient.clone();
                html! {
                    <button class="ingredient-btn" key={ingredient.clone()}
                        onclick={Callback::from(move |_| on_pick.emit(name.clone()))}
                    >
                        { ingredient }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}
