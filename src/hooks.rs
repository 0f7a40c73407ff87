use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SUGGESTION_DEBOUNCE_MS;

/// State and callbacks for the free-text ingredient field.
#[derive(Clone)]
pub struct IngredientEntry {
    /// The current text content of the input field.
    pub text: String,
    /// The text as of the last pause in typing. Drives the suggestion filter.
    pub query: String,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Hands the current text to the `on_add` callback and clears the field.
    pub on_commit: Callback<()>,
    /// Commits on Enter.
    pub on_keydown: Callback<KeyboardEvent>,
}

/// Schedule `callback` after `delay_ms`, cancelling any call still pending on `timer`.
fn debounce_callback<T: 'static>(
    timer: &Rc<RefCell<Option<Timeout>>>,
    callback: Callback<T>,
    value: T,
    delay_ms: u32,
) {
    let handle = Timeout::new(delay_ms, move || callback.emit(value));
    // Dropping the previous Timeout cancels it
    *timer.borrow_mut() = Some(handle);
}

/// Custom hook managing the ingredient entry field.
///
/// `on_add` receives the raw text on commit; splitting and trimming are left
/// to the selection store. Blank text is not forwarded.
#[hook]
pub fn use_ingredient_entry(on_add: Callback<String>) -> IngredientEntry {
    let text_handle = use_state(String::new);
    let query_handle = use_state(String::new);
    let debounce_timer = use_mut_ref(|| None::<Timeout>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        let query_setter = query_handle.clone();
        let debounce_timer = debounce_timer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text_setter.set(value.clone());

            let query_setter = query_setter.clone();
            debounce_callback(
                &debounce_timer,
                Callback::from(move |q: String| query_setter.set(q)),
                value,
                SUGGESTION_DEBOUNCE_MS,
            );
        })
    };

    let on_commit = {
        let current_text = text_handle.clone();
        let query_setter = query_handle.clone();
        let debounce_timer = debounce_timer.clone();
        Callback::from(move |_| {
            let text = (*current_text).clone();
            if !text.trim().is_empty() {
                on_add.emit(text);
            }
            debounce_timer.borrow_mut().take();
            current_text.set(String::new());
            query_setter.set(String::new());
        })
    };

    let on_keydown = {
        let on_commit = on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_commit.emit(());
            }
        })
    };

    IngredientEntry {
        text: (*text_handle).clone(),
        query: (*query_handle).clone(),
        on_text_input,
        on_commit,
        on_keydown,
    }
}
