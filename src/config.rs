//! Application-level configuration constants.

// UI Behavior
pub const SUGGESTION_DEBOUNCE_MS: u32 = 150;
pub const MAX_SUGGESTIONS: usize = 12;

// Recipe cards
pub const QUICK_COOK_MINUTES: u32 = 20;

// Text shown to the user
pub const INPUT_PLACEHOLDER: &str = "Type ingredients, separated by commas";
pub const EMPTY_GROUP_MESSAGE: &str = "No recipes in this group.";
pub const IDLE_MESSAGE: &str = "Pick a few ingredients and press \"Find Recipes\".";
