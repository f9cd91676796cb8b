mod inspect_macro;

use proc_macro::TokenStream;

/// Implements `egui_binary_selector::Inspect` for a struct by rendering each field in turn.
///
/// Boolean fields annotated with `#[inspect(false_text = "...", true_text = "...")]` (and
/// optionally `false_tooltip`/`true_tooltip`) are drawn as binary selectors.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn inspect_macro_derive(input: TokenStream) -> TokenStream {
    inspect_macro::impl_inspect_macro(input)
}
