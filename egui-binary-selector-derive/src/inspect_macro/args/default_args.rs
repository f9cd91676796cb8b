use super::expand_to_tokens;
use darling::FromField;
use quote::quote;

#[derive(Clone, Debug, FromField)]
#[darling(attributes(inspect))]
pub struct InspectFieldArgsDefault {
    pub ident: Option<syn::Ident>,
    pub ty: syn::Type,

    #[darling(default)]
    pub name: Option<syn::Ident>,

    #[darling(default)]
    pub render_trait: Option<syn::Path>,

    #[darling(default)]
    pub proxy_type: Option<syn::Path>,

    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    min_value: Option<f32>,

    #[darling(default)]
    max_value: Option<f32>,

    #[darling(default)]
    step: Option<f32>,

    #[darling(default)]
    header: Option<bool>,

    #[darling(default)]
    indent_children: Option<bool>,

    #[darling(default)]
    false_text: Option<String>,

    #[darling(default)]
    true_text: Option<String>,

    #[darling(default)]
    false_tooltip: Option<String>,

    #[darling(default)]
    true_tooltip: Option<String>,
}

/// The four selector strings, present when any of them was given on the field
#[derive(Debug)]
struct SelectorArgs {
    false_text: String,
    true_text: String,
    false_tooltip: String,
    true_tooltip: String,
}

#[derive(Debug)]
pub struct InspectArgs {
    min_value: Option<f32>,
    max_value: Option<f32>,
    step: Option<f32>,
    header: Option<bool>,
    indent_children: Option<bool>,
    selector: Option<SelectorArgs>,
}

impl From<InspectFieldArgsDefault> for InspectArgs {
    fn from(field_args: InspectFieldArgsDefault) -> Self {
        let has_selector = field_args.false_text.is_some()
            || field_args.true_text.is_some()
            || field_args.false_tooltip.is_some()
            || field_args.true_tooltip.is_some();

        let selector = has_selector.then(|| SelectorArgs {
            false_text: field_args.false_text.unwrap_or_default(),
            true_text: field_args.true_text.unwrap_or_default(),
            false_tooltip: field_args.false_tooltip.unwrap_or_default(),
            true_tooltip: field_args.true_tooltip.unwrap_or_default(),
        });

        Self {
            min_value: field_args.min_value,
            max_value: field_args.max_value,
            step: field_args.step,
            header: field_args.header,
            indent_children: field_args.indent_children,
            selector,
        }
    }
}

impl quote::ToTokens for SelectorArgs {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let false_text = &self.false_text;
        let true_text = &self.true_text;
        let false_tooltip = &self.false_tooltip;
        let true_tooltip = &self.true_tooltip;

        use quote::TokenStreamExt;
        tokens.append_all(quote!(
            egui_binary_selector::SelectorArgs {
                false_text: #false_text,
                true_text: #true_text,
                false_tooltip: #false_tooltip,
                true_tooltip: #true_tooltip,
            }
        ));
    }
}

impl quote::ToTokens for InspectArgs {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let min_value = expand_to_tokens(&self.min_value);
        let max_value = expand_to_tokens(&self.max_value);
        let step = expand_to_tokens(&self.step);
        let header = expand_to_tokens(&self.header);
        let indent_children = expand_to_tokens(&self.indent_children);
        let selector = expand_to_tokens(&self.selector);

        use quote::TokenStreamExt;
        tokens.append_all(quote!(
            egui_binary_selector::InspectArgs {
                min_value: #min_value,
                max_value: #max_value,
                step: #step,
                header: #header,
                indent_children: #indent_children,
                selector: #selector,
            }
        ));
    }
}
