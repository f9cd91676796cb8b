use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{parse_macro_input, Data, DeriveInput, Fields, FieldsUnnamed};

mod args;
use args::{InspectArgs, InspectFieldArgsDefault, InspectStructArgs};

pub fn impl_inspect_macro(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_args = match InspectStructArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };
    match parse_field_args(&input) {
        Ok(field_args) => generate(&input, struct_args, field_args),
        Err(e) => e.write_errors().into(),
    }
}

struct ParsedField {
    render: TokenStream,
    render_mut: TokenStream,
}

fn parse_field_args(input: &DeriveInput) -> darling::Result<Vec<ParsedField>> {
    match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => fields.named.iter().map(handle_inspect_type).collect(),
            Fields::Unnamed(ref field) => {
                if field.unnamed.len() != 1 {
                    panic!("Unnamed fields with 2 or more fields are not supported");
                }
                Ok(vec![ParsedField {
                    render: create_render_call_unit_struct(field),
                    render_mut: create_render_mut_call_unit_struct(field),
                }])
            }
            Fields::Unit => Ok(vec![]),
        },
        Data::Enum(_) => panic!("enums are not supported, implement Inspect by hand"),
        Data::Union(_) => panic!("unions are not supported"),
    }
}

// Does common data gathering, then emits code for inspecting the field.
fn handle_inspect_type(f: &syn::Field) -> darling::Result<ParsedField> {
    let field_args = InspectFieldArgsDefault::from_field(f)?;

    if field_args.skip {
        return Ok(ParsedField {
            render: quote!(),
            render_mut: quote!(),
        });
    }

    let render_trait: syn::Path = match &field_args.render_trait {
        Some(t) => t.clone(),
        None => syn::parse_quote!(egui_binary_selector::Inspect),
    };

    let ident = match &field_args.ident {
        Some(ident) => ident.clone(),
        None => return Err(darling::Error::custom("expected a named field").with_span(f)),
    };

    let field_type = field_args.ty.clone();
    let name = field_args.name.clone();
    let proxy_type = field_args.proxy_type.clone();
    // selector arguments on a non-bool field are ignored by its renderer
    let args: InspectArgs = field_args.into();

    let render = create_render_call(&ident, &name, &field_type, &render_trait, &proxy_type, &args);
    let render_mut =
        create_render_mut_call(&ident, &name, &field_type, &render_trait, &proxy_type, &args);

    Ok(ParsedField { render, render_mut })
}

fn create_render_call_unit_struct(data: &FieldsUnnamed) -> TokenStream {
    let ty = &data.unnamed[0].ty;

    quote! {{
        <#ty as egui_binary_selector::Inspect<#ty>>::render(&data.0, "", ui, args)
    }}
}

fn create_render_mut_call_unit_struct(data: &FieldsUnnamed) -> TokenStream {
    let ty = &data.unnamed[0].ty;

    quote! {{
        _has_any_field_changed |= <#ty as egui_binary_selector::Inspect<#ty>>::render_mut(&mut data.0, "", ui, args);
    }}
}

fn source_type(field_type: &syn::Type, proxy_type: &Option<syn::Path>) -> TokenStream {
    match proxy_type {
        Some(w) => quote!(#w),
        None => quote!(#field_type),
    }
}

fn create_render_call<T: ToTokens>(
    field_name: &syn::Ident,
    field_rename: &Option<syn::Ident>,
    field_type: &syn::Type,
    render_trait: &syn::Path,
    proxy_type: &Option<syn::Path>,
    args: &T,
) -> TokenStream {
    let args_name = format_ident!("_inspect_args_{}", field_name);
    let display_name = field_rename.clone().unwrap_or_else(|| field_name.clone());
    let source_type = source_type(field_type, proxy_type);

    quote! {{
        #[allow(non_upper_case_globals)]
        const #args_name: egui_binary_selector::InspectArgs = #args;
        let value = &data.#field_name;
        <#source_type as #render_trait<#field_type>>::render(value, stringify!(#display_name), ui, &#args_name);
    }}
}

fn create_render_mut_call<T: ToTokens>(
    field_name: &syn::Ident,
    field_rename: &Option<syn::Ident>,
    field_type: &syn::Type,
    render_trait: &syn::Path,
    proxy_type: &Option<syn::Path>,
    args: &T,
) -> TokenStream {
    let args_name = format_ident!("_inspect_args_{}", field_name);
    let display_name = field_rename.clone().unwrap_or_else(|| field_name.clone());
    let source_type = source_type(field_type, proxy_type);

    quote! {{
        #[allow(non_upper_case_globals)]
        const #args_name: egui_binary_selector::InspectArgs = #args;
        let value = &mut data.#field_name;
        _has_any_field_changed |= <#source_type as #render_trait<#field_type>>::render_mut(value, stringify!(#display_name), ui, &#args_name);
    }}
}

// Provide a way to early out and generate no code, configured via a cargo feature.
#[cfg(not(feature = "generate_code"))]
fn generate(
    _input: &DeriveInput,
    _struct_args: InspectStructArgs,
    _parsed_fields: Vec<ParsedField>,
) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(quote! {})
}

#[cfg(feature = "generate_code")]
fn generate(
    input: &DeriveInput,
    struct_args: InspectStructArgs,
    parsed_fields: Vec<ParsedField>,
) -> proc_macro::TokenStream {
    let struct_name = &struct_args.ident;

    let mut render_impls = vec![];
    let mut render_mut_impls = vec![];

    for parsed_field in parsed_fields {
        render_impls.push(parsed_field.render);
        render_mut_impls.push(parsed_field.render_mut);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_impl = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn impls(data: &Self, ui: &mut egui_binary_selector::egui::Ui, args: &egui_binary_selector::InspectArgs) {
                #(#render_impls)*
            }

            #[allow(unused_variables)]
            fn impls_mut(data: &mut Self, ui: &mut egui_binary_selector::egui::Ui, args: &egui_binary_selector::InspectArgs) -> bool {
                let mut _has_any_field_changed = false;
                #(#render_mut_impls)*
                _has_any_field_changed
            }
        }

        impl #impl_generics egui_binary_selector::Inspect<#struct_name #ty_generics> for #struct_name #ty_generics #where_clause {
            fn render(data: &Self, label: &'static str, ui: &mut egui_binary_selector::egui::Ui, args: &egui_binary_selector::InspectArgs) {
                let header = args.header.unwrap_or(true);
                let indent_children = args.indent_children.unwrap_or(true);

                if header {
                    egui_binary_selector::egui::CollapsingHeader::new(label).default_open(true).show(ui, |ui| {
                        Self::impls(data, ui, args);
                    });
                } else if indent_children {
                    ui.indent(label, |ui| Self::impls(data, ui, args));
                } else {
                    Self::impls(data, ui, args);
                }
            }

            fn render_mut(data: &mut Self, label: &'static str, ui: &mut egui_binary_selector::egui::Ui, args: &egui_binary_selector::InspectArgs) -> bool {
                let header = args.header.unwrap_or(true);
                let indent_children = args.indent_children.unwrap_or(true);

                let mut _has_any_field_changed = false;
                if header {
                    egui_binary_selector::egui::CollapsingHeader::new(label).default_open(true).show(ui, |ui| {
                        _has_any_field_changed = Self::impls_mut(data, ui, args);
                    });
                } else if indent_children {
                    ui.indent(label, |ui| {
                        _has_any_field_changed = Self::impls_mut(data, ui, args);
                    });
                } else {
                    _has_any_field_changed = Self::impls_mut(data, ui, args);
                }

                _has_any_field_changed
            }
        }
    };

    proc_macro::TokenStream::from(struct_impl)
}
