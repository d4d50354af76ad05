use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, LitStr, Visibility};

/// Derive `configtypes::ConfigStruct` (and `ConfigField`) for a struct with
/// named fields.
///
/// Only `pub` fields are described. Each may carry one annotation:
///
/// ```ignore
/// #[derive(Default, ConfigStruct)]
/// struct AppConfig {
///     #[conf("LOG_LEVEL")]
///     pub log_level: OptString,
///     #[conf("PORT,required")]
///     pub port: u16,
///     pub database: DatabaseConfig, // nested, walked when recursive
///     #[conf(skip)]
///     pub raw: Vec<u8>, // not described at all
/// }
/// ```
///
/// The annotation text is passed through unparsed, so a malformed option is
/// reported at runtime against the field it belongs to rather than failing
/// the build.
#[proc_macro_derive(ConfigStruct, attributes(conf))]
pub fn derive_config_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ConfigStruct can only be derived for structs",
        ));
    };

    let mut idents = Vec::new();
    let mut names = Vec::new();
    let mut tags = Vec::new();
    match &data.fields {
        Fields::Named(named) => {
            for field in &named.named {
                let attr = conf_attr(&field.attrs)?;
                if !matches!(field.vis, Visibility::Public(_)) {
                    continue;
                }
                let Some(ident) = &field.ident else {
                    continue;
                };
                let tag = match attr {
                    Some(ConfAttr::Skip) => continue,
                    Some(ConfAttr::Tag(tag)) => tag,
                    None => LitStr::new("", Span::call_site()),
                };
                names.push(LitStr::new(&ident.unraw().to_string(), Span::call_site()));
                tags.push(tag);
                idents.push(ident.clone());
            }
        }
        Fields::Unit => {}
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ConfigStruct requires named fields",
            ));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::configtypes::ConfigStruct for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::configtypes::Field<'_>> {
                ::std::vec![
                    #(::configtypes::FieldDescriptor::new(
                        #names,
                        #tags,
                        ::configtypes::ConfigField::slot(&self.#idents),
                    )),*
                ]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<::configtypes::FieldMut<'_>> {
                ::std::vec![
                    #(::configtypes::FieldDescriptor::new(
                        #names,
                        #tags,
                        ::configtypes::ConfigField::slot_mut(&mut self.#idents),
                    )),*
                ]
            }
        }

        impl #impl_generics ::configtypes::ConfigField for #name #ty_generics #where_clause {
            fn slot(&self) -> ::configtypes::Slot<'_> {
                ::configtypes::FieldSlot::Struct(self)
            }

            fn slot_mut(&mut self) -> ::configtypes::SlotMut<'_> {
                ::configtypes::FieldSlot::Struct(self)
            }

            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }
        }
    })
}

enum ConfAttr {
    Tag(LitStr),
    Skip,
}

/// `#[conf("...")]` or `#[conf(skip)]`, if present. More than one is an error.
fn conf_attr(attrs: &[Attribute]) -> syn::Result<Option<ConfAttr>> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("conf")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[conf] attribute"));
        }
        found = Some(attr.parse_args_with(|input: ParseStream| {
            if input.peek(LitStr) {
                return input.parse().map(ConfAttr::Tag);
            }
            let ident: Ident = input.parse()?;
            if ident == "skip" {
                Ok(ConfAttr::Skip)
            } else {
                Err(syn::Error::new_spanned(
                    ident,
                    r#"expected #[conf("NAME[,required]")] or #[conf(skip)]"#,
                ))
            }
        })?);
    }
    Ok(found)
}
