//! Procedural macros used by `tincture` to generate its color models.

use proc_macro::TokenStream;
use quote::quote;

fn error(message: &str) -> proc_macro2::TokenStream {
    quote! {
        compile_error!(#message);
    }
}

/// Generate a color model from a struct with three named fields of the same
/// type. The model gets the common derives, a `new` constructor, an array
/// accessor and a conversion from an array of its components. Attributes on
/// the struct are kept, so a model can add derives such as `Eq` and `Hash`
/// when its component type supports them.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return error("Models must have exactly 3 fields, one for each component of the color.")
            .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != 3 {
        return error("Model fields must be named.").into();
    }

    let ty = input.fields.iter().next().map(|f| f.ty.clone());
    let Some(ty) = ty else {
        return error("Models must have exactly 3 fields.").into();
    };
    if input.fields.iter().any(|f| f.ty != ty) {
        return error("All components of a model must have the same type.").into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color from its three components.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components in declaration order.
            pub fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl #impl_gen From<[#ty; 3]> for #struct_name #type_gen #where_clause {
            fn from(value: [#ty; 3]) -> Self {
                let [#field1, #field2, #field3] = value;
                Self::new(#field1, #field2, #field3)
            }
        }
    };

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #input
        #model_impl
    }
    .into()
}
