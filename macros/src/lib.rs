extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index};

/// Derives `seno_serialize::SenoSerialize`.
///
/// Structs encode their fields in declaration order. Fieldless enums encode
/// as a single discriminant byte and decode through `TryFrom<u8>`.
#[proc_macro_derive(SenoSerial)]
pub fn derive_seno_serial(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input);
    let name = input.ident;
    let (to_bytes, from_bytes) = match create_to_bytes(&name, input.data) {
        Ok(bodies) => bodies,
        Err(e) => return e.to_compile_error().into(),
    };
    let gen = quote! {
        impl seno_serialize::SenoSerialize for #name {
            fn to_bytes(&self) -> Vec<u8> {
                #to_bytes
            }
            fn from_bytes<T: AsRef<[u8]>>(bytes: &mut std::io::Cursor<T>) -> Result<Self, std::io::Error>
            where
                Self: Sized,
            {
                #from_bytes
            }
        }
    };
    gen.into()
}

fn create_to_bytes(
    name: &syn::Ident,
    data: Data,
) -> Result<(TokenStream2, TokenStream2), syn::Error> {
    match data {
        Data::Struct(s) => match s.fields {
            Fields::Named(ref fields) => {
                let to_bytes = fields.named.iter().map(|f| {
                    let name = &f.ident;
                    quote_spanned! {f.span()=>
                        bytes.extend(seno_serialize::SenoSerialize::to_bytes(&self.#name));
                    }
                });
                let names = fields.named.iter().map(|f| {
                    let name = &f.ident;
                    quote_spanned! {f.span()=>
                        let #name = seno_serialize::SenoSerialize::from_bytes(bytes)?;
                    }
                });
                let assign = fields.named.iter().map(|f| {
                    let name = &f.ident;
                    quote_spanned! {f.span()=>
                        #name,
                    }
                });
                Ok((
                    quote! {
                        let mut bytes = vec![];
                        #(#to_bytes)*
                        bytes
                    },
                    quote! {
                        #(#names)*
                        Ok(Self {
                            #(#assign)*
                        })
                    },
                ))
            }
            Fields::Unnamed(ref fields) => {
                let to_bytes = fields.unnamed.iter().enumerate().map(|(i, f)| {
                    let index = Index::from(i);
                    quote_spanned! {f.span()=>
                        bytes.extend(seno_serialize::SenoSerialize::to_bytes(&self.#index));
                    }
                });
                let values = fields.unnamed.iter().map(|f| {
                    quote_spanned! {f.span()=>
                        seno_serialize::SenoSerialize::from_bytes(bytes)?,
                    }
                });
                Ok((
                    quote! {
                        let mut bytes = vec![];
                        #(#to_bytes)*
                        bytes
                    },
                    quote! {
                        Ok(Self(
                            #(#values)*
                        ))
                    },
                ))
            }
            Fields::Unit => Err(syn::Error::new(
                name.span(),
                "SenoSerial cannot be derived for unit structs",
            )),
        },
        Data::Enum(e) => Ok((
            quote_spanned! {e.enum_token.span()=>
                vec![*self as u8]
            },
            quote_spanned! {e.enum_token.span()=>
                use std::io::Read;
                let mut enum_buf: [u8; 1] = [0; 1];
                bytes.read_exact(&mut enum_buf)?;
                Self::try_from(enum_buf[0]).map_err(|_| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Invalid {} discriminant: {}", stringify!(#name), enum_buf[0]),
                    )
                })
            },
        )),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span(),
            "SenoSerial cannot be derived for unions",
        )),
    }
}
