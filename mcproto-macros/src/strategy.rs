//! Parsing of the `#[strategy(...)]` field attribute.
//!
//! Supports:
//! - Simple: `VarInt`, `VarLong`, `Exhaustive`
//! - Container: `Prefixed(VarInt)`, `Prefixed(VarInt, inner = VarInt)`
//! - Unprefixed: `Unprefixed`, `Unprefixed(inner = VarInt)`
//! - Scaled fixed point: `Scaled(wire = i32, factor = 8)`
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitInt, Token, Type};

#[derive(Debug, Clone)]
pub struct Strategy {
    pub name: Ident,
    /// For `Prefixed`: the prefix type (e.g. `VarInt`, `i16`).
    pub prefix_type: Option<Type>,
    /// For container strategies: how to read/write inner elements.
    pub inner: Option<Box<Strategy>>,
    /// For `Scaled`: the on-wire integer type.
    pub wire_type: Option<Type>,
    /// For `Scaled`: the scale factor.
    pub factor: Option<LitInt>,
}

impl Strategy {
    pub fn name_str(&self) -> String {
        self.name.to_string()
    }

    pub fn prefix_type_tokens(&self) -> Option<TokenStream> {
        self.prefix_type.as_ref().map(expand_known_type)
    }
}

/// Expands known bare identifiers (`VarInt`, `VarLong`) to their fully
/// qualified paths in `mcproto-utils`; anything else is used as written.
pub fn expand_known_type(ty: &Type) -> TokenStream {
    if let Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && type_path.path.segments.len() == 1
    {
        let segment = &type_path.path.segments[0];
        if segment.arguments.is_empty() {
            match segment.ident.to_string().as_str() {
                "VarInt" => return quote! { mcproto_utils::codec::VarInt },
                "VarLong" => return quote! { mcproto_utils::codec::VarLong },
                _ => {}
            }
        }
    }
    quote! { #ty }
}

impl Parse for Strategy {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;

        let mut prefix_type = None;
        let mut inner = None;
        let mut wire_type = None;
        let mut factor = None;

        if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);

            while !content.is_empty() {
                let is_kw = |kw: &str| {
                    let fork = content.fork();
                    matches!(fork.parse::<Ident>(), Ok(ident) if ident == kw) && {
                        let fork2 = content.fork();
                        let _ = fork2.parse::<Ident>();
                        fork2.peek(Token![=])
                    }
                };

                if is_kw("inner") {
                    content.parse::<Ident>()?;
                    content.parse::<Token![=]>()?;
                    inner = Some(Box::new(content.parse()?));
                } else if is_kw("wire") {
                    content.parse::<Ident>()?;
                    content.parse::<Token![=]>()?;
                    wire_type = Some(content.parse()?);
                } else if is_kw("factor") {
                    content.parse::<Ident>()?;
                    content.parse::<Token![=]>()?;
                    factor = Some(content.parse()?);
                } else {
                    prefix_type = Some(content.parse()?);
                }

                if content.peek(Token![,]) {
                    content.parse::<Token![,]>()?;
                }
            }
        }

        Ok(Strategy {
            name,
            prefix_type,
            inner,
            wire_type,
            factor,
        })
    }
}
