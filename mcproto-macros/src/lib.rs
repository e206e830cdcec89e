//! Derive macros implementing the packet schema compiler described in the
//! specification: `#[derive(ReadFrom)]`/`#[derive(WriteTo)]` compile a
//! struct's field list into a reader/writer at build time, the way the
//! original's textual DSL was compiled at process startup — only the
//! binding moment changes. Adjacent unattributed fixed-width fields are
//! fused into a single batched read/write (primitive fusion); a field may
//! carry `#[strategy(...)]` to pick a non-default wire shape, and
//! `#[predicate = "expr"]` to gate its presence on earlier fields.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Ident, LitStr, Type, parse_macro_input};

mod fusion;
mod strategy;

use fusion::{FusableField, ScaleInfo, generate_fused_read, generate_fused_write, primitive_width};
use strategy::Strategy;

struct FieldAttrs {
    strategy: Option<Strategy>,
    bound: Option<syn::LitInt>,
    predicate: Option<Expr>,
}

/// Builds the fusable-run membership for a field, if it's eligible:
/// a plain unattributed fixed-width field, or a `Scaled` field whose wire
/// type is itself fixed-width. Predicated fields are never eligible — the
/// run closes as soon as presence depends on an earlier field.
fn fusable_field<'a>(f: &'a syn::Field, attrs: &'a FieldAttrs) -> Option<FusableField<'a>> {
    if attrs.predicate.is_some() {
        return None;
    }
    let ident = f.ident.as_ref().expect("named field");
    let ty = &f.ty;
    match &attrs.strategy {
        None => primitive_width(ty).is_some().then_some(FusableField { ident, ty, scale: None }),
        Some(strat) if strat.name_str() == "Scaled" => {
            let wire_type = strat.wire_type.as_ref()?;
            let factor = strat.factor.as_ref()?;
            primitive_width(wire_type).is_some().then_some(FusableField {
                ident,
                ty,
                scale: Some(ScaleInfo { wire_type, factor }),
            })
        }
        Some(_) => None,
    }
}

/// Extracts `T` from a predicated field's declared `Option<T>` type. The
/// generated read/write code operates on the bare `T` — `Option` here means
/// "present iff the predicate held", not an independent wire-level option.
fn option_inner_type(ty: &Type) -> &Type {
    if let Type::Path(path) = ty {
        if let Some(seg) = path.path.segments.last() {
            if seg.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return inner;
                    }
                }
            }
        }
    }
    panic!("#[predicate] fields must be declared `Option<T>`")
}

fn parse_field_attrs(f: &syn::Field) -> FieldAttrs {
    let mut strategy = None;
    let mut bound = None;
    let mut predicate = None;

    for attr in &f.attrs {
        if attr.path().is_ident("strategy") {
            strategy = Some(
                attr.parse_args::<Strategy>()
                    .unwrap_or_else(|e| panic!("malformed `#[strategy(...)]` attribute: {e}")),
            );
        } else if attr.path().is_ident("bound") {
            bound = Some(
                attr.parse_args::<syn::LitInt>()
                    .unwrap_or_else(|e| panic!("malformed `#[bound = N]` attribute: {e}")),
            );
        } else if attr.path().is_ident("predicate") {
            let lit: LitStr = attr
                .parse_args()
                .unwrap_or_else(|e| panic!("`#[predicate = \"...\"]` must be a string literal: {e}"));
            predicate = Some(
                lit.parse()
                    .unwrap_or_else(|e| panic!("predicate does not parse as a Rust expression: {e}")),
            );
        }
    }

    FieldAttrs {
        strategy,
        bound,
        predicate,
    }
}

fn generate_read_code(strategy: &Strategy, field_type: &Type, bound: Option<&syn::LitInt>) -> TokenStream2 {
    match strategy.name_str().as_str() {
        "VarInt" => quote! { mcproto_utils::codec::VarInt::read(data)?.0 as #field_type },
        "VarLong" => quote! { mcproto_utils::codec::VarLong::read(data)?.0 as #field_type },
        "Exhaustive" => quote! { mcproto_utils::codec::primitive::read_bytes_exhaustive(data)? },
        "Scaled" => {
            let wire = strategy
                .wire_type
                .as_ref()
                .unwrap_or_else(|| panic!("`Scaled` strategy requires `wire = ...`"));
            let factor = strategy
                .factor
                .as_ref()
                .unwrap_or_else(|| panic!("`Scaled` strategy requires `factor = ...`"));
            quote! {
                {
                    let wire = <#wire as mcproto_utils::serial::ReadFrom>::read(data)?;
                    f64::from(wire) / (#factor as f64)
                }
            }
        }
        "Prefixed" => {
            let prefix = strategy
                .prefix_type_tokens()
                .unwrap_or_else(|| quote! { mcproto_utils::codec::VarInt });

            if let Some(inner) = &strategy.inner {
                let inner_read = generate_read_code(inner, field_type, None);
                quote! {
                    {
                        let len: usize = #prefix::read(data)?.try_into()
                            .map_err(|_| mcproto_utils::ReadingError::Message("length prefix does not fit usize".into()))?;
                        let mut items = Vec::with_capacity(len.min(4096));
                        for _ in 0..len {
                            items.push(#inner_read);
                        }
                        items
                    }
                }
            } else if let Some(b) = bound {
                quote! {
                    {
                        use mcproto_utils::serial::PrefixedRead;
                        <#field_type>::read_prefixed_bound::<#prefix>(data, #b)?
                    }
                }
            } else {
                quote! {
                    {
                        use mcproto_utils::serial::PrefixedRead;
                        <#field_type>::read_prefixed::<#prefix>(data)?
                    }
                }
            }
        }
        "Unprefixed" => {
            if let Some(inner) = &strategy.inner {
                generate_read_code(inner, field_type, None)
            } else {
                quote! { <#field_type as mcproto_utils::serial::ReadFrom>::read(data)? }
            }
        }
        other => panic!(
            "unknown read strategy `{other}`; expected one of VarInt, VarLong, Prefixed, Unprefixed, Scaled, Exhaustive"
        ),
    }
}

fn generate_write_code(strategy: &Strategy, field_expr: &TokenStream2, bound: Option<&syn::LitInt>) -> TokenStream2 {
    match strategy.name_str().as_str() {
        "VarInt" => quote! { mcproto_utils::codec::VarInt(#field_expr as i32).write(writer)?; },
        "VarLong" => quote! { mcproto_utils::codec::VarLong(#field_expr as i64).write(writer)?; },
        "Exhaustive" => quote! { mcproto_utils::codec::primitive::write_bytes_exhaustive(&#field_expr, writer)?; },
        "Scaled" => {
            let wire = strategy
                .wire_type
                .as_ref()
                .unwrap_or_else(|| panic!("`Scaled` strategy requires `wire = ...`"));
            let factor = strategy
                .factor
                .as_ref()
                .unwrap_or_else(|| panic!("`Scaled` strategy requires `factor = ...`"));
            quote! {
                {
                    let wire = ((#field_expr) * (#factor as f64)).trunc() as #wire;
                    mcproto_utils::serial::WriteTo::write(&wire, writer)?;
                }
            }
        }
        "Prefixed" => {
            let prefix = strategy
                .prefix_type_tokens()
                .unwrap_or_else(|| quote! { mcproto_utils::codec::VarInt });

            if let Some(inner) = &strategy.inner {
                let item_expr = quote! { item };
                let inner_write = generate_write_code(inner, &item_expr, None);
                quote! {
                    {
                        #prefix::from(#field_expr.len()).write(writer)?;
                        for item in &#field_expr {
                            #inner_write
                        }
                    }
                }
            } else if let Some(b) = bound {
                quote! {
                    {
                        use mcproto_utils::serial::PrefixedWrite;
                        #field_expr.write_prefixed_bound::<#prefix>(writer, #b)?;
                    }
                }
            } else {
                quote! {
                    {
                        use mcproto_utils::serial::PrefixedWrite;
                        #field_expr.write_prefixed::<#prefix>(writer)?;
                    }
                }
            }
        }
        "Unprefixed" => {
            if let Some(inner) = &strategy.inner {
                generate_write_code(inner, field_expr, None)
            } else {
                quote! { mcproto_utils::serial::WriteTo::write(&#field_expr, writer)?; }
            }
        }
        other => panic!(
            "unknown write strategy `{other}`; expected one of VarInt, VarLong, Prefixed, Unprefixed, Scaled, Exhaustive"
        ),
    }
}

/// Derives `mcproto_utils::serial::ReadFrom` for a struct.
///
/// # Panics
/// - if used on a union, a tuple struct, or a malformed attribute.
#[proc_macro_derive(ReadFrom, attributes(strategy, bound, predicate))]
pub fn read_from_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    match input.data {
        Data::Struct(s) => read_from_struct(s, name),
        Data::Union(_) => panic!("ReadFrom can only be derived for structs"),
        Data::Enum(_) => panic!("ReadFrom on enums is not used by this codec; dispatch on id instead"),
    }
}

fn read_from_struct(s: syn::DataStruct, name: Ident) -> TokenStream {
    let Fields::Named(fields) = s.fields else {
        panic!("ReadFrom only supports structs with named fields");
    };

    let mut statements: Vec<TokenStream2> = Vec::new();
    let mut run: Vec<FusableField> = Vec::new();
    let mut run_index = 0usize;

    let flush_run = |run: &mut Vec<FusableField>, statements: &mut Vec<TokenStream2>, run_index: &mut usize| {
        if run.is_empty() {
            return;
        }
        if run.len() == 1 && run[0].scale.is_none() {
            let field = &run[0];
            let ident = field.ident;
            let ty = field.ty;
            statements.push(quote! {
                let #ident = <#ty as mcproto_utils::serial::ReadFrom>::read(data)?;
            });
        } else {
            statements.push(generate_fused_read(run, *run_index));
            *run_index += 1;
        }
        run.clear();
    };

    // field_attrs is kept alive for the whole loop so FusableField's
    // borrows of Strategy's wire/factor literals stay valid across pushes.
    let field_attrs: Vec<FieldAttrs> = fields.named.iter().map(parse_field_attrs).collect();

    for (f, attrs) in fields.named.iter().zip(&field_attrs) {
        let field_name = f.ident.as_ref().expect("named field");
        let field_type = &f.ty;

        if let Some(fusable) = fusable_field(f, attrs) {
            run.push(fusable);
            continue;
        }

        flush_run(&mut run, &mut statements, &mut run_index);

        if let Some(predicate) = &attrs.predicate {
            let inner_type = option_inner_type(field_type);
            let inner_read = if let Some(strat) = &attrs.strategy {
                generate_read_code(strat, inner_type, attrs.bound.as_ref())
            } else {
                quote! { <#inner_type as mcproto_utils::serial::ReadFrom>::read(data)? }
            };
            statements.push(quote! {
                let #field_name = if #predicate { Some(#inner_read) } else { None };
            });
        } else if let Some(strat) = &attrs.strategy {
            let read_code = generate_read_code(strat, field_type, attrs.bound.as_ref());
            statements.push(quote! {
                let #field_name = #read_code;
            });
        } else {
            statements.push(quote! {
                let #field_name = <#field_type as mcproto_utils::serial::ReadFrom>::read(data)?;
            });
        }
    }
    flush_run(&mut run, &mut statements, &mut run_index);

    let field_names = fields.named.iter().map(|f| f.ident.as_ref().expect("named field"));

    let expanded = quote! {
        #[automatically_derived]
        impl mcproto_utils::serial::ReadFrom for #name {
            fn read(data: &mut std::io::Cursor<&[u8]>) -> Result<Self, mcproto_utils::ReadingError> {
                #(#statements)*

                Ok(Self {
                    #(#field_names),*
                })
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derives `mcproto_utils::serial::WriteTo` for a struct.
///
/// # Panics
/// - if used on a union, a tuple struct, or a malformed attribute.
#[proc_macro_derive(WriteTo, attributes(strategy, bound, predicate))]
pub fn write_to_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    match input.data {
        Data::Struct(s) => write_to_struct(s, name),
        Data::Union(_) => panic!("WriteTo can only be derived for structs"),
        Data::Enum(_) => panic!("WriteTo on enums is not used by this codec; dispatch on id instead"),
    }
}

fn write_to_struct(s: syn::DataStruct, name: Ident) -> TokenStream {
    let Fields::Named(fields) = s.fields else {
        panic!("WriteTo only supports structs with named fields");
    };

    // Alias every plain fixed-width field by value up front so predicate
    // expressions on later fields can refer to earlier ones by bare name,
    // matching the read side's sequential `let` bindings.
    let aliases = fields.named.iter().filter_map(|f| {
        let ident = f.ident.as_ref()?;
        primitive_width(&f.ty).map(|_| quote! { let #ident = self.#ident; })
    });

    let mut statements: Vec<TokenStream2> = Vec::new();
    let mut run: Vec<FusableField> = Vec::new();
    let mut run_index = 0usize;

    let flush_run = |run: &mut Vec<FusableField>, statements: &mut Vec<TokenStream2>, run_index: &mut usize| {
        if run.is_empty() {
            return;
        }
        if run.len() == 1 && run[0].scale.is_none() {
            let ident = run[0].ident;
            statements.push(quote! {
                mcproto_utils::serial::WriteTo::write(&self.#ident, writer)?;
            });
        } else {
            statements.push(generate_fused_write(run, *run_index));
            *run_index += 1;
        }
        run.clear();
    };

    let field_attrs: Vec<FieldAttrs> = fields.named.iter().map(parse_field_attrs).collect();

    for (f, attrs) in fields.named.iter().zip(&field_attrs) {
        let field_name = f.ident.as_ref().expect("named field");
        let field_type = &f.ty;

        if let Some(fusable) = fusable_field(f, attrs) {
            run.push(fusable);
            continue;
        }

        flush_run(&mut run, &mut statements, &mut run_index);

        if let Some(predicate) = &attrs.predicate {
            let field_expr: TokenStream2 = quote! {
                self.#field_name.as_ref().expect("predicate true implies the field was provided")
            };
            let write_code = if let Some(strat) = &attrs.strategy {
                generate_write_code(strat, &field_expr, attrs.bound.as_ref())
            } else {
                quote! { mcproto_utils::serial::WriteTo::write(#field_expr, writer)?; }
            };
            statements.push(quote! {
                if #predicate {
                    #write_code
                }
            });
        } else if let Some(strat) = &attrs.strategy {
            let field_expr = quote! { self.#field_name };
            statements.push(generate_write_code(strat, &field_expr, attrs.bound.as_ref()));
        } else {
            statements.push(quote! {
                mcproto_utils::serial::WriteTo::write(&self.#field_name, writer)?;
            });
        }
    }
    flush_run(&mut run, &mut statements, &mut run_index);

    let expanded = quote! {
        #[automatically_derived]
        impl mcproto_utils::serial::WriteTo for #name {
            fn write(&self, writer: &mut impl std::io::Write) -> Result<(), mcproto_utils::WritingError> {
                #(#aliases)*
                #(#statements)*
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
