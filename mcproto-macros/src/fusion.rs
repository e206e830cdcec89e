//! Primitive-run fusion (`spec.md` §4.3): a contiguous run of plain,
//! unpredicated, fixed-width fields — including scaled fixed-point fields,
//! whose *wire* type is fixed-width even though their Rust type is `f64` —
//! is read or written as one length-checked byte-array operation instead
//! of N separate calls. Per-field post-transforms (`from_be_bytes`, the
//! scale divide/multiply, the bool `==1` check) are applied after the
//! batched transfer.
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Ident, LitInt, Type};

/// The wire type and scale factor of a `#[strategy(Scaled(wire = T, factor
/// = N))]` field eligible for fusion.
pub struct ScaleInfo<'a> {
    pub wire_type: &'a Type,
    pub factor: &'a LitInt,
}

/// One field eligible to be folded into a fused run.
pub struct FusableField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub scale: Option<ScaleInfo<'a>>,
}

/// Returns the byte width of a bare fixed-width wire type, `None` otherwise.
pub fn primitive_width(ty: &Type) -> Option<usize> {
    let Type::Path(path) = ty else { return None };
    if path.qself.is_some() || path.path.segments.len() != 1 {
        return None;
    }
    match path.path.segments[0].ident.to_string().as_str() {
        "bool" | "u8" | "i8" => Some(1),
        "u16" | "i16" => Some(2),
        "u32" | "i32" | "f32" => Some(4),
        "u64" | "i64" | "f64" => Some(8),
        _ => None,
    }
}

/// Byte width a field occupies on the wire: its own type if plain, its
/// wire type if scaled.
fn fusable_width(field: &FusableField<'_>) -> Option<usize> {
    match &field.scale {
        Some(info) => primitive_width(info.wire_type),
        None => primitive_width(field.ty),
    }
}

fn is_bool(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.path.is_ident("bool"))
}

/// Generates the `let field = ...;` bindings for one fused run, reading the
/// whole run with a single `read_exact`.
pub fn generate_fused_read(run: &[FusableField<'_>], run_index: usize) -> TokenStream {
    let total: usize = run.iter().map(|f| fusable_width(f).unwrap_or(0)).sum();
    let buf_ident = format_ident!("__fused_{run_index}", span = Span::call_site());

    let mut offset = 0usize;
    let mut extracts = Vec::with_capacity(run.len());
    for field in run {
        let width = fusable_width(field).unwrap_or(0);
        let ident = field.ident;
        let start = offset;
        let end = offset + width;
        offset = end;

        if let Some(scale) = &field.scale {
            let wire_ty = scale.wire_type;
            let factor = scale.factor;
            extracts.push(quote! {
                let #ident: f64 = {
                    let wire = <#wire_ty>::from_be_bytes(
                        #buf_ident[#start..#end].try_into().expect("fused run slice has the right width"),
                    );
                    f64::from(wire) / (#factor as f64)
                };
            });
        } else if is_bool(field.ty) {
            extracts.push(quote! {
                let #ident: bool = #buf_ident[#start] == 1;
            });
        } else {
            let ty = field.ty;
            extracts.push(quote! {
                let #ident: #ty = <#ty>::from_be_bytes(
                    #buf_ident[#start..#end].try_into().expect("fused run slice has the right width"),
                );
            });
        }
    }

    quote! {
        let #buf_ident: [u8; #total] = {
            let mut buf = [0u8; #total];
            std::io::Read::read_exact(data, &mut buf)
                .map_err(|_| mcproto_utils::ReadingError::CleanEof("fused primitive run".to_string()))?;
            buf
        };
        #(#extracts)*
    }
}

/// Generates the write-side statements for one fused run, writing the whole
/// run with a single `write_all`.
pub fn generate_fused_write(run: &[FusableField<'_>], run_index: usize) -> TokenStream {
    let total: usize = run.iter().map(|f| fusable_width(f).unwrap_or(0)).sum();
    let buf_ident = format_ident!("__fused_{run_index}", span = Span::call_site());

    let mut offset = 0usize;
    let mut inserts = Vec::with_capacity(run.len());
    for field in run {
        let width = fusable_width(field).unwrap_or(0);
        let ident = field.ident;
        let start = offset;
        let end = offset + width;
        offset = end;

        if let Some(scale) = &field.scale {
            let wire_ty = scale.wire_type;
            let factor = scale.factor;
            inserts.push(quote! {
                #buf_ident[#start..#end].copy_from_slice(
                    &((self.#ident * (#factor as f64)).trunc() as #wire_ty).to_be_bytes(),
                );
            });
        } else if is_bool(field.ty) {
            inserts.push(quote! {
                #buf_ident[#start] = u8::from(self.#ident);
            });
        } else {
            inserts.push(quote! {
                #buf_ident[#start..#end].copy_from_slice(&self.#ident.to_be_bytes());
            });
        }
    }

    quote! {
        let mut #buf_ident = [0u8; #total];
        #(#inserts)*
        writer.write_all(&#buf_ident).map_err(mcproto_utils::WritingError::Io)?;
    }
}
