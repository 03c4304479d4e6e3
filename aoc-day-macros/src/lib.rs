//! Procedural macros for the aoc-day library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Expr, Lit, LitInt, Path, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// `#[aoc_solver(...)]`:
/// - `max_parts`: Required. Number of parts; `PartSolver<1>..=PartSolver<max_parts>` must exist
/// - `examples`: Optional. Path to a `&'static [Example]` constant
/// - `input`: Optional. Path to a `&'static str` constant holding the bundled real input
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2, examples = EXAMPLES, input = INPUT)]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_aoc_solver(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver derive requires #[aoc_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    let mut examples: Option<Path> = None;
    let mut bundled_input: Option<Path> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("examples") {
            examples = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("input") {
            bundled_input = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("expected `max_parts`, `examples` or `input`"));
        }
        Ok(())
    })?;

    let max_parts = max_parts
        .filter(|&n| n > 0)
        .ok_or_else(|| syn::Error::new_spanned(attr, "`max_parts` must be a positive integer"))?;

    let arms = (1..=max_parts).map(|n| {
        quote! { #n => <Self as ::aoc_day::PartSolver<#n>>::solve(shared), }
    });

    let examples_const = examples.map(|path| {
        quote! { const EXAMPLES: &'static [::aoc_day::Example] = #path; }
    });
    let input_const = bundled_input.map(|path| {
        quote! { const INPUT: ::core::option::Option<&'static str> = ::core::option::Option::Some(#path); }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_day::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;
            #examples_const
            #input_const

            fn solve_part(
                shared: &mut <Self as ::aoc_day::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_day::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_day::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the inventory
/// system, allowing it to be discovered and registered automatically.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "regex"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not implemented,
/// you will get a compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 1, tags = ["lists"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_auto_register(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(year = .., day = ..)]")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            day = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let value: Expr = meta.value()?.parse()?;
            let Expr::Array(array) = value else {
                return Err(meta.error("`tags` must be an array of string literals"));
            };
            for elem in array.elems {
                match elem {
                    Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "expected a string literal")),
                }
            }
        } else {
            return Err(meta.error("expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `year`"))?;
    let day = day
        .filter(|d| (1..=25).contains(d))
        .ok_or_else(|| syn::Error::new_spanned(aoc_attr, "`day` must be between 1 and 25"))?;

    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        // Compile-time check that the type implements the Solver trait
        const _: () = {
            trait MustImplementSolver: ::aoc_day::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_day::inventory::submit! {
            ::aoc_day::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
