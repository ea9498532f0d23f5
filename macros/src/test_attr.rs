// Hive Catalog Rust Library
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use darling::FromMeta;
use darling_core::Error;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{FnArg, ItemFn, ReturnType};
use uuid::Uuid;

#[derive(Debug, FromMeta)]
pub(crate) struct MacroArgs {
    flavor: Option<String>,
    worker_threads: Option<usize>,
    database_name: Option<String>,
    no_database: darling::util::Flag,
    no_cleanup: darling::util::Flag,
}

fn error_at<T: Spanned>(node: &T, msg: &str) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(Error::custom(msg).with_span(&node.span()).write_errors())
}

impl MacroArgs {
    pub(crate) fn validate(&self, func: &ItemFn) -> Result<(), proc_macro::TokenStream> {
        if self.no_database.is_present() && self.database_name.is_some() {
            return Err(error_at(
                &func.sig,
                "The `no_database` argument cannot be used with `database_name`",
            ));
        }

        if self.no_database.is_present() && func.sig.inputs.len() != 1 {
            return Err(error_at(
                &func.sig.inputs,
                "When using `no_database`, the test function must have exactly one argument: (ctx: TestContext)",
            ));
        }

        if func.sig.inputs.len() != 2 && !self.no_database.is_present() {
            return Err(error_at(
                &func.sig.inputs,
                "Catalog test function must have exactly two arguments: (ctx: TestContext, database_name: String)",
            ));
        }

        if let Some(name) = &self.database_name
            && (name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        {
            return Err(error_at(
                &func.sig,
                "`database_name` may only contain letters, digits and underscores",
            ));
        }

        let mut iter = func.sig.inputs.iter();

        if let Some(FnArg::Typed(pat_type)) = iter.next() {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("TestContext") {
                return Err(error_at(
                    pat_type,
                    "The first argument must be of type TestContext",
                ));
            }
        }

        if !self.no_database.is_present()
            && let Some(FnArg::Typed(pat_type)) = iter.next()
        {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("String") {
                return Err(error_at(
                    pat_type,
                    "The second argument must be of type String",
                ));
            }
        }

        Ok(())
    }
}

/// Expands the test macro into the final TokenStream
pub(crate) fn expand_test_macro(
    args: MacroArgs,
    mut func: ItemFn,
) -> Result<TokenStream, proc_macro::TokenStream> {
    let input_span = func.sig.paren_token.span.span();
    func.sig.output = ReturnType::Default;
    let old_inps = func.sig.inputs.clone();
    func.sig.inputs = Punctuated::default();
    let sig = func.sig.clone().into_token_stream();

    let header = generate_tokio_test_header(&args, sig);

    let test_function_block = func.block.clone().into_token_stream();

    let inner_inputs = quote_spanned!(input_span=> #old_inps);
    let inner_fn_name = create_inner_func_name(&func);
    let inner_header = quote_spanned!(func.sig.span()=> async fn #inner_fn_name(#inner_inputs));

    // The catalog is opened before the test body runs and closed afterwards,
    // also when the body panics.
    let prelude = quote!(
            use ::futures_util::FutureExt;
            use ::std::panic::AssertUnwindSafe;
            use ::hive_catalog::catalog::Catalog;

            let ctx = ::hive_catalog_common::test_context::TestContext::new_from_env();
            ctx.catalog.open().await.expect("Failed to open catalog");
            let catalog_clone = ctx.catalog.clone();
    );

    let outer_body = if args.no_database.is_present() {
        generate_no_database_body(prelude, inner_fn_name, func.block.span())
    } else {
        generate_with_database_body(prelude, inner_fn_name, &args, func.block.span())
    };

    let inner_impl = quote_spanned!(func.span()=>
        #inner_header
        #test_function_block
    );

    let mut out = TokenStream::new();
    out.extend(header);
    out.extend(outer_body);
    out.extend(inner_impl);

    Ok(out)
}

fn generate_tokio_test_header(args: &MacroArgs, sig: TokenStream) -> TokenStream {
    let flavor = args
        .flavor
        .as_ref()
        .map(ToString::to_string)
        .or(std::env::var("HIVE_TEST_TOKIO_RUNTIME_FLAVOR").ok());
    match (flavor, args.worker_threads) {
        (Some(flavor), None) => {
            quote!(#[::tokio::test(flavor = #flavor)]
            #sig
                )
        }
        (None, Some(worker_threads)) => {
            quote!(#[::tokio::test(worker_threads = #worker_threads)]
            #sig
                )
        }
        (None, None) => {
            quote!(#[::tokio::test]
            #sig
                )
        }
        (Some(flavor), Some(worker_threads)) => {
            quote!(#[::tokio::test(flavor = #flavor, worker_threads = #worker_threads)]
            #sig
                )
        }
    }
}

fn generate_close() -> TokenStream {
    quote! {
        if let Err(e) = catalog_clone.close().await {
            eprintln!("Error closing catalog '{}':\n{e}", catalog_clone.name());
        }
    }
}

fn generate_no_database_body(
    prelude: TokenStream,
    inner_fn_name: TokenStream,
    span: proc_macro2::Span,
) -> TokenStream {
    let close = generate_close();
    quote_spanned!(span=> {
        #prelude
        let res = AssertUnwindSafe(#inner_fn_name(ctx)).catch_unwind().await;
        #close
        if let Err(e) = res {
            ::std::panic::resume_unwind(e);
        }
    })
}

fn generate_with_database_body(
    prelude: TokenStream,
    inner_fn_name: TokenStream,
    args: &MacroArgs,
    span: proc_macro2::Span,
) -> TokenStream {
    let database_name = args
        .database_name
        .as_ref()
        .map(|d| d.to_token_stream())
        .unwrap_or_else(|| {
            let random_name = format!("test_db_{}", Uuid::new_v4().simple());
            proc_macro2::Literal::string(&random_name).into_token_stream()
        });
    let maybe_cleanup = if args.no_cleanup.is_present() {
        quote! {}
    } else {
        quote! {
            ::hive_catalog_common::cleanup_guard::cleanup(catalog_clone.clone(), database_name).await;
        }
    };
    let close = generate_close();
    quote_spanned!(span=> {
        #prelude

        let database_name = #database_name;
        ctx.catalog
            .create_database(
                database_name,
                ::hive_catalog::catalog::types::CatalogDatabase::default(),
                false,
            )
            .await
            .expect("Failed to create database");
        assert!(catalog_clone.database_exists(database_name).await.unwrap());
        let res = AssertUnwindSafe(#inner_fn_name(ctx, database_name.to_string())).catch_unwind().await;
        #maybe_cleanup
        #close
        if let Err(e) = res {
            ::std::panic::resume_unwind(e);
        }
    })
}

fn create_inner_func_name(func: &ItemFn) -> TokenStream {
    let inner_name = format!("{}_test_impl", func.sig.ident);
    let ident = proc_macro2::Ident::new(&inner_name, func.sig.span());
    quote! { #ident }
}
