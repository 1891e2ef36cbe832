//! Defines the scurry runtime macros.

#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

extern crate proc_macro;

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn, ReturnType, Stmt};

/// Macro definition for the scurry runtime.
///
/// This macro should be used once only in a project.
/// This macro requires `tokio` as a dependency.
///
/// _Executes the entire function inside a multi-threaded tokio runtime and blocks until every task
/// dynamically spawned through `utils::task::run` (runner frame loops, staggered spawns) is done._
///
/// # Example
/// ```ignore
/// #[scurry_macros::runtime]
/// async fn main() {
///     // whatever
/// }
/// ```
#[proc_macro_attribute]
pub fn runtime(_: TokenStream, item: TokenStream) -> TokenStream {
    macro_inner(item, false)
}

/// Same as `#[scurry_macros::runtime]` but for tests.
#[proc_macro_attribute]
pub fn test(_: TokenStream, item: TokenStream) -> TokenStream {
    macro_inner(item, true)
}

fn macro_inner(item: TokenStream, test: bool) -> TokenStream {
    // Generated code always refers to the core crate as `scurry`: the crate's own unit tests
    // alias it with `extern crate self as scurry`, so the same path resolves everywhere
    // (unit tests, integration tests, doctests, downstream crates).
    let scurry: syn::Path = syn::parse_quote!(scurry);

    let input = parse_macro_input!(item as ItemFn);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    // Extract the block's statements.
    let mut stmts = block.stmts;

    // Check if the function has an explicit return type.
    let has_return_type = match &sig.output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => !matches!(&**ty, syn::Type::Tuple(tuple) if tuple.elems.is_empty()),
    };

    // Extract the last statement if it's an expression (potential return value).
    let return_expr = if has_return_type {
        match stmts.pop() {
            Some(Stmt::Expr(expr, ..)) => Some(expr),
            Some(stmt) => {
                stmts.push(stmt);
                None
            }
            None => None,
        }
    } else {
        None
    };

    // Define the #[tokio::main] / #[tokio::test] tokio macro attribute.
    let tokio_main_attr = match test {
        true => quote! { #[#scurry::utils::tokio::test] },
        false => quote! { #[#scurry::utils::tokio::main] },
    };

    // Generate the function body.
    let mut body = vec![quote! {
        // Insert custom code before the original function body.
        #scurry::utils::task::init_task_channel().await;
    }];

    // Insert the original function body statements.
    // A trailing null return "()" is removed from the body since the return
    // expression, if any, is re-emitted last.
    body.extend(stmts.into_iter().map(|stmt| match stmt {
        Stmt::Expr(ref exp, _) => match exp {
            syn::Expr::Tuple(tuple) if tuple.elems.is_empty() => quote!(),
            _ => quote! { #stmt },
        },
        _ => quote! { #stmt },
    }));

    // Insert custom code after the original function body.
    body.push(quote! {
        // Wait for all dynamically spawned tasks to complete.
        loop {
            let pending = {
                let cell = #scurry::utils::task::TASK_RX.get().expect("The scurry runtime is not initialized");
                let mut lock = cell.lock();
                match lock.as_mut() {
                    Some(receiver) => receiver.try_recv().ok(),
                    None => None,
                }
            };
            match pending {
                // We receive the task specific receiver, then the task result through it.
                Some(mut task_receiver) => {
                    if let Some(task_result) = task_receiver.recv().await {
                        match task_result {
                            #scurry::utils::task::TaskResult::Ok => {}
                            #scurry::utils::task::TaskResult::Err(err) => eprintln!("Task failed: {:?}", err.to_string()),
                        }
                    }
                }
                None => break,
            }
        }
    });

    // Add the return expression if there is one.
    if let Some(return_stmt) = return_expr {
        body.push(quote! { #return_stmt });
    }

    // Reconstruct the function with the modified block.
    let output = quote! {
        #tokio_main_attr
        #(#attrs)*
        #vis #sig {
            #(#body)*
        }
    };

    // Return the modified function as a TokenStream.
    output.into()
}
