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

mod test_attr;

use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use syn::ItemFn;
extern crate proc_macro;

/// A proc macro attribute for writing catalog tests.
///
/// This macro extends the `#[tokio::test]` attribute. It builds a fresh
/// [`TestContext`] for the test, opens its catalog, creates a database for the
/// test if needed, and afterwards drops that database and closes the catalog,
/// also when the test panics.
///
/// By default, it requires the test function to have two parameters:
///
/// - `ctx: TestContext` - The test context which gives access to the catalog and its metastore.
/// - `database_name: String` - The name of the database to be used in the test.
///
/// ```no_run
/// use hive_catalog_common::test_context::TestContext;
/// #[hive_catalog_macros::test]
/// async fn my_test(ctx: TestContext, database_name: String) {
///    // Your test code here
/// }
/// ```
///
/// If the `no_database` argument is provided, the test function must have only one parameter:
///
/// - `ctx: TestContext` - The test context which gives access to the catalog and its metastore.
///
/// ```no_run
/// use hive_catalog_common::test_context::TestContext;
/// #[hive_catalog_macros::test(no_database)]
/// async fn my_test(ctx: TestContext) {
///    // Your test code here
/// }
///```
/// The macro also supports additional arguments:
///
/// - `flavor`: Specifies the flavor of the Tokio test (e.g., "multi_thread").
/// - `worker_threads`: Specifies the number of worker threads for the Tokio test.
/// - `database_name`: Specifies the name of the database to be used in the test. If not provided, a random name will be generated.
/// - `no_cleanup`: Leaves the database in place after the test.
///
/// [`TestContext`]: ../hive_catalog_common/test_context/struct.TestContext.html
#[proc_macro_attribute]
pub fn test(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    // Parse the function
    let input_fn = match syn::parse::<ItemFn>(input.clone()) {
        Ok(input_fn) => input_fn,
        Err(err) => return err.to_compile_error().into(),
    };

    // Parse the macro arguments
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(v) => v,
        Err(e) => return Error::from(e).write_errors().into(),
    };

    let args = match test_attr::MacroArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    if let Err(err) = args.validate(&input_fn) {
        return err;
    }

    match test_attr::expand_test_macro(args, input_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.into(),
    }
}
