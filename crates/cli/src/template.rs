// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML wrapper documents and front-page script wrapping.

/// Asset prefix used by generated pages, relative to the page.
pub const HARNESS_PREFIX: &str = "./js/harness";

/// Script directory referenced by generated pages, relative to the page.
pub const SCRIPT_DIR: &str = "./js";

/// Call appended to every wrapped front-page test.
pub const REINITIALIZE_CALL: &str = "reinitializeRegistry();";

const HTML_HEADER: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="UTF-8">
        <title>WebAssembly Web Platform Test</title>
    </head>
    <body>

        <script src={PREFIX}/testharness.js></script>
        <script src={PREFIX}/testharnessreport.js></script>
        <script src={PREFIX}/index.js></script>
        <script src={PREFIX}/wasm-constants.js></script>
        <script src={PREFIX}/wasm-module-builder.js></script>

        <div id=log></div>
"#;

const HTML_FOOTER: &str = "
    </body>
</html>
";

/// Page header with harness scripts loaded from `prefix`.
pub fn header(prefix: &str) -> String {
    HTML_HEADER.replace("{PREFIX}", prefix)
}

/// Page footer.
pub fn footer() -> &'static str {
    HTML_FOOTER
}

/// An indented `<script>` tag, without a trailing newline.
pub fn script_tag(src: &str) -> String {
    format!("        <script src={src}></script>")
}

/// Page running a single test script.
pub fn single_test_page(prefix: &str, script_dir: &str, script: &str) -> String {
    let mut page = header(prefix);
    page.push_str(&script_tag(&format!("{script_dir}/{script}")));
    page.push_str(footer());
    page
}

/// Page running every script in order.
pub fn front_page<S: AsRef<str>>(prefix: &str, script_dir: &str, scripts: &[S]) -> String {
    let mut page = header(prefix);
    for script in scripts {
        page.push_str(&script_tag(&format!("{}/{}", script_dir, script.as_ref())));
        page.push('\n');
    }
    page.push_str(footer());
    page
}

/// Function name for a wrapped test: `.` and `-` become `_`.
pub fn test_function_name(file_name: &str) -> String {
    file_name.replace(['.', '-'], "_")
}

/// Wrap a test script so it runs in its own scope on a shared page.
///
/// Not idempotent: wrapping an already wrapped script nests it again.
pub fn wrap_test_function(file_name: &str, contents: &str) -> String {
    let mut wrapped = format!("(function {}() {{\n", test_function_name(file_name));
    wrapped.push_str(contents);
    if !contents.is_empty() && !contents.ends_with('\n') {
        wrapped.push('\n');
    }
    wrapped.push_str(REINITIALIZE_CALL);
    wrapped.push_str("\n})();\n");
    wrapped
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
