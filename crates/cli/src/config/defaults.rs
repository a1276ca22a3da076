// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Config file name looked up from the suite root.
pub const CONFIG_FILE: &str = "suitepack.toml";

/// Default source directories, relative to the suite root.
pub mod layout {
    /// Declarative `.wast` scripts (`core`).
    pub const CORE: &str = "core";

    /// Hand-written JS API tests (`js-api`).
    pub const JS_API: &str = "js-api";

    /// Browser-only JS tests (`html`).
    pub const HTML: &str = "html";

    /// Static harness assets (`harness`).
    pub const HARNESS: &str = "harness";
}

/// Default interpreter location, relative to the suite root.
pub const WASM_EXECUTABLE: &str = "../interpreter/wasm";
