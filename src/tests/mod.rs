//! In-process tests driving the full router through `tower::ServiceExt`.


mod api_tests;
