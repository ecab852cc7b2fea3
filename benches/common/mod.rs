// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable workout generators for Criterion benchmarks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
