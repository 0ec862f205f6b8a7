// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod download;
pub mod shell;
pub mod store;
pub mod traced;
pub mod transfer;
pub mod trigger;

pub use download::{DownloadAdapter, DownloadError, HttpDownloader};
pub use shell::{CommandTimeouts, ProcessAdapter, ShellAdapter, ShellCommand, ShellError, ShellOutput};
pub use store::{CommandStore, NoOpStoreAdapter, StoreAdapter, StoreError};
pub use traced::{
    TracedDownloadAdapter, TracedShellAdapter, TracedStoreAdapter, TracedTransferAdapter,
    TracedTriggerAdapter,
};
pub use transfer::{LocalTransfer, TransferAdapter, TransferError};
pub use trigger::{read_spooled, NoOpTriggerAdapter, SpoolTrigger, TriggerAdapter, TriggerError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use download::FakeDownloadAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use shell::{FakeShellAdapter, ShellCall};
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeStoreAdapter, StoreCall};
#[cfg(any(test, feature = "test-support"))]
pub use transfer::{FakeTransferAdapter, TransferCall};
#[cfg(any(test, feature = "test-support"))]
pub use trigger::FakeTriggerAdapter;
