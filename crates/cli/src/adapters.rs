// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter factory for CLI commands

use nb_adapters::{
    CommandStore, CommandTimeouts, HttpDownloader, LocalTransfer, NoOpStoreAdapter,
    NoOpTriggerAdapter, ProcessAdapter, SpoolTrigger, TracedDownloadAdapter, TracedShellAdapter,
    TracedStoreAdapter, TracedTransferAdapter, TracedTriggerAdapter,
};
use nb_config::Config;
use nb_engine::RuntimeDeps;

pub type Shell = TracedShellAdapter<ProcessAdapter>;
pub type Transfer = TracedTransferAdapter<LocalTransfer>;
pub type Download = TracedDownloadAdapter<HttpDownloader>;

/// Adapters that talk to the real object store and spool real triggers
pub type ProductionDeps = RuntimeDeps<
    Shell,
    TracedStoreAdapter<CommandStore<Shell>>,
    Transfer,
    Download,
    TracedTriggerAdapter<SpoolTrigger>,
>;

/// Adapters that build and test for real but publish nothing
pub type LocalDeps = RuntimeDeps<
    Shell,
    TracedStoreAdapter<NoOpStoreAdapter>,
    Transfer,
    Download,
    TracedTriggerAdapter<NoOpTriggerAdapter>,
>;

fn shell() -> Shell {
    TracedShellAdapter::new(ProcessAdapter::new())
}

pub fn production_deps(config: &Config) -> ProductionDeps {
    let timeouts = CommandTimeouts {
        silence: Some(config.timeouts.default_silence),
        max_time: None,
        grace: config.timeouts.sigterm_grace,
    };
    let store = CommandStore::new(shell(), config.storage.clone()).with_timeouts(timeouts);

    RuntimeDeps {
        shell: shell(),
        store: TracedStoreAdapter::new(store),
        transfer: TracedTransferAdapter::new(LocalTransfer::new()),
        download: TracedDownloadAdapter::new(HttpDownloader::new()),
        triggers: TracedTriggerAdapter::new(SpoolTrigger::new(config.triggers.spool_dir.clone())),
    }
}

pub fn local_deps() -> LocalDeps {
    RuntimeDeps {
        shell: shell(),
        store: TracedStoreAdapter::new(NoOpStoreAdapter::new()),
        transfer: TracedTransferAdapter::new(LocalTransfer::new()),
        download: TracedDownloadAdapter::new(HttpDownloader::new()),
        triggers: TracedTriggerAdapter::new(NoOpTriggerAdapter::new()),
    }
}
