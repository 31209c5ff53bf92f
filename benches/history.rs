// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use fossflow_state::model::{
    AnchorId, AnchorRef, Connector, ConnectorAnchor, ConnectorId, ItemId, ModelItem, Tile,
};
use fossflow_state::ops::ConnectorPatch;
use fossflow_state::{EngineConfig, Workspace};

// Benchmark identity (keep stable):
// - Group names in this file: `history.record`, `history.walk`, `bridge`
// - Case IDs must remain stable so results stay comparable over time.
fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn item_id(idx: usize) -> ItemId {
    ItemId::new(format!("bench_item_{idx:06}")).expect("item id")
}

/// A workspace holding `items` placed items chained by `items - 1` connectors.
fn populated_workspace(items: usize, history_limit: usize) -> Workspace {
    let mut workspace = Workspace::new(EngineConfig::default().with_history_limit(history_limit));
    for idx in 0..items {
        let tile = Tile::new((idx % 32) as i32 * 4, (idx / 32) as i32 * 4);
        workspace
            .add_item(ModelItem::new(item_id(idx), format!("Item {idx}")), tile)
            .expect("add item");
    }
    for idx in 1..items {
        workspace
            .create_connector(chain_connector(idx))
            .expect("create connector");
    }
    workspace
}

fn chain_connector(idx: usize) -> Connector {
    let anchor = |side: &str, item: ItemId| {
        ConnectorAnchor::new(
            AnchorId::new(format!("bench_anchor_{idx:06}_{side}")).expect("anchor id"),
            AnchorRef::item(item),
        )
    };
    Connector::new(
        ConnectorId::new(format!("bench_conn_{idx:06}")).expect("connector id"),
        vec![anchor("from", item_id(idx - 1)), anchor("to", item_id(idx))],
    )
}

fn checksum(workspace: &Workspace) -> u64 {
    let state = workspace.state();
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(state.model_items as u64);
    acc = acc.wrapping_mul(131).wrapping_add(state.scene_connectors as u64);
    acc = acc.wrapping_mul(131).wrapping_add(state.model_history.past as u64);
    acc = acc.wrapping_mul(131).wrapping_add(state.scene_history.past as u64);
    acc
}

fn benches_history(c: &mut Criterion) {
    let items = env_usize("FOSSFLOW_BENCH_ITEMS", 200).max(2);
    let depth = env_usize("FOSSFLOW_BENCH_DEPTH", 50).max(1);
    let template = populated_workspace(items, depth);

    let mut group = c.benchmark_group("history.record");
    group.throughput(Throughput::Elements(1));
    group.bench_function("add_item", |b| {
        b.iter_batched(
            || template.clone(),
            |mut workspace| {
                workspace
                    .add_item(ModelItem::new(item_id(items), "extra"), Tile::new(-4, -4))
                    .expect("add item");
                black_box(checksum(&workspace))
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("connector_create_update", |b| {
        b.iter_batched(
            || template.clone(),
            |mut workspace| {
                let connector = Connector::new(
                    ConnectorId::new("bench_conn_extra").expect("connector id"),
                    vec![
                        ConnectorAnchor::new(
                            AnchorId::new("bench_anchor_extra_from").expect("anchor id"),
                            AnchorRef::item(item_id(0)),
                        ),
                        ConnectorAnchor::new(
                            AnchorId::new("bench_anchor_extra_to").expect("anchor id"),
                            AnchorRef::tile(Tile::new(100, 100)),
                        ),
                    ],
                );
                let connector_id = connector.id.clone();
                workspace.create_connector(connector).expect("create");
                workspace
                    .update_connector(
                        connector_id,
                        ConnectorPatch {
                            show_arrow: Some(Some(true)),
                            ..ConnectorPatch::default()
                        },
                    )
                    .expect("update");
                black_box(checksum(&workspace))
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("history.walk");
    group.throughput(Throughput::Elements(depth as u64));
    group.bench_function("undo_redo_scene", |b| {
        b.iter_batched(
            || template.clone(),
            |mut workspace| {
                while workspace.undo_scene() {}
                while workspace.redo_scene() {}
                black_box(checksum(&workspace))
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("bridge");
    let json = template.export_json().expect("export json");
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("export_json", |b| {
        b.iter(|| black_box(template.export_json().expect("export json").len()))
    });
    group.bench_function("import_json", |b| {
        b.iter_batched(
            Workspace::default,
            |mut workspace| {
                workspace.import_json(black_box(&json)).expect("import json");
                black_box(checksum(&workspace))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, benches_history);
criterion_main!(benches);
