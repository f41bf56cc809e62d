//! Sync reconciliation API endpoints

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    ServerError, transactions,
    server::ServerState,
    types::sync::{AffectedResponse, IdBatch, PendingQuery, TombstoneView},
    types::transaction::TransactionView,
};

pub async fn tombstones(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TombstoneView>>, ServerError> {
    let tombstones = state.engine.tombstones().await?;
    Ok(Json(
        tombstones
            .into_iter()
            .map(|tombstone| TombstoneView {
                transaction_id: tombstone.transaction_id,
                deleted_at: tombstone.deleted_at,
                deleted_by: tombstone.deleted_by,
            })
            .collect(),
    ))
}

pub async fn acknowledge(
    State(state): State<ServerState>,
    Json(payload): Json<IdBatch>,
) -> Result<Json<AffectedResponse>, ServerError> {
    let affected = state.engine.acknowledge_tombstones(&payload.ids).await?;
    Ok(Json(AffectedResponse { affected }))
}

pub async fn pending(
    State(state): State<ServerState>,
    Query(query): Query<PendingQuery>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let pending = state.engine.pending_sync(query.limit).await?;
    Ok(Json(pending.into_iter().map(transactions::view).collect()))
}

pub async fn mark_synced(
    State(state): State<ServerState>,
    Json(payload): Json<IdBatch>,
) -> Result<Json<AffectedResponse>, ServerError> {
    let affected = state.engine.mark_synced(&payload.ids).await?;
    Ok(Json(AffectedResponse { affected }))
}
