//! Transactions API endpoints

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    ServerError, akhrajat,
    server::{Operator, ServerState},
    types::transaction::{
        DeleteQuery, DeletedResponse, TicketPreviewQuery, TicketPreviewView, TransactionListQuery,
        TransactionNew, TransactionUpdate, TransactionView, TrollyView,
    },
};
use engine::{CreateTransactionCmd, DeleteMode, TransactionFilter, UpdateTransactionCmd};

pub(crate) fn view(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        zone: tx.zone_name,
        sub_unit: tx.sub_unit_name,
        date: tx.date,
        book_number: tx.book_number,
        ticket_number: tx.ticket_number,
        gross_income: tx.gross_income,
        total_expense: tx.total_expense,
        net_income: tx.net_income,
        adjustment: tx.adjustment,
        final_balance: tx.final_balance,
        created_by: tx.created_by,
        synced: tx.synced,
        trolly: tx.trolly.map(|trolly| TrollyView {
            start_number: trolly.start_number,
            end_number: trolly.end_number,
            count: trolly.count,
        }),
        akhrajat: tx.akhrajat.into_iter().map(akhrajat::view).collect(),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Extension(operator): Extension<Operator>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let mut cmd = CreateTransactionCmd::new(
        payload.zone,
        payload.sub_unit,
        payload.date,
        payload.book_number,
        operator.0,
    )
    .trip(payload.start_number, payload.end_number, payload.count)
    .gross_income(payload.gross_income)
    .adjustment(payload.adjustment);
    for line in &payload.akhrajat {
        cmd = cmd.akhrajat(akhrajat::map_input(line));
    }

    let tx = state.engine.create_transaction(cmd).await?;
    Ok((StatusCode::CREATED, Json(view(tx))))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let filter = TransactionFilter {
        zone: query.zone,
        sub_unit: query.sub_unit,
        book_number: query.book_number,
        date_from: query.date_from,
        date_to: query.date_to,
        limit: query.limit,
    };
    let transactions = state.engine.list_transactions(&filter).await?;
    Ok(Json(transactions.into_iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.engine.transaction(id).await?;
    Ok(Json(view(tx)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TransactionUpdate>,
) -> Result<Json<TransactionView>, ServerError> {
    let mut cmd = UpdateTransactionCmd::new(id);
    if let Some(zone) = payload.zone {
        cmd = cmd.zone(zone);
    }
    if let Some(sub_unit) = payload.sub_unit {
        cmd = cmd.sub_unit(sub_unit);
    }
    if let Some(date) = payload.date {
        cmd = cmd.date(date);
    }
    if let Some(book_number) = payload.book_number {
        cmd = cmd.book_number(book_number);
    }
    if let Some(gross_income) = payload.gross_income {
        cmd = cmd.gross_income(gross_income);
    }
    if let Some(adjustment) = payload.adjustment {
        cmd = cmd.adjustment(adjustment);
    }

    let tx = state.engine.update_transaction(cmd).await?;
    Ok(Json(view(tx)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(operator): Extension<Operator>,
    Path(id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeletedResponse>, ServerError> {
    let mode = DeleteMode::try_from(query.mode.as_str())?;
    let deleted_ids = state
        .engine
        .delete_transaction(id, mode, &operator.0)
        .await?;
    Ok(Json(DeletedResponse { deleted_ids }))
}

pub async fn next_ticket(
    State(state): State<ServerState>,
    Query(query): Query<TicketPreviewQuery>,
) -> Result<Json<Option<TicketPreviewView>>, ServerError> {
    let preview = state.engine.next_ticket_preview(&query.sub_unit).await?;
    Ok(Json(preview.map(|preview| TicketPreviewView {
        book_number: preview.book_number,
        ticket_number: preview.ticket_number,
    })))
}
