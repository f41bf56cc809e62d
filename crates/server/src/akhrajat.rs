//! Akhrajat (expense line) API endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::ServerState,
    types::akhrajat::{
        AkhrajatNew, AkhrajatPayload, AkhrajatView, OtherTitleView, VehicleDetailPayload,
        VehicleDetailView,
    },
};
use engine::{AkhrajatInput, AkhrajatKind, VehicleDetailInput};

pub(crate) fn map_input(payload: &AkhrajatPayload) -> AkhrajatInput {
    AkhrajatInput {
        title: payload.title.clone(),
        description: payload.description.clone(),
        amount: payload.amount,
        date: payload.date,
        is_other: payload.is_other,
        other_title_id: payload.other_title_id,
        other_title: payload.other_title.clone(),
        vehicle_detail: payload.vehicle_detail.as_ref().map(map_detail_input),
    }
}

fn map_detail_input(payload: &VehicleDetailPayload) -> VehicleDetailInput {
    VehicleDetailInput {
        expense_type: payload.expense_type.clone(),
        quantity: payload.quantity,
        part: payload.part.clone(),
    }
}

pub(crate) fn view(line: engine::Akhrajat) -> AkhrajatView {
    let (is_vehicle_expense, is_other_expense, other_title, vehicle_detail) = match line.kind {
        AkhrajatKind::Plain => (false, false, None, None),
        AkhrajatKind::Vehicle { detail } => (
            true,
            false,
            None,
            detail.map(|detail| VehicleDetailView {
                expense_type: detail.expense_type.as_str().to_string(),
                quantity: detail.quantity,
                part: detail.part,
            }),
        ),
        AkhrajatKind::Other { title_id, title } => (
            false,
            true,
            Some(OtherTitleView {
                id: title_id,
                name: title,
            }),
            None,
        ),
    };

    AkhrajatView {
        id: line.id,
        transaction_id: line.transaction_id,
        title: line.title.as_str().to_string(),
        description: line.description,
        amount: line.amount,
        date: line.date,
        is_vehicle_expense,
        is_other_expense,
        other_title,
        vehicle_detail,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AkhrajatNew>,
) -> Result<(StatusCode, Json<AkhrajatView>), ServerError> {
    let line = state
        .engine
        .add_akhrajat(payload.transaction_id, map_input(&payload.payload))
        .await?;
    Ok((StatusCode::CREATED, Json(view(line))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AkhrajatPayload>,
) -> Result<Json<AkhrajatView>, ServerError> {
    let line = state.engine.update_akhrajat(id, map_input(&payload)).await?;
    Ok(Json(view(line)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.engine.remove_akhrajat(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
