//! Zone and sub-unit API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::ServerState,
    types::zone::{Rename, SubUnitListQuery, SubUnitNew, SubUnitView, ZoneNew, ZoneView},
};

fn zone_view(zone: engine::Zone) -> ZoneView {
    ZoneView { name: zone.name }
}

fn sub_unit_view(sub_unit: engine::SubUnit) -> SubUnitView {
    SubUnitView {
        zone: sub_unit.zone_name,
        name: sub_unit.name,
    }
}

pub async fn zone_new(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneNew>,
) -> Result<(StatusCode, Json<ZoneView>), ServerError> {
    let zone = state.engine.create_zone(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(zone_view(zone))))
}

pub async fn zone_list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ZoneView>>, ServerError> {
    let zones = state.engine.zones().await?;
    Ok(Json(zones.into_iter().map(zone_view).collect()))
}

pub async fn zone_rename(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<Rename>,
) -> Result<Json<ZoneView>, ServerError> {
    let zone = state.engine.rename_zone(&name, &payload.new_name).await?;
    Ok(Json(zone_view(zone)))
}

pub async fn sub_unit_new(
    State(state): State<ServerState>,
    Json(payload): Json<SubUnitNew>,
) -> Result<(StatusCode, Json<SubUnitView>), ServerError> {
    let sub_unit = state
        .engine
        .create_sub_unit(&payload.zone, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(sub_unit_view(sub_unit))))
}

pub async fn sub_unit_list(
    State(state): State<ServerState>,
    Query(query): Query<SubUnitListQuery>,
) -> Result<Json<Vec<SubUnitView>>, ServerError> {
    let sub_units = state.engine.sub_units(query.zone.as_deref()).await?;
    Ok(Json(sub_units.into_iter().map(sub_unit_view).collect()))
}

pub async fn sub_unit_rename(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<Rename>,
) -> Result<Json<SubUnitView>, ServerError> {
    let sub_unit = state
        .engine
        .rename_sub_unit(&name, &payload.new_name)
        .await?;
    Ok(Json(sub_unit_view(sub_unit)))
}
