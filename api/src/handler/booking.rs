use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingIdResponse, BookingResponse, CreateBookingRequest, CreateBookingRequestWithUserId,
        UpdateBookingRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::event::UpdateBookingRoom,
    id::{BookingId, RoomId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// 現在の宿泊予約を返す
pub async fn show_current_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let enrollment = registry
        .enrollment_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("参加登録が見つかりませんでした。".into()))?;

    let ticket = registry
        .ticket_repository()
        .find_by_enrollment_id(enrollment.enrollment_id)
        .await?;
    if !ticket.is_some_and(|t| t.grants_hotel_stay()) {
        return Err(AppError::ForbiddenOperation(
            "宿泊予約が可能なチケットではありません。".into(),
        ));
    }

    registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?
        .map(BookingResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("宿泊予約が見つかりませんでした。".into()))
}

pub async fn book_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    // ストアへ触る前に入力を検証する
    req.validate(&())?;
    let room_id = RoomId::new(req.room_id);

    // ① 参加登録があること
    let enrollment = registry
        .enrollment_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("参加登録が見つかりませんでした。".into()))?;

    // ② 支払い済みの宿泊付き・現地参加チケットを持っていること
    let ticket = registry
        .ticket_repository()
        .find_by_enrollment_id(enrollment.enrollment_id)
        .await?;
    if !ticket.is_some_and(|t| t.grants_hotel_stay()) {
        return Err(AppError::ForbiddenOperation(
            "宿泊予約が可能なチケットではありません。".into(),
        ));
    }

    // ③ 指定された部屋が存在すること
    let room = registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("指定された部屋が見つかりませんでした。".into()))?;

    // ④ 部屋の占有数が定員未満であること
    let occupancy = registry.booking_repository().count_by_room_id(room_id).await?;
    if occupancy >= room.capacity as i64 {
        return Err(AppError::ForbiddenOperation(
            "満室のため予約できません。".into(),
        ));
    }

    // ⑤ すでに予約を持っていないこと
    if registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?
        .is_some()
    {
        return Err(AppError::ForbiddenOperation(
            "すでに宿泊予約があります。".into(),
        ));
    }

    let booking_id = registry
        .booking_repository()
        .create(CreateBookingRequestWithUserId::new(user.id(), req).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingIdResponse { booking_id }),
    ))
}

// 予約先の部屋を変更する
// パスの予約 ID は形式の検証にのみ使い、変更対象はユーザー自身の予約をユーザー ID から引く
pub async fn change_booking_room(
    user: AuthorizedUser,
    Path(_booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;
    let room_id = RoomId::new(req.room_id);

    let enrollment = registry
        .enrollment_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("参加登録が見つかりませんでした。".into()))?;

    let ticket = registry
        .ticket_repository()
        .find_by_enrollment_id(enrollment.enrollment_id)
        .await?;
    if !ticket.is_some_and(|t| t.grants_hotel_stay()) {
        return Err(AppError::ForbiddenOperation(
            "宿泊予約が可能なチケットではありません。".into(),
        ));
    }

    let room = registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("指定された部屋が見つかりませんでした。".into()))?;

    let occupancy = registry.booking_repository().count_by_room_id(room_id).await?;
    if occupancy >= room.capacity as i64 {
        return Err(AppError::ForbiddenOperation(
            "満室のため予約できません。".into(),
        ));
    }

    let booking = registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| {
            AppError::ForbiddenOperation("変更対象の宿泊予約がありません。".into())
        })?;

    let booking_id = registry
        .booking_repository()
        .update_room(UpdateBookingRoom::new(booking.booking_id, room_id))
        .await?;

    Ok(Json(BookingIdResponse { booking_id }))
}
