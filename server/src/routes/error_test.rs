use super::*;

#[test]
fn not_found_maps_to_404() {
    let err = ApiError::from(RepoError::NotFound { resource: "Vendor", id: 1 });
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.public_message(), "Vendor 1 not found");
}

#[test]
fn conflict_maps_to_409() {
    let err = ApiError::from(RepoError::Conflict("uq_items_code".into()));
    assert_eq!(err.status(), StatusCode::CONFLICT);
}

#[test]
fn reference_and_invalid_map_to_422() {
    assert_eq!(ApiError::from(RepoError::Reference("fk".into())).status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ApiError::from(RepoError::Invalid("ck".into())).status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ApiError::Unprocessable("bad payload".into()).status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn rejected_keeps_its_status() {
    let err = ApiError::Rejected { status: StatusCode::PAYLOAD_TOO_LARGE, message: "too big".into() };
    assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err.public_message(), "too big");
}

#[test]
fn server_errors_hide_details() {
    let err = ApiError::from(RepoError::Database(sqlx::Error::PoolTimedOut));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), "internal server error");

    let io = ApiError::from(std::io::Error::other("disk full"));
    assert_eq!(io.public_message(), "internal server error");
}

#[test]
fn unauthorized_maps_to_401() {
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
}
